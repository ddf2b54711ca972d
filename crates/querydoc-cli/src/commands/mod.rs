mod check_schema;
mod translate;

use crate::Cli;
use crate::CommandResult;
use check_schema::CheckSchemaCmd;
use translate::TranslateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "querydoc")]
pub(crate) enum CommandEnum {
    /// Load and validate one or more schema definition files.
    CheckSchema(Box<CheckSchemaCmd>),

    /// Turn a JSON selection into query document text.
    Translate(Box<TranslateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::CheckSchema(cmd) => cmd.run(cli).await,
            Self::Translate(cmd) => cmd.run(cli).await,
        }
    }
}
