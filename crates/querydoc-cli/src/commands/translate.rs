use crate::file_reader;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use querydoc::document::Document;
use querydoc::document::OperationKind;
use querydoc::schema::SchemaIndex;
use serde_json::Value;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub(crate) enum DiagnosticsFormat {
    Json,
    #[default]
    Text,
}

#[derive(Debug, clap::Args)]
pub(crate) struct TranslateCmd {
    #[arg(
        default_value_t=DiagnosticsFormat::Text,
        help="How to print diagnostics when the selection is invalid.",
        long,
        value_enum,
    )]
    diagnostics_format: DiagnosticsFormat,

    #[arg(
        help="Build a mutation document instead of a query document.",
        long,
    )]
    mutation: bool,

    #[arg(
        help="Print the document without flattening `where` filters or \
             rewriting `orderBy` objects.",
        long,
    )]
    no_normalize: bool,

    #[arg(
        help="Path to the schema definition (JSON) file.",
        long,
        short='s',
    )]
    schema: PathBuf,

    #[arg(
        help="Name of the root operation field to select from.",
        name="ROOT_FIELD",
    )]
    root_field: String,

    #[arg(
        help="Path to a JSON file holding the selection. Read from stdin \
             when omitted.",
        name="SELECTION_FILE",
    )]
    selection_file: Option<PathBuf>,
}
impl TranslateCmd {
    fn load_schema(&self) -> anyhow::Result<SchemaIndex> {
        let content = file_reader::read_content(&self.schema)?;
        SchemaIndex::from_json_str(content)
            .with_context(|| format!("Failed to build schema from {:?}", self.schema))
    }

    /// An empty selection input requests the default selection.
    fn load_selection(&self) -> anyhow::Result<Value> {
        let content = match &self.selection_file {
            Some(selection_file) => file_reader::read_content(selection_file)?,
            None => file_reader::read_stdin()?,
        };
        if content.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&content).context("Failed to parse the selection as JSON")
    }

    fn operation_kind(&self) -> OperationKind {
        if self.mutation {
            OperationKind::Mutation
        } else {
            OperationKind::Query
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for TranslateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match self.load_schema() {
            Ok(schema) => schema,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };
        let selection = match self.load_selection() {
            Ok(selection) => selection,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        let document = match Document::build(
            &schema,
            self.operation_kind(),
            &self.root_field,
            &selection,
        ) {
            Ok(document) => document,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err}",
                output_utils::RED_X,
            )),
        };

        let diagnostics = document.validate();
        if !diagnostics.is_empty() {
            let diagnostics = diagnostics.normalize_paths(&self.root_field, &selection);
            return match self.diagnostics_format {
                DiagnosticsFormat::Text => CommandResult::stderr(format_args!(
                    "{} {diagnostics}",
                    output_utils::RED_X,
                )),
                DiagnosticsFormat::Json => match serde_json::to_string_pretty(&diagnostics) {
                    Ok(json) => CommandResult::stderr(format_args!("{json}")),
                    Err(err) => CommandResult::stderr(format_args!(
                        "{} Failed to encode diagnostics: {err}",
                        output_utils::RED_X,
                    )),
                },
            };
        }

        let document = if self.no_normalize {
            document
        } else {
            document.normalize()
        };
        log::debug!("Translated `{}` successfully.", self.root_field);
        CommandResult::stdout(format_args!("{document}"))
    }
}
