use crate::types::OutputTypeKind;
use crate::types::OutputTypeRef;
use crate::types::SchemaArg;

/// A field declared on an [`ObjectType`](crate::types::ObjectType).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    pub(crate) name: String,
    pub(crate) output_type: OutputTypeRef,
    #[serde(default)]
    pub(crate) args: Vec<SchemaArg>,
}
impl SchemaField {
    pub fn new(name: impl AsRef<str>, output_type: OutputTypeRef) -> Self {
        Self {
            name: name.as_ref().to_string(),
            output_type,
            args: vec![],
        }
    }

    pub fn with_args(mut self, args: Vec<SchemaArg>) -> Self {
        self.args = args;
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn output_type(&self) -> &OutputTypeRef {
        &self.output_type
    }

    pub fn args(&self) -> &[SchemaArg] {
        &self.args
    }

    /// Relation fields point at another object type and carry a nested
    /// selection.
    pub fn is_relation(&self) -> bool {
        self.output_type.kind() == OutputTypeKind::Object
    }
}
