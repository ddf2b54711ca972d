use crate::types::InputTypeRef;

/// An argument declared on a [`SchemaField`](crate::types::SchemaField) or a
/// field declared on an [`InputType`](crate::types::InputType).
///
/// `candidate_types` is a union: the same argument name may legally accept a
/// scalar literal, an enum value, a filter object, `null`, or lists thereof.
/// Candidates are tried in declaration order.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaArg {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) is_required: bool,
    #[serde(default)]
    pub(crate) is_relation_filter: bool,
    pub(crate) candidate_types: Vec<InputTypeRef>,
}
impl SchemaArg {
    pub fn new(
        name: impl AsRef<str>,
        candidate_types: Vec<InputTypeRef>,
    ) -> Self {
        Self {
            name: name.as_ref().to_string(),
            is_required: false,
            is_relation_filter: false,
            candidate_types,
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn relation_filter(mut self) -> Self {
        self.is_relation_filter = true;
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    /// Relation filters (e.g. `author: { is: { ... } }`) keep their nested
    /// shape when `where` arguments are flattened.
    pub fn is_relation_filter(&self) -> bool {
        self.is_relation_filter
    }

    pub fn candidate_types(&self) -> &[InputTypeRef] {
        &self.candidate_types
    }
}
