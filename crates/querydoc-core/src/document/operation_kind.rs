/// The kind of operation a [`Document`](crate::document::Document) performs.
/// Each kind has its own root object type in the schema.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Mutation,
    Query,
}
impl OperationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
