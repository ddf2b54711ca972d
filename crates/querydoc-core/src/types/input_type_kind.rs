/// The closed set of shapes an argument value can be matched against. One
/// [`SchemaArg`](crate::types::SchemaArg) may accept several of these at once
/// (see [`InputTypeRef`](crate::types::InputTypeRef)).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InputTypeKind {
    Enum,
    InputObject,
    Null,
    Scalar,
}
impl InputTypeKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum => "Enum",
            Self::InputObject => "InputObject",
            Self::Null => "Null",
            Self::Scalar => "Scalar",
        }
    }

    /// Whether a value of this kind is written as an object (or a list of
    /// objects) rather than as a literal.
    pub fn is_object_like(&self) -> bool {
        matches!(self, Self::InputObject)
    }
}
