/// Similar to [`OutputTypeRef`](crate::types::OutputTypeRef) except without the
/// corresponding type metadata.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputTypeKind {
    Enum,
    Object,
    Scalar,
}
impl OutputTypeKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum => "Enum",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
        }
    }
}
