/// What a selection value was expected to be when it was rejected with
/// [`FieldErrorKind::InvalidFieldType`](crate::document::FieldErrorKind::InvalidFieldType).
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub enum ExpectedFieldType {
    Boolean,
    BooleanOrObject,
}
impl std::fmt::Display for ExpectedFieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean => f.write_str("`true` or `false`"),
            Self::BooleanOrObject => f.write_str("`true`, `false` or an object"),
        }
    }
}
