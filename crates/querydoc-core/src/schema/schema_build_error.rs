use crate::schema::TypeValidationError;
use std::sync::Arc;

#[derive(Clone, Debug, thiserror::Error)]
pub enum SchemaBuildError {
    #[error("Multiple definitions of the same type were found: `{type_name}`")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("Type names starting with `__` are reserved: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        type_name: String,
    },

    #[error("Error parsing schema definition: {0}")]
    ParseError(Arc<serde_json::Error>),

    #[error("The schema failed validation with {} error(s)", .0.len())]
    TypeValidationErrors(Vec<TypeValidationError>),
}
impl std::convert::From<serde_json::Error> for SchemaBuildError {
    fn from(value: serde_json::Error) -> Self {
        Self::ParseError(Arc::new(value))
    }
}
impl std::convert::From<Vec<TypeValidationError>> for SchemaBuildError {
    fn from(value: Vec<TypeValidationError>) -> Self {
        Self::TypeValidationErrors(value)
    }
}
