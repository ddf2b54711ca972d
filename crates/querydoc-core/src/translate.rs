use crate::document::Diagnostics;
use crate::document::Document;
use crate::document::DocumentBuildError;
use crate::document::OperationKind;
use crate::schema::SchemaLookup;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TranslateError {
    #[error(transparent)]
    DocumentBuildError(#[from] DocumentBuildError),

    #[error("{0}")]
    InvalidSelection(Diagnostics),
}

/// Builds, validates, normalizes and serializes the document for
/// `root_field_name` in one step.
///
/// Diagnostics paths are normalized against `selection` (see
/// [`Diagnostics::normalize_paths()`]).
pub fn translate(
    schema: &dyn SchemaLookup,
    operation_kind: OperationKind,
    root_field_name: &str,
    selection: &Value,
) -> Result<String, TranslateError> {
    let document = Document::build(schema, operation_kind, root_field_name, selection)?;
    let diagnostics = document.validate();
    if !diagnostics.is_empty() {
        return Err(TranslateError::InvalidSelection(
            diagnostics.normalize_paths(root_field_name, selection),
        ));
    }
    Ok(document.normalize().serialize())
}
