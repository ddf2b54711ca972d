use crate::document::Diagnostics;
use crate::document::DocumentBuildError;
use crate::document::Field;
use crate::document::OperationKind;
use crate::document::normalizer;
use crate::document::selection_walker::SelectionWalker;
use crate::schema::SchemaLookup;
use serde_json::Value;

/// A single operation built from a caller's selection: the operation kind
/// plus exactly one root [`Field`].
///
/// Documents are built per request against one schema snapshot, validated,
/// optionally normalized, serialized and then discarded:
///
/// ```
/// # use querydoc_core::document::Document;
/// # use querydoc_core::document::OperationKind;
/// # use querydoc_core::schema::SchemaIndex;
/// # use serde_json::json;
/// let schema = SchemaIndex::from_json_str(json!({
///     "objectTypes": [{
///         "name": "Query",
///         "fields": [{
///             "name": "findManyPost",
///             "outputType": { "kind": "object", "type": "Post", "isList": true },
///         }],
///     }, {
///         "name": "Post",
///         "fields": [
///             { "name": "id", "outputType": { "kind": "scalar", "type": "Int" } },
///             { "name": "title", "outputType": { "kind": "scalar", "type": "String" } },
///         ],
///     }],
/// }).to_string()).unwrap();
///
/// let document = Document::build(
///     &schema,
///     OperationKind::Query,
///     "findManyPost",
///     &json!({ "select": { "title": true } }),
/// ).unwrap();
///
/// assert!(document.validate().is_empty());
/// assert_eq!(
///     document.normalize().serialize(),
///     "query {\n  findManyPost {\n    title\n  }\n}",
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    operation_kind: OperationKind,
    root: Field,
}
impl Document {
    /// Builds the document for `root_field_name` of the given operation kind.
    ///
    /// Problems with the selection do not fail the build. They are recorded
    /// in the tree and reported by [`Document::validate()`]. The build only
    /// fails when the schema has no root type for `operation_kind`, or when
    /// the schema's object types cannot be resolved (a dangling reference, or
    /// an embedded type that contains itself).
    pub fn build(
        schema: &dyn SchemaLookup,
        operation_kind: OperationKind,
        root_field_name: &str,
        selection: &Value,
    ) -> Result<Self, DocumentBuildError> {
        let root_type = schema.root_type(operation_kind)
            .ok_or(DocumentBuildError::UndefinedRootType { operation_kind })?;

        let root = SelectionWalker::new(schema)
            .build_root(root_type, root_field_name, selection)?;
        log::debug!(
            "Built {operation_kind} document for `{root_field_name}` (valid: {}).",
            !root.has_invalid_subtree(),
        );

        Ok(Self {
            operation_kind,
            root,
        })
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    pub fn root(&self) -> &Field {
        &self.root
    }

    /// Collects every error recorded in the tree, each with its path from the
    /// root field.
    pub fn validate(&self) -> Diagnostics {
        if !self.root.has_invalid_subtree() {
            return Diagnostics::default();
        }
        let diagnostics = Diagnostics::collect(&self.root);
        log::debug!(
            "Found {} field error(s) and {} argument error(s) in `{}`.",
            diagnostics.field_errors.len(),
            diagnostics.arg_errors.len(),
            self.root.name(),
        );
        diagnostics
    }

    /// A copy of this document with `where` filters flattened and `orderBy`
    /// objects turned into enum literals. Only meaningful for documents
    /// without diagnostics.
    pub fn normalize(&self) -> Self {
        log::debug!("Normalizing document for `{}`.", self.root.name());
        Self {
            operation_kind: self.operation_kind,
            root: normalizer::normalize_field(&self.root),
        }
    }

    /// The wire text for this document. Same as its [`Display`](std::fmt::Display)
    /// output.
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}
