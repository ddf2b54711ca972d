use crate::document::OperationKind;
use crate::types::EnumType;
use crate::types::InputType;
use crate::types::ObjectType;
use crate::types::SchemaField;

/// The read-only query contract the document builder needs from a schema.
///
/// [`SchemaIndex`](crate::schema::SchemaIndex) is the implementation provided
/// by this crate, but any linked schema representation can be plugged in.
pub trait SchemaLookup {
    fn lookup_object_type(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> Option<&ObjectType>;

    fn lookup_input_type(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> Option<&InputType>;

    fn lookup_enum(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> Option<&EnumType>;

    /// The root object type for the given kind of operation (e.g. `Query`).
    fn root_type(&self, operation_kind: OperationKind) -> Option<&ObjectType>;

    fn root_field(
        &self,
        operation_kind: OperationKind,
        name: &str,
    ) -> Option<&SchemaField> {
        self.root_type(operation_kind)?.field(name)
    }
}
