use crate::document::OperationKind;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaDefinition;
use crate::schema::SchemaIndexBuilder;
use crate::schema::SchemaLookup;
use crate::types::EnumType;
use crate::types::InputType;
use crate::types::ObjectType;
use crate::types::SchemaField;
use indexmap::IndexMap;
use inherent::inherent;

/// A validated, read-only index of every type in a schema.
///
/// Types refer to each other by name (see
/// [`NamedRef`](crate::named_ref::NamedRef)), so the index may describe a
/// cyclic type graph while owning each type exactly once. A [`SchemaIndex`]
/// can only be produced by [`SchemaIndexBuilder`], which guarantees that all
/// of those names resolve.
///
/// A [`SchemaIndex`] is immutable and can be shared across threads by any
/// number of concurrent document builds.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaIndex {
    pub(super) enum_types: IndexMap<String, EnumType>,
    pub(super) input_types: IndexMap<String, InputType>,
    pub(super) mutation_type_name: Option<String>,
    pub(super) object_types: IndexMap<String, ObjectType>,
    pub(super) query_type_name: String,
}
impl SchemaIndex {
    /// Convenience wrapper around [`SchemaIndexBuilder::new()`].
    pub fn builder() -> SchemaIndexBuilder {
        SchemaIndexBuilder::new()
    }

    pub fn from_definition(
        definition: SchemaDefinition,
    ) -> Result<Self, SchemaBuildError> {
        SchemaIndexBuilder::from_definition(definition)?.build()
    }

    /// Parse a JSON-encoded [`SchemaDefinition`] and build it.
    pub fn from_json_str(
        content: impl AsRef<str>,
    ) -> Result<Self, SchemaBuildError> {
        let definition: SchemaDefinition =
            serde_json::from_str(content.as_ref())?;
        Self::from_definition(definition)
    }

    pub fn enum_types(&self) -> impl Iterator<Item = &EnumType> {
        self.enum_types.values()
    }

    pub fn input_types(&self) -> impl Iterator<Item = &InputType> {
        self.input_types.values()
    }

    pub fn object_types(&self) -> impl Iterator<Item = &ObjectType> {
        self.object_types.values()
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type_name.as_str()
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type_name.as_deref()
    }

    /// The total number of named types (object, input and enum) defined.
    pub fn defined_type_count(&self) -> usize {
        self.object_types.len() + self.input_types.len() + self.enum_types.len()
    }
}

#[inherent]
impl SchemaLookup for SchemaIndex {
    pub fn lookup_object_type(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> Option<&ObjectType> {
        self.object_types.get(&type_key(name, namespace))
    }

    pub fn lookup_input_type(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> Option<&InputType> {
        self.input_types.get(&type_key(name, namespace))
    }

    pub fn lookup_enum(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> Option<&EnumType> {
        self.enum_types.get(&type_key(name, namespace))
    }

    pub fn root_type(&self, operation_kind: OperationKind) -> Option<&ObjectType> {
        let type_name = match operation_kind {
            OperationKind::Query => self.query_type_name.as_str(),
            OperationKind::Mutation => self.mutation_type_name.as_deref()?,
        };
        self.object_types.get(type_name)
    }

    pub fn root_field(
        &self,
        operation_kind: OperationKind,
        name: &str,
    ) -> Option<&SchemaField> {
        self.root_type(operation_kind)?.field(name)
    }
}

/// Types from different namespaces may share a name, so every type is keyed
/// by its namespace-qualified name.
pub(super) fn type_key(name: &str, namespace: Option<&str>) -> String {
    match namespace {
        Some(namespace) => format!("{namespace}.{name}"),
        None => name.to_string(),
    }
}
