use crate::schema::SchemaBuildError;
use crate::schema::SchemaDefinition;
use crate::schema::SchemaIndex;
use crate::schema::schema_index::type_key;
use crate::schema::type_validator::TypeValidator;
use crate::types::EnumType;
use crate::types::InputType;
use crate::types::ObjectType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Collects type definitions and validates them as a whole when
/// [`SchemaIndexBuilder::build()`] is called.
#[derive(Debug, Default)]
pub struct SchemaIndexBuilder {
    enum_types: IndexMap<String, EnumType>,
    input_types: IndexMap<String, InputType>,
    mutation_type_name: Option<String>,
    object_types: IndexMap<String, ObjectType>,
    query_type_name: Option<String>,
}
impl SchemaIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_definition(definition: SchemaDefinition) -> Result<Self> {
        let mut builder = Self::new();
        builder.set_query_type(definition.query_type);
        if let Some(mutation_type) = definition.mutation_type {
            builder.set_mutation_type(mutation_type);
        }
        for object_type in definition.object_types {
            builder.add_object_type(object_type)?;
        }
        for input_type in definition.input_types {
            builder.add_input_type(input_type)?;
        }
        for enum_type in definition.enum_types {
            builder.add_enum_type(enum_type)?;
        }
        Ok(builder)
    }

    pub fn add_enum_type(&mut self, enum_type: EnumType) -> Result<&mut Self> {
        let key = self.check_new_type_name(
            enum_type.name(),
            enum_type.namespace(),
        )?;
        self.enum_types.insert(key, enum_type);
        Ok(self)
    }

    pub fn add_input_type(&mut self, input_type: InputType) -> Result<&mut Self> {
        let key = self.check_new_type_name(
            input_type.name(),
            input_type.namespace(),
        )?;
        self.input_types.insert(key, input_type);
        Ok(self)
    }

    pub fn add_object_type(&mut self, object_type: ObjectType) -> Result<&mut Self> {
        let key = self.check_new_type_name(
            object_type.name(),
            object_type.namespace(),
        )?;
        self.object_types.insert(key, object_type);
        Ok(self)
    }

    /// Name of the object type holding the query root fields. Defaults to
    /// `Query`.
    pub fn set_query_type(&mut self, type_name: impl AsRef<str>) -> &mut Self {
        self.query_type_name = Some(type_name.as_ref().to_string());
        self
    }

    pub fn set_mutation_type(&mut self, type_name: impl AsRef<str>) -> &mut Self {
        self.mutation_type_name = Some(type_name.as_ref().to_string());
        self
    }

    /// Validate every type reference in the collected types and produce the
    /// [`SchemaIndex`]. All validation errors are reported together.
    pub fn build(self) -> Result<SchemaIndex> {
        let index = SchemaIndex {
            enum_types: self.enum_types,
            input_types: self.input_types,
            mutation_type_name: self.mutation_type_name,
            object_types: self.object_types,
            query_type_name:
                self.query_type_name.unwrap_or_else(|| "Query".to_string()),
        };

        let errors = TypeValidator::new(&index).validate();
        if !errors.is_empty() {
            return Err(errors.into());
        }

        log::debug!(
            "Built schema index with {} object types, {} input types and {} \
            enum types.",
            index.object_types.len(),
            index.input_types.len(),
            index.enum_types.len(),
        );
        Ok(index)
    }

    fn check_new_type_name(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<String> {
        if name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                type_name: name.to_string(),
            });
        }

        let key = type_key(name, namespace);
        if self.object_types.contains_key(&key)
            || self.input_types.contains_key(&key)
            || self.enum_types.contains_key(&key) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: key,
            });
        }
        Ok(key)
    }
}
