mod schema_build_error;
mod schema_definition;
mod schema_index;
mod schema_index_builder;
mod schema_lookup;
mod type_validation_error;
mod type_validator;

pub use schema_build_error::SchemaBuildError;
pub use schema_definition::SchemaDefinition;
pub use schema_index::SchemaIndex;
pub use schema_index_builder::SchemaIndexBuilder;
pub use schema_lookup::SchemaLookup;
pub use type_validation_error::TypeValidationError;

#[cfg(test)]
mod tests;
