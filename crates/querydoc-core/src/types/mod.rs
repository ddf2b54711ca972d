mod enum_type;
mod input_type;
mod input_type_kind;
mod input_type_ref;
mod object_type;
mod output_type_kind;
mod output_type_ref;
mod provided_type;
mod scalar_kind;
mod schema_arg;
mod schema_field;

pub use enum_type::EnumType;
pub use input_type::InputType;
pub use input_type_kind::InputTypeKind;
pub use input_type_ref::InputTypeRef;
pub use object_type::ObjectType;
pub use output_type_kind::OutputTypeKind;
pub use output_type_ref::OutputTypeRef;
pub use provided_type::ProvidedType;
pub use scalar_kind::ScalarKind;
pub use schema_arg::SchemaArg;
pub use schema_field::SchemaField;

#[cfg(test)]
mod tests;
