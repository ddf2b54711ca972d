mod arg;
mod arg_error_kind;
mod arg_value;
mod args;
mod argument_resolver;
mod diagnostics;
#[allow(clippy::module_inception)]
mod document;
mod document_build_error;
mod expected_field_type;
mod field;
mod field_error_kind;
mod input_role;
mod normalizer;
mod operation_kind;
mod selection_key;
mod selection_walker;
mod serializer;

pub use arg::Arg;
pub use arg_error_kind::ArgErrorKind;
pub use arg_value::ArgValue;
pub use args::Args;
pub use diagnostics::ArgError;
pub use diagnostics::Diagnostics;
pub use diagnostics::FieldError;
pub use diagnostics::PathSegment;
pub use document::Document;
pub use document_build_error::DocumentBuildError;
pub use expected_field_type::ExpectedFieldType;
pub use field::Field;
pub use field_error_kind::FieldErrorKind;
pub use input_role::InputRole;
pub use operation_kind::OperationKind;
pub use selection_key::SelectionKey;

#[cfg(test)]
mod tests;
