#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TypeValidationError {
    #[error(
        "Embedded types refer to each other in a cycle, which would make their \
        default selection infinite: {}",
        .circular_field_path.join(" -> "),
    )]
    CircularEmbeddedTypeChain {
        circular_field_path: Vec<String>,
    },

    #[error("Argument `{parent_type_name}.{arg_name}` declares no candidate types")]
    EmptyCandidateTypes {
        arg_name: String,
        parent_type_name: String,
    },

    #[error(
        "Argument `{parent_type_name}.{arg_name}` refers to `{invalid_type_name}`, \
        which is not an input object type",
    )]
    InvalidInputRefToNonInputType {
        arg_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Field `{parent_type_name}.{field_name}` refers to `{invalid_type_name}`, \
        which is not an object type",
    )]
    InvalidOutputRefToNonObjectType {
        field_name: String,
        invalid_type_name: String,
        parent_type_name: String,
    },

    #[error("The `{operation}` root type `{type_name}` is not defined")]
    UndefinedRootType {
        operation: String,
        type_name: String,
    },

    #[error("`{referencing_type_name}` refers to undefined type `{undefined_type_name}`")]
    UndefinedTypeName {
        referencing_type_name: String,
        undefined_type_name: String,
    },

    #[error(
        "Argument `{parent_type_name}.{arg_name}` refers to unknown scalar \
        `{scalar_name}`",
    )]
    UnknownScalarType {
        arg_name: String,
        parent_type_name: String,
        scalar_name: String,
    },
}
