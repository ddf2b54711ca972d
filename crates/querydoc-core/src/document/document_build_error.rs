use crate::document::OperationKind;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DocumentBuildError {
    #[error(
        "Embedded type `{type_name}` contains itself, so its default selection \
        never ends",
    )]
    EmbeddedTypeCycle {
        type_name: String,
    },

    #[error("The schema does not define a root type for `{operation_kind}` operations")]
    UndefinedRootType {
        operation_kind: OperationKind,
    },

    #[error("Field `{field_name}` refers to object type `{type_name}`, which the schema does not define")]
    UndefinedObjectType {
        field_name: String,
        type_name: String,
    },
}
