use crate::document::ExpectedFieldType;
use serde_json::Value;

/// Problems with the selection of a [`Field`](crate::document::Field).
#[derive(Clone, Debug, PartialEq, serde::Serialize, thiserror::Error)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldErrorKind {
    #[error("`include` must select at least one relation field")]
    EmptyInclude,

    #[error("`select` must select at least one field")]
    EmptySelect,

    #[error("`select` and `include` cannot be used on the same field; use one of them")]
    IncludeAndSelectConflict,

    #[error(
        "{}{}",
        invalid_field_name_message(
            .is_include,
            .is_include_scalar,
            .model_name,
            .provided_name,
        ),
        suggestion_suffix(.suggestion.as_deref()),
    )]
    #[serde(rename_all = "camelCase")]
    InvalidFieldName {
        is_include: bool,
        is_include_scalar: bool,
        model_name: String,
        provided_name: String,
        suggestion: Option<String>,
    },

    #[error(
        "Invalid value {provided_value} for field `{field_name}` on model \
        `{model_name}`: expected {expected}",
    )]
    #[serde(rename_all = "camelCase")]
    InvalidFieldType {
        expected: ExpectedFieldType,
        field_name: String,
        model_name: String,
        provided_value: Value,
    },

    #[error("`select` must set at least one field to `true`")]
    NoTruthySelect,
}

fn invalid_field_name_message(
    is_include: &bool,
    is_include_scalar: &bool,
    model_name: &str,
    provided_name: &str,
) -> String {
    if *is_include_scalar {
        format!(
            "Invalid `include` key `{provided_name}` on model `{model_name}`: \
            `{provided_name}` is not a relation field, so it is always selected \
            by default",
        )
    } else if *is_include {
        format!(
            "Unknown relation field `{provided_name}` in `include` on model \
            `{model_name}`",
        )
    } else {
        format!("Unknown field `{provided_name}` on model `{model_name}`")
    }
}

pub(crate) fn suggestion_suffix(suggestion: Option<&str>) -> String {
    match suggestion {
        Some(suggestion) => format!(". Did you mean `{suggestion}`?"),
        None => String::new(),
    }
}
