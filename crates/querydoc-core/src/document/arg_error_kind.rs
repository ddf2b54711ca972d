use crate::document::field_error_kind::suggestion_suffix;
use crate::types::InputTypeRef;
use crate::types::ProvidedType;
use serde_json::Value;

/// Problems with an [`Arg`](crate::document::Arg).
#[derive(Clone, Debug, PartialEq, serde::Serialize, thiserror::Error)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ArgErrorKind {
    #[error("`{input_type}` requires at least one field to be provided")]
    #[serde(rename_all = "camelCase")]
    AtLeastOneRequired {
        input_type: String,
    },

    #[error(
        "`{input_type}` accepts at most one field, but {} were provided: {}",
        .provided_keys.len(),
        .provided_keys.join(", "),
    )]
    #[serde(rename_all = "camelCase")]
    AtMostOneRequired {
        input_type: String,
        provided_keys: Vec<String>,
    },

    #[error(
        "Unknown argument `{provided_name}`{}",
        invalid_arg_name_suffix(.did_you_mean_field, .suggestion.as_deref()),
    )]
    #[serde(rename_all = "camelCase")]
    InvalidArgName {
        /// The argument is really a field of the selected model that was not
        /// nested under `select`.
        did_you_mean_field: bool,
        provided_name: String,
        provided_value: Value,
        suggestion: Option<String>,
    },

    #[error(
        "Argument value {provided_value} of type {provided_type} does not match \
        any accepted type: {}",
        candidate_list(.all_candidates),
    )]
    #[serde(rename_all = "camelCase")]
    InvalidArgType {
        all_candidates: Vec<InputTypeRef>,
        best_candidate: Option<InputTypeRef>,
        provided_type: ProvidedType,
        provided_value: Value,
    },

    #[error(
        "Argument `{name}` is missing{}; expected {}",
        optional_marker(.required),
        candidate_list(.candidate_types),
    )]
    #[serde(rename_all = "camelCase")]
    MissingRequiredArg {
        candidate_types: Vec<InputTypeRef>,
        name: String,
        required: bool,
    },
}

fn invalid_arg_name_suffix(
    did_you_mean_field: &bool,
    suggestion: Option<&str>,
) -> String {
    if *did_you_mean_field {
        ". Did you mean to select it as a field with `select`?".to_string()
    } else {
        suggestion_suffix(suggestion)
    }
}

fn optional_marker(required: &bool) -> &'static str {
    if *required { "" } else { " (optional)" }
}

fn candidate_list(candidates: &[InputTypeRef]) -> String {
    candidates.iter()
        .map(|candidate| candidate.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}
