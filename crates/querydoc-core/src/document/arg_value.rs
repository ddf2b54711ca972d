use crate::document::Args;
use serde_json::Value;

/// The resolved value of an [`Arg`](crate::document::Arg).
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    /// The value of an argument that was never provided. Only synthesized
    /// for [`ArgErrorKind::MissingRequiredArg`](crate::document::ArgErrorKind::MissingRequiredArg)
    /// errors and never serialized.
    Absent,
    EnumLiteral(String),
    List(Vec<ArgValue>),
    Nested(Args),
    Scalar(Value),
}
impl ArgValue {
    pub fn as_nested(&self) -> Option<&Args> {
        match self {
            Self::Nested(args) => Some(args),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ArgValue]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn has_invalid_arg(&self) -> bool {
        match self {
            Self::Nested(args) => args.has_invalid_arg(),
            Self::List(items) => items.iter().any(|item| item.has_invalid_arg()),
            Self::Absent | Self::EnumLiteral(_) | Self::Scalar(_) => false,
        }
    }

    /// The number of arg errors within this value, recursively.
    pub fn error_count(&self) -> usize {
        match self {
            Self::Nested(args) => args.error_count(),
            Self::List(items) => items.iter().map(|item| item.error_count()).sum(),
            Self::Absent | Self::EnumLiteral(_) | Self::Scalar(_) => 0,
        }
    }
}
