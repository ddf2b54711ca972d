use crate::types::EnumType;
use serde_json::Value;

/// The runtime type of a caller-provided value, as seen by the argument
/// resolver.
///
/// Classification is relative to an optional [`EnumType`]: a string is only
/// considered an enum value when it is checked against an enum candidate that
/// declares it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProvidedType {
    BigInt,
    Boolean,
    DateTime,
    Enum(String),
    Float,
    Int,
    List(Vec<ProvidedType>),
    Null,
    Object,
    String,
    UUID,
}
impl ProvidedType {
    pub fn of(value: &Value, enum_type: Option<&EnumType>) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(num) => {
                if num.is_i64() {
                    Self::Int
                } else if num.is_u64() {
                    Self::BigInt
                } else {
                    match num.as_f64() {
                        Some(f) if f.is_finite()
                            && f.fract() == 0.0
                            && f.abs() <= i64::MAX as f64 => Self::Int,
                        _ => Self::Float,
                    }
                }
            },
            Value::String(s) => {
                if let Some(enum_type) = enum_type
                    && enum_type.has_value(s) {
                    Self::Enum(enum_type.name().to_string())
                } else if uuid::Uuid::try_parse(s).is_ok() {
                    Self::UUID
                } else if chrono::DateTime::parse_from_rfc3339(s).is_ok() {
                    Self::DateTime
                } else {
                    Self::String
                }
            },
            Value::Array(items) => {
                let mut item_types: Vec<ProvidedType> = vec![];
                for item in items {
                    let item_type = Self::of(item, enum_type);
                    if !item_types.contains(&item_type) {
                        item_types.push(item_type);
                    }
                }
                if item_types.contains(&Self::Float) {
                    item_types.retain(|t| *t != Self::Int);
                }
                Self::List(item_types)
            },
            Value::Object(_) => Self::Object,
        }
    }

    /// Whether a value of this type is written as an object or a list rather
    /// than as a plain literal.
    pub fn is_object_like(&self) -> bool {
        matches!(self, Self::Object | Self::List(_))
    }
}
impl std::fmt::Display for ProvidedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BigInt => f.write_str("BigInt"),
            Self::Boolean => f.write_str("Boolean"),
            Self::DateTime => f.write_str("DateTime"),
            Self::Enum(name) => f.write_str(name),
            Self::Float => f.write_str("Float"),
            Self::Int => f.write_str("Int"),
            Self::List(item_types) => write!(
                f,
                "List<{}>",
                item_types.iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(" | "),
            ),
            Self::Null => f.write_str("null"),
            Self::Object => f.write_str("Json"),
            Self::String => f.write_str("String"),
            Self::UUID => f.write_str("UUID"),
        }
    }
}
impl serde::Serialize for ProvidedType {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
