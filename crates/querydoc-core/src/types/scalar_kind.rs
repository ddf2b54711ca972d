use crate::types::ProvidedType;
use serde_json::Value;

/// The built-in scalar types an argument slot may be declared with.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarKind {
    BigInt,
    Boolean,
    Bytes,
    DateTime,
    Decimal,
    Float,
    ID,
    Int,
    Json,
    Long,
    String,
    UUID,
}
impl ScalarKind {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "BigInt" => Self::BigInt,
            "Boolean" => Self::Boolean,
            "Bytes" => Self::Bytes,
            "DateTime" => Self::DateTime,
            "Decimal" => Self::Decimal,
            "Float" => Self::Float,
            "ID" => Self::ID,
            "Int" => Self::Int,
            "Json" => Self::Json,
            "Long" => Self::Long,
            "String" => Self::String,
            "UUID" => Self::UUID,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BigInt => "BigInt",
            Self::Boolean => "Boolean",
            Self::Bytes => "Bytes",
            Self::DateTime => "DateTime",
            Self::Decimal => "Decimal",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::Int => "Int",
            Self::Json => "Json",
            Self::Long => "Long",
            Self::String => "String",
            Self::UUID => "UUID",
        }
    }

    /// Indicates whether a (non-list) value whose runtime type is `provided`
    /// may be passed for a slot of this scalar kind.
    ///
    /// Besides exact matches, narrower kinds are accepted wherever the wire
    /// format treats them as compatible with a wider one: timestamp and UUID
    /// strings are strings, strings are IDs, integers are floats/longs/bigints
    /// and so on.
    pub fn accepts(&self, provided: &ProvidedType, value: &Value) -> bool {
        use ProvidedType as P;
        match self {
            Self::Json => true,
            Self::String => matches!(provided, P::String | P::DateTime | P::UUID),
            Self::ID => matches!(provided, P::String | P::UUID),
            Self::UUID => matches!(provided, P::UUID),
            Self::DateTime => matches!(provided, P::DateTime),
            Self::Boolean => matches!(provided, P::Boolean),
            Self::Int => matches!(provided, P::Int),
            Self::Long => matches!(provided, P::Int),
            Self::Float => matches!(provided, P::Int | P::Float),
            Self::BigInt => matches!(provided, P::Int | P::BigInt),
            Self::Decimal => match provided {
                P::Int | P::BigInt | P::Float => true,
                P::String => value.as_str()
                    .is_some_and(|s| s.trim().parse::<f64>().is_ok()),
                _ => false,
            },
            Self::Bytes => matches!(provided, P::String),
        }
    }
}
impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
