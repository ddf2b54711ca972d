use crate::named_ref::NamedRef;
use crate::types::EnumType;
use crate::types::InputType;
use crate::types::InputTypeKind;
use crate::types::ScalarKind;

/// One member of the union of shapes an argument may legally take.
///
/// `type_name` names a scalar (e.g. `"String"`), an enum, an input object, or
/// is `"Null"` for [`InputTypeKind::Null`].
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputTypeRef {
    pub(crate) kind: InputTypeKind,
    #[serde(rename = "type")]
    pub(crate) type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) namespace: Option<String>,
    #[serde(default)]
    pub(crate) is_list: bool,
    #[serde(default)]
    pub(crate) is_required: bool,
}
impl InputTypeRef {
    pub fn new(kind: InputTypeKind, type_name: impl AsRef<str>) -> Self {
        Self {
            kind,
            type_name: type_name.as_ref().to_string(),
            namespace: None,
            is_list: false,
            is_required: false,
        }
    }

    pub fn scalar(scalar: ScalarKind) -> Self {
        Self::new(InputTypeKind::Scalar, scalar.name())
    }

    pub fn enum_type(name: impl AsRef<str>) -> Self {
        Self::new(InputTypeKind::Enum, name)
    }

    pub fn input_object(name: impl AsRef<str>) -> Self {
        Self::new(InputTypeKind::InputObject, name)
    }

    pub fn null() -> Self {
        Self::new(InputTypeKind::Null, "Null")
    }

    pub fn in_namespace(mut self, namespace: impl AsRef<str>) -> Self {
        self.namespace = Some(namespace.as_ref().to_string());
        self
    }

    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn kind(&self) -> InputTypeKind {
        self.kind
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn is_list(&self) -> bool {
        self.is_list
    }

    pub fn is_required(&self) -> bool {
        self.is_required
    }

    /// The [`ScalarKind`] this ref names, if it is a scalar ref naming a
    /// built-in scalar.
    pub fn scalar_kind(&self) -> Option<ScalarKind> {
        match self.kind {
            InputTypeKind::Scalar => ScalarKind::from_name(&self.type_name),
            _ => None,
        }
    }

    pub fn enum_ref(&self) -> Option<NamedRef<EnumType>> {
        match self.kind {
            InputTypeKind::Enum => Some(NamedRef::new(
                &self.type_name,
                self.namespace(),
            )),
            _ => None,
        }
    }

    pub fn input_object_ref(&self) -> Option<NamedRef<InputType>> {
        match self.kind {
            InputTypeKind::InputObject => Some(NamedRef::new(
                &self.type_name,
                self.namespace(),
            )),
            _ => None,
        }
    }
}
impl std::fmt::Display for InputTypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_list {
            write!(f, "List<{}>", self.type_name)
        } else {
            f.write_str(&self.type_name)
        }
    }
}
