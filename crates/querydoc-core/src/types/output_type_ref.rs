use crate::named_ref::NamedRef;
use crate::types::ObjectType;
use crate::types::OutputTypeKind;

/// Represents the declared type of a [`SchemaField`](crate::types::SchemaField).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputTypeRef {
    pub(crate) kind: OutputTypeKind,
    #[serde(rename = "type")]
    pub(crate) type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) namespace: Option<String>,
    #[serde(default)]
    pub(crate) is_list: bool,
    #[serde(default)]
    pub(crate) is_required: bool,
}
impl OutputTypeRef {
    pub fn new(kind: OutputTypeKind, type_name: impl AsRef<str>) -> Self {
        Self {
            kind,
            type_name: type_name.as_ref().to_string(),
            namespace: None,
            is_list: false,
            is_required: false,
        }
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

    pub fn kind(&self) -> OutputTypeKind {
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

    /// A [`NamedRef`] to the referenced [`ObjectType`] if this is a relation
    /// (object-typed) output.
    pub fn object_ref(&self) -> Option<NamedRef<ObjectType>> {
        match self.kind {
            OutputTypeKind::Object => Some(NamedRef::new(
                &self.type_name,
                self.namespace(),
            )),
            OutputTypeKind::Enum | OutputTypeKind::Scalar => None,
        }
    }
}
