use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::schema::SchemaLookup;
use crate::types::SchemaField;

/// An output object type (a model, an embedded composite type, or one of the
/// root operation types).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectType {
    pub(crate) name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) namespace: Option<String>,
    #[serde(default)]
    pub(crate) is_embedded: bool,
    pub(crate) fields: Vec<SchemaField>,
}
impl ObjectType {
    pub fn new(name: impl AsRef<str>, fields: Vec<SchemaField>) -> Self {
        Self {
            name: name.as_ref().to_string(),
            namespace: None,
            is_embedded: false,
            fields,
        }
    }

    pub fn in_namespace(mut self, namespace: impl AsRef<str>) -> Self {
        self.namespace = Some(namespace.as_ref().to_string());
        self
    }

    /// Marks this type as embedded (composite). Embedded fields are part of
    /// the default selection of their parent.
    pub fn embedded(mut self) -> Self {
        self.is_embedded = true;
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn is_embedded(&self) -> bool {
        self.is_embedded
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name())
    }
}
impl DerefByName for ObjectType {
    fn deref_name<'a>(
        schema: &'a dyn SchemaLookup,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.lookup_object_type(name, namespace)
            .ok_or_else(|| DerefByNameError::DanglingReference(name.to_string()))
    }
}
