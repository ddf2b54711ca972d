use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::schema::SchemaLookup;

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumType {
    pub(crate) name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) namespace: Option<String>,
    pub(crate) values: Vec<String>,
}
impl EnumType {
    pub fn new(name: impl AsRef<str>, values: &[&str]) -> Self {
        Self {
            name: name.as_ref().to_string(),
            namespace: None,
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn in_namespace(mut self, namespace: impl AsRef<str>) -> Self {
        self.namespace = Some(namespace.as_ref().to_string());
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}
impl DerefByName for EnumType {
    fn deref_name<'a>(
        schema: &'a dyn SchemaLookup,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.lookup_enum(name, namespace)
            .ok_or_else(|| DerefByNameError::DanglingReference(name.to_string()))
    }
}
