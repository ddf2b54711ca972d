use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::schema::SchemaLookup;
use crate::types::SchemaArg;

/// An input object type: the shape of a nested object-valued argument.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputType {
    pub(crate) name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) namespace: Option<String>,
    pub(crate) fields: Vec<SchemaArg>,
    #[serde(default)]
    pub(crate) at_least_one: bool,
    #[serde(default)]
    pub(crate) at_most_one: bool,
    #[serde(default)]
    pub(crate) is_where_type: bool,
    #[serde(default)]
    pub(crate) is_order_type: bool,
}
impl InputType {
    pub fn new(name: impl AsRef<str>, fields: Vec<SchemaArg>) -> Self {
        Self {
            name: name.as_ref().to_string(),
            namespace: None,
            fields,
            at_least_one: false,
            at_most_one: false,
            is_where_type: false,
            is_order_type: false,
        }
    }

    pub fn in_namespace(mut self, namespace: impl AsRef<str>) -> Self {
        self.namespace = Some(namespace.as_ref().to_string());
        self
    }

    /// Requires at least one field to be provided.
    pub fn at_least_one(mut self) -> Self {
        self.at_least_one = true;
        self
    }

    /// Allows at most one field to be provided.
    pub fn at_most_one(mut self) -> Self {
        self.at_most_one = true;
        self
    }

    pub fn where_type(mut self) -> Self {
        self.is_where_type = true;
        self
    }

    pub fn order_type(mut self) -> Self {
        self.is_order_type = true;
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn fields(&self) -> &[SchemaArg] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&SchemaArg> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn requires_at_least_one(&self) -> bool {
        self.at_least_one
    }

    pub fn requires_at_most_one(&self) -> bool {
        self.at_most_one
    }

    /// Filter types whose comparison objects get flattened during
    /// normalization.
    pub fn is_where_type(&self) -> bool {
        self.is_where_type
    }

    /// Ordering types that get rewritten into `<field>_<DIRECTION>` enum
    /// literals during normalization.
    pub fn is_order_type(&self) -> bool {
        self.is_order_type
    }
}
impl DerefByName for InputType {
    fn deref_name<'a>(
        schema: &'a dyn SchemaLookup,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<&'a Self, DerefByNameError> {
        schema.lookup_input_type(name, namespace)
            .ok_or_else(|| DerefByNameError::DanglingReference(name.to_string()))
    }
}
