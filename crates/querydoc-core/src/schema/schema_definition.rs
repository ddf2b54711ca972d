use crate::types::EnumType;
use crate::types::InputType;
use crate::types::ObjectType;

/// The serialized (JSON) form of a schema, as produced by whatever tool
/// generates the schema for a datamodel.
///
/// Feed it to [`SchemaIndexBuilder::from_definition()`](crate::schema::SchemaIndexBuilder::from_definition)
/// to get a validated [`SchemaIndex`](crate::schema::SchemaIndex).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDefinition {
    #[serde(default = "default_query_type_name")]
    pub query_type: String,
    #[serde(default)]
    pub mutation_type: Option<String>,
    #[serde(default)]
    pub object_types: Vec<ObjectType>,
    #[serde(default)]
    pub input_types: Vec<InputType>,
    #[serde(default)]
    pub enum_types: Vec<EnumType>,
}

impl std::default::Default for SchemaDefinition {
    fn default() -> Self {
        Self {
            query_type: default_query_type_name(),
            mutation_type: None,
            object_types: vec![],
            input_types: vec![],
            enum_types: vec![],
        }
    }
}

fn default_query_type_name() -> String {
    "Query".to_string()
}
