use crate::document::argument_resolver::ArgumentResolver;
use crate::document::Args;
use crate::document::DocumentBuildError;
use crate::document::ExpectedFieldType;
use crate::document::Field;
use crate::document::FieldErrorKind;
use crate::document::SelectionKey;
use crate::schema::SchemaLookup;
use crate::suggestion::closest_match;
use crate::types::ObjectType;
use crate::types::SchemaField;
use serde_json::Map;
use serde_json::Value;

type Result<T> = std::result::Result<T, DocumentBuildError>;

/// Turns a nested selection value into a tree of [`Field`]s by matching the
/// requested names against the fields of the current object type.
pub(super) struct SelectionWalker<'a> {
    resolver: ArgumentResolver<'a>,
    schema: &'a dyn SchemaLookup,
}
impl<'a> SelectionWalker<'a> {
    pub fn new(schema: &'a dyn SchemaLookup) -> Self {
        Self {
            resolver: ArgumentResolver::new(schema),
            schema,
        }
    }

    /// Builds the single root field of a document. A missing (`null`) or
    /// `false` root selection requests the default selection.
    ///
    /// Selection problems are recorded in the returned tree. Only a schema
    /// whose object types cannot be resolved fails the build.
    pub fn build_root(
        &self,
        root_type: &'a ObjectType,
        root_field_name: &str,
        selection: &Value,
    ) -> Result<Field> {
        let default_selection = Value::Bool(true);
        let selection = match selection {
            Value::Null | Value::Bool(false) => &default_selection,
            other => other,
        };
        self.build_selected_field(root_type, root_field_name, selection)
    }

    fn build_fields(
        &self,
        object_type: &'a ObjectType,
        selection: &Map<String, Value>,
    ) -> Result<Vec<Field>> {
        selection.iter()
            .filter_map(|(key, value)| self.build_field(object_type, key, value).transpose())
            .collect()
    }

    /// `None` when the field is deselected with `false`.
    fn build_field(
        &self,
        object_type: &'a ObjectType,
        key: &str,
        value: &Value,
    ) -> Result<Option<Field>> {
        if value == &Value::Bool(false) && object_type.field(key).is_some() {
            return Ok(None);
        }
        self.build_selected_field(object_type, key, value).map(Some)
    }

    fn build_selected_field(
        &self,
        object_type: &'a ObjectType,
        key: &str,
        value: &Value,
    ) -> Result<Field> {
        let schema_field = match object_type.field(key) {
            Some(schema_field) => schema_field,
            None => {
                return Ok(Field::invalid(key, FieldErrorKind::InvalidFieldName {
                    is_include: false,
                    is_include_scalar: false,
                    model_name: object_type.name().to_string(),
                    provided_name: key.to_string(),
                    suggestion: closest_match(key, object_type.field_names())
                        .map(|s| s.to_string()),
                }));
            },
        };

        if schema_field.is_relation() {
            self.build_relation_field(object_type, schema_field, value)
        } else {
            Ok(self.build_leaf_field(object_type, schema_field, value))
        }
    }

    fn build_leaf_field(
        &self,
        object_type: &'a ObjectType,
        schema_field: &'a SchemaField,
        value: &Value,
    ) -> Field {
        match value {
            Value::Bool(true) => Field::new(
                schema_field.name(),
                self.resolve_field_args(schema_field, &Map::new(), None),
                None,
                None,
            ),

            // Scalar fields that declare arguments (e.g. raw or aggregate
            // root fields) take their arguments as an object.
            Value::Object(provided) if !schema_field.args().is_empty() => Field::new(
                schema_field.name(),
                self.resolve_field_args(schema_field, provided, None),
                None,
                None,
            ),

            _ => Field::invalid(schema_field.name(), FieldErrorKind::InvalidFieldType {
                expected: ExpectedFieldType::Boolean,
                field_name: schema_field.name().to_string(),
                model_name: object_type.name().to_string(),
                provided_value: value.clone(),
            }),
        }
    }

    fn build_relation_field(
        &self,
        object_type: &'a ObjectType,
        schema_field: &'a SchemaField,
        value: &Value,
    ) -> Result<Field> {
        let child_type = self.child_type(schema_field)?;
        let empty = Map::new();
        let provided = match value {
            Value::Bool(true) => &empty,
            Value::Object(provided) => provided,
            _ => {
                return Ok(Field::invalid(schema_field.name(), FieldErrorKind::InvalidFieldType {
                    expected: ExpectedFieldType::BooleanOrObject,
                    field_name: schema_field.name().to_string(),
                    model_name: object_type.name().to_string(),
                    provided_value: value.clone(),
                }));
            },
        };

        let arg_values: Map<String, Value> = provided.iter()
            .filter(|(key, _)| SelectionKey::from_name(key).is_none())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let args = self.resolve_field_args(schema_field, &arg_values, Some(child_type));

        // A falsy `select` or `include` counts as not given.
        let select = provided.get("select").filter(|value| !is_falsy(value));
        let include = provided.get("include").filter(|value| !is_falsy(value));
        let (children, children_key) = match (select, include) {
            (Some(_), Some(_)) => (
                vec![Field::invalid("include", FieldErrorKind::IncludeAndSelectConflict)],
                None,
            ),

            (Some(select), None) => match select.as_object() {
                Some(select) if !select.is_empty() => {
                    if select.values().all(is_falsy) {
                        (vec![Field::invalid("select", FieldErrorKind::NoTruthySelect)], None)
                    } else {
                        (self.build_fields(child_type, select)?, Some(SelectionKey::Select))
                    }
                },
                _ => (vec![Field::invalid("select", FieldErrorKind::EmptySelect)], None),
            },

            (None, Some(include)) => match include.as_object() {
                Some(include) if !include.is_empty() => (
                    self.build_include(child_type, include)?,
                    Some(SelectionKey::Include),
                ),
                _ => (vec![Field::invalid("include", FieldErrorKind::EmptyInclude)], None),
            },

            (None, None) => (
                self.build_fields(child_type, &self.default_selection(child_type)?)?,
                Some(SelectionKey::Select),
            ),
        };

        Ok(Field::new(schema_field.name(), args, Some(children), children_key))
    }

    /// The default selection extended (and overridden) by the `include`d
    /// relation fields.
    fn build_include(
        &self,
        object_type: &'a ObjectType,
        include: &Map<String, Value>,
    ) -> Result<Vec<Field>> {
        let mut selection = self.default_selection(object_type)?;
        let mut invalid_fields = vec![];
        for (key, value) in include {
            let is_include_scalar = match object_type.field(key) {
                Some(schema_field) if schema_field.is_relation() => {
                    selection.insert(key.clone(), value.clone());
                    continue;
                },
                Some(_) => true,
                None => false,
            };
            let relation_names = object_type.fields().iter()
                .filter(|field| field.is_relation())
                .map(|field| field.name());
            invalid_fields.push(Field::invalid(key, FieldErrorKind::InvalidFieldName {
                is_include: true,
                is_include_scalar,
                model_name: object_type.name().to_string(),
                provided_name: key.clone(),
                suggestion: closest_match(key, relation_names).map(|s| s.to_string()),
            }));
        }

        let mut fields = self.build_fields(object_type, &selection)?;
        fields.extend(invalid_fields);
        Ok(fields)
    }

    /// Every scalar and enum field, plus embedded object fields (which get
    /// their own default selection in turn).
    fn default_selection(&self, object_type: &'a ObjectType) -> Result<Map<String, Value>> {
        self.check_embedding(object_type, &mut vec![])?;

        let mut selection = Map::new();
        for field in object_type.fields() {
            if !field.is_relation() || self.child_type(field)?.is_embedded() {
                selection.insert(field.name().to_string(), Value::Bool(true));
            }
        }
        Ok(selection)
    }

    /// Fails if following embedded fields from `object_type` leads back to a
    /// type already on the chain.
    fn check_embedding(
        &self,
        object_type: &'a ObjectType,
        chain: &mut Vec<&'a ObjectType>,
    ) -> Result<()> {
        if chain.iter().any(|seen| std::ptr::eq(*seen, object_type)) {
            return Err(DocumentBuildError::EmbeddedTypeCycle {
                type_name: object_type.name().to_string(),
            });
        }

        chain.push(object_type);
        for field in object_type.fields().iter().filter(|field| field.is_relation()) {
            let child_type = self.child_type(field)?;
            if child_type.is_embedded() {
                self.check_embedding(child_type, chain)?;
            }
        }
        chain.pop();
        Ok(())
    }

    fn child_type(&self, schema_field: &'a SchemaField) -> Result<&'a ObjectType> {
        let output_type = schema_field.output_type();
        output_type.object_ref()
            .and_then(|object_ref| object_ref.deref(self.schema).ok())
            .ok_or_else(|| DocumentBuildError::UndefinedObjectType {
                field_name: schema_field.name().to_string(),
                type_name: output_type.type_name().to_string(),
            })
    }

    fn resolve_field_args(
        &self,
        schema_field: &'a SchemaField,
        provided: &Map<String, Value>,
        output_type: Option<&'a ObjectType>,
    ) -> Option<Args> {
        let args = self.resolver.resolve_field_args(schema_field, provided, output_type);
        (!args.is_empty()).then_some(args)
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(num) => num.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
