use crate::document::Arg;
use crate::document::ArgErrorKind;
use crate::document::ArgValue;
use crate::document::Args;
use crate::document::InputRole;
use crate::schema::SchemaLookup;
use crate::suggestion::closest_match;
use crate::types::InputType;
use crate::types::InputTypeKind;
use crate::types::InputTypeRef;
use crate::types::ObjectType;
use crate::types::ProvidedType;
use crate::types::SchemaArg;
use crate::types::SchemaField;
use serde_json::Map;
use serde_json::Value;

/// Where a set of arguments is being resolved. Field arguments get extra
/// hints for unknown keys that input object fields do not.
enum ArgsScope<'a> {
    Field {
        is_relation: bool,
        output_type: Option<&'a ObjectType>,
    },
    InputObject,
}

/// Matches caller-provided argument values against the candidate types the
/// schema declares for them.
pub(super) struct ArgumentResolver<'a> {
    schema: &'a dyn SchemaLookup,
}
impl<'a> ArgumentResolver<'a> {
    pub fn new(schema: &'a dyn SchemaLookup) -> Self {
        Self { schema }
    }

    /// Resolves the arguments of `schema_field`. `output_type` is the object
    /// type the field selects, used to detect field names passed as
    /// arguments by mistake.
    pub fn resolve_field_args(
        &self,
        schema_field: &'a SchemaField,
        provided: &Map<String, Value>,
        output_type: Option<&'a ObjectType>,
    ) -> Args {
        self.resolve_args(
            schema_field.args(),
            provided,
            false,
            ArgsScope::Field {
                is_relation: schema_field.is_relation(),
                output_type,
            },
        )
    }

    fn resolve_input_object(
        &self,
        input_type: &'a InputType,
        provided: &Map<String, Value>,
    ) -> Args {
        self.resolve_args(
            input_type.fields(),
            provided,
            input_type.requires_at_least_one(),
            ArgsScope::InputObject,
        )
    }

    fn resolve_args(
        &self,
        arg_defs: &'a [SchemaArg],
        provided: &Map<String, Value>,
        at_least_one: bool,
        scope: ArgsScope<'a>,
    ) -> Args {
        let mut args = vec![];
        for (key, value) in provided {
            match arg_defs.iter().find(|def| def.name() == key) {
                Some(arg_def) => {
                    if let Some(arg) = self.resolve_arg(arg_def, Some(value)) {
                        args.push(arg);
                    }
                },
                None => args.push(Self::unknown_arg(arg_defs, key, value, &scope)),
            }
        }

        let mut has_missing_arg = false;
        for arg_def in arg_defs.iter().filter(|def| !provided.contains_key(def.name())) {
            if let Some(arg) = self.resolve_arg(arg_def, None) {
                has_missing_arg = true;
                args.push(arg);
            }
        }

        // Once something is missing, list the optional fields too so the
        // whole expected shape can be reported. A `null` counts as missing.
        if has_missing_arg || (provided.is_empty() && at_least_one) {
            for arg_def in arg_defs.iter().filter(|def| !def.is_required()) {
                if provided.get(arg_def.name()).is_none_or(Value::is_null) {
                    args.push(Self::missing_arg(arg_def, false));
                }
            }
        }

        Args::new(args)
    }

    fn unknown_arg(
        arg_defs: &'a [SchemaArg],
        key: &str,
        value: &Value,
        scope: &ArgsScope<'a>,
    ) -> Arg {
        let arg_names = arg_defs.iter().map(|def| def.name());
        let (did_you_mean_field, suggestion) = match scope {
            ArgsScope::Field { is_relation, output_type } => {
                let did_you_mean_field = value.is_boolean()
                    && output_type.is_some_and(|t| t.field(key).is_some());
                let selection_keys: &[&str] =
                    if *is_relation { &["select", "include"] } else { &[] };
                let suggestion = closest_match(
                    key,
                    arg_names.chain(selection_keys.iter().copied()),
                );
                (did_you_mean_field, suggestion)
            },
            ArgsScope::InputObject => (false, closest_match(key, arg_names)),
        };

        Arg::invalid(key, ArgValue::Scalar(value.clone()), ArgErrorKind::InvalidArgName {
            did_you_mean_field,
            provided_name: key.to_string(),
            provided_value: value.clone(),
            suggestion: if did_you_mean_field {
                None
            } else {
                suggestion.map(|s| s.to_string())
            },
        })
    }

    fn missing_arg(arg_def: &SchemaArg, required: bool) -> Arg {
        Arg::invalid(arg_def.name(), ArgValue::Absent, ArgErrorKind::MissingRequiredArg {
            candidate_types: arg_def.candidate_types().to_vec(),
            name: arg_def.name().to_string(),
            required,
        }).with_relation_filter(arg_def.is_relation_filter())
    }

    /// Resolves one provided (or omitted) argument value. Returns `None` only
    /// for an omitted optional argument.
    ///
    /// Every candidate type is attempted in declaration order and the first
    /// one that resolves without errors wins. If none does, the candidates
    /// whose shape matches the value's shape (object-like or literal) are
    /// ranked by how many errors they produce and the first of the best
    /// ranked ones is used, so exactly one [`Arg`] is always produced.
    pub fn resolve_arg(
        &self,
        arg_def: &'a SchemaArg,
        value: Option<&Value>,
    ) -> Option<Arg> {
        let value = match value {
            Some(value) => value,
            None if arg_def.is_required() => {
                return Some(Self::missing_arg(arg_def, true));
            },
            None => return None,
        };

        let candidates = arg_def.candidate_types();
        if let [candidate] = candidates {
            return Some(self.resolve_candidate(arg_def, candidate, value));
        }

        let mut attempts = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let arg = self.resolve_candidate(arg_def, candidate, value);
            if !arg.has_invalid_arg() {
                log::trace!(
                    "Argument `{}` matched candidate `{candidate}`.",
                    arg_def.name(),
                );
                return Some(arg);
            }
            attempts.push((candidate, arg));
        }

        let value_is_object_like = value.is_object() || value.is_array();
        let same_shape_count = attempts.iter()
            .filter(|(candidate, _)| candidate.kind().is_object_like() == value_is_object_like)
            .count();
        let best_attempt = attempts.into_iter()
            .filter(|(candidate, _)| {
                same_shape_count == 0
                    || candidate.kind().is_object_like() == value_is_object_like
            })
            .min_by_key(|(_, arg)| arg.error_count());

        best_attempt.map(|(candidate, arg)| {
            log::trace!(
                "No candidate of argument `{}` matched; reporting errors against \
                `{candidate}` ({} error(s)).",
                arg_def.name(),
                arg.error_count(),
            );
            arg
        })
    }

    fn resolve_candidate(
        &self,
        arg_def: &'a SchemaArg,
        candidate: &InputTypeRef,
        value: &Value,
    ) -> Arg {
        if candidate.is_list() {
            return self.resolve_list_candidate(arg_def, candidate, value);
        }

        match candidate.kind() {
            InputTypeKind::Null => {
                if value.is_null() {
                    Self::matched_arg(arg_def, candidate, ArgValue::Scalar(Value::Null))
                } else {
                    self.invalid_type_arg(arg_def, candidate, value)
                }
            },

            InputTypeKind::Enum | InputTypeKind::Scalar => {
                match self.resolve_literal(candidate, value) {
                    Some(arg_value) => Self::matched_arg(arg_def, candidate, arg_value),
                    None => self.invalid_type_arg(arg_def, candidate, value),
                }
            },

            InputTypeKind::InputObject => {
                let (input_type, provided) = match (self.input_type(candidate), value) {
                    (Some(input_type), Value::Object(provided)) => (input_type, provided),
                    _ => return self.invalid_type_arg(arg_def, candidate, value),
                };

                let error = if provided.is_empty() && input_type.requires_at_least_one() {
                    Some(ArgErrorKind::AtLeastOneRequired {
                        input_type: input_type.name().to_string(),
                    })
                } else if provided.len() > 1 && input_type.requires_at_most_one() {
                    Some(ArgErrorKind::AtMostOneRequired {
                        input_type: input_type.name().to_string(),
                        provided_keys: provided.keys().cloned().collect(),
                    })
                } else {
                    None
                };

                let nested = self.resolve_input_object(input_type, provided);
                Arg::new(
                    arg_def.name(),
                    ArgValue::Nested(nested),
                    Some(candidate.clone()),
                    error,
                )
                .with_role(InputRole::of(input_type))
                .with_relation_filter(arg_def.is_relation_filter())
            },
        }
    }

    /// A non-array value passed for a list candidate is treated as a list
    /// with a single element.
    fn resolve_list_candidate(
        &self,
        arg_def: &'a SchemaArg,
        candidate: &InputTypeRef,
        value: &Value,
    ) -> Arg {
        let wrapped;
        let items: &[Value] = match value {
            Value::Array(items) => items,
            other => {
                wrapped = [other.clone()];
                &wrapped
            },
        };

        match candidate.kind() {
            InputTypeKind::Enum | InputTypeKind::Null | InputTypeKind::Scalar => {
                let mut arg_values = Vec::with_capacity(items.len());
                for item in items {
                    let item_value = match candidate.kind() {
                        InputTypeKind::Null => item.is_null()
                            .then(|| ArgValue::Scalar(Value::Null)),
                        _ => self.resolve_literal(candidate, item),
                    };
                    match item_value {
                        Some(item_value) => arg_values.push(item_value),
                        None => return self.invalid_type_arg(arg_def, candidate, value),
                    }
                }
                Self::matched_arg(arg_def, candidate, ArgValue::List(arg_values))
            },

            InputTypeKind::InputObject => {
                let input_type = match self.input_type(candidate) {
                    Some(input_type) => input_type,
                    None => return self.invalid_type_arg(arg_def, candidate, value),
                };

                let mut objects = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::Object(object) => objects.push(object),
                        _ => return self.invalid_type_arg(arg_def, candidate, value),
                    }
                }

                let error = if input_type.requires_at_least_one()
                    && objects.iter().any(|object| object.is_empty()) {
                    Some(ArgErrorKind::AtLeastOneRequired {
                        input_type: input_type.name().to_string(),
                    })
                } else if input_type.requires_at_most_one() {
                    objects.iter()
                        .find(|object| object.len() > 1)
                        .map(|object| ArgErrorKind::AtMostOneRequired {
                            input_type: input_type.name().to_string(),
                            provided_keys: object.keys().cloned().collect(),
                        })
                } else {
                    None
                };

                let elements = objects.into_iter()
                    .map(|object| ArgValue::Nested(self.resolve_input_object(input_type, object)))
                    .collect();
                Arg::new(
                    arg_def.name(),
                    ArgValue::List(elements),
                    Some(candidate.clone()),
                    error,
                )
                .with_role(InputRole::of(input_type))
                .with_relation_filter(arg_def.is_relation_filter())
            },
        }
    }

    /// Matches a single scalar or enum value. `None` when the value is not
    /// acceptable for `candidate`.
    fn resolve_literal(&self, candidate: &InputTypeRef, value: &Value) -> Option<ArgValue> {
        match candidate.kind() {
            InputTypeKind::Enum => {
                let enum_type = candidate.enum_ref()?.deref(self.schema).ok()?;
                let literal = value.as_str().filter(|s| enum_type.has_value(s))?;
                Some(ArgValue::EnumLiteral(literal.to_string()))
            },

            InputTypeKind::Scalar => {
                let scalar_kind = candidate.scalar_kind()?;
                let provided_type = ProvidedType::of(value, None);
                scalar_kind.accepts(&provided_type, value)
                    .then(|| ArgValue::Scalar(value.clone()))
            },

            InputTypeKind::InputObject | InputTypeKind::Null => None,
        }
    }

    fn input_type(&self, candidate: &InputTypeRef) -> Option<&'a InputType> {
        candidate.input_object_ref()?.deref(self.schema).ok()
    }

    fn matched_arg(
        arg_def: &SchemaArg,
        candidate: &InputTypeRef,
        arg_value: ArgValue,
    ) -> Arg {
        Arg::new(arg_def.name(), arg_value, Some(candidate.clone()), None)
            .with_relation_filter(arg_def.is_relation_filter())
    }

    fn invalid_type_arg(
        &self,
        arg_def: &SchemaArg,
        candidate: &InputTypeRef,
        value: &Value,
    ) -> Arg {
        let enum_type = candidate.enum_ref()
            .and_then(|enum_ref| enum_ref.deref(self.schema).ok());
        Arg::invalid(arg_def.name(), ArgValue::Scalar(value.clone()), ArgErrorKind::InvalidArgType {
            all_candidates: arg_def.candidate_types().to_vec(),
            best_candidate: Some(candidate.clone()),
            provided_type: ProvidedType::of(value, enum_type),
            provided_value: value.clone(),
        })
        .with_relation_filter(arg_def.is_relation_filter())
    }
}
