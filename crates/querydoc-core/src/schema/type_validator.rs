use crate::schema::SchemaIndex;
use crate::schema::TypeValidationError;
use crate::types::InputTypeKind;
use crate::types::ObjectType;
use crate::types::OutputTypeKind;
use crate::types::ScalarKind;
use crate::types::SchemaArg;
use std::collections::HashSet;

pub(super) struct TypeValidator<'a> {
    errors: Vec<TypeValidationError>,
    index: &'a SchemaIndex,
}
impl<'a> TypeValidator<'a> {
    pub fn new(index: &'a SchemaIndex) -> Self {
        Self {
            errors: vec![],
            index,
        }
    }

    pub fn validate(mut self) -> Vec<TypeValidationError> {
        self.validate_root_types();

        for object_type in self.index.object_types.values() {
            self.validate_object_type(object_type);
        }

        for input_type in self.index.input_types.values() {
            for arg in input_type.fields() {
                self.validate_arg(input_type.name(), arg);
            }
        }

        let mut reported_cycles = HashSet::new();
        for object_type in self.index.object_types.values() {
            if object_type.is_embedded() {
                self.find_embedded_cycles(
                    object_type,
                    &mut vec![],
                    &mut reported_cycles,
                );
            }
        }

        self.errors
    }

    fn validate_root_types(&mut self) {
        let index = self.index;
        if index.object_types.get(&index.query_type_name).is_none() {
            self.errors.push(TypeValidationError::UndefinedRootType {
                operation: "query".to_string(),
                type_name: index.query_type_name.to_owned(),
            });
        }

        if let Some(mutation_type_name) = &index.mutation_type_name
            && index.object_types.get(mutation_type_name).is_none() {
            self.errors.push(TypeValidationError::UndefinedRootType {
                operation: "mutation".to_string(),
                type_name: mutation_type_name.to_owned(),
            });
        }
    }

    fn validate_object_type(&mut self, object_type: &'a ObjectType) {
        let index = self.index;
        for field in object_type.fields() {
            let output_type = field.output_type();
            let type_name = output_type.type_name();
            let namespace = output_type.namespace();
            match output_type.kind() {
                // Output scalars are never matched against caller values, so
                // custom scalar names are fine here.
                OutputTypeKind::Scalar => (),

                OutputTypeKind::Enum => {
                    if index.lookup_enum(type_name, namespace).is_none() {
                        self.errors.push(TypeValidationError::UndefinedTypeName {
                            referencing_type_name: object_type.name().to_string(),
                            undefined_type_name: type_name.to_string(),
                        });
                    }
                },

                OutputTypeKind::Object => {
                    if index.lookup_object_type(type_name, namespace).is_some() {
                        // Valid.
                    } else if index.lookup_input_type(type_name, namespace).is_some()
                        || index.lookup_enum(type_name, namespace).is_some() {
                        self.errors.push(
                            TypeValidationError::InvalidOutputRefToNonObjectType {
                                field_name: field.name().to_string(),
                                invalid_type_name: type_name.to_string(),
                                parent_type_name: object_type.name().to_string(),
                            }
                        );
                    } else {
                        self.errors.push(TypeValidationError::UndefinedTypeName {
                            referencing_type_name: object_type.name().to_string(),
                            undefined_type_name: type_name.to_string(),
                        });
                    }
                },
            }

            let parent_name = format!("{}.{}", object_type.name(), field.name());
            for arg in field.args() {
                self.validate_arg(&parent_name, arg);
            }
        }
    }

    fn validate_arg(&mut self, parent_type_name: &str, arg: &SchemaArg) {
        let index = self.index;
        if arg.candidate_types().is_empty() {
            self.errors.push(TypeValidationError::EmptyCandidateTypes {
                arg_name: arg.name().to_string(),
                parent_type_name: parent_type_name.to_string(),
            });
        }

        for candidate in arg.candidate_types() {
            let type_name = candidate.type_name();
            let namespace = candidate.namespace();
            match candidate.kind() {
                InputTypeKind::Null => (),

                InputTypeKind::Scalar => {
                    if ScalarKind::from_name(type_name).is_none() {
                        self.errors.push(TypeValidationError::UnknownScalarType {
                            arg_name: arg.name().to_string(),
                            parent_type_name: parent_type_name.to_string(),
                            scalar_name: type_name.to_string(),
                        });
                    }
                },

                InputTypeKind::Enum => {
                    if index.lookup_enum(type_name, namespace).is_none() {
                        self.errors.push(TypeValidationError::UndefinedTypeName {
                            referencing_type_name: parent_type_name.to_string(),
                            undefined_type_name: type_name.to_string(),
                        });
                    }
                },

                InputTypeKind::InputObject => {
                    if index.lookup_input_type(type_name, namespace).is_some() {
                        // Valid.
                    } else if index.lookup_object_type(type_name, namespace).is_some()
                        || index.lookup_enum(type_name, namespace).is_some() {
                        self.errors.push(
                            TypeValidationError::InvalidInputRefToNonInputType {
                                arg_name: arg.name().to_string(),
                                invalid_type_name: type_name.to_string(),
                                parent_type_name: parent_type_name.to_string(),
                            }
                        );
                    } else {
                        self.errors.push(TypeValidationError::UndefinedTypeName {
                            referencing_type_name: parent_type_name.to_string(),
                            undefined_type_name: type_name.to_string(),
                        });
                    }
                },
            }
        }
    }

    /// Default selections recurse through embedded fields, so a chain of
    /// embedded types that loops back on itself can never be selected by
    /// default.
    fn find_embedded_cycles(
        &mut self,
        object_type: &'a ObjectType,
        path: &mut Vec<(&'a str, &'a str)>,
        reported_cycles: &mut HashSet<Vec<String>>,
    ) {
        let index = self.index;
        for field in object_type.fields() {
            let output_type = field.output_type();
            let child_type = output_type.object_ref()
                .and_then(|child_ref| {
                    index.lookup_object_type(child_ref.name(), child_ref.namespace())
                });
            let child_type = match child_type {
                Some(child_type) if child_type.is_embedded() => child_type,
                _ => continue,
            };

            path.push((object_type.name(), field.name()));
            let cycle_start = path.iter()
                .position(|(type_name, _)| *type_name == child_type.name());
            if let Some(cycle_start) = cycle_start {
                let mut circular_field_path: Vec<String> =
                    path[cycle_start..].iter()
                        .map(|(type_name, field_name)| format!("{type_name}.{field_name}"))
                        .collect();
                // Every type in the loop would otherwise report the same cycle
                // starting from a different member.
                let mut cycle_key = circular_field_path.clone();
                cycle_key.sort();
                if reported_cycles.insert(cycle_key) {
                    circular_field_path.push(child_type.name().to_string());
                    self.errors.push(
                        TypeValidationError::CircularEmbeddedTypeChain {
                            circular_field_path,
                        }
                    );
                }
            } else {
                self.find_embedded_cycles(child_type, path, reported_cycles);
            }
            path.pop();
        }
    }
}
