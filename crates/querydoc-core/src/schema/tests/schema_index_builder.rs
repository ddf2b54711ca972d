use crate::document::OperationKind;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaIndex;
use crate::schema::SchemaIndexBuilder;
use crate::schema::TypeValidationError;
use crate::test::blog_schema::BLOG_SCHEMA_JSON;
use crate::types::EnumType;
use crate::types::InputType;
use crate::types::InputTypeKind;
use crate::types::InputTypeRef;
use crate::types::ObjectType;
use crate::types::OutputTypeKind;
use crate::types::OutputTypeRef;
use crate::types::ScalarKind;
use crate::types::SchemaArg;
use crate::types::SchemaField;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn scalar_field(name: &str) -> SchemaField {
    SchemaField::new(name, OutputTypeRef::new(OutputTypeKind::Scalar, "String"))
}

fn object_field(name: &str, type_name: &str) -> SchemaField {
    SchemaField::new(name, OutputTypeRef::new(OutputTypeKind::Object, type_name))
}

fn query_type() -> ObjectType {
    ObjectType::new("Query", vec![scalar_field("ping")])
}

fn validation_errors(result: Result<SchemaIndex>) -> Vec<TypeValidationError> {
    match result {
        Err(SchemaBuildError::TypeValidationErrors(errors)) => errors,
        other => panic!("Expected type validation errors, got: {other:?}"),
    }
}

mod basics {
    use super::*;

    #[test]
    fn blog_schema_builds() -> Result<()> {
        let schema = SchemaIndex::from_json_str(BLOG_SCHEMA_JSON)?;

        assert_eq!(schema.defined_type_count(), 17);
        assert_eq!(schema.object_types().count(), 6);
        assert_eq!(schema.input_types().count(), 9);
        assert_eq!(schema.enum_types().count(), 2);
        assert_eq!(schema.query_type_name(), "Query");
        assert_eq!(schema.mutation_type_name(), Some("Mutation"));

        let root_field = schema.root_field(OperationKind::Query, "findManyPost")
            .expect("root field is defined");
        assert_eq!(root_field.output_type().type_name(), "Post");
        assert!(schema.root_field(OperationKind::Mutation, "findManyPost").is_none());

        Ok(())
    }

    #[test]
    fn query_type_defaults_to_query() -> Result<()> {
        let mut builder = SchemaIndexBuilder::new();
        builder.add_object_type(query_type())?;
        let schema = builder.build()?;

        assert_eq!(schema.query_type_name(), "Query");
        assert_eq!(schema.mutation_type_name(), None);
        assert!(schema.root_type(OperationKind::Mutation).is_none());
        assert_eq!(
            schema.root_type(OperationKind::Query).map(|t| t.name()),
            Some("Query"),
        );

        Ok(())
    }

    #[test]
    fn custom_root_type_names() -> Result<()> {
        let mut builder = SchemaIndex::builder();
        builder.add_object_type(ObjectType::new("RootQuery", vec![scalar_field("a")]))?
            .add_object_type(ObjectType::new("RootMutation", vec![scalar_field("b")]))?
            .set_query_type("RootQuery")
            .set_mutation_type("RootMutation");
        let schema = builder.build()?;

        assert!(schema.root_field(OperationKind::Query, "a").is_some());
        assert!(schema.root_field(OperationKind::Mutation, "b").is_some());

        Ok(())
    }

    #[test]
    fn namespaced_types_do_not_collide() -> Result<()> {
        let mut builder = SchemaIndexBuilder::new();
        builder.add_object_type(query_type())?
            .add_enum_type(EnumType::new("Status", &["A"]))?
            .add_enum_type(EnumType::new("Status", &["B"]).in_namespace("billing"))?;
        let schema = builder.build()?;

        let billing_status = schema.lookup_enum("Status", Some("billing"))
            .expect("namespaced enum is defined");
        assert!(billing_status.has_value("B"));
        let status = schema.lookup_enum("Status", None).expect("enum is defined");
        assert!(status.has_value("A"));
        assert!(schema.lookup_enum("Status", Some("shipping")).is_none());

        Ok(())
    }

    #[test]
    fn unparseable_json_is_a_parse_error() {
        let result = SchemaIndex::from_json_str("{ \"objectTypes\": [");

        assert!(matches!(result, Err(SchemaBuildError::ParseError(_))));
    }
}

mod type_names {
    use super::*;

    #[test]
    fn duplicate_type_definition() -> Result<()> {
        let mut builder = SchemaIndexBuilder::new();
        builder.add_object_type(query_type())?;
        let result = builder.add_input_type(InputType::new("Query", vec![]));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { type_name })
                if type_name == "Query",
        ));

        Ok(())
    }

    #[test]
    fn dunder_prefixed_type_name() {
        let mut builder = SchemaIndexBuilder::new();
        let result = builder.add_enum_type(EnumType::new("__Kind", &["A"]));

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedTypeName { type_name })
                if type_name == "__Kind",
        ));
    }
}

mod type_validation {
    use super::*;

    #[test]
    fn missing_query_root_type() {
        let builder = SchemaIndexBuilder::new();

        assert_eq!(validation_errors(builder.build()), vec![
            TypeValidationError::UndefinedRootType {
                operation: "query".to_string(),
                type_name: "Query".to_string(),
            },
        ]);
    }

    #[test]
    fn missing_mutation_root_type() -> Result<()> {
        let mut builder = SchemaIndexBuilder::new();
        builder.add_object_type(query_type())?
            .set_mutation_type("Mutation");

        assert_eq!(validation_errors(builder.build()), vec![
            TypeValidationError::UndefinedRootType {
                operation: "mutation".to_string(),
                type_name: "Mutation".to_string(),
            },
        ]);

        Ok(())
    }

    #[test]
    fn undefined_output_type() -> Result<()> {
        let mut builder = SchemaIndexBuilder::new();
        builder.add_object_type(ObjectType::new("Query", vec![
            object_field("posts", "Post"),
        ]))?;

        assert_eq!(validation_errors(builder.build()), vec![
            TypeValidationError::UndefinedTypeName {
                referencing_type_name: "Query".to_string(),
                undefined_type_name: "Post".to_string(),
            },
        ]);

        Ok(())
    }

    #[test]
    fn output_ref_to_input_type() -> Result<()> {
        let mut builder = SchemaIndexBuilder::new();
        builder.add_object_type(ObjectType::new("Query", vec![
            object_field("posts", "PostWhereInput"),
        ]))?
            .add_input_type(InputType::new("PostWhereInput", vec![]))?;

        assert_eq!(validation_errors(builder.build()), vec![
            TypeValidationError::InvalidOutputRefToNonObjectType {
                field_name: "posts".to_string(),
                invalid_type_name: "PostWhereInput".to_string(),
                parent_type_name: "Query".to_string(),
            },
        ]);

        Ok(())
    }

    #[test]
    fn input_ref_to_object_type() -> Result<()> {
        let mut builder = SchemaIndexBuilder::new();
        builder.add_object_type(ObjectType::new("Query", vec![
            scalar_field("ping").with_args(vec![
                SchemaArg::new("where", vec![InputTypeRef::input_object("Query")]),
            ]),
        ]))?;

        assert_eq!(validation_errors(builder.build()), vec![
            TypeValidationError::InvalidInputRefToNonInputType {
                arg_name: "where".to_string(),
                invalid_type_name: "Query".to_string(),
                parent_type_name: "Query.ping".to_string(),
            },
        ]);

        Ok(())
    }

    #[test]
    fn unknown_scalar_and_undefined_enum() -> Result<()> {
        let mut builder = SchemaIndexBuilder::new();
        builder.add_object_type(query_type())?
            .add_input_type(InputType::new("Filter", vec![
                SchemaArg::new("when", vec![
                    InputTypeRef::new(InputTypeKind::Scalar, "Timestamp"),
                ]),
                SchemaArg::new("status", vec![InputTypeRef::enum_type("Status")]),
            ]))?;

        assert_eq!(validation_errors(builder.build()), vec![
            TypeValidationError::UnknownScalarType {
                arg_name: "when".to_string(),
                parent_type_name: "Filter".to_string(),
                scalar_name: "Timestamp".to_string(),
            },
            TypeValidationError::UndefinedTypeName {
                referencing_type_name: "Filter".to_string(),
                undefined_type_name: "Status".to_string(),
            },
        ]);

        Ok(())
    }

    #[test]
    fn empty_candidate_types() -> Result<()> {
        let mut builder = SchemaIndexBuilder::new();
        builder.add_object_type(query_type())?
            .add_input_type(InputType::new("Filter", vec![
                SchemaArg::new("anything", vec![]),
                SchemaArg::new("name", vec![
                    InputTypeRef::scalar(ScalarKind::String),
                    InputTypeRef::null(),
                ]),
            ]))?;

        assert_eq!(validation_errors(builder.build()), vec![
            TypeValidationError::EmptyCandidateTypes {
                arg_name: "anything".to_string(),
                parent_type_name: "Filter".to_string(),
            },
        ]);

        Ok(())
    }

    #[test]
    fn all_errors_are_reported_together() -> Result<()> {
        let mut builder = SchemaIndexBuilder::new();
        builder.add_object_type(ObjectType::new("Query", vec![
            object_field("a", "Missing1"),
            object_field("b", "Missing2"),
        ]))?
            .set_mutation_type("Mutation");

        assert_eq!(validation_errors(builder.build()).len(), 3);

        Ok(())
    }
}

mod embedded_types {
    use super::*;

    #[test]
    fn embedded_cycle_is_reported_once() -> Result<()> {
        let mut builder = SchemaIndexBuilder::new();
        builder.add_object_type(query_type())?
            .add_object_type(ObjectType::new("A", vec![object_field("b", "B")]).embedded())?
            .add_object_type(ObjectType::new("B", vec![object_field("a", "A")]).embedded())?;

        assert_eq!(validation_errors(builder.build()), vec![
            TypeValidationError::CircularEmbeddedTypeChain {
                circular_field_path: vec![
                    "A.b".to_string(),
                    "B.a".to_string(),
                    "A".to_string(),
                ],
            },
        ]);

        Ok(())
    }

    #[test]
    fn self_referencing_embedded_type() -> Result<()> {
        let mut builder = SchemaIndexBuilder::new();
        builder.add_object_type(query_type())?
            .add_object_type(
                ObjectType::new("A", vec![object_field("self", "A")]).embedded(),
            )?;

        assert_eq!(validation_errors(builder.build()), vec![
            TypeValidationError::CircularEmbeddedTypeChain {
                circular_field_path: vec!["A.self".to_string(), "A".to_string()],
            },
        ]);

        Ok(())
    }

    #[test]
    fn relation_cycles_are_allowed() -> Result<()> {
        let mut builder = SchemaIndexBuilder::new();
        builder.add_object_type(query_type())?
            .add_object_type(ObjectType::new("User", vec![object_field("posts", "Post")]))?
            .add_object_type(ObjectType::new("Post", vec![object_field("author", "User")]))?;

        assert!(builder.build().is_ok());

        Ok(())
    }
}
