use crate::document::ArgErrorKind;
use crate::document::ArgValue;
use crate::document::InputRole;
use crate::document::PathSegment;
use crate::document::tests::test_utils::build_mutation;
use crate::document::tests::test_utils::build_query;
use crate::document::tests::test_utils::key_path;
use crate::types::InputTypeKind;
use crate::types::ProvidedType;
use serde_json::json;

#[test]
fn omitted_required_arg_is_reported_once() {
    let document = build_query("findOnePost", json!({ "select": { "id": true } }));

    let diagnostics = document.validate();
    assert!(diagnostics.field_errors.is_empty());
    assert_eq!(diagnostics.arg_errors.len(), 1);
    assert_eq!(diagnostics.arg_errors[0].path, key_path(&["findOnePost", "where"]));
    assert!(matches!(
        &diagnostics.arg_errors[0].kind,
        ArgErrorKind::MissingRequiredArg { name, required: true, candidate_types }
            if name == "where" && candidate_types.len() == 1,
    ));
}

#[test]
fn required_field_args_are_checked_for_true() {
    let document = build_query("queryRaw", json!(true));

    let diagnostics = document.validate();
    let required_missing = diagnostics.arg_errors.iter()
        .filter(|error| matches!(
            error.kind,
            ArgErrorKind::MissingRequiredArg { required: true, .. },
        ))
        .collect::<Vec<_>>();
    assert_eq!(required_missing.len(), 1);
    assert_eq!(required_missing[0].path, key_path(&["queryRaw", "query"]));
}

#[test]
fn missing_required_arg_lists_optional_siblings() {
    let document = build_mutation("createOnePost", json!({
        "data": { "title": "Hello" },
        "select": { "id": true },
    }));

    let diagnostics = document.validate();
    assert_eq!(diagnostics.arg_errors.len(), 2);
    assert_eq!(
        diagnostics.arg_errors[0].path,
        key_path(&["createOnePost", "data", "authorId"]),
    );
    assert!(matches!(
        &diagnostics.arg_errors[0].kind,
        ArgErrorKind::MissingRequiredArg { required: true, .. },
    ));
    assert_eq!(
        diagnostics.arg_errors[1].path,
        key_path(&["createOnePost", "data", "published"]),
    );
    assert!(matches!(
        &diagnostics.arg_errors[1].kind,
        ArgErrorKind::MissingRequiredArg { required: false, .. },
    ));
}

#[test]
fn null_optional_arg_is_listed_with_missing_siblings() {
    let document = build_query("queryRaw", json!({ "parameters": null }));

    let diagnostics = document.validate();
    assert_eq!(diagnostics.arg_errors.len(), 2);
    assert_eq!(diagnostics.arg_errors[0].path, key_path(&["queryRaw", "query"]));
    assert!(matches!(
        &diagnostics.arg_errors[0].kind,
        ArgErrorKind::MissingRequiredArg { required: true, .. },
    ));
    assert_eq!(diagnostics.arg_errors[1].path, key_path(&["queryRaw", "parameters"]));
    assert!(matches!(
        &diagnostics.arg_errors[1].kind,
        ArgErrorKind::MissingRequiredArg { required: false, .. },
    ));
}

#[test]
fn null_optional_arg_alone_is_valid() {
    let document = build_query("queryRaw", json!({
        "query": "SELECT 1",
        "parameters": null,
    }));

    assert!(document.validate().is_empty());
}

#[test]
fn empty_object_for_at_least_one_type_is_reported() {
    let document = build_query("findOnePost", json!({ "where": {} }));

    let diagnostics = document.validate();
    assert_eq!(diagnostics.arg_errors.len(), 2);
    assert_eq!(diagnostics.arg_errors[0].path, key_path(&["findOnePost", "where"]));
    assert_eq!(diagnostics.arg_errors[0].kind, ArgErrorKind::AtLeastOneRequired {
        input_type: "PostWhereUniqueInput".to_string(),
    });
    assert_eq!(diagnostics.arg_errors[1].path, key_path(&["findOnePost", "where", "id"]));
    assert!(matches!(
        &diagnostics.arg_errors[1].kind,
        ArgErrorKind::MissingRequiredArg { required: false, .. },
    ));
}

#[test]
fn more_than_one_key_for_at_most_one_type_is_reported() {
    let document = build_query("findManyPost", json!({
        "orderBy": { "id": "asc", "title": "desc" },
    }));

    let diagnostics = document.validate();
    assert_eq!(diagnostics.arg_errors.len(), 1);
    assert_eq!(diagnostics.arg_errors[0].path, key_path(&["findManyPost", "orderBy"]));
    assert_eq!(diagnostics.arg_errors[0].kind, ArgErrorKind::AtMostOneRequired {
        input_type: "PostOrderByInput".to_string(),
        provided_keys: vec!["id".to_string(), "title".to_string()],
    });
}

#[test]
fn unknown_arg_suggests_selection_key() {
    let document = build_query("findManyPost", json!({ "selct": { "id": true } }));

    let diagnostics = document.validate();
    assert_eq!(diagnostics.arg_errors.len(), 1);
    assert_eq!(diagnostics.arg_errors[0].path, key_path(&["findManyPost", "selct"]));
    assert_eq!(diagnostics.arg_errors[0].kind, ArgErrorKind::InvalidArgName {
        did_you_mean_field: false,
        provided_name: "selct".to_string(),
        provided_value: json!({ "id": true }),
        suggestion: Some("select".to_string()),
    });
}

#[test]
fn field_name_passed_as_arg_is_flagged() {
    let document = build_query("findManyPost", json!({ "title": true }));

    let diagnostics = document.validate();
    assert_eq!(diagnostics.arg_errors.len(), 1);
    assert_eq!(diagnostics.arg_errors[0].path, key_path(&["findManyPost", "title"]));
    assert_eq!(diagnostics.arg_errors[0].kind, ArgErrorKind::InvalidArgName {
        did_you_mean_field: true,
        provided_name: "title".to_string(),
        provided_value: json!(true),
        suggestion: None,
    });
}

#[test]
fn unknown_input_object_field_suggests_sibling() {
    let document = build_query("findManyPost", json!({
        "where": { "titel": "a" },
    }));

    let diagnostics = document.validate();
    assert_eq!(diagnostics.arg_errors.len(), 1);
    assert_eq!(
        diagnostics.arg_errors[0].path,
        key_path(&["findManyPost", "where", "titel"]),
    );
    assert!(matches!(
        &diagnostics.arg_errors[0].kind,
        ArgErrorKind::InvalidArgName {
            did_you_mean_field: false,
            suggestion: Some(suggestion),
            ..
        } if suggestion == "title",
    ));
}

#[test]
fn first_error_free_candidate_wins() {
    let document = build_query("findManyUser", json!({
        "where": { "name": "Alice" },
    }));

    assert!(document.validate().is_empty());
    let where_arg = document.root().args()
        .and_then(|args| args.get("where"))
        .expect("where is resolved");
    assert_eq!(where_arg.input_role(), InputRole::Where);
    let name_arg = where_arg.value().as_nested()
        .and_then(|args| args.get("name"))
        .expect("name is resolved");
    assert_eq!(name_arg.value(), &ArgValue::Scalar(json!("Alice")));
    assert_eq!(name_arg.matched_type().map(|t| t.type_name()), Some("String"));
}

#[test]
fn later_candidate_wins_when_earlier_ones_fail() {
    let document = build_query("findManyUser", json!({
        "where": { "name": null },
    }));

    assert!(document.validate().is_empty());
    let name_arg = document.root().args()
        .and_then(|args| args.get("where"))
        .and_then(|where_arg| where_arg.value().as_nested())
        .and_then(|args| args.get("name"))
        .expect("name is resolved");
    assert_eq!(name_arg.matched_type().map(|t| t.kind()), Some(InputTypeKind::Null));
}

#[test]
fn literal_mismatch_reports_first_literal_candidate() {
    let document = build_query("findManyUser", json!({
        "where": { "name": 42 },
    }));

    let diagnostics = document.validate();
    assert_eq!(diagnostics.arg_errors.len(), 1);
    assert_eq!(
        diagnostics.arg_errors[0].path,
        key_path(&["findManyUser", "where", "name"]),
    );
    match &diagnostics.arg_errors[0].kind {
        ArgErrorKind::InvalidArgType {
            all_candidates,
            best_candidate,
            provided_type,
            provided_value,
        } => {
            assert_eq!(all_candidates.len(), 3);
            assert_eq!(best_candidate.as_ref().map(|c| c.type_name()), Some("String"));
            assert_eq!(provided_type, &ProvidedType::Int);
            assert_eq!(provided_value, &json!(42));
        },
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn object_mismatch_reports_errors_inside_object_candidate() {
    let document = build_query("findManyUser", json!({
        "where": { "name": { "contains": 5 } },
    }));

    let diagnostics = document.validate();
    assert_eq!(diagnostics.arg_errors.len(), 1);
    assert_eq!(
        diagnostics.arg_errors[0].path,
        key_path(&["findManyUser", "where", "name", "contains"]),
    );
    assert!(matches!(
        &diagnostics.arg_errors[0].kind,
        ArgErrorKind::InvalidArgType { provided_type: ProvidedType::Int, .. },
    ));
}

#[test]
fn equally_bad_object_candidates_resolve_in_declaration_order() {
    // `AND` accepts a single `PostWhereInput` before a list of them. Both
    // produce one error here, so the single object wins.
    let document = build_query("findManyPost", json!({
        "where": { "AND": { "bogus": 1 } },
    }));

    let diagnostics = document.validate();
    assert_eq!(diagnostics.arg_errors.len(), 1);
    assert_eq!(
        diagnostics.arg_errors[0].path,
        key_path(&["findManyPost", "where", "AND", "bogus"]),
    );
}

#[test]
fn equally_bad_array_candidates_resolve_in_declaration_order() {
    let document = build_query("findManyPost", json!({
        "where": { "AND": [{ "bogus": 1 }] },
    }));

    let diagnostics = document.validate();
    assert_eq!(diagnostics.arg_errors.len(), 1);
    assert_eq!(
        diagnostics.arg_errors[0].path,
        key_path(&["findManyPost", "where", "AND"]),
    );
    assert!(matches!(
        &diagnostics.arg_errors[0].kind,
        ArgErrorKind::InvalidArgType { best_candidate: Some(candidate), .. }
            if !candidate.is_list(),
    ));
}

#[test]
fn fewer_errors_beat_declaration_order() {
    let document = build_query("findManyPost", json!({
        "where": { "AND": [{ "bogus": 1 }, { "title": 5 }] },
    }));

    // The single-object candidate fails with one error, the list candidate
    // with two, so the single object is reported.
    let diagnostics = document.validate();
    assert_eq!(diagnostics.arg_errors.len(), 1);
    assert_eq!(
        diagnostics.arg_errors[0].path,
        key_path(&["findManyPost", "where", "AND"]),
    );
}

#[test]
fn non_array_value_is_wrapped_for_list_candidate() {
    let document = build_query("findManyPost", json!({
        "where": { "OR": { "title": "a" } },
    }));

    assert!(document.validate().is_empty());
    let or_arg = document.root().args()
        .and_then(|args| args.get("where"))
        .and_then(|where_arg| where_arg.value().as_nested())
        .and_then(|args| args.get("OR"))
        .expect("OR is resolved");
    assert_eq!(or_arg.value().as_list().map(|items| items.len()), Some(1));
}

#[test]
fn errors_in_wrapped_list_elements_have_index_paths() {
    let document = build_query("findManyPost", json!({
        "where": { "OR": { "bogus": 1 } },
    }));

    let diagnostics = document.validate();
    assert_eq!(diagnostics.arg_errors.len(), 1);
    assert_eq!(diagnostics.arg_errors[0].path, vec![
        PathSegment::from("findManyPost"),
        PathSegment::from("where"),
        PathSegment::from("OR"),
        PathSegment::from(0),
        PathSegment::from("bogus"),
    ]);
}

#[test]
fn non_object_element_in_object_list_invalidates_whole_arg() {
    let document = build_query("findManyPost", json!({
        "where": { "OR": [{ "title": "a" }, 5] },
    }));

    let diagnostics = document.validate();
    assert_eq!(diagnostics.arg_errors.len(), 1);
    assert_eq!(
        diagnostics.arg_errors[0].path,
        key_path(&["findManyPost", "where", "OR"]),
    );
    assert!(matches!(
        &diagnostics.arg_errors[0].kind,
        ArgErrorKind::InvalidArgType { .. },
    ));
}

#[test]
fn scalar_list_candidate_checks_each_element() {
    let valid = build_query("findManyPost", json!({
        "where": { "title": { "in": ["a", "b"] } },
    }));
    assert!(valid.validate().is_empty());

    let invalid = build_query("findManyPost", json!({
        "where": { "title": { "in": ["a", 1] } },
    }));
    let diagnostics = invalid.validate();
    assert_eq!(diagnostics.arg_errors.len(), 1);
    assert_eq!(
        diagnostics.arg_errors[0].path,
        key_path(&["findManyPost", "where", "title", "in"]),
    );
}

#[test]
fn enum_candidate_accepts_declared_values_only() {
    let valid = build_query("findManyUser", json!({ "where": { "role": "ADMIN" } }));
    assert!(valid.validate().is_empty());
    let role_arg = valid.root().args()
        .and_then(|args| args.get("where"))
        .and_then(|where_arg| where_arg.value().as_nested())
        .and_then(|args| args.get("role"))
        .expect("role is resolved");
    assert_eq!(role_arg.value(), &ArgValue::EnumLiteral("ADMIN".to_string()));

    let invalid = build_query("findManyUser", json!({ "where": { "role": "OWNER" } }));
    let diagnostics = invalid.validate();
    assert_eq!(diagnostics.arg_errors.len(), 1);
    assert!(matches!(
        &diagnostics.arg_errors[0].kind,
        ArgErrorKind::InvalidArgType { provided_type: ProvidedType::String, .. },
    ));
}

#[test]
fn datetime_strings_are_checked() {
    let valid = build_query("findManyPost", json!({
        "where": { "createdAt": "2020-01-01T00:00:00Z" },
    }));
    assert!(valid.validate().is_empty());

    let invalid = build_query("findManyPost", json!({
        "where": { "createdAt": "yesterday" },
    }));
    assert_eq!(invalid.validate().arg_errors.len(), 1);
}

#[test]
fn order_arg_gets_order_role() {
    let document = build_query("findManyUser", json!({ "orderBy": { "age": "asc" } }));

    assert!(document.validate().is_empty());
    let order_arg = document.root().args()
        .and_then(|args| args.get("orderBy"))
        .expect("orderBy is resolved");
    assert_eq!(order_arg.input_role(), InputRole::Order);
    assert!(order_arg.matched_type().is_some_and(|t| !t.is_list()));
}

#[test]
fn relation_filter_flag_is_carried() {
    let document = build_query("findManyPost", json!({
        "where": { "author": { "is": { "name": "Alice" } } },
    }));

    assert!(document.validate().is_empty());
    let author_arg = document.root().args()
        .and_then(|args| args.get("where"))
        .and_then(|where_arg| where_arg.value().as_nested())
        .and_then(|args| args.get("author"))
        .expect("author filter is resolved");
    assert!(author_arg.is_relation_filter());
    assert_eq!(author_arg.input_role(), InputRole::Plain);
}
