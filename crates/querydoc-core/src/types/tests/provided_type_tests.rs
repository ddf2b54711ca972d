use crate::types::EnumType;
use crate::types::ProvidedType;
use serde_json::json;

#[test]
fn numbers() {
    assert_eq!(ProvidedType::of(&json!(42), None), ProvidedType::Int);
    assert_eq!(ProvidedType::of(&json!(-7), None), ProvidedType::Int);
    assert_eq!(ProvidedType::of(&json!(1.5), None), ProvidedType::Float);
    // Whole floats are integers as far as arguments are concerned.
    assert_eq!(ProvidedType::of(&json!(2.0), None), ProvidedType::Int);
    assert_eq!(ProvidedType::of(&json!(u64::MAX), None), ProvidedType::BigInt);
}

#[test]
fn strings() {
    assert_eq!(ProvidedType::of(&json!("hello"), None), ProvidedType::String);
    assert_eq!(
        ProvidedType::of(&json!("67e55044-10b1-426f-9247-bb680e5fe0c8"), None),
        ProvidedType::UUID,
    );
    assert_eq!(
        ProvidedType::of(&json!("2020-01-01T00:00:00Z"), None),
        ProvidedType::DateTime,
    );
    assert_eq!(ProvidedType::of(&json!("2020-01-01"), None), ProvidedType::String);
}

#[test]
fn strings_are_enum_values_only_when_declared() {
    let role = EnumType::new("Role", &["USER", "ADMIN"]);

    assert_eq!(
        ProvidedType::of(&json!("ADMIN"), Some(&role)),
        ProvidedType::Enum("Role".to_string()),
    );
    assert_eq!(ProvidedType::of(&json!("OWNER"), Some(&role)), ProvidedType::String);
    assert_eq!(ProvidedType::of(&json!("ADMIN"), None), ProvidedType::String);
}

#[test]
fn other_values() {
    assert_eq!(ProvidedType::of(&json!(null), None), ProvidedType::Null);
    assert_eq!(ProvidedType::of(&json!(false), None), ProvidedType::Boolean);
    assert_eq!(ProvidedType::of(&json!({ "a": 1 }), None), ProvidedType::Object);
}

#[test]
fn list_item_types_are_deduplicated() {
    assert_eq!(
        ProvidedType::of(&json!([1, 2, "a", 3]), None),
        ProvidedType::List(vec![ProvidedType::Int, ProvidedType::String]),
    );
    assert_eq!(ProvidedType::of(&json!([]), None), ProvidedType::List(vec![]));
}

#[test]
fn floats_absorb_ints_in_lists() {
    assert_eq!(
        ProvidedType::of(&json!([1, 1.5, 2]), None),
        ProvidedType::List(vec![ProvidedType::Float]),
    );
}

#[test]
fn display_names() {
    assert_eq!(ProvidedType::Object.to_string(), "Json");
    assert_eq!(ProvidedType::Null.to_string(), "null");
    assert_eq!(
        ProvidedType::List(vec![ProvidedType::Int, ProvidedType::String]).to_string(),
        "List<Int | String>",
    );
    assert_eq!(serde_json::to_value(ProvidedType::UUID).ok(), Some(json!("UUID")));
}
