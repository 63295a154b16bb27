use eligo::{is_eligible, Evaluator, Rejection};
use serde_json::json;

#[test]
fn empty_criteria_are_vacuously_true() {
    assert!(is_eligible(&json!({}), &json!({})));
    assert!(is_eligible(&json!({"a": 1, "b": [1, 2]}), &json!({})));
    assert!(is_eligible(&json!(null), &json!({})));
}

#[test]
fn scalar_equality() {
    assert!(is_eligible(&json!({"a": 5}), &json!({"a": 5})));
    assert!(!is_eligible(&json!({"a": 5}), &json!({"a": 6})));
}

#[test]
fn nested_path_with_ordinal_operator() {
    let cart = json!({"a": {"b": 7}});
    assert!(is_eligible(&cart, &json!({"a.b": {"gte": 5}})));
    assert!(!is_eligible(&cart, &json!({"a.b": {"gte": 8}})));
}

#[test]
fn set_membership_on_sequence_field() {
    let cart = json!({"tags": ["x", "y"]});
    assert!(is_eligible(&cart, &json!({"tags": {"in": ["y", "z"]}})));
    assert!(!is_eligible(&cart, &json!({"tags": {"in": ["z"]}})));
}

#[test]
fn and_composition() {
    let criteria = json!({"price": {"and": {"gt": 10, "lt": 100}}});
    assert!(is_eligible(&json!({"price": 50}), &criteria));
    assert!(!is_eligible(&json!({"price": 5}), &criteria));
}

#[test]
fn or_composition() {
    let criteria = json!({"price": {"or": {"lt": 10, "gt": 1000}}});
    assert!(is_eligible(&json!({"price": 5}), &criteria));
    assert!(!is_eligible(&json!({"price": 50}), &criteria));
}

#[test]
fn two_operator_keys_make_the_cart_ineligible() {
    let cart = json!({"price": 3});
    let criteria = json!({"price": {"gt": 1, "lt": 5}});
    assert!(!is_eligible(&cart, &criteria));

    let result = Evaluator::new().evaluate(&cart, &criteria);
    match result.rejection() {
        Some(Rejection::Invalid(err)) => assert_eq!(err.key(), Some("price")),
        other => panic!("expected an invalid-criteria rejection, got {other:?}"),
    }
}

#[test]
fn repeated_calls_are_identical() {
    let cart = json!({"items": [{"sku": "a", "qty": 2}], "total": 20});
    let criteria = json!({"items.sku": {"in": ["a"]}, "total": {"lte": 20}});
    let evaluator = Evaluator::new();
    let first = evaluator.evaluate(&cart, &criteria);
    for _ in 0..10 {
        assert_eq!(evaluator.evaluate(&cart, &criteria), first);
    }
    assert!(first.is_eligible());
}

#[test]
fn all_keys_must_hold() {
    let cart = json!({"country": "FR", "total": 120, "items": [{"sku": "book"}]});
    assert!(is_eligible(
        &cart,
        &json!({"country": "FR", "total": {"gte": 100}, "items.sku": "book"})
    ));
    assert!(!is_eligible(
        &cart,
        &json!({"country": "FR", "total": {"gte": 200}, "items.sku": "book"})
    ));
}
