use eligo::{Criteria, CriteriaError, EligoError, Evaluator};
use serde_json::json;

#[test]
fn load_criteria_from_file() {
    let dir = std::env::temp_dir().join("eligo_test_criteria_file");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("promo.json");
    std::fs::write(
        &path,
        r#"{"total": {"gte": 50}, "items.sku": {"in": ["tea", "coffee"]}}"#,
    )
    .unwrap();

    let criteria = Criteria::from_file(&path).unwrap();
    assert_eq!(criteria.keys(), vec!["total", "items.sku"]);

    let cart = json!({"total": 60, "items": [{"sku": "tea"}]});
    assert!(Evaluator::new().is_eligible_compiled(&cart, &criteria));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("eligo_test_does_not_exist.json");
    assert!(matches!(Criteria::from_file(path), Err(EligoError::Io(_))));
}

#[test]
fn invalid_file_contents_are_reported() {
    let dir = std::env::temp_dir().join("eligo_test_invalid_criteria_file");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bad.json");
    std::fs::write(&path, r#"{"total": {"gte": 1, "lte": 5}}"#).unwrap();

    match Criteria::from_file(&path) {
        Err(EligoError::Criteria(CriteriaError::InvalidKey { key, .. })) => {
            assert_eq!(key, "total");
        }
        other => panic!("expected a compile error, got {other:?}"),
    }

    let _ = std::fs::remove_dir_all(&dir);
}
