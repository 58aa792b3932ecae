//! Declaring constraints with builder calls and checking them.

use pretty_assertions::assert_eq;
use sumac_tests::prelude::*;

fn registry() -> Registry {
    let mut builder = RegistryBuilder::new();
    builder
        .add_field("timeoutSeconds")
        .of_type(ValueType::Int)
        .positive()
        .done()
        .unwrap();
    builder
        .add_field("retries")
        .of_type(ValueType::Int)
        .non_negative()
        .done()
        .unwrap();
    builder
        .add_field("ratio")
        .of_type(ValueType::Float)
        .range(Some(Value::Int(0)), Some(Value::Int(1)))
        .done()
        .unwrap();
    builder.build().unwrap()
}

#[test]
fn test_all_violations_reported_together() {
    let registry = registry();
    let checker = ConstraintChecker::new(&registry);

    let violations = checker
        .check_all(&values! {
            "timeoutSeconds" => -3i64,
            "retries" => -1i64,
            "ratio" => 2.0,
        })
        .unwrap();

    assert_eq!(
        violations.to_string(),
        "field timeoutSeconds must be positive, got -3\n\
         field retries must be non-negative, got -1\n\
         field ratio must be in range [0, 1], got 2"
    );
}

#[test]
fn test_checker_shared_across_threads() {
    let registry = registry();
    let checker = ConstraintChecker::new(&registry);

    std::thread::scope(|s| {
        for i in 0..4i64 {
            s.spawn(move || {
                let ok = checker.check_field("timeoutSeconds", &Value::Int(i + 1)).unwrap();
                assert!(ok.is_empty());
                let bad = checker.check_field("timeoutSeconds", &Value::Int(-i)).unwrap();
                assert_eq!(bad.len(), 1);
            });
        }
    });
}
