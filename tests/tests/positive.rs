//! The Positive kind evaluated directly, without a registry.

use pretty_assertions::assert_eq;
use sumac_tests::prelude::*;

#[test]
fn test_timeout_thirty_is_valid() {
    let result = validate("timeoutSeconds", POSITIVE, &Value::Int(30), &KindTable::builtin());
    assert!(result.unwrap().is_valid());
}

#[test]
fn test_timeout_zero_must_be_positive() {
    let result = validate("timeoutSeconds", POSITIVE, &Value::Int(0), &KindTable::builtin())
        .unwrap();

    let violation = result.violation().expect("zero is not positive");
    assert_eq!(violation.message, "must be positive");
    assert_eq!(violation.to_string(), "field timeoutSeconds must be positive, got 0");
}

#[test]
fn test_retries_negative_is_invalid() {
    let result = validate("retries", POSITIVE, &Value::Int(-5), &KindTable::builtin()).unwrap();
    assert!(result.is_invalid());
}

#[test]
fn test_bogus_kind_is_configuration_error() {
    let err = validate("retries", "Bogus", &Value::Int(5), &KindTable::builtin()).unwrap_err();
    assert_eq!(
        err,
        ConstraintError::UnknownKind {
            field: "retries".into(),
            kind: "Bogus".into()
        }
    );
}

#[test]
fn test_non_finite_policy() {
    let kinds = KindTable::builtin();
    assert!(validate("x", POSITIVE, &Value::Float(f64::NAN), &kinds)
        .unwrap()
        .is_invalid());
    assert!(validate("x", POSITIVE, &Value::Float(f64::INFINITY), &kinds)
        .unwrap()
        .is_valid());
    assert!(validate("x", POSITIVE, &Value::Float(f64::NEG_INFINITY), &kinds)
        .unwrap()
        .is_invalid());
}

#[test]
fn test_every_positive_integer_passes_and_the_rest_fail() {
    let kinds = KindTable::builtin();
    for v in -1000i64..=1000 {
        let valid = validate("n", POSITIVE, &Value::Int(v), &kinds)
            .unwrap()
            .is_valid();
        assert_eq!(valid, v > 0, "value {}", v);
    }
}

#[test]
fn test_evaluation_is_thread_safe() {
    let kinds = KindTable::builtin();
    let inputs: Vec<i64> = (-50..50).collect();

    let expected: Vec<bool> = inputs
        .iter()
        .map(|v| validate("n", POSITIVE, &Value::Int(*v), &kinds).unwrap().is_valid())
        .collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    inputs
                        .iter()
                        .map(|v| validate("n", POSITIVE, &Value::Int(*v), &kinds).unwrap().is_valid())
                        .collect::<Vec<bool>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
