//! Misconfigured schemas must fail at load time, never at check time.

use sumac_tests::prelude::*;

#[test]
fn test_unknown_kind_aborts_loading() {
    let err = Scenario::new("bogus").schema("bogus_kind.json").load_registry().unwrap_err();
    assert!(
        err.to_string().contains("Unknown constraint kind Bogus on field retries"),
        "{}",
        err
    );
}

#[test]
fn test_numeric_kind_on_string_field_aborts_loading() {
    let err = Scenario::new("string")
        .schema("positive_on_string.json")
        .load_registry()
        .unwrap_err();
    assert!(err.to_string().contains("does not apply to field host"), "{}", err);
}

#[test]
fn test_misspelled_constraint_key_aborts_loading() {
    let err = Scenario::new("typo")
        .schema("misspelled_bound.json")
        .load_registry()
        .unwrap_err();
    assert!(matches!(err, ScenarioError::Load { .. }), "{}", err);
}

#[test]
fn test_bounds_on_argless_kind_abort_loading() {
    let err = Scenario::new("bounded")
        .schema("bounds_on_positive.json")
        .load_registry()
        .unwrap_err();
    assert!(
        err.to_string()
            .contains("Invalid arguments for Positive on field timeoutSeconds"),
        "{}",
        err
    );
}

#[test]
fn test_missing_schema_fixture() {
    let err = Scenario::new("missing")
        .schema("no_such_schema.json")
        .load_registry()
        .unwrap_err();
    assert!(matches!(err, ScenarioError::Load { .. }));
}

#[test]
fn test_scenario_without_schema() {
    let err = Scenario::new("empty").run().unwrap_err();
    assert!(matches!(err, ScenarioError::MissingSchema { .. }));
}

#[test]
fn test_custom_kind_loaded_from_schema() {
    let kinds = KindTable::builtin()
        .with(KindDef::numeric(
            "Even",
            |v, _| v.as_int().map(|i| i % 2 == 0).unwrap_or(false),
            |_| "must be even".to_string(),
        ))
        .unwrap();

    // Unknown without the custom table
    assert!(Scenario::new("even").schema("even_kind.json").load_registry().is_err());

    Scenario::new("even")
        .schema("even_kind.json")
        .kinds(kinds)
        .step("even", values! { "replicas" => 4i64 }, |a| a.passes())
        .step("odd", values! { "replicas" => 3i64 }, |a| {
            a.fails().errors(1).message("field replicas must be even, got 3")
        })
        .step("negative_even", values! { "replicas" => -2i64 }, |a| {
            a.fails().errors(1).violated("replicas", POSITIVE)
        })
        .run()
        .unwrap();
}
