//! Service schema scenarios.
//!
//! Runs the service schema fixture against inline and file-based values.

use sumac_tests::prelude::*;

mod file_values {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("service_files")
            .schema("service.json")
            .step_file("all_valid", "service_values_ok.json", |a| {
                a.passes().errors(0).warnings(0)
            })
            .step_file("everything_wrong", "service_values_bad.json", |a| {
                a.fails()
                    .errors(5)
                    .warnings(1)
                    .violated("timeoutSeconds", POSITIVE)
                    .violated("retries", NON_NEGATIVE)
                    .violated("workers", POSITIVE)
                    .violated("sampleRate", RANGE)
                    .violated("backoffFactor", RANGE)
                    .violated("host", REQUIRED)
                    .message("field timeoutSeconds must be positive, got 0")
                    .message("field retries must be non-negative, got -5")
                    .message("field sampleRate must be in range [0, 1], got 1.5")
                    .message("field host is required")
            })
            .step_file("wrong_type", "service_values_wrong_type.json", |a| {
                a.error("expected Int, got String")
            })
    }

    #[test]
    fn test_service_value_files() {
        scenario().run().unwrap();
    }
}

mod inline_values {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("service_inline")
            .schema("service.json")
            .step(
                "minimal",
                values! { "retries" => 3i64, "host" => "localhost" },
                |a| a.passes().clean("timeoutSeconds").clean("workers"),
            )
            .step(
                "missing_required",
                values! { "timeoutSeconds" => 10i64 },
                |a| a.fails().errors(2).violated("retries", REQUIRED).violated("host", REQUIRED),
            )
            .step(
                "soft_only",
                values! {
                    "retries" => 1i64,
                    "host" => "localhost",
                    "backoffFactor" => 50.0,
                },
                |a| a.passes().warnings(1).violated("backoffFactor", RANGE),
            )
            .step(
                "nan_sample_rate",
                values! {
                    "retries" => 1i64,
                    "host" => "localhost",
                    "sampleRate" => f64::NAN,
                },
                |a| a.fails().violated("sampleRate", RANGE),
            )
            .step(
                "unknown_field",
                values! { "retries" => 1i64, "colour" => "red" },
                |a| a.error("Unknown field: colour"),
            )
    }

    #[test]
    fn test_service_inline_values() {
        scenario().run().unwrap();
    }
}
