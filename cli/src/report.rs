//! Rendering of check results.

use serde_json::json;
use sumac_constraint::{Violation, ViolationSeverity, Violations};
use sumac_registry::value_to_json;

/// Overall outcome of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
}

impl Outcome {
    pub fn of(violations: &Violations, strict: bool) -> Self {
        if violations.has_errors() || (strict && !violations.is_empty()) {
            Outcome::Failed
        } else {
            Outcome::Passed
        }
    }
}

fn severity_label(severity: ViolationSeverity) -> &'static str {
    match severity {
        ViolationSeverity::Error => "error",
        ViolationSeverity::Warning => "warning",
    }
}

/// One line per violation, e.g. `error: field retries must be positive, got -5`.
pub fn human(violations: &Violations) -> String {
    if violations.is_empty() {
        return "ok: all constraints satisfied".to_string();
    }
    violations
        .all()
        .iter()
        .map(|v| format!("{}: {}", severity_label(v.severity), v))
        .collect::<Vec<_>>()
        .join("\n")
}

fn violation_json(violation: &Violation) -> serde_json::Value {
    json!({
        "field": violation.field,
        "kind": violation.kind,
        "value": value_to_json(&violation.value),
        "severity": severity_label(violation.severity),
        "message": violation.message,
    })
}

pub fn json(violations: &Violations, outcome: Outcome) -> serde_json::Value {
    json!({
        "passed": outcome == Outcome::Passed,
        "errors": violations.errors().count(),
        "warnings": violations.warnings().count(),
        "violations": violations.all().iter().map(violation_json).collect::<Vec<_>>(),
    })
}
