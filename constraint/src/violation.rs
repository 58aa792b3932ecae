//! Constraint violation types.

use sumac_core::{FieldId, Value};
use std::fmt;

/// Severity of a constraint violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationSeverity {
    /// Hard constraint - the values are rejected.
    Error,
    /// Soft constraint - warning only.
    Warning,
}

/// A constraint violation.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The field whose value failed.
    pub field: String,
    /// The kind tag that was violated.
    pub kind: String,
    /// The offending value.
    pub value: Value,
    /// The severity of the violation.
    pub severity: ViolationSeverity,
    /// Reason, e.g. "must be positive".
    pub message: String,
    /// Registry ID of the field, when checked through a registry.
    pub field_id: Option<FieldId>,
}

impl Violation {
    /// Create a new violation.
    pub fn new(
        field: impl Into<String>,
        kind: impl Into<String>,
        value: Value,
        severity: ViolationSeverity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind: kind.into(),
            value,
            severity,
            message: message.into(),
            field_id: None,
        }
    }

    /// Create an error-level violation.
    pub fn error(
        field: impl Into<String>,
        kind: impl Into<String>,
        value: Value,
        message: impl Into<String>,
    ) -> Self {
        Self::new(field, kind, value, ViolationSeverity::Error, message)
    }

    /// Create a warning-level violation.
    pub fn warning(
        field: impl Into<String>,
        kind: impl Into<String>,
        value: Value,
        message: impl Into<String>,
    ) -> Self {
        Self::new(field, kind, value, ViolationSeverity::Warning, message)
    }

    /// Add a field ID to the violation context.
    pub fn with_field_id(mut self, field_id: FieldId) -> Self {
        self.field_id = Some(field_id);
        self
    }

    /// Change the severity.
    pub fn with_severity(mut self, severity: ViolationSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Check if this is an error-level violation.
    pub fn is_error(&self) -> bool {
        matches!(self.severity, ViolationSeverity::Error)
    }

    /// Check if this is a warning-level violation.
    pub fn is_warning(&self) -> bool {
        matches!(self.severity, ViolationSeverity::Warning)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_null() {
            write!(f, "field {} {}", self.field, self.message)
        } else {
            write!(f, "field {} {}, got {}", self.field, self.message, self.value)
        }
    }
}

/// Collection of violations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Create a new empty violations collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a violation.
    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Check if there are any violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Check if there are any error-level violations.
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.is_error())
    }

    /// Check if there are only warnings.
    pub fn has_only_warnings(&self) -> bool {
        !self.violations.is_empty() && !self.has_errors()
    }

    /// Get all violations.
    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    /// Get error-level violations.
    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_error())
    }

    /// Get warning-level violations.
    pub fn warnings(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.is_warning())
    }

    /// Get violations for one field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations.iter().filter(move |v| v.field == field)
    }

    /// Get the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Merge another violations collection.
    pub fn merge(&mut self, other: Violations) {
        self.violations.extend(other.violations);
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
