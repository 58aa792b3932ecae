//! Constraint error types.
//!
//! These are configuration errors, never validation failures: they mean the
//! caller and the kind table disagree about what can be checked.

use thiserror::Error;

/// Result type for constraint operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Errors that can occur during constraint evaluation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("Unknown constraint kind {kind} on field {field}")]
    UnknownKind { field: String, kind: String },

    #[error("Unknown field: {name}")]
    UnknownField { name: String },

    #[error("Constraint {kind} does not apply to {type_name} value of field {field}")]
    NotApplicable {
        field: String,
        kind: String,
        type_name: String,
    },

    #[error("Invalid arguments for {kind} on field {field}: {message}")]
    InvalidArgs {
        field: String,
        kind: String,
        message: String,
    },

    #[error("Type mismatch on field {field}: expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },
}

impl ConstraintError {
    pub fn unknown_kind(field: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnknownKind {
            field: field.into(),
            kind: kind.into(),
        }
    }

    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    pub fn not_applicable(
        field: impl Into<String>,
        kind: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::NotApplicable {
            field: field.into(),
            kind: kind.into(),
            type_name: type_name.into(),
        }
    }

    pub fn invalid_args(
        field: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidArgs {
            field: field.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
