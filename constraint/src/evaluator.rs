//! Single-constraint evaluation.
//!
//! `validate` is a pure function of its inputs: no state, no locking, and
//! the same inputs always give the same result.

use sumac_core::Value;
use sumac_registry::{KindArgs, KindDef, KindTable};

use crate::error::{ConstraintError, ConstraintResult};
use crate::violation::Violation;

/// Outcome of evaluating one constraint against one value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid,
    Invalid(Violation),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(v) => Some(v),
        }
    }

    pub fn into_violation(self) -> Option<Violation> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(v) => Some(v),
        }
    }
}

/// Evaluate `kind` against `value` for the named field.
///
/// An unknown kind, or a numeric kind given a non-numeric value, is a
/// configuration error rather than an invalid result.
pub fn validate(
    field: &str,
    kind: &str,
    value: &Value,
    kinds: &KindTable,
) -> ConstraintResult<ValidationResult> {
    validate_with(field, kind, &KindArgs::default(), value, kinds)
}

/// Like `validate`, for kinds that take arguments (e.g. Range bounds).
///
/// Arguments the kind rejects (a Range with no bounds or with min above
/// max, bounds on a kind that takes none) are a configuration error.
pub fn validate_with(
    field: &str,
    kind: &str,
    args: &KindArgs,
    value: &Value,
    kinds: &KindTable,
) -> ConstraintResult<ValidationResult> {
    let def = kinds
        .get(kind)
        .ok_or_else(|| ConstraintError::unknown_kind(field, kind))?;
    def.check_args(args)
        .map_err(|message| ConstraintError::invalid_args(field, kind, message))?;
    evaluate(field, def, args, value)
}

pub(crate) fn evaluate(
    field: &str,
    def: &KindDef,
    args: &KindArgs,
    value: &Value,
) -> ConstraintResult<ValidationResult> {
    if def.is_numeric() {
        // Presence is Required's concern
        if value.is_null() {
            return Ok(ValidationResult::Valid);
        }
        if !value.is_numeric() {
            return Err(ConstraintError::not_applicable(
                field,
                &def.name,
                value.type_name(),
            ));
        }
    }

    if def.evaluate(value, args) {
        log::trace!("{} satisfies {} on field {}", value, def.name, field);
        Ok(ValidationResult::Valid)
    } else {
        Ok(ValidationResult::Invalid(Violation::error(
            field,
            &def.name,
            value.clone(),
            def.reason(args),
        )))
    }
}
