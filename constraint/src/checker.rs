//! Constraint checking over a registry.

use sumac_core::{FieldValues, Value};
use sumac_registry::{ConstraintDecl, FieldDef, Registry};

use crate::error::{ConstraintError, ConstraintResult};
use crate::evaluator::{evaluate, ValidationResult};
use crate::violation::{Violation, ViolationSeverity, Violations};

/// Constraint checker.
///
/// Holds only a shared reference to an immutable registry, so one checker
/// can be used from many threads at once.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintChecker<'r> {
    registry: &'r Registry,
}

impl<'r> ConstraintChecker<'r> {
    /// Create a new constraint checker.
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Check every constraint declared on one field.
    pub fn check_field(&self, name: &str, value: &Value) -> ConstraintResult<Violations> {
        let field = self
            .registry
            .get_field(name)
            .ok_or_else(|| ConstraintError::unknown_field(name))?;
        self.check_def(field, value)
    }

    /// Check all registered fields.
    ///
    /// Fields missing from `values` are checked as Null. Every violation is
    /// reported; a failing field does not stop the others from being checked.
    pub fn check_all(&self, values: &FieldValues) -> ConstraintResult<Violations> {
        let mut unknown: Vec<&str> = values
            .keys()
            .map(|k| k.as_str())
            .filter(|k| !self.registry.has_field(k))
            .collect();
        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(ConstraintError::unknown_field(unknown[0]));
        }

        let missing = Value::Null;
        let mut violations = Violations::new();
        for field in self.registry.all_fields() {
            let value = values.get(&field.name).unwrap_or(&missing);
            violations.merge(self.check_def(field, value)?);
        }

        log::debug!(
            "checked {} fields: {} errors, {} warnings",
            self.registry.field_count(),
            violations.errors().count(),
            violations.warnings().count()
        );
        Ok(violations)
    }

    // ========== Internal checking methods ==========

    fn check_def(&self, field: &FieldDef, value: &Value) -> ConstraintResult<Violations> {
        if let Some(ty) = field.value_type {
            if !ty.accepts(value) {
                return Err(ConstraintError::type_mismatch(
                    &field.name,
                    ty.name(),
                    value.type_name(),
                ));
            }
        }

        let mut violations = Violations::new();
        for decl in &field.constraints {
            if let Some(violation) = self.check_constraint(field, decl, value)? {
                violations.push(violation);
            }
        }
        Ok(violations)
    }

    /// Check a single declaration.
    fn check_constraint(
        &self,
        field: &FieldDef,
        decl: &ConstraintDecl,
        value: &Value,
    ) -> ConstraintResult<Option<Violation>> {
        let kind = self
            .registry
            .get_kind(&decl.kind)
            .ok_or_else(|| ConstraintError::unknown_kind(&field.name, &decl.kind))?;

        match evaluate(&field.name, kind, &decl.args, value)? {
            ValidationResult::Valid => Ok(None),
            ValidationResult::Invalid(violation) => {
                let violation = violation.with_field_id(field.id);
                if decl.hard {
                    Ok(Some(violation))
                } else {
                    log::debug!("soft constraint failed: {}", violation);
                    Ok(Some(violation.with_severity(ViolationSeverity::Warning)))
                }
            }
        }
    }
}
