//! Field declaration types.

use crate::KindArgs;
use sumac_core::{FieldId, Value, ValueType};

/// A constraint attached to a field.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintDecl {
    /// Kind tag, resolved against the kind table when the field is registered.
    pub kind: String,
    /// Arguments of the declaration.
    pub args: KindArgs,
    /// Whether a violation is an error (hard) or a warning (soft).
    pub hard: bool,
}

impl ConstraintDecl {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            args: KindArgs::default(),
            hard: true,
        }
    }

    pub fn with_args(mut self, args: KindArgs) -> Self {
        self.args = args;
        self
    }

    pub fn with_range(mut self, min: Option<Value>, max: Option<Value>) -> Self {
        self.args = self.args.with_range(min, max);
        self
    }

    pub fn soft(mut self) -> Self {
        self.hard = false;
        self
    }
}

/// Field descriptor: a configurable value and its constraints.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Unique identifier.
    pub id: FieldId,
    /// Field name.
    pub name: String,
    /// Declared type, if known. Untyped fields are gated on their runtime value.
    pub value_type: Option<ValueType>,
    /// Constraints in declaration order.
    pub constraints: Vec<ConstraintDecl>,
}

impl FieldDef {
    pub fn new(id: FieldId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            value_type: None,
            constraints: Vec::new(),
        }
    }

    /// Check if the field declares a constraint of the given kind.
    pub fn has_constraint(&self, kind: &str) -> bool {
        self.constraints.iter().any(|c| c.kind == kind)
    }

    /// Get all constraint kind tags.
    pub fn constraint_kinds(&self) -> impl Iterator<Item = &str> {
        self.constraints.iter().map(|c| c.kind.as_str())
    }
}
