//! Sumac Constraint
//!
//! Evaluate field values against declared constraints.
//!
//! Responsibilities:
//! - Evaluate one constraint kind against one value (`validate`)
//! - Check every constraint of a field, or of every registered field
//! - Distinguish validation failures from configuration errors
//! - Collect all violations instead of stopping at the first

mod checker;
mod error;
mod evaluator;
mod violation;

pub use checker::ConstraintChecker;
pub use error::{ConstraintError, ConstraintResult};
pub use evaluator::{validate, validate_with, ValidationResult};
pub use violation::{Violation, ViolationSeverity, Violations};
