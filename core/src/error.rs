//! Common error types for sumac values.

use thiserror::Error;

/// Errors raised while interpreting declared field types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    /// A type name that does not correspond to any ValueType.
    #[error("Unknown value type: {0}")]
    UnknownType(String),
}
