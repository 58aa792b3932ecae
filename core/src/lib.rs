//! Sumac Core Types
//!
//! This crate provides the foundational types used throughout sumac:
//! - Field identifiers (FieldId)
//! - Values (the Value enum a field holds once it has been populated)
//! - Declared field types (ValueType)

mod error;
mod id;
mod value;

pub use error::*;
pub use id::*;
pub use value::*;
