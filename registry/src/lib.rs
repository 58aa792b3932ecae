//! Sumac Registry
//!
//! Declarative constraint registration. Single source of truth for which
//! constraint kinds exist and which fields carry them.
//! The registry is immutable after construction via RegistryBuilder.

mod builder;
mod config;
mod kind;
mod registry;
mod types;

pub use builder::{FieldBuilder, RegistryBuilder, RegistryError};
pub use config::{load_values, value_from_json, value_to_json, ConfigError, SchemaConfig};
pub use kind::*;
pub use registry::Registry;
pub use types::*;
