//! Sumac integration test framework.
//!
//! Scenarios load a schema fixture, then run named steps that feed field
//! values through the checker and verify the reported violations.
//!
//! ```ignore
//! Scenario::new("service")
//!     .schema("service.json")
//!     .step("defaults_pass", values! { "timeoutSeconds" => 30i64 }, |a| a.passes())
//!     .run()
//!     .unwrap();
//! ```

mod error;
mod scenario;

pub use assertion::{Assertion, AssertionBuilder};
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::Scenario;

/// Everything a test file needs.
pub mod prelude {
    pub use crate::{Assertion, AssertionBuilder, Scenario, ScenarioError, ScenarioResult};
    pub use sumac_constraint::{validate, validate_with, ConstraintChecker, ConstraintError};
    pub use sumac_core::{values, FieldValues, Value, ValueType};
    pub use sumac_registry::{
        KindArgs, KindDef, KindTable, Registry, RegistryBuilder, SchemaConfig, NON_NEGATIVE,
        POSITIVE, RANGE, REQUIRED,
    };
}

/// Directory holding the JSON fixtures.
pub fn fixtures_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}
