//! Error types for scenario runs.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur while running a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Scenario {scenario} has no schema")]
    MissingSchema { scenario: String },

    #[error("Failed to load {path}: {message}")]
    Load { path: PathBuf, message: String },

    #[error("Step {step}: {message}")]
    AssertionFailed { step: String, message: String },
}

impl ScenarioError {
    pub fn missing_schema(scenario: impl Into<String>) -> Self {
        Self::MissingSchema {
            scenario: scenario.into(),
        }
    }

    pub fn load(path: &Path, message: impl Into<String>) -> Self {
        Self::Load {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }
}
