//! Scenario definition and runner.

use std::path::PathBuf;

use sumac_constraint::ConstraintChecker;
use sumac_core::FieldValues;
use sumac_registry::{load_values, KindTable, Registry, SchemaConfig};

use crate::assertion::{Assertion, AssertionBuilder};
use crate::error::{ScenarioError, ScenarioResult};
use crate::fixtures_dir;

enum StepInput {
    Inline(FieldValues),
    File(String),
}

struct Step {
    name: String,
    input: StepInput,
    assertion: Assertion,
}

/// A schema plus an ordered list of value sets to check against it.
pub struct Scenario {
    name: String,
    schema: Option<String>,
    kinds: KindTable,
    steps: Vec<Step>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            kinds: KindTable::builtin(),
            steps: Vec::new(),
        }
    }

    /// Schema fixture, relative to the fixtures directory.
    pub fn schema(mut self, path: impl Into<String>) -> Self {
        self.schema = Some(path.into());
        self
    }

    /// Resolve kinds against a custom table instead of the built-ins.
    pub fn kinds(mut self, kinds: KindTable) -> Self {
        self.kinds = kinds;
        self
    }

    /// Check inline values.
    pub fn step<F>(mut self, name: &str, values: FieldValues, f: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        self.steps.push(Step {
            name: name.to_string(),
            input: StepInput::Inline(values),
            assertion: f(AssertionBuilder::new()).build(),
        });
        self
    }

    /// Check a values fixture, relative to the fixtures directory.
    pub fn step_file<F>(mut self, name: &str, path: &str, f: F) -> Self
    where
        F: FnOnce(AssertionBuilder) -> AssertionBuilder,
    {
        self.steps.push(Step {
            name: name.to_string(),
            input: StepInput::File(path.to_string()),
            assertion: f(AssertionBuilder::new()).build(),
        });
        self
    }

    /// Load the schema into a registry.
    pub fn load_registry(&self) -> ScenarioResult<Registry> {
        let schema = self
            .schema
            .as_ref()
            .ok_or_else(|| ScenarioError::missing_schema(&self.name))?;
        let path = fixtures_dir().join(schema);
        SchemaConfig::from_path(&path)
            .and_then(|config| config.into_registry(self.kinds.clone()))
            .map_err(|e| ScenarioError::load(&path, e.to_string()))
    }

    /// Run every step in order, stopping at the first failed assertion.
    pub fn run(self) -> ScenarioResult<()> {
        let registry = self.load_registry()?;
        let checker = ConstraintChecker::new(&registry);

        for step in &self.steps {
            let values = match &step.input {
                StepInput::Inline(values) => values.clone(),
                StepInput::File(path) => {
                    let path: PathBuf = fixtures_dir().join(path);
                    load_values(&path).map_err(|e| ScenarioError::load(&path, e.to_string()))?
                }
            };
            let result = checker.check_all(&values).map_err(|e| e.to_string());
            step.assertion.verify(&step.name, &result)?;
        }

        Ok(())
    }
}
