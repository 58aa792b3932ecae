//! Static schema and value files.
//!
//! A schema file declares fields and their constraints as JSON:
//!
//! ```json
//! { "fields": [
//!     { "name": "timeoutSeconds", "type": "int", "constraints": ["Positive"] },
//!     { "name": "ratio", "type": "float",
//!       "constraints": [{ "kind": "Range", "min": 0.0, "max": 1.0, "soft": true }] }
//! ] }
//! ```
//!
//! A values file is a JSON object mapping field names to scalars or lists.

use crate::{ConstraintDecl, KindArgs, KindTable, Registry, RegistryBuilder, RegistryError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use sumac_core::{FieldValues, Value, ValueError, ValueType};
use thiserror::Error;

/// Errors raised while loading schema or value files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Field {field}: {source}")]
    Type {
        field: String,
        #[source]
        source: ValueError,
    },

    #[error("Unsupported value for {field}: {message}")]
    UnsupportedValue { field: String, message: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn unsupported(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Root of a schema file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    pub fields: Vec<FieldConfig>,
}

/// One field in a schema file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub constraints: Vec<ConstraintConfig>,
}

/// A constraint in a schema file: either a bare tag or a detailed entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ConstraintConfig {
    Tag(String),
    Detailed(DetailedConstraint),
}

/// A constraint entry with bounds or a severity.
///
/// Misspelled keys are rejected so a typo cannot drop a bound.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetailedConstraint {
    pub kind: String,
    #[serde(default)]
    pub min: Option<serde_json::Value>,
    #[serde(default)]
    pub max: Option<serde_json::Value>,
    #[serde(default)]
    pub soft: bool,
}

impl ConstraintConfig {
    fn into_decl(self, field: &str) -> Result<ConstraintDecl, ConfigError> {
        match self {
            ConstraintConfig::Tag(kind) => Ok(ConstraintDecl::new(kind)),
            ConstraintConfig::Detailed(detail) => {
                let min = detail.min.as_ref().map(|v| value_from_json(field, v)).transpose()?;
                let max = detail.max.as_ref().map(|v| value_from_json(field, v)).transpose()?;
                let decl = ConstraintDecl::new(detail.kind)
                    .with_args(KindArgs::new().with_range(min, max));
                Ok(if detail.soft { decl.soft() } else { decl })
            }
        }
    }
}

impl SchemaConfig {
    /// Parse a schema from a JSON string.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Read and parse a schema file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        log::debug!("loaded schema from {}", path.display());
        Self::from_json_str(&source)
    }

    /// Register every field against the given kind table.
    pub fn into_registry(self, kinds: KindTable) -> Result<Registry, ConfigError> {
        let mut builder = RegistryBuilder::with_kinds(kinds);

        for field in self.fields {
            let value_type = field
                .type_name
                .as_deref()
                .map(str::parse::<ValueType>)
                .transpose()
                .map_err(|source| ConfigError::Type {
                    field: field.name.clone(),
                    source,
                })?;

            let mut decls = Vec::with_capacity(field.constraints.len());
            for constraint in field.constraints {
                decls.push(constraint.into_decl(&field.name)?);
            }

            let mut fb = builder.add_field(field.name);
            if let Some(ty) = value_type {
                fb = fb.of_type(ty);
            }
            for decl in decls {
                fb = fb.decl(decl);
            }
            fb.done()?;
        }

        Ok(builder.build()?)
    }
}

/// Convert a JSON scalar or array into a field value.
///
/// Integers that fit i64 become Int, larger ones UInt; everything else
/// numeric becomes Float. Objects are rejected.
pub fn value_from_json(field: &str, json: &serde_json::Value) -> Result<Value, ConfigError> {
    match json {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::UInt(u))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err(ConfigError::unsupported(field, format!("number {}", n)))
            }
        }
        serde_json::Value::String(s) => Ok(Value::String(s.clone())),
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| value_from_json(field, item))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        serde_json::Value::Object(_) => Err(ConfigError::unsupported(
            field,
            "objects are not field values",
        )),
    }
}

/// Convert a field value back to JSON for reports.
///
/// NaN and the infinities have no JSON number form and are written as their
/// display strings ("NaN", "inf", "-inf").
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::from(*i),
        Value::UInt(u) => serde_json::Value::from(*u),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or_else(|| serde_json::Value::String(value.to_string())),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::List(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
    }
}

/// Read a values file into a name → value map.
pub fn load_values(path: &Path) -> Result<FieldValues, ConfigError> {
    let source = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&source)?;

    let mut values = FieldValues::with_capacity(raw.len());
    for (name, json) in &raw {
        let value = value_from_json(name, json)?;
        values.insert(name.clone(), value);
    }
    log::debug!("loaded {} values from {}", values.len(), path.display());
    Ok(values)
}
