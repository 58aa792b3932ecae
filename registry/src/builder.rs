//! RegistryBuilder for constructing an immutable Registry.

use crate::{
    ConstraintDecl, FieldDef, KindArgs, KindTable, Registry, NON_NEGATIVE, POSITIVE, RANGE,
    REQUIRED,
};
use sumac_core::{FieldId, Value, ValueType};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during registry construction.
///
/// All of these are configuration errors: the declarations and the kind
/// table disagree, and startup should abort.
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("Duplicate field name: {0}")]
    DuplicateField(String),

    #[error("Duplicate constraint kind: {0}")]
    DuplicateKind(String),

    #[error("Unknown constraint kind {kind} on field {field}")]
    UnknownKind { field: String, kind: String },

    #[error("Constraint {kind} does not apply to field {field} of type {type_name}")]
    NotApplicable {
        field: String,
        kind: String,
        type_name: String,
    },

    #[error("Invalid arguments for {kind} on field {field}: {message}")]
    InvalidArgs {
        field: String,
        kind: String,
        message: String,
    },
}

/// Builder for constructing an immutable Registry.
#[derive(Debug)]
pub struct RegistryBuilder {
    /// Constraint kinds fields may refer to.
    kinds: KindTable,
    /// Fields in declaration order; index == FieldId.
    fields: Vec<FieldDef>,
    /// Field name to ID mapping.
    field_names: HashMap<String, FieldId>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Create a new builder with the built-in kinds.
    pub fn new() -> Self {
        Self::with_kinds(KindTable::builtin())
    }

    /// Create a new builder resolving kinds against the given table.
    pub fn with_kinds(kinds: KindTable) -> Self {
        Self {
            kinds,
            fields: Vec::new(),
            field_names: HashMap::new(),
        }
    }

    /// Add a field definition.
    pub fn add_field(&mut self, name: impl Into<String>) -> FieldBuilder<'_> {
        FieldBuilder {
            builder: self,
            name: name.into(),
            value_type: None,
            constraints: Vec::new(),
        }
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Result<Registry, RegistryError> {
        log::debug!(
            "built registry with {} fields and {} kinds",
            self.fields.len(),
            self.kinds.len()
        );
        Ok(Registry::new(self.kinds, self.fields, self.field_names))
    }

    fn check_decl(
        &self,
        field: &str,
        value_type: Option<ValueType>,
        decl: &ConstraintDecl,
    ) -> Result<(), RegistryError> {
        let kind = self
            .kinds
            .get(&decl.kind)
            .ok_or_else(|| RegistryError::UnknownKind {
                field: field.to_string(),
                kind: decl.kind.clone(),
            })?;

        if let Some(ty) = value_type {
            if kind.is_numeric() && !ty.is_numeric() {
                return Err(RegistryError::NotApplicable {
                    field: field.to_string(),
                    kind: decl.kind.clone(),
                    type_name: ty.name().to_string(),
                });
            }
        }

        kind.check_args(&decl.args)
            .map_err(|message| RegistryError::InvalidArgs {
                field: field.to_string(),
                kind: decl.kind.clone(),
                message,
            })
    }
}

/// Builder for a field definition.
pub struct FieldBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    name: String,
    value_type: Option<ValueType>,
    constraints: Vec<ConstraintDecl>,
}

impl<'a> FieldBuilder<'a> {
    /// Set the declared type.
    pub fn of_type(mut self, value_type: ValueType) -> Self {
        self.value_type = Some(value_type);
        self
    }

    /// Attach a constraint by kind tag.
    pub fn constraint(self, kind: impl Into<String>) -> Self {
        self.decl(ConstraintDecl::new(kind))
    }

    /// Attach a constraint with arguments.
    pub fn constraint_with(self, kind: impl Into<String>, args: KindArgs) -> Self {
        self.decl(ConstraintDecl::new(kind).with_args(args))
    }

    /// Attach a fully built declaration.
    pub fn decl(mut self, decl: ConstraintDecl) -> Self {
        self.constraints.push(decl);
        self
    }

    /// Value must be > 0.
    pub fn positive(self) -> Self {
        self.constraint(POSITIVE)
    }

    /// Value must be >= 0.
    pub fn non_negative(self) -> Self {
        self.constraint(NON_NEGATIVE)
    }

    /// Value must lie within the inclusive bounds.
    pub fn range(self, min: Option<Value>, max: Option<Value>) -> Self {
        self.decl(ConstraintDecl::new(RANGE).with_range(min, max))
    }

    /// Value must be present.
    pub fn required(self) -> Self {
        self.constraint(REQUIRED)
    }

    /// Downgrade the most recently attached constraint to a warning.
    pub fn soft(mut self) -> Self {
        if let Some(last) = self.constraints.last_mut() {
            last.hard = false;
        }
        self
    }

    /// Finish building this field.
    pub fn done(self) -> Result<FieldId, RegistryError> {
        // Check for duplicate name
        if self.builder.field_names.contains_key(&self.name) {
            return Err(RegistryError::DuplicateField(self.name));
        }

        for decl in &self.constraints {
            self.builder.check_decl(&self.name, self.value_type, decl)?;
        }

        let id = FieldId::new(self.builder.fields.len() as u32);
        log::debug!(
            "registered field {} ({}) with constraints [{}]",
            self.name,
            id,
            self.constraints
                .iter()
                .map(|c| c.kind.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let field_def = FieldDef {
            value_type: self.value_type,
            constraints: self.constraints,
            ..FieldDef::new(id, self.name.clone())
        };

        self.builder.field_names.insert(self.name, id);
        self.builder.fields.push(field_def);

        Ok(id)
    }
}
