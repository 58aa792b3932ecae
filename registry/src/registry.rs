//! The Registry - immutable field/constraint lookup.

use crate::{FieldDef, KindDef, KindTable};
use sumac_core::FieldId;
use std::collections::HashMap;

/// The Registry provides runtime lookup of field declarations and the
/// kinds they refer to. It is immutable after construction.
#[derive(Debug)]
pub struct Registry {
    /// Kind table every declaration was resolved against.
    kinds: KindTable,
    /// Field definitions in declaration order.
    fields: Vec<FieldDef>,
    /// Field ID lookup by name.
    field_names: HashMap<String, FieldId>,
}

impl Registry {
    /// Create a registry (use RegistryBuilder for construction).
    pub(crate) fn new(
        kinds: KindTable,
        fields: Vec<FieldDef>,
        field_names: HashMap<String, FieldId>,
    ) -> Self {
        Self {
            kinds,
            fields,
            field_names,
        }
    }

    // ==================== Field Lookups ====================

    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.field_names
            .get(name)
            .and_then(|id| self.fields.get(id.index()))
    }

    /// Get a field definition by ID.
    pub fn get_field_by_id(&self, id: FieldId) -> Option<&FieldDef> {
        self.fields.get(id.index())
    }

    /// Get a field ID by name.
    pub fn get_field_id(&self, name: &str) -> Option<FieldId> {
        self.field_names.get(name).copied()
    }

    /// Check if a field is registered.
    pub fn has_field(&self, name: &str) -> bool {
        self.field_names.contains_key(name)
    }

    /// Get all field definitions in declaration order.
    pub fn all_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter()
    }

    /// Get the number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Total number of constraint declarations across all fields.
    pub fn constraint_count(&self) -> usize {
        self.fields.iter().map(|f| f.constraints.len()).sum()
    }

    // ==================== Kind Lookups ====================

    /// The kind table.
    pub fn kinds(&self) -> &KindTable {
        &self.kinds
    }

    /// Get a kind definition by tag.
    pub fn get_kind(&self, name: &str) -> Option<&KindDef> {
        self.kinds.get(name)
    }
}
