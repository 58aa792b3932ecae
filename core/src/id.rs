//! Identity types for registered fields.

use std::fmt;

/// Identifier for a field in the registry.
///
/// Ids are allocated in declaration order and are only meaningful within
/// the registry that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

impl FieldId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position of the field in declaration order.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}", self.0)
    }
}
