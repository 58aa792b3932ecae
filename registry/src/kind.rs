//! Constraint kinds and the table that maps kind tags to predicates.
//!
//! A kind is a named rule with a pure predicate. The table is populated at
//! startup; adding a kind never touches the existing ones.

use crate::RegistryError;
use sumac_core::Value;
use std::collections::HashMap;
use std::fmt;

/// Tag of the built-in "value > 0" kind.
pub const POSITIVE: &str = "Positive";
/// Tag of the built-in "value >= 0" kind.
pub const NON_NEGATIVE: &str = "NonNegative";
/// Tag of the built-in inclusive range kind.
pub const RANGE: &str = "Range";
/// Tag of the built-in presence kind.
pub const REQUIRED: &str = "Required";

/// Decides whether a value satisfies a kind. Must be pure.
pub type Predicate = fn(&Value, &KindArgs) -> bool;

/// Renders the reason attached to a failed check, e.g. "must be positive".
pub type Describe = fn(&KindArgs) -> String;

/// Validates the arguments of a declaration at registration time.
pub type ArgCheck = fn(&KindArgs) -> Result<(), String>;

/// Which values a kind can be evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    /// Int, UInt and Float only. Null values are skipped.
    Numeric,
    /// Any value, including Null.
    Any,
}

/// Parameters of a declaration (bounds for Range-like kinds).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KindArgs {
    /// Inclusive lower bound.
    pub min: Option<Value>,
    /// Inclusive upper bound.
    pub max: Option<Value>,
}

impl KindArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, min: Option<Value>, max: Option<Value>) -> Self {
        // Merge rather than replace: only update if Some is provided
        if min.is_some() {
            self.min = min;
        }
        if max.is_some() {
            self.max = max;
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Definition of a constraint kind.
#[derive(Clone)]
pub struct KindDef {
    /// Kind tag, e.g. "Positive".
    pub name: String,
    /// Which values the predicate may be applied to.
    pub applicability: Applicability,
    predicate: Predicate,
    describe: Describe,
    check_args: Option<ArgCheck>,
}

impl KindDef {
    /// A kind that only applies to numeric fields.
    pub fn numeric(name: impl Into<String>, predicate: Predicate, describe: Describe) -> Self {
        Self {
            name: name.into(),
            applicability: Applicability::Numeric,
            predicate,
            describe,
            check_args: None,
        }
    }

    /// A kind that applies to any field.
    pub fn any(name: impl Into<String>, predicate: Predicate, describe: Describe) -> Self {
        Self {
            name: name.into(),
            applicability: Applicability::Any,
            predicate,
            describe,
            check_args: None,
        }
    }

    /// Attach an argument check run when a field declares this kind.
    pub fn with_arg_check(mut self, check: ArgCheck) -> Self {
        self.check_args = Some(check);
        self
    }

    pub fn is_numeric(&self) -> bool {
        self.applicability == Applicability::Numeric
    }

    /// Apply the predicate. Callers gate numeric kinds to numeric values.
    pub fn evaluate(&self, value: &Value, args: &KindArgs) -> bool {
        (self.predicate)(value, args)
    }

    /// Reason text for a failed check.
    pub fn reason(&self, args: &KindArgs) -> String {
        (self.describe)(args)
    }

    /// Validate declaration arguments. A kind without an argument check
    /// accepts no arguments at all.
    pub fn check_args(&self, args: &KindArgs) -> Result<(), String> {
        match self.check_args {
            Some(check) => check(args),
            None if args.is_empty() => Ok(()),
            None => Err(format!("{} takes no arguments", self.name)),
        }
    }
}

impl fmt::Debug for KindDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindDef")
            .field("name", &self.name)
            .field("applicability", &self.applicability)
            .field("check_args", &self.check_args.map(|_| "<fn>"))
            .finish()
    }
}

/// Mapping from kind tag to definition.
#[derive(Debug, Clone, Default)]
pub struct KindTable {
    kinds: HashMap<String, KindDef>,
}

impl KindTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding the built-in kinds.
    pub fn builtin() -> Self {
        let mut kinds = HashMap::new();
        for def in builtin_kinds() {
            kinds.insert(def.name.clone(), def);
        }
        Self { kinds }
    }

    /// Register a kind. Tags are unique; an existing kind is never replaced.
    pub fn register(&mut self, def: KindDef) -> Result<(), RegistryError> {
        if self.kinds.contains_key(&def.name) {
            return Err(RegistryError::DuplicateKind(def.name));
        }
        log::trace!("registered constraint kind {}", def.name);
        self.kinds.insert(def.name.clone(), def);
        Ok(())
    }

    /// Builder-style variant of register.
    pub fn with(mut self, def: KindDef) -> Result<Self, RegistryError> {
        self.register(def)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&KindDef> {
        self.kinds.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// All kind tags, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.kinds.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

fn builtin_kinds() -> Vec<KindDef> {
    vec![
        KindDef::numeric(POSITIVE, is_positive, |_| "must be positive".to_string()),
        KindDef::numeric(NON_NEGATIVE, is_non_negative, |_| {
            "must be non-negative".to_string()
        }),
        KindDef::numeric(RANGE, in_range, describe_range).with_arg_check(check_range_args),
        KindDef::any(REQUIRED, |v, _| !v.is_null(), |_| "is required".to_string()),
    ]
}

fn is_positive(value: &Value, _: &KindArgs) -> bool {
    matches!(value.sign(), Some(std::cmp::Ordering::Greater))
}

fn is_non_negative(value: &Value, _: &KindArgs) -> bool {
    matches!(
        value.sign(),
        Some(std::cmp::Ordering::Greater | std::cmp::Ordering::Equal)
    )
}

fn in_range(value: &Value, args: &KindArgs) -> bool {
    if value.is_nan() {
        return false;
    }
    let above_min = args.min.as_ref().map_or(true, |min| value.gte(min));
    let below_max = args.max.as_ref().map_or(true, |max| value.lte(max));
    above_min && below_max
}

fn describe_range(args: &KindArgs) -> String {
    match (&args.min, &args.max) {
        (Some(min), Some(max)) => format!("must be in range [{}, {}]", min, max),
        (Some(min), None) => format!("must be at least {}", min),
        (None, Some(max)) => format!("must be at most {}", max),
        (None, None) => "must be in range".to_string(),
    }
}

fn check_range_args(args: &KindArgs) -> Result<(), String> {
    if args.is_empty() {
        return Err("Range needs a min or a max bound".to_string());
    }
    for bound in [&args.min, &args.max].into_iter().flatten() {
        if !bound.is_numeric() || bound.is_nan() {
            return Err(format!("Range bound {} is not a number", bound));
        }
    }
    if let (Some(min), Some(max)) = (&args.min, &args.max) {
        if !min.lte(max) {
            return Err(format!("Range min {} is greater than max {}", min, max));
        }
    }
    Ok(())
}
