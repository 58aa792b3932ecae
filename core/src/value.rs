//! Value types for sumac fields.
//!
//! A Value is what a field holds after the owning framework has populated
//! it. Only Int, UInt and Float are numeric; numeric constraint kinds are
//! never evaluated against anything else.

use crate::ValueError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A value held by a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit unsigned integer.
    UInt(u64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// List of values.
    List(Vec<Value>),
}

impl Value {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for Int, UInt and Float.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::UInt(_) | Value::Float(_))
    }

    /// Returns true if this is a float NaN.
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Float(f) if f.is_nan())
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The declared type this value inhabits, or None for Null.
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(ValueType::Bool),
            Value::Int(_) => Some(ValueType::Int),
            Value::UInt(_) => Some(ValueType::UInt),
            Value::Float(_) => Some(ValueType::Float),
            Value::String(_) => Some(ValueType::String),
            Value::List(_) => Some(ValueType::List),
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self.value_type() {
            Some(ty) => ty.name(),
            None => "Null",
        }
    }

    /// Sign of a numeric value relative to zero.
    ///
    /// Returns None for non-numeric values and for NaN, which has no sign
    /// that any ordering constraint could accept.
    pub fn sign(&self) -> Option<Ordering> {
        match self {
            Value::Int(i) => Some(i.cmp(&0)),
            Value::UInt(u) => Some(u.cmp(&0)),
            Value::Float(f) => f.partial_cmp(&0.0),
            _ => None,
        }
    }

    /// Compare two numeric values across Int, UInt and Float.
    ///
    /// Returns None if either side is non-numeric or NaN.
    pub fn cmp_numeric(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::UInt(a), Value::UInt(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::UInt(b)) => Some(cmp_int_uint(*a, *b)),
            (Value::UInt(a), Value::Int(b)) => Some(cmp_int_uint(*b, *a).reverse()),
            (Value::Int(a), Value::Float(b)) => cmp_int_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
            (Value::UInt(a), Value::Float(b)) => cmp_uint_float(*a, *b),
            (Value::Float(a), Value::UInt(b)) => cmp_uint_float(*b, *a).map(Ordering::reverse),
            _ => None,
        }
    }

    /// Check if this value is greater than or equal to another numeric value.
    /// Returns false for non-comparable values, including NaN.
    pub fn gte(&self, other: &Value) -> bool {
        matches!(
            self.cmp_numeric(other),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    /// Check if this value is less than or equal to another numeric value.
    /// Returns false for non-comparable values, including NaN.
    pub fn lte(&self, other: &Value) -> bool {
        matches!(
            self.cmp_numeric(other),
            Some(Ordering::Less | Ordering::Equal)
        )
    }
}

fn cmp_int_uint(a: i64, b: u64) -> Ordering {
    if a < 0 {
        Ordering::Less
    } else {
        (a as u64).cmp(&b)
    }
}

// 2^63 and 2^64, both exact in f64.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
const U64_BOUND: f64 = 18_446_744_073_709_551_616.0;

// Integer/float comparisons go through the integer part of the float, so
// integers above 2^53 are not rounded before comparing.
fn cmp_int_float(a: i64, b: f64) -> Option<Ordering> {
    if b.is_nan() {
        None
    } else if b >= I64_BOUND {
        Some(Ordering::Less)
    } else if b < -I64_BOUND {
        Some(Ordering::Greater)
    } else {
        let whole = b.trunc();
        Some(a.cmp(&(whole as i64)).then(fraction_order(b, whole)))
    }
}

fn cmp_uint_float(a: u64, b: f64) -> Option<Ordering> {
    if b.is_nan() {
        None
    } else if b >= U64_BOUND {
        Some(Ordering::Less)
    } else if b < 0.0 {
        Some(Ordering::Greater)
    } else {
        let whole = b.trunc();
        Some(a.cmp(&(whole as u64)).then(fraction_order(b, whole)))
    }
}

/// How an integer equal to `whole` orders against `b`.
fn fraction_order(b: f64, whole: f64) -> Ordering {
    if b > whole {
        Ordering::Less
    } else if b < whole {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::UInt(u) => write!(f, "{}", u),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::UInt(u)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Value::UInt(u as u64)
    }
}

impl From<usize> for Value {
    fn from(u: usize) -> Self {
        Value::UInt(u as u64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f as f64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Field values keyed by field name.
pub type FieldValues = std::collections::HashMap<String, Value>;

/// Helper macro to create field value maps.
#[macro_export]
macro_rules! values {
    () => {
        std::collections::HashMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = std::collections::HashMap::new();
            $(
                map.insert($key.to_string(), $crate::Value::from($value));
            )+
            map
        }
    };
}

/// The declared type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    Int,
    UInt,
    Float,
    String,
    List,
}

impl ValueType {
    /// Returns true for the types numeric constraint kinds apply to.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueType::Int | ValueType::UInt | ValueType::Float)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Bool => "Bool",
            ValueType::Int => "Int",
            ValueType::UInt => "UInt",
            ValueType::Float => "Float",
            ValueType::String => "String",
            ValueType::List => "List",
        }
    }

    /// Check whether a runtime value fits this declared type.
    ///
    /// Null fits every type. Integers fit Float, and non-negative Ints fit
    /// UInt, since value sources rarely distinguish them.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (ValueType::Bool, Value::Bool(_)) => true,
            (ValueType::Int, Value::Int(_)) => true,
            (ValueType::Int, Value::UInt(u)) => i64::try_from(*u).is_ok(),
            (ValueType::UInt, Value::UInt(_)) => true,
            (ValueType::UInt, Value::Int(i)) => *i >= 0,
            (ValueType::Float, v) => v.is_numeric(),
            (ValueType::String, Value::String(_)) => true,
            (ValueType::List, Value::List(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueType {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Ok(ValueType::Bool),
            "int" | "integer" | "long" | "i32" | "i64" => Ok(ValueType::Int),
            "uint" | "unsigned" | "u32" | "u64" | "usize" => Ok(ValueType::UInt),
            "float" | "double" | "f32" | "f64" => Ok(ValueType::Float),
            "string" | "str" => Ok(ValueType::String),
            "list" => Ok(ValueType::List),
            _ => Err(ValueError::UnknownType(s.to_string())),
        }
    }
}
