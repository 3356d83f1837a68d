//! Serialized form of Gramps objects
//!
//! Every object stores itself as an ordered tuple of primitives. This module
//! defines that shape:
//! - Value: Null, Bool, Int, Float, String, or a nested Tuple
//! - Checked destructuring helpers used when rebuilding objects
//! - Byte encoding for storage (bincode) and JSON rendering for diagnostics

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Serialized value
///
/// Equality is structural: two values are equal when they have the same
/// variant and the same contents, recursively. Object equality in
/// `SecondaryObject::is_equal` is defined in terms of this.
///
/// # Examples
///
/// ```
/// use gramps_core::Value;
///
/// let data = Value::tuple(vec![Value::from("Smith"), Value::from(true)]);
/// assert_eq!(data.as_tuple().map(|t| t.len()), Some(2));
/// assert_eq!(data.to_string(), "(\"Smith\", true)");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Value {
    /// Absent value
    #[default]
    Null,
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Text
    String(String),
    /// Ordered tuple of values
    Tuple(Vec<Value>),
}

impl Value {
    /// Build a tuple from its elements
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(items)
    }

    /// Name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Tuple(_) => "tuple",
        }
    }

    /// Check for Null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the boolean, if this is a Bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer, if this is an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float, if this is a Float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the text, if this is a String
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the elements, if this is a Tuple
    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Destructure a tuple of exactly `len` elements
    ///
    /// Used by `unserialize` implementations to check the shape of their
    /// input before reading fields positionally.
    pub fn expect_tuple(&self, len: usize) -> Result<&[Value]> {
        match self {
            Value::Tuple(items) if items.len() == len => Ok(items),
            Value::Tuple(items) => Err(Error::Unserialize {
                expected: format!("tuple of {}", len),
                found: format!("tuple of {}", items.len()),
            }),
            other => Err(Error::unserialize("tuple", other)),
        }
    }

    /// Destructure a tuple of any length
    pub fn expect_seq(&self) -> Result<&[Value]> {
        self.as_tuple()
            .ok_or_else(|| Error::unserialize("tuple", self))
    }

    /// Read a String
    pub fn expect_str(&self) -> Result<&str> {
        self.as_str()
            .ok_or_else(|| Error::unserialize("string", self))
    }

    /// Read an Int
    pub fn expect_int(&self) -> Result<i64> {
        self.as_int().ok_or_else(|| Error::unserialize("int", self))
    }

    /// Read a Bool
    pub fn expect_bool(&self) -> Result<bool> {
        self.as_bool()
            .ok_or_else(|| Error::unserialize("bool", self))
    }

    /// Read a Float (Ints are widened)
    pub fn expect_float(&self) -> Result<f64> {
        match self {
            Value::Float(f) => Ok(*f),
            Value::Int(i) => Ok(*i as f64),
            other => Err(Error::unserialize("float", other)),
        }
    }

    /// Encode for storage
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| Error::Encoding(e.to_string()))
    }

    /// Decode bytes produced by [`Value::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| Error::Encoding(e.to_string()))
    }

    /// Render as JSON (tuples become arrays, non-finite floats become null)
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Tuple(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                // One-element tuples keep their trailing comma
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Tuple(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
