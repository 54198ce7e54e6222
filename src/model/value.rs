//! Dynamic values passed to and returned from registry functions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::types::TypeInfo;

/// Tagged dynamic value
///
/// Registry functions receive and return `Value`s so that callers can invoke any
/// function by name. The enum maps one-to-one onto JSON, which is how values
/// cross the command-line boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value
    Null,

    /// Boolean value
    Boolean(bool),

    /// Integer value (64-bit signed)
    Integer(i64),

    /// Floating point value
    Decimal(f64),

    /// String value
    String(String),

    /// Ordered sequence of values
    Collection(Vec<Value>),

    /// Key/value object
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Create a collection of string values
    pub fn strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::Collection(items.into_iter().map(|s| Value::String(s.into())).collect())
    }

    /// Check whether this value is a string
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Get the type name for this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Boolean(_) => "Boolean",
            Value::Integer(_) => "Integer",
            Value::Decimal(_) => "Decimal",
            Value::String(_) => "String",
            Value::Collection(_) => "Collection",
            Value::Object(_) => "Object",
        }
    }

    /// Get the TypeInfo for this value
    pub fn to_type_info(&self) -> TypeInfo {
        match self {
            Value::Null => TypeInfo::Null,
            Value::Boolean(_) => TypeInfo::Boolean,
            Value::Integer(_) => TypeInfo::Integer,
            Value::Decimal(_) => TypeInfo::Decimal,
            Value::String(_) => TypeInfo::String,
            Value::Collection(items) => {
                // Homogeneous collections keep their element type
                let mut types = items.iter().map(Value::to_type_info);
                let element = match types.next() {
                    Some(first) if types.all(|t| t == first) => first,
                    _ => TypeInfo::Any,
                };
                TypeInfo::collection(element)
            }
            Value::Object(_) => TypeInfo::Object,
        }
    }

    /// Try to convert to a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Decimal(d) => write!(f, "{d}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Collection(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(map) => {
                write!(f, "{{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {item}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
