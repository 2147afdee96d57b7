//! Value kinds: what a cell holds and how raw tokens become values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::args::error::ArgsError;

/// Declared type of a cell. Fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Presence-only boolean flag, consumes no value token.
    #[default]
    Flag,
    /// Text value, passed through untouched.
    #[serde(rename = "string")]
    Str,
    /// Signed 64-bit integer.
    Int,
}

impl ValueType {
    /// Whether an option of this type consumes the following token.
    pub fn takes_value(self) -> bool {
        !matches!(self, ValueType::Flag)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Flag => "flag",
            ValueType::Str => "string",
            ValueType::Int => "int",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Value {
    /// The declared type a value of this shape belongs to.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Bool(_) => ValueType::Flag,
            Value::Int(_) => ValueType::Int,
            Value::Str(_) => ValueType::Str,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Renders the way usage text shows defaults: strings quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

/// Coerce a raw token into a value of `value_type`.
///
/// `label` names the receiving cell in error messages. Flags never coerce a
/// token and yield `None`.
pub fn coerce(value_type: ValueType, label: &str, raw: &str) -> Result<Option<Value>, ArgsError> {
    match value_type {
        ValueType::Flag => Ok(None),
        ValueType::Str => Ok(Some(Value::Str(raw.to_string()))),
        ValueType::Int => raw
            .parse::<i64>()
            .map(|i| Some(Value::Int(i)))
            .map_err(|source| ArgsError::InvalidIntValue {
                label: label.to_string(),
                value: raw.to_string(),
                source,
            }),
    }
}
