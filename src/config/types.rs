use serde::{Deserialize, Serialize};

use crate::args::{Value, ValueType};

/// Declarations read from a manifest file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub options: Vec<OptionDecl>,
    #[serde(default)]
    pub operands: Vec<OperandDecl>,
}

/// One `[[options]]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionDecl {
    /// Long key without `--` (e.g., "port").
    #[serde(default)]
    pub long: Option<String>,
    /// Short key without `-` (e.g., "p").
    #[serde(default)]
    pub short: Option<char>,
    /// "flag" (default), "string" or "int".
    #[serde(default, rename = "type")]
    pub value_type: ValueType,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: Option<String>,
    /// Lower bound: value for ints, length for strings.
    #[serde(default)]
    pub min: Option<i64>,
    /// Upper bound: value for ints, length for strings.
    #[serde(default)]
    pub max: Option<i64>,
}

/// One `[[operands]]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperandDecl {
    pub key: String,
    /// "string" or "int".
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: Option<String>,
    /// Lower bound: value for ints, length for strings.
    #[serde(default)]
    pub min: Option<i64>,
    /// Upper bound: value for ints, length for strings.
    #[serde(default)]
    pub max: Option<i64>,
}
