//! Value cell: one declared option or operand plus its runtime state.

use crate::args::error::{ArgsError, RegistrationError};
use crate::args::validator::Validator;
use crate::args::value::{Value, ValueType};

/// Declaration of a named option (`--long` and/or `-s`).
#[derive(Debug, Clone, Default)]
pub struct OptionSpec {
    /// Long key without the `--` prefix (e.g., "port").
    pub long: Option<String>,
    /// Short key without the `-` prefix (e.g., 'p').
    pub short: Option<char>,
    pub description: Option<String>,
    pub value_type: ValueType,
    pub default: Option<Value>,
    pub required: bool,
    pub validator: Option<Validator>,
}

impl OptionSpec {
    /// Presence-only flag.
    pub fn flag() -> Self {
        Self::default()
    }

    pub fn string() -> Self {
        Self {
            value_type: ValueType::Str,
            ..Self::default()
        }
    }

    pub fn int() -> Self {
        Self {
            value_type: ValueType::Int,
            ..Self::default()
        }
    }

    pub fn with_long(mut self, long: impl Into<String>) -> Self {
        self.long = Some(long.into());
        self
    }

    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Declaration of a positional operand.
#[derive(Debug, Clone, Default)]
pub struct OperandSpec {
    pub key: String,
    pub description: Option<String>,
    pub value_type: ValueType,
    pub default: Option<Value>,
    pub required: bool,
    pub validator: Option<Validator>,
}

impl OperandSpec {
    pub fn string(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value_type: ValueType::Str,
            ..Self::default()
        }
    }

    pub fn int(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value_type: ValueType::Int,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Anything that can be turned into a cell.
#[derive(Debug, Clone)]
pub enum CellSpec {
    Option(OptionSpec),
    Operand(OperandSpec),
}

impl From<OptionSpec> for CellSpec {
    fn from(spec: OptionSpec) -> Self {
        CellSpec::Option(spec)
    }
}

impl From<OperandSpec> for CellSpec {
    fn from(spec: OperandSpec) -> Self {
        CellSpec::Operand(spec)
    }
}

/// Identity of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKey {
    Option {
        long: Option<String>,
        short: Option<char>,
    },
    Operand {
        key: String,
    },
}

/// Runtime record of one declared option or operand.
///
/// Cells handed out by accessors are snapshots; mutating them has no effect
/// on the registry they were read from.
#[derive(Debug, Clone)]
pub struct Cell {
    key: CellKey,
    description: Option<String>,
    value_type: ValueType,
    default: Option<Value>,
    required: bool,
    validator: Option<Validator>,
    value: Option<Value>,
    is_set: bool,
}

impl Cell {
    /// Check a declaration's structural rules and build an unset cell.
    pub fn register(spec: impl Into<CellSpec>) -> Result<Self, RegistrationError> {
        let (key, description, value_type, default, required, validator) = match spec.into() {
            CellSpec::Option(spec) => {
                let long = spec.long.filter(|l| !l.is_empty());
                if long.is_none() && spec.short.is_none() {
                    return Err(RegistrationError::KeyMissing);
                }
                if let Some(long) = &long {
                    if !long.starts_with(|c: char| c.is_ascii_alphanumeric()) {
                        return Err(RegistrationError::InvalidLongKey { key: long.clone() });
                    }
                }
                if let Some(short) = spec.short {
                    if !short.is_ascii_alphanumeric() {
                        return Err(RegistrationError::InvalidShortKey { key: short });
                    }
                }
                (
                    CellKey::Option {
                        long,
                        short: spec.short,
                    },
                    spec.description,
                    spec.value_type,
                    spec.default,
                    spec.required,
                    spec.validator,
                )
            }
            CellSpec::Operand(spec) => {
                if spec.key.is_empty() {
                    return Err(RegistrationError::KeyMissing);
                }
                if !spec.value_type.takes_value() {
                    return Err(RegistrationError::OperandNeedsValueType { key: spec.key });
                }
                (
                    CellKey::Operand { key: spec.key },
                    spec.description,
                    spec.value_type,
                    spec.default,
                    spec.required,
                    spec.validator,
                )
            }
        };

        let cell = Cell {
            key,
            description,
            value_type,
            default,
            required,
            validator,
            value: None,
            is_set: false,
        };

        if cell.required && cell.default.is_some() {
            return Err(RegistrationError::ConflictingDefaultAndRequired { label: cell.label() });
        }
        if let Some(default) = &cell.default {
            if default.value_type() != cell.value_type || !cell.value_type.takes_value() {
                return Err(RegistrationError::DefaultTypeMismatch {
                    label: cell.label(),
                    expected: cell.value_type,
                });
            }
        }
        if let Some(validator) = &cell.validator {
            if validator.value_type() != cell.value_type {
                return Err(RegistrationError::ValidatorTypeMismatch {
                    label: cell.label(),
                    expected: cell.value_type,
                });
            }
        }
        Ok(cell)
    }

    pub fn key(&self) -> &CellKey {
        &self.key
    }

    pub fn long_key(&self) -> Option<&str> {
        match &self.key {
            CellKey::Option { long, .. } => long.as_deref(),
            CellKey::Operand { .. } => None,
        }
    }

    pub fn short_key(&self) -> Option<char> {
        match &self.key {
            CellKey::Option { short, .. } => *short,
            CellKey::Operand { .. } => None,
        }
    }

    pub fn operand_key(&self) -> Option<&str> {
        match &self.key {
            CellKey::Operand { key } => Some(key),
            CellKey::Option { .. } => None,
        }
    }

    /// Every key this cell answers to, without prefixes.
    pub fn keys(&self) -> Vec<String> {
        match &self.key {
            CellKey::Option { long, short } => long
                .iter()
                .cloned()
                .chain(short.map(String::from))
                .collect(),
            CellKey::Operand { key } => vec![key.clone()],
        }
    }

    /// Human-readable name: `--long -s` for options, the key for operands.
    pub fn label(&self) -> String {
        match &self.key {
            CellKey::Option { long, short } => {
                let mut parts = Vec::with_capacity(2);
                if let Some(long) = long {
                    parts.push(format!("--{}", long));
                }
                if let Some(short) = short {
                    parts.push(format!("-{}", short));
                }
                parts.join(" ")
            }
            CellKey::Operand { key } => key.clone(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_set(&self) -> bool {
        self.is_set
    }

    /// Resolved value: stored value, else default, else an error.
    ///
    /// Flags resolve to whether they were given.
    pub fn value(&self) -> Result<Value, ArgsError> {
        if self.value_type == ValueType::Flag {
            return Ok(Value::Bool(self.is_set));
        }
        if self.is_set {
            if let Some(value) = &self.value {
                return Ok(value.clone());
            }
        }
        self.default
            .clone()
            .ok_or_else(|| ArgsError::NoValueNoDefault { label: self.label() })
    }

    /// Store a value and mark the cell set.
    ///
    /// Flags take `None`; scalar cells need a value of their declared type.
    pub fn set_value(&mut self, value: Option<Value>) -> Result<(), ArgsError> {
        match (self.value_type, value) {
            (ValueType::Flag, None) => {}
            (ValueType::Flag, Some(value)) => {
                return Err(ArgsError::TypeMismatch {
                    label: self.label(),
                    expected: ValueType::Flag,
                    found: value.value_type(),
                });
            }
            (_, None) => {
                return Err(ArgsError::NilValueRejected { label: self.label() });
            }
            (expected, Some(value)) => {
                if value.value_type() != expected {
                    return Err(ArgsError::TypeMismatch {
                        label: self.label(),
                        expected,
                        found: value.value_type(),
                    });
                }
                self.value = Some(value);
            }
        }
        self.is_set = true;
        Ok(())
    }

    /// Post-parse check: required-ness, then the attached validator.
    pub fn validate(&self) -> Result<(), ArgsError> {
        if !self.is_set {
            if self.required {
                return Err(ArgsError::RequiredNotProvided { label: self.label() });
            }
            return Ok(());
        }

        let result = match (&self.validator, &self.value) {
            (Some(Validator::Int(check)), Some(Value::Int(value))) => check.validate(self, value),
            (Some(Validator::Str(check)), Some(Value::Str(value))) => check.validate(self, value),
            _ => Ok(()),
        };
        result.map_err(ArgsError::Validator)
    }
}
