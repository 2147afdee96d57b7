//! Error types for declaring, parsing and reading arguments.

use std::num::ParseIntError;

use thiserror::Error;

use crate::args::value::ValueType;

/// A declaration was rejected before it reached the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Option without long and short key, or operand without key.
    #[error("Key is required.")]
    KeyMissing,

    #[error("Required {label} can't be specified its default value.")]
    ConflictingDefaultAndRequired { label: String },

    #[error("Default value of {label} does not match its type {expected}.")]
    DefaultTypeMismatch { label: String, expected: ValueType },

    #[error("Validator of {label} does not accept values of type {expected}.")]
    ValidatorTypeMismatch { label: String, expected: ValueType },

    #[error("Value type is required for operand {key}.")]
    OperandNeedsValueType { key: String },

    #[error("Short key '{key}' must be a single ASCII letter or digit.")]
    InvalidShortKey { key: char },

    #[error("Long key \"{key}\" must start with an ASCII letter or digit.")]
    InvalidLongKey { key: String },

    #[error("{label} can't be registered in this list.")]
    KindMismatch { label: String },

    #[error("Key \"{key}\" is already declared.")]
    DuplicateKey { key: String },
}

/// Errors surfaced while parsing or reading arguments.
#[derive(Debug, Error)]
pub enum ArgsError {
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// Token looks like an option but nothing is declared under that key.
    #[error("Unknown option {token}")]
    UnknownOption { token: String },

    /// Lookup by key found no declared cell.
    #[error("Specified key \"{key}\" is not found.")]
    UnknownKey { key: String },

    #[error("Option {option} requires value but is not specified.")]
    MissingOptionValue { option: String },

    #[error("Invalid int value for {label} \"{value}\". {source}")]
    InvalidIntValue {
        label: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Duplicate definition of {label}")]
    DuplicateDefinition { label: String },

    #[error("Too many operands: \"{token}\" exceeds the {declared} declared operand(s).")]
    TooManyOperands { token: String, declared: usize },

    #[error("Required {label} is not provided.")]
    RequiredNotProvided { label: String },

    /// Message from a user-supplied validator, passed through untouched.
    #[error("{0}")]
    Validator(String),

    /// A value of the wrong kind was stored into a cell.
    #[error("Failed to set value of {label}. The value type is {expected}, but specified value is {found}.")]
    TypeMismatch {
        label: String,
        expected: ValueType,
        found: ValueType,
    },

    /// A typed accessor was used on a cell of another type.
    #[error("Value of \"{key}\" is not {requested}.")]
    WrongType { key: String, requested: ValueType },

    #[error("No value and no default value for {label} are set.")]
    NoValueNoDefault { label: String },

    #[error("Missing value is invalid for {label}.")]
    NilValueRejected { label: String },
}
