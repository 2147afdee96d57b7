//! Declarative command-line argument parsing.
//!
//! Declare options and operands with types, defaults, required-ness and
//! validators, parse a raw argument list once, then read typed values back
//! by key. See [`args`] for the parser and [`config`] for loading
//! declarations from a TOML manifest.

pub mod args;
pub mod config;
pub mod logging;
