//! Declaration manifests: options and operands described in TOML.
//!
//! A manifest only declares cells; it never supplies values.

mod loader;
mod types;

pub use loader::ManifestError;
pub use types::{Manifest, OperandDecl, OptionDecl};
