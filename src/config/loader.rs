use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::args::{
    Args, IntMax, IntMin, IntRange, OperandSpec, OptionSpec, RegistrationError, StrLen,
    StrLenMax, StrLenMin, Validator, ValueType,
};
use crate::config::types::{Manifest, OperandDecl, OptionDecl};

/// Errors that can occur when loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Manifest validation failed: {message}")]
    ValidationError { message: String },

    #[error("Manifest declaration rejected: {0}")]
    Registration(#[from] RegistrationError),
}

impl Manifest {
    /// Returns the path to the manifest file.
    ///
    /// Uses `~/.config/argcell/manifest.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("argcell").join("manifest.toml")
    }

    /// Loads the manifest from the default path.
    ///
    /// A missing file yields an empty manifest.
    pub fn load() -> Result<Self, ManifestError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Manifest::default());
        }
        Self::load_from(&path)
    }

    /// Loads, parses and validates the manifest at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|e| ManifestError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let manifest: Manifest = toml::from_str(&content).map_err(|e| ManifestError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        manifest.validate()?;
        tracing::debug!(
            "Loaded manifest {} ({} options, {} operands)",
            path.display(),
            manifest.options.len(),
            manifest.operands.len()
        );
        Ok(manifest)
    }

    /// Validates bounds.
    ///
    /// Checks:
    /// - `min` does not exceed `max`
    /// - bounds are only given on string and int declarations
    /// - string length bounds are not negative
    pub fn validate(&self) -> Result<(), ManifestError> {
        let options = self
            .options
            .iter()
            .map(|o| (option_name(o), o.value_type, o.min, o.max));
        let operands = self
            .operands
            .iter()
            .map(|o| (o.key.clone(), o.value_type, o.min, o.max));

        for (name, value_type, min, max) in options.chain(operands) {
            if let (Some(min), Some(max)) = (min, max) {
                if min > max {
                    return Err(ManifestError::ValidationError {
                        message: format!("'{}': min {} is greater than max {}", name, min, max),
                    });
                }
            }
            match value_type {
                ValueType::Flag if min.is_some() || max.is_some() => {
                    return Err(ManifestError::ValidationError {
                        message: format!("'{}': flags can't declare min or max", name),
                    });
                }
                ValueType::Str if min.is_some_and(|m| m < 0) || max.is_some_and(|m| m < 0) => {
                    return Err(ManifestError::ValidationError {
                        message: format!("'{}': string length bounds must not be negative", name),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Validates, then declares every option and operand on a fresh `Args`.
    pub fn build_args(&self) -> Result<Args, ManifestError> {
        self.validate()?;
        let mut args = Args::new();
        for decl in &self.options {
            args.add_option(option_spec(decl)?)?;
        }
        for decl in &self.operands {
            args.add_operand(operand_spec(decl)?)?;
        }
        Ok(args)
    }
}

fn option_name(decl: &OptionDecl) -> String {
    decl.long
        .clone()
        .or_else(|| decl.short.map(String::from))
        .unwrap_or_default()
}

fn option_spec(decl: &OptionDecl) -> Result<OptionSpec, ManifestError> {
    Ok(OptionSpec {
        long: decl.long.clone(),
        short: decl.short,
        description: decl.description.clone(),
        value_type: decl.value_type,
        default: decl.default.clone(),
        required: decl.required,
        validator: bounds_validator(&option_name(decl), decl.value_type, decl.min, decl.max)?,
    })
}

fn operand_spec(decl: &OperandDecl) -> Result<OperandSpec, ManifestError> {
    Ok(OperandSpec {
        key: decl.key.clone(),
        description: decl.description.clone(),
        value_type: decl.value_type,
        default: decl.default.clone(),
        required: decl.required,
        validator: bounds_validator(&decl.key, decl.value_type, decl.min, decl.max)?,
    })
}

fn str_bound(name: &str, bound: Option<i64>) -> Result<Option<usize>, ManifestError> {
    bound
        .map(|b| {
            usize::try_from(b).map_err(|_| ManifestError::ValidationError {
                message: format!("'{}': string length bounds must not be negative", name),
            })
        })
        .transpose()
}

/// Builds the validator for `min`/`max`.
fn bounds_validator(
    name: &str,
    value_type: ValueType,
    min: Option<i64>,
    max: Option<i64>,
) -> Result<Option<Validator>, ManifestError> {
    let validator = match value_type {
        ValueType::Int => match (min, max) {
            (Some(min), Some(max)) => Some(Validator::int(IntRange::new(min, max))),
            (Some(min), None) => Some(Validator::int(IntMin(min))),
            (None, Some(max)) => Some(Validator::int(IntMax(max))),
            (None, None) => None,
        },
        ValueType::Str => match (str_bound(name, min)?, str_bound(name, max)?) {
            (Some(min), Some(max)) => Some(Validator::string(StrLen::new(min, max))),
            (Some(min), None) => Some(Validator::string(StrLenMin(min))),
            (None, Some(max)) => Some(Validator::string(StrLenMax(max))),
            (None, None) => None,
        },
        ValueType::Flag => None,
    };
    Ok(validator)
}
