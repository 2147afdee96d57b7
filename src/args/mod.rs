//! Argument declaration and parsing.
//!
//! ```text
//! Raw tokens → Classify → Resolve cell → Coerce & bind → Validate → Typed accessors
//! ```
//!
//! Options and operands are declared up front on an [`Args`], then a single
//! left-to-right pass binds the raw argument list into their cells:
//!
//! ```
//! use argcell::args::{Args, OperandSpec, OptionSpec, IntRange, Validator};
//!
//! let mut args = Args::new();
//! args.add_option(
//!     OptionSpec::int()
//!         .with_long("port")
//!         .with_short('p')
//!         .with_default(80)
//!         .with_validator(Validator::int(IntRange::new(1, 65535))),
//! )
//! .unwrap();
//! args.add_operand(OperandSpec::string("root").required()).unwrap();
//!
//! args.parse(["serve", "-p", "8080", "/srv/www"]).unwrap();
//! assert_eq!(args.int_option("port").unwrap(), 8080);
//! assert_eq!(args.string_operand("root").unwrap(), "/srv/www");
//! ```

mod cell;
mod classifier;
mod error;
mod parser;
mod registry;
mod usage;
mod validator;
mod value;

pub use cell::{Cell, CellKey, CellSpec, OperandSpec, OptionSpec};
pub use classifier::{classify, is_option_key, Token};
pub use error::{ArgsError, RegistrationError};
pub use parser::Args;
pub use registry::{Registry, RegistryKind};
pub use usage::render_registry;
pub use validator::{
    IntMax, IntMin, IntRange, StrLen, StrLenMax, StrLenMin, Validate, Validator,
};
pub use value::{coerce, Value, ValueType};
