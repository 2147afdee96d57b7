//! Parser: one left-to-right pass over the raw argument list.

use std::fmt;

use crate::args::cell::{Cell, OperandSpec, OptionSpec};
use crate::args::classifier::{classify, is_option_key, Token};
use crate::args::error::{ArgsError, RegistrationError};
use crate::args::registry::Registry;
use crate::args::usage;
use crate::args::value::{coerce, Value};

/// Declared options and operands, and the result of parsing into them.
///
/// One `Args` serves one parse. Cells stay set afterwards, so parsing a
/// second argument list into the same `Args` reports duplicate definitions.
#[derive(Debug, Clone)]
pub struct Args {
    executed: Option<String>,
    options: Registry,
    operands: Registry,
}

impl Args {
    pub fn new() -> Self {
        Self {
            executed: None,
            options: Registry::options(),
            operands: Registry::operands(),
        }
    }

    pub fn add_option(&mut self, spec: OptionSpec) -> Result<(), RegistrationError> {
        self.options.add(spec)
    }

    pub fn add_options(
        &mut self,
        specs: impl IntoIterator<Item = OptionSpec>,
    ) -> Result<(), RegistrationError> {
        self.options.add_all(specs)
    }

    pub fn add_operand(&mut self, spec: OperandSpec) -> Result<(), RegistrationError> {
        self.operands.add(spec)
    }

    pub fn add_operands(
        &mut self,
        specs: impl IntoIterator<Item = OperandSpec>,
    ) -> Result<(), RegistrationError> {
        self.operands.add_all(specs)
    }

    /// Parse the process arguments.
    pub fn parse_env(&mut self) -> Result<(), ArgsError> {
        self.parse(std::env::args())
    }

    /// Parse `raw`, whose first element is the program name.
    ///
    /// Stops at the first error. Values bound before it remain readable.
    pub fn parse<I, S>(&mut self, raw: I) -> Result<(), ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw: Vec<String> = raw.into_iter().map(Into::into).collect();
        tracing::debug!("Parsing {} argument(s)", raw.len());

        let result = self.bind(&raw).and_then(|()| self.validate());
        match &result {
            Ok(()) => tracing::debug!(
                "Parsed {} option(s) and {} operand(s)",
                self.options.cells().iter().filter(|c| c.is_set()).count(),
                self.operands.cells().iter().filter(|c| c.is_set()).count()
            ),
            Err(e) => tracing::debug!("Parse failed: {}", e),
        }
        result
    }

    fn bind(&mut self, raw: &[String]) -> Result<(), ArgsError> {
        let mut iter = raw.iter();
        self.executed = iter.next().cloned();
        let mut iter = iter.peekable();
        let mut next_operand = 0;

        while let Some(arg) = iter.next() {
            let key = match classify(arg) {
                Token::LongOption(key) => key.to_string(),
                Token::ShortOption(key) => key.to_string(),
                Token::Operand(token) => {
                    let cell = self.operands.get_at(next_operand).ok_or_else(|| {
                        ArgsError::TooManyOperands {
                            token: token.to_string(),
                            declared: self.operands.len(),
                        }
                    })?;
                    let value = coerce(cell.value_type(), &cell.label(), token)?;
                    tracing::trace!("Operand {} = {:?}", cell.label(), token);
                    self.operands.set_at(next_operand, value)?;
                    next_operand += 1;
                    continue;
                }
            };

            let index = self
                .options
                .position(&key)
                .ok_or_else(|| ArgsError::UnknownOption { token: arg.clone() })?;
            let cell = &self.options.cells()[index];
            if cell.is_set() {
                return Err(ArgsError::DuplicateDefinition { label: cell.label() });
            }

            let value = if cell.value_type().takes_value() {
                let raw_value = match iter.peek() {
                    Some(next) if !is_option_key(next) => iter.next(),
                    Some(_) | None => None,
                }
                .ok_or_else(|| ArgsError::MissingOptionValue { option: arg.clone() })?;
                tracing::trace!("Option {} = {:?}", cell.label(), raw_value);
                coerce(cell.value_type(), &cell.label(), raw_value)?
            } else {
                tracing::trace!("Option {} set", cell.label());
                None
            };
            self.options.set_at(index, value)?;
        }
        Ok(())
    }

    /// Options first, then operands.
    fn validate(&self) -> Result<(), ArgsError> {
        self.options.validate_all()?;
        self.operands.validate_all()
    }

    /// Program name taken from the first raw argument.
    pub fn executed(&self) -> Option<&str> {
        self.executed.as_deref()
    }

    pub fn options(&self) -> &Registry {
        &self.options
    }

    pub fn operands(&self) -> &Registry {
        &self.operands
    }

    pub fn option(&self, key: &str) -> Result<Value, ArgsError> {
        self.options.get(key)
    }

    pub fn int_option(&self, key: &str) -> Result<i64, ArgsError> {
        self.options.get_int(key)
    }

    pub fn string_option(&self, key: &str) -> Result<String, ArgsError> {
        self.options.get_string(key)
    }

    pub fn bool_option(&self, key: &str) -> Result<bool, ArgsError> {
        self.options.get_bool(key)
    }

    pub fn option_is_set(&self, key: &str) -> bool {
        self.options.is_set(key)
    }

    pub fn option_cell(&self, key: &str) -> Result<Cell, ArgsError> {
        self.options.cell(key)
    }

    pub fn operand(&self, key: &str) -> Result<Value, ArgsError> {
        self.operands.get(key)
    }

    pub fn int_operand(&self, key: &str) -> Result<i64, ArgsError> {
        self.operands.get_int(key)
    }

    pub fn string_operand(&self, key: &str) -> Result<String, ArgsError> {
        self.operands.get_string(key)
    }

    pub fn operand_is_set(&self, key: &str) -> bool {
        self.operands.is_set(key)
    }

    pub fn operand_cell(&self, key: &str) -> Result<Cell, ArgsError> {
        self.operands.cell(key)
    }

    /// Usage text: synopsis line followed by the options and operands listings.
    pub fn render_usage(&self) -> String {
        usage::render_args(self)
    }
}

impl Default for Args {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_usage())
    }
}
