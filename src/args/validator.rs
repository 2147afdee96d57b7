//! Validators: post-parse checks attached to a cell.
//!
//! A validator is typed by the value kind it inspects, so an int validator
//! can only ever be attached to an int cell. Registration enforces the match;
//! validators themselves never look at a value of the wrong kind.

use std::fmt;
use std::sync::Arc;

use crate::args::cell::Cell;
use crate::args::value::ValueType;

/// A check over a cell's value of type `T`.
///
/// The returned message is surfaced to the caller verbatim.
pub trait Validate<T: ?Sized>: Send + Sync {
    fn validate(&self, cell: &Cell, value: &T) -> Result<(), String>;
}

impl<T: ?Sized, F> Validate<T> for F
where
    F: Fn(&Cell, &T) -> Result<(), String> + Send + Sync,
{
    fn validate(&self, cell: &Cell, value: &T) -> Result<(), String> {
        self(cell, value)
    }
}

/// A validator tagged with the value kind it accepts.
#[derive(Clone)]
pub enum Validator {
    Int(Arc<dyn Validate<i64>>),
    Str(Arc<dyn Validate<str>>),
}

impl Validator {
    pub fn int(validator: impl Validate<i64> + 'static) -> Self {
        Validator::Int(Arc::new(validator))
    }

    pub fn string(validator: impl Validate<str> + 'static) -> Self {
        Validator::Str(Arc::new(validator))
    }

    /// The value type this validator can be attached to.
    pub fn value_type(&self) -> ValueType {
        match self {
            Validator::Int(_) => ValueType::Int,
            Validator::Str(_) => ValueType::Str,
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validator::{}", self.value_type())
    }
}

/// Rejects ints below the bound.
#[derive(Debug, Clone, Copy)]
pub struct IntMin(pub i64);

/// Rejects ints above the bound.
#[derive(Debug, Clone, Copy)]
pub struct IntMax(pub i64);

/// Accepts ints in `min..=max`.
#[derive(Debug, Clone, Copy)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

impl Validate<i64> for IntMin {
    fn validate(&self, cell: &Cell, value: &i64) -> Result<(), String> {
        if *value < self.0 {
            return Err(format!(
                "Invalid value of {} {}. Value {} is smaller than min {}.",
                cell.label(),
                value,
                value,
                self.0
            ));
        }
        Ok(())
    }
}

impl Validate<i64> for IntMax {
    fn validate(&self, cell: &Cell, value: &i64) -> Result<(), String> {
        if *value > self.0 {
            return Err(format!(
                "Invalid value of {} {}. Value {} is bigger than max {}.",
                cell.label(),
                value,
                value,
                self.0
            ));
        }
        Ok(())
    }
}

impl Validate<i64> for IntRange {
    fn validate(&self, cell: &Cell, value: &i64) -> Result<(), String> {
        IntMin(self.min).validate(cell, value)?;
        IntMax(self.max).validate(cell, value)
    }
}

/// Rejects strings shorter than the bound, in characters.
#[derive(Debug, Clone, Copy)]
pub struct StrLenMin(pub usize);

/// Rejects strings longer than the bound, in characters.
#[derive(Debug, Clone, Copy)]
pub struct StrLenMax(pub usize);

/// Accepts strings whose length is in `min..=max` characters.
#[derive(Debug, Clone, Copy)]
pub struct StrLen {
    pub min: usize,
    pub max: usize,
}

impl StrLen {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

impl Validate<str> for StrLenMin {
    fn validate(&self, cell: &Cell, value: &str) -> Result<(), String> {
        let len = value.chars().count();
        if len < self.0 {
            return Err(format!(
                "Invalid value of {} \"{}\". String length {} is shorter than min {}.",
                cell.label(),
                value,
                len,
                self.0
            ));
        }
        Ok(())
    }
}

impl Validate<str> for StrLenMax {
    fn validate(&self, cell: &Cell, value: &str) -> Result<(), String> {
        let len = value.chars().count();
        if len > self.0 {
            return Err(format!(
                "Invalid value of {} \"{}\". String length {} is longer than max {}.",
                cell.label(),
                value,
                len,
                self.0
            ));
        }
        Ok(())
    }
}

impl Validate<str> for StrLen {
    fn validate(&self, cell: &Cell, value: &str) -> Result<(), String> {
        StrLenMin(self.min).validate(cell, value)?;
        StrLenMax(self.max).validate(cell, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::cell::OptionSpec;

    fn int_cell() -> Cell {
        Cell::register(OptionSpec::int().with_long("level").with_short('l')).unwrap()
    }

    fn str_cell() -> Cell {
        Cell::register(OptionSpec::string().with_long("name")).unwrap()
    }

    #[test]
    fn int_min_is_inclusive() {
        let cell = int_cell();
        assert!(IntMin(-5).validate(&cell, &-5).is_ok());
        assert!(IntMin(-5).validate(&cell, &-6).is_err());
    }

    #[test]
    fn int_max_is_inclusive() {
        let cell = int_cell();
        assert!(IntMax(5).validate(&cell, &5).is_ok());
        assert!(IntMax(5).validate(&cell, &6).is_err());
    }

    #[test]
    fn int_range_bounds() {
        let cell = int_cell();
        let range = IntRange::new(-5, 5);
        assert!(range.validate(&cell, &-5).is_ok());
        assert!(range.validate(&cell, &5).is_ok());
        assert!(range.validate(&cell, &6).is_err());
        assert!(range.validate(&cell, &-6).is_err());
    }

    #[test]
    fn int_message_names_the_option() {
        let err = IntMax(10).validate(&int_cell(), &11).unwrap_err();
        assert_eq!(
            err,
            "Invalid value of --level -l 11. Value 11 is bigger than max 10."
        );
    }

    #[test]
    fn str_len_counts_chars() {
        let cell = str_cell();
        let len = StrLen::new(3, 5);
        assert!(len.validate(&cell, "abc").is_ok());
        assert!(len.validate(&cell, "äöüßé").is_ok());
        assert!(len.validate(&cell, "ab").is_err());
        assert!(len.validate(&cell, "abcdef").is_err());
    }

    #[test]
    fn closures_are_validators() {
        let even = Validator::int(|_: &Cell, value: &i64| {
            if value % 2 == 0 {
                Ok(())
            } else {
                Err(format!("{} is odd", value))
            }
        });
        assert_eq!(even.value_type(), ValueType::Int);
        let Validator::Int(check) = even else {
            panic!("expected int validator");
        };
        assert!(check.validate(&int_cell(), &4).is_ok());
        assert_eq!(check.validate(&int_cell(), &3).unwrap_err(), "3 is odd");
    }
}
