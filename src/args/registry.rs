//! Registry: ordered collection of cells for options or operands.

use crate::args::cell::{Cell, CellKey, CellSpec};
use crate::args::error::{ArgsError, RegistrationError};
use crate::args::value::{Value, ValueType};

/// What a registry holds. Decides how keys are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryKind {
    Options,
    Operands,
}

/// Cells in registration order.
///
/// Order is significant: operands bind positionally in this order and usage
/// text lists cells in it.
#[derive(Debug, Clone)]
pub struct Registry {
    kind: RegistryKind,
    cells: Vec<Cell>,
}

impl Registry {
    pub fn options() -> Self {
        Self {
            kind: RegistryKind::Options,
            cells: Vec::new(),
        }
    }

    pub fn operands() -> Self {
        Self {
            kind: RegistryKind::Operands,
            cells: Vec::new(),
        }
    }

    pub fn kind(&self) -> RegistryKind {
        self.kind
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Register one declaration.
    pub fn add(&mut self, spec: impl Into<CellSpec>) -> Result<(), RegistrationError> {
        let cell = Cell::register(spec)?;
        match (self.kind, cell.key()) {
            (RegistryKind::Options, CellKey::Option { .. })
            | (RegistryKind::Operands, CellKey::Operand { .. }) => {}
            _ => return Err(RegistrationError::KindMismatch { label: cell.label() }),
        }
        for key in cell.keys() {
            if self.cells.iter().any(|c| c.keys().contains(&key)) {
                return Err(RegistrationError::DuplicateKey { key });
            }
        }
        tracing::trace!("Registered {}", cell.label());
        self.cells.push(cell);
        Ok(())
    }

    /// Register declarations in order. The first failure stops the batch;
    /// cells added before it stay registered.
    pub fn add_all<S: Into<CellSpec>>(
        &mut self,
        specs: impl IntoIterator<Item = S>,
    ) -> Result<(), RegistrationError> {
        for spec in specs {
            self.add(spec)?;
        }
        Ok(())
    }

    /// Index of the cell answering to `key`.
    ///
    /// Options try the long key first, then the short key; leading dashes
    /// are ignored. Operands match their key exactly.
    pub fn position(&self, key: &str) -> Option<usize> {
        match self.kind {
            RegistryKind::Options => {
                let key = key.trim_start_matches('-');
                self.cells
                    .iter()
                    .position(|c| c.long_key() == Some(key))
                    .or_else(|| {
                        let mut chars = key.chars();
                        match (chars.next(), chars.next()) {
                            (Some(short), None) => {
                                self.cells.iter().position(|c| c.short_key() == Some(short))
                            }
                            _ => None,
                        }
                    })
            }
            RegistryKind::Operands => self
                .cells
                .iter()
                .position(|c| c.operand_key() == Some(key)),
        }
    }

    pub fn find(&self, key: &str) -> Option<&Cell> {
        self.position(key).map(|i| &self.cells[i])
    }

    pub fn get_at(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Snapshot of the cell answering to `key`.
    pub fn cell(&self, key: &str) -> Result<Cell, ArgsError> {
        self.find(key)
            .cloned()
            .ok_or_else(|| ArgsError::UnknownKey { key: key.to_string() })
    }

    /// Bind a value to the cell answering to `key`.
    pub fn set(&mut self, key: &str, value: Option<Value>) -> Result<(), ArgsError> {
        let index = self
            .position(key)
            .ok_or_else(|| ArgsError::UnknownKey { key: key.to_string() })?;
        self.set_at(index, value)
    }

    /// Bind a value to the cell at `index`.
    ///
    /// A cell can be bound once per parse pass.
    pub(crate) fn set_at(&mut self, index: usize, value: Option<Value>) -> Result<(), ArgsError> {
        let cell = &mut self.cells[index];
        if cell.is_set() {
            return Err(ArgsError::DuplicateDefinition { label: cell.label() });
        }
        cell.set_value(value)
    }

    pub fn get(&self, key: &str) -> Result<Value, ArgsError> {
        self.find(key)
            .ok_or_else(|| ArgsError::UnknownKey { key: key.to_string() })?
            .value()
    }

    pub fn get_int(&self, key: &str) -> Result<i64, ArgsError> {
        self.get(key)?.as_int().ok_or_else(|| ArgsError::WrongType {
            key: key.to_string(),
            requested: ValueType::Int,
        })
    }

    pub fn get_string(&self, key: &str) -> Result<String, ArgsError> {
        match self.get(key)? {
            Value::Str(s) => Ok(s),
            _ => Err(ArgsError::WrongType {
                key: key.to_string(),
                requested: ValueType::Str,
            }),
        }
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, ArgsError> {
        self.get(key)?.as_bool().ok_or_else(|| ArgsError::WrongType {
            key: key.to_string(),
            requested: ValueType::Flag,
        })
    }

    /// False for unknown keys as well as declared-but-unset ones.
    pub fn is_set(&self, key: &str) -> bool {
        self.find(key).is_some_and(Cell::is_set)
    }

    /// Validate every cell in registration order, stopping at the first error.
    pub fn validate_all(&self) -> Result<(), ArgsError> {
        self.cells.iter().try_for_each(Cell::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::cell::{OperandSpec, OptionSpec};

    fn options() -> Registry {
        let mut registry = Registry::options();
        registry
            .add_all([
                OptionSpec::int().with_long("port").with_short('p').with_default(80),
                OptionSpec::flag().with_long("verbose").with_short('v'),
                OptionSpec::string().with_long("n"),
            ])
            .unwrap();
        registry
    }

    #[test]
    fn lookup_by_either_key() {
        let registry = options();
        assert_eq!(registry.position("n"), Some(2));
        assert_eq!(registry.position("-n"), Some(2));
        assert_eq!(registry.position("p"), Some(0));
        assert_eq!(registry.position("--port"), Some(0));
        assert_eq!(registry.position("-v"), Some(1));
        assert_eq!(registry.position("missing"), None);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let mut registry = options();
        let err = registry
            .add(OptionSpec::flag().with_long("quiet").with_short('v'))
            .unwrap_err();
        assert_eq!(err, RegistrationError::DuplicateKey { key: "v".into() });
        assert_eq!(registry.len(), 3);

        // a one-letter long key shadows the same short key
        let err = registry.add(OptionSpec::flag().with_short('n')).unwrap_err();
        assert_eq!(err, RegistrationError::DuplicateKey { key: "n".into() });
    }

    #[test]
    fn failed_batch_keeps_earlier_cells() {
        let mut registry = Registry::operands();
        let err = registry
            .add_all([
                OperandSpec::string("src"),
                OperandSpec::string("dst").with_default(1),
                OperandSpec::string("extra"),
            ])
            .unwrap_err();
        assert!(matches!(err, RegistrationError::DefaultTypeMismatch { .. }));
        assert_eq!(registry.len(), 1);
        assert!(registry.find("src").is_some());
        assert!(registry.find("extra").is_none());
    }

    #[test]
    fn set_twice_is_duplicate_definition() {
        let mut registry = options();
        registry.set("verbose", None).unwrap();
        assert!(matches!(
            registry.set("v", None).unwrap_err(),
            ArgsError::DuplicateDefinition { label } if label == "--verbose -v"
        ));
    }

    #[test]
    fn set_unknown_key() {
        let mut registry = options();
        assert!(matches!(
            registry.set("nope", None).unwrap_err(),
            ArgsError::UnknownKey { .. }
        ));
    }

    #[test]
    fn typed_getters() {
        let mut registry = options();
        assert_eq!(registry.get_int("port").unwrap(), 80);
        registry.set("p", Some(Value::Int(8080))).unwrap();
        assert_eq!(registry.get_int("port").unwrap(), 8080);
        assert!(matches!(
            registry.get_string("port").unwrap_err(),
            ArgsError::WrongType { requested: ValueType::Str, .. }
        ));
        assert!(!registry.get_bool("verbose").unwrap());
        assert!(matches!(
            registry.get("n").unwrap_err(),
            ArgsError::NoValueNoDefault { .. }
        ));
    }

    #[test]
    fn is_set_never_errors() {
        let mut registry = options();
        assert!(!registry.is_set("port"));
        assert!(!registry.is_set("unknown"));
        registry.set("port", Some(Value::Int(1))).unwrap();
        assert!(registry.is_set("p"));
    }

    #[test]
    fn snapshots_do_not_leak_mutation() {
        let registry = options();
        let mut snapshot = registry.cell("port").unwrap();
        snapshot.set_value(Some(Value::Int(1))).unwrap();
        assert!(!registry.is_set("port"));
    }

    #[test]
    fn validate_all_stops_at_first_failure() {
        let mut registry = Registry::operands();
        registry
            .add_all([
                OperandSpec::string("first").required(),
                OperandSpec::string("second").required(),
            ])
            .unwrap();
        assert!(matches!(
            registry.validate_all().unwrap_err(),
            ArgsError::RequiredNotProvided { label } if label == "first"
        ));
    }

    #[test]
    fn wrong_kind_of_spec_is_rejected() {
        let mut registry = Registry::operands();
        assert!(matches!(
            registry.add(OptionSpec::flag().with_long("x")).unwrap_err(),
            RegistrationError::KindMismatch { .. }
        ));
        assert!(registry.is_empty());
    }
}
