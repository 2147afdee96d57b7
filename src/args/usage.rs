//! Usage text: listing of declared options and operands.
//!
//! Output is a compatibility surface: column padding is to the longest
//! entry in each section, and ordering follows registration order.

use std::fmt;

use crate::args::cell::Cell;
use crate::args::parser::Args;
use crate::args::registry::{Registry, RegistryKind};
use crate::args::value::ValueType;

const INDENT: &str = "    ";

/// Left column for one cell: `--long -s type` or `key (type)`.
fn entry(cell: &Cell, kind: RegistryKind) -> String {
    match kind {
        RegistryKind::Options => {
            let mut entry = cell.label();
            if cell.value_type() != ValueType::Flag {
                entry.push(' ');
                entry.push_str(cell.value_type().as_str());
            }
            entry
        }
        RegistryKind::Operands => format!("{} ({})", cell.label(), cell.value_type()),
    }
}

/// Render one registry as an indented section. Empty registries render nothing.
pub fn render_registry(registry: &Registry) -> String {
    let mut out = String::new();
    if registry.is_empty() {
        return out;
    }

    out.push_str(match registry.kind() {
        RegistryKind::Options => "  Options\n",
        RegistryKind::Operands => "  Operands\n",
    });

    let entries: Vec<String> = registry
        .cells()
        .iter()
        .map(|c| entry(c, registry.kind()))
        .collect();
    let width = entries.iter().map(|e| e.chars().count()).max().unwrap_or(0);

    for (cell, entry) in registry.cells().iter().zip(&entries) {
        out.push_str(&format!("{}{:<width$}", INDENT, entry, width = width));
        if let Some(description) = cell.description() {
            out.push_str(&format!(" : {}", description));
        }
        if cell.is_required() {
            out.push_str(" (required)");
        }
        if let Some(default) = cell.default_value() {
            out.push_str(&format!(" (default: {})", default));
        }
        out.push('\n');
    }
    out
}

/// Synopsis line plus both sections.
pub fn render_args(args: &Args) -> String {
    let mut out = format!("usage: {}", args.executed().unwrap_or("<program>"));
    if !args.options().is_empty() {
        out.push_str(" [options]");
    }
    for cell in args.operands().cells() {
        if cell.is_required() {
            out.push_str(&format!(" <{}>", cell.label()));
        } else {
            out.push_str(&format!(" [{}]", cell.label()));
        }
    }
    out.push('\n');
    out.push_str(&render_registry(args.options()));
    out.push_str(&render_registry(args.operands()));
    out
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_registry(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::cell::{OperandSpec, OptionSpec};

    #[test]
    fn option_section_pads_to_longest_entry() {
        let mut registry = Registry::options();
        registry
            .add_all([
                OptionSpec::string()
                    .with_long("string")
                    .with_short('s')
                    .with_description("some option.")
                    .required(),
                OptionSpec::int()
                    .with_long("int")
                    .with_short('i')
                    .with_description("some option.")
                    .with_default(80),
                OptionSpec::flag().with_long("bool").with_short('b'),
            ])
            .unwrap();

        assert_eq!(
            render_registry(&registry),
            "  Options\n\
             \x20   --string -s string : some option. (required)\n\
             \x20   --int -i int       : some option. (default: 80)\n\
             \x20   --bool -b         \n"
        );
    }

    #[test]
    fn operand_section_quotes_string_defaults() {
        let mut registry = Registry::operands();
        registry
            .add_all([
                OperandSpec::string("input").required(),
                OperandSpec::string("output").with_default("out.txt"),
            ])
            .unwrap();

        assert_eq!(
            registry.to_string(),
            "  Operands\n\
             \x20   input (string)  (required)\n\
             \x20   output (string) (default: \"out.txt\")\n"
        );
    }

    #[test]
    fn empty_registry_renders_nothing() {
        assert_eq!(render_registry(&Registry::options()), "");
    }
}
