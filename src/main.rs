use std::path::PathBuf;

use anyhow::Context;
use serde_json::{json, Map};

use argcell::args::{
    Args, IntRange, OperandSpec, OptionSpec, Registry, StrLen, Validator,
};
use argcell::config::Manifest;
use argcell::logging::init_tracing;

const MANIFEST_ENV: &str = "ARGCELL_MANIFEST";

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut args = declared_args()?;
    if let Err(e) = args.parse_env() {
        eprintln!("Error: {}", e);
        eprint!("{}", args);
        std::process::exit(1);
    }

    let resolved = json!({
        "program": args.executed(),
        "options": resolved_values(args.options()),
        "operands": resolved_values(args.operands()),
    });
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

/// Declarations from `$ARGCELL_MANIFEST`, then the default manifest, then
/// the built-in demo set.
fn declared_args() -> anyhow::Result<Args> {
    if let Some(path) = std::env::var_os(MANIFEST_ENV).map(PathBuf::from) {
        let manifest = Manifest::load_from(&path)
            .with_context(|| format!("{} points at an unusable manifest", MANIFEST_ENV))?;
        return Ok(manifest.build_args()?);
    }

    let manifest = Manifest::load()?;
    if manifest != Manifest::default() {
        return Ok(manifest.build_args()?);
    }
    Ok(demo_args()?)
}

fn demo_args() -> Result<Args, argcell::args::RegistrationError> {
    let mut args = Args::new();
    args.add_options([
        OptionSpec::string()
            .with_long("string")
            .with_short('s')
            .with_description("some option.")
            .required()
            .with_validator(Validator::string(StrLen::new(3, 5))),
        OptionSpec::int()
            .with_long("int")
            .with_short('i')
            .with_description("some option.")
            .with_default(80)
            .with_validator(Validator::int(IntRange::new(10, 100))),
        OptionSpec::flag()
            .with_long("bool")
            .with_short('b')
            .with_description("some option."),
    ])?;
    args.add_operands([
        OperandSpec::string("operand1")
            .with_description("some operand")
            .required(),
        OperandSpec::int("operand2").with_description("some operand"),
        OperandSpec::int("operand3").with_description("some operand"),
    ])?;
    Ok(args)
}

/// Resolved value per cell, `null` when unset without a default.
fn resolved_values(registry: &Registry) -> Map<String, serde_json::Value> {
    registry
        .cells()
        .iter()
        .map(|cell| {
            let key = cell.keys().into_iter().next().unwrap_or_default();
            let value = cell
                .value()
                .ok()
                .and_then(|v| serde_json::to_value(v).ok())
                .unwrap_or(serde_json::Value::Null);
            (key, value)
        })
        .collect()
}
