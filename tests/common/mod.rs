//! Shared test helpers.

#![allow(dead_code)]

use argcell::args::{Args, OperandSpec, OptionSpec};

/// Raw argument list with the program name in front.
pub fn argv(args: &[&str]) -> Vec<String> {
    std::iter::once("prog")
        .chain(args.iter().copied())
        .map(String::from)
        .collect()
}

/// `--port/-p int (default 80)`, `--name/-n string`, `--verbose/-v flag`.
pub fn server_args() -> Args {
    let mut args = Args::new();
    args.add_options([
        OptionSpec::int().with_long("port").with_short('p').with_default(80),
        OptionSpec::string().with_long("name").with_short('n'),
        OptionSpec::flag().with_long("verbose").with_short('v'),
    ])
    .expect("valid declarations");
    args
}

/// `server_args()` plus operands `src` (required string) and `count` (int, default 1).
pub fn copy_args() -> Args {
    let mut args = server_args();
    args.add_operands([
        OperandSpec::string("src").required(),
        OperandSpec::int("count").with_default(1),
    ])
    .expect("valid declarations");
    args
}
