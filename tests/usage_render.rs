//! Integration tests for usage text.

mod common;

use argcell::args::{Args, OperandSpec, OptionSpec};
use common::{argv, copy_args};

#[test]
fn usage_lists_options_then_operands() {
    let args = copy_args();

    assert_eq!(
        args.render_usage(),
        "usage: <program> [options] <src> [count]\n\
         \x20 Options\n\
         \x20   --port -p int    (default: 80)\n\
         \x20   --name -n string\n\
         \x20   --verbose -v    \n\
         \x20 Operands\n\
         \x20   src (string) (required)\n\
         \x20   count (int)  (default: 1)\n"
    );
}

#[test]
fn usage_uses_program_name_after_parse() {
    let mut args = copy_args();
    args.parse(argv(&["a.txt"])).unwrap();
    assert!(args.render_usage().starts_with("usage: prog [options] <src> [count]\n"));
}

#[test]
fn usage_is_byte_stable() {
    let args = copy_args();
    assert_eq!(args.render_usage(), args.render_usage());
    assert_eq!(args.to_string(), args.render_usage());
}

#[test]
fn usage_without_declarations() {
    assert_eq!(Args::new().render_usage(), "usage: <program>\n");
}

#[test]
fn usage_shows_descriptions() {
    let mut args = Args::new();
    args.add_option(
        OptionSpec::string()
            .with_long("output")
            .with_short('o')
            .with_description("where to write")
            .with_default("out.txt"),
    )
    .unwrap();
    args.add_operand(OperandSpec::int("jobs").with_description("worker count").required())
        .unwrap();

    let usage = args.render_usage();
    assert!(usage.contains("    --output -o string : where to write (default: \"out.txt\")\n"));
    assert!(usage.contains("    jobs (int) : worker count (required)\n"));
}
