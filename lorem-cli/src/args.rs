// Shared with build.rs, which includes this file to generate shell completions.
use clap::{value_parser, Arg, ArgAction, Command, ValueHint};
use std::path::PathBuf;

pub fn build_cli() -> Command {
    Command::new("lorem")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Expand lorem tokens into placeholder text")
        .arg_required_else_help(true)
        .arg(
            Arg::new("tokens")
                .help("Tokens to expand (e.g. 'lorem3', 'loremlist5', 'lorem_w10')")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("line")
                .long("line")
                .help("Editor line holding a token left of the cursor")
                .conflicts_with("tokens"),
        )
        .arg(
            Arg::new("column")
                .long("column")
                .help("Cursor column in characters (default: end of line)")
                .value_parser(value_parser!(usize))
                .requires("line"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for reproducible output")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults")
                .value_parser(value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("on-lorem")
                .long("on-lorem")
                .help("Command to expand when the token is exactly 'lorem'"),
        )
        .arg(
            Arg::new("on-nothing")
                .long("on-nothing")
                .help("Command to expand when there is no lorem token"),
        )
        .arg(
            Arg::new("list-kinds")
                .long("list-kinds")
                .help("List the kind selectors a token may use")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (repeatable); RUST_LOG takes precedence")
                .action(ArgAction::Count),
        )
}
