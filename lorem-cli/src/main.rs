//! Command-line interface for lorem
//! Expands lorem tokens into placeholder text, the same way an editor key binding would.
//!
//! Usage:
//!   lorem `<token>`...                           - Expand tokens
//!   lorem --line `<text>` [--column `<n>`]        - Expand the token left of a cursor
//!   lorem --list-kinds                           - List the kind selectors
//!
//! Configuration comes from the built-in defaults, an optional `--config` file,
//! `LOREM_*` environment variables and the `--on-lorem` / `--on-nothing` flags, in
//! that order.

mod args;

use clap::ArgMatches;
use lorem_config::{LoadError, Loader};
use lorem_engine::lorem::kinds;
use lorem_engine::{expand_command, Command, Engine, Settings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] LoadError),
    #[error("could not serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// One expanded token, as printed by `--format json`
#[derive(Serialize)]
struct Expansion<'a> {
    token: &'a str,
    #[serde(flatten)]
    command: Command,
    text: String,
}

/// A rewritten line, as printed by `--line ... --format json`
#[derive(Serialize)]
struct LineExpansion {
    line: String,
    cursor: usize,
}

fn main() {
    let matches = args::build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    if matches.get_flag("list-kinds") {
        handle_list_kinds_command();
        return;
    }

    if let Err(e) = run(&matches) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let settings = load_settings(matches)?;
    let engine = Engine::new(settings);
    let mut rng = match matches.get_one::<u64>("seed") {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };
    let json = matches
        .get_one::<String>("format")
        .is_some_and(|format| format == "json");

    if let Some(line) = matches.get_one::<String>("line") {
        let column = matches
            .get_one::<usize>("column")
            .copied()
            .unwrap_or_else(|| line.chars().count());
        return handle_line_command(&engine, line, column, json, &mut rng);
    }

    let tokens: Vec<&str> = matches
        .get_many::<String>("tokens")
        .map(|values| values.map(String::as_str).collect())
        .unwrap_or_default();
    handle_expand_command(&engine, &tokens, json, &mut rng)
}

/// Layer the config sources in precedence order
fn load_settings(matches: &ArgMatches) -> Result<Settings, LoadError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        info!(path = %path.display(), "loading configuration file");
        loader = loader.with_file(path);
    }
    loader = loader.with_env();
    if let Some(command) = matches.get_one::<String>("on-lorem") {
        loader = loader.set_override("commands.on_lorem", command.clone())?;
    }
    if let Some(command) = matches.get_one::<String>("on-nothing") {
        loader = loader.set_override("commands.on_nothing", command.clone())?;
    }
    loader.settings()
}

/// Handle plain token expansion
fn handle_expand_command(
    engine: &Engine,
    tokens: &[&str],
    json: bool,
    rng: &mut StdRng,
) -> Result<(), CliError> {
    // No token behaves like a cursor that is not on a command
    let tokens = if tokens.is_empty() {
        vec![lorem_engine::NO_COMMAND]
    } else {
        tokens.to_vec()
    };

    let settings = engine.settings();
    let expansions: Vec<Expansion> = tokens
        .iter()
        .map(|&token| {
            let (command, text) = expand_command(token, &settings, &mut *rng);
            debug!(token, chars = text.chars().count(), "expanded token");
            Expansion {
                token,
                command,
                text,
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&expansions)?);
        return Ok(());
    }

    let text = expansions
        .iter()
        .map(|expansion| expansion.text.as_str())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    if !text.is_empty() {
        println!("{}", text);
    }
    Ok(())
}

/// Handle expansion of the token left of a cursor
fn handle_line_command(
    engine: &Engine,
    line: &str,
    column: usize,
    json: bool,
    rng: &mut StdRng,
) -> Result<(), CliError> {
    let rewrite = engine.expand_in_line(line, column, rng);
    if json {
        let output = LineExpansion {
            line: rewrite.line,
            cursor: rewrite.cursor,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", rewrite.line);
    }
    Ok(())
}

/// Handle the list-kinds command
fn handle_list_kinds_command() {
    println!("Available kind selectors:\n");
    for (word, selector) in kinds::selectors() {
        let variant = if selector.numbered { " (numbered)" } else { "" };
        println!("  {:<12} {}{}", word, selector.kind, variant);
    }
}
