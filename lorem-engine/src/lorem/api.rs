//! Entry points for hosts
//!
//! [`parse_and_generate`] is the whole pipeline as a function of its inputs.
//! [`Engine`] wraps it with settings that the host can swap while other threads expand
//! tokens: each expansion takes one snapshot up front and never sees a later change.

use crate::lorem::cursor::{command_at, indent_continuation, leading_indent};
use crate::lorem::generator::Generator;
use crate::lorem::parser::{parse_command, CommandParser, NO_COMMAND};
use crate::lorem::request::Command;
use crate::lorem::settings::Settings;
use rand::Rng;
use std::sync::{Arc, RwLock};
use tracing::trace;

/// Expand a raw token into text. Non-commands expand to an empty string.
pub fn parse_and_generate<R: Rng + ?Sized>(
    raw: &str,
    settings: &Settings,
    rng: &mut R,
) -> String {
    expand_command(raw, settings, rng).1
}

/// Expand a raw token and keep the command it resolved to
pub fn expand_command<R: Rng + ?Sized>(
    raw: &str,
    settings: &Settings,
    rng: &mut R,
) -> (Command, String) {
    let command = resolve(raw, settings);
    let text = match command {
        Command::Nothing => String::new(),
        Command::Generate(request) => Generator::new(settings).generate(&request, rng),
    };
    (command, text)
}

/// Apply the host substitutions and parse.
///
/// The bare prefix is replaced by `on_lorem`, which is parsed on its own. Only a token
/// that is not a command at all falls back to `on_nothing`.
pub fn resolve(raw: &str, settings: &Settings) -> Command {
    let commands = &settings.commands;
    match commands.bare_lorem_command(raw) {
        Some(command) => {
            trace!(raw, command, "substituting on_lorem");
            CommandParser::new(settings.defaults).parse(command)
        }
        None => {
            trace!(raw, fallback = commands.on_nothing.as_str(), "resolving lorem command");
            parse_command(raw, &commands.on_nothing, &settings.defaults)
        }
    }
}

/// A line after its token was replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub line: String,
    /// Byte offset just past the inserted text
    pub cursor: usize,
}

/// Shared handle over swappable settings
#[derive(Debug, Default)]
pub struct Engine {
    settings: RwLock<Arc<Settings>>,
}

impl Engine {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(Arc::new(settings)),
        }
    }

    /// Current settings; later reconfiguration does not affect the returned value
    pub fn settings(&self) -> Arc<Settings> {
        let guard = self
            .settings
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Replace the settings as a whole
    pub fn reconfigure(&self, settings: Settings) {
        let mut guard = self
            .settings
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(settings);
    }

    /// Expand with the thread-local rng
    pub fn expand(&self, raw: &str) -> String {
        self.expand_with(raw, &mut rand::thread_rng())
    }

    pub fn expand_with<R: Rng + ?Sized>(&self, raw: &str, rng: &mut R) -> String {
        let snapshot = self.settings();
        parse_and_generate(raw, &snapshot, rng)
    }

    /// Parse only, against the current settings
    pub fn resolve(&self, raw: &str) -> Command {
        resolve(raw, &self.settings())
    }

    /// Replace the token left of `column` in `line` with its expansion.
    ///
    /// Without a token the `on_nothing` command is inserted at the cursor (usually
    /// nothing). Continuation lines of multi-line output get the line's indentation.
    pub fn expand_in_line<R: Rng + ?Sized>(
        &self,
        line: &str,
        column: usize,
        rng: &mut R,
    ) -> Rewrite {
        let snapshot = self.settings();
        let found = command_at(line, column);
        let token = found.command.unwrap_or(NO_COMMAND);
        let text = parse_and_generate(token, &snapshot, rng);
        let text = indent_continuation(&text, leading_indent(line));

        let mut rewritten = String::with_capacity(line.len() + text.len());
        rewritten.push_str(&line[..found.range.start]);
        rewritten.push_str(&text);
        let cursor = rewritten.len();
        rewritten.push_str(&line[found.range.end..]);

        Rewrite {
            line: rewritten,
            cursor,
        }
    }
}
