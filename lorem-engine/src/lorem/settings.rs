//! Process-wide knobs supplied by the host
//!
//! Settings are plain values. Hosts rebuild them when their preferences change and hand
//! them to [`crate::Engine::reconfigure`] or straight to [`crate::parse_and_generate`].

use crate::lorem::generator::GeneratorSettings;
use crate::lorem::parser::{NO_COMMAND, PREFIX};
use crate::lorem::request::Defaults;

/// Substitutions applied before parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSettings {
    /// Used when the token is exactly `lorem`
    pub on_lorem: String,
    /// Used when there is no lorem token at all; `nothing` inserts nothing
    pub on_nothing: String,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            on_lorem: PREFIX.to_string(),
            on_nothing: NO_COMMAND.to_string(),
        }
    }
}

impl CommandSettings {
    /// `on_lorem` when `raw` is the bare prefix, `None` for any other token
    pub fn bare_lorem_command(&self, raw: &str) -> Option<&str> {
        (raw.trim() == PREFIX).then_some(self.on_lorem.as_str())
    }
}

/// Everything one expansion reads
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub commands: CommandSettings,
    pub defaults: Defaults,
    pub generator: GeneratorSettings,
}
