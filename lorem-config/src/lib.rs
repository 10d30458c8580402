//! Shared configuration loader for the lorem tools.
//!
//! `defaults/lorem.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files and
//! `LOREM_*` environment variables on top of those defaults via [`Loader`] before
//! deserializing into [`LoremConfig`], which converts into the engine's
//! [`Settings`](lorem_engine::Settings).

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use lorem_engine::lorem::request::{COUNT_LIMIT, MAX_HEADING_LEVEL};
use lorem_engine::{CommandSettings, Defaults, GeneratorSettings, Settings, WordRange};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/lorem.default.toml");

/// Prefix for environment overrides, e.g. `LOREM_COMMANDS__ON_LOREM=lorem_w5`
pub const ENV_PREFIX: &str = "LOREM";

/// Top-level configuration consumed by lorem applications.
#[derive(Debug, Clone, Deserialize)]
pub struct LoremConfig {
    pub commands: CommandsConfig,
    pub defaults: DefaultsConfig,
    pub generator: GeneratorConfig,
}

/// Host preference substitutions.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandsConfig {
    pub on_lorem: String,
    pub on_nothing: String,
}

/// Mirrors the engine's defaults table.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    pub paragraphs: usize,
    pub sentences_per_paragraph: usize,
    pub sentences: usize,
    pub words: usize,
    pub list_items: usize,
    pub heading_level: usize,
    pub max_count: usize,
}

/// Mirrors the knobs exposed by the generator.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub classic_opening: bool,
    pub comma_chance: f64,
    pub paragraph_spread: usize,
    pub list_marker: char,
    pub heading_markers: bool,
    pub sentence_words: RangeConfig,
    pub list_item_words: RangeConfig,
    pub heading_words: RangeConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RangeConfig {
    pub min: usize,
    pub max: usize,
}

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

fn invalid(key: &'static str, reason: impl Into<String>) -> LoadError {
    LoadError::Invalid {
        key,
        reason: reason.into(),
    }
}

impl LoremConfig {
    /// Reject values the engine would otherwise silently normalise
    pub fn validate(&self) -> Result<(), LoadError> {
        let defaults = &self.defaults;
        let counts = [
            ("defaults.paragraphs", defaults.paragraphs),
            (
                "defaults.sentences_per_paragraph",
                defaults.sentences_per_paragraph,
            ),
            ("defaults.sentences", defaults.sentences),
            ("defaults.words", defaults.words),
            ("defaults.list_items", defaults.list_items),
            ("defaults.max_count", defaults.max_count),
        ];
        for (key, value) in counts {
            if value == 0 {
                return Err(invalid(key, "must be at least 1"));
            }
            if value > COUNT_LIMIT {
                return Err(invalid(key, format!("must be at most {COUNT_LIMIT}")));
            }
        }
        if !(1..=MAX_HEADING_LEVEL).contains(&defaults.heading_level) {
            return Err(invalid(
                "defaults.heading_level",
                format!("must be between 1 and {MAX_HEADING_LEVEL}"),
            ));
        }

        let generator = &self.generator;
        let ranges = [
            ("generator.sentence_words", generator.sentence_words),
            ("generator.list_item_words", generator.list_item_words),
            ("generator.heading_words", generator.heading_words),
        ];
        for (key, range) in ranges {
            if range.min == 0 {
                return Err(invalid(key, "min must be at least 1"));
            }
            if range.min > range.max {
                return Err(invalid(
                    key,
                    format!("min {} is greater than max {}", range.min, range.max),
                ));
            }
            if range.max > COUNT_LIMIT {
                return Err(invalid(key, format!("max must be at most {COUNT_LIMIT}")));
            }
        }
        if generator.paragraph_spread > COUNT_LIMIT {
            return Err(invalid(
                "generator.paragraph_spread",
                format!("must be at most {COUNT_LIMIT}"),
            ));
        }
        if !(0.0..=1.0).contains(&generator.comma_chance) {
            return Err(invalid(
                "generator.comma_chance",
                "must be between 0.0 and 1.0",
            ));
        }
        if generator.list_marker.is_whitespace() {
            return Err(invalid("generator.list_marker", "must not be whitespace"));
        }
        Ok(())
    }
}

impl From<RangeConfig> for WordRange {
    fn from(range: RangeConfig) -> Self {
        WordRange::new(range.min, range.max)
    }
}

impl From<LoremConfig> for Settings {
    fn from(config: LoremConfig) -> Self {
        let LoremConfig {
            commands,
            defaults,
            generator,
        } = config;
        Settings {
            commands: CommandSettings {
                on_lorem: commands.on_lorem,
                on_nothing: commands.on_nothing,
            },
            defaults: Defaults {
                paragraphs: defaults.paragraphs,
                sentences_per_paragraph: defaults.sentences_per_paragraph,
                sentences: defaults.sentences,
                words: defaults.words,
                list_items: defaults.list_items,
                heading_level: defaults.heading_level,
                max_count: defaults.max_count,
            },
            generator: GeneratorSettings {
                sentence_words: generator.sentence_words.into(),
                list_item_words: generator.list_item_words.into(),
                heading_words: generator.heading_words.into(),
                paragraph_spread: generator.paragraph_spread,
                comma_chance: generator.comma_chance,
                classic_opening: generator.classic_opening,
                list_marker: generator.list_marker,
                heading_markers: generator.heading_markers,
            },
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `LOREM_<SECTION>__<KEY>` environment variables.
    pub fn with_env(mut self) -> Self {
        let source = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, LoadError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize and validate the resulting configuration.
    pub fn build(self) -> Result<LoremConfig, LoadError> {
        let config: LoremConfig = self.builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Build straight into engine settings.
    pub fn settings(self) -> Result<Settings, LoadError> {
        self.build().map(Settings::from)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<LoremConfig, LoadError> {
    Loader::new().build()
}
