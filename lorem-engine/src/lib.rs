//! # lorem-engine
//!
//! Turns short lorem tokens typed in an editor (`lorem`, `lorem3_2`, `loremlist5`,
//! `lorem_h2`) into placeholder text.
//!
//! The flow is one-directional:
//!
//!   raw token ──> [token] lexer ──> [parser] ──> GenerationRequest ──> [generator] ──> String
//!
//! Host editors only need [`parse_and_generate`] or the shared [`Engine`] handle. Cursor
//! scanning and indentation helpers live in [`lorem::cursor`] for hosts that hand over a
//! whole line instead of a token.
//!
//! Nothing in this crate fails: every input string produces a usable request and every
//! request produces a string (possibly empty).

pub mod lorem;

pub use lorem::api::{expand_command, parse_and_generate, Engine, Rewrite};
pub use lorem::generator::{Generator, GeneratorSettings, WordRange};
pub use lorem::parser::{parse_command, CommandParser, NO_COMMAND, PREFIX};
pub use lorem::request::{Command, Defaults, GenerationRequest, UnitKind};
pub use lorem::settings::{CommandSettings, Settings};
