//! Tolerant lorem command parser
//!
//! Grammar of a command, after the literal `lorem` prefix:
//!
//!   tail  := "_"* [word] "_"* [count ["_" count]] rest
//!   count := ["-"] digits
//!
//! The first count is the primary count, the second the secondary count. Whatever
//! follows is ignored. There are no parse errors: unknown selector words fall back to
//! paragraphs, missing counts take the defaults table, and zero, negative or oversized
//! counts are clamped. Parsing is a pure function of the token and the defaults.

use crate::lorem::kinds::{self, KindSelector};
use crate::lorem::request::{clamp_count, Command, Defaults, GenerationRequest};
use crate::lorem::token::{tokenize_with_spans, Token};
use tracing::debug;

/// Literal prefix every command starts with
pub const PREFIX: &str = "lorem";

/// Sentinel the host passes when the cursor is not on a command
pub const NO_COMMAND: &str = "nothing";

/// Parser bound to a defaults table
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandParser {
    defaults: Defaults,
}

impl CommandParser {
    pub fn new(defaults: Defaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Parse a raw token. Anything not starting with `lorem` is [`Command::Nothing`].
    pub fn parse(&self, raw: &str) -> Command {
        let raw = raw.trim();
        match raw.strip_prefix(PREFIX) {
            Some(tail) => Command::Generate(self.parse_tail(tail)),
            None => {
                debug!(token = raw, "not a lorem command");
                Command::Nothing
            }
        }
    }

    fn parse_tail(&self, tail: &str) -> GenerationRequest {
        let tokens = tokenize_with_spans(tail);
        let mut stream = TokenStream::new(tail, &tokens);

        stream.skip_underscores();
        let selector = match stream.peek() {
            Some(Token::Word) => {
                let word = stream.bump_text();
                kinds::lookup(word).unwrap_or_else(|| {
                    debug!(selector = word, "unknown kind selector, using paragraphs");
                    KindSelector::PARAGRAPH
                })
            }
            _ => KindSelector::PARAGRAPH,
        };
        stream.skip_underscores();

        let primary = stream.count();
        let secondary = match primary {
            Some(_) if stream.eat(Token::Underscore) => stream.count(),
            _ => None,
        };

        let kind = selector.kind;
        let ceiling = self.defaults.ceiling_for(kind);
        let primary = match primary {
            Some(value) => clamp_logged("primary", value, ceiling),
            None => clamp_count(
                i64::try_from(self.defaults.primary_for(kind)).unwrap_or(i64::MAX),
                ceiling,
            ),
        };
        let secondary = secondary
            .map(|value| clamp_logged("secondary", value, self.defaults.count_ceiling()));

        GenerationRequest {
            kind,
            primary,
            secondary,
            numbered: selector.numbered,
        }
    }
}

fn clamp_logged(field: &'static str, value: i64, ceiling: usize) -> usize {
    let clamped = clamp_count(value, ceiling);
    if clamped as i64 != value {
        debug!(field, value, clamped, "count clamped");
    }
    clamped
}

/// Parse `raw`, falling back to `fallback` when `raw` is not a command.
///
/// The fallback is parsed once; a fallback that is not a command either yields
/// [`Command::Nothing`].
pub fn parse_command(raw: &str, fallback: &str, defaults: &Defaults) -> Command {
    let parser = CommandParser::new(*defaults);
    match parser.parse(raw) {
        Command::Nothing => parser.parse(fallback),
        command => command,
    }
}

/// Cursor over the lexed tail
struct TokenStream<'a> {
    source: &'a str,
    tokens: &'a [(Token, logos::Span)],
    position: usize,
}

impl<'a> TokenStream<'a> {
    fn new(source: &'a str, tokens: &'a [(Token, logos::Span)]) -> Self {
        Self {
            source,
            tokens,
            position: 0,
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.position).map(|(token, _)| *token)
    }

    fn peek_nth(&self, n: usize) -> Option<Token> {
        self.tokens.get(self.position + n).map(|(token, _)| *token)
    }

    /// Consume the current token and return its text
    fn bump_text(&mut self) -> &'a str {
        let text = self
            .tokens
            .get(self.position)
            .map(|(_, span)| &self.source[span.clone()])
            .unwrap_or("");
        self.position += 1;
        text
    }

    fn eat(&mut self, expected: Token) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn skip_underscores(&mut self) {
        while self.eat(Token::Underscore) {}
    }

    /// `["-"] digits`; a lone minus is left in place
    fn count(&mut self) -> Option<i64> {
        if !self.peek().is_some_and(|token| token.starts_count()) {
            return None;
        }
        let negative = self.peek() == Some(Token::Minus);
        let digits_at = usize::from(negative);
        if self.peek_nth(digits_at) != Some(Token::Number) {
            return None;
        }
        self.position += digits_at;
        let magnitude = parse_magnitude(self.bump_text());
        Some(if negative { -magnitude } else { magnitude })
    }
}

/// Digit runs too long for an `i64` saturate instead of failing
fn parse_magnitude(digits: &str) -> i64 {
    digits
        .parse::<u64>()
        .ok()
        .and_then(|value| i64::try_from(value).ok())
        .unwrap_or(i64::MAX)
}
