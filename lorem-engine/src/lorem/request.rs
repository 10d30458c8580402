//! Parsed lorem requests and the defaults table
//!
//! A [`Command`] is either [`Command::Nothing`] (no insertion) or a
//! [`GenerationRequest`] describing what to generate. Requests are built by the parser
//! and consumed by the generator within a single call.

use serde::Serialize;

/// Highest heading level a request may ask for (markdown stops at six)
pub const MAX_HEADING_LEVEL: usize = 6;

/// Hard ceiling on every count the engine acts on, whatever the settings say
pub const COUNT_LIMIT: usize = 1000;

/// The unit a request counts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Paragraph,
    Sentence,
    Word,
    List,
    Heading,
}

impl UnitKind {
    pub fn name(&self) -> &'static str {
        match self {
            UnitKind::Paragraph => "paragraph",
            UnitKind::Sentence => "sentence",
            UnitKind::Word => "word",
            UnitKind::List => "list",
            UnitKind::Heading => "heading",
        }
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What to generate, with counts already clamped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub kind: UnitKind,
    /// Number of units, or the level for headings
    pub primary: usize,
    /// Sentences per paragraph (centre of the range), words per sentence, words per
    /// list item or words per heading, depending on `kind`
    pub secondary: Option<usize>,
    /// Ordered list markers (`1.`, `2.`, ...) instead of the bullet marker
    pub numbered: bool,
}

impl GenerationRequest {
    pub fn new(kind: UnitKind, primary: usize) -> Self {
        Self {
            kind,
            primary,
            secondary: None,
            numbered: false,
        }
    }

    pub fn with_secondary(mut self, secondary: usize) -> Self {
        self.secondary = Some(secondary);
        self
    }

    pub fn numbered(mut self) -> Self {
        self.numbered = true;
        self
    }
}

/// Outcome of parsing a raw token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Command {
    /// Not a lorem command; inserts nothing
    Nothing,
    Generate(GenerationRequest),
}

impl Command {
    pub fn request(&self) -> Option<&GenerationRequest> {
        match self {
            Command::Nothing => None,
            Command::Generate(request) => Some(request),
        }
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Command::Nothing)
    }
}

/// Counts used when a token leaves them out, plus the clamp ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    pub paragraphs: usize,
    pub sentences_per_paragraph: usize,
    pub sentences: usize,
    pub words: usize,
    pub list_items: usize,
    pub heading_level: usize,
    /// Upper bound for every explicit count except heading levels; never above
    /// [`COUNT_LIMIT`]
    pub max_count: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            paragraphs: 3,
            sentences_per_paragraph: 4,
            sentences: 1,
            words: 1,
            list_items: 3,
            heading_level: 1,
            max_count: 100,
        }
    }
}

impl Defaults {
    /// Default primary count for a kind
    pub fn primary_for(&self, kind: UnitKind) -> usize {
        match kind {
            UnitKind::Paragraph => self.paragraphs,
            UnitKind::Sentence => self.sentences,
            UnitKind::Word => self.words,
            UnitKind::List => self.list_items,
            UnitKind::Heading => self.heading_level,
        }
    }

    /// Largest explicit count accepted, `max_count` held to `[1, COUNT_LIMIT]`
    pub fn count_ceiling(&self) -> usize {
        self.max_count.clamp(1, COUNT_LIMIT)
    }

    /// Largest primary count accepted for a kind
    pub fn ceiling_for(&self, kind: UnitKind) -> usize {
        match kind {
            UnitKind::Heading => MAX_HEADING_LEVEL,
            _ => self.count_ceiling(),
        }
    }
}

/// Clamp a signed count into `[1, ceiling]`
pub fn clamp_count(value: i64, ceiling: usize) -> usize {
    let ceiling = i64::try_from(ceiling.max(1)).unwrap_or(i64::MAX);
    // Both bounds are positive, so the cast cannot wrap
    value.clamp(1, ceiling) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_table() {
        let defaults = Defaults::default();
        assert_eq!(defaults.primary_for(UnitKind::Paragraph), 3);
        assert_eq!(defaults.primary_for(UnitKind::Sentence), 1);
        assert_eq!(defaults.primary_for(UnitKind::Word), 1);
        assert_eq!(defaults.primary_for(UnitKind::List), 3);
        assert_eq!(defaults.primary_for(UnitKind::Heading), 1);
        assert_eq!(defaults.sentences_per_paragraph, 4);
    }

    #[test]
    fn test_clamp_count() {
        assert_eq!(clamp_count(0, 100), 1);
        assert_eq!(clamp_count(-7, 100), 1);
        assert_eq!(clamp_count(42, 100), 42);
        assert_eq!(clamp_count(i64::MAX, 100), 100);
        assert_eq!(clamp_count(5, 0), 1);
    }

    #[test]
    fn test_heading_ceiling_ignores_max_count() {
        let defaults = Defaults {
            max_count: 2,
            ..Defaults::default()
        };
        assert_eq!(defaults.ceiling_for(UnitKind::Heading), MAX_HEADING_LEVEL);
        assert_eq!(defaults.ceiling_for(UnitKind::List), 2);
    }

    #[test]
    fn test_max_count_is_held_to_the_limit() {
        let defaults = Defaults {
            max_count: usize::MAX,
            ..Defaults::default()
        };
        assert_eq!(defaults.count_ceiling(), COUNT_LIMIT);
        assert_eq!(defaults.ceiling_for(UnitKind::Word), COUNT_LIMIT);

        let defaults = Defaults {
            max_count: 0,
            ..Defaults::default()
        };
        assert_eq!(defaults.count_ceiling(), 1);
    }
}
