//! Placeholder text synthesis
//!
//! A [`Generator`] turns a [`GenerationRequest`] into a string. Per kind:
//!
//!   word       `primary` words, capitalised, one trailing period
//!   sentence   `primary` sentences joined by a space; `secondary` fixes words per sentence
//!   paragraph  `primary` paragraphs joined by a blank line; `secondary` centres the
//!              sentences-per-paragraph range
//!   list       `primary` lines of `<marker> <phrase>.`; `secondary` fixes words per item
//!   heading    one line, `#` x `primary` then the words, no period; `secondary` fixes
//!              the word count
//!
//! Randomness comes from the caller, so a seeded rng gives reproducible output. Output
//! never ends with a newline.

use crate::lorem::request::{GenerationRequest, UnitKind, COUNT_LIMIT, MAX_HEADING_LEVEL};
use crate::lorem::settings::Settings;
use crate::lorem::vocabulary::Vocabulary;
use rand::Rng;
use tracing::debug;

/// Sentences shorter than this never get a comma
const MIN_WORDS_FOR_COMMA: usize = 8;

/// Inclusive count range; bounds are normalised on construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordRange {
    min: usize,
    max: usize,
}

impl WordRange {
    /// Reversed bounds are swapped and both bounds are held to `[1, COUNT_LIMIT]`
    pub fn new(a: usize, b: usize) -> Self {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Self {
            min: min.clamp(1, COUNT_LIMIT),
            max: max.clamp(1, COUNT_LIMIT),
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, value: usize) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(self.min..=self.max)
    }
}

/// Shape of the generated text
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    pub sentence_words: WordRange,
    pub list_item_words: WordRange,
    pub heading_words: WordRange,
    /// Sentences per paragraph vary by this much around the centre
    pub paragraph_spread: usize,
    /// Probability that a long sentence gets one comma
    pub comma_chance: f64,
    /// Start the output with "Lorem ipsum dolor sit amet"
    pub classic_opening: bool,
    pub list_marker: char,
    /// Prefix headings with `#` markers
    pub heading_markers: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            sentence_words: WordRange::new(4, 18),
            list_item_words: WordRange::new(3, 8),
            heading_words: WordRange::new(2, 6),
            paragraph_spread: 1,
            comma_chance: 0.25,
            classic_opening: true,
            list_marker: '-',
            heading_markers: true,
        }
    }
}

impl GeneratorSettings {
    fn comma_probability(&self) -> f64 {
        if self.comma_chance.is_finite() {
            self.comma_chance.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// Text generator bound to one settings snapshot
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    settings: &'a GeneratorSettings,
    sentences_per_paragraph: usize,
    vocabulary: Vocabulary,
}

impl<'a> Generator<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings: &settings.generator,
            sentences_per_paragraph: settings.defaults.sentences_per_paragraph,
            vocabulary: Vocabulary::classic(),
        }
    }

    /// Generate the text for a request. Counts above [`COUNT_LIMIT`] are cut down to it.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> String {
        let opening: &'static [&'static str] = if self.settings.classic_opening {
            self.vocabulary.opening()
        } else {
            &[]
        };
        let mut draw = Draw { rng, opening };
        let count = request.primary.clamp(1, COUNT_LIMIT);
        let secondary = request.secondary.map(|value| value.clamp(1, COUNT_LIMIT));

        let text = match request.kind {
            UnitKind::Word => self.words(&mut draw, count),
            UnitKind::Sentence => self.sentences(&mut draw, count, secondary),
            UnitKind::Paragraph => self.paragraphs(&mut draw, count, secondary),
            UnitKind::List => self.list(&mut draw, count, secondary, request.numbered),
            UnitKind::Heading => self.heading(&mut draw, count, secondary),
        };

        debug!(
            kind = request.kind.name(),
            primary = request.primary,
            secondary = request.secondary,
            bytes = text.len(),
            "generated placeholder text"
        );
        text
    }

    fn words<R: Rng + ?Sized>(&self, draw: &mut Draw<'_, R>, count: usize) -> String {
        let mut text = self.phrase(draw, count, false);
        text.push('.');
        text
    }

    fn sentence<R: Rng + ?Sized>(&self, draw: &mut Draw<'_, R>, words: Option<usize>) -> String {
        let words = draw.size(words, self.settings.sentence_words);
        let mut text = self.phrase(draw, words, true);
        text.push('.');
        text
    }

    fn sentences<R: Rng + ?Sized>(
        &self,
        draw: &mut Draw<'_, R>,
        count: usize,
        words: Option<usize>,
    ) -> String {
        (0..count)
            .map(|_| self.sentence(draw, words))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn paragraphs<R: Rng + ?Sized>(
        &self,
        draw: &mut Draw<'_, R>,
        count: usize,
        centre: Option<usize>,
    ) -> String {
        let centre = centre
            .unwrap_or(self.sentences_per_paragraph)
            .clamp(1, COUNT_LIMIT);
        let spread = self.settings.paragraph_spread.min(COUNT_LIMIT);
        let range = WordRange::new(
            centre.saturating_sub(spread),
            centre.saturating_add(spread),
        );

        (0..count)
            .map(|_| {
                let sentences = draw.size(None, range);
                self.sentences(draw, sentences, None)
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn list<R: Rng + ?Sized>(
        &self,
        draw: &mut Draw<'_, R>,
        count: usize,
        words: Option<usize>,
        numbered: bool,
    ) -> String {
        (1..=count)
            .map(|index| {
                let marker = if numbered {
                    format!("{index}.")
                } else {
                    self.settings.list_marker.to_string()
                };
                let words = draw.size(words, self.settings.list_item_words);
                format!("{marker} {}.", self.phrase(draw, words, false))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn heading<R: Rng + ?Sized>(
        &self,
        draw: &mut Draw<'_, R>,
        level: usize,
        words: Option<usize>,
    ) -> String {
        let words = draw.size(words, self.settings.heading_words);
        let title = self.phrase(draw, words, false);
        if self.settings.heading_markers {
            let level = level.clamp(1, MAX_HEADING_LEVEL);
            format!("{} {title}", "#".repeat(level))
        } else {
            title
        }
    }

    /// Capitalised run of words without terminal punctuation
    fn phrase<R: Rng + ?Sized>(
        &self,
        draw: &mut Draw<'_, R>,
        words: usize,
        allow_comma: bool,
    ) -> String {
        let words = words.max(1);
        let comma_after = if allow_comma {
            self.comma_position(&mut *draw.rng, words)
        } else {
            None
        };

        let mut text = String::new();
        for index in 0..words {
            let word = draw.word(&self.vocabulary);
            if index == 0 {
                text.push_str(&capitalize(word));
            } else {
                text.push(' ');
                text.push_str(word);
            }
            if comma_after == Some(index) {
                text.push(',');
            }
        }
        text
    }

    fn comma_position<R: Rng + ?Sized>(&self, rng: &mut R, words: usize) -> Option<usize> {
        if words < MIN_WORDS_FOR_COMMA || !rng.gen_bool(self.settings.comma_probability()) {
            return None;
        }
        // Keep at least two words between the comma and the period
        Some(rng.gen_range(1..words - 2))
    }
}

/// Word source for one generation: the opening first, then random draws
struct Draw<'r, R: ?Sized> {
    rng: &'r mut R,
    opening: &'static [&'static str],
}

impl<R: Rng + ?Sized> Draw<'_, R> {
    fn word(&mut self, vocabulary: &Vocabulary) -> &'static str {
        match self.opening.split_first() {
            Some((first, rest)) => {
                self.opening = rest;
                first
            }
            None => vocabulary.pick(&mut *self.rng),
        }
    }

    /// A fixed size when the request carries one, otherwise a draw from `range`
    fn size(&mut self, fixed: Option<usize>, range: WordRange) -> usize {
        match fixed {
            Some(size) => size,
            None => range.sample(&mut *self.rng),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
