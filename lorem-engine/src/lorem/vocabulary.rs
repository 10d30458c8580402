//! The fixed word list
//!
//! Words are stored lowercase. The first [`OPENING_LEN`] entries spell the canonical
//! "lorem ipsum dolor sit amet" opening.

use rand::seq::SliceRandom;
use rand::Rng;

/// Length of the canonical opening at the head of the list
pub const OPENING_LEN: usize = 5;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
    "do", "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna",
    "aliqua", "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation",
    "ullamco", "laboris", "nisi", "aliquip", "ex", "ea", "commodo", "consequat", "duis",
    "aute", "irure", "in", "reprehenderit", "voluptate", "velit", "esse", "cillum",
    "fugiat", "nulla", "pariatur", "excepteur", "sint", "occaecat", "cupidatat", "non",
    "proident", "sunt", "culpa", "qui", "officia", "deserunt", "mollit", "anim", "id",
    "est", "laborum", "integer", "nec", "odio", "praesent", "libero", "cursus", "ante",
    "dapibus", "diam", "sem", "at", "nibh", "elementum", "imperdiet", "sagittis",
    "mauris", "massa", "vestibulum", "lacinia", "arcu", "eget", "class", "aptent",
    "taciti", "sociosqu", "litora", "torquent", "per", "conubia", "nostra", "inceptos",
    "himenaeos", "curabitur", "sodales", "ligula", "dignissim", "nunc", "tortor",
    "pellentesque", "aenean", "quam", "scelerisque", "maecenas", "mattis", "convallis",
    "tristique", "fusce", "tellus", "lectus", "morbi", "metus", "vulputate", "eros",
    "ultricies", "lacus", "ultrices", "posuere", "cubilia", "curae", "proin", "porttitor",
    "vel", "urna", "blandit", "risus", "faucibus", "gravida", "viverra", "varius",
    "vitae", "suscipit", "felis", "pulvinar", "semper", "rhoncus", "feugiat", "turpis",
    "volutpat", "egestas", "phasellus", "accumsan", "nam", "auctor", "fermentum",
    "iaculis", "luctus", "orci", "mi", "donec", "etiam", "vivamus", "placerat",
];

/// Read-only view over the word list
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    words: &'static [&'static str],
}

impl Vocabulary {
    /// The built-in lorem ipsum corpus
    pub const fn classic() -> Self {
        Self { words: WORDS }
    }

    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// "lorem ipsum dolor sit amet"
    pub fn opening(&self) -> &'static [&'static str] {
        &self.words[..OPENING_LEN.min(self.words.len())]
    }

    /// Draw one word uniformly, with replacement
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.words.choose(rng).copied().unwrap_or("lorem")
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::classic()
    }
}
