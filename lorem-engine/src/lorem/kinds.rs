//! Kind selector table
//!
//! Maps the word after `lorem` to the unit kind it selects. Lookup ignores ASCII case.
//! Words that are not in the table are not errors; the parser falls back to
//! [`KindSelector::PARAGRAPH`].

use crate::lorem::request::UnitKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A resolved selector: the kind plus any variation it implies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSelector {
    pub kind: UnitKind,
    pub numbered: bool,
}

impl KindSelector {
    pub const PARAGRAPH: KindSelector = KindSelector::plain(UnitKind::Paragraph);

    const fn plain(kind: UnitKind) -> Self {
        Self {
            kind,
            numbered: false,
        }
    }
}

/// Selector words in the order they are listed to users
const SELECTORS: &[(&str, KindSelector)] = &[
    ("p", KindSelector::plain(UnitKind::Paragraph)),
    ("para", KindSelector::plain(UnitKind::Paragraph)),
    ("paras", KindSelector::plain(UnitKind::Paragraph)),
    ("paragraph", KindSelector::plain(UnitKind::Paragraph)),
    ("paragraphs", KindSelector::plain(UnitKind::Paragraph)),
    ("s", KindSelector::plain(UnitKind::Sentence)),
    ("sentence", KindSelector::plain(UnitKind::Sentence)),
    ("sentences", KindSelector::plain(UnitKind::Sentence)),
    ("w", KindSelector::plain(UnitKind::Word)),
    ("word", KindSelector::plain(UnitKind::Word)),
    ("words", KindSelector::plain(UnitKind::Word)),
    ("l", KindSelector::plain(UnitKind::List)),
    ("li", KindSelector::plain(UnitKind::List)),
    ("ul", KindSelector::plain(UnitKind::List)),
    ("list", KindSelector::plain(UnitKind::List)),
    (
        "ol",
        KindSelector {
            kind: UnitKind::List,
            numbered: true,
        },
    ),
    ("h", KindSelector::plain(UnitKind::Heading)),
    ("heading", KindSelector::plain(UnitKind::Heading)),
    ("header", KindSelector::plain(UnitKind::Heading)),
];

static SELECTOR_MAP: Lazy<HashMap<&'static str, KindSelector>> =
    Lazy::new(|| SELECTORS.iter().copied().collect());

/// Look up a selector word
pub fn lookup(word: &str) -> Option<KindSelector> {
    SELECTOR_MAP.get(word.to_ascii_lowercase().as_str()).copied()
}

/// All selector words with what they select, in listing order
pub fn selectors() -> impl Iterator<Item = (&'static str, KindSelector)> {
    SELECTORS.iter().copied()
}
