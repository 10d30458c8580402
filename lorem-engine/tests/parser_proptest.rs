//! Property-based tests for command parsing and expansion
//!
//! The parser runs on every keystroke-triggered expansion, so it must accept any
//! string. These properties cover:
//! - parsing never panics and is deterministic
//! - explicit counts always land in `[1, max_count]`
//! - the generated text has exactly the requested number of units

use lorem_engine::{
    parse_and_generate, Command, CommandParser, Defaults, GenerationRequest, Generator,
    Settings, UnitKind,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Tokens shaped like real commands, including odd separators
fn command_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "lorem",
        "lorem[0-9]{1,4}",
        "lorem[0-9]{1,3}_[0-9]{1,3}",
        "lorem_?(p|s|w|l|ol|ul|h|list|word|heading)[0-9]{0,4}",
        "lorem_?[a-z]{1,8}-?[0-9]{0,25}(_-?[0-9]{0,4})?",
        "lorem[^\\s]{0,12}",
    ]
}

fn kind_strategy() -> impl Strategy<Value = (UnitKind, &'static str)> {
    prop_oneof![
        Just((UnitKind::Paragraph, "p")),
        Just((UnitKind::Sentence, "s")),
        Just((UnitKind::Word, "w")),
        Just((UnitKind::List, "list")),
    ]
}

fn expand(raw: &str, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    parse_and_generate(raw, &Settings::default(), &mut rng)
}

fn units(kind: UnitKind, text: &str) -> usize {
    match kind {
        UnitKind::Paragraph => text.split("\n\n").count(),
        UnitKind::Sentence => text.matches('.').count(),
        UnitKind::Word => text.split_whitespace().count(),
        UnitKind::List => text.lines().count(),
        UnitKind::Heading => text.chars().take_while(|c| *c == '#').count(),
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_any_input_parses(raw in "\\PC{0,40}") {
            let parser = CommandParser::default();
            let command = parser.parse(&raw);
            if !raw.trim().starts_with("lorem") {
                prop_assert_eq!(command, Command::Nothing);
            }
        }

        #[test]
        fn test_parsing_is_deterministic(raw in command_strategy()) {
            let parser = CommandParser::default();
            prop_assert_eq!(parser.parse(&raw), parser.parse(&raw));
        }

        #[test]
        fn test_counts_are_clamped(raw in command_strategy()) {
            let defaults = Defaults::default();
            let command = CommandParser::new(defaults).parse(&raw);
            let request = command.request().copied();
            prop_assert!(request.is_some(), "{} should be a command", raw);
            let request = request.unwrap();
            prop_assert!(request.primary >= 1);
            prop_assert!(request.primary <= defaults.ceiling_for(request.kind));
            if let Some(secondary) = request.secondary {
                prop_assert!((1..=defaults.max_count).contains(&secondary));
            }
        }

        #[test]
        fn test_expansion_never_panics(raw in command_strategy(), seed in any::<u64>()) {
            let text = expand(&raw, seed);
            prop_assert!(!text.is_empty());
            prop_assert!(!text.ends_with('\n'));
        }

        #[test]
        fn test_unit_count_matches_request(
            (kind, selector) in kind_strategy(),
            count in 1usize..=40,
            seed in any::<u64>(),
        ) {
            let raw = format!("lorem{selector}{count}");
            let text = expand(&raw, seed);
            prop_assert_eq!(units(kind, &text), count, "{}", raw);
        }

        #[test]
        fn test_heading_units_are_levels(level in 1usize..=6, seed in any::<u64>()) {
            let settings = Settings::default();
            let request = GenerationRequest::new(UnitKind::Heading, level);
            let mut rng = StdRng::seed_from_u64(seed);
            let text = Generator::new(&settings).generate(&request, &mut rng);
            prop_assert_eq!(units(UnitKind::Heading, &text), level);
        }
    }
}
