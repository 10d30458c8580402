//! Token definitions for lorem commands
//!
//! The `lorem` prefix is stripped before lexing, so these tokens only describe the tail
//! of a command: `list5`, `3_2`, `_w10`, `-4` and so on.
//! Every byte of the tail is covered by some token, which keeps the parser total.
use logos::Logos;

/// All possible tokens in a command tail
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Kind selector such as `p`, `list` or `heading`
    #[regex(r"[A-Za-z]+")]
    Word,

    #[regex(r"[0-9]+")]
    Number,

    #[token("_")]
    Underscore,

    #[token("-")]
    Minus,

    // Catch-all for anything the grammar has no use for (punctuation, non-ASCII letters)
    #[regex(r"[^A-Za-z0-9_\-]+")]
    Other,
}

impl Token {
    /// Check if this token can start a count
    pub fn starts_count(&self) -> bool {
        matches!(self, Token::Number | Token::Minus)
    }
}

/// Tokenize a command tail and keep the byte span of each token
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

/// Tokenize a command tail, dropping spans
pub fn tokenize(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_count() {
        assert_eq!(tokenize("list5"), vec![Token::Word, Token::Number]);
    }

    #[test]
    fn test_primary_and_secondary() {
        assert_eq!(
            tokenize("3_2"),
            vec![Token::Number, Token::Underscore, Token::Number]
        );
    }

    #[test]
    fn test_leading_underscore() {
        assert_eq!(
            tokenize("_word0"),
            vec![Token::Underscore, Token::Word, Token::Number]
        );
    }

    #[test]
    fn test_negative_count() {
        assert_eq!(tokenize("s-4"), vec![Token::Word, Token::Minus, Token::Number]);
    }

    #[test]
    fn test_other_characters_are_grouped() {
        assert_eq!(
            tokenize("p3.!é5"),
            vec![Token::Word, Token::Number, Token::Other, Token::Number]
        );
    }

    #[test]
    fn test_spans_cover_the_source() {
        let source = "ol12_4";
        let tokens = tokenize_with_spans(source);
        let spans: Vec<_> = tokens.iter().map(|(_, span)| &source[span.clone()]).collect();
        assert_eq!(spans, vec!["ol", "12", "_", "4"]);
    }

    #[test]
    fn test_empty_tail() {
        assert!(tokenize("").is_empty());
    }
}
