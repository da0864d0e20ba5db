//! Token types and utilities for text analysis.
//!
//! A [`Token`] is a whitespace-delimited unit of a sentence. Tokens that carry
//! at least one alphanumeric character are *word candidates* and may be
//! rewritten by the substituter; everything else is filler punctuation that
//! is passed through untouched.
//!
//! # Examples
//!
//! ```
//! use restyle::analysis::token::{Token, TokenKind};
//!
//! let token = Token::new("Important,", 0);
//! assert_eq!(token.kind, TokenKind::Word);
//! assert_eq!(token.core(), "important");
//! assert_eq!(token.trailing_punctuation(), ",");
//! assert!(token.starts_uppercase());
//!
//! let dash = Token::new("--", 1);
//! assert!(!dash.is_word_candidate());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single whitespace-delimited unit of a sentence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the sentence (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Whether the token is a word candidate or pure punctuation
    pub kind: TokenKind,
}

/// Classification of token content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Contains at least one alphanumeric character
    Word,
    /// Punctuation or symbols only; never substituted
    Punctuation,
}

impl TokenKind {
    /// Classify a piece of text.
    pub fn classify(text: &str) -> Self {
        if text.chars().any(char::is_alphanumeric) {
            TokenKind::Word
        } else {
            TokenKind::Punctuation
        }
    }
}

/// Characters that belong to the bare core of a word.
fn is_core_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '-'
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let kind = TokenKind::classify(&text);
        Token {
            text,
            position,
            start_offset: 0,
            end_offset: 0,
            kind,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            start_offset,
            end_offset,
            ..Token::new(text, position)
        }
    }

    /// Whether this token may be picked for substitution.
    pub fn is_word_candidate(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// The lowercase lookup key: letters, digits, apostrophes and hyphens only.
    ///
    /// Returns an empty string for tokens with no such characters.
    pub fn core(&self) -> String {
        self.text
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|&c| is_core_char(c))
            .collect()
    }

    /// The run of non-word characters in front of the first word character.
    pub fn leading_punctuation(&self) -> &str {
        match self.text.find(is_core_char) {
            Some(start) => &self.text[..start],
            None => "",
        }
    }

    /// The run of non-word characters after the last word character.
    pub fn trailing_punctuation(&self) -> &str {
        match self.text.char_indices().rev().find(|&(_, c)| is_core_char(c)) {
            Some((idx, c)) => &self.text[idx + c.len_utf8()..],
            None => "",
        }
    }

    /// Whether the first alphabetic character of the token is uppercase.
    pub fn starts_uppercase(&self) -> bool {
        self.text
            .chars()
            .find(|c| c.is_alphabetic())
            .is_some_and(char::is_uppercase)
    }

    /// Clone this token with updated text, reclassifying its kind.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let text = text.into();
        Token {
            kind: TokenKind::classify(&text),
            text,
            ..self.clone()
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from a tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
        assert_eq!(token.kind, TokenKind::Word);
    }

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("world", 1, 6, 11);
        assert_eq!(token.text, "world");
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 11);
    }

    #[test]
    fn test_classification() {
        assert!(Token::new("a", 0).is_word_candidate());
        assert!(Token::new("42", 0).is_word_candidate());
        assert!(Token::new("(x)", 0).is_word_candidate());
        assert!(!Token::new("—", 0).is_word_candidate());
        assert!(!Token::new("...", 0).is_word_candidate());
        assert!(!Token::new("", 0).is_word_candidate());
    }

    #[test]
    fn test_core_strips_punctuation() {
        assert_eq!(Token::new("Important.", 0).core(), "important");
        assert_eq!(Token::new("don't,", 0).core(), "don't");
        assert_eq!(Token::new("well-known;", 0).core(), "well-known");
        assert_eq!(Token::new("e.g.", 0).core(), "eg");
        assert_eq!(Token::new("?!", 0).core(), "");
    }

    #[test]
    fn test_punctuation_runs() {
        let token = Token::new("(\"Big\"),", 0);
        assert_eq!(token.leading_punctuation(), "(\"");
        assert_eq!(token.trailing_punctuation(), "\"),");

        let plain = Token::new("word", 0);
        assert_eq!(plain.leading_punctuation(), "");
        assert_eq!(plain.trailing_punctuation(), "");

        let filler = Token::new("--", 0);
        assert_eq!(filler.leading_punctuation(), "");
        assert_eq!(filler.trailing_punctuation(), "");
    }

    #[test]
    fn test_starts_uppercase() {
        assert!(Token::new("Good", 0).starts_uppercase());
        assert!(Token::new("(Good", 0).starts_uppercase());
        assert!(!Token::new("good", 0).starts_uppercase());
        assert!(!Token::new("42", 0).starts_uppercase());
    }

    #[test]
    fn test_with_text_reclassifies() {
        let token = Token::with_offsets("good", 3, 10, 14);
        let replaced = token.with_text("...");
        assert_eq!(replaced.kind, TokenKind::Punctuation);
        assert_eq!(replaced.position, 3);
        assert_eq!(replaced.start_offset, 10);
    }
}
