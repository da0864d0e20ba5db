//! Text analysis module for Restyle.
//!
//! This module provides the leaf components of the restyling pipeline:
//! sentence segmentation, whitespace tokenization and the synonym table.

pub mod sentence;
pub mod synonym;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use sentence::SentenceSegmenter;
pub use synonym::SynonymDictionary;
pub use token::{Token, TokenKind, TokenStream};
pub use tokenizer::Tokenizer;
