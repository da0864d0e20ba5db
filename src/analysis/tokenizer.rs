//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split a sentence into [`Token`](crate::analysis::token::Token)s.
//! Restyle only needs whitespace splitting, but the trait keeps the seam open
//! for callers that want to plug in their own segmentation.
//!
//! # Examples
//!
//! ```
//! use restyle::analysis::tokenizer::Tokenizer;
//! use restyle::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by a
/// [`Humanizer`](crate::transform::engine::Humanizer) across threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod whitespace;
