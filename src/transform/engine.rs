//! The restyling pipeline.
//!
//! [`Humanizer`] ties the components together:
//!
//! ```text
//! text -> SentenceSegmenter -> for each sentence:
//!           TokenSubstituter -> augment
//!         -> paragraph::group (split) | join with spaces (flat)
//! ```
//!
//! The pipeline holds no mutable state; all variation comes from the
//! [`RandomSource`] handed to each call.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use restyle::transform::{Humanizer, Purpose, TransformConfig};
//!
//! let humanizer = Humanizer::new();
//! let config = TransformConfig::new(0, false, Purpose::Blog);
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let output = humanizer.transform("It works.   Really!", &config, &mut rng);
//! assert_eq!(output, "It works. Really!");
//!
//! let stats = humanizer.compute_stats(&output);
//! assert_eq!(stats.word_count, 3);
//! assert_eq!(stats.sentence_count, 2);
//! ```

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::sentence::SentenceSegmenter;
use crate::analysis::synonym::SynonymDictionary;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::transform::augment::augment;
use crate::transform::config::TransformConfig;
use crate::transform::paragraph;
use crate::transform::random::RandomSource;
use crate::transform::substitute::TokenSubstituter;

/// Word and sentence counts for a piece of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Whitespace-delimited, non-empty tokens
    pub word_count: usize,
    /// Non-empty sentences
    pub sentence_count: usize,
}

/// The text-restyling pipeline.
///
/// Cheap to clone and safe to share between threads; give each concurrent
/// call its own random source.
#[derive(Clone)]
pub struct Humanizer {
    dictionary: SynonymDictionary,
    tokenizer: Arc<dyn Tokenizer>,
    segmenter: SentenceSegmenter,
}

impl Default for Humanizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Humanizer {
    /// A pipeline over the built-in synonym table.
    pub fn new() -> Self {
        Self::with_dictionary(SynonymDictionary::builtin().clone())
    }

    /// A pipeline over a custom synonym table.
    pub fn with_dictionary(dictionary: SynonymDictionary) -> Self {
        Humanizer {
            dictionary,
            tokenizer: Arc::new(WhitespaceTokenizer::new()),
            segmenter: SentenceSegmenter::new(),
        }
    }

    /// The synonym table in use.
    pub fn dictionary(&self) -> &SynonymDictionary {
        &self.dictionary
    }

    /// Restyle `text` according to `config`.
    ///
    /// Empty or whitespace-only input gives an empty string.
    pub fn transform<R: RandomSource + ?Sized>(
        &self,
        text: &str,
        config: &TransformConfig,
        rng: &mut R,
    ) -> String {
        let sentences = self.segmenter.segment(text);
        if sentences.is_empty() {
            return String::new();
        }

        let strength = config.strength;
        let substituter = TokenSubstituter::new(&self.dictionary, self.tokenizer.as_ref());
        let processed: Vec<String> = sentences
            .iter()
            .map(|sentence| {
                let substituted = substituter.substitute(sentence, strength, rng);
                augment(&substituted, strength, config.purpose, rng)
            })
            .collect();

        let output = if config.split_paragraphs {
            paragraph::group_and_join(&processed, rng)
        } else {
            processed.join(" ")
        };

        debug!(
            "transformed {} sentences (strength={}, purpose={}, split={}): {} -> {} bytes",
            processed.len(),
            strength,
            config.purpose,
            config.split_paragraphs,
            text.len(),
            output.len()
        );

        output
    }

    /// Count words and sentences in `text`.
    pub fn compute_stats(&self, text: &str) -> TextStats {
        TextStats {
            word_count: text.split_whitespace().count(),
            sentence_count: self.segmenter.count(text),
        }
    }
}

/// Restyle `text` with the built-in synonym table.
pub fn transform<R: RandomSource + ?Sized>(
    text: &str,
    config: &TransformConfig,
    rng: &mut R,
) -> String {
    Humanizer::new().transform(text, config, rng)
}

/// Count words and sentences in `text`.
pub fn compute_stats(text: &str) -> TextStats {
    TextStats {
        word_count: text.split_whitespace().count(),
        sentence_count: SentenceSegmenter::new().count(text),
    }
}
