//! Token substitution.
//!
//! At most one word per sentence is swapped for a synonym. The swap keeps the
//! original word's capitalization and the punctuation glued to either side of
//! it, so `"Important,"` can become `"Crucial,"` but never `"crucial"`.
//!
//! Two gates guard a swap. First, with probability `strength / 100`, one word
//! candidate is picked uniformly. Then, if that word is in the dictionary,
//! with probability `strength / 200` one of its alternatives is picked
//! uniformly.

use log::trace;

use crate::analysis::synonym::SynonymDictionary;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::transform::config::Strength;
use crate::transform::random::RandomSource;

/// Swaps at most one word of a sentence for a synonym.
#[derive(Clone, Copy)]
pub struct TokenSubstituter<'a> {
    dictionary: &'a SynonymDictionary,
    tokenizer: &'a dyn Tokenizer,
}

impl<'a> TokenSubstituter<'a> {
    /// Create a substituter over the given dictionary and tokenizer.
    pub fn new(dictionary: &'a SynonymDictionary, tokenizer: &'a dyn Tokenizer) -> Self {
        TokenSubstituter {
            dictionary,
            tokenizer,
        }
    }

    /// Possibly replace one word of `sentence`.
    ///
    /// Tokens are re-joined with single spaces whether or not a swap happens.
    pub fn substitute<R: RandomSource + ?Sized>(
        &self,
        sentence: &str,
        strength: Strength,
        rng: &mut R,
    ) -> String {
        let mut tokens: Vec<Token> = self.tokenizer.tokenize(sentence).collect();
        let candidates: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.is_word_candidate())
            .map(|(idx, _)| idx)
            .collect();

        if !candidates.is_empty() && rng.next_unit() < strength.probability() {
            let pick = candidates[rng.next_index(candidates.len())];
            if let Some(replacement) = self.replace_word(&tokens[pick], strength, rng) {
                trace!("substituted '{}' with '{}'", tokens[pick].text, replacement);
                tokens[pick] = tokens[pick].with_text(replacement);
            }
        }

        let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();
        texts.join(" ")
    }

    /// Try to replace a single token, returning the new token text.
    ///
    /// Returns `None` when the token has no dictionary entry or the synonym
    /// gate does not fire.
    pub fn replace_word<R: RandomSource + ?Sized>(
        &self,
        token: &Token,
        strength: Strength,
        rng: &mut R,
    ) -> Option<String> {
        let core = token.core();
        if core.is_empty() {
            return None;
        }

        let alternatives = self.dictionary.get_synonyms(&core)?;
        if rng.next_unit() >= strength.probability() / 2.0 {
            return None;
        }

        let choice = &alternatives[rng.next_index(alternatives.len())];
        let word = if token.starts_uppercase() {
            capitalize(choice)
        } else {
            choice.clone()
        };

        Some(format!(
            "{}{}{}",
            token.leading_punctuation(),
            word,
            token.trailing_punctuation()
        ))
    }
}

/// Uppercase the first character of `word`.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Substitute using the built-in dictionary and whitespace tokenization.
pub fn substitute<R: RandomSource + ?Sized>(
    sentence: &str,
    strength: Strength,
    rng: &mut R,
) -> String {
    TokenSubstituter::new(SynonymDictionary::builtin(), &WhitespaceTokenizer).substitute(
        sentence,
        strength,
        rng,
    )
}
