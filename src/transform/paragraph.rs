//! Paragraph regrouping.
//!
//! Sentences are packed into paragraphs of two to four. A paragraph closes
//! once it holds four sentences, or with probability 0.4 once it holds two or
//! three, or at the last sentence of the input. Only the final paragraph can
//! hold a single sentence.

use crate::transform::random::RandomSource;

/// Maximum sentences per paragraph.
pub const MAX_PARAGRAPH_SENTENCES: usize = 4;
/// Sentences a paragraph needs before it may close early.
pub const MIN_PARAGRAPH_SENTENCES: usize = 2;
/// Separator between paragraphs in joined output.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// A draw above this closes a paragraph early.
const CLOSE_THRESHOLD: f64 = 0.6;

/// Group `sentences` into paragraphs, each joined by single spaces.
///
/// Empty sentences are skipped and never start a paragraph.
pub fn group<S, R>(sentences: &[S], rng: &mut R) -> Vec<String>
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    let mut paragraphs = Vec::new();
    let mut buffer: Vec<&str> = Vec::with_capacity(MAX_PARAGRAPH_SENTENCES);
    let last = sentences.len().saturating_sub(1);

    for (idx, sentence) in sentences.iter().enumerate() {
        let sentence = sentence.as_ref();
        if sentence.is_empty() {
            continue;
        }
        buffer.push(sentence);

        let close = buffer.len() >= MAX_PARAGRAPH_SENTENCES
            || (buffer.len() >= MIN_PARAGRAPH_SENTENCES && rng.next_unit() > CLOSE_THRESHOLD)
            || idx == last;
        if close {
            paragraphs.push(buffer.join(" "));
            buffer.clear();
        }
    }

    if !buffer.is_empty() {
        paragraphs.push(buffer.join(" "));
    }

    paragraphs
}

/// Group `sentences` and join the paragraphs with blank lines.
pub fn group_and_join<S, R>(sentences: &[S], rng: &mut R) -> String
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    group(sentences, rng).join(PARAGRAPH_SEPARATOR)
}
