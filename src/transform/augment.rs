//! Purpose-conditioned phrase insertion.
//!
//! Two independent decisions are made per sentence, hedge first:
//!
//! - **Hedge**: with probability `max(0, strength - 60) / 100`, a sentence
//!   longer than 50 characters that does not already open with a hedge gets a
//!   purpose-specific opener (or, for `copy`, a closing call to action).
//! - **Emphasis**: with probability `max(0, strength - 55) / 100`, and never
//!   for academic text, each whole-word `is` independently becomes
//!   `is actually` with probability 0.4.

use lazy_static::lazy_static;
use log::trace;
use regex::{Captures, Regex};

use crate::transform::config::{Purpose, Strength};
use crate::transform::random::RandomSource;

/// Sentences must be longer than this many characters to receive a hedge.
pub const MIN_HEDGE_LENGTH: usize = 50;

const HEDGE_OFFSET: u8 = 60;
const EMPHASIS_OFFSET: u8 = 55;

/// A draw above this adds the social marker or the copy call to action.
const EXTRA_THRESHOLD: f64 = 0.8;
/// A draw above this adds " actually" after an `is`.
const EMPHASIS_THRESHOLD: f64 = 0.6;

const ATTENTION_MARKER: &str = "\u{1F449}";
const CALL_TO_ACTION: &str = " Don't miss out!";

lazy_static! {
    static ref HEDGE_OPENER: Regex =
        Regex::new(r"(?i)^(?:in fact|interestingly|research|according)").unwrap();
    static ref IS_WORD: Regex = Regex::new(r"(?i)\bis\b").unwrap();
}

/// Whether `sentence` already opens with one of the reserved hedges.
pub fn starts_with_hedge(sentence: &str) -> bool {
    HEDGE_OPENER.is_match(sentence)
}

/// Possibly add a hedge and emphasis to `sentence`.
pub fn augment<R: RandomSource + ?Sized>(
    sentence: &str,
    strength: Strength,
    purpose: Purpose,
    rng: &mut R,
) -> String {
    let mut text = sentence.to_string();

    if rng.next_unit() < strength.excess_probability(HEDGE_OFFSET) {
        text = insert_hedge(text, purpose, rng);
    }

    // Drawn for every purpose, academic included.
    let emphasize = rng.next_unit() < strength.excess_probability(EMPHASIS_OFFSET);
    if emphasize && purpose != Purpose::Academic {
        text = insert_emphasis(&text, rng);
    }

    text
}

/// Apply the purpose-specific hedge, if the sentence qualifies.
pub fn insert_hedge<R: RandomSource + ?Sized>(
    sentence: String,
    purpose: Purpose,
    rng: &mut R,
) -> String {
    if sentence.chars().count() <= MIN_HEDGE_LENGTH || starts_with_hedge(&sentence) {
        return sentence;
    }

    let hedged = match purpose {
        Purpose::Academic => format!("Research suggests that {sentence}"),
        Purpose::Article | Purpose::Blog => format!("In fact, {sentence}"),
        Purpose::Story => format!("Imagine this: {sentence}"),
        Purpose::Social if rng.next_unit() > EXTRA_THRESHOLD => {
            format!("{ATTENTION_MARKER} {sentence}")
        }
        Purpose::Copy if rng.next_unit() > EXTRA_THRESHOLD => format!("{sentence}{CALL_TO_ACTION}"),
        _ => return sentence,
    };

    trace!("hedged sentence for purpose '{purpose}'");
    hedged
}

/// Independently turn each whole-word `is` into `is actually`.
///
/// The matched word keeps its original case.
pub fn insert_emphasis<R: RandomSource + ?Sized>(sentence: &str, rng: &mut R) -> String {
    IS_WORD
        .replace_all(sentence, |caps: &Captures| {
            let matched = &caps[0];
            if rng.next_unit() > EMPHASIS_THRESHOLD {
                format!("{matched} actually")
            } else {
                matched.to_string()
            }
        })
        .into_owned()
}
