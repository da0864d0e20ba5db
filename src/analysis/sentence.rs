//! Sentence segmentation.
//!
//! Sentences end at a run of terminal punctuation (`.`, `!`, `?`) or at the
//! end of the text. Line breaks are ordinary characters. The segmenter is
//! deliberately naive: `Mr.`, `3.14` and quoted speech are split wherever a
//! terminal mark appears.
//!
//! # Examples
//!
//! ```
//! use restyle::analysis::sentence::SentenceSegmenter;
//!
//! let sentences = SentenceSegmenter::new().segment("Hi there! How are you?? Fine");
//! assert_eq!(sentences, vec!["Hi there!", "How are you??", "Fine"]);
//! ```

/// Splits raw text into trimmed, non-empty sentences.
#[derive(Clone, Debug, Default)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    /// Create a new sentence segmenter.
    pub fn new() -> Self {
        SentenceSegmenter
    }

    /// Whether `c` closes a sentence.
    pub fn is_terminal(c: char) -> bool {
        matches!(c, '.' | '!' | '?')
    }

    /// Segment `text` into sentences, borrowing from the input.
    ///
    /// Each unit is trimmed and blank units are dropped, so whitespace-only
    /// input yields an empty vector.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.spans(text)
            .into_iter()
            .map(|(start, end)| text[start..end].trim())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Count the non-empty sentences in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.segment(text).len()
    }

    /// Raw `(start, end)` byte spans covering the whole input, before trimming.
    ///
    /// A span closes right after a run of terminal marks. A run at the very
    /// start of the text becomes its own span so no character is lost.
    pub fn spans(&self, text: &str) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        let mut start = 0;
        let mut in_terminal_run = false;

        for (idx, c) in text.char_indices() {
            if Self::is_terminal(c) {
                in_terminal_run = true;
            } else if in_terminal_run {
                spans.push((start, idx));
                start = idx;
                in_terminal_run = false;
            }
        }

        if start < text.len() {
            spans.push((start, text.len()));
        }

        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<&str> {
        SentenceSegmenter::new().segment(text)
    }

    #[test]
    fn test_basic_segmentation() {
        assert_eq!(
            segment("First one. Second one! Third one?"),
            vec!["First one.", "Second one!", "Third one?"]
        );
    }

    #[test]
    fn test_trailing_fragment_without_terminal() {
        assert_eq!(segment("Done. and then"), vec!["Done.", "and then"]);
    }

    #[test]
    fn test_terminal_runs_stay_together() {
        assert_eq!(segment("Wait... What?!"), vec!["Wait...", "What?!"]);
    }

    #[test]
    fn test_line_breaks_do_not_delimit() {
        assert_eq!(
            segment("Line one\nstill one. Next"),
            vec!["Line one\nstill one.", "Next"]
        );
    }

    #[test]
    fn test_abbreviations_are_split() {
        assert_eq!(
            segment("Mr. Smith paid 3.50 today."),
            vec!["Mr.", "Smith paid 3.", "50 today."]
        );
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t ").is_empty());
        assert_eq!(SentenceSegmenter::new().count("Hi.   "), 1);
    }

    #[test]
    fn test_leading_terminal_run_is_kept() {
        assert_eq!(segment("?! Really. "), vec!["?!", "Really."]);
        assert_eq!(segment("..."), vec!["..."]);
    }

    #[test]
    fn test_spans_cover_input_exactly() {
        let text = "  One.Two!!  three ? four";
        let spans = SentenceSegmenter::new().spans(text);
        let rebuilt: String = spans.iter().map(|&(s, e)| &text[s..e]).collect();
        assert_eq!(rebuilt, text);
        for window in spans.windows(2) {
            assert_eq!(window[0].1, window[1].0);
        }
    }

    #[test]
    fn test_concatenation_only_loses_whitespace() {
        let text = "Alpha beta.  Gamma?\nDelta! epsilon";
        let joined: String = segment(text).concat();
        let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        assert_eq!(strip(&joined), strip(text));
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(segment("Café ouvert. Très bien!"), vec!["Café ouvert.", "Très bien!"]);
    }
}
