//! Synonym dictionary mapping lowercase words to meaning-preserving alternatives.
//!
//! The built-in table is small and conservative on purpose: every alternative
//! can stand in for its key in ordinary prose without changing what the
//! sentence says. Callers can extend it from a JSON file.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use lazy_static::lazy_static;

use crate::error::{RestyleError, Result};

/// Built-in entries, in insertion order.
const BUILTIN_SYNONYMS: &[(&str, &[&str])] = &[
    ("important", &["crucial", "essential", "significant"]),
    ("good", &["great", "excellent", "positive"]),
    ("bad", &["poor", "unfavorable", "negative"]),
    ("show", &["demonstrate", "highlight", "reveal"]),
    ("use", &["utilize", "apply", "employ"]),
    ("big", &["large", "substantial", "considerable"]),
    ("small", &["minor", "limited", "modest"]),
    ("help", &["assist", "support", "aid"]),
];

lazy_static! {
    static ref BUILTIN: SynonymDictionary = SynonymDictionary::from_entries(
        BUILTIN_SYNONYMS
            .iter()
            .map(|(word, alternatives)| (*word, alternatives.iter().copied()))
    );
}

/// Synonym dictionary for single-word substitution.
///
/// Keys are lowercase. Each key maps to an ordered list of alternatives; the
/// order only matters for enumeration, selection is random.
#[derive(Debug, Clone, Default)]
pub struct SynonymDictionary {
    entries: Arc<HashMap<String, Vec<String>>>,
}

impl SynonymDictionary {
    /// An empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide built-in dictionary.
    pub fn builtin() -> &'static SynonymDictionary {
        &BUILTIN
    }

    /// Build a dictionary from `(word, alternatives)` pairs.
    ///
    /// Keys are lowercased and trimmed. Entries without alternatives are
    /// skipped. A repeated key replaces the earlier entry.
    pub fn from_entries<K, I, S>(entries: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = HashMap::new();
        for (word, alternatives) in entries {
            let key = word.as_ref().trim().to_lowercase();
            let alternatives: Vec<String> = alternatives
                .into_iter()
                .map(Into::into)
                .filter(|alt: &String| !alt.trim().is_empty())
                .collect();
            if key.is_empty() || alternatives.is_empty() {
                continue;
            }
            map.insert(key, alternatives);
        }

        Self {
            entries: Arc::new(map),
        }
    }

    /// Load a dictionary from a JSON file.
    ///
    /// The file holds an object mapping each word to its alternatives:
    ///
    /// ```json
    /// {
    ///   "fast": ["quick", "rapid", "swift"],
    ///   "hard": ["difficult", "challenging"]
    /// }
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RestyleError::dictionary(format!(
                "Failed to read synonym dictionary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json_str(&content).map_err(|e| {
            RestyleError::dictionary(format!(
                "Failed to parse synonym dictionary JSON from '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse a dictionary from a JSON object string.
    ///
    /// Entries are applied in document order, so when two keys only differ
    /// by case the later one wins.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(raw.len());
        for (word, alternatives) in raw {
            let alternatives: Vec<String> = serde_json::from_value(alternatives)?;
            entries.push((word, alternatives));
        }
        Ok(Self::from_entries(entries))
    }

    /// Return a new dictionary holding this one's entries overlaid with `other`'s.
    ///
    /// Where both define a word, `other` wins.
    pub fn merge(&self, other: &SynonymDictionary) -> Self {
        let mut map = (*self.entries).clone();
        for (word, alternatives) in other.entries.iter() {
            map.insert(word.clone(), alternatives.clone());
        }
        Self {
            entries: Arc::new(map),
        }
    }

    /// Get the alternatives for a lowercase word.
    pub fn get_synonyms(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Check whether a lowercase word has alternatives.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of words with alternatives.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys, sorted.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
