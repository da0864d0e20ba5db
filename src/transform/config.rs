//! Transformation parameters.
//!
//! Configuration is forgiving by design of the caller contract: a bad strength
//! is clamped or defaulted, an unknown purpose falls back to
//! [`Purpose::General`]. Only unreadable or malformed files are errors.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{RestyleError, Result};

/// The kind of writing the output is meant for.
///
/// Purpose decides which hedge phrase may be inserted and whether emphasis
/// tweaks are allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Purpose {
    /// No purpose-specific phrasing
    #[default]
    General,
    /// Formal hedging, no emphasis
    Academic,
    /// Editorial hedging
    Article,
    /// Editorial hedging
    Blog,
    /// Narrative opener
    Story,
    /// Occasional attention marker
    Social,
    /// Occasional call to action
    Copy,
}

impl Purpose {
    /// Every purpose, in declaration order.
    pub const ALL: [Purpose; 7] = [
        Purpose::General,
        Purpose::Academic,
        Purpose::Article,
        Purpose::Blog,
        Purpose::Story,
        Purpose::Social,
        Purpose::Copy,
    ];

    /// Lowercase name of this purpose.
    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::General => "general",
            Purpose::Academic => "academic",
            Purpose::Article => "article",
            Purpose::Blog => "blog",
            Purpose::Story => "story",
            Purpose::Social => "social",
            Purpose::Copy => "copy",
        }
    }
}

impl From<&str> for Purpose {
    /// Case-insensitive; anything unrecognized is `General`.
    fn from(value: &str) -> Self {
        let value = value.trim();
        Purpose::ALL
            .into_iter()
            .find(|purpose| purpose.as_str().eq_ignore_ascii_case(value))
            .unwrap_or_default()
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Purpose {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Purpose {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Purpose::from(raw.as_str()))
    }
}

/// Transformation strength, always within `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Strength(u8);

impl Strength {
    /// Lowest strength: nothing is ever changed.
    pub const MIN: Strength = Strength(0);
    /// Highest strength.
    pub const MAX: Strength = Strength(100);
    /// Strength used when none is given.
    pub const DEFAULT: Strength = Strength(50);

    /// Create a strength, clamping into `0..=100`.
    pub fn new(value: i64) -> Self {
        Strength(value.clamp(0, 100) as u8)
    }

    /// Parse a strength the way a form field would be read.
    ///
    /// Blank input gives the default. Otherwise the leading integer is taken
    /// (`"75.9"` is 75, `"30%"` is 30) and clamped. Text with no leading
    /// integer gives 0.
    pub fn parse_lenient(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return Self::DEFAULT;
        }

        let sign_len = usize::from(value.starts_with(['-', '+']));
        let digits_end = value[sign_len..]
            .find(|c: char| !c.is_ascii_digit())
            .map_or(value.len(), |idx| idx + sign_len);

        if digits_end == sign_len {
            return Self::MIN;
        }

        match value[..digits_end].parse::<i64>() {
            Ok(number) => Self::new(number),
            // Too many digits for i64: saturate by sign.
            Err(_) if value.starts_with('-') => Self::MIN,
            Err(_) => Self::MAX,
        }
    }

    /// The strength as an integer in `0..=100`.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// The strength as a probability in `[0, 1]`.
    pub fn probability(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Probability of `max(0, strength - offset) / 100`.
    pub fn excess_probability(&self, offset: u8) -> f64 {
        f64::from(self.0.saturating_sub(offset)) / 100.0
    }
}

impl Default for Strength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i64> for Strength {
    fn from(value: i64) -> Self {
        Strength::new(value)
    }
}

impl From<&str> for Strength {
    fn from(value: &str) -> Self {
        Strength::parse_lenient(value)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Strength {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Strength {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
            Null(()),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(value) => Strength::new(value),
            Raw::Float(value) if value.is_nan() => Strength::MIN,
            Raw::Float(value) => Strength::new(value.trunc().clamp(0.0, 100.0) as i64),
            Raw::Text(value) => Strength::parse_lenient(&value),
            Raw::Null(()) => Strength::DEFAULT,
        })
    }
}

/// Parameters for one transformation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// How aggressively to vary the text
    pub strength: Strength,

    /// Regroup sentences into paragraphs of two to four sentences
    pub split_paragraphs: bool,

    /// Target writing style
    pub purpose: Purpose,
}

impl TransformConfig {
    /// Create a configuration with the given values.
    pub fn new(strength: impl Into<Strength>, split_paragraphs: bool, purpose: Purpose) -> Self {
        TransformConfig {
            strength: strength.into(),
            split_paragraphs,
            purpose,
        }
    }

    /// Set the strength.
    pub fn with_strength(mut self, strength: impl Into<Strength>) -> Self {
        self.strength = strength.into();
        self
    }

    /// Enable or disable paragraph regrouping.
    pub fn with_split_paragraphs(mut self, split_paragraphs: bool) -> Self {
        self.split_paragraphs = split_paragraphs;
        self
    }

    /// Set the purpose.
    pub fn with_purpose(mut self, purpose: Purpose) -> Self {
        self.purpose = purpose;
        self
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            RestyleError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            RestyleError::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_purpose_parsing() {
        assert_eq!(Purpose::from("academic"), Purpose::Academic);
        assert_eq!(Purpose::from("  Blog "), Purpose::Blog);
        assert_eq!(Purpose::from("COPY"), Purpose::Copy);
        assert_eq!(Purpose::from("poetry"), Purpose::General);
        assert_eq!(Purpose::from(""), Purpose::General);
    }

    #[test]
    fn test_purpose_round_trips_through_display() {
        for purpose in Purpose::ALL {
            assert_eq!(Purpose::from(purpose.to_string().as_str()), purpose);
        }
    }

    #[test]
    fn test_strength_clamps() {
        assert_eq!(Strength::new(-20).value(), 0);
        assert_eq!(Strength::new(250).value(), 100);
        assert_eq!(Strength::new(42).value(), 42);
    }

    #[test]
    fn test_strength_lenient_parse() {
        assert_eq!(Strength::parse_lenient("").value(), 50);
        assert_eq!(Strength::parse_lenient("   ").value(), 50);
        assert_eq!(Strength::parse_lenient("75.9").value(), 75);
        assert_eq!(Strength::parse_lenient(" 30abc").value(), 30);
        assert_eq!(Strength::parse_lenient("-5").value(), 0);
        assert_eq!(Strength::parse_lenient("+80").value(), 80);
        assert_eq!(Strength::parse_lenient("999").value(), 100);
        assert_eq!(Strength::parse_lenient("99999999999999999999999").value(), 100);
        assert_eq!(Strength::parse_lenient("abc").value(), 0);
        assert_eq!(Strength::parse_lenient("-").value(), 0);
    }

    #[test]
    fn test_strength_probabilities() {
        let strength = Strength::new(80);
        assert_eq!(strength.probability(), 0.8);
        assert!((strength.excess_probability(60) - 0.2).abs() < 1e-12);
        assert_eq!(Strength::new(40).excess_probability(60), 0.0);
    }

    #[test]
    fn test_config_defaults() {
        let config = TransformConfig::default();
        assert_eq!(config.strength.value(), 50);
        assert!(!config.split_paragraphs);
        assert_eq!(config.purpose, Purpose::General);
    }

    #[test]
    fn test_config_builder() {
        let config = TransformConfig::default()
            .with_strength(130)
            .with_split_paragraphs(true)
            .with_purpose(Purpose::Story);
        assert_eq!(config.strength, Strength::MAX);
        assert!(config.split_paragraphs);
        assert_eq!(config.purpose, Purpose::Story);
    }

    #[test]
    fn test_config_deserialize_is_forgiving() {
        let config: TransformConfig =
            serde_json::from_str(r#"{"strength": "85", "purpose": "Unknown"}"#).unwrap();
        assert_eq!(config.strength.value(), 85);
        assert_eq!(config.purpose, Purpose::General);
        assert!(!config.split_paragraphs);

        let config: TransformConfig =
            serde_json::from_str(r#"{"strength": 512.7, "split_paragraphs": true}"#).unwrap();
        assert_eq!(config.strength.value(), 100);
        assert!(config.split_paragraphs);

        let config: TransformConfig = serde_json::from_str(r#"{"strength": null}"#).unwrap();
        assert_eq!(config.strength.value(), 50);
    }

    #[test]
    fn test_config_serializes_lowercase() {
        let config = TransformConfig::new(70, false, Purpose::Academic);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"strength":70,"split_paragraphs":false,"purpose":"academic"}"#
        );
    }

    #[test]
    fn test_config_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"strength": 20, "purpose": "social"}}"#).unwrap();

        let config = TransformConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.strength.value(), 20);
        assert_eq!(config.purpose, Purpose::Social);
    }

    #[test]
    fn test_config_from_bad_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "strength = 20").unwrap();

        let err = TransformConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, RestyleError::Config(_)));
    }
}
