//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::synonym::SynonymDictionary;
use crate::cli::args::{OutputFormat, RestyleArgs};
use crate::error::Result;
use crate::transform::{TextStats, TransformConfig};

/// Result structure for a transform run.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransformResult {
    pub output: String,
    pub input_stats: TextStats,
    pub output_stats: TextStats,
    pub config: TransformConfig,
    pub seed: Option<u64>,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    #[serde(flatten)]
    pub stats: TextStats,
}

/// One synonym table entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub word: String,
    pub alternatives: Vec<String>,
}

/// Result structure for the synonyms command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SynonymListing {
    pub entries: Vec<SynonymEntry>,
}

impl SynonymListing {
    /// List a dictionary in sorted word order.
    pub fn from_dictionary(dictionary: &SynonymDictionary) -> Self {
        let entries = dictionary
            .words()
            .into_iter()
            .map(|word| SynonymEntry {
                word: word.to_string(),
                alternatives: dictionary
                    .get_synonyms(word)
                    .map(<[String]>::to_vec)
                    .unwrap_or_default(),
            })
            .collect();
        SynonymListing { entries }
    }
}

/// Results that know how to print themselves for humans.
pub trait HumanOutput {
    /// Write a human-readable rendering.
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> std::io::Result<()>;
}

impl HumanOutput for TransformResult {
    fn write_human(&self, out: &mut dyn Write, _verbosity: u8) -> std::io::Result<()> {
        writeln!(out, "{}", self.output)
    }
}

impl HumanOutput for StatsResult {
    fn write_human(&self, out: &mut dyn Write, verbosity: u8) -> std::io::Result<()> {
        if verbosity > 0 {
            writeln!(out, "Words: {}", self.stats.word_count)?;
            writeln!(out, "Sentences: {}", self.stats.sentence_count)
        } else {
            writeln!(out, "{} {}", self.stats.word_count, self.stats.sentence_count)
        }
    }
}

impl HumanOutput for SynonymListing {
    fn write_human(&self, out: &mut dyn Write, _verbosity: u8) -> std::io::Result<()> {
        for entry in &self.entries {
            writeln!(out, "{}: {}", entry.word, entry.alternatives.join(", "))?;
        }
        Ok(())
    }
}

/// Output a result based on the selected format.
pub fn output_result<T>(result: &T, args: &RestyleArgs, out: &mut dyn Write) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => result.write_human(out, args.verbosity())?,
        OutputFormat::Json => output_json(result, args, out)?,
    }
    out.flush()?;
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &RestyleArgs, out: &mut dyn Write) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::transform::compute_stats;

    fn render<T: Serialize + HumanOutput>(result: &T, argv: &[&str]) -> String {
        let args = RestyleArgs::parse_from(argv);
        let mut buffer = Vec::new();
        output_result(result, &args, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_stats_human() {
        let result = StatsResult {
            stats: compute_stats("One two. Three."),
        };
        assert_eq!(
            render(&result, &["restyle", "stats"]),
            "Words: 3\nSentences: 2\n"
        );
        assert_eq!(render(&result, &["restyle", "-q", "stats"]), "3 2\n");
    }

    #[test]
    fn test_stats_json_is_flat() {
        let result = StatsResult {
            stats: compute_stats("One two. Three."),
        };
        assert_eq!(
            render(&result, &["restyle", "-f", "json", "stats"]),
            "{\"word_count\":3,\"sentence_count\":2}\n"
        );
    }

    #[test]
    fn test_synonym_listing() {
        let dictionary = SynonymDictionary::from_entries(vec![
            ("small", vec!["minor"]),
            ("big", vec!["large", "huge"]),
        ]);
        let listing = SynonymListing::from_dictionary(&dictionary);
        assert_eq!(
            render(&listing, &["restyle", "synonyms"]),
            "big: large, huge\nsmall: minor\n"
        );
    }

    #[test]
    fn test_transform_json() {
        let result = TransformResult {
            output: "Hi.".to_string(),
            input_stats: compute_stats("Hi."),
            output_stats: compute_stats("Hi."),
            config: TransformConfig::default(),
            seed: Some(3),
        };
        let rendered = render(&result, &["restyle", "-f", "json", "transform"]);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["output"], "Hi.");
        assert_eq!(value["config"]["purpose"], "general");
        assert_eq!(value["output_stats"]["sentence_count"], 1);
        assert_eq!(value["seed"], 3);
    }
}
