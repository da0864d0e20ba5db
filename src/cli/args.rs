//! Command line argument parsing for the Restyle CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Restyle - rule-based prose restyling
#[derive(Parser, Debug, Clone)]
#[command(name = "restyle")]
#[command(about = "Restyle prose with synonym swaps, hedging phrases and paragraph regrouping")]
#[command(version = crate::VERSION)]
#[command(long_about = None)]
pub struct RestyleArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RestyleArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Restyle text from a file or stdin
    Transform(TransformArgs),

    /// Show word and sentence counts
    Stats(StatsArgs),

    /// List the active synonym table
    Synonyms(SynonymsArgs),
}

/// Arguments for restyling text
#[derive(Parser, Debug, Clone)]
pub struct TransformArgs {
    /// Input file (reads stdin if omitted or "-")
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Strength 0-100; out-of-range values are clamped, non-numbers count as 0
    #[arg(short, long, env = "RESTYLE_STRENGTH")]
    pub strength: Option<String>,

    /// Purpose: general, academic, article, blog, story, social, copy
    #[arg(short, long, env = "RESTYLE_PURPOSE")]
    pub purpose: Option<String>,

    /// Regroup sentences into paragraphs of 2-4 sentences
    #[arg(long)]
    pub split: bool,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Configuration file (JSON); flags override its values
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Extra synonyms (JSON object of word -> alternatives)
    #[arg(long, value_name = "SYNONYMS_FILE")]
    pub synonyms: Option<PathBuf>,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for text statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Input file (reads stdin if omitted or "-")
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Arguments for listing synonyms
#[derive(Parser, Debug, Clone)]
pub struct SynonymsArgs {
    /// Extra synonyms (JSON object of word -> alternatives)
    #[arg(long, value_name = "SYNONYMS_FILE")]
    pub synonyms: Option<PathBuf>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transform() {
        let args = RestyleArgs::parse_from([
            "restyle",
            "transform",
            "input.txt",
            "--strength",
            "80",
            "--purpose",
            "blog",
            "--split",
            "--seed",
            "7",
        ]);

        match args.command {
            Command::Transform(transform) => {
                assert_eq!(transform.input, Some(PathBuf::from("input.txt")));
                assert_eq!(transform.strength.as_deref(), Some("80"));
                assert_eq!(transform.purpose.as_deref(), Some("blog"));
                assert!(transform.split);
                assert_eq!(transform.seed, Some(7));
            }
            other => panic!("Expected transform command, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = RestyleArgs::parse_from(["restyle", "stats", "-f", "json", "-vv"]);
        assert_eq!(args.output_format, OutputFormat::Json);
        assert_eq!(args.verbosity(), 2);
    }

    #[test]
    fn test_verbosity() {
        let args = RestyleArgs::parse_from(["restyle", "synonyms"]);
        assert_eq!(args.verbosity(), 1);

        let args = RestyleArgs::parse_from(["restyle", "-q", "-vvv", "synonyms"]);
        assert_eq!(args.verbosity(), 0);
    }
}
