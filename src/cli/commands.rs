//! Command implementations for the Restyle CLI.

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use anyhow::Context;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::analysis::synonym::SynonymDictionary;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{RestyleError, Result};
use crate::transform::{Humanizer, Purpose, Strength, TransformConfig, compute_stats};

/// Execute a CLI command, writing results to stdout unless redirected.
pub fn execute_command(args: RestyleArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command_to(&args, &mut out)
}

/// Execute a CLI command against an explicit writer.
pub fn execute_command_to(args: &RestyleArgs, out: &mut dyn Write) -> Result<()> {
    match &args.command {
        Command::Transform(transform_args) => transform_text(transform_args, args, out),
        Command::Stats(stats_args) => show_stats(stats_args, args, out),
        Command::Synonyms(synonyms_args) => list_synonyms(synonyms_args, args, out),
    }
}

/// Restyle input text.
fn transform_text(args: &TransformArgs, cli_args: &RestyleArgs, out: &mut dyn Write) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let text = text.trim();
    if text.is_empty() {
        return Err(RestyleError::invalid_argument(
            "No input text. Provide a file or pipe text on stdin.",
        ));
    }

    let config = resolve_config(args)?;
    let humanizer = Humanizer::with_dictionary(load_dictionary(args.synonyms.as_deref())?);
    info!(
        "Transforming {} bytes (strength={}, purpose={}, split={})",
        text.len(),
        config.strength,
        config.purpose,
        config.split_paragraphs
    );

    let output = match args.seed {
        Some(seed) => humanizer.transform(text, &config, &mut StdRng::seed_from_u64(seed)),
        None => humanizer.transform(text, &config, &mut rand::rng()),
    };

    let result = TransformResult {
        input_stats: compute_stats(text),
        output_stats: compute_stats(&output),
        output,
        config,
        seed: args.seed,
    };
    info!(
        "Input: {} words / {} sentences, output: {} words / {} sentences",
        result.input_stats.word_count,
        result.input_stats.sentence_count,
        result.output_stats.word_count,
        result.output_stats.sentence_count
    );

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
            let mut writer = BufWriter::new(file);
            output_result(&result, cli_args, &mut writer)?;
            info!("Wrote result to {}", path.display());
            Ok(())
        }
        None => output_result(&result, cli_args, out),
    }
}

/// Show word and sentence counts.
fn show_stats(args: &StatsArgs, cli_args: &RestyleArgs, out: &mut dyn Write) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let result = StatsResult {
        stats: compute_stats(&text),
    };
    output_result(&result, cli_args, out)
}

/// List the active synonym table.
fn list_synonyms(args: &SynonymsArgs, cli_args: &RestyleArgs, out: &mut dyn Write) -> Result<()> {
    let dictionary = load_dictionary(args.synonyms.as_deref())?;
    output_result(&SynonymListing::from_dictionary(&dictionary), cli_args, out)
}

/// Build the effective configuration: defaults, then the file, then flags.
fn resolve_config(args: &TransformArgs) -> Result<TransformConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            TransformConfig::from_json_file(path)?
        }
        None => TransformConfig::default(),
    };

    if let Some(strength) = &args.strength {
        config.strength = Strength::parse_lenient(strength);
    }
    if let Some(purpose) = &args.purpose {
        config.purpose = Purpose::from(purpose.as_str());
    }
    if args.split {
        config.split_paragraphs = true;
    }

    Ok(config)
}

/// The built-in table, extended by an optional user file.
fn load_dictionary(path: Option<&Path>) -> Result<SynonymDictionary> {
    let builtin = SynonymDictionary::builtin();
    match path {
        Some(path) => {
            let custom = SynonymDictionary::load_from_file(path)?;
            debug!("Loaded {} synonym entries from {}", custom.len(), path.display());
            Ok(builtin.merge(&custom))
        }
        None => Ok(builtin.clone()),
    }
}

/// Read a whole file, or stdin for `None` / `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file '{}'", path.display()))?;
            Ok(text)
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
