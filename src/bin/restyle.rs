//! Restyle CLI binary.

use std::process;

use clap::Parser;
use restyle::cli::{args::*, commands::*};

fn main() {
    // Parse command line arguments using clap
    let args = RestyleArgs::parse();

    // Map verbosity onto a default log filter; RUST_LOG still wins.
    let level = match args.verbosity() {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
