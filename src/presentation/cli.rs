//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--verbose`) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// leapwitness - Gregorian leap-year predicate and mutant hunter
#[derive(Parser, Debug)]
#[command(name = "leapwitness")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify years as leap or common
    Classify {
        /// Years to classify
        #[arg(required = true, allow_negative_numbers = true)]
        years: Vec<i64>,
    },

    /// Generate candidate formulas and check the witness years kill them all
    Hunt {
        /// Number of candidates to draw (overrides config)
        #[arg(short = 'n', long)]
        samples: Option<u64>,

        /// Seed for a reproducible run (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Path to config file (defaults to ./leapwitness.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
