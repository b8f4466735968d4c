//! leapwitness CLI
//!
//! Usage: leapwitness <COMMAND>
//!
//! Commands:
//!   classify  Classify years as leap or common
//!   hunt      Check the witness years kill every generated candidate

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use leapwitness::presentation::{Cli, Commands};

mod commands;
mod ui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Classify { years } => commands::classify::cmd_classify(&years, cli.json),
        Commands::Hunt {
            samples,
            seed,
            config,
        } => commands::hunt::cmd_hunt(samples, seed, config.as_deref(), cli.json),
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}
