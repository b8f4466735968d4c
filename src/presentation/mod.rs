//! Presentation Layer
//!
//! - `cli` - CLI argument parsing (via clap)
//! - `output` - Text rendering of classifications and hunt reports

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands};
