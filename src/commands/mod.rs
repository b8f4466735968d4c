//! Subcommand handlers for the `leapwitness` binary

pub mod classify;
pub mod hunt;
