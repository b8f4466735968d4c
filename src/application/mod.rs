//! Application Layer
//!
//! Use cases that orchestrate domain checks over generated candidates.
//!
//! ## Use Cases
//!
//! - `hunt` - Draw leap candidates and check each against the witness groups

pub mod hunt;

pub use hunt::{hunt, hunt_with, HuntReport, KillCounts};
