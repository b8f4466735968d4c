//! Configuration module for leapwitness
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LEAPWITNESS_*)
//! 3. Config file (`leapwitness.toml` or `--config PATH`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{apply_overrides, ConfigWarning, CONFIG_FILE_NAME, SAMPLES_VAR, SEED_VAR};
pub use types::{Config, HuntConfig};
