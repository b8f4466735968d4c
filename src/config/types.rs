//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LeapResult;

use super::loader::{self, ConfigWarning};

/// Settings for a mutant hunt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuntConfig {
    /// Number of candidates to draw
    #[serde(default = "default_samples")]
    pub samples: u64,

    /// Seed for reproducible runs; drawn from entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Survivors kept in the report (all are counted)
    #[serde(default = "default_max_reported_survivors")]
    pub max_reported_survivors: usize,

    /// Emit a progress log line every N samples (0 disables)
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            seed: None,
            max_reported_survivors: default_max_reported_survivors(),
            progress_interval: default_progress_interval(),
        }
    }
}

fn default_samples() -> u64 {
    1_000_000
}

fn default_max_reported_survivors() -> usize {
    10
}

fn default_progress_interval() -> u64 {
    100_000
}

/// Top-level configuration (`leapwitness.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub hunt: HuntConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LeapResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LeapResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `leapwitness.toml` from `dir` if present, then apply environment overrides
    pub fn load_or_default(dir: &Path) -> LeapResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(dir)
    }

    /// Apply environment variable overrides (LEAPWITNESS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
