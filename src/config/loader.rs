//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LeapError, LeapResult};

use super::types::Config;

/// File looked up in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "leapwitness.toml";

/// Overrides `hunt.samples`
pub const SAMPLES_VAR: &str = "LEAPWITNESS_SAMPLES";

/// Overrides `hunt.seed`
pub const SEED_VAR: &str = "LEAPWITNESS_SEED";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LeapResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LeapError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `dir/leapwitness.toml` when it exists, defaults otherwise; then apply
/// environment overrides.
pub fn load_or_default(dir: &Path) -> LeapResult<(Config, Vec<ConfigWarning>)> {
    let path = dir.join(CONFIG_FILE_NAME);
    let (config, warnings) = if path.exists() {
        load_with_warnings(&path)?
    } else {
        log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
        (Config::default(), Vec::new())
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (LEAPWITNESS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from `lookup`; unparsable values are ignored with a warning.
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(raw) = lookup(SAMPLES_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(samples) => config.hunt.samples = samples,
            Err(e) => log::warn!("ignoring {}={:?}: {}", SAMPLES_VAR, raw, e),
        }
    }

    if let Some(raw) = lookup(SEED_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => config.hunt.seed = Some(seed),
            Err(e) => log::warn!("ignoring {}={:?}: {}", SEED_VAR, raw, e),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "hunt",
        "samples",
        "seed",
        "max_reported_survivors",
        "progress_interval",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b_bytes = b.as_bytes();
    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();

    for (i, &ac) in a.as_bytes().iter().enumerate() {
        let mut curr = Vec::with_capacity(b_bytes.len() + 1);
        curr.push(i + 1);
        for (j, &bc) in b_bytes.iter().enumerate() {
            let substitute = prev[j] + usize::from(ac != bc);
            curr.push(substitute.min(prev[j + 1] + 1).min(curr[j] + 1));
        }
        prev = curr;
    }

    prev[b_bytes.len()]
}
