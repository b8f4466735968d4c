use std::path::Path;

use anyhow::{bail, Context, Result};

use leapwitness::config::{Config, ConfigWarning};
use leapwitness::hunt;
use leapwitness::presentation::output::render_hunt_report;

use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, ErrorEvent, StartEvent};

pub fn cmd_hunt(
    samples: Option<u64>,
    seed: Option<u64>,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let (mut config, warnings) = match config_path {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            (config.with_env_overrides(), warnings)
        }
        None => Config::load_or_default(Path::new("."))
            .context("failed to load leapwitness.toml")?,
    };
    print_config_warnings(&warnings);

    if let Some(samples) = samples {
        config.hunt.samples = samples;
    }
    if let Some(seed) = seed {
        config.hunt.seed = Some(seed);
    }

    if json {
        emit_event(&StartEvent::new("hunt"))?;
    }

    let report = match hunt(&config.hunt) {
        Ok(report) => report,
        Err(e) => {
            if json {
                emit_event(&ErrorEvent::new("hunt", e.to_string()))?;
            }
            return Err(e).context("hunt failed");
        }
    };

    if json {
        emit_event(&DataEvent::new("hunt", &report))?;
        let complete = if report.is_clean() {
            CompleteEvent::success("hunt")
        } else {
            CompleteEvent::failure("hunt")
        };
        emit_event(&complete.with_duration(report.duration_ms))?;
    } else {
        print!("{}", render_hunt_report(&report));
    }

    if report.survived > 0 {
        bail!(
            "{} of {} candidates survived every witness group; enlarge the witness set",
            report.survived,
            report.samples
        );
    }
    if report.errors > 0 {
        bail!("{} candidates failed to evaluate", report.errors);
    }
    Ok(())
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        match &w.suggestion {
            Some(s) => log::warn!(
                "unknown config key '{}' in {} (did you mean '{}'?)",
                w.key,
                location,
                s
            ),
            None => log::warn!("unknown config key '{}' in {}", w.key, location),
        }
    }
}
