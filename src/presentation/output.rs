//! Output Rendering
//!
//! Human-readable text for classifications and hunt reports. JSON output is
//! emitted by the binary as NDJSON events.

use std::fmt::Write;

use crate::application::HuntReport;
use crate::domain::services::WitnessGroup;

/// `1900: common`, `2000: leap`
pub fn render_classification(year: i64, leap: bool) -> String {
    format!("{}: {}", year, if leap { "leap" } else { "common" })
}

/// Multi-line summary of a hunt
pub fn render_hunt_report(report: &HuntReport) -> String {
    let mut out = String::new();
    let status = if report.is_clean() { "✓" } else { "✗" };

    let _ = writeln!(
        out,
        "{} {} candidates checked in {} ms",
        status, report.samples, report.duration_ms
    );
    if let Some(seed) = report.seed {
        let _ = writeln!(out, "  seed: {}", seed);
    }
    for group in WitnessGroup::ALL {
        let _ = writeln!(out, "  killed by {}: {}", group, report.kills.get(group));
    }
    if report.errors > 0 {
        let _ = writeln!(out, "  evaluation errors: {}", report.errors);
    }
    let _ = writeln!(out, "  survived: {}", report.survived);
    for survivor in &report.survivors {
        let _ = writeln!(out, "    {}", survivor);
    }
    if report.survived > report.survivors.len() as u64 {
        let _ = writeln!(
            out,
            "    ... and {} more",
            report.survived - report.survivors.len() as u64
        );
    }

    out
}
