//! Mutant hunt
//!
//! Draws leap candidates, checks each against the witness groups, and tallies
//! which group killed it. A survivor means the witness years cannot tell that
//! formula apart from the Gregorian rule.

use std::time::Instant;

use proptest::strategy::Strategy;
use serde::Serialize;

use crate::config::HuntConfig;
use crate::domain::entities::Expr;
use crate::domain::services::{check_mutant, Verdict, WitnessGroup};
use crate::error::{LeapError, LeapResult};
use crate::generator::{leap_candidates, Samples};

/// Kills per witness group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct KillCounts {
    pub century: u64,
    pub not_multiple_of_four: u64,
    pub multiple_of_four_not_century: u64,
}

impl KillCounts {
    fn record(&mut self, group: WitnessGroup) {
        match group {
            WitnessGroup::Century => self.century += 1,
            WitnessGroup::NotMultipleOfFour => self.not_multiple_of_four += 1,
            WitnessGroup::MultipleOfFourNotCentury => self.multiple_of_four_not_century += 1,
        }
    }

    pub fn get(&self, group: WitnessGroup) -> u64 {
        match group {
            WitnessGroup::Century => self.century,
            WitnessGroup::NotMultipleOfFour => self.not_multiple_of_four,
            WitnessGroup::MultipleOfFourNotCentury => self.multiple_of_four_not_century,
        }
    }

    pub fn total(&self) -> u64 {
        self.century + self.not_multiple_of_four + self.multiple_of_four_not_century
    }
}

/// Summary of a hunt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HuntReport {
    pub samples: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub kills: KillCounts,
    pub survived: u64,
    pub errors: u64,
    /// Rendered survivors, capped at `max_reported_survivors`
    pub survivors: Vec<String>,
    pub duration_ms: u64,
}

impl HuntReport {
    /// True when every candidate was killed and none failed to evaluate
    pub fn is_clean(&self) -> bool {
        self.survived == 0 && self.errors == 0
    }
}

/// Hunt over the leap-candidate strategy.
pub fn hunt(config: &HuntConfig) -> LeapResult<HuntReport> {
    hunt_with(leap_candidates(), config)
}

/// Hunt over any strategy producing boolean expressions.
pub fn hunt_with<S>(strategy: S, config: &HuntConfig) -> LeapResult<HuntReport>
where
    S: Strategy<Value = Expr>,
{
    let started = Instant::now();
    let budget = usize::try_from(config.samples).unwrap_or(usize::MAX);
    let mut report = HuntReport {
        seed: config.seed,
        ..HuntReport::default()
    };

    log::info!(
        "hunting {} candidates (seed: {})",
        config.samples,
        config
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string())
    );

    for candidate in Samples::new(strategy, config.seed).take(budget) {
        report.samples += 1;

        match check_mutant(&candidate) {
            Ok(Verdict::Killed { group, .. }) => report.kills.record(group),
            Ok(Verdict::Survived) => {
                report.survived += 1;
                log::warn!("mutant survived every witness group: {}", candidate);
                if report.survivors.len() < config.max_reported_survivors {
                    report.survivors.push(candidate.to_string());
                }
            }
            Err(e) => {
                report.errors += 1;
                log::debug!("candidate {} failed to evaluate: {}", candidate, e);
            }
        }

        if config.progress_interval > 0 && report.samples % config.progress_interval == 0 {
            log::debug!(
                "{}/{} candidates checked, {} survived",
                report.samples,
                config.samples,
                report.survived
            );
        }
    }

    report.duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    if report.samples < config.samples {
        return Err(LeapError::Sampling(format!(
            "strategy exhausted after {} of {} candidates",
            report.samples, config.samples
        )));
    }

    log::info!(
        "checked {} candidates in {} ms: {} killed, {} survived, {} errors",
        report.samples,
        report.duration_ms,
        report.kills.total(),
        report.survived,
        report.errors
    );

    Ok(report)
}
