//! Witness groups and the mutant-detection property
//!
//! A mutant is killed when at least one witness group discriminates it from
//! the Gregorian rule. Each group's condition is kept exactly as written,
//! including the disjuncts in the second and third groups that repeat each
//! other; the pass/fail semantics depend on that literal form.

use serde::Serialize;

use crate::domain::leap::LeapRule;
use crate::error::EvalError;

/// Fixed, hand-picked years covering the century and quadrennial rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WitnessGroup {
    /// `{1600, 1700, 1800, 1900}`
    Century,
    /// `{1904, 1914, 1918, 1939, 1945, 1908, 2004}`
    NotMultipleOfFour,
    /// `{1900, 1908, 1914, 1918, 2004}`
    MultipleOfFourNotCentury,
}

impl WitnessGroup {
    /// Groups in the order they are tried
    pub const ALL: [WitnessGroup; 3] = [
        WitnessGroup::Century,
        WitnessGroup::NotMultipleOfFour,
        WitnessGroup::MultipleOfFourNotCentury,
    ];

    pub fn years(&self) -> &'static [i64] {
        match self {
            WitnessGroup::Century => &[1600, 1700, 1800, 1900],
            WitnessGroup::NotMultipleOfFour => &[1904, 1914, 1918, 1939, 1945, 1908, 2004],
            WitnessGroup::MultipleOfFourNotCentury => &[1900, 1908, 1914, 1918, 2004],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WitnessGroup::Century => "century",
            WitnessGroup::NotMultipleOfFour => "not-multiple-of-four",
            WitnessGroup::MultipleOfFourNotCentury => "multiple-of-four-not-century",
        }
    }

    /// First year of this group that discriminates `rule`, if any.
    pub fn discriminating_year<R: LeapRule + ?Sized>(
        &self,
        rule: &R,
    ) -> Result<Option<i64>, EvalError> {
        for &year in self.years() {
            let hit = match self {
                WitnessGroup::Century => {
                    year % 100 == 0 && rule.is_leap(year)? && year % 400 == 0
                }
                WitnessGroup::NotMultipleOfFour => {
                    (year % 4 != 0 && rule.is_leap(year)?)
                        || (rule.is_leap(year)? && year % 4 != 0)
                }
                WitnessGroup::MultipleOfFourNotCentury => {
                    (year % 4 == 0 && year % 100 != 0 && !rule.is_leap(year)?)
                        || (rule.is_leap(year)? && year % 4 != 0)
                }
            };
            if hit {
                return Ok(Some(year));
            }
        }
        Ok(None)
    }
}

impl std::fmt::Display for WitnessGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Outcome of checking one candidate against the witness groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum Verdict {
    /// `group` discriminated the candidate at `year`
    Killed { group: WitnessGroup, year: i64 },
    /// No witness group discriminated the candidate
    Survived,
}

impl Verdict {
    pub fn is_killed(&self) -> bool {
        matches!(self, Verdict::Killed { .. })
    }
}

/// Check `rule` against every witness group, stopping at the first that
/// discriminates it.
pub fn check_mutant<R: LeapRule + ?Sized>(rule: &R) -> Result<Verdict, EvalError> {
    for group in WitnessGroup::ALL {
        if let Some(year) = group.discriminating_year(rule)? {
            return Ok(Verdict::Killed { group, year });
        }
    }
    Ok(Verdict::Survived)
}
