//! Gregorian leap-year rule
//!
//! A year is a leap year when it is divisible by 4, except centuries, except
//! centuries divisible by 400. [`is_leap_year`] is the reference oracle every
//! other classifier is measured against.

use crate::error::EvalError;

/// Returns true if `year` is a leap year in the Gregorian calendar.
///
/// Total over `i64`; the meaningful domain is years `>= 1`.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Anything that can classify a year as leap or common
pub trait LeapRule {
    fn is_leap(&self, year: i64) -> Result<bool, EvalError>;
}

/// The Gregorian rule as a [`LeapRule`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gregorian;

impl LeapRule for Gregorian {
    fn is_leap(&self, year: i64) -> Result<bool, EvalError> {
        Ok(is_leap_year(year))
    }
}
