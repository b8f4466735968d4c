//! leapwitness - Gregorian leap-year predicate and mutant hunter
//!
//! [`is_leap_year`] is the reference rule. The rest of the crate exists to
//! test it: a small expression language over year arithmetic, proptest
//! strategies that sample leap-year-like formulas from it, and fixed witness
//! years that must tell every sampled formula apart from the real rule.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod presentation;

// Re-exports for convenience
pub use application::{hunt, hunt_with, HuntReport, KillCounts};
pub use config::{Config, HuntConfig};
pub use domain::entities::Expr;
pub use domain::leap::{is_leap_year, Gregorian, LeapRule};
pub use domain::services::{check_mutant, Verdict, WitnessGroup};
pub use domain::value_objects::{Operator, OperatorFamily, Value, ValueType};
pub use error::{EvalError, LeapError, LeapResult};
pub use generator::{
    boolean_operators, comparisons, constants, integer_comparisons, integer_operators,
    leap_candidates, Samples,
};
