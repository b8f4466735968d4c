//! Domain Services
//!
//! Stateless checks over leap-year classifiers.

pub mod witness;

pub use witness::{check_mutant, Verdict, WitnessGroup};
