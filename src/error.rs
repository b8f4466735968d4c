//! Error types for leapwitness
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::ValueType;

/// Result type alias for leapwitness operations
pub type LeapResult<T> = Result<T, LeapError>;

/// Failure while evaluating an expression tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Operator applied to an operand of the wrong type
    #[error("operator '{operator}' expects {expected} operands, found {found}")]
    TypeMismatch {
        operator: &'static str,
        expected: ValueType,
        found: ValueType,
    },

    /// Expression used as a classifier does not produce a boolean
    #[error("expression evaluates to {found}, expected boolean")]
    NotAPredicate { found: ValueType },

    /// Right-hand side of `%` evaluated to zero
    #[error("modulo by zero: {dividend} % 0")]
    ModuloByZero { dividend: i64 },

    /// Checked integer arithmetic overflowed
    #[error("integer overflow evaluating {lhs} {operator} {rhs}")]
    Overflow {
        lhs: i64,
        operator: &'static str,
        rhs: i64,
    },
}

/// Main error type for leapwitness operations
#[derive(Error, Debug)]
pub enum LeapError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Expression evaluation failed
    #[error("evaluation failed: {0}")]
    Eval(#[from] EvalError),

    /// Strategy could not produce a candidate
    #[error("sampling failed: {0}")]
    Sampling(String),
}
