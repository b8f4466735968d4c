//! Candidate generator
//!
//! Strategies that sample leap-year-like formulas. A leap candidate has the
//! shape `boolOp(boolOp(cmp1, cmp2), cmp3)` where every `cmp` is
//! `compare(intOp(constant, constant), constant)`: the same skeleton as the
//! real rule, with no guarantee of equivalence.
//!
//! The strategies plug straight into `proptest!`. [`Samples`] drives the same
//! strategies outside the test runner as an unbounded lazy stream.

use proptest::prelude::*;
use proptest::sample::select;
use proptest::strategy::ValueTree;
use proptest::test_runner::{Config as RunnerConfig, RngAlgorithm, TestRng, TestRunner};

use crate::domain::entities::Expr;
use crate::domain::value_objects::Operator;

/// Smallest constant the generator draws
pub const CONSTANT_MIN: i64 = 1;
/// Largest constant the generator draws
pub const CONSTANT_MAX: i64 = 10_000;

/// Constants drawn uniformly from `[1, 10000]`.
pub fn constants() -> impl Strategy<Value = Expr> {
    (CONSTANT_MIN..=CONSTANT_MAX).prop_map(Expr::constant)
}

pub fn integer_operators() -> impl Strategy<Value = Operator> {
    select(Operator::INTEGER.to_vec())
}

pub fn comparisons() -> impl Strategy<Value = Operator> {
    select(Operator::COMPARISON.to_vec())
}

pub fn boolean_operators() -> impl Strategy<Value = Operator> {
    select(Operator::BOOLEAN.to_vec())
}

/// `compare(intOp(constant, constant), constant)`
pub fn integer_comparisons() -> impl Strategy<Value = Expr> {
    (
        comparisons(),
        integer_operators(),
        constants(),
        constants(),
        constants(),
    )
        .prop_map(|(compare, op, a, b, c)| Expr::binary(Expr::binary(a, op, b), compare, c))
}

/// `boolOp(boolOp(cmp1, cmp2), cmp3)` with both combinators drawn independently.
pub fn leap_candidates() -> impl Strategy<Value = Expr> {
    (
        boolean_operators(),
        boolean_operators(),
        integer_comparisons(),
        integer_comparisons(),
        integer_comparisons(),
    )
        .prop_map(|(outer, inner, first, second, third)| {
            Expr::binary(Expr::binary(first, inner, second), outer, third)
        })
}

/// Unbounded, non-restartable stream of values drawn from a strategy.
pub struct Samples<S> {
    strategy: S,
    runner: TestRunner,
}

impl<S: Strategy> Samples<S> {
    /// Draw from `strategy`, reproducibly when `seed` is given.
    pub fn new(strategy: S, seed: Option<u64>) -> Self {
        let runner = match seed {
            Some(seed) => TestRunner::new_with_rng(RunnerConfig::default(), seeded_rng(seed)),
            None => TestRunner::new(RunnerConfig::default()),
        };
        Self { strategy, runner }
    }
}

impl<S: Strategy> Iterator for Samples<S> {
    type Item = S::Value;

    fn next(&mut self) -> Option<Self::Item> {
        match self.strategy.new_tree(&mut self.runner) {
            Ok(tree) => Some(tree.current()),
            Err(reason) => {
                log::warn!("strategy stopped producing values: {}", reason);
                None
            }
        }
    }
}

fn seeded_rng(seed: u64) -> TestRng {
    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&seed.to_le_bytes());
    TestRng::from_seed(RngAlgorithm::ChaCha, &bytes)
}
