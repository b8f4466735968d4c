//! Property test: the witness years kill every generated mutant.
//!
//! A candidate that no witness group discriminates is a gap in the witness
//! set, not an acceptable outcome; the failure message names the formula.

use proptest::prelude::*;

use leapwitness::{check_mutant, leap_candidates, Verdict};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1_000_000,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: No sampled leap candidate survives all three witness groups.
    #[test]
    fn property_no_mutants_survive(mutant in leap_candidates()) {
        let verdict = check_mutant(&mutant);
        prop_assert!(
            matches!(verdict, Ok(Verdict::Killed { .. })),
            "mutant {} was not killed: {:?}",
            mutant,
            verdict
        );
    }
}
