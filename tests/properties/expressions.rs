//! Property tests for expression evaluation and rendering.

use proptest::prelude::*;

use leapwitness::{
    integer_comparisons, is_leap_year, leap_candidates, Expr, Gregorian, LeapRule, ValueType,
};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The Gregorian formula written as an `Expr` agrees with the predicate.
    #[test]
    fn property_gregorian_expr_matches_predicate(year in any::<i64>()) {
        prop_assert_eq!(Expr::gregorian().classify(year), Ok(is_leap_year(year)));
        prop_assert_eq!(Gregorian.is_leap(year), Ok(is_leap_year(year)));
    }

    /// PROPERTY: Generated comparisons are well-typed and total.
    #[test]
    fn property_integer_comparisons_evaluate(cmp in integer_comparisons(), year in 1i64..=10_000) {
        prop_assert_eq!(cmp.type_check(), Ok(ValueType::Bool));
        prop_assert!(cmp.classify(year).is_ok());
    }

    /// PROPERTY: Candidates ignore the year, so every witness year sees the same answer.
    #[test]
    fn property_candidates_are_year_independent(candidate in leap_candidates()) {
        let first = candidate.classify(1600);
        prop_assert!(first.is_ok());
        for year in [1700, 1900, 1908, 1945, 2004] {
            prop_assert_eq!(candidate.classify(year), first.clone());
        }
    }

    /// PROPERTY: Rendering shows every operator of the candidate.
    #[test]
    fn property_rendering_names_boolean_combinators(candidate in leap_candidates()) {
        let text = candidate.to_string();
        let combinators = text.matches(" and ").count() + text.matches(" or ").count();
        prop_assert_eq!(combinators, 2, "rendered: {}", text);
    }
}

#[test]
fn gregorian_expr_matches_predicate_on_generator_range() {
    let expr = Expr::gregorian();
    for year in 1..=10_000 {
        assert_eq!(expr.classify(year), Ok(is_leap_year(year)), "year {year}");
    }
}
