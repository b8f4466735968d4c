//! Property tests for the Gregorian predicate.

use proptest::prelude::*;

use leapwitness::is_leap_year;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1024,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A century year is a leap year iff it is divisible by 400.
    #[test]
    fn property_centuries_need_400(century in 1i64..=1_000) {
        let year = century * 100;
        prop_assert_eq!(is_leap_year(year), year % 400 == 0);
    }

    /// PROPERTY: Years not divisible by 4 are never leap years.
    #[test]
    fn property_non_multiples_of_four_are_common(base in 0i64..=25_000, offset in 1i64..=3) {
        prop_assert!(!is_leap_year(base * 4 + offset));
    }

    /// PROPERTY: Multiples of 4 that are not centuries are leap years.
    #[test]
    fn property_quadrennial_non_centuries_are_leap(
        k in (1i64..=25_000).prop_filter("not a century", |k| k % 25 != 0)
    ) {
        prop_assert!(is_leap_year(k * 4));
    }

    /// PROPERTY: Classification is pure; repeated calls agree.
    #[test]
    fn property_repeated_calls_agree(year in any::<i64>()) {
        prop_assert_eq!(is_leap_year(year), is_leap_year(year));
    }

    /// PROPERTY: The calendar repeats every 400 years.
    #[test]
    fn property_period_of_400_years(year in 1i64..=1_000_000) {
        prop_assert_eq!(is_leap_year(year), is_leap_year(year + 400));
    }
}
