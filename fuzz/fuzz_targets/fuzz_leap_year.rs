#![no_main]

use leapwitness::{is_leap_year, Expr};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(bytes) = <[u8; 8]>::try_from(data) {
        let year = i64::from_le_bytes(bytes);
        // The formula written in the expression language agrees with the predicate
        assert_eq!(Expr::gregorian().classify(year), Ok(is_leap_year(year)));
    }
});
