//! Fixed-point rate math and quote types
//!
//! Rates are unsigned fixed-point values where `RATE_ONE` encodes the
//! decimal value 1.0. A zero rate is reserved as the "unset" sentinel and
//! is never stored for a recorded pair.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Fixed-point scale: the integer that encodes the decimal value 1.0
pub const RATE_ONE: u128 = 1_000_000_000_000_000_000;

/// Multiplicative inverse of a fixed-point rate.
///
/// Computes `RATE_ONE^2 / rate` with integer division truncating toward
/// zero. Callers must guarantee `rate != 0`.
pub fn invert_rate(rate: u128) -> u128 {
    let one = U256::from(RATE_ONE);
    // RATE_ONE^2 / rate never exceeds 10^36 for rate >= 1, so the
    // narrowing back to u128 is lossless
    ((one * one) / U256::from(rate)).to::<u128>()
}

/// Orient a rate between the caller's pair order and canonical order.
///
/// Identity when the orders agree, fixed-point inverse when they differ.
/// Callers must guarantee `rate != 0` when `swapped` is set.
pub fn orient_rate(swapped: bool, rate: u128) -> u128 {
    if swapped {
        invert_rate(rate)
    } else {
        rate
    }
}

/// Latest observation recorded for a canonical pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub rate: u128,
    pub observed_at: u64,
}

impl Quote {
    /// The "never recorded" sentinel
    pub const UNSET: Quote = Quote { rate: 0, observed_at: 0 };

    pub fn new(rate: u128, observed_at: u64) -> Self {
        Self { rate, observed_at }
    }

    /// Whether this pair has ever been recorded
    pub fn is_set(&self) -> bool {
        self.observed_at != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_invert_exact_values() {
        assert_eq!(invert_rate(RATE_ONE), RATE_ONE);
        assert_eq!(invert_rate(2 * RATE_ONE), RATE_ONE / 2);
        assert_eq!(invert_rate(RATE_ONE / 2), 2 * RATE_ONE);
        assert_eq!(invert_rate(1), RATE_ONE * RATE_ONE);
    }

    #[test]
    fn test_invert_truncates_toward_zero() {
        // 1/3 in fixed point has no exact representation
        assert_eq!(invert_rate(3 * RATE_ONE), 333_333_333_333_333_333);
        // an astronomically large rate inverts to the zero sentinel
        assert_eq!(invert_rate(RATE_ONE * RATE_ONE + 1), 0);
    }

    #[test]
    fn test_orient_rate() {
        assert_eq!(orient_rate(false, 42), 42);
        assert_eq!(orient_rate(true, 4 * RATE_ONE), RATE_ONE / 4);
    }

    #[test]
    fn test_quote_set_detection() {
        assert!(!Quote::UNSET.is_set());
        assert!(Quote::new(RATE_ONE, 1).is_set());
    }

    proptest! {
        /// Double inversion returns the input within the rounding error of
        /// one fixed-point division, never exactly below it.
        #[test]
        fn prop_double_inversion_error_bound(rate in 1u128..1_000_000_000_000_000_000_000_000) {
            let round_trip = invert_rate(invert_rate(rate));
            prop_assert!(round_trip >= rate);

            let k = U256::from(RATE_ONE) * U256::from(RATE_ONE);
            let r = U256::from(rate);
            let bound = r * r / (k - r) + U256::from(1u8);
            prop_assert!(U256::from(round_trip - rate) <= bound);
        }
    }
}
