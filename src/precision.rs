// SPDX-License-Identifier: AGPL-3.0-only

//! Precision configuration: digit count → working precision and iteration
//! count.
//!
//! The working precision is derived once and carried explicitly in a
//! [`PiConfig`] that every value construction reads, so a single run can
//! never mix precisions. Nothing here touches the arithmetic provider;
//! configuration errors are raised before any `Float` exists.

use crate::error::PiError;

/// Significand bits carried per requested decimal digit.
///
/// The information-theoretic minimum is log2(10) ≈ 3.32 bits/digit; 8 gives
/// ~2.4× headroom, enough to absorb the rounding accumulated across the
/// ~10-iteration chain of multiply/divide/sqrt operations without touching
/// the requested digits.
pub const BITS_PER_DECIMAL_DIGIT: u32 = 8;

/// Extra margin iterations on top of the analytically sufficient count.
///
/// The absolute error after iteration i stays below 10^-(2·4^i) (observed:
/// 7.4e-9, 5.5e-41, 2.3e-171, 1.1e-694 for i = 1..4), so one spare
/// iteration covers the constant-factor slack near the precision ceiling.
pub const ITERATION_MARGIN: u32 = 1;

/// Iteration count used by the original million-digit run.
pub const REFERENCE_ITERATIONS: u32 = 10;

/// Working precision in bits for `digits` decimal places.
///
/// P = [`BITS_PER_DECIMAL_DIGIT`] · (digits + 1); the +1 covers the leading
/// integer digit of π. Fails fast on a zero digit count or a precision that
/// does not fit the provider's `u32` precision type.
pub fn working_precision(digits: u64) -> Result<u32, PiError> {
    if digits == 0 {
        return Err(PiError::InvalidDigitCount);
    }
    let bits = digits
        .checked_add(1)
        .and_then(|d| d.checked_mul(u64::from(BITS_PER_DECIMAL_DIGIT)))
        .ok_or(PiError::PrecisionOverflow { digits })?;
    u32::try_from(bits).map_err(|_| PiError::PrecisionOverflow { digits })
}

/// Number of recurrence iterations sufficient for `digits` decimal places.
///
/// Smallest N with 2·4^N ≥ digits, plus [`ITERATION_MARGIN`]. For one
/// million digits this gives 11, one above the reference run's 10.
#[must_use]
pub fn iterations_for(digits: u64) -> u32 {
    let mut n = 0u32;
    let mut reach = 2u64;
    while reach < digits {
        n += 1;
        // 4^n growth; saturate so absurd digit counts terminate the loop.
        reach = reach.saturating_mul(4);
    }
    n + ITERATION_MARGIN
}

/// One run's complete configuration: digit count, working precision, and
/// iteration count, fixed before any arithmetic begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiConfig {
    /// Requested decimal places after "3.".
    pub digits: u64,
    /// Working precision in bits for every value in the run.
    pub precision_bits: u32,
    /// Number of recurrence iterations.
    pub iterations: u32,
}

impl PiConfig {
    /// Configuration for `digits` decimal places with the derived iteration
    /// count.
    pub fn new(digits: u64) -> Result<Self, PiError> {
        Ok(Self {
            digits,
            precision_bits: working_precision(digits)?,
            iterations: iterations_for(digits),
        })
    }

    /// Override the iteration count (e.g. to reproduce the reference run's
    /// fixed N=10).
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_lower_bound_holds() {
        for digits in [1u64, 2, 15, 100, 1_000, 1_000_000] {
            let p = working_precision(digits).unwrap();
            assert!(
                u64::from(p) >= u64::from(BITS_PER_DECIMAL_DIGIT) * (digits + 1),
                "P for {digits} digits below k·(D+1)"
            );
        }
    }

    #[test]
    fn precision_monotone_in_digits() {
        let mut prev = 0u32;
        for digits in 1u64..=2_000 {
            let p = working_precision(digits).unwrap();
            assert!(p >= prev, "precision decreased at {digits} digits");
            prev = p;
        }
    }

    #[test]
    fn zero_digits_rejected() {
        assert_eq!(working_precision(0), Err(PiError::InvalidDigitCount));
        assert_eq!(PiConfig::new(0), Err(PiError::InvalidDigitCount));
    }

    #[test]
    fn huge_digit_count_overflows_cleanly() {
        let digits = u64::MAX / 2;
        assert!(matches!(
            working_precision(digits),
            Err(PiError::PrecisionOverflow { .. })
        ));
    }

    #[test]
    fn iterations_match_observed_convergence() {
        // Observed correct digits per iteration: 8, 40, 170, 693, ...
        assert_eq!(iterations_for(1), 1);
        assert_eq!(iterations_for(8), 2);
        assert_eq!(iterations_for(15), 3);
        assert_eq!(iterations_for(170), 5);
        assert_eq!(iterations_for(1_000_000), 11);
    }

    #[test]
    fn iterations_monotone_in_digits() {
        let mut prev = 0u32;
        for digits in 1u64..=100_000 {
            let n = iterations_for(digits);
            assert!(n >= prev, "iterations decreased at {digits} digits");
            prev = n;
        }
    }

    #[test]
    fn reference_iteration_count_suffices_for_a_million() {
        // The original run used N=10 for one million digits; 2·4^10 ≈ 2.1M,
        // so the derived count must never exceed 10 by more than the margin.
        assert!(iterations_for(1_000_000) <= REFERENCE_ITERATIONS + ITERATION_MARGIN);
    }

    #[test]
    fn config_carries_derived_values() {
        let cfg = PiConfig::new(15).unwrap();
        assert_eq!(cfg.digits, 15);
        assert_eq!(cfg.precision_bits, 8 * 16);
        assert_eq!(cfg.iterations, 3);
        let cfg10 = cfg.with_iterations(10);
        assert_eq!(cfg10.iterations, 10);
        assert_eq!(cfg10.precision_bits, cfg.precision_bits);
    }
}
