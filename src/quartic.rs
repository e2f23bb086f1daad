// SPDX-License-Identifier: AGPL-3.0-only

//! Borwein quartic recurrence for π.
//!
//! Each iteration roughly quadruples the number of correct decimal digits of
//! 1/a (observed errors: 7.4e-9, 5.5e-41, 2.3e-171, 1.1e-694 after
//! iterations 1-4). The engine is a
//! pure consumer of `rug::Float`: construction at a fixed precision plus
//! add, subtract, multiply, divide, and square root. Every value in one run
//! carries the single working precision from [`PiConfig`].
//!
//! Recurrence (seeded from √2):
//!
//! ```text
//! y₀ = √2 − 1              a₀ = 6 − 4√2              s₀ = 2
//! yᵢ = (1 − r)/(1 + r)     where r = (1 − yᵢ₋₁⁴)^(1/4)
//! sᵢ = 4·sᵢ₋₁              (= 2^(2i+1))
//! aᵢ = aᵢ₋₁(1 + yᵢ)⁴ − sᵢ·yᵢ(1 + yᵢ + yᵢ²)
//! π  = 1/a_N
//! ```
//!
//! Reference: Borwein & Borwein, "Pi and the AGM" (1987), §5.

use std::time::{Duration, Instant};

use rug::Float;

use crate::error::{Phase, PiError};
use crate::precision::PiConfig;

/// x⁴ as (x·x)·(x·x) — exactly two multiplications.
#[must_use]
pub fn power4(x: &Float) -> Float {
    let xx = Float::with_val(x.prec(), x * x);
    Float::with_val(x.prec(), &xx * &xx)
}

/// x^(1/4) as sqrt(sqrt(x)).
///
/// Requires x ≥ 0; a negative (or NaN) radicand means the recurrence has
/// diverged and is surfaced as a fault at `phase` rather than propagated as
/// a NaN.
pub fn root4(x: &Float, phase: Phase) -> Result<Float, PiError> {
    if x.is_nan() || *x < 0 {
        return Err(PiError::NegativeRadicand { phase });
    }
    let root2 = Float::with_val(x.prec(), x.sqrt_ref());
    Ok(Float::with_val(x.prec(), root2.sqrt_ref()))
}

/// Iteration state of the recurrence.
///
/// Immutable: [`QuarticState::step`] returns the next state, so the previous
/// state stays intact until the caller drops it and no partial update is
/// ever observable.
#[derive(Debug, Clone)]
pub struct QuarticState {
    /// Convergence auxiliary term, in [0, 1) and trending toward 0.
    pub y: Float,
    /// Running approximation; 1/a trends toward π.
    pub a: Float,
    /// Power-of-4 scale factor, 2^(2i+1) after iteration i.
    pub scale: Float,
    /// Completed iteration count (0 for the seed).
    pub iteration: u32,
}

impl QuarticState {
    /// Seed state (iteration 0), derived once from √2.
    ///
    /// Dependency order matters: √2 first, then 4√2, then a, then y.
    pub fn seed(precision_bits: u32) -> Result<Self, PiError> {
        if precision_bits == 0 {
            return Err(PiError::InvalidDigitCount);
        }
        let prec = precision_bits;
        let sqrt2 = Float::with_val(prec, 2).sqrt();
        let sqrt2x4 = Float::with_val(prec, 4 * &sqrt2);
        let a = Float::with_val(prec, 6 - &sqrt2x4);
        let y = Float::with_val(prec, &sqrt2 - 1);
        let scale = Float::with_val(prec, 2);
        Ok(Self {
            y,
            a,
            scale,
            iteration: 0,
        })
    }

    /// One recurrence step, in the exact dependency order of the formula.
    pub fn step(&self) -> Result<Self, PiError> {
        let prec = self.a.prec();
        let phase = Phase::Iteration(self.iteration + 1);

        // y4 = y_prev^4
        let y4 = power4(&self.y);

        // r = (1 - y4)^(1/4); the radicand must stay in [0, 1]
        let radicand = Float::with_val(prec, 1 - &y4);
        let r = root4(&radicand, phase)?;

        // y = (1 - r) / (1 + r)
        let denom = Float::with_val(prec, 1 + &r);
        if denom.is_zero() {
            return Err(PiError::ZeroDivisor { phase });
        }
        let numer = Float::with_val(prec, 1 - &r);
        let y = Float::with_val(prec, &numer / &denom);

        // aTerm = a_prev * (1 + y)^4
        let one_plus_y = Float::with_val(prec, 1 + &y);
        let p4 = power4(&one_plus_y);
        let a_term = Float::with_val(prec, &self.a * &p4);

        // scale = 4 * scale  (2^(2i+1) after this step)
        let scale = Float::with_val(prec, 4 * &self.scale);

        // y2 = y * y
        let y2 = Float::with_val(prec, &y * &y);

        // a = aTerm - scale * y * (1 + y + y2)
        let mut poly = Float::with_val(prec, 1 + &y);
        poly += &y2;
        let mut correction = Float::with_val(prec, &poly * &y);
        correction *= &scale;
        let a = Float::with_val(prec, &a_term - &correction);

        Ok(Self {
            y,
            a,
            scale,
            iteration: self.iteration + 1,
        })
    }

    /// Finalize: π ≈ 1/a.
    ///
    /// A zero divisor here means catastrophic precision loss, not a
    /// retryable condition.
    pub fn pi(&self) -> Result<Float, PiError> {
        if self.a.is_zero() {
            return Err(PiError::ZeroDivisor {
                phase: Phase::Inversion,
            });
        }
        Ok(self.a.clone().recip())
    }
}

/// Elapsed wall-clock time for one completed phase. Observational only;
/// observers never influence control flow.
#[derive(Debug, Clone, Copy)]
pub struct PhaseReport {
    pub phase: Phase,
    pub elapsed: Duration,
}

/// Run the full pipeline: seed, N iterations, final inversion.
pub fn compute_pi(config: &PiConfig) -> Result<Float, PiError> {
    compute_pi_with(config, |_| {})
}

/// [`compute_pi`] with a per-phase observer for progress/timing output.
pub fn compute_pi_with<F>(config: &PiConfig, mut observer: F) -> Result<Float, PiError>
where
    F: FnMut(&PhaseReport),
{
    if config.digits == 0 || config.precision_bits == 0 {
        return Err(PiError::InvalidDigitCount);
    }

    let t = Instant::now();
    let mut state = QuarticState::seed(config.precision_bits)?;
    observer(&PhaseReport {
        phase: Phase::Initialization,
        elapsed: t.elapsed(),
    });

    for _ in 0..config.iterations {
        let t = Instant::now();
        state = state.step()?;
        observer(&PhaseReport {
            phase: Phase::Iteration(state.iteration),
            elapsed: t.elapsed(),
        });
    }

    let t = Instant::now();
    let pi = state.pi()?;
    observer(&PhaseReport {
        phase: Phase::Inversion,
        elapsed: t.elapsed(),
    });
    Ok(pi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rug::float::Constant;

    const TEST_PREC: u32 = 256;

    #[test]
    fn power4_matches_repeated_multiplication() {
        let x = Float::with_val(TEST_PREC, 3);
        assert_eq!(power4(&x), 81);
        let x = Float::with_val(TEST_PREC, 0.5);
        assert_eq!(power4(&x), 0.0625);
    }

    #[test]
    fn root4_rejects_negative_radicand() {
        let x = Float::with_val(TEST_PREC, -0.5);
        let err = root4(&x, Phase::Iteration(3)).unwrap_err();
        assert_eq!(
            err,
            PiError::NegativeRadicand {
                phase: Phase::Iteration(3)
            }
        );
    }

    #[test]
    fn root4_rejects_nan() {
        let x = Float::with_val(TEST_PREC, f64::NAN);
        assert!(root4(&x, Phase::Iteration(1)).is_err());
    }

    #[test]
    fn root4_power4_round_trip() {
        for v in [0.1f64, 0.25, 0.5, 0.7, 0.9375, 0.999] {
            let x = Float::with_val(TEST_PREC, v);
            let rt = power4(&root4(&x, Phase::Iteration(1)).unwrap());
            let err = Float::with_val(TEST_PREC, &rt - &x).abs();
            assert!(err < 1e-70, "round trip off for {v}: err {err}");
        }
    }

    #[test]
    fn seed_matches_direct_substitution() {
        let state = QuarticState::seed(TEST_PREC).unwrap();
        let sqrt2 = Float::with_val(TEST_PREC, 2).sqrt();

        let y_expected = Float::with_val(TEST_PREC, &sqrt2 - 1);
        let four_sqrt2 = Float::with_val(TEST_PREC, 4 * &sqrt2);
        let a_expected = Float::with_val(TEST_PREC, 6 - &four_sqrt2);

        assert_eq!(state.y, y_expected);
        assert_eq!(state.a, a_expected);
        assert_eq!(state.scale, 2);
        assert_eq!(state.iteration, 0);
    }

    #[test]
    fn seed_rejects_zero_precision() {
        assert!(QuarticState::seed(0).is_err());
    }

    #[test]
    fn step_commits_whole_state() {
        let seed = QuarticState::seed(TEST_PREC).unwrap();
        let next = seed.step().unwrap();
        assert_eq!(next.iteration, 1);
        assert_eq!(next.scale, 8); // 2^(2·1+1)
        assert!(next.y < seed.y, "y must shrink toward 0");
        // The seed is untouched (no partial update).
        assert_eq!(seed.iteration, 0);
        assert_eq!(seed.scale, 2);
    }

    #[test]
    fn scale_tracks_power_of_two() {
        let mut state = QuarticState::seed(TEST_PREC).unwrap();
        for i in 1u32..=5 {
            state = state.step().unwrap();
            let expected = Float::with_val(TEST_PREC, 2u64 << (2 * i));
            assert_eq!(state.scale, expected, "scale after iteration {i}");
        }
    }

    #[test]
    fn derived_iteration_count_reaches_fifty_digits() {
        let cfg = PiConfig::new(50).unwrap();
        let pi = compute_pi(&cfg).unwrap();
        let reference = Float::with_val(cfg.precision_bits, Constant::Pi);
        let err = Float::with_val(cfg.precision_bits, &pi - &reference).abs();
        assert!(err < 1e-50, "err {err}");
    }

    #[test]
    fn inversion_of_zero_accumulator_faults() {
        let seed = QuarticState::seed(TEST_PREC).unwrap();
        let broken = QuarticState {
            a: Float::new(TEST_PREC),
            ..seed
        };
        assert_eq!(
            broken.pi().unwrap_err(),
            PiError::ZeroDivisor {
                phase: Phase::Inversion
            }
        );
    }

    #[test]
    fn observer_sees_every_phase_in_order() {
        let cfg = PiConfig::new(20).unwrap();
        let mut phases = Vec::new();
        compute_pi_with(&cfg, |report| phases.push(report.phase)).unwrap();
        assert_eq!(phases.len() as u32, cfg.iterations + 2);
        assert_eq!(phases[0], Phase::Initialization);
        for (k, phase) in phases[1..phases.len() - 1].iter().enumerate() {
            assert_eq!(*phase, Phase::Iteration(k as u32 + 1));
        }
        assert_eq!(*phases.last().unwrap(), Phase::Inversion);
    }

    #[test]
    fn zero_digit_config_never_reaches_arithmetic() {
        let cfg = PiConfig {
            digits: 0,
            precision_bits: 64,
            iterations: 10,
        };
        let mut called = false;
        let err = compute_pi_with(&cfg, |_| called = true).unwrap_err();
        assert_eq!(err, PiError::InvalidDigitCount);
        assert!(!called, "no phase may run on invalid configuration");
    }
}
