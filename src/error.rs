// SPDX-License-Identifier: AGPL-3.0-only

//! Typed errors for the π computation pipeline.
//!
//! Every failure is fatal for the run: there is no retry and no
//! degraded-precision fallback. Each error carries the [`Phase`] in which it
//! arose so a caller can tell a misconfiguration from a precision collapse
//! inside iteration k without parsing message strings.

use std::fmt;

/// Where in the run an error (or a progress event) occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Digit-count validation and precision derivation, before any
    /// arbitrary-precision value exists.
    Configuration,
    /// Seed-state construction (√2 and the derived y/a seeds).
    Initialization,
    /// Recurrence step i (1-indexed).
    Iteration(u32),
    /// The final reciprocal 1/a.
    Inversion,
    /// Decimal digit extraction and layout.
    Rendering,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::Initialization => write!(f, "initialization"),
            Self::Iteration(i) => write!(f, "iteration {i}"),
            Self::Inversion => write!(f, "inversion"),
            Self::Rendering => write!(f, "rendering"),
        }
    }
}

/// Errors arising from configuration, the convergence recurrence, or the
/// arithmetic provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PiError {
    /// Requested digit count is zero (the public API is unsigned, so
    /// negative counts are unrepresentable; zero is the invalid case).
    InvalidDigitCount,

    /// The derived working precision does not fit the provider's precision
    /// type (digit count far beyond any practical target).
    PrecisionOverflow { digits: u64 },

    /// An intermediate that feeds a square root went negative — the
    /// recurrence has diverged, which indicates precision misconfiguration.
    NegativeRadicand { phase: Phase },

    /// The final divisor collapsed to zero at the configured precision.
    ZeroDivisor { phase: Phase },

    /// The computed value has the wrong shape (sign, exponent, or leading
    /// digit); a NaN-like silent result is surfaced here instead of printed.
    UnexpectedForm { phase: Phase, detail: String },

    /// The arithmetic provider reported an internal failure.
    Provider { phase: Phase, detail: String },
}

impl fmt::Display for PiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDigitCount => {
                write!(f, "requested digit count must be at least 1")
            }
            Self::PrecisionOverflow { digits } => {
                write!(
                    f,
                    "working precision for {digits} digits exceeds the provider's precision range"
                )
            }
            Self::NegativeRadicand { phase } => {
                write!(
                    f,
                    "negative radicand during {phase}: recurrence diverged (precision too low?)"
                )
            }
            Self::ZeroDivisor { phase } => {
                write!(f, "zero divisor during {phase}: catastrophic precision loss")
            }
            Self::UnexpectedForm { phase, detail } => {
                write!(f, "unexpected value during {phase}: {detail}")
            }
            Self::Provider { phase, detail } => {
                write!(f, "arithmetic provider fault during {phase}: {detail}")
            }
        }
    }
}

impl std::error::Error for PiError {}
