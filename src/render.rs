// SPDX-License-Identifier: AGPL-3.0-only

//! Decimal rendering of the computed value.
//!
//! Output contract: `3.` followed by the fractional digits in fixed-size
//! blocks separated by spaces, fixed-size lines, and a blank line between
//! every line group. Digit extraction validates the value's shape — a
//! negative, non-finite, or wrongly-scaled result is a fault here, never
//! silent text.

use rug::Float;

use crate::error::{Phase, PiError};

/// Block/line/group sizes for the printed expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLayout {
    /// Digits per space-separated block.
    pub block_size: usize,
    /// Digits per line.
    pub line_size: usize,
    /// Lines per group; a blank line separates groups.
    pub group_size: usize,
}

impl Default for RenderLayout {
    fn default() -> Self {
        Self {
            block_size: 10,
            line_size: 100,
            group_size: 5,
        }
    }
}

/// Extract exactly `digits` fractional decimal digits of `pi`.
///
/// The digit string is correctly rounded in its last place (provider
/// semantics), not truncated. Fails if the value is not of the form
/// 3.something — that shape is the engine's postcondition, and violating it
/// means the run produced garbage.
pub fn fractional_digits(pi: &Float, digits: u64) -> Result<String, PiError> {
    let phase = Phase::Rendering;
    if digits == 0 {
        return Err(PiError::InvalidDigitCount);
    }
    if !pi.is_finite() {
        return Err(PiError::UnexpectedForm {
            phase,
            detail: "value is not finite".to_string(),
        });
    }
    let significant = digits
        .checked_add(1)
        .and_then(|d| usize::try_from(d).ok())
        .ok_or(PiError::PrecisionOverflow { digits })?;

    let (negative, digit_string, exp) = pi.to_sign_string_exp(10, Some(significant));
    if negative {
        return Err(PiError::UnexpectedForm {
            phase,
            detail: "value is negative".to_string(),
        });
    }
    if exp != Some(1) {
        return Err(PiError::UnexpectedForm {
            phase,
            detail: format!("decimal exponent {exp:?}, expected 1"),
        });
    }
    if !digit_string.starts_with('3') {
        return Err(PiError::UnexpectedForm {
            phase,
            detail: "leading digit is not 3".to_string(),
        });
    }
    Ok(digit_string[1..].to_string())
}

/// Render `digits` fractional digits of `pi` under `layout`.
pub fn render(pi: &Float, digits: u64, layout: &RenderLayout) -> Result<String, PiError> {
    let frac = fractional_digits(pi, digits)?;
    Ok(render_fractional(&frac, layout))
}

/// Lay out an already-extracted fractional digit string.
///
/// The first line carries the `3.` prefix; continuation lines are indented
/// two columns to align the digits. Blank lines separate groups but never
/// trail the output.
#[must_use]
pub fn render_fractional(frac: &str, layout: &RenderLayout) -> String {
    let block = layout.block_size.max(1);
    let line = layout.line_size.max(1);
    let group = layout.group_size.max(1);

    let mut out = String::with_capacity(frac.len() + frac.len() / block + 8);
    for (li, chunk) in frac.as_bytes().chunks(line).enumerate() {
        if li > 0 && li % group == 0 {
            out.push('\n');
        }
        out.push_str(if li == 0 { "3." } else { "  " });
        for (bi, digits) in chunk.chunks(block).enumerate() {
            if bi > 0 {
                out.push(' ');
            }
            for &b in digits {
                out.push(char::from(b));
            }
        }
        out.push('\n');
    }
    out
}
