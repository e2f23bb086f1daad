// SPDX-License-Identifier: AGPL-3.0-only

//! quartic-pi — π to a configurable digit count via the Borwein quartic
//! recurrence.
//!
//! Pipeline: digit count → working precision ([`precision`]) → fixed-count
//! convergence recurrence over MPFR floats ([`quartic`]) → block/line/group
//! formatted text ([`render`]). Single-threaded and strictly sequential;
//! every value in one run carries the same working precision.
//!
//! ## Modules
//!   - `precision` — digit count → precision bits and iteration count
//!   - `quartic` — seed state, recurrence steps, final inversion
//!   - `render` — digit extraction and block/line/group layout
//!   - `reference` — hardcoded π digits for validation
//!   - `validation` — pass/fail harness for the validation binary
//!
//! ## Binaries
//!   - `compute_pi` — compute and print the expansion with per-phase timings
//!   - `validate_convergence` — per-iteration digit-growth checks against
//!     the reference expansion

pub mod error;
pub mod precision;
pub mod quartic;
pub mod reference;
pub mod render;
pub mod validation;

pub use error::{Phase, PiError};
pub use precision::{iterations_for, working_precision, PiConfig};
pub use quartic::{compute_pi, compute_pi_with, power4, root4, PhaseReport, QuarticState};
pub use render::{fractional_digits, render, render_fractional, RenderLayout};
