// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons in pose and easing tests.
//!
//! Re-exports the `approx` crate's assertion macros, which properly handle
//! floating-point precision issues that `assert_eq!` cannot.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;

/// Looser epsilon for values produced by iterative approximation
/// (e.g. the bezier parameter search in the easing curve).
pub const EASING_EPSILON: f32 = 1e-3;
