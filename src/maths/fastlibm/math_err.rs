//! Error values for the logarithm's pole and domain cases.
//!
//! The special results are produced by real floating-point operations so that
//! the FPU raises the matching IEEE-754 status flag (see [`super::fenv`]).
//! [`MathError`] names the same two conditions as a Rust value.

use core::fmt;
use core::hint::black_box;

use super::classify::{FP_INFINITE, FP_NAN, FP_ZERO, fpclassifyf, signbitf};

/// The two error classes a logarithm can hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MathError {
    /// Exact infinite result from a finite input (log of ±0). Raises
    /// divide-by-zero.
    Pole,
    /// Input outside the function's domain (negative or NaN). Raises invalid
    /// for anything but a quiet NaN.
    Domain,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::Pole => f.write_str("pole error: logarithm of zero"),
            MathError::Domain => f.write_str("domain error: logarithm of a negative number or NaN"),
        }
    }
}

impl core::error::Error for MathError {}

/// Reports which error, if any, `logf(x)` signals.
#[inline]
pub fn classify_logf(x: f32) -> Option<MathError> {
    match fpclassifyf(x) {
        FP_ZERO => Some(MathError::Pole),
        FP_NAN => Some(MathError::Domain),
        FP_INFINITE if signbitf(x) => Some(MathError::Domain),
        FP_INFINITE => None,
        _ if signbitf(x) => Some(MathError::Domain),
        _ => None,
    }
}

/// `-inf` with divide-by-zero raised.
#[cold]
#[inline(never)]
pub(crate) fn divzerof() -> f32 {
    black_box(-1.0f32) / 0.0
}

/// NaN with invalid raised, unless `x` is already a quiet NaN.
#[cold]
#[inline(never)]
pub(crate) fn invalidf(x: f32) -> f32 {
    let x = black_box(x);
    (x - x) / (x - x)
}
