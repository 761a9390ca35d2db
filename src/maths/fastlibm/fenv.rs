//! Floating-point environment: the `<fenv.h>` subset needed to observe the
//! status flags [`logf`](super::logf) raises and to run it under a directed
//! rounding mode.
//!
//! Flag and rounding-mode values are target-specific, as in C. On targets
//! without a supported FP register, no exception is ever reported and only
//! [`FE_TONEAREST`] is accepted.
//!
//! Rust assumes the default environment: round-to-nearest, with flags never
//! observed. Functions that write FP state are therefore `unsafe`. Reading is
//! safe, but only operations on values passed through
//! [`core::hint::black_box`] are reliably ordered against a read:
//!
//! ```
//! use core::hint::black_box;
//! use fastlogf::fastlibm::{self, fenv};
//!
//! // Safety: only flag bits are cleared; the rounding mode is untouched.
//! unsafe { fenv::feclearexcept(fenv::FE_ALL_EXCEPT) };
//! let y = black_box(fastlibm::logf(black_box(0.0)));
//! assert_eq!(y, f32::NEG_INFINITY);
//! if cfg!(any(target_arch = "x86_64", target_arch = "aarch64")) {
//!     assert_ne!(fenv::fetestexcept(fenv::FE_DIVBYZERO), 0);
//! }
//! ```

use super::arch;

pub const FE_INVALID: u32 = arch::FE_INVALID;
pub const FE_DIVBYZERO: u32 = arch::FE_DIVBYZERO;
/// Every exception flag the target reports.
pub const FE_ALL_EXCEPT: u32 = arch::FE_ALL_EXCEPT;

pub const FE_TONEAREST: u32 = arch::FE_TONEAREST;
pub const FE_DOWNWARD: u32 = arch::FE_DOWNWARD;
pub const FE_UPWARD: u32 = arch::FE_UPWARD;
pub const FE_TOWARDZERO: u32 = arch::FE_TOWARDZERO;

/// Clears the flags in `excepts`.
///
/// # Safety
///
/// The compiler may move floating-point operations across this write, so a
/// flag raised by an operation the caller meant to run before the clear can
/// survive it, and vice versa. Callers must only clear flags around values
/// routed through [`core::hint::black_box`] and must not rely on the flags
/// of any other code.
#[inline]
pub unsafe fn feclearexcept(excepts: u32) {
    let excepts = excepts & FE_ALL_EXCEPT;
    if excepts == 0 {
        return;
    }
    arch::write_status(arch::read_status() & !excepts);
}

/// Returns the subset of `excepts` currently raised.
#[inline]
pub fn fetestexcept(excepts: u32) -> u32 {
    arch::read_status() & excepts & FE_ALL_EXCEPT
}

#[inline]
pub fn fegetround() -> u32 {
    arch::read_control() & arch::ROUND_MASK
}

/// Sets the rounding mode. Returns `false`, leaving the mode unchanged, if
/// `round` is not a mode the target supports.
///
/// # Safety
///
/// Constant-folded and compile-time arithmetic always rounds to nearest,
/// while runtime arithmetic follows the mode set here, so the same
/// expression can give different results. The caller must restore
/// [`FE_TONEAREST`] before any floating-point code it does not control runs,
/// including code on this thread after a panic.
#[inline]
pub unsafe fn fesetround(round: u32) -> bool {
    if round & !arch::ROUND_MASK != 0 {
        return false;
    }
    let control = arch::read_control();
    arch::write_control((control & !arch::ROUND_MASK) | round);
    true
}
