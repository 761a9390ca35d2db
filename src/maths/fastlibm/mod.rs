#![allow(clippy::excessive_precision)]
#![allow(clippy::unusual_byte_groupings)]

mod arch;
mod classify;
pub mod fenv;
mod logf;
mod logf_data;
mod math_err;

pub use classify::{
    FP_INFINITE, FP_NAN, FP_NORMAL, FP_SUBNORMAL, FP_ZERO, fpclassifyf, isinff, isnanf, signbitf,
};
pub use logf::{logf, try_logf};
pub use logf_data::{LOGF_POLY_ORDER, LOGF_TABLE_BITS};
pub use math_err::{MathError, classify_logf};

// ========= bit helpers =========

#[inline(always)]
const fn f32_from_bits(u: u32) -> f32 {
    f32::from_bits(u)
}
#[inline(always)]
const fn f32_to_bits(x: f32) -> u32 {
    x.to_bits()
}

#[inline(always)]
const fn f64_from_bits(u: u64) -> f64 {
    f64::from_bits(u)
}
