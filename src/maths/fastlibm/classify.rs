use super::f32_to_bits;

pub const FP_NAN: i32 = 0;
pub const FP_INFINITE: i32 = 1;
pub const FP_ZERO: i32 = 2;
pub const FP_SUBNORMAL: i32 = 3;
pub const FP_NORMAL: i32 = 4;

const SIGN_MASK: u32 = 0x8000_0000;
const EXP_MASK: u32 = 0x7f80_0000;
const MANT_MASK: u32 = 0x007f_ffff;

#[inline(always)]
pub fn isinff(x: f32) -> bool {
    (f32_to_bits(x) & !SIGN_MASK) == EXP_MASK
}

#[inline(always)]
pub fn isnanf(x: f32) -> bool {
    (f32_to_bits(x) & !SIGN_MASK) > EXP_MASK
}

#[inline(always)]
pub fn signbitf(x: f32) -> bool {
    (f32_to_bits(x) & SIGN_MASK) != 0
}

#[inline(always)]
pub fn fpclassifyf(x: f32) -> i32 {
    let u = f32_to_bits(x);
    let e = u & EXP_MASK;
    let mant = u & MANT_MASK;
    if e == EXP_MASK {
        if mant == 0 { FP_INFINITE } else { FP_NAN }
    } else if e == 0 {
        if mant == 0 { FP_ZERO } else { FP_SUBNORMAL }
    } else {
        FP_NORMAL
    }
}
