use super::logf_data::{LOGF_LN2, LOGF_POLY, LOGF_TAB, LOGF_TABLE_BITS, N};
use super::math_err::{MathError, classify_logf, divzerof, invalidf};
use super::{f32_from_bits, f32_to_bits};

// ========= logf(x) =========
//
// ULP error: 0.818 (nearest rounding).
// Relative error: 1.957 * 2^-26 (before rounding).

const OFF: u32 = 0x3f33_0000;

const ONE: u32 = 0x3f80_0000;
const MIN_NORMAL: u32 = 0x0080_0000;
const INF: u32 = 0x7f80_0000;

#[inline]
pub fn logf(x: f32) -> f32 {
    let mut ix = f32_to_bits(x);

    // Fix sign of zero with downward rounding when x == 1.
    if cfg!(feature = "fix-downward-zero") && ix == ONE {
        return 0.0;
    }

    // x < 0x1p-126 or inf or nan.
    if ix.wrapping_sub(MIN_NORMAL) >= INF - MIN_NORMAL {
        match logf_special(ix, x) {
            Ok(v) => return v,
            Err(iy) => ix = iy,
        }
    }

    // x = 2^k z; where z is in range [OFF, 2*OFF) and exact.
    // The range is split into N subintervals.
    // The ith subinterval contains z and c is near its center.
    let tmp = ix.wrapping_sub(OFF);
    let i = ((tmp >> (23 - LOGF_TABLE_BITS)) as usize) % N;
    let k = (tmp as i32) >> 23; // arithmetic shift
    let iz = ix.wrapping_sub(tmp & (0x1ff << 23));
    let entry = LOGF_TAB[i];
    let z = f32_from_bits(iz) as f64;

    // log(x) = log1p(z/c-1) + log(c) + k*Ln2
    let r = z * entry.invc - 1.0;
    let y0 = entry.logc + k as f64 * LOGF_LN2;

    // Pipelined polynomial evaluation to approximate log1p(r).
    let r2 = r * r;
    let y = LOGF_POLY[1] * r + LOGF_POLY[2];
    let y = LOGF_POLY[0] * r2 + y;
    let y = y * r2 + (y0 + r);
    y as f32
}

/// `logf` that reports the pole and domain cases as [`MathError`] instead
/// of returning `-inf` or NaN. The status flags are still raised.
#[inline]
pub fn try_logf(x: f32) -> Result<f32, MathError> {
    let y = logf(x);
    match classify_logf(x) {
        Some(err) => Err(err),
        None => Ok(y),
    }
}

/// Resolves inputs outside the positive normal range. Returns the final
/// result, or the bits of a subnormal `x` rescaled into the normal range
/// with the exponent compensated.
#[cold]
#[inline(never)]
fn logf_special(ix: u32, x: f32) -> Result<f32, u32> {
    if ix << 1 == 0 {
        return Ok(divzerof());
    }
    if ix == INF {
        return Ok(x);
    }
    if (ix & 0x8000_0000) != 0 || ix << 1 >= INF << 1 {
        return Ok(invalidf(x));
    }
    // x is subnormal, normalize it.
    let iy = f32_to_bits(x * f32_from_bits(0x4b00_0000)); // 2^23
    Err(iy.wrapping_sub(23 << 23))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_ULP_TOL: f64 = 0.82;

    fn ulp_size_f32(y: f64) -> f64 {
        let a = y.abs();
        if a < f32::MIN_POSITIVE as f64 {
            return f32::from_bits(1) as f64;
        }
        // 2^(e - 23) where 2^e <= a < 2^(e+1).
        let e = ((a.to_bits() >> 52) & 0x7ff) as i32 - 1023;
        f64::from_bits(((e - 23 + 1023) as u64) << 52)
    }

    fn ulps(x: f32) -> f64 {
        let expected = (x as f64).ln();
        let actual = logf(x) as f64;
        (actual - expected).abs() / ulp_size_f32(expected)
    }

    #[test]
    fn test_logf_one_is_positive_zero() {
        assert_eq!(logf(1.0).to_bits(), 0.0f32.to_bits());
    }

    #[test]
    fn test_logf_near_one() {
        let values = [
            0.984375, 0.99, 0.999, 1.0f32.next_down(), 1.0f32.next_up(), 1.001, 1.01, 1.0234375,
        ];
        for &x in &values {
            let e = ulps(x);
            assert!(e <= MAX_ULP_TOL, "logf({x}) failed: ulps={e}");
        }
    }

    #[test]
    fn test_logf_table_boundaries() {
        // First and last z of every subinterval, at several exponents.
        for k in [-126i32, -20, -1, 0, 1, 20, 126] {
            for i in 0..N as u32 {
                let tmp = (i << (23 - LOGF_TABLE_BITS)).wrapping_add((k as u32) << 23);
                let ix = tmp.wrapping_add(OFF);
                if ix < MIN_NORMAL || ix >= INF {
                    continue;
                }
                for b in [ix - 1, ix, ix + 1] {
                    let x = f32::from_bits(b);
                    let e = ulps(x);
                    assert!(e <= MAX_ULP_TOL, "logf({x}) at index {i} k={k}: ulps={e}");
                }
            }
        }
    }

    #[test]
    fn test_range_reduction_indices() {
        // z == OFF lands in subinterval 0 with k == 0; z == 1.0 in the identity entry.
        let tmp = OFF.wrapping_sub(OFF);
        assert_eq!((tmp >> (23 - LOGF_TABLE_BITS)) as usize % N, 0);
        let tmp = ONE.wrapping_sub(OFF);
        assert_eq!((tmp >> (23 - LOGF_TABLE_BITS)) as usize % N, 9);
        assert_eq!((tmp as i32) >> 23, 0);
        // Below OFF the exponent borrows: k == -1.
        let tmp = 0x3f00_0000u32.wrapping_sub(OFF);
        assert_eq!((tmp as i32) >> 23, -1);
    }

    #[test]
    fn test_logf_special() {
        assert_eq!(logf_special(0, 0.0), Ok(f32::NEG_INFINITY));
        assert_eq!(logf_special(0x8000_0000, -0.0), Ok(f32::NEG_INFINITY));
        assert_eq!(logf_special(INF, f32::INFINITY), Ok(f32::INFINITY));
        assert!(matches!(logf_special(0xbf80_0000, -1.0), Ok(v) if v.is_nan()));
        // Smallest subnormal: 2^-149 becomes 2^-126 scaled back by 23 binades.
        assert_eq!(
            logf_special(1, f32::from_bits(1)),
            Err(0x3f80_0000u32.wrapping_sub(149 << 23))
        );
    }

    #[test]
    fn test_try_logf() {
        assert_eq!(try_logf(1.0), Ok(0.0));
        assert_eq!(try_logf(f32::INFINITY), Ok(f32::INFINITY));
        assert_eq!(try_logf(0.0), Err(MathError::Pole));
        assert_eq!(try_logf(-0.0), Err(MathError::Pole));
        assert_eq!(try_logf(-2.0), Err(MathError::Domain));
        assert_eq!(try_logf(f32::NAN), Err(MathError::Domain));
        let v = try_logf(core::f32::consts::E).unwrap();
        assert!((v - 1.0).abs() <= f32::EPSILON);
    }
}
