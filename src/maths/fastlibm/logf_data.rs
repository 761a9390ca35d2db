// ========= logf tables (N=16, poly order 4) =========
//
// Generated offline for OFF = 0x3f330000: subinterval i of [OFF, 2*OFF)
// has a center c with invc = 1/c, and logc = -ln(invc) rounded so that
// logc + k*LN2 + r stays within 1.957 * 2^-26 relative error before the
// final rounding to f32. Regenerate all of it if LOGF_TABLE_BITS changes.

use super::f64_from_bits;

pub const LOGF_TABLE_BITS: u32 = 4;
pub const LOGF_POLY_ORDER: u32 = 4;

pub(crate) const N: usize = 1 << LOGF_TABLE_BITS;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LogfEntry {
    pub(crate) invc: f64,
    pub(crate) logc: f64,
}

const fn entry(invc: u64, logc: u64) -> LogfEntry {
    LogfEntry {
        invc: f64_from_bits(invc),
        logc: f64_from_bits(logc),
    }
}

pub(crate) const LOGF_TAB: [LogfEntry; N] = [
    entry(0x3ff6_61ec_79f8_f3be, 0xbfd5_7bf7_808c_aade),
    entry(0x3ff5_71ed_4aaf_883d, 0xbfd2_bef0_a7c0_6ddb),
    entry(0x3ff4_9539_f0f0_10b0, 0xbfd0_1eae_7f51_3a67),
    entry(0x3ff3_c995_b0b8_0385, 0xbfcb_31d8_a682_24e9),
    entry(0x3ff3_0d19_0c88_64a5, 0xbfc6_574f_0ac0_7758),
    entry(0x3ff2_5e22_7b0b_8ea0, 0xbfc1_aa2b_c79c_8100),
    entry(0x3ff1_bb4a_4a1a_343f, 0xbfba_4e76_ce8c_0e5e),
    entry(0x3ff1_2358_f08a_e5ba, 0xbfb1_973c_5a61_1ccc),
    entry(0x3ff0_953f_4199_00a7, 0xbfa2_52f4_38e1_0c1e),
    entry(0x3ff0_0000_0000_0000, 0x0000_0000_0000_0000),
    entry(0x3fee_608c_fd9a_47ac, 0x3faa_a5aa_5df2_5984),
    entry(0x3fec_a4b3_1f02_6aa0, 0x3fbc_5e53_aa36_2eb4),
    entry(0x3feb_2036_576a_fce6, 0x3fc5_26e5_7720_db08),
    entry(0x3fe9_c2d1_63a1_aa2d, 0x3fcb_c286_0d22_4770),
    entry(0x3fe8_86e6_0378_41ed, 0x3fd1_058b_c8a0_7ee1),
    entry(0x3fe7_67dc_f553_4862, 0x3fd4_0430_57b6_ee09),
];

pub(crate) const LOGF_LN2: f64 = f64_from_bits(0x3fe6_2e42_fefa_39ef);

// Coefficients of r^4, r^3, r^2 for log1p(r) - r on |r| < 0x1.23p-5.
pub(crate) const LOGF_POLY: [f64; (LOGF_POLY_ORDER - 1) as usize] = [
    f64_from_bits(0xbfd0_0ea3_48b8_8334),
    f64_from_bits(0x3fd5_575b_0be0_0b6a),
    f64_from_bits(0xbfdf_fffe_f20a_4123),
];
