// Flags in FPSR, rounding mode in FPCR. The asm blocks are not `nomem` so
// they stay ordered against memory accesses, as the MXCSR ones on x86 are.
use core::arch::asm;

pub(crate) const FE_INVALID: u32 = 0x01;
pub(crate) const FE_DIVBYZERO: u32 = 0x02;
pub(crate) const FE_ALL_EXCEPT: u32 = 0x1f;

// FPCR.RMode, bits 22..23.
pub(crate) const FE_TONEAREST: u32 = 0x0000_0000;
pub(crate) const FE_UPWARD: u32 = 0x0040_0000;
pub(crate) const FE_DOWNWARD: u32 = 0x0080_0000;
pub(crate) const FE_TOWARDZERO: u32 = 0x00c0_0000;
pub(crate) const ROUND_MASK: u32 = 0x00c0_0000;

#[inline(always)]
pub(crate) fn read_status() -> u32 {
    let fpsr: u64;
    // Safety: reading FPSR has no side effects.
    unsafe {
        asm!("mrs {}, fpsr", out(reg) fpsr, options(nostack, preserves_flags));
    }
    fpsr as u32
}

#[inline(always)]
pub(crate) fn write_status(status: u32) {
    // Safety: FPSR only holds sticky flags and saturation; callers clear bits.
    unsafe {
        asm!("msr fpsr, {}", in(reg) status as u64, options(nostack, preserves_flags));
    }
}

#[inline(always)]
pub(crate) fn read_control() -> u32 {
    let fpcr: u64;
    // Safety: reading FPCR has no side effects.
    unsafe {
        asm!("mrs {}, fpcr", out(reg) fpcr, options(nostack, preserves_flags));
    }
    fpcr as u32
}

#[inline(always)]
pub(crate) fn write_control(control: u32) {
    // Safety: only RMode is changed relative to a value read from FPCR.
    unsafe {
        asm!("msr fpcr, {}", in(reg) control as u64, options(nostack, preserves_flags));
    }
}
