// SSE: flags and rounding both live in MXCSR.
use core::arch::asm;

pub(crate) const FE_INVALID: u32 = 0x01;
pub(crate) const FE_DIVBYZERO: u32 = 0x04;
pub(crate) const FE_ALL_EXCEPT: u32 = 0x3f;

// MXCSR.RC, bits 13..14.
pub(crate) const FE_TONEAREST: u32 = 0x0000;
pub(crate) const FE_DOWNWARD: u32 = 0x2000;
pub(crate) const FE_UPWARD: u32 = 0x4000;
pub(crate) const FE_TOWARDZERO: u32 = 0x6000;
pub(crate) const ROUND_MASK: u32 = 0x6000;

#[inline(always)]
fn read_mxcsr() -> u32 {
    let mut csr: u32 = 0;
    // Safety: stmxcsr stores 4 bytes into `csr` and touches nothing else.
    unsafe {
        asm!(
            "stmxcsr dword ptr [{}]",
            in(reg) core::ptr::addr_of_mut!(csr),
            options(nostack, preserves_flags)
        );
    }
    csr
}

#[inline(always)]
fn write_mxcsr(csr: u32) {
    // Safety: every value reaching here came from read_mxcsr with only the
    // flag or RC bits changed, so no reserved bit is set.
    unsafe {
        asm!(
            "ldmxcsr dword ptr [{}]",
            in(reg) core::ptr::addr_of!(csr),
            options(nostack, preserves_flags, readonly)
        );
    }
}

#[inline(always)]
pub(crate) fn read_status() -> u32 {
    read_mxcsr()
}
#[inline(always)]
pub(crate) fn write_status(status: u32) {
    write_mxcsr(status)
}
#[inline(always)]
pub(crate) fn read_control() -> u32 {
    read_mxcsr()
}
#[inline(always)]
pub(crate) fn write_control(control: u32) {
    write_mxcsr(control)
}
