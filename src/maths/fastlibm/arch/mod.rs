// Architecture-specific access to the floating-point status and control
// registers. Targets without a supported register see no flags and only
// round-to-nearest.

#[cfg(target_arch = "x86_64")]
mod x86;
#[cfg(target_arch = "aarch64")]
mod aarch64;

#[cfg(target_arch = "x86_64")]
pub(crate) use x86::*;

#[cfg(target_arch = "aarch64")]
pub(crate) use aarch64::*;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
mod soft {
    pub(crate) const FE_INVALID: u32 = 0x01;
    pub(crate) const FE_DIVBYZERO: u32 = 0x04;
    pub(crate) const FE_ALL_EXCEPT: u32 = 0;

    pub(crate) const FE_TONEAREST: u32 = 0;
    pub(crate) const FE_DOWNWARD: u32 = 0x400;
    pub(crate) const FE_UPWARD: u32 = 0x800;
    pub(crate) const FE_TOWARDZERO: u32 = 0xc00;
    pub(crate) const ROUND_MASK: u32 = 0;

    #[inline(always)]
    pub(crate) fn read_status() -> u32 {
        0
    }
    #[inline(always)]
    pub(crate) fn write_status(_status: u32) {}
    #[inline(always)]
    pub(crate) fn read_control() -> u32 {
        0
    }
    #[inline(always)]
    pub(crate) fn write_control(_control: u32) {}
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub(crate) use soft::*;
