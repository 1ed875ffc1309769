//! Bit sets attached to opcode entries: flag effects, side-effect actions
//! and per-operand access flags.

use bitflags::bitflags;

bitflags! {
    /// Effect of an instruction on EFLAGS and the x87 condition codes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct FlagEffects: u32 {
        const OF_MOD = 1 << 0;
        const OF_CLR = 1 << 1;
        const SF_MOD = 1 << 2;
        const SF_CLR = 1 << 3;
        const ZF_MOD = 1 << 4;
        const AF_MOD = 1 << 5;
        const AF_CLR = 1 << 6;
        const PF_MOD = 1 << 7;
        const CF_MOD = 1 << 8;
        const CF_CLR = 1 << 9;
        const CF_SET = 1 << 10;
        const CF_TOG = 1 << 11;
        const DF_MOD = 1 << 12;
        const DF_CLR = 1 << 13;
        const DF_SET = 1 << 14;
        const IF_MOD = 1 << 15;
        const IF_CLR = 1 << 16;
        const IF_SET = 1 << 17;

        const FPU_C0_MOD = 1 << 20;
        const FPU_C1_MOD = 1 << 21;
        const FPU_C2_MOD = 1 << 22;
        const FPU_C3_MOD = 1 << 23;
        const FPU_ALL_CLR = 1 << 24;
        const FPU_ALL_MOD = Self::FPU_C0_MOD.bits()
            | Self::FPU_C1_MOD.bits()
            | Self::FPU_C2_MOD.bits()
            | Self::FPU_C3_MOD.bits();

        /// The six arithmetic status flags.
        const COMMON_MOD = Self::OF_MOD.bits()
            | Self::SF_MOD.bits()
            | Self::ZF_MOD.bits()
            | Self::AF_MOD.bits()
            | Self::PF_MOD.bits()
            | Self::CF_MOD.bits();
        /// Status flags plus DF and IF (popf, iret).
        const ALL_MOD = Self::COMMON_MOD.bits() | Self::DF_MOD.bits() | Self::IF_MOD.bits();

        /// and/or/xor/test.
        const LOGIC_MOD = Self::OF_CLR.bits()
            | Self::SF_MOD.bits()
            | Self::ZF_MOD.bits()
            | Self::PF_MOD.bits()
            | Self::CF_CLR.bits();
        /// inc/dec leave CF alone.
        const INC_DEC_MOD = Self::OF_MOD.bits()
            | Self::SF_MOD.bits()
            | Self::ZF_MOD.bits()
            | Self::AF_MOD.bits()
            | Self::PF_MOD.bits();
        const SHIFT_MOD = Self::SF_MOD.bits()
            | Self::ZF_MOD.bits()
            | Self::PF_MOD.bits()
            | Self::CF_MOD.bits();
        /// fcomi family: compares into ZF/PF/CF.
        const FPU_COMI_MOD = Self::ZF_MOD.bits()
            | Self::PF_MOD.bits()
            | Self::CF_MOD.bits()
            | Self::FPU_ALL_MOD.bits();
        /// comiss family: ZF/PF/CF set, OF/SF/AF cleared.
        const SSE_COMI_MOD = Self::ZF_MOD.bits()
            | Self::PF_MOD.bits()
            | Self::CF_MOD.bits()
            | Self::OF_CLR.bits()
            | Self::SF_CLR.bits()
            | Self::AF_CLR.bits();
    }
}

impl FlagEffects {
    /// Returns true if any EFLAGS bit (not x87 condition code) is touched.
    pub fn touches_eflags(&self) -> bool {
        self.bits() & 0x000F_FFFF != 0
    }
}

bitflags! {
    /// Side effects applied when an instruction's condition is taken or not.
    ///
    /// `_SIZED` variants step the index register by the operand size rather
    /// than by one byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Actions: u32 {
        const XDI_INC = 1 << 0;
        const XDI_DEC = 1 << 1;
        const XDI_INC_SIZED = 1 << 2;
        const XDI_DEC_SIZED = 1 << 3;
        const XSI_INC = 1 << 4;
        const XSI_DEC = 1 << 5;
        const XSI_INC_SIZED = 1 << 6;
        const XSI_DEC_SIZED = 1 << 7;
        const XCX_DEC = 1 << 8;
        const XCX_REP_DEC = 1 << 9;

        const OP1_DST = 1 << 12;
        const OP1_SRC = 1 << 13;
        const OP2_DST = 1 << 14;
        const OP2_SRC = 1 << 15;
        const OP3_SRC = 1 << 16;

        const FPU_STACK_PUSH = 1 << 20;
        const FPU_STACK_POP = 1 << 21;
        const FPU_STACK_POP2 = 1 << 22;
        const FPU_STACK_INC = 1 << 23;
        const FPU_STACK_DEC = 1 << 24;

        const SERIALIZE_READ = 1 << 28;
        const SERIALIZE_WRITE = 1 << 29;
        const SERIALIZE_ALL = Self::SERIALIZE_READ.bits() | Self::SERIALIZE_WRITE.bits();
    }
}

bitflags! {
    /// How an instruction uses one of its operands.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Access: u16 {
        const SRC = 1 << 0;
        const DST = 1 << 1;
        /// Immediate or operand is sign-extended.
        const SIGNED = 1 << 2;
        /// Read only when the condition holds.
        const COND_SRC = 1 << 3;
        /// Written only when the condition holds.
        const COND_DST = 1 << 4;
        /// Control transfers here only when the condition holds.
        const COND_EXEC = 1 << 5;
        /// Control transfers here.
        const EXEC = 1 << 6;
        /// System resource (I/O port, performance counter).
        const SYS = 1 << 7;
        /// Model-specific register access.
        const MSR = 1 << 8;
    }
}

impl Access {
    /// Returns true if the operand may be read.
    pub fn reads(&self) -> bool {
        self.intersects(Self::SRC | Self::COND_SRC)
    }

    /// Returns true if the operand may be written.
    pub fn writes(&self) -> bool {
        self.intersects(Self::DST | Self::COND_DST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_flag_sets() {
        assert!(FlagEffects::COMMON_MOD.contains(FlagEffects::CF_MOD));
        assert!(!FlagEffects::INC_DEC_MOD.contains(FlagEffects::CF_MOD));
        assert!(FlagEffects::ALL_MOD.contains(FlagEffects::COMMON_MOD | FlagEffects::DF_MOD));
        assert!(FlagEffects::FPU_COMI_MOD.touches_eflags());
        assert!(!FlagEffects::FPU_C1_MOD.touches_eflags());
    }

    #[test]
    fn test_access_helpers() {
        assert!(Access::SRC.reads());
        assert!((Access::SRC | Access::DST).writes());
        assert!(Access::COND_DST.writes());
        assert!(!Access::EXEC.reads());
    }
}
