//! Schema of the static opcode tables.
//!
//! Every table is a `static` array of [`Node`]s; the decoder walks from the
//! one-byte table through escapes, groups and selectors until it reaches a
//! [`Node::Leaf`]. Entries are built with `const fn` builders so the whole
//! tree is laid out at compile time.

use tablewalk_core::{Access, Actions, Condition, Cpu, FlagEffects, FpuConstant, Msr, Operation};

/// How an operand is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Addressing {
    /// No operand in this slot.
    Absent,
    /// `A`: far pointer `ptr16:16/32` in the instruction stream.
    FarPtr,
    /// `C`: control register from ModRM.reg.
    CtrlReg,
    /// `D`: debug register from ModRM.reg.
    DebugReg,
    /// `T`: test register from ModRM.reg.
    TestReg,
    /// `E`: general register or memory from ModRM.rm.
    RegMem,
    /// `G`: general register from ModRM.reg.
    Gpr,
    /// `I`: immediate.
    Imm,
    /// `J`: displacement relative to the next instruction.
    Rel,
    /// `M`: memory only.
    Mem,
    /// `O`: absolute offset, no ModRM.
    MemOffset,
    /// `P`: MMX register from ModRM.reg.
    Mmx,
    /// `Q`: MMX register or memory from ModRM.rm.
    MmxMem,
    /// `R`: general register from ModRM.rm, register form only.
    RegOnly,
    /// `S`: segment register from ModRM.reg.
    SegReg,
    /// `V`: XMM register from ModRM.reg.
    Xmm,
    /// `W`: XMM register or memory from ModRM.rm.
    XmmMem,
    /// MMX register from ModRM.rm, register form only.
    MmxRm,
    /// XMM register from ModRM.rm, register form only.
    XmmRm,
    /// `X`: `DS:[rSI]`, segment overridable.
    StrSrc,
    /// `Y`: `ES:[rDI]`.
    StrDst,
    /// `DS:[rBX + AL]`.
    Xlat,
    /// General register from the low three opcode bits.
    OpReg,
    /// `ST(i)` from ModRM.rm.
    FpuStack,
    /// Fixed register, constant or system resource.
    Implicit(Fixed),
}

impl Addressing {
    /// Returns true if resolving this operand needs the ModRM byte.
    pub const fn needs_modrm(&self) -> bool {
        matches!(
            self,
            Self::CtrlReg
                | Self::DebugReg
                | Self::TestReg
                | Self::RegMem
                | Self::Gpr
                | Self::Mem
                | Self::Mmx
                | Self::MmxMem
                | Self::RegOnly
                | Self::SegReg
                | Self::Xmm
                | Self::XmmMem
                | Self::MmxRm
                | Self::XmmRm
                | Self::FpuStack
        )
    }
}

/// Operand size class; resolved to bytes against the prefixes and mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// Fixed operands carry their own size.
    Implied,
    /// Two operands of operand size (bound).
    A,
    B,
    D,
    /// 4 bytes, 8 with REX.W; 16 for an XMM register, 8 for an MMX register.
    Dq,
    Dt,
    /// x87 environment, 14 or 28 bytes.
    Fev,
    /// x87 state (fsave), 94 or 108 bytes.
    Fst1,
    /// fxsave area.
    Fst2,
    /// Size of the other operand.
    Lea,
    /// 2 bytes for memory, operand size for a register.
    Mw,
    O,
    /// Far pointer: 2 + `Z`, or 10 with REX.W.
    P,
    Pb,
    Pd,
    Ps,
    Q,
    Sd,
    /// Scalar double, 16 bytes when the other operand is memory.
    Sdo,
    Se,
    Ss,
    /// Scalar single, 16 bytes when the other operand is memory.
    Sso,
    /// Operand size: 2, 4 or 8.
    V,
    W,
    /// 2 with a 16-bit operand size, otherwise 4.
    Z,
}

/// Operands that do not come from the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixed {
    Zero,
    One,
    AllOnes,
    Cr0,
    Cs,
    Ds,
    Es,
    Fs,
    Gs,
    Ss,
    Msr(Msr),
    CpuidOutput,
    EdxEax,
    /// `dx:ax`, `edx:eax` or `rdx:rax` by operand size.
    RdxRax,
    /// `ecx:ebx`, `rcx:rbx` with REX.W.
    RcxRbx,
    /// 16-bit flags (sahf/lahf).
    Flags,
    /// Flags at operand size.
    RFlags,
    FpuConst(FpuConstant),
    FpuControl,
    FpuStatus,
    FpuTag,
    Ah,
    Al,
    Ax,
    Cl,
    Dx,
    Ecx,
    /// Accumulator at operand size.
    Acc,
    /// Accumulator at half the operand size (cbw/cwde source).
    AccHalf,
    FrameBase,
    St0,
    St1,
    Tsc,
}

/// One operand slot of an opcode entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandSpec {
    pub addressing: Addressing,
    pub size: SizeClass,
    pub access: Access,
}

impl OperandSpec {
    pub const fn is_present(&self) -> bool {
        !matches!(self.addressing, Addressing::Absent)
    }
}

/// An empty operand slot.
pub const NO_OPERAND: OperandSpec = OperandSpec {
    addressing: Addressing::Absent,
    size: SizeClass::Implied,
    access: Access::empty(),
};

/// Builds an encoded operand.
pub const fn op(addressing: Addressing, size: SizeClass, access: Access) -> OperandSpec {
    OperandSpec {
        addressing,
        size,
        access,
    }
}

/// Builds a fixed operand.
pub const fn fixed(fixed: Fixed, access: Access) -> OperandSpec {
    OperandSpec {
        addressing: Addressing::Implicit(fixed),
        size: SizeClass::Implied,
        access,
    }
}

/// Leaf descriptor for one instruction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub mnemonic: &'static str,
    pub operation: Operation,
    pub cpu: Cpu,
    pub operands: [OperandSpec; 3],
    pub condition: Option<Condition>,
    pub counter: Option<Condition>,
    pub flags: FlagEffects,
    pub taken: Actions,
    pub not_taken: Actions,
    /// Operand size defaults to 64 bits in long mode.
    pub default_64: bool,
}

impl OpcodeEntry {
    pub const fn new(mnemonic: &'static str, operation: Operation, cpu: Cpu) -> Self {
        Self {
            mnemonic,
            operation,
            cpu,
            operands: [NO_OPERAND; 3],
            condition: None,
            counter: None,
            flags: FlagEffects::empty(),
            taken: Actions::empty(),
            not_taken: Actions::empty(),
            default_64: false,
        }
    }

    /// Sets up to three operands; missing slots stay empty.
    pub const fn operands<const N: usize>(mut self, specs: [OperandSpec; N]) -> Self {
        let mut i = 0;
        while i < N && i < 3 {
            self.operands[i] = specs[i];
            i += 1;
        }
        self
    }

    pub const fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub const fn counter(mut self, counter: Condition) -> Self {
        self.counter = Some(counter);
        self
    }

    pub const fn flags(mut self, flags: FlagEffects) -> Self {
        self.flags = flags;
        self
    }

    pub const fn taken(mut self, actions: Actions) -> Self {
        self.taken = actions;
        self
    }

    pub const fn not_taken(mut self, actions: Actions) -> Self {
        self.not_taken = actions;
        self
    }

    pub const fn with_default_64(mut self) -> Self {
        self.default_64 = true;
        self
    }

    /// Operand specs that are present, in order.
    pub fn specs(&self) -> impl Iterator<Item = &OperandSpec> {
        self.operands.iter().filter(|spec| spec.is_present())
    }

    /// Returns true if any operand needs the ModRM byte.
    pub fn needs_modrm(&self) -> bool {
        self.specs().any(|spec| spec.addressing.needs_modrm())
    }
}

/// One slot of an opcode table.
#[derive(Debug, Clone, Copy)]
pub enum Node {
    /// Undefined encoding.
    Invalid,
    /// Prefix byte, consumed before dispatch.
    Prefix,
    Leaf(OpcodeEntry),
    /// Selected by ModRM.reg.
    Group(&'static [Node; 8]),
    /// Next opcode byte indexes the table.
    TwoByteEscape(&'static [Node; 256]),
    /// The whole ModRM byte indexes the table.
    ModrmEscape(&'static [Node; 256]),
    /// x87: ModRM.reg for memory forms, `8 + (modrm - 0xC0)` for register forms.
    FpuEscape(&'static [Node; 0x48]),
    /// Selected by a mandatory `66`/`F2`/`F3` prefix.
    PrefixSelected(&'static PrefixSelect),
    /// Selected by a byte following the ModRM operands (3DNow).
    SuffixSelected(&'static SuffixTable),
    /// Index 0 outside long mode, 1 in 64-bit mode.
    ModeGated(&'static [OpcodeEntry; 2]),
    /// Index 0 without REX.B, 1 with it.
    RexBGated(&'static [OpcodeEntry; 2]),
}

/// Variants of an opcode keyed on its mandatory prefix.
#[derive(Debug)]
pub struct PrefixSelect {
    /// Used when no mandatory prefix matches.
    pub plain: Node,
    /// Variants for `66`, `F2`, `F3`, in that order.
    pub prefixed: [Node; 3],
}

impl PrefixSelect {
    /// Index into `prefixed` for a mandatory prefix byte.
    pub fn slot(prefix: u8) -> Option<usize> {
        match prefix {
            0x66 => Some(0),
            0xF2 => Some(1),
            0xF3 => Some(2),
            _ => None,
        }
    }
}

/// Opcode whose operation is chosen by a trailing byte.
#[derive(Debug)]
pub struct SuffixTable {
    /// Data operands decoded before the suffix byte.
    pub operands: [OperandSpec; 3],
    pub entries: [Node; 256],
}

#[cfg(test)]
mod tests {
    use super::Addressing::*;
    use super::SizeClass::*;
    use super::*;

    const ADD: OpcodeEntry = OpcodeEntry::new("add", Operation::Add, Cpu::I386)
        .operands([op(RegMem, V, Access::DST), op(Gpr, V, Access::SRC)])
        .flags(FlagEffects::COMMON_MOD);

    #[test]
    fn test_operands_builder_pads_slots() {
        assert_eq!(ADD.operands[0], op(RegMem, V, Access::DST));
        assert_eq!(ADD.operands[2], NO_OPERAND);
        assert_eq!(ADD.specs().count(), 2);
        assert!(ADD.needs_modrm());
    }

    #[test]
    fn test_fixed_operands_need_no_modrm() {
        let entry = OpcodeEntry::new("push", Operation::Push, Cpu::I386)
            .operands([fixed(Fixed::Es, Access::SRC)])
            .with_default_64();
        assert!(!entry.needs_modrm());
        assert!(entry.default_64);
    }

    #[test]
    fn test_prefix_slots() {
        assert_eq!(PrefixSelect::slot(0x66), Some(0));
        assert_eq!(PrefixSelect::slot(0xF3), Some(2));
        assert_eq!(PrefixSelect::slot(0xF0), None);
    }
}
