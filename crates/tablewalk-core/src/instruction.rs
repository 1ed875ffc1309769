//! Decoded instruction representation.

use crate::{
    Access, Actions, Cpu, FlagEffects, Mode, ModRmFields, Operand, PrefixSet, SibFields,
};

/// A single decoded instruction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    /// Virtual address of this instruction.
    pub address: u64,
    /// Size in bytes (1..=15).
    pub size: usize,
    /// Raw bytes of the instruction.
    pub bytes: Vec<u8>,
    /// Mode the instruction was decoded in.
    pub mode: Mode,
    /// Prefixes still in effect.
    pub prefixes: PrefixSet,
    /// `66`/`F2`/`F3` consumed to select an SSE variant.
    pub mandatory_prefix: Option<u8>,
    /// Opcode bytes, including `0F` escapes and a 3DNow suffix.
    pub opcode: Vec<u8>,
    /// ModRM fields, reg/rm extended by REX.R/REX.B.
    pub modrm: Option<ModRmFields>,
    /// SIB fields, index/base extended by REX.X/REX.B.
    pub sib: Option<SibFields>,
    /// High-level operation category.
    pub operation: Operation,
    /// Mnemonic string (e.g., "mov", "cmpxchg8b").
    pub mnemonic: String,
    /// Oldest processor generation implementing this opcode.
    pub cpu: Cpu,
    /// Operands (destination first, then sources).
    pub operands: Vec<Operand>,
    /// Access flags, parallel to `operands`.
    pub operand_access: Vec<Access>,
    /// Flag condition the instruction depends on.
    pub condition: Option<Condition>,
    /// Counter condition (loop/jcxz), tested together with `condition`.
    pub counter: Option<Condition>,
    /// Effect on EFLAGS and the x87 condition codes.
    pub flags: FlagEffects,
    /// Side effects when the condition holds (or unconditionally).
    pub taken: Actions,
    /// Side effects when the condition does not hold.
    pub not_taken: Actions,
    /// Control flow information.
    pub control_flow: ControlFlow,
    /// Rendered assembly, only filled when formatting was requested.
    pub text: Option<String>,
}

impl Instruction {
    /// Creates an empty instruction at `address`.
    pub fn new(address: u64, mode: Mode) -> Self {
        Self {
            address,
            size: 0,
            bytes: Vec::new(),
            mode,
            prefixes: PrefixSet::default(),
            mandatory_prefix: None,
            opcode: Vec::new(),
            modrm: None,
            sib: None,
            operation: Operation::Other,
            mnemonic: String::new(),
            cpu: Cpu::default(),
            operands: Vec::new(),
            operand_access: Vec::new(),
            condition: None,
            counter: None,
            flags: FlagEffects::empty(),
            taken: Actions::empty(),
            not_taken: Actions::empty(),
            control_flow: ControlFlow::Sequential,
            text: None,
        }
    }

    /// Resets every field, keeping allocated buffers.
    pub fn reset(&mut self, address: u64, mode: Mode) {
        self.address = address;
        self.size = 0;
        self.bytes.clear();
        self.mode = mode;
        self.prefixes = PrefixSet::default();
        self.mandatory_prefix = None;
        self.opcode.clear();
        self.modrm = None;
        self.sib = None;
        self.operation = Operation::Other;
        self.mnemonic.clear();
        self.cpu = Cpu::default();
        self.operands.clear();
        self.operand_access.clear();
        self.condition = None;
        self.counter = None;
        self.flags = FlagEffects::empty();
        self.taken = Actions::empty();
        self.not_taken = Actions::empty();
        self.control_flow = ControlFlow::Sequential;
        self.text = None;
    }

    /// Returns the end address (address + size).
    pub fn end_address(&self) -> u64 {
        self.address.wrapping_add(self.size as u64)
    }

    /// Target of a relative branch, call or loop.
    pub fn branch_target(&self) -> Option<u64> {
        self.operands.iter().find_map(|op| match op {
            Operand::PcRelative { target, .. } => Some(*target),
            _ => None,
        })
    }

    /// Operands the instruction may write.
    pub fn destinations(&self) -> impl Iterator<Item = &Operand> {
        self.operands
            .iter()
            .zip(&self.operand_access)
            .filter(|(_, access)| access.writes())
            .map(|(op, _)| op)
    }

    /// Operands the instruction may read.
    pub fn sources(&self) -> impl Iterator<Item = &Operand> {
        self.operands
            .iter()
            .zip(&self.operand_access)
            .filter(|(_, access)| access.reads())
            .map(|(op, _)| op)
    }

    /// Returns true if this instruction is a branch (jump/call).
    pub fn is_branch(&self) -> bool {
        !matches!(
            self.control_flow,
            ControlFlow::Sequential | ControlFlow::Syscall | ControlFlow::Halt
        )
    }

    /// Returns true if this instruction is a call.
    pub fn is_call(&self) -> bool {
        matches!(
            self.control_flow,
            ControlFlow::Call { .. } | ControlFlow::IndirectCall { .. }
        )
    }

    /// Returns true if this instruction is a return.
    pub fn is_return(&self) -> bool {
        matches!(self.control_flow, ControlFlow::Return)
    }

    /// Returns true if this instruction terminates a basic block.
    pub fn is_terminator(&self) -> bool {
        !matches!(self.control_flow, ControlFlow::Sequential)
    }

    /// Writes prefixes, mnemonic and operands, without address or bytes.
    pub fn write_assembly(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        if self.prefixes.lock {
            f.write_str("lock ")?;
        }
        if self.prefixes.rep {
            f.write_str("rep ")?;
        } else if self.prefixes.repne {
            f.write_str("repne ")?;
        }
        f.write_str(&self.mnemonic)?;

        for (i, op) in self.operands.iter().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            write!(f, "{}", op)?;
        }
        Ok(())
    }

    /// Returns the assembly text (see [`Instruction::write_assembly`]).
    pub fn assembly(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_assembly(&mut out);
        out
    }
}

/// High-level operation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    // Data movement
    Move,
    ConditionalMove,
    Push,
    Pop,
    PushAll,
    PopAll,
    PushFlags,
    PopFlags,
    Exchange,
    LoadEffectiveAddress,
    SignExtendAccumulator,
    Translate,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Inc,
    Dec,
    ExchangeAdd,
    CompareExchange,
    /// adc/sbb/salc and friends.
    Arithmetic,
    BcdAdjust,

    // Logical
    And,
    Or,
    Xor,
    Not,
    Shl,
    Shr,
    Rol,
    Ror,
    BitTest,

    // Comparison
    Compare,
    Test,
    BoundCheck,

    // Flag manipulation
    ClearCarry,
    SetCarry,
    ComplementCarry,
    ClearDirection,
    SetDirection,
    ClearInterrupt,
    SetInterrupt,

    // Control flow
    Jump,
    ConditionalJump,
    Call,
    Return,
    Loop,
    Enter,
    Leave,

    // Strings
    StringMove,
    StringCompare,
    StringLoad,
    StringStore,

    // System
    Syscall,
    SyscallReturn,
    Interrupt,
    InterruptReturn,
    OverflowTrap,
    Breakpoint,
    PortIn,
    PortOut,
    Cpuid,
    System,
    Nop,
    Halt,
    Undefined,

    // x87
    Fpu,
    FpuAdd,
    FpuSub,
    FpuMul,
    FpuDiv,
    FpuCompare,
    FpuExchange,
    FpuLoad,
    FpuStore,
    FpuLoadEnvironment,
    FpuConditionalMove,
    FpuSave,
    FpuRestore,

    // MMX
    Mmx,
    MmxAdd,
    MmxSub,
    MmxMul,
    MmxAnd,
    MmxOr,
    MmxXor,
    MmxCompare,
    MmxMove,

    // SSE
    Sse,
    SseAdd,
    SseSub,
    SseMul,
    SseDiv,
    SseAnd,
    SseOr,
    SseXor,
    SseCompare,
    SseMove,

    // SSE2
    Sse2,
    Sse2Add,
    Sse2Sub,
    Sse2Mul,
    Sse2Div,
    Sse2And,
    Sse2Or,
    Sse2Xor,
    Sse2Compare,
    Sse2Move,

    // SSE3
    Sse3,
    Sse3Add,
    Sse3Sub,
    Sse3Move,

    // 3DNow
    Amd3dNow,
    Amd3dNowAdd,
    Amd3dNowSub,
    Amd3dNowMul,
    Amd3dNowCompare,
    Amd3dNowExchange,

    // Other
    Other,
}

/// Condition an instruction's effect depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    // Unsigned comparisons
    Equal,
    NotEqual,
    Above, // CF=0 and ZF=0
    AboveOrEqual, // CF=0
    Below, // CF=1
    BelowOrEqual, // CF=1 or ZF=1

    // Signed comparisons
    Greater, // ZF=0 and SF=OF
    GreaterOrEqual, // SF=OF
    Less, // SF!=OF
    LessOrEqual, // ZF=1 or SF!=OF

    // Flag-based
    Sign, // SF=1
    NotSign, // SF=0
    Overflow, // OF=1
    NotOverflow, // OF=0
    Parity, // PF=1
    NotParity, // PF=0

    // Counter-based
    CounterZero,
    CounterNotZero,

    /// DF=1; string instructions step backwards.
    Direction,
    /// Accumulator equals the destination (cmpxchg).
    OperandsEqual,
}

impl Condition {
    /// Returns the inverse condition, if it has a named one.
    pub fn inverse(&self) -> Option<Self> {
        Some(match self {
            Self::Equal => Self::NotEqual,
            Self::NotEqual => Self::Equal,
            Self::Above => Self::BelowOrEqual,
            Self::AboveOrEqual => Self::Below,
            Self::Below => Self::AboveOrEqual,
            Self::BelowOrEqual => Self::Above,
            Self::Greater => Self::LessOrEqual,
            Self::GreaterOrEqual => Self::Less,
            Self::Less => Self::GreaterOrEqual,
            Self::LessOrEqual => Self::Greater,
            Self::Sign => Self::NotSign,
            Self::NotSign => Self::Sign,
            Self::Overflow => Self::NotOverflow,
            Self::NotOverflow => Self::Overflow,
            Self::Parity => Self::NotParity,
            Self::NotParity => Self::Parity,
            Self::CounterZero => Self::CounterNotZero,
            Self::CounterNotZero => Self::CounterZero,
            Self::Direction | Self::OperandsEqual => return None,
        })
    }
}

/// Control flow classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlFlow {
    /// Sequential - falls through to next instruction.
    Sequential,

    /// Unconditional branch to a known address.
    UnconditionalBranch {
        target: u64,
    },

    /// Conditional branch - may fall through or jump.
    ConditionalBranch {
        target: u64,
        condition: Condition,
        fallthrough: u64,
    },

    /// Indirect jump (target in register, memory or a far pointer).
    IndirectBranch,

    /// Call to a known address.
    Call {
        target: u64,
        return_addr: u64,
    },

    /// Indirect call.
    IndirectCall {
        return_addr: u64,
    },

    /// Return from procedure or interrupt.
    Return,

    /// System call or software interrupt.
    Syscall,

    /// Halts execution (hlt, ud2, etc.).
    Halt,
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010x}:  ", self.address)?;

        // Print bytes
        for byte in &self.bytes {
            write!(f, "{:02x} ", byte)?;
        }

        // Pad to align mnemonic
        for _ in self.bytes.len()..8 {
            write!(f, "   ")?;
        }

        write!(f, " ")?;
        self.write_assembly(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Immediate, Register};

    fn sample() -> Instruction {
        let mut insn = Instruction::new(0x1000, Mode::Bits32);
        insn.operands.push(Operand::reg(Register::gpr(0, 32)));
        insn.operand_access.push(Access::DST);
        insn.operands.push(Operand::Immediate(Immediate {
            value: 0x10,
            size: 32,
            signed: false,
        }));
        insn.operand_access.push(Access::SRC);
        insn.size = 5;
        insn.bytes = vec![0x05, 0x10, 0x00, 0x00, 0x00];
        insn.mnemonic = "add".into();
        insn.operation = Operation::Add;
        insn
    }

    #[test]
    fn test_assembly_text() {
        let insn = sample();
        assert_eq!(insn.assembly(), "add eax, 0x10");
        assert!(insn.to_string().starts_with("0x00001000:  05 10 00 00 00"));
        assert!(insn.to_string().ends_with("add eax, 0x10"));
    }

    #[test]
    fn test_sources_and_destinations() {
        let insn = sample();
        assert_eq!(insn.destinations().count(), 1);
        assert_eq!(insn.sources().count(), 1);
        assert!(insn.destinations().all(Operand::is_register));
    }

    #[test]
    fn test_reset_keeps_nothing() {
        let mut insn = sample();
        insn.control_flow = ControlFlow::Return;
        insn.reset(0x2000, Mode::Bits64);
        assert_eq!(insn, Instruction::new(0x2000, Mode::Bits64));
    }

    #[test]
    fn test_branch_target_and_kind() {
        let mut insn = Instruction::new(0x1000, Mode::Bits32);
        insn.operands.push(Operand::pc_rel(2, 0x1008));
        insn.operand_access.push(Access::SRC | Access::EXEC);
        insn.control_flow = ControlFlow::UnconditionalBranch { target: 0x1008 };
        insn.size = 6;
        assert_eq!(insn.branch_target(), Some(0x1008));
        assert_eq!(insn.end_address(), 0x1006);
        assert!(insn.is_branch() && insn.is_terminator() && !insn.is_call());
    }

    #[test]
    fn test_condition_inverse() {
        assert_eq!(Condition::Equal.inverse(), Some(Condition::NotEqual));
        assert_eq!(Condition::Direction.inverse(), None);
    }
}
