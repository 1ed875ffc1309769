//! Instruction operand types.

use crate::{Register, RegisterClass};

/// An instruction operand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// Register operand.
    Register(Register),
    /// Immediate value.
    Immediate(Immediate),
    /// Memory reference.
    Memory(MemoryRef),
    /// PC-relative address (used in branches/calls).
    PcRelative {
        /// Offset from the end of the instruction.
        offset: i64,
        /// Resolved target address, truncated to the mode's width.
        target: u64,
    },
    /// Far pointer `selector:offset` (call/jmp ptr16:16/32).
    FarPointer {
        selector: u16,
        offset: u32,
    },
    /// Resource that is not addressable through a general operand.
    Implicit(Resource),
}

impl Operand {
    /// Creates a register operand.
    pub fn reg(reg: Register) -> Self {
        Self::Register(reg)
    }

    /// Creates a sign-extended immediate operand; `size` is in bits.
    pub fn imm(value: i64, size: u8) -> Self {
        Self::Immediate(Immediate {
            value,
            size,
            signed: true,
        })
    }

    /// Creates an unsigned immediate operand; `size` is in bits.
    pub fn imm_unsigned(value: u64, size: u8) -> Self {
        Self::Immediate(Immediate {
            value: value as i64,
            size,
            signed: false,
        })
    }

    /// Creates a PC-relative operand.
    pub fn pc_rel(offset: i64, target: u64) -> Self {
        Self::PcRelative { offset, target }
    }

    /// Returns true if this is a register operand.
    pub fn is_register(&self) -> bool {
        matches!(self, Self::Register(_))
    }

    /// Returns true if this is an immediate operand.
    pub fn is_immediate(&self) -> bool {
        matches!(self, Self::Immediate(_))
    }

    /// Returns true if this is a memory operand.
    pub fn is_memory(&self) -> bool {
        matches!(self, Self::Memory(_))
    }

    /// Returns the memory reference, if any.
    pub fn as_memory(&self) -> Option<&MemoryRef> {
        match self {
            Self::Memory(mem) => Some(mem),
            _ => None,
        }
    }

    /// Operand width in bytes, when it has one.
    pub fn size_bytes(&self) -> Option<u16> {
        match self {
            Self::Register(reg) => Some(reg.size.div_ceil(8)),
            Self::Immediate(imm) => Some(u16::from(imm.size / 8)),
            Self::Memory(mem) => Some(mem.size),
            _ => None,
        }
    }
}

/// Immediate value operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Immediate {
    /// The value, sign- or zero-extended according to `signed`.
    pub value: i64,
    /// Encoded size in bits.
    pub size: u8,
    /// Whether the encoding sign-extends.
    pub signed: bool,
}

impl Immediate {
    /// Returns the value as an unsigned u64.
    pub fn as_u64(&self) -> u64 {
        self.value as u64
    }

    /// Returns the value as a signed i64.
    pub fn as_i64(&self) -> i64 {
        self.value
    }
}

/// Memory reference operand.
///
/// Represents `seg:[base + index*scale + disp]`. The segment is always
/// resolved: either the override prefix or the default for the base
/// register.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryRef {
    /// Effective segment register.
    pub segment: Register,
    /// Whether `segment` came from an override prefix.
    pub segment_override: bool,
    /// Base register (if any). RIP-relative forms use the instruction pointer.
    pub base: Option<Register>,
    /// Index register (if any).
    pub index: Option<Register>,
    /// Scale factor for index (1, 2, 4, or 8).
    pub scale: u8,
    /// Displacement, sign-extended.
    pub displacement: i64,
    /// Access size in bytes. For `lea` this is the destination size.
    pub size: u16,
    /// Address size in bytes (2, 4 or 8).
    pub address_size: u8,
}

impl MemoryRef {
    /// Creates an absolute reference (`moffs` forms) in the given segment.
    pub fn absolute(segment: Register, address: i64, size: u16, address_size: u8) -> Self {
        Self {
            segment,
            segment_override: false,
            base: None,
            index: None,
            scale: 1,
            displacement: address,
            size,
            address_size,
        }
    }

    /// Creates a memory reference with base and displacement.
    pub fn base_disp(
        segment: Register,
        base: Register,
        displacement: i64,
        size: u16,
        address_size: u8,
    ) -> Self {
        Self {
            base: Some(base),
            ..Self::absolute(segment, displacement, size, address_size)
        }
    }

    /// Marks the segment as coming from an override prefix.
    pub fn with_override(mut self, segment: Register) -> Self {
        self.segment = segment;
        self.segment_override = true;
        self
    }

    /// Returns true for RIP-relative addressing.
    pub fn is_pc_relative(&self) -> bool {
        self.base
            .is_some_and(|b| b.class == RegisterClass::ProgramCounter)
    }
}

fn size_keyword(size: u16) -> Option<&'static str> {
    match size {
        1 => Some("byte"),
        2 => Some("word"),
        4 => Some("dword"),
        6 => Some("fword"),
        8 => Some("qword"),
        10 => Some("tword"),
        16 => Some("xmmword"),
        _ => None,
    }
}

impl std::fmt::Display for MemoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(keyword) = size_keyword(self.size) {
            write!(f, "{} ", keyword)?;
        }
        if self.segment_override {
            write!(f, "{}:", self.segment.name())?;
        }
        write!(f, "[")?;
        let mut has_content = false;

        if let Some(ref base) = self.base {
            write!(f, "{}", base.name())?;
            has_content = true;
        }

        if let Some(ref index) = self.index {
            if has_content {
                write!(f, " + ")?;
            }
            write!(f, "{}", index.name())?;
            if self.scale > 1 {
                write!(f, "*{}", self.scale)?;
            }
            has_content = true;
        }

        if self.displacement != 0 || !has_content {
            if has_content {
                if self.displacement > 0 {
                    write!(f, " + {:#x}", self.displacement)?;
                } else {
                    write!(f, " - {:#x}", self.displacement.unsigned_abs())?;
                }
            } else {
                write!(f, "{:#x}", self.displacement as u64)?;
            }
        }

        write!(f, "]")
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Register(reg) => write!(f, "{}", reg.name()),
            Self::Immediate(imm) => {
                if imm.signed && imm.value < 0 {
                    write!(f, "-{:#x}", imm.value.unsigned_abs())
                } else {
                    write!(f, "{:#x}", imm.value)
                }
            }
            Self::Memory(mem) => write!(f, "{}", mem),
            Self::PcRelative { target, .. } => write!(f, "{:#x}", target),
            Self::FarPointer { selector, offset } => write!(f, "{:#x}:{:#x}", selector, offset),
            Self::Implicit(resource) => write!(f, "{}", resource),
        }
    }
}

/// Implicit resources read or written by an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resource {
    /// Model-specific register.
    Msr(Msr),
    /// x87 load-constant value.
    FpuConstant(FpuConstant),
    FpuControl,
    FpuStatus,
    FpuTag,
    /// Time-stamp counter (rdtsc).
    TimeStampCounter,
    /// eax/ebx/ecx/edx as written by cpuid.
    CpuidOutput,
    /// Stack frame (rbp/rsp pair) used by enter/leave.
    StackFrame,
    /// Two registers used as one wide value, e.g. `edx:eax`.
    RegisterPair { high: Register, low: Register },
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Msr(msr) => f.write_str(msr.name()),
            Self::FpuConstant(c) => f.write_str(c.name()),
            Self::FpuControl => f.write_str("fpcw"),
            Self::FpuStatus => f.write_str("fpsw"),
            Self::FpuTag => f.write_str("fptw"),
            Self::TimeStampCounter => f.write_str("tsc"),
            Self::CpuidOutput => f.write_str("cpuid"),
            Self::StackFrame => f.write_str("frame"),
            Self::RegisterPair { high, low } => write!(f, "{}:{}", high, low),
        }
    }
}

/// Model-specific registers touched by system call instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Msr {
    Star,
    Lstar,
    Cstar,
    Fmask,
    KernelGsBase,
    SysenterCs,
    SysenterEsp,
    SysenterEip,
}

impl Msr {
    /// MSR address as used by rdmsr/wrmsr.
    pub fn address(&self) -> u32 {
        match self {
            Self::Star => 0xC000_0081,
            Self::Lstar => 0xC000_0082,
            Self::Cstar => 0xC000_0083,
            Self::Fmask => 0xC000_0084,
            Self::KernelGsBase => 0xC000_0102,
            Self::SysenterCs => 0x174,
            Self::SysenterEsp => 0x175,
            Self::SysenterEip => 0x176,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Star => "star",
            Self::Lstar => "lstar",
            Self::Cstar => "cstar",
            Self::Fmask => "fmask",
            Self::KernelGsBase => "kernel_gs_base",
            Self::SysenterCs => "sysenter_cs",
            Self::SysenterEsp => "sysenter_esp",
            Self::SysenterEip => "sysenter_eip",
        }
    }
}

/// Constants pushed by the x87 `fld1`/`fldpi`/... family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FpuConstant {
    One,
    /// log2(10)
    Log2Ten,
    /// log2(e)
    Log2E,
    Pi,
    /// log10(2)
    Log10Two,
    /// ln(2)
    LnTwo,
    Zero,
}

impl FpuConstant {
    /// The 80-bit extended-precision encoding, little-endian.
    pub fn bytes(&self) -> [u8; 10] {
        match self {
            Self::Zero => [0; 10],
            Self::One => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0xFF, 0x3F],
            Self::Log2Ten => [0xFE, 0x8A, 0x1B, 0xCD, 0x4B, 0x78, 0x9A, 0xD4, 0x00, 0x40],
            Self::Log2E => [0xBC, 0xF0, 0x17, 0x5C, 0x29, 0x3B, 0xAA, 0xB8, 0xFF, 0x3F],
            Self::Pi => [0x35, 0xC2, 0x68, 0x21, 0xA2, 0xDA, 0x0F, 0xC9, 0x00, 0x40],
            Self::Log10Two => [0x99, 0xF7, 0xCF, 0xFB, 0x84, 0x9A, 0x20, 0x9A, 0xFD, 0x3F],
            Self::LnTwo => [0xAC, 0x79, 0xCF, 0xD1, 0xF7, 0x17, 0x72, 0xB1, 0xFE, 0x3F],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::One => "1.0",
            Self::Log2Ten => "l2t",
            Self::Log2E => "l2e",
            Self::Pi => "pi",
            Self::Log10Two => "lg2",
            Self::LnTwo => "ln2",
            Self::Zero => "0.0",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds() -> Register {
        Register::segment(3)
    }

    #[test]
    fn test_memory_display() {
        let mem = MemoryRef {
            index: Some(Register::gpr(1, 32)),
            scale: 4,
            ..MemoryRef::base_disp(ds(), Register::gpr(0, 32), -8, 4, 4)
        };
        assert_eq!(mem.to_string(), "dword [eax + ecx*4 - 0x8]");

        let abs = MemoryRef::absolute(ds(), 0x1000, 1, 4).with_override(Register::segment(4));
        assert_eq!(abs.to_string(), "byte fs:[0x1000]");
    }

    #[test]
    fn test_pc_relative_memory() {
        let mem = MemoryRef::base_disp(ds(), Register::ip(64), 0x10, 8, 8);
        assert!(mem.is_pc_relative());
        assert!(!MemoryRef::absolute(ds(), 0, 8, 8).is_pc_relative());
    }

    #[test]
    fn test_operand_display() {
        assert_eq!(Operand::imm(-1, 8).to_string(), "-0x1");
        assert_eq!(Operand::imm_unsigned(0x10, 32).to_string(), "0x10");
        assert_eq!(
            Operand::FarPointer {
                selector: 0x10,
                offset: 0x2000
            }
            .to_string(),
            "0x10:0x2000"
        );
        let pair = Resource::RegisterPair {
            high: Register::gpr(2, 32),
            low: Register::gpr(0, 32),
        };
        assert_eq!(Operand::Implicit(pair).to_string(), "edx:eax");
    }

    #[test]
    fn test_fpu_constant_encodings() {
        assert_eq!(FpuConstant::Zero.bytes(), [0; 10]);
        // 1.0: explicit integer bit set, biased exponent 0x3FFF
        let one = FpuConstant::One.bytes();
        assert_eq!(one[7], 0x80);
        assert_eq!(u16::from_le_bytes([one[8], one[9]]), 0x3FFF);
        assert_eq!(FpuConstant::Pi.bytes()[9], 0x40);
    }

    #[test]
    fn test_msr_addresses() {
        assert_eq!(Msr::Lstar.address(), 0xC000_0082);
        assert_eq!(Msr::SysenterCs.address(), 0x174);
    }
}
