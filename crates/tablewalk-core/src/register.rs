//! x86 register representation.

/// Register class (general purpose, segment, x87 stack, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegisterClass {
    /// General purpose register (rax, r8d, al, ah, etc.)
    General,
    /// Segment register (es, cs, ss, ds, fs, gs)
    Segment,
    /// Control register (cr0, etc.)
    Control,
    /// Debug register (dr0, etc.)
    Debug,
    /// Test register (tr0, etc.)
    Test,
    /// x87 stack register (st0..st7)
    FloatingPoint,
    /// MMX register (mm0..mm7)
    Mmx,
    /// SSE register (xmm0..xmm15)
    Vector,
    /// Instruction pointer (rip, eip, ip)
    ProgramCounter,
    /// Flags register (rflags, eflags, flags)
    Flags,
}

/// A register, identified by class, numeric ID and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Register {
    /// The class of register.
    pub class: RegisterClass,
    /// Register ID, see [`x86`].
    pub id: u16,
    /// Size of the register in bits.
    pub size: u16,
}

impl Register {
    /// Creates a new register.
    pub const fn new(class: RegisterClass, id: u16, size: u16) -> Self {
        Self { class, id, size }
    }

    /// General purpose register by encoding (0-15) and width in bits.
    ///
    /// For 8-bit registers, encodings 4-7 name spl/bpl/sil/dil; use
    /// [`Register::high_byte`] for ah/ch/dh/bh.
    pub const fn gpr(encoding: u8, size: u16) -> Self {
        Self::new(RegisterClass::General, encoding as u16, size)
    }

    /// Legacy high-byte register: 0 = ah, 1 = ch, 2 = dh, 3 = bh.
    pub const fn high_byte(index: u8) -> Self {
        Self::new(RegisterClass::General, x86::AH + index as u16, 8)
    }

    /// Segment register by encoding (es, cs, ss, ds, fs, gs).
    pub const fn segment(encoding: u8) -> Self {
        Self::new(RegisterClass::Segment, x86::ES + encoding as u16, 16)
    }

    /// Control register `crN`, sized to the mode's native width.
    pub const fn control(n: u8, size: u16) -> Self {
        Self::new(RegisterClass::Control, x86::CR0 + n as u16, size)
    }

    /// Debug register `drN`.
    pub const fn debug(n: u8, size: u16) -> Self {
        Self::new(RegisterClass::Debug, x86::DR0 + n as u16, size)
    }

    /// Test register `trN`.
    pub const fn test(n: u8) -> Self {
        Self::new(RegisterClass::Test, x86::TR0 + n as u16, 32)
    }

    /// x87 stack slot `st(n)`.
    pub const fn st(n: u8) -> Self {
        Self::new(RegisterClass::FloatingPoint, x86::ST0 + n as u16, 80)
    }

    /// MMX register `mmN`.
    pub const fn mmx(n: u8) -> Self {
        Self::new(RegisterClass::Mmx, x86::MM0 + n as u16, 64)
    }

    /// SSE register `xmmN`.
    pub const fn xmm(n: u8) -> Self {
        Self::new(RegisterClass::Vector, x86::XMM0 + n as u16, 128)
    }

    /// Instruction pointer at the given width.
    pub const fn ip(size: u16) -> Self {
        Self::new(RegisterClass::ProgramCounter, x86::RIP, size)
    }

    /// Flags register at the given width.
    pub const fn flags(size: u16) -> Self {
        Self::new(RegisterClass::Flags, x86::RFLAGS, size)
    }

    /// Returns the canonical name for this register.
    pub fn name(&self) -> &'static str {
        x86_reg_name(self.class, self.id, self.size)
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// x86 register IDs.
pub mod x86 {
    // GPRs, in encoding order
    pub const RAX: u16 = 0;
    pub const RCX: u16 = 1;
    pub const RDX: u16 = 2;
    pub const RBX: u16 = 3;
    pub const RSP: u16 = 4;
    pub const RBP: u16 = 5;
    pub const RSI: u16 = 6;
    pub const RDI: u16 = 7;
    pub const R8: u16 = 8;
    pub const R9: u16 = 9;
    pub const R10: u16 = 10;
    pub const R11: u16 = 11;
    pub const R12: u16 = 12;
    pub const R13: u16 = 13;
    pub const R14: u16 = 14;
    pub const R15: u16 = 15;

    // Instruction pointer
    pub const RIP: u16 = 16;

    // Flags
    pub const RFLAGS: u16 = 17;

    // Legacy high-byte registers
    pub const AH: u16 = 18;
    pub const CH: u16 = 19;
    pub const DH: u16 = 20;
    pub const BH: u16 = 21;

    // Segment registers, in encoding order
    pub const ES: u16 = 32;
    pub const CS: u16 = 33;
    pub const SS: u16 = 34;
    pub const DS: u16 = 35;
    pub const FS: u16 = 36;
    pub const GS: u16 = 37;

    pub const CR0: u16 = 40;
    pub const XMM0: u16 = 64;
    pub const ST0: u16 = 80;
    pub const MM0: u16 = 88;
    pub const DR0: u16 = 96;
    pub const TR0: u16 = 112;
}

const GPR64: [&str; 16] = [
    "rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi", "r8", "r9", "r10", "r11", "r12",
    "r13", "r14", "r15",
];
const GPR32: [&str; 16] = [
    "eax", "ecx", "edx", "ebx", "esp", "ebp", "esi", "edi", "r8d", "r9d", "r10d", "r11d", "r12d",
    "r13d", "r14d", "r15d",
];
const GPR16: [&str; 16] = [
    "ax", "cx", "dx", "bx", "sp", "bp", "si", "di", "r8w", "r9w", "r10w", "r11w", "r12w", "r13w",
    "r14w", "r15w",
];
const GPR8: [&str; 16] = [
    "al", "cl", "dl", "bl", "spl", "bpl", "sil", "dil", "r8b", "r9b", "r10b", "r11b", "r12b",
    "r13b", "r14b", "r15b",
];
const HIGH8: [&str; 4] = ["ah", "ch", "dh", "bh"];
const SEGMENTS: [&str; 6] = ["es", "cs", "ss", "ds", "fs", "gs"];
const CONTROL: [&str; 16] = [
    "cr0", "cr1", "cr2", "cr3", "cr4", "cr5", "cr6", "cr7", "cr8", "cr9", "cr10", "cr11", "cr12",
    "cr13", "cr14", "cr15",
];
const DEBUG: [&str; 16] = [
    "dr0", "dr1", "dr2", "dr3", "dr4", "dr5", "dr6", "dr7", "dr8", "dr9", "dr10", "dr11", "dr12",
    "dr13", "dr14", "dr15",
];
const TEST: [&str; 8] = ["tr0", "tr1", "tr2", "tr3", "tr4", "tr5", "tr6", "tr7"];
const X87: [&str; 8] = ["st0", "st1", "st2", "st3", "st4", "st5", "st6", "st7"];
const MMX: [&str; 8] = ["mm0", "mm1", "mm2", "mm3", "mm4", "mm5", "mm6", "mm7"];
const XMM: [&str; 16] = [
    "xmm0", "xmm1", "xmm2", "xmm3", "xmm4", "xmm5", "xmm6", "xmm7", "xmm8", "xmm9", "xmm10",
    "xmm11", "xmm12", "xmm13", "xmm14", "xmm15",
];

fn lookup(names: &[&'static str], id: u16, base: u16) -> &'static str {
    id.checked_sub(base)
        .and_then(|i| names.get(i as usize))
        .copied()
        .unwrap_or("unknown")
}

fn x86_reg_name(class: RegisterClass, id: u16, size: u16) -> &'static str {
    match class {
        RegisterClass::General if (x86::AH..=x86::BH).contains(&id) => lookup(&HIGH8, id, x86::AH),
        RegisterClass::General => match size {
            64 => lookup(&GPR64, id, x86::RAX),
            32 => lookup(&GPR32, id, x86::RAX),
            16 => lookup(&GPR16, id, x86::RAX),
            8 => lookup(&GPR8, id, x86::RAX),
            _ => "unknown",
        },
        RegisterClass::Segment => lookup(&SEGMENTS, id, x86::ES),
        RegisterClass::Control => lookup(&CONTROL, id, x86::CR0),
        RegisterClass::Debug => lookup(&DEBUG, id, x86::DR0),
        RegisterClass::Test => lookup(&TEST, id, x86::TR0),
        RegisterClass::FloatingPoint => lookup(&X87, id, x86::ST0),
        RegisterClass::Mmx => lookup(&MMX, id, x86::MM0),
        RegisterClass::Vector => lookup(&XMM, id, x86::XMM0),
        RegisterClass::ProgramCounter => match size {
            64 => "rip",
            32 => "eip",
            _ => "ip",
        },
        RegisterClass::Flags => match size {
            64 => "rflags",
            32 => "eflags",
            _ => "flags",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpr_names_by_width() {
        assert_eq!(Register::gpr(0, 64).name(), "rax");
        assert_eq!(Register::gpr(0, 32).name(), "eax");
        assert_eq!(Register::gpr(3, 16).name(), "bx");
        assert_eq!(Register::gpr(3, 8).name(), "bl");
        assert_eq!(Register::gpr(12, 32).name(), "r12d");
        assert_eq!(Register::gpr(6, 8).name(), "sil");
    }

    #[test]
    fn test_high_byte_registers() {
        assert_eq!(Register::high_byte(0).name(), "ah");
        assert_eq!(Register::high_byte(3).name(), "bh");
        assert_ne!(Register::high_byte(0), Register::gpr(4, 8));
    }

    #[test]
    fn test_special_registers() {
        assert_eq!(Register::segment(2).name(), "ss");
        assert_eq!(Register::segment(5).name(), "gs");
        assert_eq!(Register::control(8, 64).name(), "cr8");
        assert_eq!(Register::st(1).name(), "st1");
        assert_eq!(Register::xmm(15).name(), "xmm15");
        assert_eq!(Register::ip(64).name(), "rip");
        assert_eq!(Register::flags(16).name(), "flags");
    }
}
