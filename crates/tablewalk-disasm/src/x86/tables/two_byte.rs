//! Secondary opcode map, reached through the `0F` escape.
//!
//! Slots with SSE forms point at a [`PrefixSelect`](crate::x86::table::PrefixSelect)
//! defined in the `sse` module; the plain (MMX or legacy) form lives there too.

use tablewalk_core::{Access, Actions, Condition, Cpu, FlagEffects, Msr, Operation};

use crate::x86::table::Addressing::*;
use crate::x86::table::SizeClass::*;
use crate::x86::table::{fixed, op, Fixed, Node, OpcodeEntry};
use super::amd3dnow::SUFFIX_3DNOW;
use super::groups::{GROUP_11, GROUP_16, GROUP_17, GROUP_6, GROUP_8, GROUP_9, GROUP_P};
use super::sse::{
    SSE_0F10, SSE_0F11, SSE_0F12, SSE_0F13, SSE_0F14, SSE_0F15, SSE_0F16, SSE_0F17, SSE_0F28,
    SSE_0F29, SSE_0F2A, SSE_0F2B, SSE_0F2C, SSE_0F2D, SSE_0F2E, SSE_0F2F, SSE_0F50, SSE_0F51,
    SSE_0F52, SSE_0F53, SSE_0F54, SSE_0F55, SSE_0F56, SSE_0F57, SSE_0F58, SSE_0F59, SSE_0F5A,
    SSE_0F5B, SSE_0F5C, SSE_0F5D, SSE_0F5E, SSE_0F5F, SSE_0F60, SSE_0F61, SSE_0F62, SSE_0F63,
    SSE_0F64, SSE_0F65, SSE_0F66, SSE_0F67, SSE_0F68, SSE_0F69, SSE_0F6A, SSE_0F6B, SSE_0F6C,
    SSE_0F6D, SSE_0F6E, SSE_0F6F, SSE_0F70, SSE_0F71, SSE_0F72, SSE_0F73, SSE_0F74, SSE_0F75,
    SSE_0F76, SSE_0F7C, SSE_0F7D, SSE_0F7E, SSE_0F7F, SSE_0FC2, SSE_0FC4, SSE_0FC5, SSE_0FC6,
    SSE_0FD0, SSE_0FD1, SSE_0FD2, SSE_0FD3, SSE_0FD4, SSE_0FD5, SSE_0FD6, SSE_0FD7, SSE_0FD8,
    SSE_0FD9, SSE_0FDA, SSE_0FDB, SSE_0FDC, SSE_0FDD, SSE_0FDE, SSE_0FDF, SSE_0FE0, SSE_0FE1,
    SSE_0FE2, SSE_0FE3, SSE_0FE4, SSE_0FE5, SSE_0FE6, SSE_0FE7, SSE_0FE8, SSE_0FE9, SSE_0FEA,
    SSE_0FEB, SSE_0FEC, SSE_0FED, SSE_0FEE, SSE_0FEF, SSE_0FF0, SSE_0FF1, SSE_0FF2, SSE_0FF3,
    SSE_0FF4, SSE_0FF5, SSE_0FF6, SSE_0FF7, SSE_0FF8, SSE_0FF9, SSE_0FFA, SSE_0FFB, SSE_0FFC,
    SSE_0FFD, SSE_0FFE,
};
use super::system::{MODRM_0F01, OPCODE_0F05};

/// Two-byte opcode table, indexed by the byte following `0F`.
pub static TWO_BYTE: [Node; 256] = [
    Node::Group(&GROUP_6), // 0x00
    Node::ModrmEscape(&MODRM_0F01), // 0x01
    // 0x02
    Node::Leaf(
        OpcodeEntry::new("lar", Operation::System, Cpu::I386)
            .operands([op(Gpr, V, Access::DST), op(RegMem, W, Access::SRC)])
            .flags(FlagEffects::ZF_MOD),
    ),
    // 0x03
    Node::Leaf(
        OpcodeEntry::new("lsl", Operation::System, Cpu::I386)
            .operands([op(Gpr, V, Access::DST), op(RegMem, W, Access::SRC)])
            .flags(FlagEffects::ZF_MOD),
    ),
    Node::Invalid, // 0x04
    Node::ModeGated(&OPCODE_0F05), // 0x05
    // 0x06
    Node::Leaf(
        OpcodeEntry::new("clts", Operation::System, Cpu::I386)
            .operands([fixed(Fixed::Cr0, Access::DST)]),
    ),
    // 0x07
    Node::Leaf(
        OpcodeEntry::new("sysret", Operation::SyscallReturn, Cpu::AmdK6_2)
            .operands([fixed(Fixed::Msr(Msr::Star), Access::MSR.union(Access::SRC))]),
    ),
    Node::Leaf(OpcodeEntry::new("invd", Operation::System, Cpu::I486)), // 0x08
    Node::Leaf(OpcodeEntry::new("wbinvd", Operation::System, Cpu::I486)), // 0x09
    Node::Invalid, // 0x0A
    Node::Leaf(OpcodeEntry::new("undef", Operation::Undefined, Cpu::PentiumPro)), // 0x0B
    Node::Invalid, // 0x0C
    Node::Group(&GROUP_P), // 0x0D
    // 0x0E
    Node::Leaf(
        OpcodeEntry::new("femms", Operation::Amd3dNow, Cpu::AmdK6_2)
            .operands([fixed(Fixed::FpuTag, Access::DST)]),
    ),
    Node::SuffixSelected(&SUFFIX_3DNOW), // 0x0F
    Node::PrefixSelected(&SSE_0F10), // 0x10
    Node::PrefixSelected(&SSE_0F11), // 0x11
    Node::PrefixSelected(&SSE_0F12), // 0x12
    Node::PrefixSelected(&SSE_0F13), // 0x13
    Node::PrefixSelected(&SSE_0F14), // 0x14
    Node::PrefixSelected(&SSE_0F15), // 0x15
    Node::PrefixSelected(&SSE_0F16), // 0x16
    Node::PrefixSelected(&SSE_0F17), // 0x17
    Node::Group(&GROUP_17), // 0x18
    Node::Invalid, // 0x19
    Node::Invalid, // 0x1A
    Node::Invalid, // 0x1B
    Node::Invalid, // 0x1C
    Node::Invalid, // 0x1D
    Node::Invalid, // 0x1E
    Node::Invalid, // 0x1F
    // 0x20
    Node::Leaf(
        OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
            .operands([op(RegOnly, Dq, Access::DST), op(CtrlReg, Dq, Access::SRC)]),
    ),
    // 0x21
    Node::Leaf(
        OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
            .operands([op(RegOnly, Dq, Access::DST), op(DebugReg, Dq, Access::SRC)]),
    ),
    // 0x22
    Node::Leaf(
        OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
            .operands([op(CtrlReg, Dq, Access::DST), op(RegOnly, Dq, Access::SRC)]),
    ),
    // 0x23
    Node::Leaf(
        OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
            .operands([op(DebugReg, Dq, Access::DST), op(RegOnly, Dq, Access::SRC)]),
    ),
    Node::Invalid, // 0x24
    Node::Invalid, // 0x25
    Node::Invalid, // 0x26
    Node::Invalid, // 0x27
    Node::PrefixSelected(&SSE_0F28), // 0x28
    Node::PrefixSelected(&SSE_0F29), // 0x29
    Node::PrefixSelected(&SSE_0F2A), // 0x2A
    Node::PrefixSelected(&SSE_0F2B), // 0x2B
    Node::PrefixSelected(&SSE_0F2C), // 0x2C
    Node::PrefixSelected(&SSE_0F2D), // 0x2D
    Node::PrefixSelected(&SSE_0F2E), // 0x2E
    Node::PrefixSelected(&SSE_0F2F), // 0x2F
    // 0x30
    Node::Leaf(
        OpcodeEntry::new("wrmsr", Operation::System, Cpu::Pentium)
            .operands([
                fixed(Fixed::Ecx, Access::MSR.union(Access::DST)),
                fixed(Fixed::EdxEax, Access::SRC),
            ]),
    ),
    // 0x31
    Node::Leaf(
        OpcodeEntry::new("rdtsc", Operation::System, Cpu::Pentium)
            .operands([
                fixed(Fixed::EdxEax, Access::DST),
                fixed(Fixed::Tsc, Access::MSR.union(Access::SRC)),
            ]),
    ),
    // 0x32
    Node::Leaf(
        OpcodeEntry::new("rdmsr", Operation::System, Cpu::Pentium)
            .operands([
                fixed(Fixed::EdxEax, Access::DST),
                fixed(Fixed::Ecx, Access::MSR.union(Access::SRC)),
            ]),
    ),
    // 0x33
    Node::Leaf(
        OpcodeEntry::new("rdpmc", Operation::Other, Cpu::PentiumPro)
            .operands([
                fixed(Fixed::EdxEax, Access::DST),
                fixed(Fixed::Ecx, Access::SYS.union(Access::SRC)),
            ]),
    ),
    // 0x34
    Node::Leaf(
        OpcodeEntry::new("sysenter", Operation::Syscall, Cpu::Pentium2)
            .operands([
                fixed(Fixed::Msr(Msr::SysenterCs), Access::MSR.union(Access::SRC)),
                fixed(Fixed::Msr(Msr::SysenterEip), Access::MSR.union(Access::SRC)),
                fixed(Fixed::Msr(Msr::SysenterEsp), Access::MSR.union(Access::SRC)),
            ]),
    ),
    // 0x35
    Node::Leaf(
        OpcodeEntry::new("sysexit", Operation::SyscallReturn, Cpu::Pentium2)
            .operands([
                fixed(Fixed::Msr(Msr::SysenterCs), Access::MSR.union(Access::SRC)),
                fixed(Fixed::Msr(Msr::SysenterEip), Access::MSR.union(Access::SRC)),
                fixed(Fixed::Msr(Msr::SysenterEsp), Access::MSR.union(Access::SRC)),
            ]),
    ),
    Node::Invalid, // 0x36
    Node::Invalid, // 0x37
    Node::Invalid, // 0x38
    Node::Invalid, // 0x39
    Node::Invalid, // 0x3A
    Node::Invalid, // 0x3B
    Node::Invalid, // 0x3C
    Node::Invalid, // 0x3D
    Node::Invalid, // 0x3E
    Node::Invalid, // 0x3F
    // 0x40
    Node::Leaf(
        OpcodeEntry::new("cmovo", Operation::ConditionalMove, Cpu::PentiumPro)
            .operands([op(Gpr, V, Access::COND_DST), op(RegMem, V, Access::COND_SRC)])
            .condition(Condition::Overflow)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
    ),
    // 0x41
    Node::Leaf(
        OpcodeEntry::new("cmovno", Operation::ConditionalMove, Cpu::PentiumPro)
            .operands([op(Gpr, V, Access::COND_DST), op(RegMem, V, Access::COND_SRC)])
            .condition(Condition::NotOverflow)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
    ),
    // 0x42
    Node::Leaf(
        OpcodeEntry::new("cmovc", Operation::ConditionalMove, Cpu::PentiumPro)
            .operands([op(Gpr, V, Access::COND_DST), op(RegMem, V, Access::COND_SRC)])
            .condition(Condition::Below)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
    ),
    // 0x43
    Node::Leaf(
        OpcodeEntry::new("cmovnc", Operation::ConditionalMove, Cpu::PentiumPro)
            .operands([op(Gpr, V, Access::COND_DST), op(RegMem, V, Access::COND_SRC)])
            .condition(Condition::AboveOrEqual)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
    ),
    // 0x44
    Node::Leaf(
        OpcodeEntry::new("cmovz", Operation::ConditionalMove, Cpu::PentiumPro)
            .operands([op(Gpr, V, Access::COND_DST), op(RegMem, V, Access::COND_SRC)])
            .condition(Condition::Equal)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
    ),
    // 0x45
    Node::Leaf(
        OpcodeEntry::new("cmovnz", Operation::ConditionalMove, Cpu::PentiumPro)
            .operands([op(Gpr, V, Access::COND_DST), op(RegMem, V, Access::COND_SRC)])
            .condition(Condition::NotEqual)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
    ),
    // 0x46
    Node::Leaf(
        OpcodeEntry::new("cmovbe", Operation::ConditionalMove, Cpu::PentiumPro)
            .operands([op(Gpr, V, Access::COND_DST), op(RegMem, V, Access::COND_SRC)])
            .condition(Condition::BelowOrEqual)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
    ),
    // 0x47
    Node::Leaf(
        OpcodeEntry::new("cmova", Operation::ConditionalMove, Cpu::PentiumPro)
            .operands([op(Gpr, V, Access::COND_DST), op(RegMem, V, Access::COND_SRC)])
            .condition(Condition::Above)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
    ),
    // 0x48
    Node::Leaf(
        OpcodeEntry::new("cmovs", Operation::ConditionalMove, Cpu::PentiumPro)
            .operands([op(Gpr, V, Access::COND_DST), op(RegMem, V, Access::COND_SRC)])
            .condition(Condition::Sign)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
    ),
    // 0x49
    Node::Leaf(
        OpcodeEntry::new("cmovns", Operation::ConditionalMove, Cpu::PentiumPro)
            .operands([op(Gpr, V, Access::COND_DST), op(RegMem, V, Access::COND_SRC)])
            .condition(Condition::NotSign)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
    ),
    // 0x4A
    Node::Leaf(
        OpcodeEntry::new("cmovpe", Operation::ConditionalMove, Cpu::PentiumPro)
            .operands([op(Gpr, V, Access::COND_DST), op(RegMem, V, Access::COND_SRC)])
            .condition(Condition::Parity)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
    ),
    // 0x4B
    Node::Leaf(
        OpcodeEntry::new("cmovpo", Operation::ConditionalMove, Cpu::PentiumPro)
            .operands([op(Gpr, V, Access::COND_DST), op(RegMem, V, Access::COND_SRC)])
            .condition(Condition::NotParity)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
    ),
    // 0x4C
    Node::Leaf(
        OpcodeEntry::new("cmovl", Operation::ConditionalMove, Cpu::PentiumPro)
            .operands([op(Gpr, V, Access::COND_DST), op(RegMem, V, Access::COND_SRC)])
            .condition(Condition::Less)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
    ),
    // 0x4D
    Node::Leaf(
        OpcodeEntry::new("cmovge", Operation::ConditionalMove, Cpu::PentiumPro)
            .operands([op(Gpr, V, Access::COND_DST), op(RegMem, V, Access::COND_SRC)])
            .condition(Condition::GreaterOrEqual)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
    ),
    // 0x4E
    Node::Leaf(
        OpcodeEntry::new("cmovle", Operation::ConditionalMove, Cpu::PentiumPro)
            .operands([op(Gpr, V, Access::COND_DST), op(RegMem, V, Access::COND_SRC)])
            .condition(Condition::LessOrEqual)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
    ),
    // 0x4F
    Node::Leaf(
        OpcodeEntry::new("cmovg", Operation::ConditionalMove, Cpu::PentiumPro)
            .operands([op(Gpr, V, Access::COND_DST), op(RegMem, V, Access::COND_SRC)])
            .condition(Condition::Greater)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
    ),
    Node::PrefixSelected(&SSE_0F50), // 0x50
    Node::PrefixSelected(&SSE_0F51), // 0x51
    Node::PrefixSelected(&SSE_0F52), // 0x52
    Node::PrefixSelected(&SSE_0F53), // 0x53
    Node::PrefixSelected(&SSE_0F54), // 0x54
    Node::PrefixSelected(&SSE_0F55), // 0x55
    Node::PrefixSelected(&SSE_0F56), // 0x56
    Node::PrefixSelected(&SSE_0F57), // 0x57
    Node::PrefixSelected(&SSE_0F58), // 0x58
    Node::PrefixSelected(&SSE_0F59), // 0x59
    Node::PrefixSelected(&SSE_0F5A), // 0x5A
    Node::PrefixSelected(&SSE_0F5B), // 0x5B
    Node::PrefixSelected(&SSE_0F5C), // 0x5C
    Node::PrefixSelected(&SSE_0F5D), // 0x5D
    Node::PrefixSelected(&SSE_0F5E), // 0x5E
    Node::PrefixSelected(&SSE_0F5F), // 0x5F
    Node::PrefixSelected(&SSE_0F60), // 0x60
    Node::PrefixSelected(&SSE_0F61), // 0x61
    Node::PrefixSelected(&SSE_0F62), // 0x62
    Node::PrefixSelected(&SSE_0F63), // 0x63
    Node::PrefixSelected(&SSE_0F64), // 0x64
    Node::PrefixSelected(&SSE_0F65), // 0x65
    Node::PrefixSelected(&SSE_0F66), // 0x66
    Node::PrefixSelected(&SSE_0F67), // 0x67
    Node::PrefixSelected(&SSE_0F68), // 0x68
    Node::PrefixSelected(&SSE_0F69), // 0x69
    Node::PrefixSelected(&SSE_0F6A), // 0x6A
    Node::PrefixSelected(&SSE_0F6B), // 0x6B
    Node::PrefixSelected(&SSE_0F6C), // 0x6C
    Node::PrefixSelected(&SSE_0F6D), // 0x6D
    Node::PrefixSelected(&SSE_0F6E), // 0x6E
    Node::PrefixSelected(&SSE_0F6F), // 0x6F
    Node::PrefixSelected(&SSE_0F70), // 0x70
    Node::PrefixSelected(&SSE_0F71), // 0x71
    Node::PrefixSelected(&SSE_0F72), // 0x72
    Node::PrefixSelected(&SSE_0F73), // 0x73
    Node::PrefixSelected(&SSE_0F74), // 0x74
    Node::PrefixSelected(&SSE_0F75), // 0x75
    Node::PrefixSelected(&SSE_0F76), // 0x76
    // 0x77
    Node::Leaf(
        OpcodeEntry::new("emms", Operation::Mmx, Cpu::Pentium2)
            .operands([fixed(Fixed::FpuTag, Access::DST)]),
    ),
    Node::Invalid, // 0x78
    Node::Invalid, // 0x79
    Node::Invalid, // 0x7A
    Node::Invalid, // 0x7B
    Node::PrefixSelected(&SSE_0F7C), // 0x7C
    Node::PrefixSelected(&SSE_0F7D), // 0x7D
    Node::PrefixSelected(&SSE_0F7E), // 0x7E
    Node::PrefixSelected(&SSE_0F7F), // 0x7F
    // 0x80
    Node::Leaf(
        OpcodeEntry::new("jo", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::Overflow)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x81
    Node::Leaf(
        OpcodeEntry::new("jno", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::NotOverflow)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x82
    Node::Leaf(
        OpcodeEntry::new("jb", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::Below)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x83
    Node::Leaf(
        OpcodeEntry::new("jnb", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::AboveOrEqual)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x84
    Node::Leaf(
        OpcodeEntry::new("jz", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::Equal)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x85
    Node::Leaf(
        OpcodeEntry::new("jnz", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::NotEqual)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x86
    Node::Leaf(
        OpcodeEntry::new("jbe", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::BelowOrEqual)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x87
    Node::Leaf(
        OpcodeEntry::new("ja", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::Above)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x88
    Node::Leaf(
        OpcodeEntry::new("js", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::Sign)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x89
    Node::Leaf(
        OpcodeEntry::new("jns", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::NotSign)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x8A
    Node::Leaf(
        OpcodeEntry::new("jpe", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::Parity)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x8B
    Node::Leaf(
        OpcodeEntry::new("jpo", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::NotParity)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x8C
    Node::Leaf(
        OpcodeEntry::new("jl", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::Less)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x8D
    Node::Leaf(
        OpcodeEntry::new("jge", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::GreaterOrEqual)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x8E
    Node::Leaf(
        OpcodeEntry::new("jle", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::LessOrEqual)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x8F
    Node::Leaf(
        OpcodeEntry::new("jg", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::Greater)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x90
    Node::Leaf(
        OpcodeEntry::new("seto", Operation::ConditionalMove, Cpu::I386)
            .operands([
                op(RegMem, B, Access::COND_DST),
                fixed(Fixed::One, Access::COND_SRC),
                fixed(Fixed::Zero, Access::COND_SRC),
            ])
            .condition(Condition::Overflow)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0x91
    Node::Leaf(
        OpcodeEntry::new("setno", Operation::ConditionalMove, Cpu::I386)
            .operands([
                op(RegMem, B, Access::COND_DST),
                fixed(Fixed::One, Access::COND_SRC),
                fixed(Fixed::Zero, Access::COND_SRC),
            ])
            .condition(Condition::NotOverflow)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0x92
    Node::Leaf(
        OpcodeEntry::new("setb", Operation::ConditionalMove, Cpu::I386)
            .operands([
                op(RegMem, B, Access::COND_DST),
                fixed(Fixed::One, Access::COND_SRC),
                fixed(Fixed::Zero, Access::COND_SRC),
            ])
            .condition(Condition::Below)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0x93
    Node::Leaf(
        OpcodeEntry::new("setnb", Operation::ConditionalMove, Cpu::I386)
            .operands([
                op(RegMem, B, Access::COND_DST),
                fixed(Fixed::One, Access::COND_SRC),
                fixed(Fixed::Zero, Access::COND_SRC),
            ])
            .condition(Condition::AboveOrEqual)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0x94
    Node::Leaf(
        OpcodeEntry::new("sete", Operation::ConditionalMove, Cpu::I386)
            .operands([
                op(RegMem, B, Access::COND_DST),
                fixed(Fixed::One, Access::COND_SRC),
                fixed(Fixed::Zero, Access::COND_SRC),
            ])
            .condition(Condition::Equal)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0x95
    Node::Leaf(
        OpcodeEntry::new("setne", Operation::ConditionalMove, Cpu::I386)
            .operands([
                op(RegMem, B, Access::COND_DST),
                fixed(Fixed::One, Access::COND_SRC),
                fixed(Fixed::Zero, Access::COND_SRC),
            ])
            .condition(Condition::NotEqual)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0x96
    Node::Leaf(
        OpcodeEntry::new("setbe", Operation::ConditionalMove, Cpu::I386)
            .operands([
                op(RegMem, B, Access::COND_DST),
                fixed(Fixed::One, Access::COND_SRC),
                fixed(Fixed::Zero, Access::COND_SRC),
            ])
            .condition(Condition::BelowOrEqual)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0x97
    Node::Leaf(
        OpcodeEntry::new("seta", Operation::ConditionalMove, Cpu::I386)
            .operands([
                op(RegMem, B, Access::COND_DST),
                fixed(Fixed::One, Access::COND_SRC),
                fixed(Fixed::Zero, Access::COND_SRC),
            ])
            .condition(Condition::Above)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0x98
    Node::Leaf(
        OpcodeEntry::new("sets", Operation::ConditionalMove, Cpu::I386)
            .operands([
                op(RegMem, B, Access::COND_DST),
                fixed(Fixed::One, Access::COND_SRC),
                fixed(Fixed::Zero, Access::COND_SRC),
            ])
            .condition(Condition::Sign)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0x99
    Node::Leaf(
        OpcodeEntry::new("setns", Operation::ConditionalMove, Cpu::I386)
            .operands([
                op(RegMem, B, Access::COND_DST),
                fixed(Fixed::One, Access::COND_SRC),
                fixed(Fixed::Zero, Access::COND_SRC),
            ])
            .condition(Condition::NotSign)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0x9A
    Node::Leaf(
        OpcodeEntry::new("setpe", Operation::ConditionalMove, Cpu::I386)
            .operands([
                op(RegMem, B, Access::COND_DST),
                fixed(Fixed::One, Access::COND_SRC),
                fixed(Fixed::Zero, Access::COND_SRC),
            ])
            .condition(Condition::Parity)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0x9B
    Node::Leaf(
        OpcodeEntry::new("setpo", Operation::ConditionalMove, Cpu::I386)
            .operands([
                op(RegMem, B, Access::COND_DST),
                fixed(Fixed::One, Access::COND_SRC),
                fixed(Fixed::Zero, Access::COND_SRC),
            ])
            .condition(Condition::NotParity)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0x9C
    Node::Leaf(
        OpcodeEntry::new("setl", Operation::ConditionalMove, Cpu::I386)
            .operands([
                op(RegMem, B, Access::COND_DST),
                fixed(Fixed::One, Access::COND_SRC),
                fixed(Fixed::Zero, Access::COND_SRC),
            ])
            .condition(Condition::Less)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0x9D
    Node::Leaf(
        OpcodeEntry::new("setge", Operation::ConditionalMove, Cpu::I386)
            .operands([
                op(RegMem, B, Access::COND_DST),
                fixed(Fixed::One, Access::COND_SRC),
                fixed(Fixed::Zero, Access::COND_SRC),
            ])
            .condition(Condition::GreaterOrEqual)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0x9E
    Node::Leaf(
        OpcodeEntry::new("setle", Operation::ConditionalMove, Cpu::I386)
            .operands([
                op(RegMem, B, Access::COND_DST),
                fixed(Fixed::One, Access::COND_SRC),
                fixed(Fixed::Zero, Access::COND_SRC),
            ])
            .condition(Condition::LessOrEqual)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0x9F
    Node::Leaf(
        OpcodeEntry::new("setg", Operation::ConditionalMove, Cpu::I386)
            .operands([
                op(RegMem, B, Access::COND_DST),
                fixed(Fixed::One, Access::COND_SRC),
                fixed(Fixed::Zero, Access::COND_SRC),
            ])
            .condition(Condition::Greater)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0xA0
    Node::Leaf(
        OpcodeEntry::new("push", Operation::Push, Cpu::I386)
            .operands([fixed(Fixed::Fs, Access::SRC)])
            .with_default_64(),
    ),
    // 0xA1
    Node::Leaf(
        OpcodeEntry::new("pop", Operation::Pop, Cpu::I386)
            .operands([fixed(Fixed::Fs, Access::DST)])
            .with_default_64(),
    ),
    // 0xA2
    Node::Leaf(
        OpcodeEntry::new("cpuid", Operation::Cpuid, Cpu::Pentium)
            .operands([fixed(Fixed::CpuidOutput, Access::DST), fixed(Fixed::Acc, Access::SRC)]),
    ),
    // 0xA3
    Node::Leaf(
        OpcodeEntry::new("bt", Operation::BitTest, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC), op(Gpr, V, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // 0xA4
    Node::Leaf(
        OpcodeEntry::new("shld", Operation::Shl, Cpu::I386)
            .operands([
                op(RegMem, V, Access::DST),
                op(Gpr, V, Access::SRC),
                op(Imm, B, Access::SRC),
            ])
            .flags(FlagEffects::SHIFT_MOD),
    ),
    // 0xA5
    Node::Leaf(
        OpcodeEntry::new("shld", Operation::Shl, Cpu::I386)
            .operands([
                op(RegMem, V, Access::DST),
                op(Gpr, V, Access::SRC),
                fixed(Fixed::Cl, Access::SRC),
            ])
            .flags(FlagEffects::SHIFT_MOD),
    ),
    Node::Invalid, // 0xA6
    Node::Invalid, // 0xA7
    // 0xA8
    Node::Leaf(
        OpcodeEntry::new("push", Operation::Push, Cpu::I386)
            .operands([fixed(Fixed::Gs, Access::SRC)])
            .with_default_64(),
    ),
    // 0xA9
    Node::Leaf(
        OpcodeEntry::new("pop", Operation::Pop, Cpu::I386)
            .operands([fixed(Fixed::Gs, Access::DST)])
            .with_default_64(),
    ),
    // 0xAA
    Node::Leaf(OpcodeEntry::new("rsm", Operation::System, Cpu::I386).flags(FlagEffects::ALL_MOD)),
    // 0xAB
    Node::Leaf(
        OpcodeEntry::new("bts", Operation::BitTest, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC), op(Gpr, V, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // 0xAC
    Node::Leaf(
        OpcodeEntry::new("shrd", Operation::Shr, Cpu::I386)
            .operands([
                op(RegMem, V, Access::DST),
                op(Gpr, V, Access::SRC),
                op(Imm, B, Access::SRC),
            ])
            .flags(FlagEffects::SHIFT_MOD),
    ),
    // 0xAD
    Node::Leaf(
        OpcodeEntry::new("shrd", Operation::Shr, Cpu::I386)
            .operands([
                op(RegMem, V, Access::DST),
                op(Gpr, V, Access::SRC),
                fixed(Fixed::Cl, Access::SRC),
            ])
            .flags(FlagEffects::SHIFT_MOD),
    ),
    Node::Group(&GROUP_16), // 0xAE
    // 0xAF
    Node::Leaf(
        OpcodeEntry::new("imul", Operation::Mul, Cpu::I386)
            .operands([
                op(Gpr, V, Access::SIGNED.union(Access::DST)),
                op(RegMem, V, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::OF_MOD.union(FlagEffects::CF_MOD)),
    ),
    // 0xB0
    Node::Leaf(
        OpcodeEntry::new("cmpxchg", Operation::CompareExchange, Cpu::I486)
            .operands([
                op(RegMem, B, Access::SRC.union(Access::COND_DST)),
                fixed(Fixed::Al, Access::SRC.union(Access::COND_DST)),
                op(Gpr, B, Access::COND_SRC),
            ])
            .condition(Condition::OperandsEqual)
            .flags(FlagEffects::COMMON_MOD)
            .taken(Actions::OP1_DST.union(Actions::OP3_SRC))
            .not_taken(Actions::OP2_DST.union(Actions::OP1_SRC)),
    ),
    // 0xB1
    Node::Leaf(
        OpcodeEntry::new("cmpxchg", Operation::CompareExchange, Cpu::I486)
            .operands([
                op(RegMem, V, Access::SRC.union(Access::COND_DST)),
                fixed(Fixed::Acc, Access::SRC.union(Access::COND_DST)),
                op(Gpr, V, Access::COND_SRC),
            ])
            .condition(Condition::OperandsEqual)
            .flags(FlagEffects::COMMON_MOD)
            .taken(Actions::OP1_DST.union(Actions::OP3_SRC))
            .not_taken(Actions::OP2_DST.union(Actions::OP1_SRC)),
    ),
    // 0xB2
    Node::Leaf(
        OpcodeEntry::new("lss", Operation::Move, Cpu::I386)
            .operands([op(Gpr, Z, Access::DST), op(Mem, P, Access::SRC)]),
    ),
    // 0xB3
    Node::Leaf(
        OpcodeEntry::new("btr", Operation::BitTest, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC), op(Gpr, V, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // 0xB4
    Node::Leaf(
        OpcodeEntry::new("lfs", Operation::Move, Cpu::I386)
            .operands([op(Gpr, Z, Access::DST), op(Mem, P, Access::SRC)]),
    ),
    // 0xB5
    Node::Leaf(
        OpcodeEntry::new("lgs", Operation::Move, Cpu::I386)
            .operands([op(Gpr, Z, Access::DST), op(Mem, P, Access::SRC)]),
    ),
    // 0xB6
    Node::Leaf(
        OpcodeEntry::new("movzx", Operation::Move, Cpu::I386)
            .operands([op(Gpr, V, Access::DST), op(RegMem, B, Access::SRC)]),
    ),
    // 0xB7
    Node::Leaf(
        OpcodeEntry::new("movzx", Operation::Move, Cpu::I386)
            .operands([op(Gpr, V, Access::DST), op(RegMem, W, Access::SRC)]),
    ),
    Node::Invalid, // 0xB8
    Node::Group(&GROUP_11), // 0xB9
    Node::Group(&GROUP_8), // 0xBA
    // 0xBB
    Node::Leaf(
        OpcodeEntry::new("btc", Operation::BitTest, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC), op(Gpr, V, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // 0xBC
    Node::Leaf(
        OpcodeEntry::new("bsf", Operation::BitTest, Cpu::I386)
            .operands([op(Gpr, V, Access::SRC), op(RegMem, V, Access::SRC)])
            .flags(FlagEffects::ZF_MOD),
    ),
    // 0xBD
    Node::Leaf(
        OpcodeEntry::new("bsr", Operation::BitTest, Cpu::I386)
            .operands([op(Gpr, V, Access::SRC), op(RegMem, V, Access::SRC)])
            .flags(FlagEffects::ZF_MOD),
    ),
    // 0xBE
    Node::Leaf(
        OpcodeEntry::new("movsx", Operation::Move, Cpu::I386)
            .operands([
                op(Gpr, V, Access::SIGNED.union(Access::DST)),
                op(RegMem, B, Access::SIGNED.union(Access::SRC)),
            ]),
    ),
    // 0xBF
    Node::Leaf(
        OpcodeEntry::new("movsx", Operation::Move, Cpu::I386)
            .operands([
                op(Gpr, V, Access::SIGNED.union(Access::DST)),
                op(RegMem, W, Access::SIGNED.union(Access::SRC)),
            ]),
    ),
    // 0xC0
    Node::Leaf(
        OpcodeEntry::new("xadd", Operation::ExchangeAdd, Cpu::I486)
            .operands([
                op(RegMem, B, Access::SRC.union(Access::DST)),
                op(Gpr, B, Access::SRC.union(Access::DST)),
            ])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0xC1
    Node::Leaf(
        OpcodeEntry::new("xadd", Operation::ExchangeAdd, Cpu::I486)
            .operands([
                op(RegMem, V, Access::SRC.union(Access::DST)),
                op(Gpr, V, Access::SRC.union(Access::DST)),
            ])
            .flags(FlagEffects::COMMON_MOD),
    ),
    Node::PrefixSelected(&SSE_0FC2), // 0xC2
    // 0xC3
    Node::Leaf(
        OpcodeEntry::new("movnti", Operation::SseMove, Cpu::Pentium3)
            .operands([op(Mem, Dq, Access::DST), op(Gpr, Dq, Access::SRC)]),
    ),
    Node::PrefixSelected(&SSE_0FC4), // 0xC4
    Node::PrefixSelected(&SSE_0FC5), // 0xC5
    Node::PrefixSelected(&SSE_0FC6), // 0xC6
    Node::Group(&GROUP_9), // 0xC7
    // 0xC8
    Node::Leaf(
        OpcodeEntry::new("bswap", Operation::Exchange, Cpu::I486)
            .operands([op(OpReg, V, Access::SRC.union(Access::DST))]),
    ),
    // 0xC9
    Node::Leaf(
        OpcodeEntry::new("bswap", Operation::Exchange, Cpu::I486)
            .operands([op(OpReg, V, Access::SRC.union(Access::DST))]),
    ),
    // 0xCA
    Node::Leaf(
        OpcodeEntry::new("bswap", Operation::Exchange, Cpu::I486)
            .operands([op(OpReg, V, Access::SRC.union(Access::DST))]),
    ),
    // 0xCB
    Node::Leaf(
        OpcodeEntry::new("bswap", Operation::Exchange, Cpu::I486)
            .operands([op(OpReg, V, Access::SRC.union(Access::DST))]),
    ),
    // 0xCC
    Node::Leaf(
        OpcodeEntry::new("bswap", Operation::Exchange, Cpu::I486)
            .operands([op(OpReg, V, Access::SRC.union(Access::DST))]),
    ),
    // 0xCD
    Node::Leaf(
        OpcodeEntry::new("bswap", Operation::Exchange, Cpu::I486)
            .operands([op(OpReg, V, Access::SRC.union(Access::DST))]),
    ),
    // 0xCE
    Node::Leaf(
        OpcodeEntry::new("bswap", Operation::Exchange, Cpu::I486)
            .operands([op(OpReg, V, Access::SRC.union(Access::DST))]),
    ),
    // 0xCF
    Node::Leaf(
        OpcodeEntry::new("bswap", Operation::Exchange, Cpu::I486)
            .operands([op(OpReg, V, Access::SRC.union(Access::DST))]),
    ),
    Node::PrefixSelected(&SSE_0FD0), // 0xD0
    Node::PrefixSelected(&SSE_0FD1), // 0xD1
    Node::PrefixSelected(&SSE_0FD2), // 0xD2
    Node::PrefixSelected(&SSE_0FD3), // 0xD3
    Node::PrefixSelected(&SSE_0FD4), // 0xD4
    Node::PrefixSelected(&SSE_0FD5), // 0xD5
    Node::PrefixSelected(&SSE_0FD6), // 0xD6
    Node::PrefixSelected(&SSE_0FD7), // 0xD7
    Node::PrefixSelected(&SSE_0FD8), // 0xD8
    Node::PrefixSelected(&SSE_0FD9), // 0xD9
    Node::PrefixSelected(&SSE_0FDA), // 0xDA
    Node::PrefixSelected(&SSE_0FDB), // 0xDB
    Node::PrefixSelected(&SSE_0FDC), // 0xDC
    Node::PrefixSelected(&SSE_0FDD), // 0xDD
    Node::PrefixSelected(&SSE_0FDE), // 0xDE
    Node::PrefixSelected(&SSE_0FDF), // 0xDF
    Node::PrefixSelected(&SSE_0FE0), // 0xE0
    Node::PrefixSelected(&SSE_0FE1), // 0xE1
    Node::PrefixSelected(&SSE_0FE2), // 0xE2
    Node::PrefixSelected(&SSE_0FE3), // 0xE3
    Node::PrefixSelected(&SSE_0FE4), // 0xE4
    Node::PrefixSelected(&SSE_0FE5), // 0xE5
    Node::PrefixSelected(&SSE_0FE6), // 0xE6
    Node::PrefixSelected(&SSE_0FE7), // 0xE7
    Node::PrefixSelected(&SSE_0FE8), // 0xE8
    Node::PrefixSelected(&SSE_0FE9), // 0xE9
    Node::PrefixSelected(&SSE_0FEA), // 0xEA
    Node::PrefixSelected(&SSE_0FEB), // 0xEB
    Node::PrefixSelected(&SSE_0FEC), // 0xEC
    Node::PrefixSelected(&SSE_0FED), // 0xED
    Node::PrefixSelected(&SSE_0FEE), // 0xEE
    Node::PrefixSelected(&SSE_0FEF), // 0xEF
    Node::PrefixSelected(&SSE_0FF0), // 0xF0
    Node::PrefixSelected(&SSE_0FF1), // 0xF1
    Node::PrefixSelected(&SSE_0FF2), // 0xF2
    Node::PrefixSelected(&SSE_0FF3), // 0xF3
    Node::PrefixSelected(&SSE_0FF4), // 0xF4
    Node::PrefixSelected(&SSE_0FF5), // 0xF5
    Node::PrefixSelected(&SSE_0FF6), // 0xF6
    Node::PrefixSelected(&SSE_0FF7), // 0xF7
    Node::PrefixSelected(&SSE_0FF8), // 0xF8
    Node::PrefixSelected(&SSE_0FF9), // 0xF9
    Node::PrefixSelected(&SSE_0FFA), // 0xFA
    Node::PrefixSelected(&SSE_0FFB), // 0xFB
    Node::PrefixSelected(&SSE_0FFC), // 0xFC
    Node::PrefixSelected(&SSE_0FFD), // 0xFD
    Node::PrefixSelected(&SSE_0FFE), // 0xFE
    Node::Invalid, // 0xFF
];
