//! Escapes keyed on something other than a plain table index.

use tablewalk_core::{Access, Actions, Cpu, FlagEffects, Msr, Operation};

use crate::x86::table::Addressing::*;
use crate::x86::table::SizeClass::*;
use crate::x86::table::{fixed, op, Fixed, Node, OpcodeEntry};
use super::groups::GROUP_7;

/// `63`: `arpl` outside long mode, `movsxd` in 64-bit mode.
pub static OPCODE_63: [OpcodeEntry; 2] = [
    OpcodeEntry::new("arpl", Operation::System, Cpu::I386)
        .operands([op(RegMem, W, Access::SRC), op(Gpr, W, Access::SRC)])
        .flags(FlagEffects::ZF_MOD),
    OpcodeEntry::new("movsxd", Operation::Move, Cpu::Amd64)
        .operands([
            op(Gpr, V, Access::SIGNED.union(Access::DST)),
            op(RegMem, D, Access::SIGNED.union(Access::SRC)),
        ]),
];

/// `0F 05`: `syscall` with legacy and long-mode MSR sets.
pub static OPCODE_0F05: [OpcodeEntry; 2] = [
    OpcodeEntry::new("syscall", Operation::Syscall, Cpu::AmdK6_2)
        .operands([
            fixed(Fixed::Msr(Msr::Star), Access::MSR.union(Access::SRC)),
            fixed(Fixed::Msr(Msr::Cstar), Access::MSR.union(Access::SRC)),
            fixed(Fixed::Msr(Msr::Fmask), Access::MSR.union(Access::SRC)),
        ])
        .flags(FlagEffects::ZF_MOD),
    OpcodeEntry::new("syscall", Operation::Syscall, Cpu::Amd64)
        .operands([
            fixed(Fixed::Msr(Msr::Star), Access::MSR.union(Access::SRC)),
            fixed(Fixed::Msr(Msr::Lstar), Access::MSR.union(Access::SRC)),
            fixed(Fixed::Msr(Msr::Fmask), Access::MSR.union(Access::SRC)),
        ]),
];

/// `0F 01`: keyed on the whole ModRM byte. Most slots defer to group 7.
pub static MODRM_0F01: [Node; 256] = [
    Node::Group(&GROUP_7), // 0x00
    Node::Group(&GROUP_7), // 0x01
    Node::Group(&GROUP_7), // 0x02
    Node::Group(&GROUP_7), // 0x03
    Node::Group(&GROUP_7), // 0x04
    Node::Group(&GROUP_7), // 0x05
    Node::Group(&GROUP_7), // 0x06
    Node::Group(&GROUP_7), // 0x07
    Node::Group(&GROUP_7), // 0x08
    Node::Group(&GROUP_7), // 0x09
    Node::Group(&GROUP_7), // 0x0A
    Node::Group(&GROUP_7), // 0x0B
    Node::Group(&GROUP_7), // 0x0C
    Node::Group(&GROUP_7), // 0x0D
    Node::Group(&GROUP_7), // 0x0E
    Node::Group(&GROUP_7), // 0x0F
    Node::Group(&GROUP_7), // 0x10
    Node::Group(&GROUP_7), // 0x11
    Node::Group(&GROUP_7), // 0x12
    Node::Group(&GROUP_7), // 0x13
    Node::Group(&GROUP_7), // 0x14
    Node::Group(&GROUP_7), // 0x15
    Node::Group(&GROUP_7), // 0x16
    Node::Group(&GROUP_7), // 0x17
    Node::Group(&GROUP_7), // 0x18
    Node::Group(&GROUP_7), // 0x19
    Node::Group(&GROUP_7), // 0x1A
    Node::Group(&GROUP_7), // 0x1B
    Node::Group(&GROUP_7), // 0x1C
    Node::Group(&GROUP_7), // 0x1D
    Node::Group(&GROUP_7), // 0x1E
    Node::Group(&GROUP_7), // 0x1F
    Node::Group(&GROUP_7), // 0x20
    Node::Group(&GROUP_7), // 0x21
    Node::Group(&GROUP_7), // 0x22
    Node::Group(&GROUP_7), // 0x23
    Node::Group(&GROUP_7), // 0x24
    Node::Group(&GROUP_7), // 0x25
    Node::Group(&GROUP_7), // 0x26
    Node::Group(&GROUP_7), // 0x27
    Node::Group(&GROUP_7), // 0x28
    Node::Group(&GROUP_7), // 0x29
    Node::Group(&GROUP_7), // 0x2A
    Node::Group(&GROUP_7), // 0x2B
    Node::Group(&GROUP_7), // 0x2C
    Node::Group(&GROUP_7), // 0x2D
    Node::Group(&GROUP_7), // 0x2E
    Node::Group(&GROUP_7), // 0x2F
    Node::Group(&GROUP_7), // 0x30
    Node::Group(&GROUP_7), // 0x31
    Node::Group(&GROUP_7), // 0x32
    Node::Group(&GROUP_7), // 0x33
    Node::Group(&GROUP_7), // 0x34
    Node::Group(&GROUP_7), // 0x35
    Node::Group(&GROUP_7), // 0x36
    Node::Group(&GROUP_7), // 0x37
    Node::Group(&GROUP_7), // 0x38
    Node::Group(&GROUP_7), // 0x39
    Node::Group(&GROUP_7), // 0x3A
    Node::Group(&GROUP_7), // 0x3B
    Node::Group(&GROUP_7), // 0x3C
    Node::Group(&GROUP_7), // 0x3D
    Node::Group(&GROUP_7), // 0x3E
    Node::Group(&GROUP_7), // 0x3F
    Node::Group(&GROUP_7), // 0x40
    Node::Group(&GROUP_7), // 0x41
    Node::Group(&GROUP_7), // 0x42
    Node::Group(&GROUP_7), // 0x43
    Node::Group(&GROUP_7), // 0x44
    Node::Group(&GROUP_7), // 0x45
    Node::Group(&GROUP_7), // 0x46
    Node::Group(&GROUP_7), // 0x47
    Node::Group(&GROUP_7), // 0x48
    Node::Group(&GROUP_7), // 0x49
    Node::Group(&GROUP_7), // 0x4A
    Node::Group(&GROUP_7), // 0x4B
    Node::Group(&GROUP_7), // 0x4C
    Node::Group(&GROUP_7), // 0x4D
    Node::Group(&GROUP_7), // 0x4E
    Node::Group(&GROUP_7), // 0x4F
    Node::Group(&GROUP_7), // 0x50
    Node::Group(&GROUP_7), // 0x51
    Node::Group(&GROUP_7), // 0x52
    Node::Group(&GROUP_7), // 0x53
    Node::Group(&GROUP_7), // 0x54
    Node::Group(&GROUP_7), // 0x55
    Node::Group(&GROUP_7), // 0x56
    Node::Group(&GROUP_7), // 0x57
    Node::Group(&GROUP_7), // 0x58
    Node::Group(&GROUP_7), // 0x59
    Node::Group(&GROUP_7), // 0x5A
    Node::Group(&GROUP_7), // 0x5B
    Node::Group(&GROUP_7), // 0x5C
    Node::Group(&GROUP_7), // 0x5D
    Node::Group(&GROUP_7), // 0x5E
    Node::Group(&GROUP_7), // 0x5F
    Node::Group(&GROUP_7), // 0x60
    Node::Group(&GROUP_7), // 0x61
    Node::Group(&GROUP_7), // 0x62
    Node::Group(&GROUP_7), // 0x63
    Node::Group(&GROUP_7), // 0x64
    Node::Group(&GROUP_7), // 0x65
    Node::Group(&GROUP_7), // 0x66
    Node::Group(&GROUP_7), // 0x67
    Node::Group(&GROUP_7), // 0x68
    Node::Group(&GROUP_7), // 0x69
    Node::Group(&GROUP_7), // 0x6A
    Node::Group(&GROUP_7), // 0x6B
    Node::Group(&GROUP_7), // 0x6C
    Node::Group(&GROUP_7), // 0x6D
    Node::Group(&GROUP_7), // 0x6E
    Node::Group(&GROUP_7), // 0x6F
    Node::Group(&GROUP_7), // 0x70
    Node::Group(&GROUP_7), // 0x71
    Node::Group(&GROUP_7), // 0x72
    Node::Group(&GROUP_7), // 0x73
    Node::Group(&GROUP_7), // 0x74
    Node::Group(&GROUP_7), // 0x75
    Node::Group(&GROUP_7), // 0x76
    Node::Group(&GROUP_7), // 0x77
    Node::Group(&GROUP_7), // 0x78
    Node::Group(&GROUP_7), // 0x79
    Node::Group(&GROUP_7), // 0x7A
    Node::Group(&GROUP_7), // 0x7B
    Node::Group(&GROUP_7), // 0x7C
    Node::Group(&GROUP_7), // 0x7D
    Node::Group(&GROUP_7), // 0x7E
    Node::Group(&GROUP_7), // 0x7F
    Node::Group(&GROUP_7), // 0x80
    Node::Group(&GROUP_7), // 0x81
    Node::Group(&GROUP_7), // 0x82
    Node::Group(&GROUP_7), // 0x83
    Node::Group(&GROUP_7), // 0x84
    Node::Group(&GROUP_7), // 0x85
    Node::Group(&GROUP_7), // 0x86
    Node::Group(&GROUP_7), // 0x87
    Node::Group(&GROUP_7), // 0x88
    Node::Group(&GROUP_7), // 0x89
    Node::Group(&GROUP_7), // 0x8A
    Node::Group(&GROUP_7), // 0x8B
    Node::Group(&GROUP_7), // 0x8C
    Node::Group(&GROUP_7), // 0x8D
    Node::Group(&GROUP_7), // 0x8E
    Node::Group(&GROUP_7), // 0x8F
    Node::Group(&GROUP_7), // 0x90
    Node::Group(&GROUP_7), // 0x91
    Node::Group(&GROUP_7), // 0x92
    Node::Group(&GROUP_7), // 0x93
    Node::Group(&GROUP_7), // 0x94
    Node::Group(&GROUP_7), // 0x95
    Node::Group(&GROUP_7), // 0x96
    Node::Group(&GROUP_7), // 0x97
    Node::Group(&GROUP_7), // 0x98
    Node::Group(&GROUP_7), // 0x99
    Node::Group(&GROUP_7), // 0x9A
    Node::Group(&GROUP_7), // 0x9B
    Node::Group(&GROUP_7), // 0x9C
    Node::Group(&GROUP_7), // 0x9D
    Node::Group(&GROUP_7), // 0x9E
    Node::Group(&GROUP_7), // 0x9F
    Node::Group(&GROUP_7), // 0xA0
    Node::Group(&GROUP_7), // 0xA1
    Node::Group(&GROUP_7), // 0xA2
    Node::Group(&GROUP_7), // 0xA3
    Node::Group(&GROUP_7), // 0xA4
    Node::Group(&GROUP_7), // 0xA5
    Node::Group(&GROUP_7), // 0xA6
    Node::Group(&GROUP_7), // 0xA7
    Node::Group(&GROUP_7), // 0xA8
    Node::Group(&GROUP_7), // 0xA9
    Node::Group(&GROUP_7), // 0xAA
    Node::Group(&GROUP_7), // 0xAB
    Node::Group(&GROUP_7), // 0xAC
    Node::Group(&GROUP_7), // 0xAD
    Node::Group(&GROUP_7), // 0xAE
    Node::Group(&GROUP_7), // 0xAF
    Node::Group(&GROUP_7), // 0xB0
    Node::Group(&GROUP_7), // 0xB1
    Node::Group(&GROUP_7), // 0xB2
    Node::Group(&GROUP_7), // 0xB3
    Node::Group(&GROUP_7), // 0xB4
    Node::Group(&GROUP_7), // 0xB5
    Node::Group(&GROUP_7), // 0xB6
    Node::Group(&GROUP_7), // 0xB7
    Node::Group(&GROUP_7), // 0xB8
    Node::Group(&GROUP_7), // 0xB9
    Node::Group(&GROUP_7), // 0xBA
    Node::Group(&GROUP_7), // 0xBB
    Node::Group(&GROUP_7), // 0xBC
    Node::Group(&GROUP_7), // 0xBD
    Node::Group(&GROUP_7), // 0xBE
    Node::Group(&GROUP_7), // 0xBF
    Node::Group(&GROUP_7), // 0xC0
    Node::Group(&GROUP_7), // 0xC1
    Node::Group(&GROUP_7), // 0xC2
    Node::Group(&GROUP_7), // 0xC3
    Node::Group(&GROUP_7), // 0xC4
    Node::Group(&GROUP_7), // 0xC5
    Node::Group(&GROUP_7), // 0xC6
    Node::Group(&GROUP_7), // 0xC7
    Node::Leaf(OpcodeEntry::new("monitor", Operation::System, Cpu::Prescott)), // 0xC8
    // 0xC9
    Node::Leaf(
        OpcodeEntry::new("mwait", Operation::System, Cpu::Prescott).taken(Actions::SERIALIZE_ALL),
    ),
    Node::Group(&GROUP_7), // 0xCA
    Node::Group(&GROUP_7), // 0xCB
    Node::Group(&GROUP_7), // 0xCC
    Node::Group(&GROUP_7), // 0xCD
    Node::Group(&GROUP_7), // 0xCE
    Node::Group(&GROUP_7), // 0xCF
    Node::Group(&GROUP_7), // 0xD0
    Node::Group(&GROUP_7), // 0xD1
    Node::Group(&GROUP_7), // 0xD2
    Node::Group(&GROUP_7), // 0xD3
    Node::Group(&GROUP_7), // 0xD4
    Node::Group(&GROUP_7), // 0xD5
    Node::Group(&GROUP_7), // 0xD6
    Node::Group(&GROUP_7), // 0xD7
    Node::Group(&GROUP_7), // 0xD8
    Node::Group(&GROUP_7), // 0xD9
    Node::Group(&GROUP_7), // 0xDA
    Node::Group(&GROUP_7), // 0xDB
    Node::Group(&GROUP_7), // 0xDC
    Node::Group(&GROUP_7), // 0xDD
    Node::Group(&GROUP_7), // 0xDE
    Node::Group(&GROUP_7), // 0xDF
    Node::Group(&GROUP_7), // 0xE0
    Node::Group(&GROUP_7), // 0xE1
    Node::Group(&GROUP_7), // 0xE2
    Node::Group(&GROUP_7), // 0xE3
    Node::Group(&GROUP_7), // 0xE4
    Node::Group(&GROUP_7), // 0xE5
    Node::Group(&GROUP_7), // 0xE6
    Node::Group(&GROUP_7), // 0xE7
    Node::Group(&GROUP_7), // 0xE8
    Node::Group(&GROUP_7), // 0xE9
    Node::Group(&GROUP_7), // 0xEA
    Node::Group(&GROUP_7), // 0xEB
    Node::Group(&GROUP_7), // 0xEC
    Node::Group(&GROUP_7), // 0xED
    Node::Group(&GROUP_7), // 0xEE
    Node::Group(&GROUP_7), // 0xEF
    Node::Group(&GROUP_7), // 0xF0
    Node::Group(&GROUP_7), // 0xF1
    Node::Group(&GROUP_7), // 0xF2
    Node::Group(&GROUP_7), // 0xF3
    Node::Group(&GROUP_7), // 0xF4
    Node::Group(&GROUP_7), // 0xF5
    Node::Group(&GROUP_7), // 0xF6
    Node::Group(&GROUP_7), // 0xF7
    // 0xF8
    Node::Leaf(
        OpcodeEntry::new("swapgs", Operation::System, Cpu::Amd64)
            .operands([fixed(Fixed::Msr(Msr::KernelGsBase), Access::MSR.union(Access::SRC))]),
    ),
    Node::Group(&GROUP_7), // 0xF9
    Node::Group(&GROUP_7), // 0xFA
    Node::Group(&GROUP_7), // 0xFB
    Node::Group(&GROUP_7), // 0xFC
    Node::Group(&GROUP_7), // 0xFD
    Node::Group(&GROUP_7), // 0xFE
    Node::Group(&GROUP_7), // 0xFF
];
