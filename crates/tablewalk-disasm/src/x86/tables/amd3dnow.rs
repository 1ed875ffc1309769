//! 3DNow instructions: `0F 0F /r ib`, where the trailing byte picks the operation.

use tablewalk_core::{Access, Cpu, Operation};

use crate::x86::table::Addressing::*;
use crate::x86::table::SizeClass::*;
use crate::x86::table::{op, Node, OpcodeEntry, SuffixTable, NO_OPERAND};

/// Suffix table for `0F 0F`. The data operands are decoded before the suffix byte.
pub static SUFFIX_3DNOW: SuffixTable = SuffixTable {
    operands: [op(Mmx, Q, Access::empty()), op(MmxMem, Q, Access::empty()), NO_OPERAND],
    entries: [
        Node::Invalid, // 0x00
        Node::Invalid, // 0x01
        Node::Invalid, // 0x02
        Node::Invalid, // 0x03
        Node::Invalid, // 0x04
        Node::Invalid, // 0x05
        Node::Invalid, // 0x06
        Node::Invalid, // 0x07
        Node::Invalid, // 0x08
        Node::Invalid, // 0x09
        Node::Invalid, // 0x0A
        Node::Invalid, // 0x0B
        // 0x0C
        Node::Leaf(
            OpcodeEntry::new("pi2fw", Operation::Amd3dNow, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        // 0x0D
        Node::Leaf(
            OpcodeEntry::new("pi2fd", Operation::Amd3dNow, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0x0E
        Node::Invalid, // 0x0F
        Node::Invalid, // 0x10
        Node::Invalid, // 0x11
        Node::Invalid, // 0x12
        Node::Invalid, // 0x13
        Node::Invalid, // 0x14
        Node::Invalid, // 0x15
        Node::Invalid, // 0x16
        Node::Invalid, // 0x17
        Node::Invalid, // 0x18
        Node::Invalid, // 0x19
        Node::Invalid, // 0x1A
        Node::Invalid, // 0x1B
        // 0x1C
        Node::Leaf(
            OpcodeEntry::new("pf2iw", Operation::Amd3dNow, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        // 0x1D
        Node::Leaf(
            OpcodeEntry::new("pf2id", Operation::Amd3dNow, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0x1E
        Node::Invalid, // 0x1F
        Node::Invalid, // 0x20
        Node::Invalid, // 0x21
        Node::Invalid, // 0x22
        Node::Invalid, // 0x23
        Node::Invalid, // 0x24
        Node::Invalid, // 0x25
        Node::Invalid, // 0x26
        Node::Invalid, // 0x27
        Node::Invalid, // 0x28
        Node::Invalid, // 0x29
        Node::Invalid, // 0x2A
        Node::Invalid, // 0x2B
        Node::Invalid, // 0x2C
        Node::Invalid, // 0x2D
        Node::Invalid, // 0x2E
        Node::Invalid, // 0x2F
        Node::Invalid, // 0x30
        Node::Invalid, // 0x31
        Node::Invalid, // 0x32
        Node::Invalid, // 0x33
        Node::Invalid, // 0x34
        Node::Invalid, // 0x35
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
        Node::Invalid, // 0x40
        Node::Invalid, // 0x41
        Node::Invalid, // 0x42
        Node::Invalid, // 0x43
        Node::Invalid, // 0x44
        Node::Invalid, // 0x45
        Node::Invalid, // 0x46
        Node::Invalid, // 0x47
        Node::Invalid, // 0x48
        Node::Invalid, // 0x49
        Node::Invalid, // 0x4A
        Node::Invalid, // 0x4B
        Node::Invalid, // 0x4C
        Node::Invalid, // 0x4D
        Node::Invalid, // 0x4E
        Node::Invalid, // 0x4F
        Node::Invalid, // 0x50
        Node::Invalid, // 0x51
        Node::Invalid, // 0x52
        Node::Invalid, // 0x53
        Node::Invalid, // 0x54
        Node::Invalid, // 0x55
        Node::Invalid, // 0x56
        Node::Invalid, // 0x57
        Node::Invalid, // 0x58
        Node::Invalid, // 0x59
        Node::Invalid, // 0x5A
        Node::Invalid, // 0x5B
        Node::Invalid, // 0x5C
        Node::Invalid, // 0x5D
        Node::Invalid, // 0x5E
        Node::Invalid, // 0x5F
        Node::Invalid, // 0x60
        Node::Invalid, // 0x61
        Node::Invalid, // 0x62
        Node::Invalid, // 0x63
        Node::Invalid, // 0x64
        Node::Invalid, // 0x65
        Node::Invalid, // 0x66
        Node::Invalid, // 0x67
        Node::Invalid, // 0x68
        Node::Invalid, // 0x69
        Node::Invalid, // 0x6A
        Node::Invalid, // 0x6B
        Node::Invalid, // 0x6C
        Node::Invalid, // 0x6D
        Node::Invalid, // 0x6E
        Node::Invalid, // 0x6F
        Node::Invalid, // 0x70
        Node::Invalid, // 0x71
        Node::Invalid, // 0x72
        Node::Invalid, // 0x73
        Node::Invalid, // 0x74
        Node::Invalid, // 0x75
        Node::Invalid, // 0x76
        Node::Invalid, // 0x77
        Node::Invalid, // 0x78
        Node::Invalid, // 0x79
        Node::Invalid, // 0x7A
        Node::Invalid, // 0x7B
        Node::Invalid, // 0x7C
        Node::Invalid, // 0x7D
        Node::Invalid, // 0x7E
        Node::Invalid, // 0x7F
        Node::Invalid, // 0x80
        Node::Invalid, // 0x81
        Node::Invalid, // 0x82
        Node::Invalid, // 0x83
        Node::Invalid, // 0x84
        Node::Invalid, // 0x85
        Node::Invalid, // 0x86
        Node::Invalid, // 0x87
        Node::Invalid, // 0x88
        Node::Invalid, // 0x89
        // 0x8A
        Node::Leaf(
            OpcodeEntry::new("pfnacc", Operation::Amd3dNow, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0x8B
        Node::Invalid, // 0x8C
        Node::Invalid, // 0x8D
        // 0x8E
        Node::Leaf(
            OpcodeEntry::new("pfpnacc", Operation::Amd3dNow, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0x8F
        // 0x90
        Node::Leaf(
            OpcodeEntry::new("pfcmpge", Operation::Amd3dNowCompare, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0x91
        Node::Invalid, // 0x92
        Node::Invalid, // 0x93
        // 0x94
        Node::Leaf(
            OpcodeEntry::new("pfmin", Operation::Amd3dNow, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0x95
        // 0x96
        Node::Leaf(
            OpcodeEntry::new("pfrcp", Operation::Amd3dNow, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        // 0x97
        Node::Leaf(
            OpcodeEntry::new("pfrsqrt", Operation::Amd3dNow, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0x98
        Node::Invalid, // 0x99
        // 0x9A
        Node::Leaf(
            OpcodeEntry::new("pfsub", Operation::Amd3dNowSub, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0x9B
        Node::Invalid, // 0x9C
        Node::Invalid, // 0x9D
        // 0x9E
        Node::Leaf(
            OpcodeEntry::new("pfadd", Operation::Amd3dNowAdd, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0x9F
        // 0xA0
        Node::Leaf(
            OpcodeEntry::new("pfcmpgt", Operation::Amd3dNowCompare, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0xA1
        Node::Invalid, // 0xA2
        Node::Invalid, // 0xA3
        // 0xA4
        Node::Leaf(
            OpcodeEntry::new("pfmax", Operation::Amd3dNow, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0xA5
        // 0xA6
        Node::Leaf(
            OpcodeEntry::new("pfrcpit1", Operation::Amd3dNow, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        // 0xA7
        Node::Leaf(
            OpcodeEntry::new("pfrsqit1", Operation::Amd3dNow, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0xA8
        Node::Invalid, // 0xA9
        // 0xAA
        Node::Leaf(
            OpcodeEntry::new("pfsubr", Operation::Amd3dNowSub, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0xAB
        Node::Invalid, // 0xAC
        Node::Invalid, // 0xAD
        // 0xAE
        Node::Leaf(
            OpcodeEntry::new("pfacc", Operation::Amd3dNow, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0xAF
        // 0xB0
        Node::Leaf(
            OpcodeEntry::new("pfcmpeq", Operation::Amd3dNowCompare, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0xB1
        Node::Invalid, // 0xB2
        Node::Invalid, // 0xB3
        // 0xB4
        Node::Leaf(
            OpcodeEntry::new("pfmul", Operation::Amd3dNowMul, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0xB5
        // 0xB6
        Node::Leaf(
            OpcodeEntry::new("pfrcpit2", Operation::Amd3dNow, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        // 0xB7
        Node::Leaf(
            OpcodeEntry::new("pmulhrw", Operation::Amd3dNowMul, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0xB8
        Node::Invalid, // 0xB9
        Node::Invalid, // 0xBA
        // 0xBB
        Node::Leaf(
            OpcodeEntry::new("pswapd", Operation::Amd3dNowExchange, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0xBC
        Node::Invalid, // 0xBD
        Node::Invalid, // 0xBE
        // 0xBF
        Node::Leaf(
            OpcodeEntry::new("pavgb", Operation::Amd3dNow, Cpu::AmdK6_2)
                .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        Node::Invalid, // 0xC0
        Node::Invalid, // 0xC1
        Node::Invalid, // 0xC2
        Node::Invalid, // 0xC3
        Node::Invalid, // 0xC4
        Node::Invalid, // 0xC5
        Node::Invalid, // 0xC6
        Node::Invalid, // 0xC7
        Node::Invalid, // 0xC8
        Node::Invalid, // 0xC9
        Node::Invalid, // 0xCA
        Node::Invalid, // 0xCB
        Node::Invalid, // 0xCC
        Node::Invalid, // 0xCD
        Node::Invalid, // 0xCE
        Node::Invalid, // 0xCF
        Node::Invalid, // 0xD0
        Node::Invalid, // 0xD1
        Node::Invalid, // 0xD2
        Node::Invalid, // 0xD3
        Node::Invalid, // 0xD4
        Node::Invalid, // 0xD5
        Node::Invalid, // 0xD6
        Node::Invalid, // 0xD7
        Node::Invalid, // 0xD8
        Node::Invalid, // 0xD9
        Node::Invalid, // 0xDA
        Node::Invalid, // 0xDB
        Node::Invalid, // 0xDC
        Node::Invalid, // 0xDD
        Node::Invalid, // 0xDE
        Node::Invalid, // 0xDF
        Node::Invalid, // 0xE0
        Node::Invalid, // 0xE1
        Node::Invalid, // 0xE2
        Node::Invalid, // 0xE3
        Node::Invalid, // 0xE4
        Node::Invalid, // 0xE5
        Node::Invalid, // 0xE6
        Node::Invalid, // 0xE7
        Node::Invalid, // 0xE8
        Node::Invalid, // 0xE9
        Node::Invalid, // 0xEA
        Node::Invalid, // 0xEB
        Node::Invalid, // 0xEC
        Node::Invalid, // 0xED
        Node::Invalid, // 0xEE
        Node::Invalid, // 0xEF
        Node::Invalid, // 0xF0
        Node::Invalid, // 0xF1
        Node::Invalid, // 0xF2
        Node::Invalid, // 0xF3
        Node::Invalid, // 0xF4
        Node::Invalid, // 0xF5
        Node::Invalid, // 0xF6
        Node::Invalid, // 0xF7
        Node::Invalid, // 0xF8
        Node::Invalid, // 0xF9
        Node::Invalid, // 0xFA
        Node::Invalid, // 0xFB
        Node::Invalid, // 0xFC
        Node::Invalid, // 0xFD
        Node::Invalid, // 0xFE
        Node::Invalid, // 0xFF
    ],
};
