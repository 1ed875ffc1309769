//! Mandatory-prefix variants of the two-byte map.
//!
//! Each selector holds the unprefixed form plus one variant per `66`, `F2`
//! and `F3` prefix, in that order.

use tablewalk_core::{Access, Cpu, FlagEffects, Operation};

use crate::x86::table::Addressing::*;
use crate::x86::table::SizeClass::*;
use crate::x86::table::{op, Node, OpcodeEntry, PrefixSelect};
use super::groups::{GROUP_13, GROUP_14, GROUP_15};

/// `66 0F 71` shift-by-immediate group on XMM registers.
pub static SSE_GROUP_13: [Node; 8] = [
    Node::Invalid, // /0
    Node::Invalid, // /1
    // /2
    Node::Leaf(
        OpcodeEntry::new("psrlw", Operation::Sse2, Cpu::Pentium4)
            .operands([op(XmmRm, O, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    Node::Invalid, // /3
    // /4
    Node::Leaf(
        OpcodeEntry::new("psraw", Operation::Sse2, Cpu::Pentium4)
            .operands([op(XmmRm, O, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    Node::Invalid, // /5
    // /6
    Node::Leaf(
        OpcodeEntry::new("psllw", Operation::Sse2, Cpu::Pentium4)
            .operands([op(XmmRm, O, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    Node::Invalid, // /7
];

/// `66 0F 72` shift-by-immediate group on XMM registers.
pub static SSE_GROUP_14: [Node; 8] = [
    Node::Invalid, // /0
    Node::Invalid, // /1
    // /2
    Node::Leaf(
        OpcodeEntry::new("psrld", Operation::Sse2, Cpu::Pentium4)
            .operands([op(XmmRm, O, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    Node::Invalid, // /3
    // /4
    Node::Leaf(
        OpcodeEntry::new("psrad", Operation::Sse2, Cpu::Pentium4)
            .operands([op(XmmRm, O, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    Node::Invalid, // /5
    // /6
    Node::Leaf(
        OpcodeEntry::new("pslld", Operation::Sse2, Cpu::Pentium4)
            .operands([op(XmmRm, O, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    Node::Invalid, // /7
];

/// `66 0F 73` shift-by-immediate group on XMM registers.
pub static SSE_GROUP_15: [Node; 8] = [
    Node::Invalid, // /0
    Node::Invalid, // /1
    // /2
    Node::Leaf(
        OpcodeEntry::new("psrlq", Operation::Sse2, Cpu::Pentium4)
            .operands([op(XmmRm, O, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("psrldq", Operation::Sse2, Cpu::Pentium4)
            .operands([op(XmmRm, O, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    Node::Invalid, // /4
    Node::Invalid, // /5
    // /6
    Node::Leaf(
        OpcodeEntry::new("psllq", Operation::Sse2, Cpu::Pentium4)
            .operands([op(XmmRm, O, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("pslldq", Operation::Sse2, Cpu::Pentium4)
            .operands([op(XmmRm, O, Access::DST), op(Imm, B, Access::SRC)]),
    ),
];

pub static SSE_0F10: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("movups", Operation::SseMove, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("movupd", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Xmm, Pd, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("movsd", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Xmm, Sdo, Access::DST), op(XmmMem, Sd, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("movss", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Xmm, Sso, Access::DST), op(XmmMem, Ss, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F11: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("movups", Operation::SseMove, Cpu::Pentium3)
            .operands([op(XmmMem, Ps, Access::DST), op(Xmm, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("movupd", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(XmmMem, Pd, Access::DST), op(Xmm, Pd, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("movsd", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(XmmMem, Sd, Access::DST), op(Xmm, Sd, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("movss", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(XmmMem, Ss, Access::DST), op(Xmm, Ss, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F12: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("movlps", Operation::SseMove, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("movlpd", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Xmm, Sd, Access::DST), op(Mem, Q, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("movddup", Operation::Sse3Move, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, Q, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("movsldup", Operation::Sse3Move, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F13: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("movlps", Operation::SseMove, Cpu::Pentium3)
            .operands([op(Mem, Q, Access::DST), op(Xmm, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("movlpd", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Mem, Q, Access::DST), op(Xmm, Sd, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F14: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("unpcklps", Operation::Sse, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("unpcklpd", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Pd, Access::DST), op(XmmMem, Q, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F15: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("unpckhps", Operation::Sse, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("unpckhpd", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Pd, Access::DST), op(XmmMem, Q, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F16: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("movhps", Operation::SseMove, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("movhpd", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Xmm, Sd, Access::DST), op(Mem, Q, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Leaf(
            OpcodeEntry::new("movshdup", Operation::Sse3Move, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F17: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("movhps", Operation::SseMove, Cpu::Pentium3)
            .operands([op(Mem, Q, Access::DST), op(Xmm, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("mpvhpd", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Mem, Q, Access::DST), op(Xmm, Sd, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F28: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("movaps", Operation::SseMove, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("movapd", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F29: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("movaps", Operation::SseMove, Cpu::Pentium3)
            .operands([op(XmmMem, Ps, Access::DST), op(Xmm, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("movapd", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(XmmMem, O, Access::DST), op(Xmm, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F2A: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("cvtpi2ps", Operation::Sse, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("cvtpi2pd", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(MmxMem, Q, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("cvtsi2sd", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Sd, Access::DST), op(RegMem, Dq, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("cvtsi2ss", Operation::Sse, Cpu::Pentium3)
                .operands([op(Xmm, Ss, Access::DST), op(RegMem, Dq, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F2B: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("movntps", Operation::SseMove, Cpu::Pentium3)
            .operands([op(Mem, O, Access::DST), op(Xmm, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("movntpd", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Mem, O, Access::DST), op(Xmm, Pd, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F2C: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("cvttps2pi", Operation::Sse, Cpu::Pentium3)
            .operands([op(Mmx, Q, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("cvttpd2pi", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Mmx, Q, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("cvttsd2si", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Gpr, Dq, Access::DST), op(XmmMem, Sd, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("cvttss2si", Operation::Sse, Cpu::Pentium3)
                .operands([op(Gpr, Dq, Access::DST), op(XmmMem, Ss, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F2D: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("cvtps2pi", Operation::Sse, Cpu::Pentium3)
            .operands([op(Mmx, Q, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("cvtpd2pi", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Mmx, Q, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("cvtsd2si", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Gpr, Dq, Access::DST), op(XmmMem, Sd, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("cvtss2si", Operation::Sse, Cpu::Pentium3)
                .operands([op(Gpr, Dq, Access::DST), op(XmmMem, Ss, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F2E: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("ucomiss", Operation::SseCompare, Cpu::Pentium3)
            .operands([op(Xmm, Ss, Access::SRC), op(XmmMem, Ss, Access::SRC)])
            .flags(FlagEffects::SSE_COMI_MOD),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("ucomisd", Operation::Sse2Compare, Cpu::Pentium4)
                .operands([op(Xmm, Sd, Access::SRC), op(XmmMem, Sd, Access::SRC)])
                .flags(FlagEffects::SSE_COMI_MOD),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F2F: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("comiss", Operation::SseCompare, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::SRC), op(XmmMem, Ps, Access::SRC)])
            .flags(FlagEffects::SSE_COMI_MOD),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("comisd", Operation::Sse2Compare, Cpu::Pentium4)
                .operands([op(Xmm, Pd, Access::SRC), op(XmmMem, Sd, Access::SRC)])
                .flags(FlagEffects::SSE_COMI_MOD),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F50: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("movmskps", Operation::Sse, Cpu::Pentium3)
            .operands([op(Gpr, D, Access::DST), op(XmmRm, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("movmskpd", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Gpr, D, Access::DST), op(XmmRm, Pd, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F51: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("sqrtps", Operation::Sse, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("sqrtpd", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Pd, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("sqrtsd", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Sd, Access::DST), op(XmmMem, Sd, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("sqrtss", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Ss, Access::DST), op(XmmMem, Ss, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F52: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("rsqrtps", Operation::Sse, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Invalid,
        // F2
        Node::Invalid,
        // F3
        Node::Leaf(
            OpcodeEntry::new("rsqrtss", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Ss, Access::DST), op(XmmMem, Ss, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F53: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("rcpps", Operation::Sse, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Invalid,
        // F2
        Node::Invalid,
        // F3
        Node::Leaf(
            OpcodeEntry::new("rcpss", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Ss, Access::DST), op(XmmMem, Ss, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F54: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("andps", Operation::SseAnd, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("andpd", Operation::Sse2And, Cpu::Pentium4)
                .operands([op(Xmm, Pd, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F55: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("andnps", Operation::SseAnd, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("andnpd", Operation::Sse2And, Cpu::Pentium4)
                .operands([op(Xmm, Pd, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F56: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("orps", Operation::SseOr, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("orpd", Operation::Sse2Or, Cpu::Pentium4)
                .operands([op(Xmm, Pd, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F57: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("xorps", Operation::SseXor, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("xorpd", Operation::Sse2Xor, Cpu::Pentium4)
                .operands([op(Xmm, Pd, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F58: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("addps", Operation::SseAdd, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("addpd", Operation::Sse2Add, Cpu::Pentium4)
                .operands([op(Xmm, Pd, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("addsd", Operation::Sse2Add, Cpu::Pentium4)
                .operands([op(Xmm, Sd, Access::DST), op(XmmMem, Sd, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("addss", Operation::Sse2Add, Cpu::Pentium4)
                .operands([op(Xmm, Ss, Access::DST), op(XmmMem, Ss, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F59: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("mulps", Operation::SseMul, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("mulpd", Operation::Sse2Mul, Cpu::Pentium4)
                .operands([op(Xmm, Pd, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("mulsd", Operation::Sse2Mul, Cpu::Pentium4)
                .operands([op(Xmm, Sd, Access::DST), op(XmmMem, Sd, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("mulss", Operation::Sse2Mul, Cpu::Pentium4)
                .operands([op(Xmm, Ss, Access::DST), op(XmmMem, Ss, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F5A: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("cvtps2pd", Operation::Sse2, Cpu::Pentium4)
            .operands([op(Xmm, Pd, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("cvtpd2ps", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("cvtsd2ss", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Ss, Access::DST), op(XmmMem, Sd, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("cvtss2sd", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Sd, Access::DST), op(XmmMem, Ss, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F5B: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("cvtdq2ps", Operation::Sse2, Cpu::Pentium4)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, O, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("cvtps2dq", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, Ps, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Leaf(
            OpcodeEntry::new("cvttps2dq", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, Ps, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F5C: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("subps", Operation::SseSub, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("subpd", Operation::Sse2Sub, Cpu::Pentium4)
                .operands([op(Xmm, Pd, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("subsd", Operation::Sse2Sub, Cpu::Pentium4)
                .operands([op(Xmm, Sd, Access::DST), op(XmmMem, Sd, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("subss", Operation::Sse2Sub, Cpu::Pentium4)
                .operands([op(Xmm, Ss, Access::DST), op(XmmMem, Ss, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F5D: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("minps", Operation::Sse, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("minpd", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Pd, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("minsd", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Sd, Access::DST), op(XmmMem, Sd, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("minss", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Ss, Access::DST), op(XmmMem, Ss, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F5E: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("divps", Operation::SseDiv, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("divpd", Operation::Sse2Div, Cpu::Pentium4)
                .operands([op(Xmm, Pd, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("divsd", Operation::Sse2Div, Cpu::Pentium4)
                .operands([op(Xmm, Sd, Access::DST), op(XmmMem, Sd, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("divss", Operation::Sse2Div, Cpu::Pentium4)
                .operands([op(Xmm, Ss, Access::DST), op(XmmMem, Ss, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F5F: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("maxps", Operation::Sse, Cpu::Pentium3)
            .operands([op(Xmm, Ps, Access::DST), op(XmmMem, Ps, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("maxpd", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Pd, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("maxsd", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Sd, Access::DST), op(XmmMem, Sd, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("maxss", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Ss, Access::DST), op(XmmMem, Ss, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F60: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("punpcklbw", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, D, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("punpcklbw", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, Q, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F61: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("punpcklwd", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, D, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("punpcklwd", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, Q, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F62: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("punpckldq", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, D, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("punpckldq", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, Q, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F63: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("packsswb", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("packsswb", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F64: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pcmpgtb", Operation::MmxCompare, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pcmpgtb", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F65: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pcmpgtw", Operation::MmxCompare, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pcmpgtw", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F66: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pcmpgtd", Operation::MmxCompare, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pcmpgtd", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F67: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("packuswb", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("packuswb", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F68: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("punpckhbw", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, D, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("punpckhbw", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, Q, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F69: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("punpckhwd", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, D, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("punpckhwd", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, Q, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F6A: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("punpckhdq", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, D, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("punpckhdq", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, Q, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F6B: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("packssdw", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("packssdw", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F6C: PrefixSelect = PrefixSelect {
    plain: Node::Invalid,
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("punpcklqdq", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, Q, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F6D: PrefixSelect = PrefixSelect {
    plain: Node::Invalid,
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("punpckhqdq", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, Q, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F6E: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("movd", Operation::MmxMove, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(RegMem, Dq, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("movd", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(RegMem, Dq, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F6F: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("movq", Operation::MmxMove, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("movdqa", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("movdqa", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("movdqu", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F70: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pshufw", Operation::Mmx, Cpu::Pentium2)
            .operands([
                op(Mmx, Q, Access::DST),
                op(MmxMem, Q, Access::SRC),
                op(Imm, B, Access::SRC),
            ]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pshufd", Operation::Sse2, Cpu::Pentium4)
                .operands([
                    op(Xmm, O, Access::DST),
                    op(XmmMem, O, Access::SRC),
                    op(Imm, B, Access::SRC),
                ]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("pshuflw", Operation::Sse2, Cpu::Pentium4)
                .operands([
                    op(Xmm, Q, Access::DST),
                    op(XmmMem, Q, Access::SRC),
                    op(Imm, B, Access::SRC),
                ]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("pshufhw", Operation::Sse2, Cpu::Pentium4)
                .operands([
                    op(Xmm, Q, Access::DST),
                    op(XmmMem, Q, Access::SRC),
                    op(Imm, B, Access::SRC),
                ]),
        ),
    ],
};

pub static SSE_0F71: PrefixSelect = PrefixSelect {
    plain: Node::Group(&GROUP_13),
    prefixed: [
        // 66
        Node::Group(&SSE_GROUP_13),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F72: PrefixSelect = PrefixSelect {
    plain: Node::Group(&GROUP_14),
    prefixed: [
        // 66
        Node::Group(&SSE_GROUP_14),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F73: PrefixSelect = PrefixSelect {
    plain: Node::Group(&GROUP_15),
    prefixed: [
        // 66
        Node::Group(&SSE_GROUP_15),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F74: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pcmpeqb", Operation::MmxCompare, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pcmpeqb", Operation::Sse2Compare, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F75: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pcmpeqw", Operation::MmxCompare, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pcmpeqw", Operation::Sse2Compare, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F76: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pcmpeqd", Operation::MmxCompare, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pcmpeqd", Operation::Sse2Compare, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F7C: PrefixSelect = PrefixSelect {
    plain: Node::Invalid,
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("haddpd", Operation::Sse3Add, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("haddps", Operation::Sse3Add, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F7D: PrefixSelect = PrefixSelect {
    plain: Node::Invalid,
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("hsubpd", Operation::Sse3Sub, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("hsubps", Operation::Sse3Sub, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0F7E: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("movd", Operation::MmxMove, Cpu::Pentium2)
            .operands([op(RegMem, Dq, Access::DST), op(Mmx, Dq, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("movd", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(RegMem, Dq, Access::DST), op(Xmm, Dq, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Leaf(
            OpcodeEntry::new("movq", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Xmm, Q, Access::DST), op(XmmMem, Q, Access::SRC)]),
        ),
    ],
};

pub static SSE_0F7F: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("movq", Operation::MmxMove, Cpu::Pentium2)
            .operands([op(MmxMem, Q, Access::DST), op(Mmx, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("movdqa", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Leaf(
            OpcodeEntry::new("movdqu", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(XmmMem, O, Access::DST), op(Xmm, O, Access::SRC)]),
        ),
    ],
};

pub static SSE_0FC2: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("cmpps", Operation::SseCompare, Cpu::Pentium3)
            .operands([
                op(Xmm, Ps, Access::DST),
                op(XmmMem, Ps, Access::SRC),
                op(Imm, B, Access::SRC),
            ])
            .flags(FlagEffects::COMMON_MOD),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("cmppd", Operation::Sse2Compare, Cpu::Pentium4)
                .operands([
                    op(Xmm, O, Access::DST),
                    op(XmmMem, O, Access::SRC),
                    op(Imm, B, Access::SRC),
                ])
                .flags(FlagEffects::COMMON_MOD),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("cmpsd", Operation::Sse2Compare, Cpu::Pentium4)
                .operands([
                    op(Xmm, Sd, Access::DST),
                    op(XmmMem, Sd, Access::SRC),
                    op(Imm, B, Access::SRC),
                ])
                .flags(FlagEffects::COMMON_MOD),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("cmpss", Operation::SseCompare, Cpu::Pentium3)
                .operands([
                    op(Xmm, Ss, Access::DST),
                    op(XmmMem, Ss, Access::SRC),
                    op(Imm, B, Access::SRC),
                ])
                .flags(FlagEffects::COMMON_MOD),
        ),
    ],
};

pub static SSE_0FC4: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pinsrw", Operation::Sse, Cpu::Pentium3)
            .operands([
                op(Mmx, Q, Access::DST),
                op(RegMem, W, Access::SRC),
                op(Imm, B, Access::SRC),
            ]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pinsrw", Operation::Sse2, Cpu::Pentium4)
                .operands([
                    op(Xmm, O, Access::DST),
                    op(RegMem, W, Access::SRC),
                    op(Imm, B, Access::SRC),
                ]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FC5: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pextrw", Operation::Sse, Cpu::Pentium3)
            .operands([
                op(Gpr, D, Access::DST),
                op(MmxRm, Q, Access::SRC),
                op(Imm, B, Access::SRC),
            ]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pextrw", Operation::Sse2, Cpu::Pentium4)
                .operands([
                    op(Gpr, D, Access::DST),
                    op(XmmRm, O, Access::SRC),
                    op(Imm, B, Access::SRC),
                ]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FC6: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("shufps", Operation::Sse, Cpu::Pentium3)
            .operands([
                op(Xmm, Ps, Access::DST),
                op(XmmMem, Ps, Access::SRC),
                op(Imm, B, Access::SRC),
            ]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("shufpd", Operation::Sse2, Cpu::Pentium4)
                .operands([
                    op(Xmm, O, Access::DST),
                    op(XmmMem, O, Access::SRC),
                    op(Imm, B, Access::SRC),
                ]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FD0: PrefixSelect = PrefixSelect {
    plain: Node::Invalid,
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("addsubpd", Operation::Sse3, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("addsubps", Operation::Sse3, Cpu::Pentium3)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FD1: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("psrlw", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("psrlw", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FD2: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("psrld", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("psrld", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FD3: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("psrlq", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("psrlq", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FD4: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("paddq", Operation::SseAdd, Cpu::Pentium3)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("paddq", Operation::Sse2Add, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FD5: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pmullw", Operation::MmxMul, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pmullw", Operation::Sse2Mul, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FD6: PrefixSelect = PrefixSelect {
    plain: Node::Invalid,
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("movq", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(XmmMem, Q, Access::DST), op(Xmm, Q, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("movdq2q", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Mmx, Q, Access::DST), op(XmmRm, Q, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("movq2dq", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(MmxRm, Q, Access::SRC)]),
        ),
    ],
};

pub static SSE_0FD7: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pmovmskb", Operation::Sse, Cpu::Pentium3)
            .operands([op(Gpr, D, Access::DST), op(MmxRm, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pmovmskb", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Gpr, D, Access::DST), op(XmmRm, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FD8: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("psubusb", Operation::MmxSub, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("psubusb", Operation::Sse2Sub, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FD9: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("psubusw", Operation::MmxSub, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("psubusw", Operation::Sse2Sub, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FDA: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pminub", Operation::Sse, Cpu::Pentium3)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pminub", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FDB: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pand", Operation::MmxAnd, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pand", Operation::Sse2And, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FDC: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("paddusb", Operation::MmxAdd, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("paddusb", Operation::Sse2Add, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FDD: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("paddusw", Operation::MmxAdd, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("paddusw", Operation::Sse2Add, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FDE: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pmaxub", Operation::Sse, Cpu::Pentium3)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pmaxub", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FDF: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pandn", Operation::MmxAnd, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pandn", Operation::Sse2And, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FE0: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pavgb", Operation::Sse, Cpu::Pentium3)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pavgb", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FE1: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("psraw", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("psraw", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FE2: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("psrad", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("psrad", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FE3: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pavgw", Operation::Sse, Cpu::Pentium3)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pavgw", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FE4: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pmulhuw", Operation::SseMul, Cpu::Pentium3)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pmulhuw", Operation::Sse2Mul, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FE5: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pmulhw", Operation::MmxMul, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pmulhw", Operation::Sse2Mul, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FE6: PrefixSelect = PrefixSelect {
    plain: Node::Invalid,
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("cvttpd2dq", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Q, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F2
        Node::Leaf(
            OpcodeEntry::new("cvtpd2dq", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, Q, Access::DST), op(XmmMem, Pd, Access::SRC)]),
        ),
        // F3
        Node::Leaf(
            OpcodeEntry::new("cvtdq2pd", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, Q, Access::SRC)]),
        ),
    ],
};

pub static SSE_0FE7: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("movntq", Operation::SseMove, Cpu::Pentium3)
            .operands([op(Mem, Q, Access::DST), op(Mmx, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("movntdq", Operation::Sse2Move, Cpu::Pentium4)
                .operands([op(Mem, O, Access::DST), op(Xmm, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FE8: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("psubsb", Operation::MmxSub, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("psubsb", Operation::Sse2Sub, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FE9: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("psubsw", Operation::MmxSub, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("psubsw", Operation::Sse2Sub, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FEA: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pminsw", Operation::Sse, Cpu::Pentium3)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pminsw", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FEB: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("por", Operation::MmxOr, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("por", Operation::Sse2Or, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FEC: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("paddsb", Operation::MmxAdd, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("paddsb", Operation::Sse2Add, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FED: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("paddsw", Operation::MmxAdd, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("paddsw", Operation::Sse2Add, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FEE: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pmaxsw", Operation::Sse, Cpu::Pentium3)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pmaxuw", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FEF: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pxor", Operation::MmxXor, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pxor", Operation::Sse2Xor, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FF0: PrefixSelect = PrefixSelect {
    plain: Node::Invalid,
    prefixed: [
        // 66
        Node::Invalid,
        // F2
        Node::Leaf(
            OpcodeEntry::new("lddqu", Operation::Sse3, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(Mem, O, Access::SRC)]),
        ),
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FF1: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("psllw", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("psllw", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FF2: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pslld", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pslld", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FF3: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("psllq", Operation::Mmx, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("psllq", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FF4: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pmuludq", Operation::SseMul, Cpu::Pentium3)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pmuludq", Operation::Sse2Mul, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FF5: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("pmaddwd", Operation::MmxAdd, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("pmaddwd", Operation::Sse2Add, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FF6: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("psadbw", Operation::Sse, Cpu::Pentium3)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("psadbw", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FF7: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("maskmovq", Operation::Sse, Cpu::Pentium3)
            .operands([op(Mmx, Q, Access::DST), op(MmxRm, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("maskmovdqu", Operation::Sse2, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmRm, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FF8: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("psubb", Operation::MmxSub, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("psubb", Operation::Sse2Sub, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FF9: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("psubw", Operation::MmxSub, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("psubw", Operation::Sse2Sub, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FFA: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("psubd", Operation::MmxSub, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("psubd", Operation::Sse2Sub, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FFB: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("psubq", Operation::SseSub, Cpu::Pentium3)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("psubq", Operation::Sse2Sub, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FFC: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("paddb", Operation::MmxAdd, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("paddb", Operation::Sse2Add, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FFD: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("paddw", Operation::MmxAdd, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("paddw", Operation::Sse2Add, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};

pub static SSE_0FFE: PrefixSelect = PrefixSelect {
    plain: Node::Leaf(
        OpcodeEntry::new("paddd", Operation::MmxAdd, Cpu::Pentium2)
            .operands([op(Mmx, Q, Access::DST), op(MmxMem, Q, Access::SRC)]),
    ),
    prefixed: [
        // 66
        Node::Leaf(
            OpcodeEntry::new("paddd", Operation::Sse2Add, Cpu::Pentium4)
                .operands([op(Xmm, O, Access::DST), op(XmmMem, O, Access::SRC)]),
        ),
        // F2
        Node::Invalid,
        // F3
        Node::Invalid,
    ],
};
