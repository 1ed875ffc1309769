//! ModRM groups: eight-slot tables indexed by `ModRM.reg`.

use tablewalk_core::{Access, Actions, Condition, Cpu, FlagEffects, Operation};

use crate::x86::table::Addressing::*;
use crate::x86::table::SizeClass::*;
use crate::x86::table::{fixed, op, Fixed, Node, OpcodeEntry};

/// Flags written by the shifts.
const SHIFT_FLAGS: FlagEffects = FlagEffects::OF_MOD
    .union(FlagEffects::SF_MOD)
    .union(FlagEffects::ZF_MOD)
    .union(FlagEffects::PF_MOD)
    .union(FlagEffects::CF_MOD);

const HINTNOP: Node = Node::Leaf(
    OpcodeEntry::new("hintnop", Operation::System, Cpu::Pentium2)
        .operands([op(RegMem, B, Access::SRC)]),
);

const UNDEF: Node = Node::Leaf(OpcodeEntry::new("undef", Operation::Undefined, Cpu::I386));

/// `80 /r` and its alias `82 /r`: arithmetic on r/m8 with imm8.
pub static GROUP_1_80: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("add", Operation::Add, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("or", Operation::Or, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("adc", Operation::Add, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("sbb", Operation::Sub, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("and", Operation::And, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("sub", Operation::Sub, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("xor", Operation::Xor, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("cmp", Operation::Compare, Cpu::I386)
            .operands([op(RegMem, B, Access::SRC), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
];

/// `81 /r`: arithmetic on r/m with a full immediate.
pub static GROUP_1_81: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("add", Operation::Add, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("or", Operation::Or, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("adc", Operation::Add, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("sbb", Operation::Sub, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("and", Operation::And, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("sub", Operation::Sub, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("xor", Operation::Xor, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("cmp", Operation::Compare, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
];

/// `83 /r`: arithmetic on r/m with a sign-extended imm8.
pub static GROUP_1_83: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("add", Operation::Add, Cpu::I386)
            .operands([
                op(RegMem, V, Access::SIGNED.union(Access::DST)),
                op(Imm, B, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("or", Operation::Or, Cpu::I386)
            .operands([
                op(RegMem, V, Access::SIGNED.union(Access::DST)),
                op(Imm, B, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("adc", Operation::Add, Cpu::I386)
            .operands([
                op(RegMem, V, Access::SIGNED.union(Access::DST)),
                op(Imm, B, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("sbb", Operation::Sub, Cpu::I386)
            .operands([
                op(RegMem, V, Access::SIGNED.union(Access::DST)),
                op(Imm, B, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("and", Operation::And, Cpu::I386)
            .operands([
                op(RegMem, V, Access::SIGNED.union(Access::DST)),
                op(Imm, B, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("sub", Operation::Sub, Cpu::I386)
            .operands([
                op(RegMem, V, Access::SIGNED.union(Access::DST)),
                op(Imm, B, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("xor", Operation::Xor, Cpu::I386)
            .operands([
                op(RegMem, V, Access::SIGNED.union(Access::DST)),
                op(Imm, B, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("cmp", Operation::Compare, Cpu::I386)
            .operands([
                op(RegMem, V, Access::SIGNED.union(Access::SRC)),
                op(Imm, B, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::COMMON_MOD),
    ),
];

/// `C0 /r`: rotate/shift r/m8 by imm8.
pub static GROUP_2_C0: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("rol", Operation::Rol, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("ror", Operation::Ror, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("rcl", Operation::Rol, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("rcr", Operation::Ror, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("shl", Operation::Shl, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::SHIFT_MOD),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("shr", Operation::Shr, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::SHIFT_MOD),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("sal", Operation::Shl, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::SHIFT_MOD),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("sar", Operation::Shr, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::SHIFT_MOD),
    ),
];

/// `C1 /r`: rotate/shift r/m by imm8.
pub static GROUP_2_C1: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("rol", Operation::Rol, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::OF_MOD),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("ror", Operation::Ror, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::OF_MOD),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("rcl", Operation::Rol, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("rcr", Operation::Ror, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("shl", Operation::Shl, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::SHIFT_MOD),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("shr", Operation::Shr, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::SHIFT_MOD),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("sal", Operation::Shl, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::SHIFT_MOD),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("sar", Operation::Shr, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::SHIFT_MOD),
    ),
];

/// `D0 /r`: rotate/shift r/m8 by one.
pub static GROUP_2_D0: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("rol", Operation::Rol, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), fixed(Fixed::One, Access::SRC)])
            .flags(FlagEffects::OF_MOD.union(FlagEffects::CF_MOD)),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("ror", Operation::Ror, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), fixed(Fixed::One, Access::SRC)])
            .flags(FlagEffects::OF_MOD.union(FlagEffects::CF_MOD)),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("rcl", Operation::Rol, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), fixed(Fixed::One, Access::SRC)])
            .flags(FlagEffects::OF_MOD.union(FlagEffects::CF_MOD)),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("rcr", Operation::Ror, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), fixed(Fixed::One, Access::SRC)])
            .flags(FlagEffects::OF_MOD.union(FlagEffects::CF_MOD)),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("shl", Operation::Shl, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), fixed(Fixed::One, Access::SRC)])
            .flags(SHIFT_FLAGS),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("shr", Operation::Shr, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), fixed(Fixed::One, Access::SRC)])
            .flags(SHIFT_FLAGS),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("sal", Operation::Shl, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), fixed(Fixed::One, Access::SRC)])
            .flags(SHIFT_FLAGS),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("sar", Operation::Shr, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), fixed(Fixed::One, Access::SRC)])
            .flags(SHIFT_FLAGS),
    ),
];

/// `D1 /r`: rotate/shift r/m by one.
pub static GROUP_2_D1: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("rol", Operation::Rol, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), fixed(Fixed::One, Access::SRC)])
            .flags(FlagEffects::OF_MOD.union(FlagEffects::CF_MOD)),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("ror", Operation::Ror, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), fixed(Fixed::One, Access::SRC)])
            .flags(FlagEffects::OF_MOD.union(FlagEffects::CF_MOD)),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("rcl", Operation::Rol, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), fixed(Fixed::One, Access::SRC)])
            .flags(FlagEffects::OF_MOD.union(FlagEffects::CF_MOD)),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("rcr", Operation::Ror, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), fixed(Fixed::One, Access::SRC)])
            .flags(FlagEffects::OF_MOD.union(FlagEffects::CF_MOD)),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("shl", Operation::Shl, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), fixed(Fixed::One, Access::SRC)])
            .flags(SHIFT_FLAGS),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("shr", Operation::Shr, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), fixed(Fixed::One, Access::SRC)])
            .flags(SHIFT_FLAGS),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("sal", Operation::Shl, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), fixed(Fixed::One, Access::SRC)])
            .flags(SHIFT_FLAGS),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("sar", Operation::Shr, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), fixed(Fixed::One, Access::SRC)])
            .flags(SHIFT_FLAGS),
    ),
];

/// `D2 /r`: rotate/shift r/m8 by CL.
pub static GROUP_2_D2: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("rol", Operation::Rol, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), fixed(Fixed::Cl, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("ror", Operation::Ror, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), fixed(Fixed::Cl, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("rcl", Operation::Rol, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), fixed(Fixed::Cl, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("rcr", Operation::Ror, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), fixed(Fixed::Cl, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("shl", Operation::Shl, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), fixed(Fixed::Cl, Access::SRC)])
            .flags(FlagEffects::SHIFT_MOD),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("shr", Operation::Shr, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), fixed(Fixed::Cl, Access::SRC)])
            .flags(FlagEffects::SHIFT_MOD),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("sal", Operation::Shl, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), fixed(Fixed::Cl, Access::SRC)])
            .flags(FlagEffects::SHIFT_MOD),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("sar", Operation::Shr, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), fixed(Fixed::Cl, Access::SRC)])
            .flags(FlagEffects::SHIFT_MOD),
    ),
];

/// `D3 /r`: rotate/shift r/m by CL.
pub static GROUP_2_D3: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("rol", Operation::Rol, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), fixed(Fixed::Cl, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("ror", Operation::Ror, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), fixed(Fixed::Cl, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("rcl", Operation::Rol, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), fixed(Fixed::Cl, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("rcr", Operation::Ror, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), fixed(Fixed::Cl, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("shl", Operation::Shl, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), fixed(Fixed::Cl, Access::SRC)])
            .flags(FlagEffects::SHIFT_MOD),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("shr", Operation::Shr, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), fixed(Fixed::Cl, Access::SRC)])
            .flags(FlagEffects::SHIFT_MOD),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("sal", Operation::Shl, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), fixed(Fixed::Cl, Access::SRC)])
            .flags(FlagEffects::SHIFT_MOD),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("sar", Operation::Shr, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), fixed(Fixed::Cl, Access::SRC)])
            .flags(FlagEffects::SHIFT_MOD),
    ),
];

/// `F6 /r`: test/not/neg/mul/div on r/m8.
pub static GROUP_3_F6: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("test", Operation::Test, Cpu::I386)
            .operands([op(RegMem, B, Access::SRC), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("test", Operation::Test, Cpu::I386)
            .operands([op(RegMem, B, Access::SRC), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("not", Operation::Not, Cpu::I386)
            .operands([op(RegMem, B, Access::SRC.union(Access::DST))]),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("neg", Operation::Neg, Cpu::I386)
            .operands([op(RegMem, B, Access::SRC.union(Access::DST))])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("mul", Operation::Mul, Cpu::I386)
            .operands([
                fixed(Fixed::Ax, Access::DST),
                op(RegMem, B, Access::SRC),
                fixed(Fixed::Al, Access::SRC),
            ])
            .flags(FlagEffects::OF_MOD.union(FlagEffects::CF_MOD)),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("imul", Operation::Mul, Cpu::I386)
            .operands([
                fixed(Fixed::Ax, Access::SIGNED.union(Access::DST)),
                op(RegMem, B, Access::SIGNED.union(Access::SRC)),
                fixed(Fixed::Al, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::OF_MOD.union(FlagEffects::CF_MOD)),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("div", Operation::Div, Cpu::I386)
            .operands([
                fixed(Fixed::Ax, Access::DST),
                op(RegMem, B, Access::SRC),
                fixed(Fixed::Ax, Access::SRC),
            ]),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("idiv", Operation::Div, Cpu::I386)
            .operands([
                fixed(Fixed::Ax, Access::SIGNED.union(Access::DST)),
                op(RegMem, B, Access::SIGNED.union(Access::SRC)),
                fixed(Fixed::Ax, Access::SIGNED.union(Access::SRC)),
            ]),
    ),
];

/// `F7 /r`: test/not/neg/mul/div on r/m.
pub static GROUP_3_F7: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("test", Operation::Test, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("test", Operation::Test, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("not", Operation::Not, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC.union(Access::DST))]),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("neg", Operation::Neg, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC.union(Access::DST))])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("mul", Operation::Mul, Cpu::I386)
            .operands([
                fixed(Fixed::RdxRax, Access::DST),
                op(RegMem, V, Access::SRC),
                fixed(Fixed::Acc, Access::SRC),
            ])
            .flags(FlagEffects::OF_MOD.union(FlagEffects::CF_MOD)),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("imul", Operation::Mul, Cpu::I386)
            .operands([
                fixed(Fixed::RdxRax, Access::SIGNED.union(Access::DST)),
                op(RegMem, V, Access::SIGNED.union(Access::SRC)),
                fixed(Fixed::Acc, Access::SRC),
            ])
            .flags(FlagEffects::OF_MOD.union(FlagEffects::CF_MOD)),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("div", Operation::Div, Cpu::I386)
            .operands([
                fixed(Fixed::RdxRax, Access::DST),
                op(RegMem, V, Access::SRC),
                fixed(Fixed::Acc, Access::SRC),
            ]),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("idiv", Operation::Div, Cpu::I386)
            .operands([
                fixed(Fixed::RdxRax, Access::SIGNED.union(Access::DST)),
                op(RegMem, V, Access::SIGNED.union(Access::SRC)),
                fixed(Fixed::Acc, Access::SRC),
            ]),
    ),
];

/// `FE /r`: inc/dec r/m8.
pub static GROUP_4: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("inc", Operation::Inc, Cpu::I386)
            .operands([op(RegMem, B, Access::SRC.union(Access::DST))])
            .flags(FlagEffects::INC_DEC_MOD),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("dec", Operation::Dec, Cpu::I386)
            .operands([op(RegMem, B, Access::SRC.union(Access::DST))])
            .flags(FlagEffects::INC_DEC_MOD),
    ),
    Node::Invalid, // /2
    Node::Invalid, // /3
    Node::Invalid, // /4
    Node::Invalid, // /5
    Node::Invalid, // /6
    Node::Invalid, // /7
];

/// `FF /r`: inc/dec/call/jmp/push.
pub static GROUP_5: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("inc", Operation::Inc, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC.union(Access::DST))])
            .flags(FlagEffects::INC_DEC_MOD),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("dec", Operation::Dec, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC.union(Access::DST))])
            .flags(FlagEffects::INC_DEC_MOD),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("call", Operation::Call, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC.union(Access::EXEC))])
            .with_default_64(),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("call", Operation::Call, Cpu::I386)
            .operands([op(RegMem, P, Access::SRC.union(Access::EXEC))])
            .with_default_64(),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("jmp", Operation::Jump, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC.union(Access::EXEC))])
            .with_default_64(),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("jmp", Operation::Jump, Cpu::I386)
            .operands([op(RegMem, P, Access::SRC.union(Access::EXEC))])
            .with_default_64(),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("push", Operation::Push, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC)])
            .with_default_64(),
    ),
    Node::Invalid, // /7
];

/// `0F 00 /r`: descriptor table registers.
pub static GROUP_6: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("sldt", Operation::System, Cpu::I386)
            .operands([op(RegMem, Mw, Access::DST)]),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("str", Operation::System, Cpu::I386)
            .operands([op(RegMem, Mw, Access::DST)]),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("lldt", Operation::System, Cpu::I386)
            .operands([op(RegMem, W, Access::SRC)]),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("ltr", Operation::System, Cpu::I386)
            .operands([op(RegMem, W, Access::SRC)]),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("verr", Operation::System, Cpu::I386)
            .operands([op(RegMem, W, Access::SRC)])
            .flags(FlagEffects::ZF_MOD),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("verw", Operation::System, Cpu::I386)
            .operands([op(RegMem, W, Access::SRC)])
            .flags(FlagEffects::ZF_MOD),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("jmpe", Operation::Jump, Cpu::Ia64)
            .operands([op(RegMem, V, Access::SRC.union(Access::EXEC))])
            .with_default_64(),
    ),
    Node::Invalid, // /7
];

/// `0F 01 /r`: system table and cache control.
pub static GROUP_7: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("sgdt", Operation::System, Cpu::I386)
            .operands([op(Mem, Dt, Access::DST)]),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("sidt", Operation::System, Cpu::I386)
            .operands([op(Mem, Dt, Access::DST)]),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("lgdt", Operation::System, Cpu::I386)
            .operands([op(Mem, Dt, Access::SRC)]),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("lidt", Operation::System, Cpu::I386)
            .operands([op(Mem, Dt, Access::SRC)]),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("smsw", Operation::System, Cpu::I386)
            .operands([op(RegMem, Mw, Access::DST), fixed(Fixed::Cr0, Access::SRC)]),
    ),
    Node::Invalid, // /5
    // /6
    Node::Leaf(
        OpcodeEntry::new("lmsw", Operation::System, Cpu::I386)
            .operands([fixed(Fixed::Cr0, Access::DST), op(RegMem, W, Access::SRC)]),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("invlpg", Operation::System, Cpu::I486)
            .operands([op(Mem, B, Access::SRC)]),
    ),
];

/// `0F BA /r`: bit test with immediate.
pub static GROUP_8: [Node; 8] = [
    Node::Invalid, // /0
    Node::Invalid, // /1
    Node::Invalid, // /2
    Node::Invalid, // /3
    // /4
    Node::Leaf(
        OpcodeEntry::new("bt", Operation::BitTest, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC.union(Access::DST)), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("bts", Operation::BitTest, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC.union(Access::DST)), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("btr", Operation::BitTest, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC.union(Access::DST)), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("btc", Operation::BitTest, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC.union(Access::DST)), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::CF_MOD),
    ),
];

/// `0F C7 /r`: cmpxchg8b.
pub static GROUP_9: [Node; 8] = [
    Node::Invalid, // /0
    // /1
    Node::Leaf(
        OpcodeEntry::new("cmpxchg8b", Operation::CompareExchange, Cpu::Pentium2)
            .operands([
                op(Mem, Q, Access::SRC.union(Access::COND_DST)),
                fixed(Fixed::RdxRax, Access::SRC.union(Access::COND_DST)),
                fixed(Fixed::RcxRbx, Access::COND_SRC),
            ])
            .condition(Condition::OperandsEqual)
            .flags(FlagEffects::ZF_MOD)
            .taken(Actions::OP1_DST.union(Actions::OP3_SRC))
            .not_taken(Actions::OP2_DST.union(Actions::OP1_SRC)),
    ),
    Node::Invalid, // /2
    Node::Invalid, // /3
    Node::Invalid, // /4
    Node::Invalid, // /5
    Node::Invalid, // /6
    Node::Invalid, // /7
];

/// `8F /r`: pop r/m.
pub static GROUP_10: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("pop", Operation::Pop, Cpu::I386)
            .operands([op(RegMem, V, Access::DST)])
            .with_default_64(),
    ),
    Node::Invalid, // /1
    Node::Invalid, // /2
    Node::Invalid, // /3
    Node::Invalid, // /4
    Node::Invalid, // /5
    Node::Invalid, // /6
    Node::Invalid, // /7
];

/// `0F B9 /r`: reserved invalid opcode.
pub static GROUP_11: [Node; 8] = [
    UNDEF, // /0
    UNDEF, // /1
    UNDEF, // /2
    UNDEF, // /3
    UNDEF, // /4
    UNDEF, // /5
    UNDEF, // /6
    UNDEF, // /7
];

/// `C6 /r`: mov r/m8, imm8.
pub static GROUP_12_C6: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    Node::Invalid, // /1
    Node::Invalid, // /2
    Node::Invalid, // /3
    Node::Invalid, // /4
    Node::Invalid, // /5
    Node::Invalid, // /6
    Node::Invalid, // /7
];

/// `C7 /r`: mov r/m, imm.
pub static GROUP_12_C7: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Imm, Z, Access::SRC)]),
    ),
    Node::Invalid, // /1
    Node::Invalid, // /2
    Node::Invalid, // /3
    Node::Invalid, // /4
    Node::Invalid, // /5
    Node::Invalid, // /6
    Node::Invalid, // /7
];

/// `0F 71 /r`: MMX word shifts by immediate.
pub static GROUP_13: [Node; 8] = [
    Node::Invalid, // /0
    Node::Invalid, // /1
    // /2
    Node::Leaf(
        OpcodeEntry::new("psrlw", Operation::Mmx, Cpu::Pentium2)
            .operands([op(MmxRm, Q, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    Node::Invalid, // /3
    // /4
    Node::Leaf(
        OpcodeEntry::new("psraw", Operation::Mmx, Cpu::Pentium2)
            .operands([op(MmxRm, Q, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    Node::Invalid, // /5
    // /6
    Node::Leaf(
        OpcodeEntry::new("psllw", Operation::Mmx, Cpu::Pentium2)
            .operands([op(MmxRm, Q, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    Node::Invalid, // /7
];

/// `0F 72 /r`: MMX dword shifts by immediate.
pub static GROUP_14: [Node; 8] = [
    Node::Invalid, // /0
    Node::Invalid, // /1
    // /2
    Node::Leaf(
        OpcodeEntry::new("psrld", Operation::Mmx, Cpu::Pentium2)
            .operands([op(MmxRm, Q, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    Node::Invalid, // /3
    // /4
    Node::Leaf(
        OpcodeEntry::new("psrad", Operation::Mmx, Cpu::Pentium2)
            .operands([op(MmxRm, Q, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    Node::Invalid, // /5
    // /6
    Node::Leaf(
        OpcodeEntry::new("pslld", Operation::Mmx, Cpu::Pentium2)
            .operands([op(MmxRm, Q, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    Node::Invalid, // /7
];

/// `0F 73 /r`: MMX qword shifts by immediate.
pub static GROUP_15: [Node; 8] = [
    Node::Invalid, // /0
    Node::Invalid, // /1
    // /2
    Node::Leaf(
        OpcodeEntry::new("psrlq", Operation::Mmx, Cpu::Pentium2)
            .operands([op(MmxRm, Q, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("psrldq", Operation::Mmx, Cpu::Pentium2)
            .operands([op(MmxRm, Q, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    Node::Invalid, // /4
    Node::Invalid, // /5
    // /6
    Node::Leaf(
        OpcodeEntry::new("psllq", Operation::Mmx, Cpu::Pentium2)
            .operands([op(MmxRm, Q, Access::DST), op(Imm, B, Access::SRC)]),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("pslldq", Operation::Mmx, Cpu::Pentium2)
            .operands([op(MmxRm, Q, Access::DST), op(Imm, B, Access::SRC)]),
    ),
];

/// `0F AE /r`: FPU/SSE state and fences.
pub static GROUP_16: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("fxsave", Operation::Fpu, Cpu::Pentium2)
            .operands([op(Mem, Fst2, Access::DST)]),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("fxrstor", Operation::Fpu, Cpu::Pentium2)
            .operands([op(Mem, Fst2, Access::SRC)]),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("ldmxcsr", Operation::Sse, Cpu::Pentium3)
            .operands([op(Mem, D, Access::SRC)]),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("stmxcsr", Operation::Sse, Cpu::Pentium3)
            .operands([op(Mem, D, Access::DST)]),
    ),
    Node::Invalid, // /4
    // /5
    Node::Leaf(
        OpcodeEntry::new("lfence", Operation::System, Cpu::Pentium2)
            .taken(Actions::SERIALIZE_READ),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("mfence", Operation::System, Cpu::Pentium2).taken(Actions::SERIALIZE_ALL),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("sfence", Operation::System, Cpu::Pentium2)
            .taken(Actions::SERIALIZE_WRITE),
    ),
];

/// `0F 18 /r`: prefetch hints.
pub static GROUP_17: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("prefetchnta", Operation::System, Cpu::Pentium2)
            .operands([op(RegMem, B, Access::SRC)]),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("prefetcht0", Operation::System, Cpu::Pentium2)
            .operands([op(RegMem, B, Access::SRC)]),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("prefetcht1", Operation::System, Cpu::Pentium2)
            .operands([op(RegMem, B, Access::SRC)]),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("prefetcht2", Operation::System, Cpu::Pentium2)
            .operands([op(RegMem, B, Access::SRC)]),
    ),
    HINTNOP, // /4
    HINTNOP, // /5
    HINTNOP, // /6
    HINTNOP, // /7
];

/// `0F 0D /r`: 3DNow prefetch.
pub static GROUP_P: [Node; 8] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("prefetch", Operation::Amd3dNow, Cpu::AmdK6_2)
            .operands([op(RegMem, B, Access::SRC)]),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("prefetchw", Operation::Amd3dNow, Cpu::AmdK6_2)
            .operands([op(RegMem, B, Access::SRC)]),
    ),
    Node::Invalid, // /2
    Node::Invalid, // /3
    Node::Invalid, // /4
    Node::Invalid, // /5
    Node::Invalid, // /6
    Node::Invalid, // /7
];
