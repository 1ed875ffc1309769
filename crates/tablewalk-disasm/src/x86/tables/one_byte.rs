//! Primary opcode map, indexed by the first opcode byte.

use tablewalk_core::{Access, Actions, Condition, Cpu, FlagEffects, Operation};

use crate::x86::table::Addressing::*;
use crate::x86::table::SizeClass::*;
use crate::x86::table::{fixed, op, Fixed, Node, OpcodeEntry};
use super::fpu::{ESC_D8, ESC_D9, ESC_DA, ESC_DB, ESC_DC, ESC_DD, ESC_DE, ESC_DF};
use super::groups::{
    GROUP_10, GROUP_12_C6, GROUP_12_C7, GROUP_1_80, GROUP_1_81, GROUP_1_83, GROUP_2_C0,
    GROUP_2_C1, GROUP_2_D0, GROUP_2_D1, GROUP_2_D2, GROUP_2_D3, GROUP_3_F6, GROUP_3_F7, GROUP_4,
    GROUP_5,
};
use super::system::OPCODE_63;
use super::two_byte::TWO_BYTE;

/// Every status flag except OF.
const STATUS_EXCEPT_OF: FlagEffects = FlagEffects::SF_MOD
    .union(FlagEffects::ZF_MOD)
    .union(FlagEffects::AF_MOD)
    .union(FlagEffects::PF_MOD)
    .union(FlagEffects::CF_MOD);

/// Both string pointers and the repeat counter, for DF set and clear.
const BOTH_POINTERS_DOWN: Actions = Actions::XDI_DEC_SIZED
    .union(Actions::XSI_DEC_SIZED)
    .union(Actions::XCX_REP_DEC);

const BOTH_POINTERS_UP: Actions = Actions::XDI_INC_SIZED
    .union(Actions::XSI_INC_SIZED)
    .union(Actions::XCX_REP_DEC);

const DEC_REG: Node = Node::Leaf(
    OpcodeEntry::new("dec", Operation::Dec, Cpu::I386)
        .operands([op(OpReg, V, Access::SRC.union(Access::DST))])
        .flags(FlagEffects::INC_DEC_MOD),
);

const INC_REG: Node = Node::Leaf(
    OpcodeEntry::new("inc", Operation::Inc, Cpu::I386)
        .operands([op(OpReg, V, Access::SRC.union(Access::DST))])
        .flags(FlagEffects::INC_DEC_MOD),
);

const MOV_REG: Node = Node::Leaf(
    OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
        .operands([op(OpReg, V, Access::DST), op(Imm, V, Access::SRC)]),
);

const MOV_REG8: Node = Node::Leaf(
    OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
        .operands([op(OpReg, B, Access::DST), op(Imm, B, Access::SRC)]),
);

const POP_REG: Node = Node::Leaf(
    OpcodeEntry::new("pop", Operation::Pop, Cpu::I386)
        .operands([op(OpReg, V, Access::DST)])
        .with_default_64(),
);

const PUSH_REG: Node = Node::Leaf(
    OpcodeEntry::new("push", Operation::Push, Cpu::I386)
        .operands([op(OpReg, V, Access::SRC)])
        .with_default_64(),
);

const XCHG_REG_ACC: OpcodeEntry = OpcodeEntry::new("xchg", Operation::Exchange, Cpu::I386)
    .operands([
        op(OpReg, V, Access::SRC.union(Access::DST)),
        fixed(Fixed::Acc, Access::SRC.union(Access::DST)),
    ]);

const XCHG_REG: Node = Node::Leaf(XCHG_REG_ACC);

/// `90` is nop unless REX.B turns it into `xchg r8, rax`.
static OPCODE_90: [OpcodeEntry; 2] =
    [OpcodeEntry::new("nop", Operation::Nop, Cpu::I386), XCHG_REG_ACC];

/// One-byte opcode table. Prefix bytes are marked so the walk never lands on them.
pub static ONE_BYTE: [Node; 256] = [
    // 0x00
    Node::Leaf(
        OpcodeEntry::new("add", Operation::Add, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Gpr, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x01
    Node::Leaf(
        OpcodeEntry::new("add", Operation::Add, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Gpr, V, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x02
    Node::Leaf(
        OpcodeEntry::new("add", Operation::Add, Cpu::I386)
            .operands([op(Gpr, B, Access::DST), op(RegMem, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x03
    Node::Leaf(
        OpcodeEntry::new("add", Operation::Add, Cpu::I386)
            .operands([op(Gpr, V, Access::DST), op(RegMem, V, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x04
    Node::Leaf(
        OpcodeEntry::new("add", Operation::Add, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x05
    Node::Leaf(
        OpcodeEntry::new("add", Operation::Add, Cpu::I386)
            .operands([fixed(Fixed::Acc, Access::DST), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x06
    Node::Leaf(
        OpcodeEntry::new("push", Operation::Push, Cpu::I386)
            .operands([fixed(Fixed::Es, Access::SRC)])
            .with_default_64(),
    ),
    // 0x07
    Node::Leaf(
        OpcodeEntry::new("pop", Operation::Pop, Cpu::I386)
            .operands([fixed(Fixed::Es, Access::DST)])
            .with_default_64(),
    ),
    // 0x08
    Node::Leaf(
        OpcodeEntry::new("or", Operation::Or, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Gpr, B, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x09
    Node::Leaf(
        OpcodeEntry::new("or", Operation::Or, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Gpr, V, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x0A
    Node::Leaf(
        OpcodeEntry::new("or", Operation::Or, Cpu::I386)
            .operands([op(Gpr, B, Access::DST), op(RegMem, B, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x0B
    Node::Leaf(
        OpcodeEntry::new("or", Operation::Or, Cpu::I386)
            .operands([op(Gpr, V, Access::DST), op(RegMem, V, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x0C
    Node::Leaf(
        OpcodeEntry::new("or", Operation::Or, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x0D
    Node::Leaf(
        OpcodeEntry::new("or", Operation::Or, Cpu::I386)
            .operands([fixed(Fixed::Acc, Access::DST), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x0E
    Node::Leaf(
        OpcodeEntry::new("push", Operation::Push, Cpu::I386)
            .operands([fixed(Fixed::Cs, Access::SRC)])
            .with_default_64(),
    ),
    Node::TwoByteEscape(&TWO_BYTE), // 0x0F
    // 0x10
    Node::Leaf(
        OpcodeEntry::new("adc", Operation::Add, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Gpr, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x11
    Node::Leaf(
        OpcodeEntry::new("adc", Operation::Add, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Gpr, V, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x12
    Node::Leaf(
        OpcodeEntry::new("adc", Operation::Add, Cpu::I386)
            .operands([op(Gpr, B, Access::DST), op(RegMem, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x13
    Node::Leaf(
        OpcodeEntry::new("adc", Operation::Add, Cpu::I386)
            .operands([op(Gpr, V, Access::DST), op(RegMem, V, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x14
    Node::Leaf(
        OpcodeEntry::new("adc", Operation::Add, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x15
    Node::Leaf(
        OpcodeEntry::new("adc", Operation::Add, Cpu::I386)
            .operands([fixed(Fixed::Acc, Access::DST), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x16
    Node::Leaf(
        OpcodeEntry::new("push", Operation::Push, Cpu::I386)
            .operands([fixed(Fixed::Ss, Access::SRC)])
            .with_default_64(),
    ),
    // 0x17
    Node::Leaf(
        OpcodeEntry::new("pop", Operation::Pop, Cpu::I386)
            .operands([fixed(Fixed::Ss, Access::DST)])
            .with_default_64(),
    ),
    // 0x18
    Node::Leaf(
        OpcodeEntry::new("sbb", Operation::Sub, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Gpr, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x19
    Node::Leaf(
        OpcodeEntry::new("sbb", Operation::Sub, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Gpr, V, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x1A
    Node::Leaf(
        OpcodeEntry::new("sbb", Operation::Sub, Cpu::I386)
            .operands([op(Gpr, B, Access::DST), op(RegMem, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x1B
    Node::Leaf(
        OpcodeEntry::new("sbb", Operation::Sub, Cpu::I386)
            .operands([op(Gpr, V, Access::DST), op(RegMem, V, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x1C
    Node::Leaf(
        OpcodeEntry::new("sbb", Operation::Sub, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x1D
    Node::Leaf(
        OpcodeEntry::new("sbb", Operation::Sub, Cpu::I386)
            .operands([fixed(Fixed::Acc, Access::DST), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x1E
    Node::Leaf(
        OpcodeEntry::new("push", Operation::Push, Cpu::I386)
            .operands([fixed(Fixed::Ds, Access::SRC)])
            .with_default_64(),
    ),
    // 0x1F
    Node::Leaf(
        OpcodeEntry::new("pop", Operation::Pop, Cpu::I386)
            .operands([fixed(Fixed::Ds, Access::DST)])
            .with_default_64(),
    ),
    // 0x20
    Node::Leaf(
        OpcodeEntry::new("and", Operation::And, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Gpr, B, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x21
    Node::Leaf(
        OpcodeEntry::new("and", Operation::And, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Gpr, V, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x22
    Node::Leaf(
        OpcodeEntry::new("and", Operation::And, Cpu::I386)
            .operands([op(Gpr, B, Access::DST), op(RegMem, B, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x23
    Node::Leaf(
        OpcodeEntry::new("and", Operation::And, Cpu::I386)
            .operands([op(Gpr, V, Access::DST), op(RegMem, V, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x24
    Node::Leaf(
        OpcodeEntry::new("and", Operation::And, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x25
    Node::Leaf(
        OpcodeEntry::new("and", Operation::And, Cpu::I386)
            .operands([fixed(Fixed::Acc, Access::DST), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    Node::Prefix, // 0x26
    // 0x27
    Node::Leaf(
        OpcodeEntry::new("daa", Operation::BcdAdjust, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::SRC.union(Access::DST))])
            .flags(STATUS_EXCEPT_OF),
    ),
    // 0x28
    Node::Leaf(
        OpcodeEntry::new("sub", Operation::Sub, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Gpr, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x29
    Node::Leaf(
        OpcodeEntry::new("sub", Operation::Sub, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Gpr, V, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x2A
    Node::Leaf(
        OpcodeEntry::new("sub", Operation::Sub, Cpu::I386)
            .operands([op(Gpr, B, Access::DST), op(RegMem, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x2B
    Node::Leaf(
        OpcodeEntry::new("sub", Operation::Sub, Cpu::I386)
            .operands([op(Gpr, V, Access::DST), op(RegMem, V, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x2C
    Node::Leaf(
        OpcodeEntry::new("sub", Operation::Sub, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x2D
    Node::Leaf(
        OpcodeEntry::new("sub", Operation::Sub, Cpu::I386)
            .operands([fixed(Fixed::Acc, Access::DST), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    Node::Prefix, // 0x2E
    // 0x2F
    Node::Leaf(
        OpcodeEntry::new("das", Operation::BcdAdjust, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::SRC.union(Access::DST))])
            .flags(STATUS_EXCEPT_OF),
    ),
    // 0x30
    Node::Leaf(
        OpcodeEntry::new("xor", Operation::Xor, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Gpr, B, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x31
    Node::Leaf(
        OpcodeEntry::new("xor", Operation::Xor, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Gpr, V, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x32
    Node::Leaf(
        OpcodeEntry::new("xor", Operation::Xor, Cpu::I386)
            .operands([op(Gpr, B, Access::DST), op(RegMem, B, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x33
    Node::Leaf(
        OpcodeEntry::new("xor", Operation::Xor, Cpu::I386)
            .operands([op(Gpr, V, Access::DST), op(RegMem, V, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x34
    Node::Leaf(
        OpcodeEntry::new("xor", Operation::Xor, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x35
    Node::Leaf(
        OpcodeEntry::new("xor", Operation::Xor, Cpu::I386)
            .operands([fixed(Fixed::Acc, Access::DST), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    Node::Prefix, // 0x36
    // 0x37
    Node::Leaf(
        OpcodeEntry::new("aaa", Operation::BcdAdjust, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::SRC.union(Access::DST))])
            .flags(FlagEffects::AF_MOD.union(FlagEffects::CF_MOD)),
    ),
    // 0x38
    Node::Leaf(
        OpcodeEntry::new("cmp", Operation::Compare, Cpu::I386)
            .operands([op(RegMem, B, Access::SRC), op(Gpr, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x39
    Node::Leaf(
        OpcodeEntry::new("cmp", Operation::Compare, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC), op(Gpr, V, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x3A
    Node::Leaf(
        OpcodeEntry::new("cmp", Operation::Compare, Cpu::I386)
            .operands([op(Gpr, B, Access::SRC), op(RegMem, B, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x3B
    Node::Leaf(
        OpcodeEntry::new("cmp", Operation::Compare, Cpu::I386)
            .operands([op(Gpr, V, Access::SRC), op(RegMem, V, Access::SRC)])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x3C
    Node::Leaf(
        OpcodeEntry::new("cmp", Operation::Compare, Cpu::I386)
            .operands([
                fixed(Fixed::Al, Access::SIGNED.union(Access::SRC)),
                op(Imm, B, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::COMMON_MOD),
    ),
    // 0x3D
    Node::Leaf(
        OpcodeEntry::new("cmp", Operation::Compare, Cpu::I386)
            .operands([
                fixed(Fixed::Acc, Access::SIGNED.union(Access::SRC)),
                op(Imm, Z, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::COMMON_MOD),
    ),
    Node::Prefix, // 0x3E
    // 0x3F
    Node::Leaf(
        OpcodeEntry::new("aas", Operation::BcdAdjust, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::SRC.union(Access::DST))])
            .flags(FlagEffects::AF_MOD.union(FlagEffects::CF_MOD)),
    ),
    INC_REG, // 0x40
    INC_REG, // 0x41
    INC_REG, // 0x42
    INC_REG, // 0x43
    INC_REG, // 0x44
    INC_REG, // 0x45
    INC_REG, // 0x46
    INC_REG, // 0x47
    DEC_REG, // 0x48
    DEC_REG, // 0x49
    DEC_REG, // 0x4A
    DEC_REG, // 0x4B
    DEC_REG, // 0x4C
    DEC_REG, // 0x4D
    DEC_REG, // 0x4E
    DEC_REG, // 0x4F
    PUSH_REG, // 0x50
    PUSH_REG, // 0x51
    PUSH_REG, // 0x52
    PUSH_REG, // 0x53
    PUSH_REG, // 0x54
    PUSH_REG, // 0x55
    PUSH_REG, // 0x56
    PUSH_REG, // 0x57
    POP_REG, // 0x58
    POP_REG, // 0x59
    POP_REG, // 0x5A
    POP_REG, // 0x5B
    POP_REG, // 0x5C
    POP_REG, // 0x5D
    POP_REG, // 0x5E
    POP_REG, // 0x5F
    Node::Leaf(OpcodeEntry::new("pushad", Operation::PushAll, Cpu::I386)), // 0x60
    Node::Leaf(OpcodeEntry::new("popad", Operation::PopAll, Cpu::I386)), // 0x61
    // 0x62
    Node::Leaf(
        OpcodeEntry::new("bound", Operation::BoundCheck, Cpu::I386)
            .operands([op(Gpr, V, Access::SRC), op(Mem, A, Access::SRC)]),
    ),
    Node::ModeGated(&OPCODE_63), // 0x63
    Node::Prefix, // 0x64
    Node::Prefix, // 0x65
    Node::Prefix, // 0x66
    Node::Prefix, // 0x67
    // 0x68
    Node::Leaf(
        OpcodeEntry::new("push", Operation::Push, Cpu::I386)
            .operands([op(Imm, Z, Access::SRC)])
            .with_default_64(),
    ),
    // 0x69
    Node::Leaf(
        OpcodeEntry::new("imul", Operation::Mul, Cpu::I386)
            .operands([
                op(Gpr, V, Access::SIGNED.union(Access::DST)),
                op(RegMem, V, Access::SIGNED.union(Access::SRC)),
                op(Imm, Z, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::OF_MOD.union(FlagEffects::CF_MOD)),
    ),
    // 0x6A
    Node::Leaf(
        OpcodeEntry::new("push", Operation::Push, Cpu::I386)
            .operands([op(Imm, B, Access::SIGNED.union(Access::SRC))])
            .with_default_64(),
    ),
    // 0x6B
    Node::Leaf(
        OpcodeEntry::new("imul", Operation::Mul, Cpu::I386)
            .operands([
                op(Gpr, V, Access::SIGNED.union(Access::DST)),
                op(RegMem, V, Access::SIGNED.union(Access::SRC)),
                op(Imm, B, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::OF_MOD.union(FlagEffects::CF_MOD)),
    ),
    // 0x6C
    Node::Leaf(
        OpcodeEntry::new("insb", Operation::PortIn, Cpu::I386)
            .operands([
                op(StrDst, B, Access::DST),
                fixed(Fixed::Dx, Access::SYS.union(Access::SRC)),
            ])
            .condition(Condition::Direction)
            .taken(Actions::XDI_DEC.union(Actions::XCX_REP_DEC))
            .not_taken(Actions::XDI_INC.union(Actions::XCX_REP_DEC)),
    ),
    // 0x6D
    Node::Leaf(
        OpcodeEntry::new("insd", Operation::PortIn, Cpu::I386)
            .operands([
                op(StrDst, Z, Access::DST),
                fixed(Fixed::Dx, Access::SYS.union(Access::SRC)),
            ])
            .condition(Condition::Direction)
            .taken(Actions::XDI_DEC_SIZED.union(Actions::XCX_REP_DEC))
            .not_taken(Actions::XDI_INC_SIZED.union(Actions::XCX_REP_DEC)),
    ),
    // 0x6E
    Node::Leaf(
        OpcodeEntry::new("outsb", Operation::PortOut, Cpu::I386)
            .operands([
                fixed(Fixed::Dx, Access::SYS.union(Access::DST)),
                op(StrSrc, B, Access::SRC),
            ])
            .condition(Condition::Direction)
            .taken(Actions::XSI_DEC.union(Actions::XCX_REP_DEC))
            .not_taken(Actions::XSI_INC.union(Actions::XCX_REP_DEC)),
    ),
    // 0x6F
    Node::Leaf(
        OpcodeEntry::new("outsd", Operation::PortOut, Cpu::I386)
            .operands([
                fixed(Fixed::Dx, Access::SYS.union(Access::DST)),
                op(StrSrc, Z, Access::SRC),
            ])
            .condition(Condition::Direction)
            .taken(Actions::XSI_DEC_SIZED.union(Actions::XCX_REP_DEC))
            .not_taken(Actions::XSI_INC_SIZED.union(Actions::XCX_REP_DEC)),
    ),
    // 0x70
    Node::Leaf(
        OpcodeEntry::new("jo", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::Overflow)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x71
    Node::Leaf(
        OpcodeEntry::new("jno", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::NotOverflow)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x72
    Node::Leaf(
        OpcodeEntry::new("jb", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::Below)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x73
    Node::Leaf(
        OpcodeEntry::new("jnb", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::AboveOrEqual)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x74
    Node::Leaf(
        OpcodeEntry::new("jz", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::Equal)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x75
    Node::Leaf(
        OpcodeEntry::new("jnz", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::NotEqual)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x76
    Node::Leaf(
        OpcodeEntry::new("jbe", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::BelowOrEqual)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x77
    Node::Leaf(
        OpcodeEntry::new("ja", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::Above)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x78
    Node::Leaf(
        OpcodeEntry::new("js", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::Sign)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x79
    Node::Leaf(
        OpcodeEntry::new("jns", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::NotSign)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x7A
    Node::Leaf(
        OpcodeEntry::new("jpe", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::Parity)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x7B
    Node::Leaf(
        OpcodeEntry::new("jpo", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::NotParity)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x7C
    Node::Leaf(
        OpcodeEntry::new("jl", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::Less)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x7D
    Node::Leaf(
        OpcodeEntry::new("jge", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::GreaterOrEqual)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x7E
    Node::Leaf(
        OpcodeEntry::new("jle", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::LessOrEqual)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0x7F
    Node::Leaf(
        OpcodeEntry::new("jg", Operation::ConditionalJump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .condition(Condition::Greater)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    Node::Group(&GROUP_1_80), // 0x80
    Node::Group(&GROUP_1_81), // 0x81
    Node::Group(&GROUP_1_80), // 0x82, alias of 0x80
    Node::Group(&GROUP_1_83), // 0x83
    // 0x84
    Node::Leaf(
        OpcodeEntry::new("test", Operation::Test, Cpu::I386)
            .operands([op(RegMem, B, Access::SRC), op(Gpr, B, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x85
    Node::Leaf(
        OpcodeEntry::new("test", Operation::Test, Cpu::I386)
            .operands([op(RegMem, V, Access::SRC), op(Gpr, V, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0x86
    Node::Leaf(
        OpcodeEntry::new("xchg", Operation::Exchange, Cpu::I386)
            .operands([
                op(RegMem, B, Access::SRC.union(Access::DST)),
                op(Gpr, B, Access::SRC.union(Access::DST)),
            ]),
    ),
    // 0x87
    Node::Leaf(
        OpcodeEntry::new("xchg", Operation::Exchange, Cpu::I386)
            .operands([
                op(RegMem, V, Access::SRC.union(Access::DST)),
                op(Gpr, V, Access::SRC.union(Access::DST)),
            ]),
    ),
    // 0x88
    Node::Leaf(
        OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
            .operands([op(RegMem, B, Access::DST), op(Gpr, B, Access::SRC)]),
    ),
    // 0x89
    Node::Leaf(
        OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
            .operands([op(RegMem, V, Access::DST), op(Gpr, V, Access::SRC)]),
    ),
    // 0x8A
    Node::Leaf(
        OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
            .operands([op(Gpr, B, Access::DST), op(RegMem, B, Access::SRC)]),
    ),
    // 0x8B
    Node::Leaf(
        OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
            .operands([op(Gpr, V, Access::DST), op(RegMem, V, Access::SRC)]),
    ),
    // 0x8C
    Node::Leaf(
        OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
            .operands([op(RegMem, Mw, Access::DST), op(SegReg, W, Access::SRC)]),
    ),
    // 0x8D
    Node::Leaf(
        OpcodeEntry::new("lea", Operation::LoadEffectiveAddress, Cpu::I386)
            .operands([op(Gpr, V, Access::DST), op(Mem, Lea, Access::SRC)]),
    ),
    // 0x8E
    Node::Leaf(
        OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
            .operands([op(SegReg, W, Access::DST), op(RegMem, W, Access::SRC)]),
    ),
    Node::Group(&GROUP_10), // 0x8F
    Node::RexBGated(&OPCODE_90), // 0x90
    XCHG_REG, // 0x91
    XCHG_REG, // 0x92
    XCHG_REG, // 0x93
    XCHG_REG, // 0x94
    XCHG_REG, // 0x95
    XCHG_REG, // 0x96
    XCHG_REG, // 0x97
    // 0x98
    Node::Leaf(
        OpcodeEntry::new("cwde", Operation::SignExtendAccumulator, Cpu::I386)
            .operands([
                fixed(Fixed::Acc, Access::SIGNED.union(Access::DST)),
                fixed(Fixed::AccHalf, Access::SIGNED.union(Access::SRC)),
            ]),
    ),
    // 0x99
    Node::Leaf(
        OpcodeEntry::new("cdq", Operation::SignExtendAccumulator, Cpu::I386)
            .operands([
                fixed(Fixed::RdxRax, Access::SIGNED.union(Access::DST)),
                fixed(Fixed::Acc, Access::SIGNED.union(Access::SRC)),
            ]),
    ),
    // 0x9A
    Node::Leaf(
        OpcodeEntry::new("call", Operation::Call, Cpu::I386)
            .operands([op(FarPtr, P, Access::SRC.union(Access::EXEC))])
            .with_default_64(),
    ),
    Node::Leaf(OpcodeEntry::new("wait", Operation::System, Cpu::I386)), // 0x9B
    // 0x9C
    Node::Leaf(
        OpcodeEntry::new("pushf", Operation::PushFlags, Cpu::I386)
            .operands([fixed(Fixed::RFlags, Access::SRC)])
            .with_default_64(),
    ),
    // 0x9D
    Node::Leaf(
        OpcodeEntry::new("popf", Operation::PopFlags, Cpu::I386)
            .operands([fixed(Fixed::RFlags, Access::DST)])
            .flags(FlagEffects::ALL_MOD)
            .with_default_64(),
    ),
    // 0x9E
    Node::Leaf(
        OpcodeEntry::new("sahf", Operation::Move, Cpu::I386)
            .operands([fixed(Fixed::Flags, Access::DST), fixed(Fixed::Ah, Access::SRC)])
            .flags(STATUS_EXCEPT_OF),
    ),
    // 0x9F
    Node::Leaf(
        OpcodeEntry::new("lahf", Operation::Move, Cpu::I386)
            .operands([fixed(Fixed::Ah, Access::DST), fixed(Fixed::Flags, Access::SRC)]),
    ),
    // 0xA0
    Node::Leaf(
        OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::DST), op(MemOffset, B, Access::SRC)]),
    ),
    // 0xA1
    Node::Leaf(
        OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
            .operands([fixed(Fixed::Acc, Access::DST), op(MemOffset, V, Access::SRC)]),
    ),
    // 0xA2
    Node::Leaf(
        OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
            .operands([op(MemOffset, B, Access::DST), fixed(Fixed::Al, Access::SRC)]),
    ),
    // 0xA3
    Node::Leaf(
        OpcodeEntry::new("mov", Operation::Move, Cpu::I386)
            .operands([op(MemOffset, V, Access::DST), fixed(Fixed::Acc, Access::SRC)]),
    ),
    // 0xA4
    Node::Leaf(
        OpcodeEntry::new("movsb", Operation::StringMove, Cpu::I386)
            .operands([op(StrDst, B, Access::DST), op(StrSrc, B, Access::SRC)])
            .condition(Condition::Direction)
            .taken(Actions::XDI_DEC.union(Actions::XSI_DEC).union(Actions::XCX_REP_DEC))
            .not_taken(Actions::XDI_INC.union(Actions::XSI_INC).union(Actions::XCX_REP_DEC)),
    ),
    // 0xA5
    Node::Leaf(
        OpcodeEntry::new("movsd", Operation::StringMove, Cpu::I386)
            .operands([op(StrDst, V, Access::DST), op(StrSrc, V, Access::SRC)])
            .condition(Condition::Direction)
            .taken(BOTH_POINTERS_DOWN)
            .not_taken(BOTH_POINTERS_UP),
    ),
    // 0xA6
    Node::Leaf(
        OpcodeEntry::new("cmpsb", Operation::StringCompare, Cpu::I386)
            .operands([op(StrSrc, B, Access::SRC), op(StrDst, B, Access::SRC)])
            .condition(Condition::Direction)
            .flags(FlagEffects::COMMON_MOD)
            .taken(Actions::XDI_DEC.union(Actions::XSI_DEC).union(Actions::XCX_REP_DEC))
            .not_taken(Actions::XDI_INC.union(Actions::XSI_INC).union(Actions::XCX_REP_DEC)),
    ),
    // 0xA7
    Node::Leaf(
        OpcodeEntry::new("cmpsd", Operation::StringCompare, Cpu::I386)
            .operands([op(StrSrc, V, Access::SRC), op(StrDst, V, Access::SRC)])
            .condition(Condition::Direction)
            .flags(FlagEffects::COMMON_MOD)
            .taken(BOTH_POINTERS_DOWN)
            .not_taken(BOTH_POINTERS_UP),
    ),
    // 0xA8
    Node::Leaf(
        OpcodeEntry::new("test", Operation::Test, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::SRC), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0xA9
    Node::Leaf(
        OpcodeEntry::new("test", Operation::Test, Cpu::I386)
            .operands([fixed(Fixed::Acc, Access::SRC), op(Imm, Z, Access::SRC)])
            .flags(FlagEffects::LOGIC_MOD),
    ),
    // 0xAA
    Node::Leaf(
        OpcodeEntry::new("stosb", Operation::StringStore, Cpu::I386)
            .operands([op(StrDst, B, Access::DST), fixed(Fixed::Al, Access::SRC)])
            .condition(Condition::Direction)
            .taken(Actions::XDI_DEC.union(Actions::XSI_DEC).union(Actions::XCX_REP_DEC))
            .not_taken(Actions::XDI_INC.union(Actions::XSI_INC).union(Actions::XCX_REP_DEC)),
    ),
    // 0xAB
    Node::Leaf(
        OpcodeEntry::new("stosd", Operation::StringStore, Cpu::I386)
            .operands([op(StrDst, V, Access::DST), fixed(Fixed::Acc, Access::SRC)])
            .condition(Condition::Direction)
            .taken(BOTH_POINTERS_DOWN)
            .not_taken(BOTH_POINTERS_UP),
    ),
    // 0xAC
    Node::Leaf(
        OpcodeEntry::new("lodsb", Operation::StringLoad, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::DST), op(StrSrc, B, Access::SRC)])
            .condition(Condition::Direction)
            .taken(Actions::XSI_DEC.union(Actions::XCX_REP_DEC))
            .not_taken(Actions::XSI_INC.union(Actions::XCX_REP_DEC)),
    ),
    // 0xAD
    Node::Leaf(
        OpcodeEntry::new("lodsd", Operation::StringLoad, Cpu::I386)
            .operands([fixed(Fixed::Acc, Access::DST), op(StrSrc, V, Access::SRC)])
            .condition(Condition::Direction)
            .taken(Actions::XSI_DEC_SIZED.union(Actions::XCX_REP_DEC))
            .not_taken(Actions::XSI_INC_SIZED.union(Actions::XCX_REP_DEC)),
    ),
    // 0xAE
    Node::Leaf(
        OpcodeEntry::new("scasb", Operation::StringCompare, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::SRC), op(StrDst, B, Access::SRC)])
            .condition(Condition::Direction)
            .flags(FlagEffects::COMMON_MOD)
            .taken(Actions::XDI_DEC.union(Actions::XCX_REP_DEC))
            .not_taken(Actions::XDI_INC.union(Actions::XCX_REP_DEC)),
    ),
    // 0xAF
    Node::Leaf(
        OpcodeEntry::new("scasd", Operation::StringCompare, Cpu::I386)
            .operands([fixed(Fixed::Acc, Access::SRC), op(StrDst, V, Access::SRC)])
            .condition(Condition::Direction)
            .flags(FlagEffects::COMMON_MOD)
            .taken(Actions::XDI_DEC_SIZED)
            .not_taken(Actions::XDI_INC_SIZED),
    ),
    MOV_REG8, // 0xB0
    MOV_REG8, // 0xB1
    MOV_REG8, // 0xB2
    MOV_REG8, // 0xB3
    MOV_REG8, // 0xB4
    MOV_REG8, // 0xB5
    MOV_REG8, // 0xB6
    MOV_REG8, // 0xB7
    MOV_REG, // 0xB8
    MOV_REG, // 0xB9
    MOV_REG, // 0xBA
    MOV_REG, // 0xBB
    MOV_REG, // 0xBC
    MOV_REG, // 0xBD
    MOV_REG, // 0xBE
    MOV_REG, // 0xBF
    Node::Group(&GROUP_2_C0), // 0xC0
    Node::Group(&GROUP_2_C1), // 0xC1
    // 0xC2
    Node::Leaf(
        OpcodeEntry::new("ret", Operation::Return, Cpu::I386)
            .operands([op(Imm, W, Access::SRC)])
            .with_default_64(),
    ),
    Node::Leaf(OpcodeEntry::new("ret", Operation::Return, Cpu::I386).with_default_64()), // 0xC3
    // 0xC4
    Node::Leaf(
        OpcodeEntry::new("les", Operation::Move, Cpu::I386)
            .operands([op(Gpr, Z, Access::DST), op(Mem, P, Access::SRC)]),
    ),
    // 0xC5
    Node::Leaf(
        OpcodeEntry::new("lds", Operation::Move, Cpu::I386)
            .operands([op(Gpr, Z, Access::DST), op(Mem, P, Access::SRC)]),
    ),
    Node::Group(&GROUP_12_C6), // 0xC6
    Node::Group(&GROUP_12_C7), // 0xC7
    // 0xC8
    Node::Leaf(
        OpcodeEntry::new("enter", Operation::Enter, Cpu::I386)
            .operands([
                fixed(Fixed::FrameBase, Access::SRC.union(Access::DST)),
                op(Imm, W, Access::SRC),
                op(Imm, B, Access::SRC),
            ])
            .with_default_64(),
    ),
    // 0xC9
    Node::Leaf(
        OpcodeEntry::new("leave", Operation::Leave, Cpu::I386)
            .operands([fixed(Fixed::FrameBase, Access::SRC.union(Access::DST))])
            .with_default_64(),
    ),
    // 0xCA
    Node::Leaf(
        OpcodeEntry::new("retf", Operation::Return, Cpu::I386)
            .operands([op(Imm, W, Access::SRC)])
            .with_default_64(),
    ),
    Node::Leaf(OpcodeEntry::new("retf", Operation::Return, Cpu::I386).with_default_64()), // 0xCB
    Node::Leaf(OpcodeEntry::new("int3", Operation::Breakpoint, Cpu::I386)), // 0xCC
    // 0xCD
    Node::Leaf(
        OpcodeEntry::new("int", Operation::Interrupt, Cpu::I386)
            .operands([op(Imm, B, Access::SRC)]),
    ),
    Node::Leaf(OpcodeEntry::new("into", Operation::OverflowTrap, Cpu::I386)), // 0xCE
    // 0xCF
    Node::Leaf(
        OpcodeEntry::new("iret", Operation::InterruptReturn, Cpu::I386)
            .flags(FlagEffects::ALL_MOD),
    ),
    Node::Group(&GROUP_2_D0), // 0xD0
    Node::Group(&GROUP_2_D1), // 0xD1
    Node::Group(&GROUP_2_D2), // 0xD2
    Node::Group(&GROUP_2_D3), // 0xD3
    // 0xD4
    Node::Leaf(
        OpcodeEntry::new("aam", Operation::BcdAdjust, Cpu::I386)
            .operands([fixed(Fixed::Ax, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::SF_MOD.union(FlagEffects::ZF_MOD).union(FlagEffects::PF_MOD)),
    ),
    // 0xD5
    Node::Leaf(
        OpcodeEntry::new("aad", Operation::BcdAdjust, Cpu::I386)
            .operands([fixed(Fixed::Ax, Access::DST), op(Imm, B, Access::SRC)])
            .flags(FlagEffects::SF_MOD.union(FlagEffects::ZF_MOD).union(FlagEffects::PF_MOD)),
    ),
    // 0xD6
    Node::Leaf(
        OpcodeEntry::new("salc", Operation::Arithmetic, Cpu::I386)
            .operands([
                fixed(Fixed::Al, Access::DST),
                fixed(Fixed::AllOnes, Access::SRC),
                fixed(Fixed::Zero, Access::SRC),
            ])
            .condition(Condition::Below)
            .taken(Actions::OP1_DST.union(Actions::OP2_SRC))
            .not_taken(Actions::OP1_DST.union(Actions::OP3_SRC)),
    ),
    // 0xD7
    Node::Leaf(
        OpcodeEntry::new("xlat", Operation::Translate, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::DST), op(Xlat, B, Access::SRC)]),
    ),
    Node::FpuEscape(&ESC_D8), // 0xD8
    Node::FpuEscape(&ESC_D9), // 0xD9
    Node::FpuEscape(&ESC_DA), // 0xDA
    Node::FpuEscape(&ESC_DB), // 0xDB
    Node::FpuEscape(&ESC_DC), // 0xDC
    Node::FpuEscape(&ESC_DD), // 0xDD
    Node::FpuEscape(&ESC_DE), // 0xDE
    Node::FpuEscape(&ESC_DF), // 0xDF
    // 0xE0
    Node::Leaf(
        OpcodeEntry::new("loopnz", Operation::Loop, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .counter(Condition::CounterNotZero)
            .condition(Condition::NotEqual)
            .taken(Actions::OP1_DST.union(Actions::XCX_DEC))
            .with_default_64(),
    ),
    // 0xE1
    Node::Leaf(
        OpcodeEntry::new("loopz", Operation::Loop, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .counter(Condition::CounterNotZero)
            .condition(Condition::Equal)
            .taken(Actions::OP1_DST.union(Actions::XCX_DEC))
            .with_default_64(),
    ),
    // 0xE2
    Node::Leaf(
        OpcodeEntry::new("loop", Operation::Loop, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .counter(Condition::CounterNotZero)
            .taken(Actions::OP1_DST.union(Actions::XCX_DEC))
            .with_default_64(),
    ),
    // 0xE3
    Node::Leaf(
        OpcodeEntry::new("jecxz", Operation::Loop, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::COND_EXEC))])
            .counter(Condition::CounterZero)
            .taken(Actions::OP1_DST)
            .with_default_64(),
    ),
    // 0xE4
    Node::Leaf(
        OpcodeEntry::new("in", Operation::PortIn, Cpu::I386)
            .operands([fixed(Fixed::Al, Access::DST), op(Imm, B, Access::SYS.union(Access::SRC))]),
    ),
    // 0xE5
    Node::Leaf(
        OpcodeEntry::new("in", Operation::PortIn, Cpu::I386)
            .operands([fixed(Fixed::Acc, Access::DST), op(Imm, B, Access::SYS.union(Access::SRC))]),
    ),
    // 0xE6
    Node::Leaf(
        OpcodeEntry::new("out", Operation::PortOut, Cpu::I386)
            .operands([op(Imm, B, Access::SYS.union(Access::DST)), fixed(Fixed::Al, Access::SRC)]),
    ),
    // 0xE7
    Node::Leaf(
        OpcodeEntry::new("out", Operation::PortOut, Cpu::I386)
            .operands([op(Imm, B, Access::SYS.union(Access::DST)), fixed(Fixed::Acc, Access::SRC)]),
    ),
    // 0xE8
    Node::Leaf(
        OpcodeEntry::new("call", Operation::Call, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::EXEC))])
            .with_default_64(),
    ),
    // 0xE9
    Node::Leaf(
        OpcodeEntry::new("jmp", Operation::Jump, Cpu::I386)
            .operands([op(Rel, Z, Access::SRC.union(Access::EXEC))])
            .with_default_64(),
    ),
    // 0xEA
    Node::Leaf(
        OpcodeEntry::new("jmp", Operation::Jump, Cpu::I386)
            .operands([op(FarPtr, P, Access::SRC.union(Access::EXEC))])
            .with_default_64(),
    ),
    // 0xEB
    Node::Leaf(
        OpcodeEntry::new("jmp", Operation::Jump, Cpu::I386)
            .operands([op(Rel, B, Access::SRC.union(Access::EXEC))])
            .with_default_64(),
    ),
    // 0xEC
    Node::Leaf(
        OpcodeEntry::new("in", Operation::PortIn, Cpu::I386)
            .operands([
                fixed(Fixed::Al, Access::DST),
                fixed(Fixed::Dx, Access::SYS.union(Access::SRC)),
            ]),
    ),
    // 0xED
    Node::Leaf(
        OpcodeEntry::new("in", Operation::PortIn, Cpu::I386)
            .operands([
                fixed(Fixed::Acc, Access::DST),
                fixed(Fixed::Dx, Access::SYS.union(Access::SRC)),
            ]),
    ),
    // 0xEE
    Node::Leaf(
        OpcodeEntry::new("out", Operation::PortOut, Cpu::I386)
            .operands([
                fixed(Fixed::Dx, Access::SYS.union(Access::DST)),
                fixed(Fixed::Al, Access::SRC),
            ]),
    ),
    // 0xEF
    Node::Leaf(
        OpcodeEntry::new("out", Operation::PortOut, Cpu::I386)
            .operands([
                fixed(Fixed::Dx, Access::SYS.union(Access::DST)),
                fixed(Fixed::Acc, Access::SRC),
            ]),
    ),
    Node::Prefix, // 0xF0
    Node::Leaf(OpcodeEntry::new("int1", Operation::Breakpoint, Cpu::I386)), // 0xF1
    Node::Prefix, // 0xF2
    Node::Prefix, // 0xF3
    Node::Leaf(OpcodeEntry::new("hlt", Operation::Halt, Cpu::I386)), // 0xF4
    // 0xF5
    Node::Leaf(
        OpcodeEntry::new("cmc", Operation::ComplementCarry, Cpu::I386)
            .operands([fixed(Fixed::Flags, Access::DST)])
            .flags(FlagEffects::CF_TOG),
    ),
    Node::Group(&GROUP_3_F6), // 0xF6
    Node::Group(&GROUP_3_F7), // 0xF7
    // 0xF8
    Node::Leaf(
        OpcodeEntry::new("clc", Operation::ClearCarry, Cpu::I386)
            .operands([fixed(Fixed::Flags, Access::DST)])
            .flags(FlagEffects::CF_CLR),
    ),
    // 0xF9
    Node::Leaf(
        OpcodeEntry::new("stc", Operation::SetCarry, Cpu::I386)
            .operands([fixed(Fixed::Flags, Access::DST)])
            .flags(FlagEffects::CF_SET),
    ),
    // 0xFA
    Node::Leaf(
        OpcodeEntry::new("cli", Operation::ClearInterrupt, Cpu::I386)
            .operands([fixed(Fixed::Flags, Access::DST)])
            .flags(FlagEffects::IF_CLR),
    ),
    // 0xFB
    Node::Leaf(
        OpcodeEntry::new("sti", Operation::SetInterrupt, Cpu::I386)
            .operands([fixed(Fixed::Flags, Access::DST)])
            .flags(FlagEffects::IF_SET),
    ),
    // 0xFC
    Node::Leaf(
        OpcodeEntry::new("cld", Operation::ClearDirection, Cpu::I386)
            .operands([fixed(Fixed::Flags, Access::DST)])
            .flags(FlagEffects::DF_CLR),
    ),
    // 0xFD
    Node::Leaf(
        OpcodeEntry::new("std", Operation::SetDirection, Cpu::I386)
            .operands([fixed(Fixed::Flags, Access::DST)])
            .flags(FlagEffects::DF_SET),
    ),
    Node::Group(&GROUP_4), // 0xFE
    Node::Group(&GROUP_5), // 0xFF
];
