//! x87 escape tables for opcodes `D8`..=`DF`.
//!
//! Memory forms (ModRM below `C0`) use slots 0-7 selected by `ModRM.reg`;
//! register forms use slot `8 + (modrm - 0xC0)`.

use tablewalk_core::{Access, Actions, Condition, Cpu, FlagEffects, FpuConstant, Operation};

use crate::x86::table::Addressing::*;
use crate::x86::table::SizeClass::*;
use crate::x86::table::{fixed, op, Fixed, Node, OpcodeEntry};

const FADDP_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("faddp", Operation::FpuAdd, Cpu::I287)
        .operands([
            op(FpuStack, Se, Access::SRC.union(Access::DST)),
            fixed(Fixed::St0, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD)
        .taken(Actions::FPU_STACK_POP),
);

const FADD_ST0_STI: Node = Node::Leaf(
    OpcodeEntry::new("fadd", Operation::FpuAdd, Cpu::I287)
        .operands([
            fixed(Fixed::St0, Access::SRC.union(Access::DST)),
            op(FpuStack, Se, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD),
);

const FADD_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fadd", Operation::FpuAdd, Cpu::I287)
        .operands([
            op(FpuStack, Se, Access::SRC.union(Access::DST)),
            fixed(Fixed::St0, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD),
);

const FCMOVBE_ST0_STI: Node = Node::Leaf(
    OpcodeEntry::new("fcmovbe", Operation::FpuConditionalMove, Cpu::PentiumPro)
        .operands([fixed(Fixed::St0, Access::COND_DST), op(FpuStack, Se, Access::COND_SRC)])
        .condition(Condition::BelowOrEqual)
        .flags(FlagEffects::FPU_C1_MOD)
        .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
);

const FCMOVB_ST0_STI: Node = Node::Leaf(
    OpcodeEntry::new("fcmovb", Operation::FpuConditionalMove, Cpu::PentiumPro)
        .operands([fixed(Fixed::St0, Access::COND_DST), op(FpuStack, Se, Access::COND_SRC)])
        .condition(Condition::Below)
        .flags(FlagEffects::FPU_C1_MOD)
        .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
);

const FCMOVE_ST0_STI: Node = Node::Leaf(
    OpcodeEntry::new("fcmove", Operation::FpuConditionalMove, Cpu::PentiumPro)
        .operands([fixed(Fixed::St0, Access::COND_DST), op(FpuStack, Se, Access::COND_SRC)])
        .condition(Condition::Equal)
        .flags(FlagEffects::FPU_C1_MOD)
        .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
);

const FCMOVNBE_ST0_STI: Node = Node::Leaf(
    OpcodeEntry::new("fcmovnbe", Operation::Fpu, Cpu::PentiumPro)
        .operands([fixed(Fixed::St0, Access::COND_DST), op(FpuStack, Se, Access::SRC)])
        .condition(Condition::Above)
        .flags(FlagEffects::FPU_C1_MOD)
        .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
);

const FCMOVNB_ST0_STI: Node = Node::Leaf(
    OpcodeEntry::new("fcmovnb", Operation::Fpu, Cpu::PentiumPro)
        .operands([fixed(Fixed::St0, Access::COND_DST), op(FpuStack, Se, Access::SRC)])
        .condition(Condition::AboveOrEqual)
        .flags(FlagEffects::FPU_C1_MOD)
        .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
);

const FCMOVNE_ST0_STI: Node = Node::Leaf(
    OpcodeEntry::new("fcmovne", Operation::Fpu, Cpu::PentiumPro)
        .operands([fixed(Fixed::St0, Access::COND_DST), op(FpuStack, Se, Access::SRC)])
        .condition(Condition::NotEqual)
        .flags(FlagEffects::FPU_C1_MOD)
        .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
);

const FCMOVNU_ST0_STI: Node = Node::Leaf(
    OpcodeEntry::new("fcmovnu", Operation::Fpu, Cpu::PentiumPro)
        .operands([fixed(Fixed::St0, Access::COND_DST), op(FpuStack, Se, Access::SRC)])
        .condition(Condition::NotParity)
        .flags(FlagEffects::FPU_C1_MOD)
        .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
);

const FCMOVU_ST0_STI: Node = Node::Leaf(
    OpcodeEntry::new("fcmovu", Operation::FpuConditionalMove, Cpu::PentiumPro)
        .operands([fixed(Fixed::St0, Access::COND_DST), op(FpuStack, Se, Access::COND_SRC)])
        .condition(Condition::Parity)
        .flags(FlagEffects::FPU_C1_MOD)
        .taken(Actions::OP1_DST.union(Actions::OP2_SRC)),
);

const FCOMIP_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fcomip", Operation::FpuCompare, Cpu::PentiumPro)
        .operands([op(FpuStack, Se, Access::SRC), fixed(Fixed::St0, Access::SRC)])
        .flags(FlagEffects::FPU_COMI_MOD)
        .taken(Actions::FPU_STACK_POP),
);

const FCOMI_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fcomi", Operation::FpuCompare, Cpu::PentiumPro)
        .operands([op(FpuStack, Se, Access::SRC), fixed(Fixed::St0, Access::SRC)])
        .flags(FlagEffects::FPU_COMI_MOD),
);

const FCOMP_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fcomp", Operation::FpuCompare, Cpu::I287)
        .operands([op(FpuStack, Se, Access::SRC), fixed(Fixed::St0, Access::SRC)])
        .flags(FlagEffects::FPU_COMI_MOD)
        .taken(Actions::FPU_STACK_POP),
);

const FCOM_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fcom", Operation::FpuCompare, Cpu::I287)
        .operands([op(FpuStack, Se, Access::SRC), fixed(Fixed::St0, Access::SRC)])
        .flags(FlagEffects::FPU_COMI_MOD),
);

const FDIVP_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fdivp", Operation::FpuDiv, Cpu::I287)
        .operands([
            op(FpuStack, Se, Access::SRC.union(Access::DST)),
            fixed(Fixed::St0, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD)
        .taken(Actions::FPU_STACK_POP),
);

const FDIVRP_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fdivrp", Operation::FpuDiv, Cpu::I287)
        .operands([
            op(FpuStack, Se, Access::SRC.union(Access::DST)),
            fixed(Fixed::St0, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD)
        .taken(Actions::FPU_STACK_POP),
);

const FDIVR_ST0_STI: Node = Node::Leaf(
    OpcodeEntry::new("fdivr", Operation::FpuDiv, Cpu::I287)
        .operands([
            fixed(Fixed::St0, Access::SRC.union(Access::DST)),
            op(FpuStack, Se, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD),
);

const FDIVR_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fdivr", Operation::FpuDiv, Cpu::I287)
        .operands([
            op(FpuStack, Se, Access::SRC.union(Access::DST)),
            fixed(Fixed::St0, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD),
);

const FDIV_ST0_STI: Node = Node::Leaf(
    OpcodeEntry::new("fdiv", Operation::FpuDiv, Cpu::I287)
        .operands([
            fixed(Fixed::St0, Access::SRC.union(Access::DST)),
            op(FpuStack, Se, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD),
);

const FDIV_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fdiv", Operation::FpuDiv, Cpu::I287)
        .operands([
            op(FpuStack, Se, Access::SRC.union(Access::DST)),
            fixed(Fixed::St0, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD),
);

const FFREE_STI: Node = Node::Leaf(
    OpcodeEntry::new("ffree", Operation::Fpu, Cpu::I287)
        .operands([fixed(Fixed::FpuTag, Access::DST), op(FpuStack, Se, Access::SRC)]),
);

const FLD_STI: Node = Node::Leaf(
    OpcodeEntry::new("fld", Operation::FpuLoad, Cpu::I287)
        .operands([op(FpuStack, Se, Access::SRC)])
        .flags(FlagEffects::FPU_C1_MOD)
        .taken(Actions::FPU_STACK_PUSH),
);

const FMULP_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fmulp", Operation::FpuMul, Cpu::I287)
        .operands([
            op(FpuStack, Se, Access::SRC.union(Access::DST)),
            fixed(Fixed::St0, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD)
        .taken(Actions::FPU_STACK_POP),
);

const FMUL_ST0_STI: Node = Node::Leaf(
    OpcodeEntry::new("fmul", Operation::FpuMul, Cpu::I287)
        .operands([
            fixed(Fixed::St0, Access::SRC.union(Access::DST)),
            op(FpuStack, Se, Access::SRC),
        ]),
);

const FMUL_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fmul", Operation::FpuMul, Cpu::I287)
        .operands([
            op(FpuStack, Se, Access::SRC.union(Access::DST)),
            fixed(Fixed::St0, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD),
);

const FSTP_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fstp", Operation::FpuStore, Cpu::I287)
        .operands([op(FpuStack, Se, Access::DST), fixed(Fixed::St0, Access::SRC)])
        .flags(FlagEffects::FPU_C1_MOD)
        .taken(Actions::FPU_STACK_POP),
);

const FST_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fst", Operation::FpuStore, Cpu::I287)
        .operands([op(FpuStack, Se, Access::DST), fixed(Fixed::St0, Access::SRC)])
        .flags(FlagEffects::FPU_C1_MOD),
);

const FSUBP_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fsubp", Operation::FpuSub, Cpu::I287)
        .operands([
            op(FpuStack, Se, Access::SRC.union(Access::DST)),
            fixed(Fixed::St0, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD)
        .taken(Actions::FPU_STACK_POP),
);

const FSUBRP_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fsubrp", Operation::FpuSub, Cpu::I287)
        .operands([
            op(FpuStack, Se, Access::SRC.union(Access::DST)),
            fixed(Fixed::St0, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD)
        .taken(Actions::FPU_STACK_POP),
);

const FSUBR_ST0_STI: Node = Node::Leaf(
    OpcodeEntry::new("fsubr", Operation::FpuSub, Cpu::I287)
        .operands([
            fixed(Fixed::St0, Access::SRC.union(Access::DST)),
            op(FpuStack, Se, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD),
);

const FSUBR_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fsubr", Operation::FpuSub, Cpu::I287)
        .operands([
            op(FpuStack, Se, Access::SRC.union(Access::DST)),
            fixed(Fixed::St0, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD),
);

const FSUB_ST0_STI: Node = Node::Leaf(
    OpcodeEntry::new("fsub", Operation::FpuSub, Cpu::I287)
        .operands([
            fixed(Fixed::St0, Access::SRC.union(Access::DST)),
            op(FpuStack, Se, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD),
);

const FSUB_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fsub", Operation::FpuSub, Cpu::I287)
        .operands([
            op(FpuStack, Se, Access::SRC.union(Access::DST)),
            fixed(Fixed::St0, Access::SRC),
        ])
        .flags(FlagEffects::FPU_C1_MOD),
);

const FUCOMIP_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fucomip", Operation::FpuCompare, Cpu::PentiumPro)
        .operands([op(FpuStack, Se, Access::SRC), fixed(Fixed::St0, Access::SRC)])
        .flags(FlagEffects::FPU_COMI_MOD)
        .taken(Actions::FPU_STACK_POP),
);

const FUCOMI_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fucomi", Operation::FpuCompare, Cpu::PentiumPro)
        .operands([op(FpuStack, Se, Access::SRC), fixed(Fixed::St0, Access::SRC)])
        .flags(FlagEffects::FPU_COMI_MOD),
);

const FUCOMP_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fucomp", Operation::FpuCompare, Cpu::I387)
        .operands([op(FpuStack, Se, Access::SRC), fixed(Fixed::St0, Access::SRC)])
        .flags(FlagEffects::FPU_ALL_MOD)
        .taken(Actions::FPU_STACK_POP),
);

const FUCOM_STI_ST0: Node = Node::Leaf(
    OpcodeEntry::new("fucom", Operation::FpuCompare, Cpu::I387)
        .operands([op(FpuStack, Se, Access::SRC), fixed(Fixed::St0, Access::SRC)])
        .flags(FlagEffects::FPU_ALL_MOD),
);

const FXCH_ST0_STI: Node = Node::Leaf(
    OpcodeEntry::new("fxch", Operation::FpuExchange, Cpu::I287)
        .operands([
            fixed(Fixed::St0, Access::SRC.union(Access::DST)),
            op(FpuStack, Se, Access::SRC.union(Access::DST)),
        ])
        .flags(FlagEffects::FPU_C1_MOD),
);

/// `D8` escape.
pub static ESC_D8: [Node; 0x48] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("fadd", Operation::FpuAdd, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST)), op(Mem, Ss, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("fmul", Operation::FpuMul, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST)), op(Mem, Ss, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("fcom", Operation::FpuCompare, Cpu::I287)
            .operands([op(Mem, Ss, Access::SRC), fixed(Fixed::St0, Access::SRC)])
            .flags(FlagEffects::FPU_COMI_MOD),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("fcomp", Operation::FpuCompare, Cpu::I287)
            .operands([op(Mem, Ss, Access::SRC), fixed(Fixed::St0, Access::SRC)])
            .flags(FlagEffects::FPU_COMI_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("fsub", Operation::FpuSub, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST)), op(Mem, Ss, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("fsubr", Operation::FpuSub, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST)), op(Mem, Ss, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("fdiv", Operation::FpuDiv, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST)), op(Mem, Ss, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("fdivr", Operation::FpuDiv, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST)), op(Mem, Ss, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    FADD_ST0_STI, // C0
    FADD_ST0_STI, // C1
    FADD_ST0_STI, // C2
    FADD_ST0_STI, // C3
    FADD_ST0_STI, // C4
    FADD_ST0_STI, // C5
    FADD_ST0_STI, // C6
    FADD_ST0_STI, // C7
    FMUL_ST0_STI, // C8
    FMUL_ST0_STI, // C9
    FMUL_ST0_STI, // CA
    FMUL_ST0_STI, // CB
    FMUL_ST0_STI, // CC
    FMUL_ST0_STI, // CD
    FMUL_ST0_STI, // CE
    FMUL_ST0_STI, // CF
    FCOM_STI_ST0, // D0
    FCOM_STI_ST0, // D1
    FCOM_STI_ST0, // D2
    FCOM_STI_ST0, // D3
    FCOM_STI_ST0, // D4
    FCOM_STI_ST0, // D5
    FCOM_STI_ST0, // D6
    FCOM_STI_ST0, // D7
    FCOMP_STI_ST0, // D8
    FCOMP_STI_ST0, // D9
    FCOMP_STI_ST0, // DA
    FCOMP_STI_ST0, // DB
    FCOMP_STI_ST0, // DC
    FCOMP_STI_ST0, // DD
    FCOMP_STI_ST0, // DE
    FCOMP_STI_ST0, // DF
    FSUB_ST0_STI, // E0
    FSUB_ST0_STI, // E1
    FSUB_ST0_STI, // E2
    FSUB_ST0_STI, // E3
    FSUB_ST0_STI, // E4
    FSUB_ST0_STI, // E5
    FSUB_ST0_STI, // E6
    FSUB_ST0_STI, // E7
    FSUBR_ST0_STI, // E8
    FSUBR_ST0_STI, // E9
    FSUBR_ST0_STI, // EA
    FSUBR_ST0_STI, // EB
    FSUBR_ST0_STI, // EC
    FSUBR_ST0_STI, // ED
    FSUBR_ST0_STI, // EE
    FSUBR_ST0_STI, // EF
    FDIV_ST0_STI, // F0
    FDIV_ST0_STI, // F1
    FDIV_ST0_STI, // F2
    FDIV_ST0_STI, // F3
    FDIV_ST0_STI, // F4
    FDIV_ST0_STI, // F5
    FDIV_ST0_STI, // F6
    FDIV_ST0_STI, // F7
    FDIVR_ST0_STI, // F8
    FDIVR_ST0_STI, // F9
    FDIVR_ST0_STI, // FA
    FDIVR_ST0_STI, // FB
    FDIVR_ST0_STI, // FC
    FDIVR_ST0_STI, // FD
    FDIVR_ST0_STI, // FE
    FDIVR_ST0_STI, // FF
];

/// `D9` escape.
pub static ESC_D9: [Node; 0x48] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("fld", Operation::FpuLoad, Cpu::I287)
            .operands([op(Mem, Ss, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_PUSH),
    ),
    Node::Invalid, // /1
    // /2
    Node::Leaf(
        OpcodeEntry::new("fst", Operation::FpuStore, Cpu::I287)
            .operands([op(Mem, Ss, Access::DST), fixed(Fixed::St0, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("fstp", Operation::FpuStore, Cpu::I287)
            .operands([op(Mem, Ss, Access::DST), fixed(Fixed::St0, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("fldenv", Operation::FpuLoadEnvironment, Cpu::I287)
            .operands([op(Mem, Fev, Access::SRC)])
            .flags(FlagEffects::FPU_ALL_MOD),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("fldcw", Operation::FpuLoad, Cpu::I287)
            .operands([fixed(Fixed::FpuControl, Access::DST), op(Mem, W, Access::SRC)]),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("fstenv", Operation::FpuStore, Cpu::I287)
            .operands([op(Mem, Fev, Access::DST)]),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("fnstcw", Operation::FpuStore, Cpu::I287)
            .operands([op(Mem, W, Access::DST), fixed(Fixed::FpuControl, Access::SRC)]),
    ),
    FLD_STI, // C0
    FLD_STI, // C1
    FLD_STI, // C2
    FLD_STI, // C3
    FLD_STI, // C4
    FLD_STI, // C5
    FLD_STI, // C6
    FLD_STI, // C7
    FXCH_ST0_STI, // C8
    FXCH_ST0_STI, // C9
    FXCH_ST0_STI, // CA
    FXCH_ST0_STI, // CB
    FXCH_ST0_STI, // CC
    FXCH_ST0_STI, // CD
    FXCH_ST0_STI, // CE
    FXCH_ST0_STI, // CF
    Node::Leaf(OpcodeEntry::new("fnop", Operation::Fpu, Cpu::I287)), // D0
    Node::Invalid, // D1
    Node::Invalid, // D2
    Node::Invalid, // D3
    Node::Invalid, // D4
    Node::Invalid, // D5
    Node::Invalid, // D6
    Node::Invalid, // D7
    Node::Invalid, // D8
    Node::Invalid, // D9
    Node::Invalid, // DA
    Node::Invalid, // DB
    Node::Invalid, // DC
    Node::Invalid, // DD
    Node::Invalid, // DE
    Node::Invalid, // DF
    // E0
    Node::Leaf(
        OpcodeEntry::new("fchs", Operation::Fpu, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST))])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // E1
    Node::Leaf(
        OpcodeEntry::new("fabs", Operation::Fpu, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST))])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    Node::Invalid, // E2
    Node::Invalid, // E3
    // E4
    Node::Leaf(
        OpcodeEntry::new("ftst", Operation::Fpu, Cpu::I287)
            .operands([
                fixed(Fixed::St0, Access::SRC),
                fixed(Fixed::FpuConst(FpuConstant::Zero), Access::SRC),
            ])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // E5
    Node::Leaf(
        OpcodeEntry::new("fxam", Operation::Fpu, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC)])
            .flags(FlagEffects::FPU_ALL_MOD),
    ),
    Node::Invalid, // E6
    Node::Invalid, // E7
    // E8
    Node::Leaf(
        OpcodeEntry::new("fld1", Operation::FpuLoad, Cpu::I287)
            .operands([fixed(Fixed::FpuConst(FpuConstant::One), Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_PUSH),
    ),
    // E9
    Node::Leaf(
        OpcodeEntry::new("fldl2t", Operation::FpuLoad, Cpu::I287)
            .operands([fixed(Fixed::FpuConst(FpuConstant::Log2Ten), Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_PUSH),
    ),
    // EA
    Node::Leaf(
        OpcodeEntry::new("fldl2e", Operation::FpuLoad, Cpu::I287)
            .operands([fixed(Fixed::FpuConst(FpuConstant::Log2E), Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_PUSH),
    ),
    // EB
    Node::Leaf(
        OpcodeEntry::new("fldpi", Operation::FpuLoad, Cpu::I287)
            .operands([fixed(Fixed::FpuConst(FpuConstant::Pi), Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_PUSH),
    ),
    // EC
    Node::Leaf(
        OpcodeEntry::new("fldlg2", Operation::FpuLoad, Cpu::I287)
            .operands([fixed(Fixed::FpuConst(FpuConstant::Log10Two), Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_PUSH),
    ),
    // ED
    Node::Leaf(
        OpcodeEntry::new("fldln2", Operation::FpuLoad, Cpu::I287)
            .operands([fixed(Fixed::FpuConst(FpuConstant::LnTwo), Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_PUSH),
    ),
    // EE
    Node::Leaf(
        OpcodeEntry::new("fldz", Operation::FpuLoad, Cpu::I287)
            .operands([fixed(Fixed::FpuConst(FpuConstant::Zero), Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_PUSH),
    ),
    Node::Invalid, // EF
    // F0
    Node::Leaf(
        OpcodeEntry::new("f2xm1", Operation::Fpu, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST))])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // F1
    Node::Leaf(
        OpcodeEntry::new("fyl2x", Operation::Fpu, Cpu::I287)
            .operands([
                fixed(Fixed::St1, Access::SRC.union(Access::DST)),
                fixed(Fixed::St0, Access::SRC),
            ])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // F2
    Node::Leaf(
        OpcodeEntry::new("fptan", Operation::Fpu, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST))])
            .flags(FlagEffects::FPU_C1_MOD.union(FlagEffects::FPU_C2_MOD))
            .taken(Actions::FPU_STACK_PUSH),
    ),
    // F3
    Node::Leaf(
        OpcodeEntry::new("fpatan", Operation::Fpu, Cpu::I287)
            .operands([
                fixed(Fixed::St1, Access::SRC.union(Access::DST)),
                fixed(Fixed::St0, Access::SRC),
            ])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    // F4
    Node::Leaf(
        OpcodeEntry::new("fxtract", Operation::Fpu, Cpu::I287)
            .operands([
                fixed(Fixed::St0, Access::SRC.union(Access::DST)),
                fixed(Fixed::St1, Access::DST),
            ])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_PUSH),
    ),
    // F5
    Node::Leaf(
        OpcodeEntry::new("fprem1", Operation::Fpu, Cpu::I387)
            .operands([
                fixed(Fixed::St0, Access::SRC.union(Access::DST)),
                fixed(Fixed::St1, Access::SRC),
            ])
            .flags(FlagEffects::FPU_ALL_MOD),
    ),
    // F6
    Node::Leaf(
        OpcodeEntry::new("fdecstp", Operation::Fpu, Cpu::I287)
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_DEC),
    ),
    // F7
    Node::Leaf(
        OpcodeEntry::new("fincstp", Operation::Fpu, Cpu::I287)
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_INC),
    ),
    // F8
    Node::Leaf(
        OpcodeEntry::new("fprem", Operation::Fpu, Cpu::I287)
            .operands([
                fixed(Fixed::St0, Access::SRC.union(Access::DST)),
                fixed(Fixed::St1, Access::SRC),
            ])
            .flags(FlagEffects::FPU_ALL_MOD),
    ),
    // F9
    Node::Leaf(
        OpcodeEntry::new("fyl2xp1", Operation::Fpu, Cpu::I287)
            .operands([
                fixed(Fixed::St1, Access::SRC.union(Access::DST)),
                fixed(Fixed::St0, Access::SRC),
            ])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    // FA
    Node::Leaf(
        OpcodeEntry::new("fsqrt", Operation::Fpu, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST))])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // FB
    Node::Leaf(
        OpcodeEntry::new("fsincos", Operation::Fpu, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST))])
            .flags(FlagEffects::FPU_C1_MOD.union(FlagEffects::FPU_C2_MOD))
            .taken(Actions::FPU_STACK_PUSH),
    ),
    // FC
    Node::Leaf(
        OpcodeEntry::new("frndint", Operation::Fpu, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST))]),
    ),
    // FD
    Node::Leaf(
        OpcodeEntry::new("fscale", Operation::Fpu, Cpu::I287)
            .operands([
                fixed(Fixed::St0, Access::SRC.union(Access::DST)),
                fixed(Fixed::St1, Access::SRC),
            ]),
    ),
    // FE
    Node::Leaf(
        OpcodeEntry::new("fsin", Operation::Fpu, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST))])
            .flags(FlagEffects::FPU_C1_MOD.union(FlagEffects::FPU_C2_MOD)),
    ),
    // FF
    Node::Leaf(
        OpcodeEntry::new("fcos", Operation::Fpu, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST))])
            .flags(FlagEffects::FPU_C1_MOD.union(FlagEffects::FPU_C2_MOD)),
    ),
];

/// `DA` escape.
pub static ESC_DA: [Node; 0x48] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("fiadd", Operation::FpuAdd, Cpu::I287)
            .operands([
                fixed(Fixed::St0, Access::SIGNED.union(Access::SRC).union(Access::DST)),
                op(Mem, Sd, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("fimul", Operation::FpuMul, Cpu::I287)
            .operands([
                fixed(Fixed::St0, Access::SIGNED.union(Access::SRC).union(Access::DST)),
                op(Mem, Sd, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("ficom", Operation::FpuCompare, Cpu::I287)
            .operands([
                op(Mem, Sd, Access::SIGNED.union(Access::SRC)),
                fixed(Fixed::St0, Access::SRC.union(Access::DST)),
            ])
            .flags(FlagEffects::FPU_ALL_MOD),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("ficomp", Operation::FpuCompare, Cpu::I287)
            .operands([
                op(Mem, Sd, Access::SIGNED.union(Access::SRC)),
                fixed(Fixed::St0, Access::SRC.union(Access::DST)),
            ])
            .flags(FlagEffects::FPU_ALL_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("fisub", Operation::FpuSub, Cpu::I287)
            .operands([
                fixed(Fixed::St0, Access::SRC.union(Access::DST)),
                op(Mem, Sd, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("fisubr", Operation::FpuSub, Cpu::I287)
            .operands([
                fixed(Fixed::St0, Access::SRC.union(Access::DST)),
                op(Mem, Sd, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("fidiv", Operation::FpuDiv, Cpu::I287)
            .operands([
                fixed(Fixed::St0, Access::SRC.union(Access::DST)),
                op(Mem, Sd, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("fidivr", Operation::FpuDiv, Cpu::I287)
            .operands([
                fixed(Fixed::St0, Access::SRC.union(Access::DST)),
                op(Mem, Sd, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    FCMOVB_ST0_STI, // C0
    FCMOVB_ST0_STI, // C1
    FCMOVB_ST0_STI, // C2
    FCMOVB_ST0_STI, // C3
    FCMOVB_ST0_STI, // C4
    FCMOVB_ST0_STI, // C5
    FCMOVB_ST0_STI, // C6
    FCMOVB_ST0_STI, // C7
    FCMOVE_ST0_STI, // C8
    FCMOVE_ST0_STI, // C9
    FCMOVE_ST0_STI, // CA
    FCMOVE_ST0_STI, // CB
    FCMOVE_ST0_STI, // CC
    FCMOVE_ST0_STI, // CD
    FCMOVE_ST0_STI, // CE
    FCMOVE_ST0_STI, // CF
    FCMOVBE_ST0_STI, // D0
    FCMOVBE_ST0_STI, // D1
    FCMOVBE_ST0_STI, // D2
    FCMOVBE_ST0_STI, // D3
    FCMOVBE_ST0_STI, // D4
    FCMOVBE_ST0_STI, // D5
    FCMOVBE_ST0_STI, // D6
    FCMOVBE_ST0_STI, // D7
    FCMOVU_ST0_STI, // D8
    FCMOVU_ST0_STI, // D9
    FCMOVU_ST0_STI, // DA
    FCMOVU_ST0_STI, // DB
    FCMOVU_ST0_STI, // DC
    FCMOVU_ST0_STI, // DD
    FCMOVU_ST0_STI, // DE
    FCMOVU_ST0_STI, // DF
    Node::Invalid, // E0
    Node::Invalid, // E1
    Node::Invalid, // E2
    Node::Invalid, // E3
    Node::Invalid, // E4
    Node::Invalid, // E5
    Node::Invalid, // E6
    Node::Invalid, // E7
    Node::Invalid, // E8
    // E9
    Node::Leaf(
        OpcodeEntry::new("fucompp", Operation::FpuCompare, Cpu::I387)
            .operands([fixed(Fixed::St1, Access::SRC), fixed(Fixed::St0, Access::SRC)])
            .flags(FlagEffects::FPU_ALL_MOD)
            .taken(Actions::FPU_STACK_POP2),
    ),
    Node::Invalid, // EA
    Node::Invalid, // EB
    Node::Invalid, // EC
    Node::Invalid, // ED
    Node::Invalid, // EE
    Node::Invalid, // EF
    Node::Invalid, // F0
    Node::Invalid, // F1
    Node::Invalid, // F2
    Node::Invalid, // F3
    Node::Invalid, // F4
    Node::Invalid, // F5
    Node::Invalid, // F6
    Node::Invalid, // F7
    Node::Invalid, // F8
    Node::Invalid, // F9
    Node::Invalid, // FA
    Node::Invalid, // FB
    Node::Invalid, // FC
    Node::Invalid, // FD
    Node::Invalid, // FE
    Node::Invalid, // FF
];

/// `DB` escape.
pub static ESC_DB: [Node; 0x48] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("fild", Operation::FpuLoad, Cpu::I287)
            .operands([op(Mem, D, Access::SIGNED.union(Access::SRC))])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_PUSH),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("fisttp", Operation::FpuStore, Cpu::Pentium4)
            .operands([op(Mem, D, Access::SIGNED.union(Access::SRC))])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("fist", Operation::FpuStore, Cpu::I287)
            .operands([
                op(Mem, D, Access::SIGNED.union(Access::DST)),
                fixed(Fixed::St0, Access::SRC),
            ])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("fistp", Operation::FpuStore, Cpu::I287)
            .operands([
                op(Mem, D, Access::SIGNED.union(Access::DST)),
                fixed(Fixed::St0, Access::SRC),
            ])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    Node::Invalid, // /4
    // /5
    Node::Leaf(
        OpcodeEntry::new("fld", Operation::FpuLoad, Cpu::I287)
            .operands([op(Mem, Se, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_PUSH),
    ),
    Node::Invalid, // /6
    // /7
    Node::Leaf(
        OpcodeEntry::new("fstp", Operation::FpuStore, Cpu::I287)
            .operands([op(Mem, Se, Access::DST), fixed(Fixed::St0, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    FCMOVNB_ST0_STI, // C0
    FCMOVNB_ST0_STI, // C1
    FCMOVNB_ST0_STI, // C2
    FCMOVNB_ST0_STI, // C3
    FCMOVNB_ST0_STI, // C4
    FCMOVNB_ST0_STI, // C5
    FCMOVNB_ST0_STI, // C6
    FCMOVNB_ST0_STI, // C7
    FCMOVNE_ST0_STI, // C8
    FCMOVNE_ST0_STI, // C9
    FCMOVNE_ST0_STI, // CA
    FCMOVNE_ST0_STI, // CB
    FCMOVNE_ST0_STI, // CC
    FCMOVNE_ST0_STI, // CD
    FCMOVNE_ST0_STI, // CE
    FCMOVNE_ST0_STI, // CF
    FCMOVNBE_ST0_STI, // D0
    FCMOVNBE_ST0_STI, // D1
    FCMOVNBE_ST0_STI, // D2
    FCMOVNBE_ST0_STI, // D3
    FCMOVNBE_ST0_STI, // D4
    FCMOVNBE_ST0_STI, // D5
    FCMOVNBE_ST0_STI, // D6
    FCMOVNBE_ST0_STI, // D7
    FCMOVNU_ST0_STI, // D8
    FCMOVNU_ST0_STI, // D9
    FCMOVNU_ST0_STI, // DA
    FCMOVNU_ST0_STI, // DB
    FCMOVNU_ST0_STI, // DC
    FCMOVNU_ST0_STI, // DD
    FCMOVNU_ST0_STI, // DE
    FCMOVNU_ST0_STI, // DF
    Node::Invalid, // E0
    Node::Invalid, // E1
    // E2
    Node::Leaf(
        OpcodeEntry::new("fnclex", Operation::Fpu, Cpu::I287)
            .operands([fixed(Fixed::FpuStatus, Access::DST)]),
    ),
    // E3
    Node::Leaf(
        OpcodeEntry::new("finit", Operation::Fpu, Cpu::I287)
            .operands([fixed(Fixed::FpuStatus, Access::DST)])
            .flags(FlagEffects::FPU_ALL_CLR),
    ),
    Node::Invalid, // E4
    Node::Invalid, // E5
    Node::Invalid, // E6
    Node::Invalid, // E7
    FUCOMI_STI_ST0, // E8
    FUCOMI_STI_ST0, // E9
    FUCOMI_STI_ST0, // EA
    FUCOMI_STI_ST0, // EB
    FUCOMI_STI_ST0, // EC
    FUCOMI_STI_ST0, // ED
    FUCOMI_STI_ST0, // EE
    FUCOMI_STI_ST0, // EF
    FCOMI_STI_ST0, // F0
    FCOMI_STI_ST0, // F1
    FCOMI_STI_ST0, // F2
    FCOMI_STI_ST0, // F3
    FCOMI_STI_ST0, // F4
    FCOMI_STI_ST0, // F5
    FCOMI_STI_ST0, // F6
    FCOMI_STI_ST0, // F7
    Node::Invalid, // F8
    Node::Invalid, // F9
    Node::Invalid, // FA
    Node::Invalid, // FB
    Node::Invalid, // FC
    Node::Invalid, // FD
    Node::Invalid, // FE
    Node::Invalid, // FF
];

/// `DC` escape.
pub static ESC_DC: [Node; 0x48] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("fadd", Operation::FpuAdd, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST)), op(Mem, Sd, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("fmul", Operation::FpuMul, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST)), op(Mem, Sd, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("fcom", Operation::FpuCompare, Cpu::I287)
            .operands([op(Mem, Sd, Access::SRC), fixed(Fixed::St0, Access::SRC)])
            .flags(FlagEffects::FPU_ALL_MOD),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("fcomp", Operation::FpuCompare, Cpu::I287)
            .operands([op(Mem, Sd, Access::SRC), fixed(Fixed::St0, Access::SRC)])
            .flags(FlagEffects::FPU_ALL_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("fsub", Operation::FpuSub, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST)), op(Mem, Sd, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("fsubr", Operation::FpuSub, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST)), op(Mem, Sd, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("fdiv", Operation::FpuDiv, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST)), op(Mem, Sd, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("fdivr", Operation::FpuDiv, Cpu::I287)
            .operands([fixed(Fixed::St0, Access::SRC.union(Access::DST)), op(Mem, Sd, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    FADD_STI_ST0, // C0
    FADD_STI_ST0, // C1
    FADD_STI_ST0, // C2
    FADD_STI_ST0, // C3
    FADD_STI_ST0, // C4
    FADD_STI_ST0, // C5
    FADD_STI_ST0, // C6
    FADD_STI_ST0, // C7
    FMUL_STI_ST0, // C8
    FMUL_STI_ST0, // C9
    FMUL_STI_ST0, // CA
    FMUL_STI_ST0, // CB
    FMUL_STI_ST0, // CC
    FMUL_STI_ST0, // CD
    FMUL_STI_ST0, // CE
    FMUL_STI_ST0, // CF
    Node::Invalid, // D0
    Node::Invalid, // D1
    Node::Invalid, // D2
    Node::Invalid, // D3
    Node::Invalid, // D4
    Node::Invalid, // D5
    Node::Invalid, // D6
    Node::Invalid, // D7
    Node::Invalid, // D8
    Node::Invalid, // D9
    Node::Invalid, // DA
    Node::Invalid, // DB
    Node::Invalid, // DC
    Node::Invalid, // DD
    Node::Invalid, // DE
    Node::Invalid, // DF
    FSUBR_STI_ST0, // E0
    FSUBR_STI_ST0, // E1
    FSUBR_STI_ST0, // E2
    FSUBR_STI_ST0, // E3
    FSUBR_STI_ST0, // E4
    FSUBR_STI_ST0, // E5
    FSUBR_STI_ST0, // E6
    FSUBR_STI_ST0, // E7
    FSUB_STI_ST0, // E8
    FSUB_STI_ST0, // E9
    FSUB_STI_ST0, // EA
    FSUB_STI_ST0, // EB
    FSUB_STI_ST0, // EC
    FSUB_STI_ST0, // ED
    FSUB_STI_ST0, // EE
    FSUB_STI_ST0, // EF
    FDIVR_STI_ST0, // F0
    FDIVR_STI_ST0, // F1
    FDIVR_STI_ST0, // F2
    FDIVR_STI_ST0, // F3
    FDIVR_STI_ST0, // F4
    FDIVR_STI_ST0, // F5
    FDIVR_STI_ST0, // F6
    FDIVR_STI_ST0, // F7
    FDIV_STI_ST0, // F8
    FDIV_STI_ST0, // F9
    FDIV_STI_ST0, // FA
    FDIV_STI_ST0, // FB
    FDIV_STI_ST0, // FC
    FDIV_STI_ST0, // FD
    FDIV_STI_ST0, // FE
    FDIV_STI_ST0, // FF
];

/// `DD` escape.
pub static ESC_DD: [Node; 0x48] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("fld", Operation::FpuLoad, Cpu::I287)
            .operands([op(Mem, Sd, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_PUSH),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("fisttp", Operation::FpuStore, Cpu::Pentium4)
            .operands([
                op(Mem, D, Access::SIGNED.union(Access::DST)),
                fixed(Fixed::St0, Access::SRC),
            ])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("fst", Operation::FpuStore, Cpu::I287)
            .operands([op(Mem, Sd, Access::SRC), fixed(Fixed::St0, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("fstp", Operation::FpuStore, Cpu::I287)
            .operands([op(Mem, Sd, Access::SRC), fixed(Fixed::St0, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("frstor", Operation::FpuRestore, Cpu::I287)
            .operands([op(Mem, Fst1, Access::SRC)])
            .flags(FlagEffects::FPU_ALL_MOD),
    ),
    Node::Invalid, // /5
    // /6
    Node::Leaf(
        OpcodeEntry::new("fsave", Operation::FpuSave, Cpu::I287)
            .operands([op(Mem, Fst1, Access::DST)])
            .flags(FlagEffects::FPU_ALL_CLR),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("fnstsw", Operation::FpuStore, Cpu::I287)
            .operands([op(Mem, W, Access::DST), fixed(Fixed::FpuStatus, Access::SRC)]),
    ),
    FFREE_STI, // C0
    FFREE_STI, // C1
    FFREE_STI, // C2
    FFREE_STI, // C3
    FFREE_STI, // C4
    FFREE_STI, // C5
    FFREE_STI, // C6
    FFREE_STI, // C7
    Node::Invalid, // C8
    Node::Invalid, // C9
    Node::Invalid, // CA
    Node::Invalid, // CB
    Node::Invalid, // CC
    Node::Invalid, // CD
    Node::Invalid, // CE
    Node::Invalid, // CF
    FST_STI_ST0, // D0
    FST_STI_ST0, // D1
    FST_STI_ST0, // D2
    FST_STI_ST0, // D3
    FST_STI_ST0, // D4
    FST_STI_ST0, // D5
    FST_STI_ST0, // D6
    FST_STI_ST0, // D7
    FSTP_STI_ST0, // D8
    FSTP_STI_ST0, // D9
    FSTP_STI_ST0, // DA
    FSTP_STI_ST0, // DB
    FSTP_STI_ST0, // DC
    FSTP_STI_ST0, // DD
    FSTP_STI_ST0, // DE
    FSTP_STI_ST0, // DF
    FUCOM_STI_ST0, // E0
    FUCOM_STI_ST0, // E1
    FUCOM_STI_ST0, // E2
    FUCOM_STI_ST0, // E3
    FUCOM_STI_ST0, // E4
    FUCOM_STI_ST0, // E5
    FUCOM_STI_ST0, // E6
    FUCOM_STI_ST0, // E7
    FUCOMP_STI_ST0, // E8
    FUCOMP_STI_ST0, // E9
    FUCOMP_STI_ST0, // EA
    // EB
    Node::Leaf(
        OpcodeEntry::new("fucomp", Operation::FpuCompare, Cpu::I287)
            .operands([op(FpuStack, Se, Access::SRC), fixed(Fixed::St0, Access::SRC)])
            .flags(FlagEffects::FPU_ALL_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    FUCOMP_STI_ST0, // EC
    FUCOMP_STI_ST0, // ED
    FUCOMP_STI_ST0, // EE
    FUCOMP_STI_ST0, // EF
    Node::Invalid, // F0
    Node::Invalid, // F1
    Node::Invalid, // F2
    Node::Invalid, // F3
    Node::Invalid, // F4
    Node::Invalid, // F5
    Node::Invalid, // F6
    Node::Invalid, // F7
    Node::Invalid, // F8
    Node::Invalid, // F9
    Node::Invalid, // FA
    Node::Invalid, // FB
    Node::Invalid, // FC
    Node::Invalid, // FD
    Node::Invalid, // FE
    Node::Invalid, // FF
];

/// `DE` escape.
pub static ESC_DE: [Node; 0x48] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("fiadd", Operation::FpuAdd, Cpu::I287)
            .operands([
                fixed(Fixed::St0, Access::SRC.union(Access::DST)),
                op(Mem, W, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("fimul", Operation::FpuMul, Cpu::I287)
            .operands([
                fixed(Fixed::St0, Access::SRC.union(Access::DST)),
                op(Mem, W, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("ficom", Operation::FpuCompare, Cpu::I287)
            .operands([
                op(Mem, W, Access::SIGNED.union(Access::SRC)),
                fixed(Fixed::St0, Access::SRC),
            ])
            .flags(FlagEffects::FPU_ALL_MOD),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("ficomp", Operation::FpuCompare, Cpu::I287)
            .operands([
                op(Mem, W, Access::SIGNED.union(Access::SRC)),
                fixed(Fixed::St0, Access::SRC),
            ])
            .flags(FlagEffects::FPU_ALL_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("fisub", Operation::FpuSub, Cpu::I287)
            .operands([
                fixed(Fixed::St0, Access::SRC.union(Access::DST)),
                op(Mem, W, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("fisubr", Operation::FpuSub, Cpu::I287)
            .operands([
                fixed(Fixed::St0, Access::SRC.union(Access::DST)),
                op(Mem, W, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("fidiv", Operation::FpuDiv, Cpu::I287)
            .operands([
                fixed(Fixed::St0, Access::SRC.union(Access::DST)),
                op(Mem, W, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("fidivr", Operation::FpuDiv, Cpu::I287)
            .operands([
                fixed(Fixed::St0, Access::SRC.union(Access::DST)),
                op(Mem, W, Access::SIGNED.union(Access::SRC)),
            ])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    FADDP_STI_ST0, // C0
    FADDP_STI_ST0, // C1
    FADDP_STI_ST0, // C2
    FADDP_STI_ST0, // C3
    FADDP_STI_ST0, // C4
    FADDP_STI_ST0, // C5
    FADDP_STI_ST0, // C6
    FADDP_STI_ST0, // C7
    FMULP_STI_ST0, // C8
    FMULP_STI_ST0, // C9
    FMULP_STI_ST0, // CA
    FMULP_STI_ST0, // CB
    FMULP_STI_ST0, // CC
    FMULP_STI_ST0, // CD
    FMULP_STI_ST0, // CE
    FMULP_STI_ST0, // CF
    Node::Invalid, // D0
    Node::Invalid, // D1
    Node::Invalid, // D2
    Node::Invalid, // D3
    Node::Invalid, // D4
    Node::Invalid, // D5
    Node::Invalid, // D6
    Node::Invalid, // D7
    Node::Invalid, // D8
    // D9
    Node::Leaf(
        OpcodeEntry::new("fcompp", Operation::FpuCompare, Cpu::I287)
            .operands([fixed(Fixed::St1, Access::SRC), fixed(Fixed::St0, Access::SRC)])
            .flags(FlagEffects::FPU_ALL_MOD)
            .taken(Actions::FPU_STACK_POP2),
    ),
    Node::Invalid, // DA
    Node::Invalid, // DB
    Node::Invalid, // DC
    Node::Invalid, // DD
    Node::Invalid, // DE
    Node::Invalid, // DF
    FSUBRP_STI_ST0, // E0
    FSUBRP_STI_ST0, // E1
    FSUBRP_STI_ST0, // E2
    FSUBRP_STI_ST0, // E3
    FSUBRP_STI_ST0, // E4
    FSUBRP_STI_ST0, // E5
    FSUBRP_STI_ST0, // E6
    FSUBRP_STI_ST0, // E7
    FSUBP_STI_ST0, // E8
    FSUBP_STI_ST0, // E9
    FSUBP_STI_ST0, // EA
    FSUBP_STI_ST0, // EB
    FSUBP_STI_ST0, // EC
    FSUBP_STI_ST0, // ED
    FSUBP_STI_ST0, // EE
    FSUBP_STI_ST0, // EF
    FDIVRP_STI_ST0, // F0
    FDIVRP_STI_ST0, // F1
    FDIVRP_STI_ST0, // F2
    FDIVRP_STI_ST0, // F3
    FDIVRP_STI_ST0, // F4
    FDIVRP_STI_ST0, // F5
    FDIVRP_STI_ST0, // F6
    FDIVRP_STI_ST0, // F7
    FDIVP_STI_ST0, // F8
    FDIVP_STI_ST0, // F9
    FDIVP_STI_ST0, // FA
    FDIVP_STI_ST0, // FB
    FDIVP_STI_ST0, // FC
    FDIVP_STI_ST0, // FD
    FDIVP_STI_ST0, // FE
    FDIVP_STI_ST0, // FF
];

/// `DF` escape.
pub static ESC_DF: [Node; 0x48] = [
    // /0
    Node::Leaf(
        OpcodeEntry::new("fild", Operation::FpuLoad, Cpu::I287)
            .operands([op(Mem, W, Access::SIGNED.union(Access::SRC))])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_PUSH),
    ),
    // /1
    Node::Leaf(
        OpcodeEntry::new("fisttp", Operation::FpuStore, Cpu::Pentium4)
            .operands([
                op(Mem, W, Access::SIGNED.union(Access::DST)),
                fixed(Fixed::St0, Access::SRC),
            ])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    // /2
    Node::Leaf(
        OpcodeEntry::new("fist", Operation::FpuStore, Cpu::I287)
            .operands([
                op(Mem, W, Access::SIGNED.union(Access::DST)),
                fixed(Fixed::St0, Access::SRC),
            ])
            .flags(FlagEffects::FPU_C1_MOD),
    ),
    // /3
    Node::Leaf(
        OpcodeEntry::new("fistp", Operation::FpuStore, Cpu::I287)
            .operands([
                op(Mem, W, Access::SIGNED.union(Access::DST)),
                fixed(Fixed::St0, Access::SRC),
            ])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    // /4
    Node::Leaf(
        OpcodeEntry::new("fbld", Operation::FpuLoad, Cpu::I287)
            .operands([op(Mem, Pb, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_PUSH),
    ),
    // /5
    Node::Leaf(
        OpcodeEntry::new("fild", Operation::FpuLoad, Cpu::I287)
            .operands([op(Mem, Q, Access::SIGNED.union(Access::SRC))])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_PUSH),
    ),
    // /6
    Node::Leaf(
        OpcodeEntry::new("fbstp", Operation::FpuStore, Cpu::I287)
            .operands([op(Mem, Pb, Access::DST), fixed(Fixed::St0, Access::SRC)])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    // /7
    Node::Leaf(
        OpcodeEntry::new("fistp", Operation::FpuStore, Cpu::I287)
            .operands([
                op(Mem, Q, Access::SIGNED.union(Access::DST)),
                fixed(Fixed::St0, Access::SRC),
            ])
            .flags(FlagEffects::FPU_C1_MOD)
            .taken(Actions::FPU_STACK_POP),
    ),
    Node::Invalid, // C0
    Node::Invalid, // C1
    Node::Invalid, // C2
    Node::Invalid, // C3
    Node::Invalid, // C4
    Node::Invalid, // C5
    Node::Invalid, // C6
    Node::Invalid, // C7
    Node::Invalid, // C8
    Node::Invalid, // C9
    Node::Invalid, // CA
    Node::Invalid, // CB
    Node::Invalid, // CC
    Node::Invalid, // CD
    Node::Invalid, // CE
    Node::Invalid, // CF
    Node::Invalid, // D0
    Node::Invalid, // D1
    Node::Invalid, // D2
    Node::Invalid, // D3
    Node::Invalid, // D4
    Node::Invalid, // D5
    Node::Invalid, // D6
    Node::Invalid, // D7
    Node::Invalid, // D8
    Node::Invalid, // D9
    Node::Invalid, // DA
    Node::Invalid, // DB
    Node::Invalid, // DC
    Node::Invalid, // DD
    Node::Invalid, // DE
    Node::Invalid, // DF
    // E0
    Node::Leaf(
        OpcodeEntry::new("fnstsw", Operation::FpuStore, Cpu::I287)
            .operands([fixed(Fixed::Ax, Access::DST), fixed(Fixed::FpuStatus, Access::SRC)]),
    ),
    Node::Invalid, // E1
    Node::Invalid, // E2
    Node::Invalid, // E3
    Node::Invalid, // E4
    Node::Invalid, // E5
    Node::Invalid, // E6
    Node::Invalid, // E7
    FUCOMIP_STI_ST0, // E8
    FUCOMIP_STI_ST0, // E9
    FUCOMIP_STI_ST0, // EA
    FUCOMIP_STI_ST0, // EB
    FUCOMIP_STI_ST0, // EC
    FUCOMIP_STI_ST0, // ED
    FUCOMIP_STI_ST0, // EE
    FUCOMIP_STI_ST0, // EF
    FCOMIP_STI_ST0, // F0
    FCOMIP_STI_ST0, // F1
    FCOMIP_STI_ST0, // F2
    FCOMIP_STI_ST0, // F3
    FCOMIP_STI_ST0, // F4
    FCOMIP_STI_ST0, // F5
    FCOMIP_STI_ST0, // F6
    FCOMIP_STI_ST0, // F7
    Node::Invalid, // F8
    Node::Invalid, // F9
    Node::Invalid, // FA
    Node::Invalid, // FB
    Node::Invalid, // FC
    Node::Invalid, // FD
    Node::Invalid, // FE
    Node::Invalid, // FF
];
