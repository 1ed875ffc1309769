//! # tablewalk-core
//!
//! Core types produced by the tablewalk decoder. This crate defines the
//! decoded instruction record, its operands, registers, processing modes
//! and the flag/side-effect metadata attached to every opcode.

pub mod arch;
pub mod encoding;
pub mod flags;
pub mod instruction;
pub mod operand;
pub mod register;

pub use arch::{Cpu, Mode};
pub use encoding::{ModRmFields, PrefixSet, Rex, Segment, SibFields};
pub use flags::{Access, Actions, FlagEffects};
pub use instruction::{Condition, ControlFlow, Instruction, Operation};
pub use operand::{FpuConstant, Immediate, MemoryRef, Msr, Operand, Resource};
pub use register::{Register, RegisterClass};
