//! x86 instruction decoder.
//!
//! Decoding runs in stages sharing one [`context::Context`]:
//! - prefix scan (legacy prefixes, REX in 64-bit mode)
//! - table walk to a leaf descriptor
//! - ModRM/SIB/displacement decode, read at most once and cached
//! - operand resolution and assembly of the output record

mod context;
mod cursor;
mod decoder;
mod dispatch;
mod modrm;
mod operand;
mod prefix;
pub mod table;
pub mod tables;

pub use decoder::{decode, X86Disassembler};
pub use tables::{architecture_family, Family, TableRoot};
