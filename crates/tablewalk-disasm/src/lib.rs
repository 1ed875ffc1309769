//! # tablewalk-disasm
//!
//! Table-driven x86 instruction decoder for 16-bit, 32-bit and 64-bit code.
//!
//! Decoding walks a tree of static opcode tables (one-byte map, `0F` map,
//! ModRM groups, x87 escapes, mandatory-prefix SSE selectors, the 3DNow
//! suffix table and mode-gated alternates) to a single leaf, then resolves
//! the leaf's operand descriptors against the ModRM, SIB, displacement and
//! immediate bytes.
//!
//! ```
//! use tablewalk_disasm::{decode, DecodeFlags};
//! use tablewalk_core::Mode;
//!
//! let bytes = [0x05, 0x10, 0x00, 0x00, 0x00];
//! let insn = decode(&bytes, 0x1000, Mode::Bits32, DecodeFlags::OPERANDS)?;
//! assert_eq!(insn.mnemonic, "add");
//! assert_eq!(insn.size, 5);
//! # Ok::<(), tablewalk_disasm::DecodeError>(())
//! ```

pub mod config;
pub mod error;
pub mod traits;

#[cfg(feature = "x86")]
pub mod x86;

pub use config::{DecodeFlags, DecoderConfig};
pub use error::DecodeError;
pub use traits::{DecodedInstruction, Disassembler, Instructions};

#[cfg(feature = "x86")]
pub use x86::{architecture_family, decode, X86Disassembler};
