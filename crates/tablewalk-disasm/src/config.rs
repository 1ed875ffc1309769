//! Decoder configuration.

use bitflags::bitflags;
use tablewalk_core::{Cpu, Mode};

bitflags! {
    /// What a decode call produces beyond length and opcode metadata.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct DecodeFlags: u8 {
        /// Resolve operands. Operand bytes are consumed either way.
        const OPERANDS = 1 << 0;
        /// Render `Instruction::text`.
        const FORMAT = 1 << 1;
    }
}

impl Default for DecodeFlags {
    fn default() -> Self {
        Self::OPERANDS
    }
}

/// Configuration for [`X86Disassembler`](crate::X86Disassembler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoderConfig {
    /// Processing mode.
    pub mode: Mode,
    /// Output selection.
    pub flags: DecodeFlags,
    /// Newest processor generation whose opcodes are recognized.
    pub cpu: Cpu,
}

impl DecoderConfig {
    /// Creates a configuration for `mode` with default flags and CPU.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Sets the processing mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the decode flags.
    pub fn with_flags(mut self, flags: DecodeFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Limits recognition to opcodes available on `cpu`.
    pub fn with_cpu(mut self, cpu: Cpu) -> Self {
        self.cpu = cpu;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DecoderConfig::default();
        assert_eq!(config.mode, Mode::Bits32);
        assert_eq!(config.flags, DecodeFlags::OPERANDS);
        assert_eq!(config.cpu, Cpu::Prescott);
    }

    #[test]
    fn test_builders() {
        let config = DecoderConfig::new(Mode::Bits64)
            .with_flags(DecodeFlags::OPERANDS | DecodeFlags::FORMAT)
            .with_cpu(Cpu::Pentium);
        assert_eq!(config.mode, Mode::Bits64);
        assert!(config.flags.contains(DecodeFlags::FORMAT));
        assert_eq!(config.cpu, Cpu::Pentium);
    }
}
