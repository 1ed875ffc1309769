//! Processing modes and processor generations.

/// Processing mode the bytes are decoded in.
///
/// All three modes share one table set; the mode only changes default
/// operand/address sizes, REX recognition and a handful of mode-gated
/// opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// 16-bit real or protected mode.
    Bits16,
    /// 32-bit protected mode.
    #[default]
    Bits32,
    /// 64-bit long mode.
    Bits64,
}

impl Mode {
    /// Default operand size in bytes, before any prefix.
    pub fn default_operand_size(&self) -> u8 {
        match self {
            Self::Bits16 => 2,
            Self::Bits32 | Self::Bits64 => 4,
        }
    }

    /// Default address size in bytes, before any `0x67` prefix.
    pub fn default_address_size(&self) -> u8 {
        match self {
            Self::Bits16 => 2,
            Self::Bits32 => 4,
            Self::Bits64 => 8,
        }
    }

    /// Returns whether this is 64-bit long mode.
    pub fn is_64bit(&self) -> bool {
        matches!(self, Self::Bits64)
    }

    /// Returns the name of this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bits16 => "x86-16",
            Self::Bits32 => "x86",
            Self::Bits64 => "x64",
        }
    }
}

/// Minimum processor generation that implements an opcode.
///
/// Ordered oldest first, so `entry.cpu <= configured` is the capability test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cpu {
    I287,
    I386,
    I387,
    I486,
    Pentium,
    PentiumPro,
    Pentium2,
    AmdK6_2,
    Pentium3,
    Pentium4,
    Ia64,
    Amd64,
    #[default]
    Prescott,
}

impl Cpu {
    /// Returns the name of this processor generation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::I287 => "i287",
            Self::I386 => "i386",
            Self::I387 => "i387",
            Self::I486 => "i486",
            Self::Pentium => "pentium",
            Self::PentiumPro => "pentium-pro",
            Self::Pentium2 => "pentium2",
            Self::AmdK6_2 => "k6-2",
            Self::Pentium3 => "pentium3",
            Self::Pentium4 => "pentium4",
            Self::Ia64 => "ia64",
            Self::Amd64 => "amd64",
            Self::Prescott => "prescott",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults() {
        assert_eq!(Mode::Bits16.default_operand_size(), 2);
        assert_eq!(Mode::Bits32.default_operand_size(), 4);
        assert_eq!(Mode::Bits64.default_operand_size(), 4);
        assert_eq!(Mode::Bits64.default_address_size(), 8);
        assert_eq!(Mode::default(), Mode::Bits32);
    }

    #[test]
    fn test_cpu_ordering() {
        assert!(Cpu::I386 < Cpu::Pentium);
        assert!(Cpu::AmdK6_2 < Cpu::Pentium3);
        assert!(Cpu::Amd64 < Cpu::Prescott);
        assert_eq!(Cpu::default(), Cpu::Prescott);
    }
}
