//! Raw encoding fields reported alongside a decoded instruction.

use crate::register::Register;

/// Segment selected by an override prefix or by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Segment {
    Es,
    Cs,
    Ss,
    Ds,
    Fs,
    Gs,
}

impl Segment {
    /// Maps a segment override prefix byte to its segment.
    pub fn from_prefix(byte: u8) -> Option<Self> {
        match byte {
            0x26 => Some(Self::Es),
            0x2E => Some(Self::Cs),
            0x36 => Some(Self::Ss),
            0x3E => Some(Self::Ds),
            0x64 => Some(Self::Fs),
            0x65 => Some(Self::Gs),
            _ => None,
        }
    }

    /// Hardware encoding (es=0 .. gs=5).
    pub fn encoding(&self) -> u8 {
        *self as u8
    }

    /// The segment register this selects.
    pub fn register(&self) -> Register {
        Register::segment(self.encoding())
    }
}

/// REX prefix (64-bit mode only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rex {
    /// 64-bit operand size.
    pub w: bool,
    /// Extension of ModRM.reg.
    pub r: bool,
    /// Extension of SIB.index.
    pub x: bool,
    /// Extension of ModRM.rm, SIB.base or the opcode register.
    pub b: bool,
}

impl Rex {
    /// Parses a REX byte (0x40-0x4F).
    pub fn from_byte(byte: u8) -> Option<Self> {
        if byte & 0xF0 != 0x40 {
            return None;
        }
        Some(Self {
            w: byte & 0x08 != 0,
            r: byte & 0x04 != 0,
            x: byte & 0x02 != 0,
            b: byte & 0x01 != 0,
        })
    }
}

/// Legacy prefixes that remained in effect after decoding.
///
/// A `66`/`F2`/`F3` consumed as a mandatory prefix is reported through
/// [`Instruction::mandatory_prefix`](crate::Instruction::mandatory_prefix)
/// and is cleared here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrefixSet {
    pub segment: Option<Segment>,
    pub operand_size: bool,
    pub address_size: bool,
    pub lock: bool,
    /// `F3` (rep/repe).
    pub rep: bool,
    /// `F2` (repne).
    pub repne: bool,
    pub rex: Option<Rex>,
    /// Number of legacy prefix bytes scanned, duplicates included.
    pub count: u8,
}

impl PrefixSet {
    /// Returns true if no prefix byte was scanned.
    pub fn is_empty(&self) -> bool {
        self.count == 0 && self.rex.is_none()
    }

    /// REX.W, or false without REX.
    pub fn rex_w(&self) -> bool {
        self.rex.is_some_and(|r| r.w)
    }

    pub fn rex_r(&self) -> bool {
        self.rex.is_some_and(|r| r.r)
    }

    pub fn rex_x(&self) -> bool {
        self.rex.is_some_and(|r| r.x)
    }

    pub fn rex_b(&self) -> bool {
        self.rex.is_some_and(|r| r.b)
    }
}

/// Decoded ModRM byte fields, without REX extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModRmFields {
    /// Mod field (bits 7-6).
    pub mod_: u8,
    /// Reg field (bits 5-3).
    pub reg: u8,
    /// R/M field (bits 2-0).
    pub rm: u8,
}

impl ModRmFields {
    pub fn from_byte(byte: u8) -> Self {
        Self {
            mod_: (byte >> 6) & 0x03,
            reg: (byte >> 3) & 0x07,
            rm: byte & 0x07,
        }
    }

    /// Returns true if the r/m operand is a register.
    pub fn is_register(&self) -> bool {
        self.mod_ == 3
    }
}

/// Decoded SIB byte fields, without REX extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SibFields {
    /// Scale exponent (bits 7-6); the multiplier is `1 << scale`.
    pub scale: u8,
    pub index: u8,
    pub base: u8,
}

impl SibFields {
    pub fn from_byte(byte: u8) -> Self {
        Self {
            scale: (byte >> 6) & 0x03,
            index: (byte >> 3) & 0x07,
            base: byte & 0x07,
        }
    }

    /// Scale multiplier (1, 2, 4 or 8).
    pub fn multiplier(&self) -> u8 {
        1 << self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rex_from_byte() {
        assert_eq!(Rex::from_byte(0x3F), None);
        let rex = Rex::from_byte(0x4D).unwrap();
        assert!(rex.w && rex.r && !rex.x && rex.b);
        assert_eq!(Rex::from_byte(0x40), Some(Rex::default()));
    }

    #[test]
    fn test_modrm_and_sib_fields() {
        let modrm = ModRmFields::from_byte(0x44);
        assert_eq!((modrm.mod_, modrm.reg, modrm.rm), (1, 0, 4));
        assert!(!modrm.is_register());

        let sib = SibFields::from_byte(0x98);
        assert_eq!((sib.scale, sib.index, sib.base), (2, 3, 0));
        assert_eq!(sib.multiplier(), 4);
    }

    #[test]
    fn test_segment_prefixes() {
        assert_eq!(Segment::from_prefix(0x64), Some(Segment::Fs));
        assert_eq!(Segment::from_prefix(0x66), None);
        assert_eq!(Segment::Gs.register().name(), "gs");
    }
}
