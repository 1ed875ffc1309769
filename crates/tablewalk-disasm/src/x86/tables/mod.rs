//! Opcode tables and the per-mode table root.

pub mod amd3dnow;
pub mod fpu;
pub mod groups;
pub mod one_byte;
pub mod sse;
pub mod system;
pub mod two_byte;

use tablewalk_core::Mode;

use super::table::Node;

/// Set of opcode bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeSet([u64; 4]);

impl OpcodeSet {
    pub const EMPTY: Self = Self([0; 4]);

    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut bits = [0u64; 4];
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            bits[(b >> 6) as usize] |= 1 << (b & 0x3F);
            i += 1;
        }
        Self(bits)
    }

    pub const fn contains(&self, byte: u8) -> bool {
        self.0[(byte >> 6) as usize] & (1 << (byte & 0x3F)) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|w| *w == 0)
    }
}

/// One-byte opcodes that do not exist in 64-bit mode.
pub static LONG_MODE_EXCLUDED_ONE_BYTE: OpcodeSet = OpcodeSet::from_bytes(&[
    0x06, 0x07, 0x0E, 0x16, 0x17, 0x1E, 0x1F, 0x27, 0x2F, 0x37, 0x3F, 0x60, 0x61, 0x62, 0x82,
    0x9A, 0xC4, 0xC5, 0xCE, 0xD4, 0xD5, 0xEA,
]);

/// Second bytes of `0F xx` opcodes that do not exist in 64-bit mode.
pub static LONG_MODE_EXCLUDED_TWO_BYTE: OpcodeSet = OpcodeSet::from_bytes(&[0x34, 0x35]);

static NOTHING_EXCLUDED: OpcodeSet = OpcodeSet::EMPTY;

/// Table family for a processing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Legacy16,
    Legacy32,
    Long64,
}

/// Entry point of the table tree for one mode.
#[derive(Debug, Clone, Copy)]
pub struct TableRoot {
    pub family: Family,
    pub one_byte: &'static [Node; 256],
    pub excluded_one_byte: &'static OpcodeSet,
    pub excluded_two_byte: &'static OpcodeSet,
}

/// Returns the table root for `mode`.
///
/// All modes share one table tree; long mode additionally excludes the
/// opcodes AMD64 removed.
pub fn architecture_family(mode: Mode) -> TableRoot {
    match mode {
        Mode::Bits16 => TableRoot {
            family: Family::Legacy16,
            one_byte: &one_byte::ONE_BYTE,
            excluded_one_byte: &NOTHING_EXCLUDED,
            excluded_two_byte: &NOTHING_EXCLUDED,
        },
        Mode::Bits32 => TableRoot {
            family: Family::Legacy32,
            one_byte: &one_byte::ONE_BYTE,
            excluded_one_byte: &NOTHING_EXCLUDED,
            excluded_two_byte: &NOTHING_EXCLUDED,
        },
        Mode::Bits64 => TableRoot {
            family: Family::Long64,
            one_byte: &one_byte::ONE_BYTE,
            excluded_one_byte: &LONG_MODE_EXCLUDED_ONE_BYTE,
            excluded_two_byte: &LONG_MODE_EXCLUDED_TWO_BYTE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_set() {
        let set = OpcodeSet::from_bytes(&[0x00, 0x3F, 0x40, 0xFF]);
        assert!(set.contains(0x00) && set.contains(0x3F) && set.contains(0x40));
        assert!(set.contains(0xFF));
        assert!(!set.contains(0x41));
        assert!(OpcodeSet::EMPTY.is_empty());
    }

    #[test]
    fn test_long_mode_exclusions() {
        let root = architecture_family(Mode::Bits64);
        assert_eq!(root.family, Family::Long64);
        for byte in [0x06, 0x1F, 0x60, 0x82, 0x9A, 0xC4, 0xD4, 0xEA] {
            assert!(root.excluded_one_byte.contains(byte), "{byte:#x}");
        }
        // salc stays available
        assert!(!root.excluded_one_byte.contains(0xD6));
        assert!(root.excluded_two_byte.contains(0x34));
    }

    #[test]
    fn test_legacy_modes_exclude_nothing() {
        for mode in [Mode::Bits16, Mode::Bits32] {
            let root = architecture_family(mode);
            assert!(root.excluded_one_byte.is_empty());
            assert!(root.excluded_two_byte.is_empty());
        }
        assert_eq!(architecture_family(Mode::Bits16).family, Family::Legacy16);
    }

    #[test]
    fn test_prefix_slots_marked() {
        for byte in [0x26, 0x2E, 0x36, 0x3E, 0x64, 0x65, 0x66, 0x67, 0xF0, 0xF2, 0xF3] {
            assert!(
                matches!(one_byte::ONE_BYTE[byte], Node::Prefix),
                "{byte:#x}"
            );
        }
    }
}
