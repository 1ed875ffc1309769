//! x86 prefix scanning.

use log::trace;
use tablewalk_core::{Mode, PrefixSet, Rex, Segment};

use super::cursor::Cursor;

/// Prefixes seen before the opcode.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Prefixes {
    /// Prefixes in effect; mandatory prefixes are cleared once consumed.
    pub set: PrefixSet,
    /// Last legacy prefix byte scanned.
    pub last_legacy: Option<u8>,
}

impl Prefixes {
    /// Consume legacy prefixes, and REX in 64-bit mode, from the cursor.
    ///
    /// Prefixes may repeat in any order; the last one of each class wins.
    /// A REX byte followed by a legacy prefix is discarded.
    pub fn scan(cursor: &mut Cursor<'_>, mode: Mode) -> Self {
        let mut prefixes = Self::default();

        while let Some(byte) = cursor.peek() {
            let set = &mut prefixes.set;
            match byte {
                // Group 1: LOCK and repeat
                0xF0 => set.lock = true,
                0xF2 => {
                    set.repne = true;
                    set.rep = false;
                }
                0xF3 => {
                    set.rep = true;
                    set.repne = false;
                }

                // Group 2: Segment overrides
                0x26 | 0x2E | 0x36 | 0x3E | 0x64 | 0x65 => set.segment = Segment::from_prefix(byte),

                // Group 3: Operand size override
                0x66 => set.operand_size = true,

                // Group 4: Address size override
                0x67 => set.address_size = true,

                // REX prefix (0x40-0x4F in 64-bit mode)
                0x40..=0x4F if mode.is_64bit() => {
                    set.rex = Rex::from_byte(byte);
                    // position is below the limit, so this cannot fail
                    let _ = cursor.read_u8();
                    continue;
                }

                // Not a prefix
                _ => break,
            }

            if set.rex.take().is_some() {
                trace!("REX followed by legacy prefix {byte:#04x}, discarded");
            }
            set.count = set.count.saturating_add(1);
            prefixes.last_legacy = Some(byte);
            let _ = cursor.read_u8();
        }

        prefixes
    }

    /// The last legacy prefix, if it can act as a mandatory prefix.
    pub fn mandatory_candidate(&self) -> Option<u8> {
        self.last_legacy
            .filter(|byte| matches!(byte, 0x66 | 0xF2 | 0xF3))
    }

    /// Stop treating `byte` as a legacy override.
    pub fn consume_mandatory(&mut self, byte: u8) {
        match byte {
            0x66 => self.set.operand_size = false,
            0xF2 => self.set.repne = false,
            0xF3 => self.set.rep = false,
            _ => {}
        }
    }

    /// Effective operand size in bytes.
    pub fn operand_size(&self, mode: Mode, default_64: bool) -> u8 {
        if mode.is_64bit() {
            if self.set.rex_w() {
                8
            } else if self.set.operand_size {
                2
            } else if default_64 {
                8
            } else {
                4
            }
        } else {
            match (mode.default_operand_size(), self.set.operand_size) {
                (2, false) | (4, true) => 2,
                _ => 4,
            }
        }
    }

    /// Effective address size in bytes.
    pub fn address_size(&self, mode: Mode) -> u8 {
        match (mode, self.set.address_size) {
            (Mode::Bits16, false) | (Mode::Bits32, true) => 2,
            (Mode::Bits16, true) | (Mode::Bits32, false) | (Mode::Bits64, true) => 4,
            (Mode::Bits64, false) => 8,
        }
    }

    /// Returns true if any REX byte is in effect.
    pub fn has_rex(&self) -> bool {
        self.set.rex.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(bytes: &[u8], mode: Mode) -> (Prefixes, usize) {
        let mut cursor = Cursor::new(bytes, 0);
        let prefixes = Prefixes::scan(&mut cursor, mode);
        (prefixes, cursor.position())
    }

    #[test]
    fn test_legacy_prefixes() {
        let (p, len) = scan(&[0xF0, 0x2E, 0x66, 0x67, 0x01], Mode::Bits32);
        assert_eq!(len, 4);
        assert!(p.set.lock && p.set.operand_size && p.set.address_size);
        assert_eq!(p.set.segment, Some(Segment::Cs));
        assert_eq!(p.set.count, 4);
        assert_eq!(p.mandatory_candidate(), None);
    }

    #[test]
    fn test_last_prefix_of_class_wins() {
        let (p, _) = scan(&[0x26, 0x64, 0xF2, 0xF3, 0x90], Mode::Bits32);
        assert_eq!(p.set.segment, Some(Segment::Fs));
        assert!(p.set.rep && !p.set.repne);
        assert_eq!(p.mandatory_candidate(), Some(0xF3));
    }

    #[test]
    fn test_rex_only_in_long_mode() {
        let (p, len) = scan(&[0x48, 0x89, 0xC3], Mode::Bits64);
        assert_eq!(len, 1);
        assert!(p.set.rex_w());

        let (p, len) = scan(&[0x48, 0x89, 0xC3], Mode::Bits32);
        assert_eq!(len, 0);
        assert!(!p.has_rex());
    }

    #[test]
    fn test_rex_discarded_by_following_prefix() {
        let (p, len) = scan(&[0x48, 0x66, 0x89, 0xC3], Mode::Bits64);
        assert_eq!(len, 2);
        assert!(!p.has_rex());
        assert!(p.set.operand_size);
    }

    #[test]
    fn test_operand_sizes() {
        let none = Prefixes::default();
        assert_eq!(none.operand_size(Mode::Bits16, false), 2);
        assert_eq!(none.operand_size(Mode::Bits32, false), 4);
        assert_eq!(none.operand_size(Mode::Bits64, false), 4);
        assert_eq!(none.operand_size(Mode::Bits64, true), 8);

        let (opsize, _) = scan(&[0x66], Mode::Bits16);
        assert_eq!(opsize.operand_size(Mode::Bits16, false), 4);
        assert_eq!(opsize.operand_size(Mode::Bits64, true), 2);

        let (rex_w, _) = scan(&[0x66, 0x48], Mode::Bits64);
        assert_eq!(rex_w.operand_size(Mode::Bits64, false), 8);
    }

    #[test]
    fn test_address_sizes() {
        let none = Prefixes::default();
        assert_eq!(none.address_size(Mode::Bits16), 2);
        assert_eq!(none.address_size(Mode::Bits64), 8);
        let (p, _) = scan(&[0x67], Mode::Bits64);
        assert_eq!(p.address_size(Mode::Bits64), 4);
        assert_eq!(p.address_size(Mode::Bits32), 2);
    }

    #[test]
    fn test_consume_mandatory() {
        let (mut p, _) = scan(&[0x66], Mode::Bits32);
        assert_eq!(p.mandatory_candidate(), Some(0x66));
        p.consume_mandatory(0x66);
        assert!(!p.set.operand_size);
        assert_eq!(p.operand_size(Mode::Bits32, false), 4);
    }
}
