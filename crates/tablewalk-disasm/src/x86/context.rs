//! Per-call decode state.

use log::trace;
use tablewalk_core::Mode;

use super::cursor::Cursor;
use super::modrm::ModRm;
use super::prefix::Prefixes;
use crate::DecodeError;

/// Maximum opcode bytes: `0F`, the opcode, and a 3DNow suffix.
const MAX_OPCODE_LEN: usize = 3;

/// State threaded through the prefix scan, table walk and operand
/// resolution of one instruction.
#[derive(Debug)]
pub(crate) struct Context<'a> {
    pub cursor: Cursor<'a>,
    pub mode: Mode,
    pub prefixes: Prefixes,
    /// Mandatory prefix consumed by a prefix-selected table.
    pub mandatory: Option<u8>,
    opcode: [u8; MAX_OPCODE_LEN],
    opcode_len: usize,
    modrm: Option<ModRm>,
}

impl<'a> Context<'a> {
    /// Scans prefixes and prepares for the table walk.
    pub fn new(bytes: &'a [u8], address: u64, mode: Mode) -> Self {
        let mut cursor = Cursor::new(bytes, address);
        let prefixes = Prefixes::scan(&mut cursor, mode);
        Self {
            cursor,
            mode,
            prefixes,
            mandatory: None,
            opcode: [0; MAX_OPCODE_LEN],
            opcode_len: 0,
            modrm: None,
        }
    }

    /// Reads one opcode byte and records it.
    pub fn read_opcode(&mut self) -> Result<u8, DecodeError> {
        let byte = self.cursor.read_u8()?;
        if let Some(slot) = self.opcode.get_mut(self.opcode_len) {
            *slot = byte;
            self.opcode_len += 1;
        }
        Ok(byte)
    }

    /// Opcode bytes read so far.
    pub fn opcode(&self) -> &[u8] {
        &self.opcode[..self.opcode_len]
    }

    /// The last opcode byte (low bits select the register for `OpReg`).
    pub fn last_opcode(&self) -> u8 {
        self.opcode().last().copied().unwrap_or(0)
    }

    /// Returns the ModR/M byte, reading it (with SIB and displacement) on
    /// first use only.
    pub fn fetch_modrm(&mut self) -> Result<ModRm, DecodeError> {
        if let Some(modrm) = self.modrm {
            return Ok(modrm);
        }
        let modrm = ModRm::read(&mut self.cursor, &self.prefixes, self.mode)?;
        trace!("modrm {:#04x} at offset {}", modrm.byte, self.cursor.position());
        self.modrm = Some(modrm);
        Ok(modrm)
    }

    /// The ModR/M byte if it has been read.
    pub fn modrm(&self) -> Option<&ModRm> {
        self.modrm.as_ref()
    }

    /// Marks `byte` as a mandatory prefix rather than a legacy override.
    pub fn consume_mandatory(&mut self, byte: u8) {
        self.prefixes.consume_mandatory(byte);
        self.mandatory = Some(byte);
    }

    /// Effective operand size in bytes.
    pub fn operand_size(&self, default_64: bool) -> u8 {
        self.prefixes.operand_size(self.mode, default_64)
    }

    /// Effective address size in bytes.
    pub fn address_size(&self) -> u8 {
        self.prefixes.address_size(self.mode)
    }

    pub fn unrecognized(&self) -> DecodeError {
        DecodeError::unrecognized(self.cursor.address(), self.cursor.consumed())
    }

    pub fn invalid(&self, reason: &'static str) -> DecodeError {
        DecodeError::invalid_encoding(self.cursor.address(), self.cursor.position(), reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modrm_read_once() {
        let bytes = [0x8B, 0x44, 0x24, 0x08];
        let mut ctx = Context::new(&bytes, 0, Mode::Bits32);
        ctx.read_opcode().unwrap();
        let first = ctx.fetch_modrm().unwrap();
        let consumed = ctx.cursor.position();
        assert_eq!(consumed, 4);
        let second = ctx.fetch_modrm().unwrap();
        assert_eq!(ctx.cursor.position(), consumed);
        assert_eq!(first.byte, second.byte);
    }

    #[test]
    fn test_opcode_bytes_recorded() {
        let bytes = [0x66, 0x0F, 0x10, 0xC1];
        let mut ctx = Context::new(&bytes, 0, Mode::Bits32);
        assert_eq!(ctx.prefixes.mandatory_candidate(), Some(0x66));
        ctx.read_opcode().unwrap();
        ctx.read_opcode().unwrap();
        assert_eq!(ctx.opcode(), &[0x0F, 0x10]);
        assert_eq!(ctx.last_opcode(), 0x10);

        ctx.consume_mandatory(0x66);
        assert_eq!(ctx.mandatory, Some(0x66));
        assert_eq!(ctx.operand_size(false), 4);
    }
}
