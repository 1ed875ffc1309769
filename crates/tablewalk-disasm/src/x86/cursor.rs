//! Bounded byte reader shared by every decode stage.

use crate::DecodeError;

/// Architectural instruction length limit.
pub const MAX_INSTRUCTION_LEN: usize = 15;

/// Reads instruction bytes, enforcing the input window and the 15-byte limit.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    address: u64,
}

impl<'a> Cursor<'a> {
    pub fn new(bytes: &'a [u8], address: u64) -> Self {
        Self {
            bytes,
            pos: 0,
            address,
        }
    }

    /// Address of the first byte.
    pub fn address(&self) -> u64 {
        self.address
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The consumed bytes.
    pub fn consumed(&self) -> &'a [u8] {
        &self.bytes[..self.pos]
    }

    /// Next byte without consuming it; `None` at the window end or the
    /// length limit.
    pub fn peek(&self) -> Option<u8> {
        if self.pos >= MAX_INSTRUCTION_LEN {
            return None;
        }
        self.bytes.get(self.pos).copied()
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        if self.pos >= MAX_INSTRUCTION_LEN {
            return Err(DecodeError::length_overflow(self.address, self.pos));
        }
        let byte = *self
            .bytes
            .get(self.pos)
            .ok_or_else(|| DecodeError::truncated(self.address, self.pos))?;
        self.pos += 1;
        Ok(byte)
    }

    /// Reads a little-endian value of `len` bytes (at most 8), zero-extended.
    pub fn read_le(&mut self, len: usize) -> Result<u64, DecodeError> {
        let mut value = 0u64;
        for i in 0..len.min(8) {
            value |= u64::from(self.read_u8()?) << (8 * i);
        }
        Ok(value)
    }

    /// Reads a little-endian value of `len` bytes, sign-extended.
    pub fn read_signed(&mut self, len: usize) -> Result<i64, DecodeError> {
        let value = self.read_le(len)?;
        Ok(sign_extend(value, len))
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(self.read_le(2)? as u16)
    }
}

/// Sign-extends the low `len` bytes of `value`.
pub fn sign_extend(value: u64, len: usize) -> i64 {
    match len {
        1 => value as u8 as i8 as i64,
        2 => value as u16 as i16 as i64,
        4 => value as u32 as i32 as i64,
        _ => value as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_little_endian() {
        let mut cursor = Cursor::new(&[0x78, 0x56, 0x34, 0x12, 0xFF], 0);
        assert_eq!(cursor.read_le(4).unwrap(), 0x1234_5678);
        assert_eq!(cursor.read_signed(1).unwrap(), -1);
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.consumed().len(), 5);
    }

    #[test]
    fn test_truncation_reports_consumed_length() {
        let mut cursor = Cursor::new(&[0x0F], 0x1000);
        cursor.read_u8().unwrap();
        assert_eq!(cursor.read_u8(), Err(DecodeError::truncated(0x1000, 1)));
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_length_limit() {
        let bytes = [0x66; 20];
        let mut cursor = Cursor::new(&bytes, 0);
        for _ in 0..MAX_INSTRUCTION_LEN {
            cursor.read_u8().unwrap();
        }
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.read_u8(), Err(DecodeError::length_overflow(0, 15)));
    }

    #[test]
    fn test_sign_extend() {
        assert_eq!(sign_extend(0x80, 1), -128);
        assert_eq!(sign_extend(0xFFFE, 2), -2);
        assert_eq!(sign_extend(0x7FFF_FFFF, 4), 0x7FFF_FFFF);
    }
}
