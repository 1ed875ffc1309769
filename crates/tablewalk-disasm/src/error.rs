//! Decoding error types.

use thiserror::Error;

/// Error type for instruction decoding.
///
/// Every variant carries the instruction address and the number of bytes
/// consumed before decoding stopped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The table walk reached an undefined slot, an opcode removed in the
    /// current mode, or an opcode newer than the configured processor.
    #[error("unrecognized opcode at {address:#x}: {bytes:02x?}")]
    UnrecognizedOpcode { address: u64, bytes: Vec<u8> },

    /// Input ended in the middle of the instruction.
    #[error("truncated instruction at {address:#x}: input ended after {length} bytes")]
    Truncated { address: u64, length: usize },

    /// Instruction would exceed the 15-byte architectural limit.
    #[error("instruction at {address:#x} exceeds 15 bytes")]
    LengthOverflow { address: u64, length: usize },

    /// An operand form forbidden by the opcode.
    #[error("invalid encoding at {address:#x}: {reason}")]
    InvalidEncoding {
        address: u64,
        length: usize,
        reason: &'static str,
    },
}

impl DecodeError {
    /// Creates a new UnrecognizedOpcode error from the bytes consumed.
    pub fn unrecognized(address: u64, bytes: &[u8]) -> Self {
        Self::UnrecognizedOpcode {
            address,
            bytes: bytes.to_vec(),
        }
    }

    /// Creates a new Truncated error.
    pub fn truncated(address: u64, length: usize) -> Self {
        Self::Truncated { address, length }
    }

    /// Creates a new LengthOverflow error.
    pub fn length_overflow(address: u64, length: usize) -> Self {
        Self::LengthOverflow { address, length }
    }

    /// Creates a new InvalidEncoding error.
    pub fn invalid_encoding(address: u64, length: usize, reason: &'static str) -> Self {
        Self::InvalidEncoding {
            address,
            length,
            reason,
        }
    }

    /// Address of the instruction that failed to decode.
    pub fn address(&self) -> u64 {
        match self {
            Self::UnrecognizedOpcode { address, .. }
            | Self::Truncated { address, .. }
            | Self::LengthOverflow { address, .. }
            | Self::InvalidEncoding { address, .. } => *address,
        }
    }

    /// Bytes consumed before the error.
    pub fn length(&self) -> usize {
        match self {
            Self::UnrecognizedOpcode { bytes, .. } => bytes.len(),
            Self::Truncated { length, .. }
            | Self::LengthOverflow { length, .. }
            | Self::InvalidEncoding { length, .. } => *length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let err = DecodeError::unrecognized(0x400000, &[0x0F, 0xFF]);
        assert_eq!(err.address(), 0x400000);
        assert_eq!(err.length(), 2);

        let err = DecodeError::truncated(0x10, 1);
        assert_eq!(err.length(), 1);
        assert_eq!(
            err.to_string(),
            "truncated instruction at 0x10: input ended after 1 bytes"
        );
    }

    #[test]
    fn test_display_includes_bytes() {
        let err = DecodeError::unrecognized(0x1000, &[0x0F, 0x0B]);
        assert!(err.to_string().contains("0f"));
        let err = DecodeError::invalid_encoding(0x1000, 2, "segment register 6");
        assert!(err.to_string().ends_with("segment register 6"));
    }
}
