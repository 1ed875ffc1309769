//! Decoder trait and block iteration.

use crate::DecodeError;
use tablewalk_core::{Instruction, Mode};

/// An instruction together with the number of bytes it consumed.
#[derive(Debug, Clone)]
pub struct DecodedInstruction {
    pub instruction: Instruction,
    pub size: usize,
}

/// A variable-length instruction decoder.
pub trait Disassembler {
    /// Decodes the instruction at the start of `bytes`, located at `address`.
    fn decode_instruction(
        &self,
        bytes: &[u8],
        address: u64,
    ) -> Result<DecodedInstruction, DecodeError>;

    fn min_instruction_size(&self) -> usize;

    /// Architectural length limit; no decoded instruction is longer.
    fn max_instruction_size(&self) -> usize;

    fn is_fixed_width(&self) -> bool;

    /// Processing mode the decoder was configured for.
    fn mode(&self) -> Mode;

    /// Lazily decodes consecutive instructions from `bytes`.
    fn instructions<'d, 'b>(
        &'d self,
        bytes: &'b [u8],
        start_address: u64,
    ) -> Instructions<'d, 'b, Self>
    where
        Self: Sized,
    {
        Instructions {
            decoder: self,
            bytes,
            start_address,
            offset: 0,
        }
    }

    /// Decodes every instruction in `bytes`.
    ///
    /// After an error decoding resumes one byte later, so every input byte is
    /// covered by exactly one result.
    fn disassemble_block(
        &self,
        bytes: &[u8],
        start_address: u64,
    ) -> Vec<Result<Instruction, DecodeError>>
    where
        Self: Sized,
    {
        self.instructions(bytes, start_address).collect()
    }
}

/// Iterator returned by [`Disassembler::instructions`].
#[derive(Debug)]
pub struct Instructions<'d, 'b, D> {
    decoder: &'d D,
    bytes: &'b [u8],
    start_address: u64,
    offset: usize,
}

impl<'d, 'b, D> Instructions<'d, 'b, D> {
    /// Offset of the next instruction within the input.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<D: Disassembler> Iterator for Instructions<'_, '_, D> {
    type Item = Result<Instruction, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.bytes.get(self.offset..).filter(|rest| !rest.is_empty())?;
        let address = self.start_address.wrapping_add(self.offset as u64);
        match self.decoder.decode_instruction(remaining, address) {
            Ok(decoded) => {
                self.offset += decoded.size.max(1);
                Some(Ok(decoded.instruction))
            }
            Err(err) => {
                self.offset += 1;
                Some(Err(err))
            }
        }
    }
}

#[cfg(all(test, feature = "x86"))]
mod tests {
    use super::*;
    use crate::X86Disassembler;

    #[test]
    fn test_iterator_tracks_offset() {
        let decoder = X86Disassembler::new(Mode::Bits32);
        // nop; mov eax, 1; ret
        let code = [0x90, 0xB8, 0x01, 0x00, 0x00, 0x00, 0xC3];
        let mut iter = decoder.instructions(&code, 0x1000);
        assert_eq!(iter.next().unwrap().unwrap().mnemonic, "nop");
        assert_eq!(iter.offset(), 1);
        let mov = iter.next().unwrap().unwrap();
        assert_eq!(mov.address, 0x1001);
        assert_eq!(iter.offset(), 6);
        assert!(iter.next().unwrap().unwrap().is_return());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_block_skips_one_byte_on_error() {
        let decoder = X86Disassembler::new(Mode::Bits32);
        // lone 0F at the end is truncated
        let results = decoder.disassemble_block(&[0x90, 0x0F], 0);
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(DecodeError::truncated(1, 1)));
    }
}
