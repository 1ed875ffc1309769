//! Property-based tests for the x86 decoder.
//!
//! These tests verify invariants that hold for every mode:
//! - Decoding never panics on arbitrary input
//! - Decoded size is within 1..=15 and never exceeds the input
//! - Decoding is deterministic
//! - Bytes past the decoded length do not influence the result
//! - Cutting the last byte of a decoded instruction reports truncation

use proptest::prelude::*;

use tablewalk_core::Mode;
use tablewalk_disasm::traits::Disassembler;
use tablewalk_disasm::{decode, DecodeError, DecodeFlags, X86Disassembler};

fn any_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Bits16), Just(Mode::Bits32), Just(Mode::Bits64)]
}

const FLAGS: DecodeFlags = DecodeFlags::OPERANDS.union(DecodeFlags::FORMAT);

// =============================================================================
// Decoder Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    /// Decoding arbitrary bytes should never panic.
    #[test]
    fn decode_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..32), mode in any_mode()) {
        let _ = decode(&bytes, 0x1000, mode, FLAGS);
    }

    /// Successfully decoded instructions have a valid size.
    #[test]
    fn decoded_size_is_valid(
        bytes in prop::collection::vec(any::<u8>(), 1..32),
        mode in any_mode()
    ) {
        if let Ok(insn) = decode(&bytes, 0x1000, mode, FLAGS) {
            prop_assert!(insn.size >= 1, "Instruction size must be at least 1");
            prop_assert!(insn.size <= 15, "Instruction size must be at most 15");
            prop_assert!(insn.size <= bytes.len(), "Instruction size cannot exceed input length");
            prop_assert_eq!(&insn.bytes[..], &bytes[..insn.size]);
            prop_assert!(!insn.mnemonic.is_empty());
        }
    }

    /// Errors report a consumed length within the same bounds.
    #[test]
    fn error_length_is_bounded(
        bytes in prop::collection::vec(any::<u8>(), 0..32),
        mode in any_mode()
    ) {
        if let Err(err) = decode(&bytes, 0x1000, mode, FLAGS) {
            prop_assert!(err.length() <= 15);
            prop_assert!(err.length() <= bytes.len());
            prop_assert_eq!(err.address(), 0x1000);
        }
    }

    /// Decoding is deterministic: same input always produces same output.
    #[test]
    fn decode_is_deterministic(
        bytes in prop::collection::vec(any::<u8>(), 1..32),
        mode in any_mode()
    ) {
        let first = decode(&bytes, 0x1000, mode, FLAGS);
        let second = decode(&bytes, 0x1000, mode, FLAGS);
        prop_assert_eq!(first, second);
    }

    /// Re-decoding only the consumed bytes, padded with zeros, gives the same
    /// instruction.
    #[test]
    fn trailing_bytes_do_not_matter(
        bytes in prop::collection::vec(any::<u8>(), 1..32),
        mode in any_mode()
    ) {
        if let Ok(insn) = decode(&bytes, 0x1000, mode, FLAGS) {
            let mut padded = bytes[..insn.size].to_vec();
            padded.resize(32, 0x00);
            let again = decode(&padded, 0x1000, mode, FLAGS);
            prop_assert_eq!(again.as_ref().ok(), Some(&insn));
        }
    }

    /// Dropping the last byte of a decoded instruction reports truncation at
    /// exactly that point.
    #[test]
    fn truncation_is_detected(
        bytes in prop::collection::vec(any::<u8>(), 1..32),
        mode in any_mode()
    ) {
        if let Ok(insn) = decode(&bytes, 0x1000, mode, FLAGS) {
            let cut = insn.size - 1;
            let err = decode(&bytes[..cut], 0x1000, mode, FLAGS);
            prop_assert_eq!(err, Err(DecodeError::truncated(0x1000, cut)));
        }
    }

    /// Successfully decoded instructions keep the requested address.
    #[test]
    fn decoded_address_matches(
        bytes in prop::collection::vec(any::<u8>(), 1..32),
        addr in 0x1000u64..0xFFFF_FFFF_FFFF_0000u64
    ) {
        let disasm = X86Disassembler::new(Mode::Bits64);
        if let Ok(decoded) = disasm.decode_instruction(&bytes, addr) {
            prop_assert_eq!(decoded.instruction.address, addr);
        }
    }

    /// Sequential decoding covers all bytes (no gaps or overlaps).
    #[test]
    fn sequential_decode_covers_all_bytes(
        bytes in prop::collection::vec(any::<u8>(), 16..128),
        mode in any_mode()
    ) {
        let disasm = X86Disassembler::new(mode);
        let mut covered = vec![false; bytes.len()];
        let mut offset = 0;

        for result in disasm.disassemble_block(&bytes, 0x1000) {
            let len = match result {
                Ok(insn) => insn.size,
                Err(_) => 1,
            };
            for (i, covered_byte) in covered[offset..offset + len].iter_mut().enumerate() {
                prop_assert!(!*covered_byte, "Byte {} covered twice", offset + i);
                *covered_byte = true;
            }
            offset += len;
        }

        prop_assert!(covered.iter().all(|&c| c));
    }
}

// =============================================================================
// Specific Instruction Pattern Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// 0x63 is arpl outside long mode and movsxd inside it.
    #[test]
    fn opcode_63_is_mode_gated(modrm in 0xC0u8..=0xFF) {
        let bytes = [0x63, modrm];
        let legacy = decode(&bytes, 0, Mode::Bits32, FLAGS).unwrap();
        let long = decode(&bytes, 0, Mode::Bits64, FLAGS).unwrap();
        prop_assert_eq!(legacy.mnemonic.as_str(), "arpl");
        prop_assert_eq!(long.mnemonic.as_str(), "movsxd");
        prop_assert_eq!(legacy.size, 2);
        prop_assert_eq!(long.size, 2);
    }

    /// The operand flag changes only the operand list, never the length.
    #[test]
    fn operand_flag_does_not_change_length(
        bytes in prop::collection::vec(any::<u8>(), 1..16),
        mode in any_mode()
    ) {
        let full = decode(&bytes, 0, mode, FLAGS);
        let bare = decode(&bytes, 0, mode, DecodeFlags::empty());
        match (full, bare) {
            (Ok(full), Ok(bare)) => {
                prop_assert_eq!(full.size, bare.size);
                prop_assert_eq!(full.mnemonic, bare.mnemonic);
                prop_assert_eq!(full.control_flow, bare.control_flow);
                prop_assert!(bare.operands.is_empty());
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "results differ: {:?} vs {:?}", a, b),
        }
    }

    /// ModRM with every displacement form decodes to the expected length.
    #[test]
    fn modrm_length_in_32bit(modrm in any::<u8>(), sib in any::<u8>()) {
        // 8B /r: mov r32, r/m32
        let bytes = [0x8B, modrm, sib, 0, 0, 0, 0, 0];
        let insn = decode(&bytes, 0, Mode::Bits32, FLAGS).unwrap();
        let mod_ = modrm >> 6;
        let rm = modrm & 7;
        let has_sib = mod_ != 3 && rm == 4;
        let disp = match mod_ {
            0 if rm == 5 => 4,
            0 if has_sib && sib & 7 == 5 => 4,
            1 => 1,
            2 => 4,
            _ => 0,
        };
        prop_assert_eq!(insn.size, 2 + usize::from(has_sib) + disp);
    }
}
