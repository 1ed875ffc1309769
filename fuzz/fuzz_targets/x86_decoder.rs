#![no_main]

use libfuzzer_sys::fuzz_target;
use tablewalk_core::{Instruction, Mode};
use tablewalk_disasm::{DecodeFlags, DecoderConfig, Disassembler, X86Disassembler};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, code)) = data.split_first() else {
        return;
    };
    let mode = match selector % 3 {
        0 => Mode::Bits16,
        1 => Mode::Bits32,
        _ => Mode::Bits64,
    };
    let flags = DecodeFlags::OPERANDS | DecodeFlags::FORMAT;
    let disasm = X86Disassembler::with_config(DecoderConfig::new(mode).with_flags(flags));

    // Must never panic; errors are fine
    if let Ok(insn) = disasm.decode(code, 0x1000) {
        assert!(insn.size >= 1 && insn.size <= disasm.max_instruction_size());
        assert!(insn.size <= code.len());
    }

    // Walk a block, reusing one record
    if code.len() >= 16 {
        let mut insn = Instruction::new(0x1000, mode);
        let mut offset = 0;
        let mut count = 0;
        while offset < code.len() && count < 100 {
            match disasm.decode_into(&code[offset..], 0x1000 + offset as u64, &mut insn) {
                Ok(()) => {
                    if insn.size == 0 {
                        break;
                    }
                    offset += insn.size;
                }
                Err(_) => offset += 1,
            }
            count += 1;
        }
    }
});
