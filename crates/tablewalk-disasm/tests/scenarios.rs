//! End-to-end decoding scenarios through the public API.

use tablewalk_core::{
    Access, Condition, ControlFlow, Cpu, FlagEffects, Instruction, Mode, Operand, Operation,
    Register,
};
use tablewalk_disasm::{
    decode, DecodeError, DecodeFlags, DecoderConfig, Disassembler, X86Disassembler,
};

const FLAGS: DecodeFlags = DecodeFlags::OPERANDS.union(DecodeFlags::FORMAT);

fn decode_at(bytes: &[u8], mode: Mode) -> Instruction {
    decode(bytes, 0x1000, mode, FLAGS).unwrap_or_else(|err| panic!("{bytes:02x?}: {err}"))
}

fn text(bytes: &[u8], mode: Mode) -> String {
    decode_at(bytes, mode).text.unwrap_or_default()
}

// =============================================================================
// Core scenarios
// =============================================================================

#[test]
fn add_accumulator_immediate() {
    let insn = decode_at(&[0x05, 0x10, 0x00, 0x00, 0x00], Mode::Bits32);
    assert_eq!(insn.size, 5);
    assert_eq!(insn.mnemonic, "add");
    assert_eq!(insn.operation, Operation::Add);
    assert_eq!(insn.flags, FlagEffects::COMMON_MOD);
    assert_eq!(insn.operands.len(), 2);
    assert_eq!(insn.operands[0], Operand::reg(Register::gpr(0, 32)));
    assert_eq!(insn.operands[1], Operand::imm_unsigned(0x10, 32));
    assert!(insn.operand_access[0].contains(Access::DST));
}

#[test]
fn conditional_jump_near() {
    let insn = decode_at(&[0x0F, 0x84, 0x02, 0x00, 0x00, 0x00], Mode::Bits32);
    assert_eq!(insn.size, 6);
    assert_eq!(insn.mnemonic, "jz");
    assert_eq!(insn.opcode, vec![0x0F, 0x84]);
    assert!(insn.flags.is_empty());
    assert_eq!(
        insn.control_flow,
        ControlFlow::ConditionalBranch {
            target: 0x1008,
            condition: Condition::Equal,
            fallthrough: 0x1006,
        }
    );
}

#[test]
fn group_store_immediate() {
    let insn = decode_at(&[0xC7, 0x00, 0x05, 0x00, 0x00, 0x00], Mode::Bits32);
    assert_eq!(insn.size, 6);
    assert_eq!(insn.text.as_deref(), Some("mov dword [eax], 0x5"));
    let mem = insn.operands[0].as_memory().unwrap();
    assert_eq!(mem.size, 4);
    assert_eq!(mem.base, Some(Register::gpr(0, 32)));
}

#[test]
fn group_unary_on_byte_register() {
    let insn = decode_at(&[0xF6, 0xD8], Mode::Bits32);
    assert_eq!(insn.size, 2);
    assert_eq!(insn.mnemonic, "neg");
    assert_eq!(insn.text.as_deref(), Some("neg al"));
}

#[test]
fn fpu_load_constant() {
    let insn = decode_at(&[0xD9, 0xE8], Mode::Bits32);
    assert_eq!(insn.size, 2);
    assert_eq!(insn.mnemonic, "fld1");
}

#[test]
fn lone_escape_is_truncated() {
    let err = decode(&[0x0F], 0x1000, Mode::Bits32, FLAGS).unwrap_err();
    assert_eq!(err, DecodeError::truncated(0x1000, 1));
    assert_eq!(err.length(), 1);
}

// =============================================================================
// Modes and prefixes
// =============================================================================

#[test]
fn opcode_63_depends_on_mode() {
    assert_eq!(decode_at(&[0x63, 0xC1], Mode::Bits16).mnemonic, "arpl");
    assert_eq!(decode_at(&[0x63, 0xC1], Mode::Bits32).mnemonic, "arpl");
    assert_eq!(text(&[0x48, 0x63, 0xC1], Mode::Bits64), "movsxd rax, ecx");
}

#[test]
fn sixteen_bit_addressing() {
    // 8B 42 04: mov ax, [bp + si + 4]
    let insn = decode_at(&[0x8B, 0x42, 0x04], Mode::Bits16);
    assert_eq!(insn.size, 3);
    assert_eq!(insn.text.as_deref(), Some("mov ax, word [bp + si + 0x4]"));
}

#[test]
fn sib_with_displacement() {
    assert_eq!(text(&[0x8B, 0x44, 0x24, 0x08], Mode::Bits32), "mov eax, dword [esp + 0x8]");
}

#[test]
fn rex_extends_both_fields() {
    // 4D 89 C8: REX.WRB mov r8, r9
    assert_eq!(text(&[0x4D, 0x89, 0xC8], Mode::Bits64), "mov r8, r9");
}

#[test]
fn push_defaults_to_64_bit() {
    assert_eq!(text(&[0x50], Mode::Bits64), "push rax");
    assert_eq!(text(&[0x66, 0x50], Mode::Bits64), "push ax");
    assert_eq!(text(&[0x50], Mode::Bits32), "push eax");
}

#[test]
fn lock_prefix_is_printed() {
    let insn = decode_at(&[0xF0, 0x01, 0x08], Mode::Bits32);
    assert!(insn.prefixes.lock);
    assert_eq!(insn.text.as_deref(), Some("lock add dword [eax], ecx"));
}

#[test]
fn rep_string_move() {
    let insn = decode_at(&[0xF3, 0xA4], Mode::Bits32);
    assert_eq!(insn.mnemonic, "movsb");
    assert!(insn.prefixes.rep);
    assert_eq!(insn.mandatory_prefix, None);
    assert_eq!(insn.condition, Some(Condition::Direction));
    assert_eq!(insn.text.as_deref(), Some("rep movsb byte [edi], byte [esi]"));
}

#[test]
fn operand_size_prefix_as_mandatory() {
    let insn = decode_at(&[0x66, 0x0F, 0x10, 0xC1], Mode::Bits32);
    assert_eq!(insn.mnemonic, "movupd");
    assert_eq!(insn.mandatory_prefix, Some(0x66));
    assert_eq!(insn.text.as_deref(), Some("movupd xmm0, xmm1"));
}

#[test]
fn rex_b_turns_nop_into_exchange() {
    assert_eq!(text(&[0x90], Mode::Bits64), "nop");
    assert_eq!(text(&[0xF3, 0x90], Mode::Bits64), "rep nop");
    assert_eq!(text(&[0x41, 0x90], Mode::Bits64), "xchg r8d, eax");
    assert_eq!(text(&[0x49, 0x90], Mode::Bits64), "xchg r8, rax");
    assert_eq!(decode_at(&[0x41, 0x90], Mode::Bits64).operation, Operation::Exchange);
    assert_eq!(text(&[0x91], Mode::Bits32), "xchg ecx, eax");
}

#[test]
fn legacy_prefix_kept_without_mandatory_variant() {
    // 0F 28 has no F3/F2 form, so the prefix stays a repeat prefix
    let insn = decode_at(&[0xF3, 0x0F, 0x28, 0xC1], Mode::Bits32);
    assert_eq!(insn.mnemonic, "movaps");
    assert_eq!(insn.size, 4);
    assert_eq!(insn.mandatory_prefix, None);
    assert!(insn.prefixes.rep);
    assert_eq!(insn.text.as_deref(), Some("rep movaps xmm0, xmm1"));

    let insn = decode_at(&[0xF2, 0x0F, 0x28, 0xC1], Mode::Bits32);
    assert_eq!(insn.mandatory_prefix, None);
    assert!(insn.prefixes.repne);
    assert_eq!(insn.text.as_deref(), Some("repne movaps xmm0, xmm1"));

    // 66 does have a variant
    let insn = decode_at(&[0x66, 0x0F, 0x28, 0xC1], Mode::Bits32);
    assert_eq!(insn.mnemonic, "movapd");
    assert_eq!(insn.mandatory_prefix, Some(0x66));
}

#[test]
fn translate_table_operand() {
    assert_eq!(text(&[0xD7], Mode::Bits32), "xlat al, byte [ebx + al]");
}

#[test]
fn enter_frame() {
    let insn = decode_at(&[0xC8, 0x10, 0x00, 0x01], Mode::Bits32);
    assert_eq!(insn.size, 4);
    assert_eq!(insn.text.as_deref(), Some("enter frame, 0x10, 0x1"));
}

#[test]
fn timestamp_counter_pair() {
    assert_eq!(text(&[0x0F, 0x31], Mode::Bits32), "rdtsc edx:eax, tsc");
}

// =============================================================================
// Control flow
// =============================================================================

#[test]
fn loop_uses_counter_condition() {
    let insn = decode(&[0xE0, 0xFE], 0x2000, Mode::Bits32, FLAGS).unwrap();
    assert_eq!(insn.mnemonic, "loopnz");
    assert_eq!(insn.counter, Some(Condition::CounterNotZero));
    assert_eq!(insn.condition, Some(Condition::NotEqual));
    assert_eq!(
        insn.control_flow,
        ControlFlow::ConditionalBranch {
            target: 0x2000,
            condition: Condition::CounterNotZero,
            fallthrough: 0x2002,
        }
    );
}

#[test]
fn breakpoint_is_syscall_flow() {
    assert_eq!(decode_at(&[0xCC], Mode::Bits32).control_flow, ControlFlow::Syscall);
}

#[test]
fn far_jump_only_outside_long_mode() {
    let bytes = [0xEA, 0x00, 0x10, 0x00, 0x00, 0x08, 0x00];
    let insn = decode_at(&bytes, Mode::Bits32);
    assert_eq!(insn.size, 7);
    assert_eq!(insn.control_flow, ControlFlow::IndirectBranch);
    assert_eq!(insn.text.as_deref(), Some("jmp 0x8:0x1000"));

    let err = decode(&bytes, 0x1000, Mode::Bits64, FLAGS).unwrap_err();
    assert_eq!(err, DecodeError::unrecognized(0x1000, &[0xEA]));
}

#[test]
fn opcode_82_is_byte_arithmetic_outside_long_mode() {
    let insn = decode_at(&[0x82, 0xC0, 0x01], Mode::Bits32);
    assert_eq!(insn.size, 3);
    assert_eq!(insn.text.as_deref(), Some("add al, 0x1"));
    assert_eq!(text(&[0x82, 0x38, 0x7F], Mode::Bits16), "cmp byte [bx + si], 0x7f");

    let err = decode(&[0x82, 0xC0, 0x01], 0x1000, Mode::Bits64, FLAGS).unwrap_err();
    assert_eq!(err, DecodeError::unrecognized(0x1000, &[0x82]));
}

// =============================================================================
// Boundaries
// =============================================================================

#[test]
fn fifteen_byte_limit() {
    // 9 operand-size prefixes + mov ax, [eax + disp32]: 15 bytes exactly
    let mut ok = vec![0x66; 9];
    ok.extend_from_slice(&[0x8B, 0x80, 0x00, 0x00, 0x00, 0x00]);
    let insn = decode(&ok, 0, Mode::Bits32, FLAGS);
    assert_eq!(insn.map(|insn| insn.size), Ok(15));

    let mut long = vec![0x66; 14];
    long.extend_from_slice(&[0x05, 0x00, 0x00]);
    let err = decode(&long, 0, Mode::Bits32, FLAGS).unwrap_err();
    assert_eq!(err, DecodeError::length_overflow(0, 15));
}

#[test]
fn cpu_limit_rejects_newer_opcodes() {
    let config = DecoderConfig::new(Mode::Bits32).with_cpu(Cpu::I486);
    let decoder = X86Disassembler::with_config(config);
    // cpuid needs a Pentium
    let err = decoder.decode(&[0x0F, 0xA2], 0).unwrap_err();
    assert_eq!(err, DecodeError::unrecognized(0, &[0x0F, 0xA2]));
    assert!(decoder.decode(&[0x90], 0).is_ok());
}

#[test]
fn block_decoding_resynchronizes() {
    let decoder = X86Disassembler::new(Mode::Bits64);
    // push rbp; mov rbp, rsp; push es (gone in long mode); pop rbp; ret
    let code = [0x55, 0x48, 0x89, 0xE5, 0x06, 0x5D, 0xC3];
    let results = decoder.disassemble_block(&code, 0x4000);
    let mnemonics: Vec<_> = results
        .iter()
        .map(|r| r.as_ref().map(|insn| insn.mnemonic.as_str()).unwrap_or("(bad)"))
        .collect();
    assert_eq!(mnemonics, ["push", "mov", "(bad)", "pop", "ret"]);
}
