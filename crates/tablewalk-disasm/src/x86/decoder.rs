//! x86 instruction decoder.

use log::{debug, trace};
use tablewalk_core::{ControlFlow, Instruction, Mode, Operand, Operation};

use super::context::Context;
use super::cursor::MAX_INSTRUCTION_LEN;
use super::dispatch::{walk, Walk};
use super::operand::OperandResolver;
use super::table::OpcodeEntry;
use super::tables::architecture_family;
use crate::error::DecodeError;
use crate::traits::{DecodedInstruction, Disassembler};
use crate::{DecodeFlags, DecoderConfig};

/// x86, x86-16 and x64 instruction decoder.
///
/// The decoder holds only its configuration; the opcode tables are static, so
/// one value can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct X86Disassembler {
    config: DecoderConfig,
}

impl X86Disassembler {
    /// Creates a decoder for `mode` with default flags and CPU.
    pub fn new(mode: Mode) -> Self {
        Self::with_config(DecoderConfig::new(mode))
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes the instruction at the start of `bytes`.
    pub fn decode(&self, bytes: &[u8], address: u64) -> Result<Instruction, DecodeError> {
        let mut insn = Instruction::new(address, self.config.mode);
        self.decode_into(bytes, address, &mut insn)?;
        Ok(insn)
    }

    /// Decodes into an existing record, reusing its buffers.
    ///
    /// On error the record is left reset, with no partial fields.
    pub fn decode_into(
        &self,
        bytes: &[u8],
        address: u64,
        insn: &mut Instruction,
    ) -> Result<(), DecodeError> {
        insn.reset(address, self.config.mode);
        match self.fill(bytes, address, insn) {
            Ok(()) => {
                trace!("{address:#x}: {} ({} bytes)", insn.mnemonic, insn.size);
                Ok(())
            }
            Err(err) => {
                debug!("{err}");
                insn.reset(address, self.config.mode);
                Err(err)
            }
        }
    }

    fn fill(&self, bytes: &[u8], address: u64, insn: &mut Instruction) -> Result<(), DecodeError> {
        let mode = self.config.mode;
        let mut ctx = Context::new(bytes, address, mode);

        let entry = match walk(&mut ctx, &architecture_family(mode))? {
            Walk::Found(entry) => entry,
            Walk::Unrecognized | Walk::ArchitectureMismatch => return Err(ctx.unrecognized()),
        };
        if entry.cpu > self.config.cpu {
            debug!(
                "{} needs {}, decoder limited to {}",
                entry.mnemonic,
                entry.cpu.name(),
                self.config.cpu.name()
            );
            return Err(ctx.unrecognized());
        }

        // Operand bytes are consumed even when operands are not wanted
        let store = self.config.flags.contains(DecodeFlags::OPERANDS);
        let mut relative = None;
        if entry.needs_modrm() {
            ctx.fetch_modrm()?;
        }
        let mut resolver = OperandResolver::new(&mut ctx, entry.default_64);
        for spec in entry.specs() {
            let operand = resolver.resolve(spec)?;
            if let Operand::PcRelative { offset, .. } = operand {
                relative = Some(offset);
            }
            if store {
                insn.operands.push(operand);
                insn.operand_access.push(spec.access);
            }
        }

        insn.size = ctx.cursor.position();
        insn.bytes.extend_from_slice(ctx.cursor.consumed());
        insn.prefixes = ctx.prefixes.set;
        insn.mandatory_prefix = ctx.mandatory;
        insn.opcode.extend_from_slice(ctx.opcode());
        if let Some(modrm) = ctx.modrm() {
            insn.modrm = Some(modrm.extended_fields());
            insn.sib = modrm.sib;
        }
        copy_metadata(entry, insn);

        let end = insn.end_address();
        let target = relative.map(|offset| {
            let mask = match mode {
                Mode::Bits64 => u64::MAX,
                _ if ctx.operand_size(false) == 2 => 0xFFFF,
                _ => 0xFFFF_FFFF,
            };
            end.wrapping_add(offset as u64) & mask
        });
        if let Some(target) = target {
            for operand in &mut insn.operands {
                if let Operand::PcRelative { target: slot, .. } = operand {
                    *slot = target;
                }
            }
        }
        insn.control_flow = control_flow(entry, target, end);

        if self.config.flags.contains(DecodeFlags::FORMAT) {
            insn.text = Some(insn.assembly());
        }
        Ok(())
    }
}

fn copy_metadata(entry: &OpcodeEntry, insn: &mut Instruction) {
    insn.operation = entry.operation;
    insn.mnemonic.push_str(entry.mnemonic);
    insn.cpu = entry.cpu;
    insn.condition = entry.condition;
    insn.counter = entry.counter;
    insn.flags = entry.flags;
    insn.taken = entry.taken;
    insn.not_taken = entry.not_taken;
}

/// Derives control flow from the operation and the resolved branch target.
fn control_flow(entry: &OpcodeEntry, target: Option<u64>, end: u64) -> ControlFlow {
    match (entry.operation, target) {
        (Operation::Jump, Some(target)) => ControlFlow::UnconditionalBranch { target },
        (Operation::Jump, None) => ControlFlow::IndirectBranch,
        (Operation::ConditionalJump | Operation::Loop, Some(target)) => {
            match entry.counter.or(entry.condition) {
                Some(condition) => ControlFlow::ConditionalBranch {
                    target,
                    condition,
                    fallthrough: end,
                },
                None => ControlFlow::UnconditionalBranch { target },
            }
        }
        (Operation::Call, Some(target)) => ControlFlow::Call {
            target,
            return_addr: end,
        },
        (Operation::Call, None) => ControlFlow::IndirectCall { return_addr: end },
        (Operation::Return | Operation::InterruptReturn | Operation::SyscallReturn, _) => {
            ControlFlow::Return
        }
        (
            Operation::Syscall
            | Operation::Interrupt
            | Operation::Breakpoint
            | Operation::OverflowTrap,
            _,
        ) => ControlFlow::Syscall,
        (Operation::Halt | Operation::Undefined, _) => ControlFlow::Halt,
        _ => ControlFlow::Sequential,
    }
}

impl Disassembler for X86Disassembler {
    fn decode_instruction(
        &self,
        bytes: &[u8],
        address: u64,
    ) -> Result<DecodedInstruction, DecodeError> {
        let instruction = self.decode(bytes, address)?;
        let size = instruction.size;
        Ok(DecodedInstruction { instruction, size })
    }

    fn min_instruction_size(&self) -> usize {
        1
    }

    fn max_instruction_size(&self) -> usize {
        MAX_INSTRUCTION_LEN
    }

    fn is_fixed_width(&self) -> bool {
        false
    }

    fn mode(&self) -> Mode {
        self.config.mode
    }
}

/// Decodes one instruction with a default-CPU decoder for `mode`.
pub fn decode(
    bytes: &[u8],
    address: u64,
    mode: Mode,
    flags: DecodeFlags,
) -> Result<Instruction, DecodeError> {
    X86Disassembler::with_config(DecoderConfig::new(mode).with_flags(flags)).decode(bytes, address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablewalk_core::{Condition, Cpu, FlagEffects};

    fn decode32(bytes: &[u8]) -> Instruction {
        decode(bytes, 0x1000, Mode::Bits32, DecodeFlags::OPERANDS | DecodeFlags::FORMAT).unwrap()
    }

    fn decode64(bytes: &[u8]) -> Instruction {
        decode(bytes, 0x1000, Mode::Bits64, DecodeFlags::OPERANDS | DecodeFlags::FORMAT).unwrap()
    }

    #[test]
    fn test_add_eax_imm32() {
        let insn = decode32(&[0x05, 0x10, 0x00, 0x00, 0x00]);
        assert_eq!(insn.size, 5);
        assert_eq!(insn.mnemonic, "add");
        assert_eq!(insn.text.as_deref(), Some("add eax, 0x10"));
        assert_eq!(insn.flags, FlagEffects::COMMON_MOD);
        assert_eq!(insn.control_flow, ControlFlow::Sequential);
    }

    #[test]
    fn test_jz_rel32() {
        let insn = decode32(&[0x0F, 0x84, 0x02, 0x00, 0x00, 0x00]);
        assert_eq!(insn.size, 6);
        assert_eq!(insn.mnemonic, "jz");
        assert_eq!(insn.condition, Some(Condition::Equal));
        assert!(insn.flags.is_empty());
        assert_eq!(insn.branch_target(), Some(0x1008));
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
    fn test_group_c7_mov() {
        let insn = decode32(&[0xC7, 0x00, 0x05, 0x00, 0x00, 0x00]);
        assert_eq!(insn.size, 6);
        assert_eq!(insn.text.as_deref(), Some("mov dword [eax], 0x5"));
    }

    #[test]
    fn test_group_3_neg() {
        let insn = decode32(&[0xF6, 0xD8]);
        assert_eq!(insn.size, 2);
        assert_eq!(insn.text.as_deref(), Some("neg al"));
        assert_eq!(insn.modrm.unwrap().reg, 3);
    }

    #[test]
    fn test_fld1() {
        let insn = decode32(&[0xD9, 0xE8]);
        assert_eq!(insn.size, 2);
        assert_eq!(insn.mnemonic, "fld1");
        assert_eq!(insn.operation, Operation::FpuLoad);
    }

    #[test]
    fn test_lone_escape_is_truncated() {
        let err = decode(&[0x0F], 0, Mode::Bits32, DecodeFlags::OPERANDS).unwrap_err();
        assert_eq!(err, DecodeError::truncated(0, 1));
    }

    #[test]
    fn test_empty_input() {
        let err = decode(&[], 0, Mode::Bits32, DecodeFlags::OPERANDS).unwrap_err();
        assert_eq!(err, DecodeError::truncated(0, 0));
    }

    #[test]
    fn test_arpl_and_movsxd() {
        let legacy = decode32(&[0x63, 0xC1]);
        assert_eq!(legacy.mnemonic, "arpl");
        let long = decode64(&[0x48, 0x63, 0xC1]);
        assert_eq!(long.text.as_deref(), Some("movsxd rax, ecx"));
    }

    #[test]
    fn test_mandatory_prefix_consumed() {
        let insn = decode32(&[0xF3, 0x0F, 0x10, 0xC1]);
        assert_eq!(insn.mnemonic, "movss");
        assert_eq!(insn.mandatory_prefix, Some(0xF3));
        assert!(!insn.prefixes.rep);
        assert_eq!(insn.opcode, vec![0x0F, 0x10]);
        assert_eq!(insn.text.as_deref(), Some("movss xmm0, xmm1"));
    }

    #[test]
    fn test_3dnow_suffix() {
        let insn = decode32(&[0x0F, 0x0F, 0xC1, 0x9E]);
        assert_eq!(insn.size, 4);
        assert_eq!(insn.mnemonic, "pfadd");
        assert_eq!(insn.opcode, vec![0x0F, 0x0F, 0x9E]);
        assert_eq!(insn.text.as_deref(), Some("pfadd mm0, mm1"));
    }

    #[test]
    fn test_long_mode_excluded_opcode() {
        let err = decode(&[0x06], 0, Mode::Bits64, DecodeFlags::OPERANDS).unwrap_err();
        assert_eq!(err, DecodeError::unrecognized(0, &[0x06]));
        assert_eq!(decode32(&[0x06]).mnemonic, "push");
    }

    #[test]
    fn test_length_overflow() {
        let mut bytes = vec![0x66; 14];
        bytes.extend_from_slice(&[0x05, 0x00, 0x00]);
        let err = decode(&bytes, 0, Mode::Bits32, DecodeFlags::OPERANDS).unwrap_err();
        assert_eq!(err, DecodeError::length_overflow(0, 15));
    }

    #[test]
    fn test_rip_relative_memory() {
        // 48 8B 05 10 00 00 00: mov rax, [rip + 0x10]
        let insn = decode64(&[0x48, 0x8B, 0x05, 0x10, 0x00, 0x00, 0x00]);
        assert_eq!(insn.size, 7);
        assert_eq!(insn.text.as_deref(), Some("mov rax, qword [rip + 0x10]"));
        assert!(insn.operands[1].as_memory().unwrap().is_pc_relative());
    }

    #[test]
    fn test_call_and_ret() {
        let call = decode32(&[0xE8, 0xFB, 0xFF, 0xFF, 0xFF]);
        assert_eq!(
            call.control_flow,
            ControlFlow::Call {
                target: 0x1000,
                return_addr: 0x1005
            }
        );
        assert_eq!(decode32(&[0xC3]).control_flow, ControlFlow::Return);
        assert_eq!(
            decode32(&[0xFF, 0xD0]).control_flow,
            ControlFlow::IndirectCall { return_addr: 0x1002 }
        );
    }

    #[test]
    fn test_target_wraps_to_operand_width() {
        // EB FE at 0xFFFF in 16-bit mode: jmp to itself
        let insn = decode(&[0xEB, 0xFE], 0xFFFF, Mode::Bits16, DecodeFlags::OPERANDS).unwrap();
        assert_eq!(insn.branch_target(), Some(0xFFFF));
        let insn = decode(&[0xEB, 0x01], 0xFFFF, Mode::Bits16, DecodeFlags::OPERANDS).unwrap();
        assert_eq!(insn.branch_target(), Some(0x0002));
    }

    #[test]
    fn test_without_operands_flag() {
        let bytes = [0xC7, 0x00, 0x05, 0x00, 0x00, 0x00];
        let insn = decode(&bytes, 0, Mode::Bits32, DecodeFlags::empty()).unwrap();
        assert_eq!(insn.size, 6);
        assert!(insn.operands.is_empty());
        assert!(insn.text.is_none());

        let jump = decode(&[0xEB, 0x02], 0, Mode::Bits32, DecodeFlags::empty()).unwrap();
        assert_eq!(jump.control_flow, ControlFlow::UnconditionalBranch { target: 4 });
    }

    #[test]
    fn test_cpu_gate() {
        let config = DecoderConfig::new(Mode::Bits32).with_cpu(Cpu::Pentium);
        let decoder = X86Disassembler::with_config(config);
        let err = decoder.decode(&[0x0F, 0x10, 0xC1], 0).unwrap_err();
        assert!(matches!(err, DecodeError::UnrecognizedOpcode { .. }));
        assert!(decoder.decode(&[0x0F, 0xA2], 0).is_ok());
    }

    #[test]
    fn test_decode_into_reuses_record() {
        let decoder = X86Disassembler::new(Mode::Bits32);
        let mut insn = Instruction::new(0, Mode::Bits32);
        decoder.decode_into(&[0xC7, 0x00, 0x05, 0x00, 0x00, 0x00], 0, &mut insn).unwrap();
        assert_eq!(insn.operands.len(), 2);
        decoder.decode_into(&[0x90], 0x10, &mut insn).unwrap();
        assert_eq!(insn.mnemonic, "nop");
        assert!(insn.operands.is_empty());
        assert_eq!(insn.bytes, vec![0x90]);
        assert_eq!(insn.address, 0x10);
    }

    #[test]
    fn test_invalid_encoding() {
        // 8D C0: lea with a register source
        let err = decode(&[0x8D, 0xC0], 0, Mode::Bits32, DecodeFlags::OPERANDS).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidEncoding { length: 2, .. }));
    }

    #[test]
    fn test_block_resumes_after_error() {
        let decoder = X86Disassembler::new(Mode::Bits64);
        let results = decoder.disassemble_block(&[0x06, 0x90, 0xC3], 0);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_err());
        assert_eq!(results[1].as_ref().unwrap().mnemonic, "nop");
        assert!(results[2].as_ref().unwrap().is_return());
    }
}
