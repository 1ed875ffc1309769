//! Operand resolution for a matched opcode entry.
//!
//! Each [`OperandSpec`] names where an operand lives (ModRM field, opcode
//! bits, immediate bytes, or a fixed resource) and a size class. Resolution
//! turns it into a concrete [`Operand`], reading immediates from the cursor in
//! table order. ModRM/SIB/displacement bytes come from the context's cache.

use tablewalk_core::register::x86::{RAX, RBX, RCX, RDI, RDX, RSI};
use tablewalk_core::{Access, MemoryRef, Operand, Register, Resource, Segment};

use super::context::Context;
use super::cursor::sign_extend;
use super::modrm::{EffectiveAddress, ModRm};
use super::table::{Addressing, Fixed, OperandSpec, SizeClass};
use crate::DecodeError;

/// Resolves the operands of one instruction.
pub(crate) struct OperandResolver<'c, 'a> {
    ctx: &'c mut Context<'a>,
    default_64: bool,
    /// Size in bytes of the first operand, for `lea`-style sizing.
    first_size: Option<u16>,
}

impl<'c, 'a> OperandResolver<'c, 'a> {
    pub fn new(ctx: &'c mut Context<'a>, default_64: bool) -> Self {
        Self {
            ctx,
            default_64,
            first_size: None,
        }
    }

    /// Resolves one spec. Specs must be resolved in table order so that
    /// immediates are read in encoding order.
    pub fn resolve(&mut self, spec: &OperandSpec) -> Result<Operand, DecodeError> {
        let operand = match spec.addressing {
            Addressing::Absent => return Err(self.ctx.invalid("empty operand slot")),
            Addressing::Implicit(fixed) => self.fixed(fixed),
            Addressing::Imm => self.immediate(spec.size, spec.access)?,
            Addressing::Rel => self.relative(spec.size)?,
            Addressing::FarPtr => self.far_pointer()?,
            Addressing::MemOffset => self.memory_offset(spec.size)?,
            Addressing::StrSrc => self.string_source(spec.size),
            Addressing::StrDst => self.string_destination(spec.size),
            Addressing::Xlat => self.translate_table(),
            Addressing::OpReg => {
                let rex_b = self.rex_bit(self.ctx.prefixes.set.rex_b());
                let encoding = (self.ctx.last_opcode() & 7) | rex_b;
                Operand::reg(self.gpr(encoding, self.size(spec.size)))
            }
            _ => {
                let modrm = self.ctx.fetch_modrm()?;
                self.from_modrm(&modrm, spec)?
            }
        };

        if self.first_size.is_none() {
            self.first_size = operand.size_bytes();
        }
        Ok(operand)
    }

    /// Operands located through the ModRM byte.
    fn from_modrm(&self, modrm: &ModRm, spec: &OperandSpec) -> Result<Operand, DecodeError> {
        let size = self.size(spec.size);
        let operand = match spec.addressing {
            Addressing::RegMem => match modrm.memory {
                Some(ea) => self.memory(&ea, size),
                None if spec.size == SizeClass::P => {
                    return Err(self.ctx.invalid("far pointer operand requires memory"))
                }
                None => Operand::reg(self.gpr(modrm.rm, size)),
            },
            Addressing::Gpr => Operand::reg(self.gpr(modrm.reg, size)),
            Addressing::Mem => match modrm.memory {
                Some(ea) => self.memory(&ea, size),
                None => return Err(self.ctx.invalid("register form of a memory-only operand")),
            },
            Addressing::RegOnly => {
                if modrm.memory.is_some() {
                    return Err(self.ctx.invalid("memory form of a register-only operand"));
                }
                Operand::reg(Register::gpr(modrm.rm, self.native_bits()))
            }
            Addressing::CtrlReg => Operand::reg(Register::control(modrm.reg, self.native_bits())),
            Addressing::DebugReg => Operand::reg(Register::debug(modrm.reg, self.native_bits())),
            Addressing::TestReg => Operand::reg(Register::test(modrm.fields.reg)),
            Addressing::SegReg => {
                if modrm.fields.reg > 5 {
                    return Err(self.ctx.invalid("undefined segment register"));
                }
                Operand::reg(Register::segment(modrm.fields.reg))
            }
            Addressing::Mmx => Operand::reg(Register::mmx(modrm.fields.reg)),
            Addressing::MmxMem => match modrm.memory {
                Some(ea) => self.memory(&ea, size),
                None => Operand::reg(Register::mmx(modrm.fields.rm)),
            },
            Addressing::MmxRm => {
                if modrm.memory.is_some() {
                    return Err(self.ctx.invalid("memory form of an MMX register operand"));
                }
                Operand::reg(Register::mmx(modrm.fields.rm))
            }
            Addressing::Xmm => Operand::reg(Register::xmm(modrm.reg)),
            Addressing::XmmMem => match modrm.memory {
                Some(ea) => self.memory(&ea, size),
                None => Operand::reg(Register::xmm(modrm.rm)),
            },
            Addressing::XmmRm => {
                if modrm.memory.is_some() {
                    return Err(self.ctx.invalid("memory form of an XMM register operand"));
                }
                Operand::reg(Register::xmm(modrm.rm))
            }
            Addressing::FpuStack => Operand::reg(Register::st(modrm.fields.rm)),
            _ => return Err(self.ctx.invalid("operand does not use ModRM")),
        };
        Ok(operand)
    }

    fn fixed(&self, fixed: Fixed) -> Operand {
        let v = u16::from(self.v());
        match fixed {
            Fixed::Zero => Operand::imm_unsigned(0, 8),
            Fixed::One => Operand::imm_unsigned(1, 8),
            Fixed::AllOnes => Operand::imm_unsigned(0xFF, 8),
            Fixed::Cr0 => Operand::reg(Register::control(0, self.native_bits())),
            Fixed::Es => Operand::reg(Segment::Es.register()),
            Fixed::Cs => Operand::reg(Segment::Cs.register()),
            Fixed::Ss => Operand::reg(Segment::Ss.register()),
            Fixed::Ds => Operand::reg(Segment::Ds.register()),
            Fixed::Fs => Operand::reg(Segment::Fs.register()),
            Fixed::Gs => Operand::reg(Segment::Gs.register()),
            Fixed::Msr(msr) => Operand::Implicit(Resource::Msr(msr)),
            Fixed::CpuidOutput => Operand::Implicit(Resource::CpuidOutput),
            Fixed::FpuConst(constant) => Operand::Implicit(Resource::FpuConstant(constant)),
            Fixed::FpuControl => Operand::Implicit(Resource::FpuControl),
            Fixed::FpuStatus => Operand::Implicit(Resource::FpuStatus),
            Fixed::FpuTag => Operand::Implicit(Resource::FpuTag),
            Fixed::FrameBase => Operand::Implicit(Resource::StackFrame),
            Fixed::Tsc => Operand::Implicit(Resource::TimeStampCounter),
            Fixed::EdxEax => pair(RDX, RAX, 32),
            Fixed::RdxRax => pair(RDX, RAX, v * 8),
            Fixed::RcxRbx => pair(RCX, RBX, if self.rex_w() { 64 } else { 32 }),
            Fixed::Flags => Operand::reg(Register::flags(16)),
            Fixed::RFlags => Operand::reg(Register::flags(v * 8)),
            Fixed::Ah => Operand::reg(Register::high_byte(0)),
            Fixed::Al => Operand::reg(Register::gpr(RAX as u8, 8)),
            Fixed::Ax => Operand::reg(Register::gpr(RAX as u8, 16)),
            Fixed::Cl => Operand::reg(Register::gpr(RCX as u8, 8)),
            Fixed::Dx => Operand::reg(Register::gpr(RDX as u8, 16)),
            Fixed::Ecx => Operand::reg(Register::gpr(RCX as u8, 32)),
            Fixed::Acc => Operand::reg(Register::gpr(RAX as u8, v * 8)),
            Fixed::AccHalf => Operand::reg(Register::gpr(RAX as u8, v * 4)),
            Fixed::St0 => Operand::reg(Register::st(0)),
            Fixed::St1 => Operand::reg(Register::st(1)),
        }
    }

    fn immediate(&mut self, class: SizeClass, access: Access) -> Result<Operand, DecodeError> {
        let len = match class {
            // Only mov r64, imm64 carries a full eight-byte immediate
            SizeClass::V if self.rex_w() => 8,
            SizeClass::V => self.v().min(4),
            other => self.size(other) as u8,
        };
        let len = usize::from(len);
        let raw = self.ctx.cursor.read_le(len)?;
        let bits = (len * 8) as u8;
        Ok(if access.contains(Access::SIGNED) {
            Operand::imm(sign_extend(raw, len), bits)
        } else {
            Operand::imm_unsigned(raw, bits)
        })
    }

    /// Branch displacement; the target is filled in once the length is known.
    fn relative(&mut self, class: SizeClass) -> Result<Operand, DecodeError> {
        let len = match class {
            SizeClass::B => 1,
            _ => usize::from(self.z()),
        };
        let offset = self.ctx.cursor.read_signed(len)?;
        Ok(Operand::pc_rel(offset, 0))
    }

    fn far_pointer(&mut self) -> Result<Operand, DecodeError> {
        let offset = self.ctx.cursor.read_le(usize::from(self.z()))? as u32;
        let selector = self.ctx.cursor.read_u16()?;
        Ok(Operand::FarPointer { selector, offset })
    }

    /// `moffs` forms: an address-size absolute offset with no ModRM.
    fn memory_offset(&mut self, class: SizeClass) -> Result<Operand, DecodeError> {
        let address_size = self.ctx.address_size();
        let address = self.ctx.cursor.read_le(usize::from(address_size))?;
        let mem = MemoryRef::absolute(
            Segment::Ds.register(),
            address as i64,
            self.size(class),
            address_size,
        );
        Ok(Operand::Memory(self.with_segment_override(mem)))
    }

    fn string_source(&self, class: SizeClass) -> Operand {
        let mem = self.string_operand(Segment::Ds, RSI, class);
        Operand::Memory(self.with_segment_override(mem))
    }

    /// `ES:[rDI]`; the segment cannot be overridden.
    fn string_destination(&self, class: SizeClass) -> Operand {
        Operand::Memory(self.string_operand(Segment::Es, RDI, class))
    }

    fn string_operand(&self, segment: Segment, base: u16, class: SizeClass) -> MemoryRef {
        let address_size = self.ctx.address_size();
        MemoryRef::base_disp(
            segment.register(),
            Register::gpr(base as u8, u16::from(address_size) * 8),
            0,
            self.size(class),
            address_size,
        )
    }

    /// `DS:[rBX + AL]` for xlat.
    fn translate_table(&self) -> Operand {
        let address_size = self.ctx.address_size();
        let mem = MemoryRef {
            index: Some(Register::gpr(RAX as u8, 8)),
            ..MemoryRef::base_disp(
                Segment::Ds.register(),
                Register::gpr(RBX as u8, u16::from(address_size) * 8),
                0,
                1,
                address_size,
            )
        };
        Operand::Memory(self.with_segment_override(mem))
    }

    fn memory(&self, ea: &EffectiveAddress, size: u16) -> Operand {
        let mem = MemoryRef {
            segment: ea.default_segment.register(),
            segment_override: false,
            base: ea.base,
            index: ea.index,
            scale: ea.scale,
            displacement: ea.displacement,
            size,
            address_size: ea.address_size,
        };
        Operand::Memory(self.with_segment_override(mem))
    }

    fn with_segment_override(&self, mem: MemoryRef) -> MemoryRef {
        match self.ctx.prefixes.set.segment {
            Some(segment) => mem.with_override(segment.register()),
            None => mem,
        }
    }

    /// General register by encoding and byte width. Without REX, byte
    /// encodings 4-7 are ah/ch/dh/bh.
    fn gpr(&self, encoding: u8, bytes: u16) -> Register {
        if bytes == 1 && !self.ctx.prefixes.has_rex() && (4..8).contains(&encoding) {
            Register::high_byte(encoding - 4)
        } else {
            Register::gpr(encoding, bytes * 8)
        }
    }

    /// Byte size of a size class in the current context.
    fn size(&self, class: SizeClass) -> u16 {
        let v = u16::from(self.v());
        let z = u16::from(self.z());
        let memory_form = self.ctx.modrm().is_some_and(|modrm| !modrm.is_register());
        match class {
            SizeClass::Implied => 0,
            SizeClass::B => 1,
            SizeClass::W => 2,
            SizeClass::D | SizeClass::Ss => 4,
            SizeClass::Q | SizeClass::Sd => 8,
            SizeClass::Dt | SizeClass::Pb | SizeClass::Se => 10,
            SizeClass::O | SizeClass::Ps | SizeClass::Pd => 16,
            SizeClass::Dq if self.rex_w() => 8,
            SizeClass::Dq => 4,
            SizeClass::V => v,
            SizeClass::Z => z,
            SizeClass::A => 2 * z,
            SizeClass::P if self.rex_w() => 10,
            SizeClass::P => 2 + z,
            SizeClass::Fev if v == 2 => 14,
            SizeClass::Fev => 28,
            SizeClass::Fst1 if v == 2 => 94,
            SizeClass::Fst1 => 108,
            SizeClass::Fst2 => 512,
            SizeClass::Mw if memory_form => 2,
            SizeClass::Mw => v,
            SizeClass::Sso if memory_form => 16,
            SizeClass::Sso => 4,
            SizeClass::Sdo if memory_form => 16,
            SizeClass::Sdo => 8,
            SizeClass::Lea => self.first_size.unwrap_or(v),
        }
    }

    /// Effective operand size in bytes.
    fn v(&self) -> u8 {
        self.ctx.operand_size(self.default_64)
    }

    /// Operand size capped at four bytes.
    fn z(&self) -> u8 {
        if self.v() == 2 {
            2
        } else {
            4
        }
    }

    fn rex_w(&self) -> bool {
        self.ctx.prefixes.set.rex_w()
    }

    fn rex_bit(&self, set: bool) -> u8 {
        u8::from(set) << 3
    }

    /// Width of control and debug registers.
    fn native_bits(&self) -> u16 {
        if self.ctx.mode.is_64bit() {
            64
        } else {
            32
        }
    }
}

fn pair(high: u16, low: u16, bits: u16) -> Operand {
    Operand::Implicit(Resource::RegisterPair {
        high: Register::gpr(high as u8, bits),
        low: Register::gpr(low as u8, bits),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::x86::table::{fixed, op};
    use tablewalk_core::Mode;

    fn context(bytes: &[u8], mode: Mode) -> Context<'_> {
        Context::new(bytes, 0x1000, mode)
    }

    fn resolve_all(
        ctx: &mut Context<'_>,
        specs: &[OperandSpec],
    ) -> Result<Vec<Operand>, DecodeError> {
        let mut resolver = OperandResolver::new(ctx, false);
        specs.iter().map(|spec| resolver.resolve(spec)).collect()
    }

    #[test]
    fn test_byte_registers_without_rex() {
        // 88 E0: mov al, ah
        let bytes = [0x88, 0xE0];
        let mut ctx = context(&bytes, Mode::Bits32);
        ctx.read_opcode().unwrap();
        let ops = resolve_all(
            &mut ctx,
            &[
                op(Addressing::RegMem, SizeClass::B, Access::DST),
                op(Addressing::Gpr, SizeClass::B, Access::SRC),
            ],
        )
        .unwrap();
        assert_eq!(ops[0].to_string(), "al");
        assert_eq!(ops[1].to_string(), "ah");
    }

    #[test]
    fn test_byte_registers_with_rex() {
        // 40 88 E0: mov al, spl
        let bytes = [0x40, 0x88, 0xE0];
        let mut ctx = context(&bytes, Mode::Bits64);
        ctx.read_opcode().unwrap();
        let ops = resolve_all(&mut ctx, &[op(Addressing::Gpr, SizeClass::B, Access::SRC)]).unwrap();
        assert_eq!(ops[0].to_string(), "spl");
    }

    #[test]
    fn test_memory_with_immediate() {
        // C7 00 05 00 00 00: mov dword [eax], 5
        let bytes = [0xC7, 0x00, 0x05, 0x00, 0x00, 0x00];
        let mut ctx = context(&bytes, Mode::Bits32);
        ctx.read_opcode().unwrap();
        let ops = resolve_all(
            &mut ctx,
            &[
                op(Addressing::RegMem, SizeClass::V, Access::DST),
                op(Addressing::Imm, SizeClass::Z, Access::SRC),
            ],
        )
        .unwrap();
        assert_eq!(ops[0].to_string(), "dword [eax]");
        assert_eq!(ops[1], Operand::imm_unsigned(5, 32));
        assert_eq!(ctx.cursor.position(), 6);
    }

    #[test]
    fn test_signed_immediate() {
        // 83 C0 FF: add eax, -1
        let bytes = [0x83, 0xC0, 0xFF];
        let mut ctx = context(&bytes, Mode::Bits32);
        ctx.read_opcode().unwrap();
        let ops = resolve_all(
            &mut ctx,
            &[
                op(Addressing::RegMem, SizeClass::V, Access::DST),
                op(Addressing::Imm, SizeClass::B, Access::SRC.union(Access::SIGNED)),
            ],
        )
        .unwrap();
        assert_eq!(ops[1], Operand::imm(-1, 8));
    }

    #[test]
    fn test_imm64_only_with_rex_w() {
        // 48 B8 imm64: mov rax, imm64
        let mut bytes = vec![0x48, 0xB8];
        bytes.extend_from_slice(&0x1122_3344_5566_7788u64.to_le_bytes());
        let mut ctx = context(&bytes, Mode::Bits64);
        ctx.read_opcode().unwrap();
        let ops = resolve_all(
            &mut ctx,
            &[
                op(Addressing::OpReg, SizeClass::V, Access::DST),
                op(Addressing::Imm, SizeClass::V, Access::SRC),
            ],
        )
        .unwrap();
        assert_eq!(ops[0].to_string(), "rax");
        assert_eq!(ops[1], Operand::imm_unsigned(0x1122_3344_5566_7788, 64));
        assert_eq!(ctx.cursor.position(), 10);
    }

    #[test]
    fn test_opcode_register_with_rex_b() {
        // 41 50: push r8
        let bytes = [0x41, 0x50];
        let mut ctx = context(&bytes, Mode::Bits64);
        ctx.read_opcode().unwrap();
        let mut resolver = OperandResolver::new(&mut ctx, true);
        let operand = resolver.resolve(&op(Addressing::OpReg, SizeClass::V, Access::SRC)).unwrap();
        assert_eq!(operand.to_string(), "r8");
    }

    #[test]
    fn test_memory_only_rejects_register_form() {
        // 8D C0: lea with a register operand
        let bytes = [0x8D, 0xC0];
        let mut ctx = context(&bytes, Mode::Bits32);
        ctx.read_opcode().unwrap();
        let spec = op(Addressing::Mem, SizeClass::Lea, Access::SRC);
        let err = resolve_all(&mut ctx, &[spec]).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidEncoding { length: 2, .. }));
    }

    #[test]
    fn test_lea_takes_destination_size() {
        // 8D 04 88: lea eax, [eax + ecx*4]
        let bytes = [0x8D, 0x04, 0x88];
        let mut ctx = context(&bytes, Mode::Bits32);
        ctx.read_opcode().unwrap();
        let ops = resolve_all(
            &mut ctx,
            &[
                op(Addressing::Gpr, SizeClass::V, Access::DST),
                op(Addressing::Mem, SizeClass::Lea, Access::SRC),
            ],
        )
        .unwrap();
        assert_eq!(ops[1].as_memory().unwrap().size, 4);
    }

    #[test]
    fn test_segment_override_applies() {
        // 64 8B 00: mov eax, fs:[eax]
        let bytes = [0x64, 0x8B, 0x00];
        let mut ctx = context(&bytes, Mode::Bits32);
        ctx.read_opcode().unwrap();
        let spec = op(Addressing::RegMem, SizeClass::V, Access::SRC);
        let ops = resolve_all(&mut ctx, &[spec]).unwrap();
        assert_eq!(ops[0].to_string(), "dword fs:[eax]");
    }

    #[test]
    fn test_string_destination_ignores_override() {
        // 2E A5: movsd with a cs override
        let bytes = [0x2E, 0xA5];
        let mut ctx = context(&bytes, Mode::Bits32);
        ctx.read_opcode().unwrap();
        let ops = resolve_all(
            &mut ctx,
            &[
                op(Addressing::StrDst, SizeClass::V, Access::DST),
                op(Addressing::StrSrc, SizeClass::V, Access::SRC),
            ],
        )
        .unwrap();
        let dst = ops[0].as_memory().unwrap();
        assert_eq!(dst.segment, Segment::Es.register());
        assert!(!dst.segment_override);
        let src = ops[1].as_memory().unwrap();
        assert_eq!(src.segment, Segment::Cs.register());
        assert!(src.segment_override);
        assert_eq!(src.base.unwrap().name(), "esi");
    }

    #[test]
    fn test_relative_displacement() {
        let bytes = [0x0F, 0x84, 0xFE, 0xFF, 0xFF, 0xFF];
        let mut ctx = context(&bytes, Mode::Bits32);
        ctx.read_opcode().unwrap();
        ctx.read_opcode().unwrap();
        let ops = resolve_all(&mut ctx, &[op(Addressing::Rel, SizeClass::Z, Access::SRC)]).unwrap();
        assert_eq!(ops[0], Operand::pc_rel(-2, 0));
    }

    #[test]
    fn test_far_pointer() {
        // EA 78 56 34 12 10 00: jmp 0x10:0x12345678
        let bytes = [0xEA, 0x78, 0x56, 0x34, 0x12, 0x10, 0x00];
        let mut ctx = context(&bytes, Mode::Bits32);
        ctx.read_opcode().unwrap();
        let spec = op(Addressing::FarPtr, SizeClass::P, Access::SRC);
        let ops = resolve_all(&mut ctx, &[spec]).unwrap();
        assert_eq!(
            ops[0],
            Operand::FarPointer {
                selector: 0x10,
                offset: 0x1234_5678
            }
        );
    }

    #[test]
    fn test_memory_offset_uses_address_size() {
        // 67 A1 34 12: mov eax, [0x1234] with 16-bit addressing
        let bytes = [0x67, 0xA1, 0x34, 0x12];
        let mut ctx = context(&bytes, Mode::Bits32);
        ctx.read_opcode().unwrap();
        let spec = op(Addressing::MemOffset, SizeClass::V, Access::SRC);
        let ops = resolve_all(&mut ctx, &[spec]).unwrap();
        let mem = ops[0].as_memory().unwrap();
        assert_eq!(mem.displacement, 0x1234);
        assert_eq!(mem.address_size, 2);
        assert_eq!(mem.size, 4);
    }

    #[test]
    fn test_undefined_segment_register() {
        // 8E F0: mov with sreg encoding 6
        let bytes = [0x8E, 0xF0];
        let mut ctx = context(&bytes, Mode::Bits32);
        ctx.read_opcode().unwrap();
        let spec = op(Addressing::SegReg, SizeClass::W, Access::DST);
        let err = resolve_all(&mut ctx, &[spec]).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_fixed_operands() {
        let bytes = [0x99];
        let mut ctx = context(&bytes, Mode::Bits64);
        ctx.read_opcode().unwrap();
        let ops = resolve_all(
            &mut ctx,
            &[
                fixed(Fixed::EdxEax, Access::DST),
                fixed(Fixed::St1, Access::SRC),
                fixed(Fixed::One, Access::SRC),
            ],
        )
        .unwrap();
        assert_eq!(ops[0].to_string(), "edx:eax");
        assert_eq!(ops[1].to_string(), "st1");
        assert_eq!(ops[2], Operand::imm_unsigned(1, 8));
    }

    #[test]
    fn test_control_register_width() {
        // 0F 20 C0: mov eax, cr0 / mov rax, cr0
        let bytes = [0x0F, 0x20, 0xC0];
        for (mode, name) in [(Mode::Bits32, "eax"), (Mode::Bits64, "rax")] {
            let mut ctx = context(&bytes, mode);
            ctx.read_opcode().unwrap();
            ctx.read_opcode().unwrap();
            let ops = resolve_all(
                &mut ctx,
                &[
                    op(Addressing::RegOnly, SizeClass::Dq, Access::DST),
                    op(Addressing::CtrlReg, SizeClass::Dq, Access::SRC),
                ],
            )
            .unwrap();
            assert_eq!(ops[0].to_string(), name);
            assert_eq!(ops[1].to_string(), "cr0");
        }
    }
}
