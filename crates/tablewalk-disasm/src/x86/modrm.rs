//! ModR/M and SIB byte decoding.

use tablewalk_core::{Mode, ModRmFields, Register, RegisterClass, Segment, SibFields};

use super::cursor::Cursor;
use super::prefix::Prefixes;
use crate::DecodeError;

/// A decoded ModR/M byte with its SIB byte and displacement.
///
/// Reading one consumes every addressing byte that follows it, so operand
/// resolution never touches the cursor for ModRM data again.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModRm {
    /// The raw byte.
    pub byte: u8,
    /// Raw fields, as used to index group tables.
    pub fields: ModRmFields,
    /// Reg field extended by REX.R.
    pub reg: u8,
    /// R/M field extended by REX.B.
    pub rm: u8,
    /// SIB fields, extended by REX.X/REX.B.
    pub sib: Option<SibFields>,
    /// Effective address for memory forms.
    pub memory: Option<EffectiveAddress>,
}

/// Memory operand described by ModRM/SIB/displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EffectiveAddress {
    pub base: Option<Register>,
    pub index: Option<Register>,
    pub scale: u8,
    pub displacement: i64,
    /// Address size in bytes.
    pub address_size: u8,
    /// Segment used without an override (SS for rBP/rSP bases).
    pub default_segment: Segment,
}

impl ModRm {
    /// Read a ModR/M byte and its addressing bytes.
    pub fn read(
        cursor: &mut Cursor<'_>,
        prefixes: &Prefixes,
        mode: Mode,
    ) -> Result<Self, DecodeError> {
        let byte = cursor.read_u8()?;
        let fields = ModRmFields::from_byte(byte);
        let rex = prefixes.set;
        let mut modrm = Self {
            byte,
            fields,
            reg: fields.reg | (u8::from(rex.rex_r()) << 3),
            rm: fields.rm | (u8::from(rex.rex_b()) << 3),
            sib: None,
            memory: None,
        };

        if fields.is_register() {
            return Ok(modrm);
        }

        let address_size = prefixes.address_size(mode);
        if address_size == 2 {
            modrm.memory = Some(decode_16(cursor, fields)?);
        } else {
            let (ea, sib) = decode_32_64(cursor, fields, prefixes, mode, address_size)?;
            modrm.memory = Some(ea);
            modrm.sib = sib;
        }
        Ok(modrm)
    }

    /// Returns true if this ModR/M encodes a register operand (mod=11).
    pub fn is_register(&self) -> bool {
        self.fields.is_register()
    }

    /// Fields for the output record, extended by REX.
    pub fn extended_fields(&self) -> ModRmFields {
        ModRmFields {
            mod_: self.fields.mod_,
            reg: self.reg,
            rm: self.rm,
        }
    }
}

/// 16-bit addressing: fixed base/index pairs selected by rm.
fn decode_16(
    cursor: &mut Cursor<'_>,
    fields: ModRmFields,
) -> Result<EffectiveAddress, DecodeError> {
    use tablewalk_core::register::x86::{RBP, RBX, RDI, RSI};

    let reg16 = |id: u16| Some(Register::gpr(id as u8, 16));
    let (base, index) = match fields.rm {
        0 => (reg16(RBX), reg16(RSI)),
        1 => (reg16(RBX), reg16(RDI)),
        2 => (reg16(RBP), reg16(RSI)),
        3 => (reg16(RBP), reg16(RDI)),
        4 => (reg16(RSI), None),
        5 => (reg16(RDI), None),
        6 if fields.mod_ == 0 => (None, None),
        6 => (reg16(RBP), None),
        _ => (reg16(RBX), None),
    };

    let displacement = match fields.mod_ {
        0 if fields.rm == 6 => cursor.read_signed(2)?,
        1 => cursor.read_signed(1)?,
        2 => cursor.read_signed(2)?,
        _ => 0,
    };

    let default_segment = if base.is_some_and(|b| b.id == RBP) {
        Segment::Ss
    } else {
        Segment::Ds
    };

    Ok(EffectiveAddress {
        base,
        index,
        scale: 1,
        displacement,
        address_size: 2,
        default_segment,
    })
}

/// 32/64-bit addressing with optional SIB and RIP-relative forms.
fn decode_32_64(
    cursor: &mut Cursor<'_>,
    fields: ModRmFields,
    prefixes: &Prefixes,
    mode: Mode,
    address_size: u8,
) -> Result<(EffectiveAddress, Option<SibFields>), DecodeError> {
    let rex = prefixes.set;
    let width = u16::from(address_size) * 8;
    let gpr = |id: u8| Register::gpr(id, width);

    let mut base = None;
    let mut index = None;
    let mut scale = 1;
    let mut sib_out = None;
    let mut disp_len = match fields.mod_ {
        1 => 1,
        2 => 4,
        _ => 0,
    };

    if fields.rm == 4 {
        let sib = SibFields::from_byte(cursor.read_u8()?);
        let index_id = sib.index | (u8::from(rex.rex_x()) << 3);
        let base_id = sib.base | (u8::from(rex.rex_b()) << 3);
        sib_out = Some(SibFields {
            scale: sib.scale,
            index: index_id,
            base: base_id,
        });

        // Index 100b without REX.X means no index
        if index_id != 4 {
            index = Some(gpr(index_id));
            scale = sib.multiplier();
        }

        // Base 101b with mod=00 means disp32, no base
        if sib.base == 5 && fields.mod_ == 0 {
            disp_len = 4;
        } else {
            base = Some(gpr(base_id));
        }
    } else if fields.rm == 5 && fields.mod_ == 0 {
        disp_len = 4;
        if mode.is_64bit() {
            base = Some(Register::ip(width));
        }
    } else {
        base = Some(gpr(fields.rm | (u8::from(rex.rex_b()) << 3)));
    }

    let displacement = if disp_len > 0 {
        cursor.read_signed(disp_len)?
    } else {
        0
    };

    let default_segment = match base {
        Some(b) if b.class == RegisterClass::General && (b.id == 4 || b.id == 5) => Segment::Ss,
        _ => Segment::Ds,
    };

    Ok((
        EffectiveAddress {
            base,
            index,
            scale,
            displacement,
            address_size,
            default_segment,
        },
        sib_out,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(bytes: &[u8], prefixes: &[u8], mode: Mode) -> (ModRm, usize) {
        let mut cursor = Cursor::new(prefixes, 0);
        let prefixes = Prefixes::scan(&mut cursor, mode);
        let mut cursor = Cursor::new(bytes, 0);
        let modrm = ModRm::read(&mut cursor, &prefixes, mode).unwrap();
        (modrm, cursor.position())
    }

    #[test]
    fn test_register_form() {
        let (modrm, len) = read(&[0xD8], &[], Mode::Bits32);
        assert_eq!(len, 1);
        assert!(modrm.is_register());
        assert_eq!((modrm.fields.reg, modrm.rm), (3, 0));
        assert!(modrm.memory.is_none());
    }

    #[test]
    fn test_rex_extends_reg_and_rm() {
        let (modrm, _) = read(&[0xC0], &[0x45], Mode::Bits64);
        assert_eq!((modrm.reg, modrm.rm), (8, 8));
        // group tables still see the raw field
        assert_eq!(modrm.fields.reg, 0);
    }

    #[test]
    fn test_base_plus_disp8() {
        let (modrm, len) = read(&[0x45, 0xF8], &[], Mode::Bits32);
        assert_eq!(len, 2);
        let ea = modrm.memory.unwrap();
        assert_eq!(ea.base.unwrap().name(), "ebp");
        assert_eq!(ea.displacement, -8);
        assert_eq!(ea.default_segment, Segment::Ss);
    }

    #[test]
    fn test_sib_with_index() {
        // [eax + ecx*4 + 0x10]
        let (modrm, len) = read(&[0x44, 0x88, 0x10], &[], Mode::Bits32);
        assert_eq!(len, 3);
        let ea = modrm.memory.unwrap();
        assert_eq!(ea.base.unwrap().name(), "eax");
        assert_eq!(ea.index.unwrap().name(), "ecx");
        assert_eq!(ea.scale, 4);
        assert_eq!(ea.displacement, 0x10);
        assert!(modrm.sib.is_some());
    }

    #[test]
    fn test_sib_no_base_no_index() {
        // [disp32]
        let (modrm, len) = read(&[0x04, 0x25, 0x00, 0x10, 0x00, 0x00], &[], Mode::Bits32);
        assert_eq!(len, 6);
        let ea = modrm.memory.unwrap();
        assert!(ea.base.is_none() && ea.index.is_none());
        assert_eq!(ea.displacement, 0x1000);
    }

    #[test]
    fn test_rex_x_index_is_not_suppressed() {
        // SIB index 100b with REX.X selects r12
        let (modrm, _) = read(&[0x04, 0x20], &[0x42], Mode::Bits64);
        assert_eq!(modrm.memory.unwrap().index.unwrap().name(), "r12");
    }

    #[test]
    fn test_rip_relative() {
        let (modrm, len) = read(&[0x05, 0x10, 0x00, 0x00, 0x00], &[], Mode::Bits64);
        assert_eq!(len, 5);
        let ea = modrm.memory.unwrap();
        assert_eq!(ea.base.unwrap().name(), "rip");
        assert_eq!(ea.displacement, 0x10);

        // the same encoding is absolute outside long mode
        let (modrm, _) = read(&[0x05, 0x10, 0x00, 0x00, 0x00], &[], Mode::Bits32);
        assert!(modrm.memory.unwrap().base.is_none());
    }

    #[test]
    fn test_16bit_forms() {
        // [bp + si + 0x1234]
        let (modrm, len) = read(&[0x82, 0x34, 0x12], &[], Mode::Bits16);
        assert_eq!(len, 3);
        let ea = modrm.memory.unwrap();
        assert_eq!(ea.base.unwrap().name(), "bp");
        assert_eq!(ea.index.unwrap().name(), "si");
        assert_eq!(ea.displacement, 0x1234);
        assert_eq!(ea.default_segment, Segment::Ss);

        // mod=00 rm=110 is disp16 only
        let (modrm, len) = read(&[0x06, 0x00, 0x80], &[], Mode::Bits16);
        assert_eq!(len, 3);
        let ea = modrm.memory.unwrap();
        assert!(ea.base.is_none());
        assert_eq!(ea.displacement, -0x8000);
    }

    #[test]
    fn test_address_size_override() {
        // 67 in 32-bit mode selects 16-bit addressing: [bx + di]
        let (modrm, _) = read(&[0x01], &[0x67], Mode::Bits32);
        let ea = modrm.memory.unwrap();
        assert_eq!(ea.address_size, 2);
        assert_eq!(ea.base.unwrap().name(), "bx");

        // 67 in 64-bit mode selects 32-bit registers
        let (modrm, _) = read(&[0x00], &[0x67], Mode::Bits64);
        assert_eq!(modrm.memory.unwrap().base.unwrap().name(), "eax");
    }

    #[test]
    fn test_truncated_displacement() {
        let mut cursor = Cursor::new(&[0x80, 0x00], 0);
        let err = ModRm::read(&mut cursor, &Prefixes::default(), Mode::Bits32).unwrap_err();
        assert_eq!(err, DecodeError::truncated(0, 2));
    }
}
