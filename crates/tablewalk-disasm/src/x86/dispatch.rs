//! Table walk from the first opcode byte to a leaf descriptor.

use log::{debug, trace};

use super::context::Context;
use super::table::{Node, OpcodeEntry, PrefixSelect};
use super::tables::TableRoot;
use crate::DecodeError;

/// Outcome of a table walk.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Walk {
    /// A leaf matched.
    Found(&'static OpcodeEntry),
    /// The walk reached an undefined slot.
    Unrecognized,
    /// The opcode exists, but not in the current mode.
    ArchitectureMismatch,
}

/// Walk the tables rooted at `root`, consuming opcode bytes (and ModRM where
/// a node needs it) from the context.
pub(crate) fn walk(ctx: &mut Context<'_>, root: &TableRoot) -> Result<Walk, DecodeError> {
    let opcode = ctx.read_opcode()?;
    if root.excluded_one_byte.contains(opcode) {
        debug!("opcode {opcode:#04x} not valid in {:?}", root.family);
        return Ok(Walk::ArchitectureMismatch);
    }

    let mut node: &'static Node = &root.one_byte[usize::from(opcode)];
    loop {
        node = match node {
            Node::Leaf(entry) => {
                trace!("leaf {}", entry.mnemonic);
                return Ok(Walk::Found(entry));
            }
            Node::Invalid | Node::Prefix => return Ok(Walk::Unrecognized),
            Node::Group(table) => {
                let modrm = ctx.fetch_modrm()?;
                trace!("group /{}", modrm.fields.reg);
                &table[usize::from(modrm.fields.reg)]
            }
            Node::TwoByteEscape(table) => {
                let second = ctx.read_opcode()?;
                if root.excluded_two_byte.contains(second) {
                    debug!("opcode 0f {second:#04x} not valid in {:?}", root.family);
                    return Ok(Walk::ArchitectureMismatch);
                }
                trace!("two-byte escape {second:#04x}");
                &table[usize::from(second)]
            }
            Node::ModrmEscape(table) => {
                let modrm = ctx.fetch_modrm()?;
                trace!("modrm escape {:#04x}", modrm.byte);
                &table[usize::from(modrm.byte)]
            }
            Node::FpuEscape(table) => {
                let modrm = ctx.fetch_modrm()?;
                let slot = if modrm.byte < 0xC0 {
                    usize::from(modrm.fields.reg)
                } else {
                    8 + usize::from(modrm.byte - 0xC0)
                };
                trace!("fpu slot {slot:#04x}");
                &table[slot]
            }
            Node::PrefixSelected(select) => select_prefixed(ctx, select),
            Node::SuffixSelected(suffix) => {
                // Data operands precede the selector byte
                if suffix.operands.iter().any(|spec| spec.addressing.needs_modrm()) {
                    ctx.fetch_modrm()?;
                }
                let selector = ctx.read_opcode()?;
                trace!("suffix {selector:#04x}");
                &suffix.entries[usize::from(selector)]
            }
            Node::ModeGated(entries) => {
                let entry = &entries[usize::from(ctx.mode.is_64bit())];
                trace!("mode-gated leaf {}", entry.mnemonic);
                return Ok(Walk::Found(entry));
            }
            Node::RexBGated(entries) => {
                let entry = &entries[usize::from(ctx.prefixes.set.rex_b())];
                trace!("rex.b-gated leaf {}", entry.mnemonic);
                return Ok(Walk::Found(entry));
            }
        };
    }
}

/// Picks the variant for the mandatory prefix, consuming it, or the plain
/// node when there is no matching variant.
fn select_prefixed(ctx: &mut Context<'_>, select: &'static PrefixSelect) -> &'static Node {
    let candidate = ctx
        .prefixes
        .mandatory_candidate()
        .and_then(|byte| Some((byte, PrefixSelect::slot(byte)?)));

    if let Some((byte, slot)) = candidate {
        let variant = &select.prefixed[slot];
        if !matches!(variant, Node::Invalid) {
            trace!("mandatory prefix {byte:#04x}");
            ctx.consume_mandatory(byte);
            return variant;
        }
    }
    &select.plain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::x86::tables::architecture_family;
    use tablewalk_core::Mode;

    fn walk_bytes(bytes: &[u8], mode: Mode) -> (Result<Walk, DecodeError>, usize) {
        let mut ctx = Context::new(bytes, 0, mode);
        let result = walk(&mut ctx, &architecture_family(mode));
        (result, ctx.cursor.position())
    }

    fn mnemonic(bytes: &[u8], mode: Mode) -> &'static str {
        match walk_bytes(bytes, mode).0 {
            Ok(Walk::Found(entry)) => entry.mnemonic,
            other => panic!("no leaf for {bytes:02x?}: {other:?}"),
        }
    }

    #[test]
    fn test_one_byte_leaf() {
        assert_eq!(mnemonic(&[0x05, 0, 0, 0, 0], Mode::Bits32), "add");
        assert_eq!(mnemonic(&[0x90], Mode::Bits32), "nop");
    }

    #[test]
    fn test_group_by_reg_field() {
        // F6 /3 is neg
        assert_eq!(mnemonic(&[0xF6, 0xD8], Mode::Bits32), "neg");
        // C7 /0 is mov
        assert_eq!(mnemonic(&[0xC7, 0x00, 5, 0, 0, 0], Mode::Bits32), "mov");
    }

    #[test]
    fn test_group_ignores_rex_r() {
        // REX.R does not change the group slot
        assert_eq!(mnemonic(&[0x44, 0xF7, 0xD8], Mode::Bits64), "neg");
    }

    #[test]
    fn test_fpu_escape() {
        assert_eq!(mnemonic(&[0xD9, 0xE8], Mode::Bits32), "fld1");
        assert_eq!(mnemonic(&[0xD9, 0xC1], Mode::Bits32), "fld");
    }

    #[test]
    fn test_two_byte_escape() {
        assert_eq!(mnemonic(&[0x0F, 0x84, 2, 0, 0, 0], Mode::Bits32), "jz");
        assert_eq!(mnemonic(&[0x0F, 0xA2], Mode::Bits32), "cpuid");
    }

    #[test]
    fn test_mandatory_prefix_selection() {
        assert_eq!(mnemonic(&[0x0F, 0x10, 0xC1], Mode::Bits32), "movups");
        assert_eq!(mnemonic(&[0x66, 0x0F, 0x10, 0xC1], Mode::Bits32), "movupd");
        assert_eq!(mnemonic(&[0xF2, 0x0F, 0x10, 0xC1], Mode::Bits32), "movsd");
        assert_eq!(mnemonic(&[0xF3, 0x0F, 0x10, 0xC1], Mode::Bits32), "movss");
        // only the last legacy prefix is a candidate
        assert_eq!(mnemonic(&[0xF3, 0x66, 0x0F, 0x10, 0xC1], Mode::Bits32), "movupd");
    }

    #[test]
    fn test_invalid_variant_falls_back_to_plain() {
        // 0F 28 has no F3 form: movaps, with F3 left as a legacy prefix
        let bytes = [0xF3, 0x0F, 0x28, 0xC1];
        let mut ctx = Context::new(&bytes, 0, Mode::Bits32);
        let root = architecture_family(Mode::Bits32);
        match walk(&mut ctx, &root) {
            Ok(Walk::Found(entry)) => assert_eq!(entry.mnemonic, "movaps"),
            other => panic!("{other:?}"),
        }
        assert_eq!(ctx.mandatory, None);
        assert!(ctx.prefixes.set.rep);
    }

    #[test]
    fn test_mode_gated() {
        assert_eq!(mnemonic(&[0x63, 0xC1], Mode::Bits32), "arpl");
        assert_eq!(mnemonic(&[0x63, 0xC1], Mode::Bits64), "movsxd");
    }

    #[test]
    fn test_rex_b_gated() {
        assert_eq!(mnemonic(&[0x90], Mode::Bits64), "nop");
        assert_eq!(mnemonic(&[0x48, 0x90], Mode::Bits64), "nop");
        assert_eq!(mnemonic(&[0x41, 0x90], Mode::Bits64), "xchg");
        assert_eq!(mnemonic(&[0x49, 0x90], Mode::Bits64), "xchg");
    }

    #[test]
    fn test_long_mode_exclusions() {
        let (result, len) = walk_bytes(&[0x06], Mode::Bits64);
        assert!(matches!(result, Ok(Walk::ArchitectureMismatch)));
        assert_eq!(len, 1);
        assert!(matches!(walk_bytes(&[0x06], Mode::Bits32).0, Ok(Walk::Found(_))));
        assert!(matches!(
            walk_bytes(&[0x0F, 0x34], Mode::Bits64).0,
            Ok(Walk::ArchitectureMismatch)
        ));
    }

    #[test]
    fn test_modrm_escape() {
        assert_eq!(mnemonic(&[0x0F, 0x01, 0xC8], Mode::Bits32), "monitor");
        assert_eq!(mnemonic(&[0x0F, 0x01, 0xF8], Mode::Bits64), "swapgs");
    }

    #[test]
    fn test_suffix_selected_after_operands() {
        // 0F 0F /r with [eax+0x10] then suffix 9E (pfadd)
        let (result, len) = walk_bytes(&[0x0F, 0x0F, 0x40, 0x10, 0x9E], Mode::Bits32);
        match result {
            Ok(Walk::Found(entry)) => assert_eq!(entry.mnemonic, "pfadd"),
            other => panic!("{other:?}"),
        }
        assert_eq!(len, 5);
    }

    #[test]
    fn test_truncated_walk() {
        let (result, _) = walk_bytes(&[0x0F], Mode::Bits32);
        assert_eq!(result.unwrap_err(), DecodeError::truncated(0, 1));
    }
}
