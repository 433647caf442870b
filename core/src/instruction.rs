use std::fmt;

use crate::opcode::Opcode;

/// A decoded Chip-8 instruction.
///
/// `x` and `y` are register indices (0..=0xF), `nn` an 8-bit literal,
/// `nnn` a 12-bit address and `n` a sprite height in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0
    Clear,
    /// 00EE
    Return,
    /// 1NNN
    Jump { nnn: u16 },
    /// 2NNN
    Call { nnn: u16 },
    /// 3XNN
    SkipIfEqual { x: u8, nn: u8 },
    /// 4XNN
    SkipIfNotEqual { x: u8, nn: u8 },
    /// 5XY0
    SkipIfRegistersEqual { x: u8, y: u8 },
    /// 6XNN
    Load { x: u8, nn: u8 },
    /// 7XNN
    Add { x: u8, nn: u8 },
    /// 8XY0
    Move { x: u8, y: u8 },
    /// 8XY1
    Or { x: u8, y: u8 },
    /// 8XY2
    And { x: u8, y: u8 },
    /// 8XY3
    Xor { x: u8, y: u8 },
    /// 8XY4
    AddRegisters { x: u8, y: u8 },
    /// 8XY5
    Sub { x: u8, y: u8 },
    /// 8XY6
    ShiftRight { x: u8 },
    /// 8XY7
    SubN { x: u8, y: u8 },
    /// 8XYE
    ShiftLeft { x: u8 },
    /// 9XY0
    SkipIfRegistersNotEqual { x: u8, y: u8 },
    /// ANNN
    LoadIndex { nnn: u16 },
    /// BNNN
    JumpOffset { nnn: u16 },
    /// CXNN
    Random { x: u8, nn: u8 },
    /// DXYN
    Draw { x: u8, y: u8, n: u8 },
    /// EX9E
    SkipIfPressed { x: u8 },
    /// EXA1
    SkipIfNotPressed { x: u8 },
    /// FX07
    LoadDelay { x: u8 },
    /// FX0A
    WaitForKey { x: u8 },
    /// FX15
    SetDelay { x: u8 },
    /// FX18
    SetSound { x: u8 },
    /// FX1E
    AddIndex { x: u8 },
    /// FX29
    LoadGlyph { x: u8 },
    /// FX33
    StoreBcd { x: u8 },
    /// FX55
    StoreRegisters { x: u8 },
    /// FX65
    LoadRegisters { x: u8 },
}

impl Instruction {
    /// Selects the Instruction for a given opcode, or `None` if it matches no defined pattern.
    pub fn decode(op: u16) -> Option<Self> {
        use Instruction::*;

        let (x, y, n, nn, nnn) = (op.x(), op.y(), op.n(), op.nn(), op.nnn());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Clear,
            (0x0, 0x0, 0xE, 0xE) => Return,
            (0x1, ..) => Jump { nnn },
            (0x2, ..) => Call { nnn },
            (0x3, ..) => SkipIfEqual { x, nn },
            (0x4, ..) => SkipIfNotEqual { x, nn },
            (0x5, ..) => SkipIfRegistersEqual { x, y },
            (0x6, ..) => Load { x, nn },
            (0x7, ..) => Add { x, nn },
            (0x8, .., 0x0) => Move { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => AddRegisters { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => ShiftRight { x },
            (0x8, .., 0x7) => SubN { x, y },
            (0x8, .., 0xE) => ShiftLeft { x },
            (0x9, ..) => SkipIfRegistersNotEqual { x, y },
            (0xA, ..) => LoadIndex { nnn },
            (0xB, ..) => JumpOffset { nnn },
            (0xC, ..) => Random { x, nn },
            (0xD, ..) => Draw { x, y, n },
            (0xE, _, 0x9, 0xE) => SkipIfPressed { x },
            (0xE, _, 0xA, 0x1) => SkipIfNotPressed { x },
            (0xF, _, 0x0, 0x7) => LoadDelay { x },
            (0xF, _, 0x0, 0xA) => WaitForKey { x },
            (0xF, _, 0x1, 0x5) => SetDelay { x },
            (0xF, _, 0x1, 0x8) => SetSound { x },
            (0xF, _, 0x1, 0xE) => AddIndex { x },
            (0xF, _, 0x2, 0x9) => LoadGlyph { x },
            (0xF, _, 0x3, 0x3) => StoreBcd { x },
            (0xF, _, 0x5, 0x5) => StoreRegisters { x },
            (0xF, _, 0x6, 0x5) => LoadRegisters { x },
            _ => return None,
        };
        Some(instruction)
    }
}

/// Conventional Chip-8 assembler mnemonics.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;

        match *self {
            Clear => write!(f, "CLS"),
            Return => write!(f, "RET"),
            Jump { nnn } => write!(f, "JP {:#05X}", nnn),
            Call { nnn } => write!(f, "CALL {:#05X}", nnn),
            SkipIfEqual { x, nn } => write!(f, "SE V{:X}, {:#04X}", x, nn),
            SkipIfNotEqual { x, nn } => write!(f, "SNE V{:X}, {:#04X}", x, nn),
            SkipIfRegistersEqual { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            Load { x, nn } => write!(f, "LD V{:X}, {:#04X}", x, nn),
            Add { x, nn } => write!(f, "ADD V{:X}, {:#04X}", x, nn),
            Move { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Or { x, y } => write!(f, "OR V{:X}, V{:X}", x, y),
            And { x, y } => write!(f, "AND V{:X}, V{:X}", x, y),
            Xor { x, y } => write!(f, "XOR V{:X}, V{:X}", x, y),
            AddRegisters { x, y } => write!(f, "ADD V{:X}, V{:X}", x, y),
            Sub { x, y } => write!(f, "SUB V{:X}, V{:X}", x, y),
            ShiftRight { x } => write!(f, "SHR V{:X}", x),
            SubN { x, y } => write!(f, "SUBN V{:X}, V{:X}", x, y),
            ShiftLeft { x } => write!(f, "SHL V{:X}", x),
            SkipIfRegistersNotEqual { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            LoadIndex { nnn } => write!(f, "LD I, {:#05X}", nnn),
            JumpOffset { nnn } => write!(f, "JP V0, {:#05X}", nnn),
            Random { x, nn } => write!(f, "RND V{:X}, {:#04X}", x, nn),
            Draw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            SkipIfPressed { x } => write!(f, "SKP V{:X}", x),
            SkipIfNotPressed { x } => write!(f, "SKNP V{:X}", x),
            LoadDelay { x } => write!(f, "LD V{:X}, DT", x),
            WaitForKey { x } => write!(f, "LD V{:X}, K", x),
            SetDelay { x } => write!(f, "LD DT, V{:X}", x),
            SetSound { x } => write!(f, "LD ST, V{:X}", x),
            AddIndex { x } => write!(f, "ADD I, V{:X}", x),
            LoadGlyph { x } => write!(f, "LD F, V{:X}", x),
            StoreBcd { x } => write!(f, "LD B, V{:X}", x),
            StoreRegisters { x } => write!(f, "LD [I], V{:X}", x),
            LoadRegisters { x } => write!(f, "LD V{:X}, [I]", x),
        }
    }
}

#[cfg(test)]
mod test_instruction {
    use super::Instruction::*;
    use super::*;

    #[test]
    fn test_decodes_fixed_encodings() {
        assert_eq!(Instruction::decode(0x00E0), Some(Clear));
        assert_eq!(Instruction::decode(0x00EE), Some(Return));
    }

    #[test]
    fn test_decodes_address_operands() {
        assert_eq!(Instruction::decode(0x1ABC), Some(Jump { nnn: 0xABC }));
        assert_eq!(Instruction::decode(0x2123), Some(Call { nnn: 0x123 }));
        assert_eq!(Instruction::decode(0xA2F0), Some(LoadIndex { nnn: 0x2F0 }));
        assert_eq!(Instruction::decode(0xB300), Some(JumpOffset { nnn: 0x300 }));
    }

    #[test]
    fn test_decodes_register_and_literal_operands() {
        assert_eq!(
            Instruction::decode(0x3A42),
            Some(SkipIfEqual { x: 0xA, nn: 0x42 })
        );
        assert_eq!(Instruction::decode(0x6122), Some(Load { x: 0x1, nn: 0x22 }));
        assert_eq!(
            Instruction::decode(0xC50F),
            Some(Random { x: 0x5, nn: 0x0F })
        );
        assert_eq!(
            Instruction::decode(0xD125),
            Some(Draw {
                x: 0x1,
                y: 0x2,
                n: 0x5
            })
        );
    }

    #[test]
    fn test_decodes_alu_group_on_last_nibble() {
        assert_eq!(Instruction::decode(0x8120), Some(Move { x: 1, y: 2 }));
        assert_eq!(
            Instruction::decode(0x8124),
            Some(AddRegisters { x: 1, y: 2 })
        );
        assert_eq!(Instruction::decode(0x8126), Some(ShiftRight { x: 1 }));
        assert_eq!(Instruction::decode(0x8127), Some(SubN { x: 1, y: 2 }));
        assert_eq!(Instruction::decode(0x812E), Some(ShiftLeft { x: 1 }));
    }

    #[test]
    fn test_decodes_f_group_on_last_byte() {
        assert_eq!(Instruction::decode(0xF30A), Some(WaitForKey { x: 3 }));
        assert_eq!(Instruction::decode(0xF329), Some(LoadGlyph { x: 3 }));
        assert_eq!(Instruction::decode(0xF355), Some(StoreRegisters { x: 3 }));
        assert_eq!(Instruction::decode(0xFF65), Some(LoadRegisters { x: 0xF }));
    }

    #[test]
    fn test_register_compare_ignores_last_nibble() {
        assert_eq!(
            Instruction::decode(0x5120),
            Some(SkipIfRegistersEqual { x: 1, y: 2 })
        );
        assert_eq!(
            Instruction::decode(0x5121),
            Some(SkipIfRegistersEqual { x: 1, y: 2 })
        );
        assert_eq!(
            Instruction::decode(0x912F),
            Some(SkipIfRegistersNotEqual { x: 1, y: 2 })
        );
    }

    #[test]
    fn test_rejects_undefined_encodings() {
        for op in [
            0x0001, 0x0000, 0x00E1, 0x8128, 0x812F, 0xE19F, 0xE100, 0xF100, 0xF156, 0xF1FF,
        ] {
            assert_eq!(Instruction::decode(op), None, "{:#06X}", op);
        }
    }

    #[test]
    fn test_display_mnemonics() {
        assert_eq!(Clear.to_string(), "CLS");
        assert_eq!(Jump { nnn: 0x234 }.to_string(), "JP 0x234");
        assert_eq!(Load { x: 1, nn: 0x22 }.to_string(), "LD V1, 0x22");
        assert_eq!(Draw { x: 0, y: 1, n: 5 }.to_string(), "DRW V0, V1, 5");
        assert_eq!(LoadRegisters { x: 0xA }.to_string(), "LD VA, [I]");
    }
}
