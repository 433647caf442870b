/// # Opcodes
///
/// Chip-8 opcodes are 16 bits each, stored big-endian. Their behavior is cased on some combination of:
/// - `(n, _, _, _)` broad categorization; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within the `0x8` ALU group
/// - `(_, _, n, n)` specific behavior within the `0x0`, `0xE` and `0xF` groups
///
/// Nibbles not used to determine the operation carry the operands.
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` an 8-bit literal assigned to and/or compared with Vx
/// - `(_, n, _, _)` the register Vx, or the upper bound of the range V0..=Vx
/// - `(_, _, n, _)` the register Vy
/// - `(_, _, _, n)` a sprite height
pub trait Opcode {
    /// Returns the Opcode's component nibbles, most significant first.
    fn nibbles(&self) -> (u8, u8, u8, u8);

    /// `[x___]`
    fn group(&self) -> u8;

    /// `[_x__]`
    fn x(&self) -> u8;

    /// `[__y_]`
    fn y(&self) -> u8;

    /// `[___n]`
    fn n(&self) -> u8;

    /// `[__nn]`
    fn nn(&self) -> u8;

    /// `[_nnn]`
    fn nnn(&self) -> u16;
}

impl Opcode for u16 {
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        (self.group(), self.x(), self.y(), self.n())
    }

    fn group(&self) -> u8 {
        ((self & 0xF000) >> 12) as u8
    }

    fn x(&self) -> u8 {
        ((self & 0x0F00) >> 8) as u8
    }

    fn y(&self) -> u8 {
        ((self & 0x00F0) >> 4) as u8
    }

    fn n(&self) -> u8 {
        (self & 0x000F) as u8
    }

    fn nn(&self) -> u8 {
        (self & 0x00FF) as u8
    }

    fn nnn(&self) -> u16 {
        self & 0x0FFF
    }
}

/// Combines two subsequent bytes of memory into a big-endian opcode.
pub fn from_bytes(high: u8, low: u8) -> u16 {
    u16::from(high) << 8 | u16::from(low)
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    #[test]
    fn test_nibbles() {
        let op: u16 = 0xABCD;
        assert_eq!(op.nibbles(), (0xA, 0xB, 0xC, 0xD));
    }

    #[test]
    fn test_x_uses_second_nibble() {
        // FX55/FX65 take their register count from here too
        assert_eq!(0xF355u16.x(), 0x3);
        assert_eq!(0xFF65u16.x(), 0xF);
    }

    #[test]
    fn test_nn() {
        let op: u16 = 0xABCD;
        assert_eq!(op.nn(), 0xCD);
    }

    #[test]
    fn test_nnn() {
        let op: u16 = 0xABCD;
        assert_eq!(op.nnn(), 0x0BCD);
    }

    #[test]
    fn test_from_bytes_is_big_endian() {
        assert_eq!(from_bytes(0x00, 0xE0), 0x00E0);
        assert_eq!(from_bytes(0xAA, 0xBB), 0xAABB);
    }
}
