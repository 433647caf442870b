use crate::constants::{
    FRAME_BUFFER_SIZE, KEY_COUNT, MEMORY_SIZE, PROGRAM_START, SPRITE_SHEET, STACK_SIZE,
};
use crate::error::Fault;
use crate::opcode;

/// One byte per pixel (0 or 1), row-major; pixel (x, y) lives at `x + y * DISPLAY_WIDTH`.
pub type FrameBuffer = [u8; FRAME_BUFFER_SIZE];

/// A snapshot of the Chip-8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) doubles as the carry, borrow and collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Pointer
/// - (sp) the number of return addresses on the stack, 0..=16
///
/// Timers
/// - 2 8-bit timers (delay & sound), each decremented once per cycle while nonzero
///
/// ## Memory
/// - 16 entry stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the font sprite sheet
///     - 0x200.. holds the loaded ROM
/// - 64x32 byte frame buffer
///
/// ## Input
/// - the pressed status of keys 0..F
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub keypad: [bool; KEY_COUNT],
    /// The most recently fetched instruction word
    pub opcode: u16,
    /// Raised by instructions that change the frame buffer
    pub draw_flag: bool,
}

impl State {
    pub fn new() -> Self {
        let mut memory = [0; MEMORY_SIZE];
        memory[0..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory,
            frame_buffer: [0; FRAME_BUFFER_SIZE],
            keypad: [false; KEY_COUNT],
            opcode: 0,
            draw_flag: false,
        }
    }

    /// Reads the big-endian instruction word at pc.
    pub fn fetch(&self) -> Result<u16, Fault> {
        let word = self.read_slice(self.pc as usize, 2)?;
        Ok(opcode::from_bytes(word[0], word[1]))
    }

    /// Borrows `len` bytes of memory starting at `address`.
    pub fn read_slice(&self, address: usize, len: usize) -> Result<&[u8], Fault> {
        let end = self.checked_end(address, len)?;
        Ok(&self.memory[address..end])
    }

    /// Copies `bytes` into memory at `address`; nothing is written unless all of it fits.
    pub fn write_slice(&mut self, address: usize, bytes: &[u8]) -> Result<(), Fault> {
        let end = self.checked_end(address, bytes.len())?;
        self.memory[address..end].copy_from_slice(bytes);
        Ok(())
    }

    fn checked_end(&self, address: usize, len: usize) -> Result<usize, Fault> {
        match address.checked_add(len) {
            Some(end) if end <= MEMORY_SIZE => Ok(end),
            _ => Err(Fault::MemoryOutOfBounds {
                address,
                len,
                pc: self.pc,
            }),
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_loads_font_and_zeroes_the_rest() {
        let state = State::new();
        assert_eq!(state.memory[0..80], SPRITE_SHEET);
        assert!(state.memory[80..].iter().all(|&b| b == 0));
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.sp, 0);
        assert_eq!(state.v, [0; 16]);
        assert!(state.frame_buffer.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_fetch_is_big_endian() {
        let mut state = State::new();
        state.memory[0x200..0x202].copy_from_slice(&[0xAA, 0xBB]);
        assert_eq!(state.fetch(), Ok(0xAABB));
    }

    #[test]
    fn test_fetch_past_end_of_memory_faults() {
        let mut state = State::new();
        state.pc = 0xFFF;
        assert_eq!(
            state.fetch(),
            Err(Fault::MemoryOutOfBounds {
                address: 0xFFF,
                len: 2,
                pc: 0xFFF
            })
        );
    }

    #[test]
    fn test_write_slice_is_all_or_nothing() {
        let mut state = State::new();
        let before = state.clone();
        assert_eq!(
            state.write_slice(0xFFE, &[1, 2, 3]),
            Err(Fault::MemoryOutOfBounds {
                address: 0xFFE,
                len: 3,
                pc: 0x200
            })
        );
        assert_eq!(state, before);

        state.write_slice(0xFFD, &[1, 2, 3]).unwrap();
        assert_eq!(state.memory[0xFFD..], [1, 2, 3]);
    }
}
