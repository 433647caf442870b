/// Addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Address of the first executable byte; ROMs are loaded here.
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the end of memory.
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;
pub const FRAME_BUFFER_SIZE: usize = DISPLAY_WIDTH * DISPLAY_HEIGHT;

/// Return addresses the call stack can hold.
pub const STACK_SIZE: usize = 16;

/// Keys on the hexadecimal keypad (0..F).
pub const KEY_COUNT: usize = 16;

/// Timers decay at 60Hz and the interpreter runs one instruction per timer tick.
pub const TIMER_HZ: u32 = 60;

/// Bytes per font glyph.
pub const GLYPH_SIZE: u16 = 5;

/// # Sprite Sheet
/// Glyphs for the hexadecimal digits 0..F, each 8 pixels wide and 5 rows tall.
/// Occupies memory 0x000..0x050; the glyph for digit `d` starts at `d * GLYPH_SIZE`.
///
/// ```text
/// "0"      0xF0  ****
///          0x90  *  *
///          0x90  *  *
///          0x90  *  *
///          0xF0  ****
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
