/// Total addressable memory, 0x000..=0xFFF.
pub const MEMORY_SIZE: usize = 4096;

/// ROMs are loaded into memory starting at 0x200
pub const PROGRAM_START: u16 = 0x200;

/// The most bytes a ROM can occupy above `PROGRAM_START`.
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Return addresses the stack can hold before a call overflows it.
pub const STACK_SIZE: usize = 16;

pub const REGISTER_COUNT: usize = 16;

/// Keys on the hexadecimal keypad, 0x0..=0xF.
pub const KEY_COUNT: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Nanoseconds per CPU cycle; the interpreter is nominally clocked at 60Hz.
pub const CLOCK_SPEED: u64 = 1_000_000_000 / 60;

/// Bytes per glyph in the `SPRITE_SHEET`.
pub const SPRITE_BYTES: u16 = 5;

/// # Sprite Sheet
/// Built-in glyphs for the hexadecimal digits 0..F, written to 0x000..0x050.
///
/// Each glyph is 5 rows of 8 pixels, of which only the high 4 bits are used.
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
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
