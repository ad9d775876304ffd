use std::ops::Range;

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, KEY_COUNT, MEMORY_SIZE, PROGRAM_START, REGISTER_COUNT,
    SPRITE_SHEET, STACK_SIZE,
};
use crate::error::{Error, Result};

/// The FrameBuffer is indexed as [y][x]; each pixel is 0 or 1.
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// Whether the CPU is fetching normally or parked on an `Fx0A` waiting for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Running,
    /// The key index will be written to `register` once any key is down.
    AwaitingKey { register: u8 },
}

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter, always pointing at the next instruction
///
/// Pointer
/// - (sp) the number of return addresses on the stack, 0..=16
///
/// Timers
/// - 2 8-bit timers (delay & sound), decremented once per cycle while non-zero
///
/// ## Memory
/// - 16 entry stack of return addresses
/// - 4096 bytes of addressable memory
///     - 0x000..0x050 holds the built-in hex glyphs
///     - 0x200.. holds the program
/// - 32x64 frame buffer and a flag raised whenever it should be redrawn
///
/// ## Input
/// - 16 key states, replaced wholesale by the caller every cycle
#[derive(Copy, Clone)]
pub struct State {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub stack: [u16; STACK_SIZE],
    pub memory: [u8; MEMORY_SIZE],
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub pressed_keys: [bool; KEY_COUNT],
    pub mode: Mode,
}

impl State {
    pub fn new() -> Self {
        // 0x000 - 0x050 is reserved for a sprite sheet
        let mut memory = [0; MEMORY_SIZE];
        memory[..SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        State {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            stack: [0; STACK_SIZE],
            memory,
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            draw_flag: false,
            pressed_keys: [false; KEY_COUNT],
            mode: Mode::Running,
        }
    }

    /// Moves on to the following instruction.
    pub fn next(&mut self) {
        self.pc = self.pc.wrapping_add(2);
    }

    /// Moves on, jumping over the following instruction if `condition` holds.
    pub fn skip_if(&mut self, condition: bool) {
        let step = if condition { 4 } else { 2 };
        self.pc = self.pc.wrapping_add(step);
    }

    /// Sets VF to 1 or 0.
    pub fn set_flag(&mut self, flag: bool) {
        self.v[0xF] = u8::from(flag);
    }

    /// Whether key `key` is down. Values past 0xF never name a key.
    pub fn is_pressed(&self, key: u8) -> bool {
        self.pressed_keys
            .get(key as usize)
            .copied()
            .unwrap_or(false)
    }

    /// The memory indices `start..start + len`, provided all of them are addressable.
    pub fn memory_range(&self, start: u16, len: usize) -> Result<Range<usize>> {
        let start = start as usize;
        let end = start + len;
        if end > MEMORY_SIZE {
            // report the first address that can't be reached
            return Err(Error::MemoryOutOfBounds {
                addr: start.max(MEMORY_SIZE),
                pc: self.pc,
            });
        }
        Ok(start..end)
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
    fn test_new_state_has_sprite_sheet_and_nothing_else_below_program() {
        let state = State::new();
        assert_eq!(state.memory[..80], SPRITE_SHEET[..]);
        assert!(state.memory[80..PROGRAM_START as usize].iter().all(|&b| b == 0));
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.mode, Mode::Running);
    }

    #[test]
    fn test_skip_if() {
        let mut state = State::new();
        state.skip_if(false);
        assert_eq!(state.pc, 0x202);
        state.skip_if(true);
        assert_eq!(state.pc, 0x206);
    }

    #[test]
    fn test_keys_past_f_are_never_pressed() {
        let mut state = State::new();
        state.pressed_keys = [true; KEY_COUNT];
        assert!(state.is_pressed(0xF));
        assert!(!state.is_pressed(0x10));
    }

    #[test]
    fn test_memory_range_rejects_the_end_of_memory() {
        let state = State::new();
        assert_eq!(state.memory_range(0xFFD, 3), Ok(0xFFD..0x1000));
        assert_eq!(
            state.memory_range(0xFFE, 3),
            Err(Error::MemoryOutOfBounds {
                addr: 0x1000,
                pc: 0x200
            })
        );
    }
}
