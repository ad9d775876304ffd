use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace, warn};

use crate::constants::{KEY_COUNT, MAX_PROGRAM_SIZE, PROGRAM_START};
use crate::error::{Error, Result};
use crate::instruction::Instruction;
use crate::opcode::Opcode;
use crate::state::{FrameBuffer, Mode, State};

/// Side effects of a cycle that the caller has to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    None,
    /// The sound timer just ran out; play one beep.
    Beep,
}

/// # Interpreter
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns the machine `state` and the random source used by `Cxkk`.
///
/// Supplies interfaces for:
/// - resetting the machine and loading programs
/// - replacing the pressed keys
/// - advancing the CPU and its timers one cycle at a time
/// - inspecting its frame buffer for rendering by some display
///
/// Pacing is left to the caller, which is expected to call `step` at a steady
/// rate (nominally `CLOCK_SPEED`) and to consume each frame before the next step.
pub struct Interpreter {
    state: State,
    rng: StdRng,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            state: State::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// An interpreter whose `Cxkk` results are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Interpreter {
            state: State::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Resets memory, registers, stack, timers, frame buffer and keys, then
    /// rewrites the sprite sheet. Any loaded program is gone afterwards.
    pub fn initialize(&mut self) {
        debug!("initializing interpreter");
        self.state = State::new();
    }

    /// Copies `program` into memory starting at 0x200.
    ///
    /// # Arguments
    /// * `program` raw machine code; at most `MAX_PROGRAM_SIZE` bytes
    pub fn load(&mut self, program: &[u8]) -> Result<()> {
        if program.len() > MAX_PROGRAM_SIZE {
            return Err(Error::ProgramTooLarge {
                len: program.len(),
                capacity: MAX_PROGRAM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.state.memory[start..start + program.len()].copy_from_slice(program);
        debug!(bytes = program.len(), "loaded program");
        Ok(())
    }

    /// Replaces the pressed status of every key.
    ///
    /// # Arguments
    /// * `keys` indexed by key, 0x0..=0xF; `true` if that key is down
    pub fn set_keys(&mut self, keys: [bool; KEY_COUNT]) {
        self.state.pressed_keys = keys;
    }

    /// Advances the CPU by a single cycle
    /// - gets, decodes and executes the next opcode
    /// - skips over opcodes it doesn't recognise
    /// - ticks the timers
    ///
    /// A fatal error leaves the state as it was before the cycle.
    pub fn step(&mut self) -> Result<Signal> {
        let op = self.get_op()?;
        let decoded = Instruction::decode(op);
        match decoded {
            Some(instruction) => {
                trace!(pc = self.state.pc, %op, %instruction);
                instruction.execute(&mut self.state, &mut self.rng)?;
            }
            None => {
                warn!(pc = self.state.pc, %op, "unknown opcode");
                self.state.next();
            }
        }
        Ok(self.advance_timers(decoded))
    }

    /// Whether the frame buffer changed since it was last consumed.
    pub fn needs_redraw(&self) -> bool {
        self.state.draw_flag
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Returns the FrameBuffer if the display should be redrawn, marking it as drawn.
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn clear_redraw(&mut self) {
        self.state.draw_flag = false;
    }

    /// Whether the last cycle parked on an `Fx0A` with no key down.
    pub fn is_awaiting_key(&self) -> bool {
        match self.state.mode {
            Mode::AwaitingKey { .. } => true,
            Mode::Running => false,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Decrements each non-zero timer.
    /// - a timer loaded by this cycle's instruction keeps its new value until the next cycle
    /// - the sound timer going from 1 to 0 is reported as a beep
    fn advance_timers(&mut self, executed: Option<Instruction>) -> Signal {
        let (delay_loaded, sound_loaded) = match executed {
            Some(Instruction::Loads { .. }) => (true, false),
            Some(Instruction::Ld { .. }) => (false, true),
            _ => (false, false),
        };

        if self.state.delay_timer > 0 && !delay_loaded {
            self.state.delay_timer -= 1;
        }

        if self.state.sound_timer > 0 && !sound_loaded {
            self.state.sound_timer -= 1;
            if self.state.sound_timer == 0 {
                debug!("beep");
                return Signal::Beep;
            }
        }
        Signal::None
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    fn get_op(&self) -> Result<Opcode> {
        let range = self.state.memory_range(self.state.pc, 2)?;
        let bytes = &self.state.memory[range];
        Ok(Opcode::from_bytes(bytes[0], bytes[1]))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
