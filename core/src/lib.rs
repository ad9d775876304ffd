pub use constants::{CLOCK_SPEED, DISPLAY_HEIGHT, DISPLAY_WIDTH, KEY_COUNT};
pub use error::{Error, Result};
pub use instruction::Instruction;
pub use interpreter::{Interpreter, Signal};
pub use opcode::Opcode;
pub use state::{FrameBuffer, Mode, State};

pub mod constants;
mod error;
mod instruction;
mod interpreter;
mod opcode;
mod operations;
pub mod state;
