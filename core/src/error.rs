use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Conditions that stop emulation.
///
/// Each of these means the program is malformed or relies on behaviour this
/// interpreter doesn't support. The failing instruction leaves the machine
/// state untouched, so the caller should stop stepping rather than retry.
/// Unknown opcodes are not errors; they are logged and skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("program is {len} bytes but only {capacity} bytes fit above 0x200")]
    ProgramTooLarge { len: usize, capacity: usize },

    #[error("stack overflow: call to {target:#05X} at pc {pc:#05X} with a full stack")]
    StackOverflow { pc: u16, target: u16 },

    #[error("stack underflow: return at pc {pc:#05X} with an empty stack")]
    StackUnderflow { pc: u16 },

    #[error("memory access out of bounds at {addr:#06X} (pc {pc:#05X})")]
    MemoryOutOfBounds { addr: usize, pc: u16 },
}
