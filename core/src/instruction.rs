use std::fmt;

use rand::Rng;

use crate::error::Result;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// Every instruction the interpreter understands, with its operands already pulled out of the opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0`
    Clr,
    /// `00EE`
    Rts,
    /// `1nnn`
    Jump { addr: u16 },
    /// `2nnn`
    Call { addr: u16 },
    /// `3xkk`
    Ske { x: u8, kk: u8 },
    /// `4xkk`
    Skne { x: u8, kk: u8 },
    /// `5xy0`
    Skre { x: u8, y: u8 },
    /// `6xkk`
    Load { x: u8, kk: u8 },
    /// `7xkk`
    Add { x: u8, kk: u8 },
    /// `8xy0`
    Mv { x: u8, y: u8 },
    /// `8xy1`
    Or { x: u8, y: u8 },
    /// `8xy2`
    And { x: u8, y: u8 },
    /// `8xy3`
    Xor { x: u8, y: u8 },
    /// `8xy4`
    Addr { x: u8, y: u8 },
    /// `8xy5`
    Sub { x: u8, y: u8 },
    /// `8xy6`
    Shr { x: u8 },
    /// `8xy7`
    Subn { x: u8, y: u8 },
    /// `8xyE`
    Shl { x: u8 },
    /// `9xy0`
    Skrne { x: u8, y: u8 },
    /// `Annn`
    Loadi { addr: u16 },
    /// `Bnnn`
    Jumpi { addr: u16 },
    /// `Cxkk`
    Rand { x: u8, kk: u8 },
    /// `Dxyn`
    Draw { x: u8, y: u8, n: u8 },
    /// `Ex9E`
    Skpr { x: u8 },
    /// `ExA1`
    Skup { x: u8 },
    /// `Fx07`
    Moved { x: u8 },
    /// `Fx0A`
    Keyd { x: u8 },
    /// `Fx15`
    Loads { x: u8 },
    /// `Fx18`
    Ld { x: u8 },
    /// `Fx1E`
    Addi { x: u8 },
    /// `Fx29`
    Ldspr { x: u8 },
    /// `Fx33`
    Bcd { x: u8 },
    /// `Fx55`
    Stor { x: u8 },
    /// `Fx65`
    Read { x: u8 },
}

impl Instruction {
    /// Selects the Instruction for a given Opcode, or `None` if it isn't one.
    pub fn decode(op: Opcode) -> Option<Self> {
        use Instruction::*;

        let (x, y, n, kk, addr) = (op.x(), op.y(), op.n(), op.kk(), op.addr());
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Clr,
            (0x0, 0x0, 0xE, 0xE) => Rts,
            (0x1, ..) => Jump { addr },
            (0x2, ..) => Call { addr },
            (0x3, ..) => Ske { x, kk },
            (0x4, ..) => Skne { x, kk },
            (0x5, .., 0x0) => Skre { x, y },
            (0x6, ..) => Load { x, kk },
            (0x7, ..) => Add { x, kk },
            (0x8, .., 0x0) => Mv { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => Addr { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => Shr { x },
            (0x8, .., 0x7) => Subn { x, y },
            (0x8, .., 0xE) => Shl { x },
            (0x9, .., 0x0) => Skrne { x, y },
            (0xA, ..) => Loadi { addr },
            (0xB, ..) => Jumpi { addr },
            (0xC, ..) => Rand { x, kk },
            (0xD, ..) => Draw { x, y, n },
            (0xE, _, 0x9, 0xE) => Skpr { x },
            (0xE, _, 0xA, 0x1) => Skup { x },
            (0xF, _, 0x0, 0x7) => Moved { x },
            (0xF, _, 0x0, 0xA) => Keyd { x },
            (0xF, _, 0x1, 0x5) => Loads { x },
            (0xF, _, 0x1, 0x8) => Ld { x },
            (0xF, _, 0x1, 0xE) => Addi { x },
            (0xF, _, 0x2, 0x9) => Ldspr { x },
            (0xF, _, 0x3, 0x3) => Bcd { x },
            (0xF, _, 0x5, 0x5) => Stor { x },
            (0xF, _, 0x6, 0x5) => Read { x },
            _ => return None,
        };
        Some(instruction)
    }

    /// Applies the instruction to `state`, including moving the program counter.
    ///
    /// `rng` is only drawn from by `Cxkk`.
    pub fn execute<R: Rng + ?Sized>(self, state: &mut State, rng: &mut R) -> Result<()> {
        use Instruction::*;

        match self {
            Clr => clr(state),
            Rts => rts(state)?,
            Jump { addr } => jump(state, addr),
            Call { addr } => call(state, addr)?,
            Ske { x, kk } => ske(state, x, kk),
            Skne { x, kk } => skne(state, x, kk),
            Skre { x, y } => skre(state, x, y),
            Load { x, kk } => load(state, x, kk),
            Add { x, kk } => add(state, x, kk),
            Mv { x, y } => mv(state, x, y),
            Or { x, y } => or(state, x, y),
            And { x, y } => and(state, x, y),
            Xor { x, y } => xor(state, x, y),
            Addr { x, y } => addr(state, x, y),
            Sub { x, y } => sub(state, x, y),
            Shr { x } => shr(state, x),
            Subn { x, y } => subn(state, x, y),
            Shl { x } => shl(state, x),
            Skrne { x, y } => skrne(state, x, y),
            Loadi { addr } => loadi(state, addr),
            Jumpi { addr } => jumpi(state, addr),
            Rand { x, kk } => rand(state, x, kk, rng.gen()),
            Draw { x, y, n } => draw(state, x, y, n)?,
            Skpr { x } => skpr(state, x),
            Skup { x } => skup(state, x),
            Moved { x } => moved(state, x),
            Keyd { x } => keyd(state, x),
            Loads { x } => loads(state, x),
            Ld { x } => ld(state, x),
            Addi { x } => addi(state, x),
            Ldspr { x } => ldspr(state, x),
            Bcd { x } => bcd(state, x)?,
            Stor { x } => stor(state, x)?,
            Read { x } => read(state, x)?,
        }
        Ok(())
    }
}

/// Conventional assembler mnemonics, used when tracing execution.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;

        match *self {
            Clr => write!(f, "CLS"),
            Rts => write!(f, "RET"),
            Jump { addr } => write!(f, "JP {:#05X}", addr),
            Call { addr } => write!(f, "CALL {:#05X}", addr),
            Ske { x, kk } => write!(f, "SE V{:X}, {:#04X}", x, kk),
            Skne { x, kk } => write!(f, "SNE V{:X}, {:#04X}", x, kk),
            Skre { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            Load { x, kk } => write!(f, "LD V{:X}, {:#04X}", x, kk),
            Add { x, kk } => write!(f, "ADD V{:X}, {:#04X}", x, kk),
            Mv { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Or { x, y } => write!(f, "OR V{:X}, V{:X}", x, y),
            And { x, y } => write!(f, "AND V{:X}, V{:X}", x, y),
            Xor { x, y } => write!(f, "XOR V{:X}, V{:X}", x, y),
            Addr { x, y } => write!(f, "ADD V{:X}, V{:X}", x, y),
            Sub { x, y } => write!(f, "SUB V{:X}, V{:X}", x, y),
            Shr { x } => write!(f, "SHR V{:X}", x),
            Subn { x, y } => write!(f, "SUBN V{:X}, V{:X}", x, y),
            Shl { x } => write!(f, "SHL V{:X}", x),
            Skrne { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            Loadi { addr } => write!(f, "LD I, {:#05X}", addr),
            Jumpi { addr } => write!(f, "JP V0, {:#05X}", addr),
            Rand { x, kk } => write!(f, "RND V{:X}, {:#04X}", x, kk),
            Draw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            Skpr { x } => write!(f, "SKP V{:X}", x),
            Skup { x } => write!(f, "SKNP V{:X}", x),
            Moved { x } => write!(f, "LD V{:X}, DT", x),
            Keyd { x } => write!(f, "LD V{:X}, K", x),
            Loads { x } => write!(f, "LD DT, V{:X}", x),
            Ld { x } => write!(f, "LD ST, V{:X}", x),
            Addi { x } => write!(f, "ADD I, V{:X}", x),
            Ldspr { x } => write!(f, "LD F, V{:X}", x),
            Bcd { x } => write!(f, "LD B, V{:X}", x),
            Stor { x } => write!(f, "LD [I], V{:X}", x),
            Read { x } => write!(f, "LD V{:X}, [I]", x),
        }
    }
}
