use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, KEY_COUNT, SPRITE_BYTES, STACK_SIZE};
use crate::error::{Error, Result};
use crate::state::{Mode, State};

/// clear
pub fn clr(state: &mut State) {
    state.frame_buffer = [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    state.draw_flag = true;
    state.next();
}

/// PC = STACK.pop() + 2
/// The stack holds the address of the call itself, so resume after it.
pub fn rts(state: &mut State) -> Result<()> {
    if state.sp == 0 {
        return Err(Error::StackUnderflow { pc: state.pc });
    }
    state.sp -= 1;
    state.pc = state.stack[state.sp as usize];
    state.next();
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, addr: u16) {
    state.pc = addr;
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, addr: u16) -> Result<()> {
    if state.sp as usize >= STACK_SIZE {
        return Err(Error::StackOverflow {
            pc: state.pc,
            target: addr,
        });
    }
    state.stack[state.sp as usize] = state.pc;
    state.sp += 1;
    state.pc = addr;
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(state: &mut State, x: u8, kk: u8) {
    let skip = state.v[x as usize] == kk;
    state.skip_if(skip);
}

/// if Vx != kk then pc += 2
pub fn skne(state: &mut State, x: u8, kk: u8) {
    let skip = state.v[x as usize] != kk;
    state.skip_if(skip);
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &mut State, x: u8, y: u8) {
    let skip = state.v[x as usize] == state.v[y as usize];
    state.skip_if(skip);
}

/// Vx = kk
pub fn load(state: &mut State, x: u8, kk: u8) {
    state.v[x as usize] = kk;
    state.next();
}

/// Vx += kk
/// Wraps on overflow without touching VF
pub fn add(state: &mut State, x: u8, kk: u8) {
    state.v[x as usize] = state.v[x as usize].wrapping_add(kk);
    state.next();
}

/// Vx = Vy
pub fn mv(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] = state.v[y as usize];
    state.next();
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] |= state.v[y as usize];
    state.next();
}

/// Vx &= Vy
pub fn and(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] &= state.v[y as usize];
    state.next();
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: u8, y: u8) {
    state.v[x as usize] ^= state.v[y as usize];
    state.next();
}

// The flag is written after the result in the arithmetic ops below so that
// when x is F, VF ends up holding the flag.

/// Vx += Vy; VF = overflow
pub fn addr(state: &mut State, x: u8, y: u8) {
    let (res, over) = state.v[x as usize].overflowing_add(state.v[y as usize]);
    state.v[x as usize] = res;
    state.set_flag(over);
    state.next();
}

/// Vx -= Vy; VF = !underflow
pub fn sub(state: &mut State, x: u8, y: u8) {
    let (res, under) = state.v[x as usize].overflowing_sub(state.v[y as usize]);
    state.v[x as usize] = res;
    state.set_flag(!under);
    state.next();
}

/// Vx >>= 1; VF = the bit shifted out
pub fn shr(state: &mut State, x: u8) {
    let lsb = state.v[x as usize] & 0x1;
    state.v[x as usize] >>= 1;
    state.v[0xF] = lsb;
    state.next();
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(state: &mut State, x: u8, y: u8) {
    let (res, under) = state.v[y as usize].overflowing_sub(state.v[x as usize]);
    state.v[x as usize] = res;
    state.set_flag(!under);
    state.next();
}

/// Vx <<= 1; VF = the bit shifted out
pub fn shl(state: &mut State, x: u8) {
    let msb = state.v[x as usize] >> 7;
    state.v[x as usize] <<= 1;
    state.v[0xF] = msb;
    state.next();
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &mut State, x: u8, y: u8) {
    let skip = state.v[x as usize] != state.v[y as usize];
    state.skip_if(skip);
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) {
    state.i = addr;
    state.next();
}

/// PC = V0 + addr
pub fn jumpi(state: &mut State, addr: u16) {
    state.pc = u16::from(state.v[0x0]) + addr;
}

/// Vx = random_byte & kk
pub fn rand(state: &mut State, x: u8, kk: u8, random_byte: u8) {
    state.v[x as usize] = random_byte & kk;
    state.next();
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the n byte sprite at memory I..I+n onto the FrameBuffer at (Vx, Vy), wrapping on both axes.
/// Sets VF if any pixel was erased
pub fn draw(state: &mut State, x: u8, y: u8, n: u8) -> Result<()> {
    let rows = state.memory_range(state.i, n as usize)?;
    let origin_x = state.v[x as usize] as usize;
    let origin_y = state.v[y as usize] as usize;
    let mut collision = false;

    for (row, address) in rows.enumerate() {
        let sprite_byte = state.memory[address];
        let py = (origin_y + row) % DISPLAY_HEIGHT;
        for bit in 0..8 {
            let pixel = (sprite_byte >> (7 - bit)) & 0x1;
            let px = (origin_x + bit) % DISPLAY_WIDTH;
            let current = &mut state.frame_buffer[py][px];
            collision |= pixel == 1 && *current == 1;
            *current ^= pixel;
        }
    }

    state.set_flag(collision);
    state.draw_flag = true;
    state.next();
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &mut State, x: u8) {
    let skip = state.is_pressed(state.v[x as usize]);
    state.skip_if(skip);
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &mut State, x: u8) {
    let skip = !state.is_pressed(state.v[x as usize]);
    state.skip_if(skip);
}

/// Vx = DT
pub fn moved(state: &mut State, x: u8) {
    state.v[x as usize] = state.delay_timer;
    state.next();
}

/// await keypress for Vx
/// Leaves PC in place until a key is down so this instruction is fetched again
pub fn keyd(state: &mut State, x: u8) {
    let lowest_pressed = (0..KEY_COUNT as u8).find(|&key| state.is_pressed(key));
    match lowest_pressed {
        Some(key) => {
            state.v[x as usize] = key;
            state.mode = Mode::Running;
            state.next();
        }
        None => state.mode = Mode::AwaitingKey { register: x },
    }
}

/// DT = Vx
pub fn loads(state: &mut State, x: u8) {
    state.delay_timer = state.v[x as usize];
    state.next();
}

/// ST = Vx
pub fn ld(state: &mut State, x: u8) {
    state.sound_timer = state.v[x as usize];
    state.next();
}

/// I += Vx
pub fn addi(state: &mut State, x: u8) {
    state.i = state.i.wrapping_add(u16::from(state.v[x as usize]));
    state.next();
}

/// I = Vx * 5
/// Set I to the memory address of the glyph for Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(state: &mut State, x: u8) {
    state.i = u16::from(state.v[x as usize]) * SPRITE_BYTES;
    state.next();
}

/// mem[I..I+3] = bcd(Vx)
/// Store the hundreds, tens and ones of Vx in memory starting at address I
pub fn bcd(state: &mut State, x: u8) -> Result<()> {
    let value = state.v[x as usize];
    let digits = [value / 100, value / 10 % 10, value % 10];
    let range = state.memory_range(state.i, digits.len())?;
    state.memory[range].copy_from_slice(&digits);
    state.next();
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(state: &mut State, x: u8) -> Result<()> {
    let count = x as usize + 1;
    let range = state.memory_range(state.i, count)?;
    state.memory[range].copy_from_slice(&state.v[..count]);
    state.next();
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(state: &mut State, x: u8) -> Result<()> {
    let count = x as usize + 1;
    let range = state.memory_range(state.i, count)?;
    state.v[..count].copy_from_slice(&state.memory[range]);
    state.next();
    Ok(())
}
