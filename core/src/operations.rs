use rand::{Rng, RngCore};

use crate::config::{Config, KeyWait};
use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, GLYPH_SIZE, STACK_SIZE};
use crate::error::Fault;
use crate::instruction::Instruction;
use crate::state::State;

const INSTRUCTION_WIDTH: u16 = 0x2;

/// Applies a decoded instruction to the state, including its program counter update.
///
/// Faults leave the state exactly as it was.
pub fn execute(
    instruction: Instruction,
    state: &mut State,
    config: &Config,
    rng: &mut dyn RngCore,
) -> Result<(), Fault> {
    use Instruction::*;

    let v = state.v;
    match instruction {
        Clear => clr(state),
        Return => return rts(state),
        Jump { nnn } => jump(state, nnn),
        Call { nnn } => return call(state, nnn),
        SkipIfEqual { x, nn } => skip_if(state, v[x as usize] == nn),
        SkipIfNotEqual { x, nn } => skip_if(state, v[x as usize] != nn),
        SkipIfRegistersEqual { x, y } => skip_if(state, v[x as usize] == v[y as usize]),
        Load { x, nn } => load(state, x, nn),
        Add { x, nn } => add(state, x, nn),
        Move { x, y } => alu(state, x, y, |_, vy| vy),
        Or { x, y } => alu(state, x, y, |vx, vy| vx | vy),
        And { x, y } => alu(state, x, y, |vx, vy| vx & vy),
        Xor { x, y } => alu(state, x, y, |vx, vy| vx ^ vy),
        AddRegisters { x, y } => addr(state, x, y),
        Sub { x, y } => sub(state, x, y),
        ShiftRight { x } => shr(state, x),
        SubN { x, y } => subn(state, x, y),
        ShiftLeft { x } => shl(state, x),
        SkipIfRegistersNotEqual { x, y } => skip_if(state, v[x as usize] != v[y as usize]),
        LoadIndex { nnn } => loadi(state, nnn),
        JumpOffset { nnn } => jump(state, nnn + u16::from(v[0x0])),
        Random { x, nn } => rnd(state, x, nn, rng),
        Draw { x, y, n } => return draw(state, x, y, n),
        SkipIfPressed { x } => {
            let down = pressed(state, x);
            skip_if(state, down)
        }
        SkipIfNotPressed { x } => {
            let down = pressed(state, x);
            skip_if(state, !down)
        }
        LoadDelay { x } => {
            let delay = state.delay_timer;
            load(state, x, delay)
        }
        WaitForKey { x } => keyd(state, x, config.key_wait),
        SetDelay { x } => {
            state.delay_timer = v[x as usize];
            next(state);
        }
        SetSound { x } => {
            state.sound_timer = v[x as usize];
            next(state);
        }
        AddIndex { x } => addi(state, x),
        LoadGlyph { x } => ldspr(state, x, config.glyph_load_advances_pc),
        StoreBcd { x } => return bcd(state, x),
        StoreRegisters { x } => return stor(state, x),
        LoadRegisters { x } => return read(state, x),
    }
    Ok(())
}

fn next(state: &mut State) {
    state.pc += INSTRUCTION_WIDTH;
}

/// if cond then pc += 2
fn skip_if(state: &mut State, cond: bool) {
    state.pc += if cond {
        INSTRUCTION_WIDTH * 2
    } else {
        INSTRUCTION_WIDTH
    };
}

/// clear
fn clr(state: &mut State) {
    state.frame_buffer.fill(0);
    state.draw_flag = true;
    next(state);
}

/// PC = STACK.pop() + 2
fn rts(state: &mut State) -> Result<(), Fault> {
    if state.sp == 0 {
        return Err(Fault::StackUnderflow { pc: state.pc });
    }
    state.sp -= 1;
    state.pc = state.stack[state.sp as usize] + INSTRUCTION_WIDTH;
    Ok(())
}

/// PC = addr
fn jump(state: &mut State, addr: u16) {
    state.pc = addr;
}

/// STACK.push(PC); PC = addr
fn call(state: &mut State, addr: u16) -> Result<(), Fault> {
    if state.sp as usize >= STACK_SIZE {
        return Err(Fault::StackOverflow { pc: state.pc });
    }
    state.stack[state.sp as usize] = state.pc;
    state.sp += 1;
    state.pc = addr;
    Ok(())
}

/// Vx = nn
fn load(state: &mut State, x: u8, nn: u8) {
    state.v[x as usize] = nn;
    next(state);
}

/// Vx += nn; overflow is dropped and VF is untouched
fn add(state: &mut State, x: u8, nn: u8) {
    state.v[x as usize] = state.v[x as usize].wrapping_add(nn);
    next(state);
}

/// Vx = f(Vx, Vy)
fn alu(state: &mut State, x: u8, y: u8, f: impl Fn(u8, u8) -> u8) {
    state.v[x as usize] = f(state.v[x as usize], state.v[y as usize]);
    next(state);
}

// The flag-producing ALU operations write VF before the result, so when Vx is
// VF itself the result wins.

/// VF = carry; Vx += Vy
fn addr(state: &mut State, x: u8, y: u8) {
    state.v[0xF] = u8::from(state.v[y as usize] > 0xFF - state.v[x as usize]);
    alu(state, x, y, u8::wrapping_add);
}

/// VF = !borrow; Vx -= Vy
fn sub(state: &mut State, x: u8, y: u8) {
    state.v[0xF] = u8::from(state.v[y as usize] <= state.v[x as usize]);
    alu(state, x, y, u8::wrapping_sub);
}

/// VF = lsb(Vx); Vx >>= 1
fn shr(state: &mut State, x: u8) {
    state.v[0xF] = state.v[x as usize] & 0x1;
    state.v[x as usize] >>= 1;
    next(state);
}

/// VF = !borrow; Vx = Vy - Vx
fn subn(state: &mut State, x: u8, y: u8) {
    state.v[0xF] = u8::from(state.v[x as usize] <= state.v[y as usize]);
    alu(state, x, y, |vx, vy| vy.wrapping_sub(vx));
}

/// VF = msb(Vx); Vx <<= 1
fn shl(state: &mut State, x: u8) {
    state.v[0xF] = state.v[x as usize] >> 7;
    state.v[x as usize] <<= 1;
    next(state);
}

/// I = addr
fn loadi(state: &mut State, addr: u16) {
    state.i = addr;
    next(state);
}

/// Vx = rand_byte & nn
fn rnd(state: &mut State, x: u8, nn: u8, rng: &mut dyn RngCore) {
    let rand_byte: u8 = rng.gen();
    state.v[x as usize] = rand_byte & nn;
    next(state);
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs an 8 pixel wide sprite from memory i..i+n onto the frame buffer at (Vx, Vy).
/// The origin wraps onto the screen and so do pixels running off the right or bottom edge.
/// Sets VF if any pixel is erased.
fn draw(state: &mut State, x: u8, y: u8, n: u8) -> Result<(), Fault> {
    let height = n as usize;
    let mut sprite = [0u8; 0xF];
    sprite[..height].copy_from_slice(state.read_slice(state.i as usize, height)?);

    let origin_x = state.v[x as usize] as usize % DISPLAY_WIDTH;
    let origin_y = state.v[y as usize] as usize % DISPLAY_HEIGHT;
    let mut collision = 0x0;

    for (row, byte) in sprite[..height].iter().enumerate() {
        let py = (origin_y + row) % DISPLAY_HEIGHT;
        for bit in 0..8 {
            let px = (origin_x + bit) % DISPLAY_WIDTH;
            let pixel_value = (byte >> (7 - bit)) & 0x1;
            let pixel = &mut state.frame_buffer[px + py * DISPLAY_WIDTH];
            collision |= pixel_value & *pixel;
            *pixel ^= pixel_value;
        }
    }

    state.v[0xF] = collision;
    state.draw_flag = true;
    next(state);
    Ok(())
}

fn pressed(state: &State, x: u8) -> bool {
    // Only the low nibble of Vx names a key
    state.keypad[(state.v[x as usize] & 0xF) as usize]
}

/// Vx = next pressed key, or retry this instruction next cycle
fn keyd(state: &mut State, x: u8, key_wait: KeyWait) {
    let mut keys = (0..state.keypad.len()).filter(|&key| state.keypad[key]);
    let key = match key_wait {
        KeyWait::HighestIndex => keys.last(),
        KeyWait::LowestIndex => keys.next(),
    };
    if let Some(key) = key {
        state.v[x as usize] = key as u8;
        next(state);
    }
}

/// VF = I + Vx > 0xFFF; I += Vx
fn addi(state: &mut State, x: u8) {
    state.v[0xF] = u8::from(u32::from(state.i) + u32::from(state.v[x as usize]) > 0xFFF);
    state.i = state.i.wrapping_add(u16::from(state.v[x as usize]));
    next(state);
}

/// I = Vx * 5
/// Set I to the memory address of the font glyph for the digit in Vx
fn ldspr(state: &mut State, x: u8, advance: bool) {
    state.i = u16::from(state.v[x as usize]) * GLYPH_SIZE;
    if advance {
        next(state);
    }
}

/// mem[I..I+3] = bcd(Vx)
fn bcd(state: &mut State, x: u8) -> Result<(), Fault> {
    let vx = state.v[x as usize];
    let digits = [vx / 100, vx / 10 % 10, vx % 10];
    state.write_slice(state.i as usize, &digits)?;
    next(state);
    Ok(())
}

/// mem[I..=I+x] = V0..=Vx; I += x + 1
fn stor(state: &mut State, x: u8) -> Result<(), Fault> {
    let count = x as usize + 1;
    let registers = state.v;
    state.write_slice(state.i as usize, &registers[..count])?;
    state.i = state.i.wrapping_add(count as u16);
    next(state);
    Ok(())
}

/// V0..=Vx = mem[I..=I+x]; I += x + 1
fn read(state: &mut State, x: u8) -> Result<(), Fault> {
    let count = x as usize + 1;
    let mut loaded = [0u8; 16];
    loaded[..count].copy_from_slice(state.read_slice(state.i as usize, count)?);
    state.v[..count].copy_from_slice(&loaded[..count]);
    state.i = state.i.wrapping_add(count as u16);
    next(state);
    Ok(())
}
