use std::io::Read;
use std::mem;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::constants::{KEY_COUNT, PROGRAM_START};
use crate::error::{Fault, LoadError};
use crate::frame::FrameSlot;
use crate::input::{self, KeyReceiver, KeySender};
use crate::instruction::Instruction;
use crate::operations;
use crate::rom::{self, Rom};
use crate::state::{FrameBuffer, State};

/// What happened during one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    pub instruction: Instruction,
    /// The frame buffer changed and a copy was published to the frame slot.
    pub frame_ready: bool,
    /// The sound timer ran out this cycle.
    pub beep: bool,
    /// FX0A found no pressed key; the same instruction runs again next cycle.
    pub waiting_for_key: bool,
}

/// # Interpreter
/// Owns the machine state and advances it one instruction per cycle.
///
/// Supplies interfaces for:
/// - loading programs
/// - pressing and releasing keys, directly or through a `KeySender` from another thread
/// - executing a cycle
/// - collecting rendered frames from a `FrameSlot`
///
/// A fault halts the interpreter: every later cycle returns the same fault.
pub struct Interpreter {
    state: State,
    config: Config,
    rng: StdRng,
    frames: FrameSlot,
    key_sender: KeySender,
    keys: KeyReceiver,
    fault: Option<Fault>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::build(config, StdRng::from_entropy())
    }

    /// Like `with_config` but with a reproducible random number sequence for CXNN.
    pub fn seeded(config: Config, seed: u64) -> Self {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(config: Config, rng: StdRng) -> Self {
        log::debug!("starting interpreter with {:?}", config);
        let (key_sender, keys) = input::channel();
        Interpreter {
            state: State::new(),
            config,
            rng,
            frames: FrameSlot::new(),
            key_sender,
            keys,
            fault: None,
        }
    }

    /// Copies a program into memory at 0x200.
    ///
    /// Memory is untouched if the program doesn't fit.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), LoadError> {
        rom::check_capacity(program.len())?;
        let start = PROGRAM_START as usize;
        self.state.memory[start..start + program.len()].copy_from_slice(program);
        log::debug!("loaded {} byte program at {:#06X}", program.len(), start);
        Ok(())
    }

    /// Reads a ROM from `reader` and loads it.
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), LoadError> {
        let rom = Rom::read(reader)?;
        self.load_program(rom.bytes())
    }

    /// Set the pressed status of a key.
    ///
    /// # Arguments
    /// * `key` the keypad index, 0..=0xF
    /// * `pressed` whether it is held down
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        debug_assert!((key as usize) < KEY_COUNT, "no such key {:#X}", key);
        self.state.keypad[key as usize] = pressed;
    }

    /// A handle for delivering key events from other threads.
    pub fn key_sender(&self) -> KeySender {
        self.key_sender.clone()
    }

    /// A handle on the slot frames are published to.
    pub fn frames(&self) -> FrameSlot {
        self.frames.clone()
    }

    /// Takes the latest published frame, if there is a new one.
    pub fn take_frame(&self) -> Option<FrameBuffer> {
        self.frames.take()
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The fault that halted the interpreter, if any.
    pub fn fault(&self) -> Option<Fault> {
        self.fault
    }

    /// Advances the machine by a single cycle
    /// - applies pending key events
    /// - fetches, decodes and executes the instruction at pc
    /// - publishes the frame buffer if the instruction drew to it
    /// - ticks the timers, unless FX0A is still waiting for a key
    pub fn execute_cycle(&mut self) -> Result<Cycle, Fault> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }

        self.keys.drain_into(&mut self.state.keypad);
        let cycle = self.step();
        if let Err(fault) = cycle {
            log::error!("halting: {}", fault);
            self.fault = Some(fault);
        }
        cycle
    }

    fn step(&mut self) -> Result<Cycle, Fault> {
        let pc = self.state.pc;
        let op = self.state.fetch()?;
        self.state.opcode = op;
        let instruction =
            Instruction::decode(op).ok_or(Fault::UnknownOpcode { opcode: op, pc })?;
        log::trace!(
            "{:04X} {:<16} v{:02X?} i{:04X} pc{:04X}",
            op,
            instruction.to_string(),
            self.state.v,
            self.state.i,
            pc
        );

        operations::execute(instruction, &mut self.state, &self.config, &mut self.rng)?;

        let frame_ready = mem::take(&mut self.state.draw_flag);
        if frame_ready {
            self.frames.publish(&self.state.frame_buffer);
        }

        let waiting_for_key =
            matches!(instruction, Instruction::WaitForKey { .. }) && self.state.pc == pc;
        let beep = !waiting_for_key && self.tick_timers();

        Ok(Cycle {
            instruction,
            frame_ready,
            beep,
            waiting_for_key,
        })
    }

    /// Decrements both timers if nonzero; returns true when the sound timer runs out.
    fn tick_timers(&mut self) -> bool {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }

        let beep = self.state.sound_timer == 1;
        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
        }
        if beep {
            log::info!("beep");
        }
        beep
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
