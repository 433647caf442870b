//! A CHIP-8 interpreter core: memory, registers, timers, keypad and frame
//! buffer, advanced one instruction per cycle.

pub use config::{Config, KeyWait};
pub use error::{Fault, LoadError};
pub use frame::{is_well_formed, FrameSlot};
pub use input::{KeyEvent, KeySender};
pub use instruction::Instruction;
pub use interpreter::{Cycle, Interpreter};
pub use rom::Rom;
pub use state::{FrameBuffer, State};

mod config;
pub mod constants;
mod error;
mod frame;
mod input;
mod instruction;
mod interpreter;
mod opcode;
mod operations;
mod rom;
mod state;
