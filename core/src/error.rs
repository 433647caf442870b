use std::io;

use thiserror::Error;

/// Errors raised before the interpreter starts running a program.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("ROM is {size} bytes but only {max} bytes of program memory are available")]
    CapacityExceeded { size: usize, max: usize },

    #[error("unable to read ROM")]
    Io(#[from] io::Error),
}

/// Fatal conditions hit while executing a cycle.
///
/// None of these are recoverable: they mean the ROM is corrupt or relies on
/// behavior outside the instruction set. Once raised the interpreter halts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    #[error("unknown opcode {opcode:#06X} at pc {pc:#06X}")]
    UnknownOpcode { opcode: u16, pc: u16 },

    #[error("call stack overflow at pc {pc:#06X}")]
    StackOverflow { pc: u16 },

    #[error("return with an empty call stack at pc {pc:#06X}")]
    StackUnderflow { pc: u16 },

    #[error("{len} byte memory access at {address:#06X} is out of bounds (pc {pc:#06X})")]
    MemoryOutOfBounds { address: usize, len: usize, pc: u16 },
}
