use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};

use c8_core::constants::TIMER_HZ;
use c8_core::{Config, KeyWait, Rom};

mod keymap;
mod run;

/// Which pressed key FX0A stores when several are held at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KeyWaitArg {
    Highest,
    Lowest,
}

impl From<KeyWaitArg> for KeyWait {
    fn from(arg: KeyWaitArg) -> Self {
        match arg {
            KeyWaitArg::Highest => KeyWait::HighestIndex,
            KeyWaitArg::Lowest => KeyWait::LowestIndex,
        }
    }
}

/// Runs a CHIP-8 ROM in a window.
///
/// Keys 1-4, Q-R, A-F and Z-V stand in for the hexadecimal keypad; Escape quits.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Path to the ROM file to run
    rom: Option<PathBuf>,

    /// Cycles per second; timers tick once per cycle
    #[arg(long, default_value_t = TIMER_HZ)]
    hz: u32,

    /// Window pixels per CHIP-8 pixel
    #[arg(long, default_value_t = 10)]
    scale: u32,

    /// Leave pc on FX29 after loading a glyph address, like older interpreters
    #[arg(long)]
    legacy_glyph_stall: bool,

    /// Key stored by FX0A when several keys are held
    #[arg(long, value_enum, default_value_t = KeyWaitArg::Highest)]
    key_wait: KeyWaitArg,

    /// Seed for CXNN's random numbers
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            glyph_load_advances_pc: !self.legacy_glyph_stall,
            key_wait: self.key_wait.into(),
            cycle_hz: self.hz,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let Some(path) = &args.rom else {
        Args::command().print_help()?;
        return Ok(());
    };

    let rom = Rom::open(path).with_context(|| format!("unable to load {}", path.display()))?;
    run::run(&args, &rom)
}
