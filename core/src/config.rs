use std::time::Duration;

use crate::constants::TIMER_HZ;

/// Which key FX0A captures when several are held during the same cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyWait {
    /// The highest pressed index wins, as a full ascending scan that keeps
    /// overwriting Vx would leave it.
    #[default]
    HighestIndex,
    /// The first pressed key found scanning 0..F wins.
    LowestIndex,
}

/// Behavioral switches for the interpreter and the cadence its driver should keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Whether FX29 moves on to the next instruction.
    ///
    /// Turning this off reproduces interpreters that leave pc on the FX29,
    /// which re-executes it forever.
    pub glyph_load_advances_pc: bool,
    pub key_wait: KeyWait,
    /// Cycles per second. Every cycle also ticks the timers once.
    pub cycle_hz: u32,
}

impl Config {
    /// Wall-clock time a driver should leave between two cycles.
    pub fn cycle_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.cycle_hz.max(1)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            glyph_load_advances_pc: true,
            key_wait: KeyWait::default(),
            cycle_hz: TIMER_HZ,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_at_timer_rate() {
        let config = Config::default();
        assert_eq!(config.cycle_hz, 60);
        assert_eq!(config.cycle_interval(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_default_keeps_highest_key_tie_break() {
        assert_eq!(Config::default().key_wait, KeyWait::HighestIndex);
    }

    #[test]
    fn test_zero_hz_does_not_divide_by_zero() {
        let config = Config {
            cycle_hz: 0,
            ..Config::default()
        };
        assert_eq!(config.cycle_interval(), Duration::from_secs(1));
    }
}
