use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::constants::MAX_PROGRAM_SIZE;
use crate::error::LoadError;

/// A program image known to fit in program memory.
///
/// ROMs are raw bytes with no header; the only check is their size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rom {
    bytes: Vec<u8>,
}

impl Rom {
    /// Reads a ROM from a file on disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path.as_ref())?;
        let rom = Self::read(&mut BufReader::new(file))?;
        log::debug!(
            "read {} byte ROM from {}",
            rom.len(),
            path.as_ref().display()
        );
        Ok(rom)
    }

    /// Reads a ROM from any byte source.
    ///
    /// Stops one byte past the limit so oversized sources are rejected without
    /// being read in full.
    pub fn read(reader: &mut dyn Read) -> Result<Self, LoadError> {
        let mut bytes = Vec::new();
        reader
            .take(MAX_PROGRAM_SIZE as u64 + 1)
            .read_to_end(&mut bytes)?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, LoadError> {
        check_capacity(bytes.len())?;
        Ok(Rom { bytes })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

pub(crate) fn check_capacity(size: usize) -> Result<(), LoadError> {
    if size > MAX_PROGRAM_SIZE {
        return Err(LoadError::CapacityExceeded {
            size,
            max: MAX_PROGRAM_SIZE,
        });
    }
    Ok(())
}
