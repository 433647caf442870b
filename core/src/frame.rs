use std::sync::{Arc, Mutex, MutexGuard};

use crate::constants::FRAME_BUFFER_SIZE;
use crate::state::FrameBuffer;

/// # Frame Slot
/// Hands finished frames from the interpreter to whatever renders them.
///
/// Holds at most one frame. Publishing never waits on the consumer: a frame
/// nobody took yet is replaced by the newer one, so a slow or absent renderer
/// only ever misses intermediate frames.
#[derive(Clone, Default)]
pub struct FrameSlot {
    latest: Arc<Mutex<Option<FrameBuffer>>>,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `frame` as the latest frame, dropping any unconsumed one.
    pub fn publish(&self, frame: &FrameBuffer) {
        *self.lock() = Some(*frame);
    }

    /// Removes and returns the latest frame, if one arrived since the last take.
    pub fn take(&self) -> Option<FrameBuffer> {
        self.lock().take()
    }

    // The slot only holds plain bytes, so a panic elsewhere can't leave it inconsistent.
    fn lock(&self) -> MutexGuard<'_, Option<FrameBuffer>> {
        self.latest
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Whether `frame` has the shape of a frame buffer: 64x32 pixels valued 0 or 1.
pub fn is_well_formed(frame: &[u8]) -> bool {
    frame.len() == FRAME_BUFFER_SIZE && frame.iter().all(|&pixel| pixel <= 1)
}
