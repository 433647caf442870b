use std::sync::mpsc::{self, Receiver, Sender};

use crate::constants::KEY_COUNT;

/// A change to one key of the hexadecimal keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: u8,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn press(key: u8) -> Self {
        KeyEvent { key, pressed: true }
    }

    pub fn release(key: u8) -> Self {
        KeyEvent {
            key,
            pressed: false,
        }
    }
}

/// Sending half of the keypad channel; can be cloned into any thread.
///
/// Events become visible to the interpreter at the start of its next cycle.
#[derive(Clone)]
pub struct KeySender {
    sender: Sender<KeyEvent>,
}

impl KeySender {
    pub fn send(&self, event: KeyEvent) {
        // A dropped interpreter has nothing left to press keys on
        if self.sender.send(event).is_err() {
            log::debug!("interpreter gone, dropping {:?}", event);
        }
    }

    pub fn press(&self, key: u8) {
        self.send(KeyEvent::press(key));
    }

    pub fn release(&self, key: u8) {
        self.send(KeyEvent::release(key));
    }
}

/// Receiving half, owned by the interpreter.
pub(crate) struct KeyReceiver {
    receiver: Receiver<KeyEvent>,
}

impl KeyReceiver {
    /// Applies every queued event to `keypad`, oldest first.
    pub(crate) fn drain_into(&self, keypad: &mut [bool; KEY_COUNT]) {
        for event in self.receiver.try_iter() {
            match keypad.get_mut(event.key as usize) {
                Some(state) => *state = event.pressed,
                None => log::warn!("ignoring event for unknown key {:#X}", event.key),
            }
        }
    }
}

pub(crate) fn channel() -> (KeySender, KeyReceiver) {
    let (sender, receiver) = mpsc::channel();
    (KeySender { sender }, KeyReceiver { receiver })
}
