//! Held-key snapshot
//!
//! Input capture is a host concern: event handlers translate key events
//! into a [`KeyState`] table, and the simulation reads that table once per
//! tick. Handlers never touch world state directly.

use serde::{Deserialize, Serialize};

/// Keys the simulation reacts to, named after DOM `KeyboardEvent.code`
/// values so browser hosts can forward events verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    KeyR,
}

impl KeyCode {
    pub const ALL: [KeyCode; 10] = [
        KeyCode::ArrowLeft,
        KeyCode::ArrowRight,
        KeyCode::ArrowUp,
        KeyCode::ArrowDown,
        KeyCode::KeyW,
        KeyCode::KeyA,
        KeyCode::KeyS,
        KeyCode::KeyD,
        KeyCode::Space,
        KeyCode::KeyR,
    ];

    /// Parse a DOM-style code string. Codes the game does not use map to
    /// `None` and are dropped by the input layer.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(KeyCode::ArrowLeft),
            "ArrowRight" => Some(KeyCode::ArrowRight),
            "ArrowUp" => Some(KeyCode::ArrowUp),
            "ArrowDown" => Some(KeyCode::ArrowDown),
            "KeyW" => Some(KeyCode::KeyW),
            "KeyA" => Some(KeyCode::KeyA),
            "KeyS" => Some(KeyCode::KeyS),
            "KeyD" => Some(KeyCode::KeyD),
            "Space" => Some(KeyCode::Space),
            "KeyR" => Some(KeyCode::KeyR),
            _ => None,
        }
    }

    /// The DOM code string this key was parsed from.
    pub fn as_code(self) -> &'static str {
        match self {
            KeyCode::ArrowLeft => "ArrowLeft",
            KeyCode::ArrowRight => "ArrowRight",
            KeyCode::ArrowUp => "ArrowUp",
            KeyCode::ArrowDown => "ArrowDown",
            KeyCode::KeyW => "KeyW",
            KeyCode::KeyA => "KeyA",
            KeyCode::KeyS => "KeyS",
            KeyCode::KeyD => "KeyD",
            KeyCode::Space => "Space",
            KeyCode::KeyR => "KeyR",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Which keys are currently held down.
///
/// Hosts flip entries from key-down/key-up events between frames; the
/// simulation only ever reads it. There is no edge detection here, a key
/// held across frames reads as held every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    held: [bool; 10],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn press(&mut self, key: KeyCode) {
        self.held[key.index()] = true;
    }

    #[inline]
    pub fn release(&mut self, key: KeyCode) {
        self.held[key.index()] = false;
    }

    #[inline]
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held[key.index()]
    }

    /// Apply a raw key event by DOM code. Unrecognized codes are ignored.
    pub fn apply_code(&mut self, code: &str, down: bool) {
        if let Some(key) = KeyCode::from_code(code) {
            if down {
                self.press(key);
            } else {
                self.release(key);
            }
        }
    }

    /// Release everything (used when the host loses focus).
    pub fn clear(&mut self) {
        self.held = [false; 10];
    }
}
