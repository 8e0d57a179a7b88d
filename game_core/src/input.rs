//! Key state shared between the host's input thread and the simulation
//!
//! The host writes individual key flags as events arrive; the simulation
//! samples the keys it cares about once per tick into an [`InputFrame`].

use std::sync::atomic::{AtomicBool, Ordering};

use crate::components::Side;

/// Number of addressable key codes. Codes at or above this are ignored.
pub const KEY_CODE_SPACE: usize = 65535;

/// Virtual key codes used by the default bindings
pub mod keys {
    pub const SPACE: u32 = 32;
    pub const UP: u32 = 38;
    pub const DOWN: u32 = 40;
    pub const S: u32 = 83;
    pub const W: u32 = 87;
}

/// Pressed/released flag per key code
pub struct Keyboard {
    keys: Box<[AtomicBool]>,
}

impl Keyboard {
    pub fn new() -> Self {
        let keys = (0..KEY_CODE_SPACE).map(|_| AtomicBool::new(false)).collect();
        Self { keys }
    }

    /// Record a key-down (`true`) or key-up (`false`). Unknown codes are dropped.
    pub fn set_key(&self, code: u32, pressed: bool) {
        if let Some(flag) = self.keys.get(code as usize) {
            flag.store(pressed, Ordering::Relaxed);
        }
    }

    pub fn is_down(&self, code: u32) -> bool {
        self.keys
            .get(code as usize)
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    pub fn release_all(&self) {
        for flag in self.keys.iter() {
            flag.store(false, Ordering::Relaxed);
        }
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Key codes driving the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bindings {
    pub start: u32,
    pub left_up: u32,
    pub left_down: u32,
    pub right_up: u32,
    pub right_down: u32,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            start: keys::SPACE,
            left_up: keys::W,
            left_down: keys::S,
            right_up: keys::UP,
            right_down: keys::DOWN,
        }
    }
}

impl Bindings {
    /// Snapshot the bound keys for one tick
    pub fn sample(&self, keyboard: &Keyboard) -> InputFrame {
        InputFrame {
            start: keyboard.is_down(self.start),
            left_up: keyboard.is_down(self.left_up),
            left_down: keyboard.is_down(self.left_down),
            right_up: keyboard.is_down(self.right_up),
            right_down: keyboard.is_down(self.right_down),
        }
    }
}

/// Input held during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub start: bool,
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// (up, down) held for the paddle on `side`
    pub fn paddle(&self, side: Side) -> (bool, bool) {
        match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        }
    }
}
