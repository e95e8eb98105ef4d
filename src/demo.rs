//! Seeded autopilot for headless runs
//!
//! Holds a random movement key (or nothing) for a random number of frames,
//! then picks again. Occasionally taps X to flip the helper overlay. The same
//! seed always produces the same key sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::InputState;
use crate::sim::input::InputKey;

const MOVEMENT_KEYS: [InputKey; 4] = [InputKey::W, InputKey::A, InputKey::S, InputKey::D];

/// Frames a choice is held for, inclusive range
const HOLD_MIN: u32 = 10;
const HOLD_MAX: u32 = 90;

/// One in this many choices also taps the overlay toggle
const OVERLAY_TAP_ODDS: u32 = 8;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    held: Option<InputKey>,
    hold_remaining: u32,
    tapped: Option<InputKey>,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            held: None,
            hold_remaining: 0,
            tapped: None,
        }
    }

    /// Key currently held down by the autopilot
    pub fn held(&self) -> Option<InputKey> {
        self.held
    }

    /// Emit this frame's raw key events
    pub fn drive(&mut self, input: &mut InputState) {
        if let Some(key) = self.tapped.take() {
            input.release(key);
        }

        if self.hold_remaining > 0 {
            self.hold_remaining -= 1;
            return;
        }

        if let Some(key) = self.held.take() {
            input.release(key);
        }

        // Index 4 means "stand still"
        let choice = self.rng.random_range(0..=MOVEMENT_KEYS.len());
        self.held = MOVEMENT_KEYS.get(choice).copied();
        self.hold_remaining = self.rng.random_range(HOLD_MIN..=HOLD_MAX);

        if let Some(key) = self.held {
            log::debug!("Autopilot holding {:?} for {} frames", key, self.hold_remaining);
            input.press(key);
        }

        if self.rng.random_range(0..OVERLAY_TAP_ODDS) == 0 {
            input.press(InputKey::X);
            self.tapped = Some(InputKey::X);
        }
    }
}
