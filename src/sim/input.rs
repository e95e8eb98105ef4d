//! Edge-triggered keyboard state
//!
//! Raw key-down/key-up events only flip `pressed`. The derived `clicked` flag
//! is recomputed once per tick by [`InputState::update`], so holding a key
//! (and receiving auto-repeat key-downs) yields exactly one click.

use serde::{Deserialize, Serialize};

/// Keys the simulation reacts to, named after `KeyboardEvent.code`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputKey {
    W,
    A,
    S,
    D,
    /// Toggles the player's helper overlay
    X,
    /// Toggles the background grid
    G,
}

impl InputKey {
    pub const COUNT: usize = 6;

    pub const ALL: [InputKey; Self::COUNT] = [
        InputKey::W,
        InputKey::A,
        InputKey::S,
        InputKey::D,
        InputKey::X,
        InputKey::G,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            InputKey::W => "KeyW",
            InputKey::A => "KeyA",
            InputKey::S => "KeyS",
            InputKey::D => "KeyD",
            InputKey::X => "KeyX",
            InputKey::G => "KeyG",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-key state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub is_pressed: bool,
    pub is_prev_pressed: bool,
    pub is_clicked: bool,
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: [KeyState; InputKey::COUNT],
    /// Keys that need their derived state refreshed on the next tick
    active: Vec<InputKey>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a raw key-down; returns false for unrecognised codes
    pub fn key_down(&mut self, code: &str) -> bool {
        match InputKey::from_code(code) {
            Some(key) => {
                self.press(key);
                true
            }
            None => false,
        }
    }

    /// Handle a raw key-up; returns false for unrecognised codes
    pub fn key_up(&mut self, code: &str) -> bool {
        match InputKey::from_code(code) {
            Some(key) => {
                self.release(key);
                true
            }
            None => false,
        }
    }

    pub fn press(&mut self, key: InputKey) {
        self.keys[key.index()].is_pressed = true;
        if !self.active.contains(&key) {
            self.active.push(key);
        }
    }

    pub fn release(&mut self, key: InputKey) {
        self.keys[key.index()].is_pressed = false;
    }

    /// Recompute `clicked` for every active key. Call exactly once per tick.
    pub fn update(&mut self) {
        let keys = &mut self.keys;
        self.active.retain(|key| {
            let state = &mut keys[key.index()];
            state.is_clicked = state.is_pressed && !state.is_prev_pressed;
            state.is_prev_pressed = state.is_pressed;
            state.is_pressed
        });
    }

    pub fn is_key_pressed(&self, key: InputKey) -> bool {
        self.keys[key.index()].is_pressed
    }

    /// True only on the first tick after the key went down
    pub fn is_key_clicked(&self, key: InputKey) -> bool {
        self.keys[key.index()].is_clicked
    }

    pub fn key_state(&self, key: InputKey) -> KeyState {
        self.keys[key.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_click_fires_once_per_press() {
        let mut input = InputState::new();
        assert!(input.key_down("KeyA"));

        input.update();
        assert!(input.is_key_clicked(InputKey::A));
        assert!(input.is_key_pressed(InputKey::A));

        input.update();
        assert!(!input.is_key_clicked(InputKey::A));
        assert!(input.is_key_pressed(InputKey::A));
    }

    #[test]
    fn test_repeat_events_do_not_click_again() {
        let mut input = InputState::new();
        input.key_down("KeyD");
        input.update();
        assert!(input.is_key_clicked(InputKey::D));

        // Auto-repeat while held
        for _ in 0..5 {
            input.key_down("KeyD");
            input.update();
            assert!(!input.is_key_clicked(InputKey::D));
        }
    }

    #[test]
    fn test_release_then_press_clicks_again() {
        let mut input = InputState::new();
        input.press(InputKey::W);
        input.update();
        input.release(InputKey::W);
        input.update();
        assert!(!input.is_key_pressed(InputKey::W));
        assert!(!input.is_key_clicked(InputKey::W));

        input.press(InputKey::W);
        input.update();
        assert!(input.is_key_clicked(InputKey::W));
    }

    #[test]
    fn test_raw_events_never_set_clicked() {
        let mut input = InputState::new();
        input.key_down("KeyX");
        assert!(!input.is_key_clicked(InputKey::X));
        assert_eq!(
            input.key_state(InputKey::X),
            KeyState {
                is_pressed: true,
                is_prev_pressed: false,
                is_clicked: false,
            }
        );
    }

    #[test]
    fn test_unknown_codes_are_ignored() {
        let mut input = InputState::new();
        assert!(!input.key_down("Escape"));
        assert!(!input.key_up("KeyQ"));
        input.update();
        for key in InputKey::ALL {
            assert!(!input.is_key_pressed(key));
            assert!(!input.is_key_clicked(key));
        }
    }

    #[test]
    fn test_code_round_trip() {
        for key in InputKey::ALL {
            assert_eq!(InputKey::from_code(key.code()), Some(key));
        }
        assert_eq!(InputKey::from_code("keyw"), None);
    }

    proptest! {
        /// However the raw events interleave, a click never happens on two
        /// consecutive ticks and always coincides with a held key.
        #[test]
        fn prop_click_is_edge_triggered(
            ticks in proptest::collection::vec(
                proptest::collection::vec(proptest::bool::ANY, 0..4),
                1..64,
            ),
        ) {
            let mut input = InputState::new();
            let mut was_clicked = false;
            let mut was_pressed = false;

            for events in ticks {
                for down in events {
                    if down {
                        input.press(InputKey::S);
                    } else {
                        input.release(InputKey::S);
                    }
                }
                input.update();

                let clicked = input.is_key_clicked(InputKey::S);
                let pressed = input.is_key_pressed(InputKey::S);
                prop_assert!(!(clicked && was_clicked));
                prop_assert!(!clicked || pressed);
                prop_assert_eq!(clicked, pressed && !was_pressed);

                was_clicked = clicked;
                was_pressed = pressed;
            }
        }
    }
}
