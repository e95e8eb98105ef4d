//! Movement direction state machine
//!
//! The direction follows the last *clicked* movement key, not the last held
//! one, and falls back to `None` as soon as its own key is released.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::{InputKey, InputState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
    #[default]
    None,
}

impl Direction {
    /// Tie-break order when several movement keys are clicked on one tick
    pub const CLICK_PRECEDENCE: [Direction; 4] = [
        Direction::Top,
        Direction::Bottom,
        Direction::Right,
        Direction::Left,
    ];

    /// Movement key bound to this direction
    pub fn key(self) -> Option<InputKey> {
        match self {
            Direction::Top => Some(InputKey::W),
            Direction::Right => Some(InputKey::D),
            Direction::Bottom => Some(InputKey::S),
            Direction::Left => Some(InputKey::A),
            Direction::None => None,
        }
    }

    /// Unit step in surface coordinates (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Top => Vec2::NEG_Y,
            Direction::Right => Vec2::X,
            Direction::Bottom => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::None => Vec2::ZERO,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Top | Direction::Bottom)
    }

    /// Advance one tick
    ///
    /// A freshly clicked movement key replaces the current direction (first
    /// match in [`Self::CLICK_PRECEDENCE`] wins). The result only survives
    /// while its key is held.
    pub fn next(self, input: &InputState) -> Direction {
        let candidate = Self::CLICK_PRECEDENCE
            .into_iter()
            .find(|d| d.key().is_some_and(|k| input.is_key_clicked(k)))
            .unwrap_or(self);

        match candidate.key() {
            Some(key) if input.is_key_pressed(key) => candidate,
            _ => Direction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(input: &mut InputState, direction: Direction) -> Direction {
        input.update();
        direction.next(input)
    }

    #[test]
    fn test_click_sets_direction() {
        let mut input = InputState::new();
        input.press(InputKey::D);
        assert_eq!(tick(&mut input, Direction::None), Direction::Right);
    }

    #[test]
    fn test_first_clicked_key_persists_while_held() {
        let mut input = InputState::new();
        input.press(InputKey::W);
        let dir = tick(&mut input, Direction::None);
        assert_eq!(dir, Direction::Top);

        // Second key goes down on a later tick: it is a fresh click and wins
        input.press(InputKey::A);
        let dir = tick(&mut input, dir);
        assert_eq!(dir, Direction::Left);

        // Both held, no new clicks: direction sticks
        let dir = tick(&mut input, dir);
        assert_eq!(dir, Direction::Left);
    }

    #[test]
    fn test_simultaneous_clicks_use_precedence() {
        let mut input = InputState::new();
        input.press(InputKey::A);
        input.press(InputKey::S);
        input.press(InputKey::D);
        assert_eq!(tick(&mut input, Direction::None), Direction::Bottom);
    }

    #[test]
    fn test_release_resets_to_none() {
        let mut input = InputState::new();
        input.press(InputKey::S);
        let dir = tick(&mut input, Direction::None);
        assert_eq!(dir, Direction::Bottom);

        input.release(InputKey::S);
        assert_eq!(tick(&mut input, dir), Direction::None);
    }

    #[test]
    fn test_releasing_active_key_does_not_fall_back_to_other_held_key() {
        let mut input = InputState::new();
        input.press(InputKey::W);
        let dir = tick(&mut input, Direction::None);
        input.press(InputKey::D);
        let dir = tick(&mut input, dir);
        assert_eq!(dir, Direction::Right);

        input.release(InputKey::D);
        let dir = tick(&mut input, dir);
        assert_eq!(dir, Direction::None);
        // W is still held but was not clicked again
        assert_eq!(tick(&mut input, dir), Direction::None);
    }

    #[test]
    fn test_toggle_keys_do_not_move() {
        let mut input = InputState::new();
        input.press(InputKey::X);
        input.press(InputKey::G);
        assert_eq!(tick(&mut input, Direction::None), Direction::None);
    }
}
