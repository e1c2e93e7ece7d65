//! Per-frame input state, owned by the engine run-loop.

use glam::Vec2;
use std::collections::HashSet;

/// Shows the information about the input at that current time.
///
/// The run-loop rebuilds the transient parts of this every frame and lends it
/// to [`crate::Game::on_frame`] by `&mut`. Key codes are platform scancodes;
/// the engine does not translate them at this layer. Across the C boundary
/// this is only ever an opaque pointer.
#[derive(Clone, Debug, Default)]
pub struct InputState {
    pub mouse_pos: Vec2,
    pub mouse_delta: Option<Vec2>,
    pub pressed_keys: HashSet<u32>,
    pub is_cursor_locked: bool,

    /// Seconds elapsed since the previous frame.
    pub delta_time: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self, scancode: u32) -> bool {
        self.pressed_keys.contains(&scancode)
    }

    /// Clears the per-frame transient fields, keeping held keys.
    pub fn end_frame(&mut self) {
        self.mouse_delta = None;
        self.delta_time = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_frame_keeps_held_keys() {
        let mut input = InputState::new();
        input.pressed_keys.insert(72);
        input.mouse_delta = Some(Vec2::new(3.0, -1.0));
        input.delta_time = 0.016;

        input.end_frame();

        assert!(input.is_pressed(72));
        assert_eq!(input.mouse_delta, None);
        assert_eq!(input.delta_time, 0.0);
    }
}
