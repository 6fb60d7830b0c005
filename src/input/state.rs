//! Input state management
//!
//! Polls keyboard, mouse, touch (macroquad) and gamepad (gilrs) input and
//! folds it into a plain [`FrameInput`] snapshot the game logic consumes.

use macroquad::prelude::*;
use super::{Action, Gamepad};

/// Stick deflection past which the left stick counts as a held direction
const STICK_THRESHOLD: f32 = 0.5;

/// Everything the game loop needs to know about input for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Move-left held
    pub left: bool,
    /// Move-right held
    pub right: bool,
    /// Active pointer/touch position in window pixels (y down)
    pub pointer: Option<Vec2>,
}

/// Unified input state that handles keyboard/mouse/touch and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
        }
    }

    /// Call once per frame before checking actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
    }

    /// Snapshot of the movement inputs for this frame
    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            left: self.action_down(Action::MoveLeft),
            right: self.action_down(Action::MoveRight),
            pointer: pointer_position(),
        }
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        self.keyboard_down(action) || self.gamepad_down(action)
    }

    /// Check if action was just pressed this frame.
    /// Only the one-shot actions (pause, quit) have a press edge.
    pub fn action_pressed(&self, action: Action) -> bool {
        match action {
            Action::Pause => is_key_pressed(KeyCode::P) || self.gamepad.start_pressed(),
            Action::Quit => is_key_pressed(KeyCode::Escape),
            _ => false,
        }
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            Action::MoveRight => is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            _ => false,
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => {
                self.gamepad.dpad_left() || self.gamepad.left_stick().x < -STICK_THRESHOLD
            }
            Action::MoveRight => {
                self.gamepad.dpad_right() || self.gamepad.left_stick().x > STICK_THRESHOLD
            }
            _ => false,
        }
    }

    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// First active touch, else the mouse while the left button is held
fn pointer_position() -> Option<Vec2> {
    if let Some(touch) = touches().first() {
        return Some(touch.position);
    }
    if is_mouse_button_down(MouseButton::Left) {
        let (x, y) = mouse_position();
        return Some(vec2(x, y));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // Neither path below reaches the keyboard, so no window is needed
    #[test]
    fn test_movement_has_no_press_edge() {
        let input = InputState::new();
        assert!(!input.action_pressed(Action::MoveLeft));
        assert!(!input.action_pressed(Action::MoveRight));
    }

    #[test]
    fn test_pause_and_quit_are_not_held_keys() {
        let input = InputState::new();
        assert!(!input.keyboard_down(Action::Pause));
        assert!(!input.keyboard_down(Action::Quit));
    }
}
