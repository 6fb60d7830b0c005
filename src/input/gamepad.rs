//! Gamepad support
//!
//! Native: gilrs, first connected pad wins.
//! WASM: no gamepad backend; every query reports an idle pad.

use macroquad::prelude::Vec2;

/// Default radial deadzone for the left stick
pub const STICK_DEADZONE: f32 = 0.25;

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::*;
    use std::cell::Cell;
    use gilrs::{Axis, Button, Gilrs};

    pub struct Gamepad {
        /// None when the platform backend failed to initialise
        gilrs: Option<Gilrs>,
        deadzone: f32,
        start_was_down: Cell<bool>,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(g) => Some(g),
                Err(e) => {
                    log::warn!("gamepad support unavailable: {}", e);
                    None
                }
            };
            Self {
                gilrs,
                deadzone: STICK_DEADZONE,
                start_was_down: Cell::new(false),
            }
        }

        /// Pump the gilrs event queue so button/axis state is current
        pub fn poll(&mut self) {
            if let Some(gilrs) = self.gilrs.as_mut() {
                while gilrs.next_event().is_some() {}
            }
        }

        fn active(&self) -> Option<gilrs::Gamepad<'_>> {
            self.gilrs.as_ref()?.gamepads().next().map(|(_, gp)| gp)
        }

        pub fn has_gamepad(&self) -> bool {
            self.active().is_some()
        }

        pub fn dpad_left(&self) -> bool {
            self.active().is_some_and(|gp| gp.is_pressed(Button::DPadLeft))
        }

        pub fn dpad_right(&self) -> bool {
            self.active().is_some_and(|gp| gp.is_pressed(Button::DPadRight))
        }

        pub fn left_stick(&self) -> Vec2 {
            let Some(gp) = self.active() else { return Vec2::ZERO };
            let x = gp.value(Axis::LeftStickX);
            let y = gp.value(Axis::LeftStickY);
            apply_deadzone(x, y, self.deadzone)
        }

        /// Start button edge (down this poll, up the previous one)
        pub fn start_pressed(&self) -> bool {
            let down = self.active().is_some_and(|gp| gp.is_pressed(Button::Start));
            let was = self.start_was_down.replace(down);
            down && !was
        }
    }
}

// ============================================================================
// WASM Implementation (idle pad)
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::*;

    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn dpad_left(&self) -> bool {
            false
        }

        pub fn dpad_right(&self) -> bool {
            false
        }

        pub fn left_stick(&self) -> Vec2 {
            Vec2::ZERO
        }

        pub fn start_pressed(&self) -> bool {
            false
        }
    }
}

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply radial deadzone with linear rescaling
pub fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> Vec2 {
    let len = (x * x + y * y).sqrt();
    if len < deadzone {
        return Vec2::ZERO;
    }
    // Rescale from deadzone..1.0 to 0.0..1.0
    let scale = (len - deadzone) / (1.0 - deadzone) / len;
    Vec2::new(x * scale, y * scale)
}

pub use platform::Gamepad;
