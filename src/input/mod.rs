//! Input handling with gamepad support
//!
//! Action-based input over keyboard, pointer/touch and gamepad.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Keyboard and pointer only

mod actions;
mod gamepad;
mod state;

pub use actions::Action;
pub use gamepad::Gamepad;
pub use state::{FrameInput, InputState};
