//! Screen lifecycle
//!
//! The driver in `main.rs` owns exactly one active screen and calls these
//! hooks as the window and player dictate:
//! - `show` once before the first frame
//! - `resize` whenever the window size changes (and once at startup)
//! - `render` every frame
//! - `pause` / `resume` when the player toggles pause
//! - `hide` then `dispose` on the way out

mod droplets;
mod runner;

pub use droplets::DropletsScreen;
pub use runner::RunnerScreen;

use crate::input::FrameInput;

pub trait Screen {
    fn show(&mut self) {}

    /// Advance by `delta` seconds and draw the frame
    fn render(&mut self, delta: f32, input: &FrameInput);

    /// New window size in pixels. Non-positive sizes must be ignored.
    fn resize(&mut self, _width: i32, _height: i32) {}

    fn pause(&mut self) {}

    fn resume(&mut self) {}

    fn hide(&mut self) {}

    /// Release anything the screen started (music, etc.)
    fn dispose(&mut self) {}
}
