//! Game Logic
//!
//! Everything here is plain data and math: no window, no GPU, no audio
//! device. Rendering and sound go through the [`crate::render::Renderer`]
//! and [`crate::audio::Audio`] traits so the loop can be driven from tests.
//!
//! Coordinates are world units (8x5 by default), y-up, origin bottom-left.

pub mod rect;
pub mod viewport;
pub mod entity;
pub mod event;
pub mod droplets;
pub mod runner;

pub use rect::Rect;
pub use viewport::FitViewport;
pub use entity::{Catcher, Droplet};
pub use event::{DropletEvent, EventQueue};
pub use droplets::{DropletGame, DropletStats};
pub use runner::RunnerScene;
