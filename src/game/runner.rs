//! Endless Runner (skeleton)
//!
//! Only the scene frame exists so far: a fitted viewport and the background
//! stretched over the world.

use crate::config::GameConfig;
use crate::render::{Renderer, TextureId};
use super::FitViewport;

pub struct RunnerScene {
    viewport: FitViewport,
}

impl RunnerScene {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            viewport: FitViewport::new(config.world.width, config.world.height),
        }
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        if !self.viewport.update(width, height) {
            log::debug!("ignoring resize to {}x{}", width, height);
        }
    }

    pub fn draw(&self, renderer: &mut impl Renderer) {
        renderer.begin(&self.viewport);
        renderer.draw(TextureId::Background, self.viewport.world_rect());
        renderer.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingRenderer;

    #[test]
    fn test_draws_background_only() {
        let scene = RunnerScene::new(&GameConfig::default());
        let mut r = RecordingRenderer::default();
        scene.draw(&mut r);

        assert_eq!(r.draws.len(), 1);
        assert_eq!(r.draws[0].0, TextureId::Background);
        assert_eq!(r.draws[0].1, scene.viewport.world_rect());
    }

    #[test]
    fn test_resize_ignores_minimized_window() {
        let mut scene = RunnerScene::new(&GameConfig::default());
        scene.resize(1600, 1000);
        let before = scene.viewport.clone();
        scene.resize(-1, 1000);
        assert_eq!(scene.viewport, before);
    }
}
