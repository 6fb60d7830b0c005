use crate::assets::Assets;
use crate::config::GameConfig;
use crate::game::RunnerScene;
use crate::input::FrameInput;
use crate::render::QuadRenderer;
use super::Screen;

/// Endless runner skeleton: lifecycle hooks only, draws the background
pub struct RunnerScreen {
    scene: RunnerScene,
    assets: Assets,
}

impl RunnerScreen {
    pub fn new(config: &GameConfig, assets: Assets) -> Self {
        Self {
            scene: RunnerScene::new(config),
            assets,
        }
    }
}

impl Screen for RunnerScreen {
    fn show(&mut self) {
        log::info!("runner: show");
    }

    fn render(&mut self, _delta: f32, _input: &FrameInput) {
        self.scene.draw(&mut QuadRenderer::new(&self.assets.textures));
    }

    fn resize(&mut self, width: i32, height: i32) {
        self.scene.resize(width, height);
    }
}
