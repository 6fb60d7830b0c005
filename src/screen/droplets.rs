use crate::assets::Assets;
use crate::audio::{Audio, MixerAudio, SoundId};
use crate::config::GameConfig;
use crate::game::DropletGame;
use crate::input::FrameInput;
use crate::render::QuadRenderer;
use super::Screen;

/// Catch the Droplets, wired to macroquad rendering and audio
pub struct DropletsScreen {
    game: DropletGame,
    assets: Assets,
    music_volume: f32,
}

impl DropletsScreen {
    pub fn new(config: &GameConfig, assets: Assets) -> Self {
        Self {
            game: DropletGame::new(config),
            assets,
            music_volume: config.audio.music_volume,
        }
    }
}

impl Screen for DropletsScreen {
    fn show(&mut self) {
        log::info!("droplets: show");
        MixerAudio::new(&self.assets.sounds).play_music(SoundId::Music, self.music_volume, true);
    }

    fn render(&mut self, delta: f32, input: &FrameInput) {
        let mut audio = MixerAudio::new(&self.assets.sounds);
        self.game.frame(input, delta, &mut audio);
        self.game.draw(&mut QuadRenderer::new(&self.assets.textures));
    }

    fn resize(&mut self, width: i32, height: i32) {
        self.game.resize(width, height);
    }

    fn pause(&mut self) {
        log::info!("droplets: paused");
    }

    fn resume(&mut self) {
        log::info!("droplets: resumed");
    }

    fn hide(&mut self) {
        log::info!("droplets: hide");
    }

    fn dispose(&mut self) {
        MixerAudio::new(&self.assets.sounds).stop(SoundId::Music);
        let stats = self.game.stats();
        log::info!(
            "droplets: {} spawned, {} caught, {} missed",
            stats.spawned, stats.caught, stats.missed
        );
    }
}
