//! Sound effects and music
//!
//! Game code asks for sounds by [`SoundId`]; the macroquad mixer does the
//! decoding and playback.

use macroquad::audio::{play_sound, play_sound_once, stop_sound, PlaySoundParams};
use crate::assets::Sounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    /// Played when the catcher intercepts a droplet
    Drop,
    /// Background track
    Music,
}

pub trait Audio {
    /// Fire-and-forget playback at full volume
    fn play_one_shot(&mut self, sound: SoundId);

    fn play_music(&mut self, sound: SoundId, volume: f32, looped: bool);

    fn stop(&mut self, sound: SoundId);
}

pub struct MixerAudio<'a> {
    sounds: &'a Sounds,
}

impl<'a> MixerAudio<'a> {
    pub fn new(sounds: &'a Sounds) -> Self {
        Self { sounds }
    }
}

impl Audio for MixerAudio<'_> {
    fn play_one_shot(&mut self, sound: SoundId) {
        play_sound_once(self.sounds.get(sound));
    }

    fn play_music(&mut self, sound: SoundId, volume: f32, looped: bool) {
        play_sound(self.sounds.get(sound), PlaySoundParams { looped, volume });
    }

    fn stop(&mut self, sound: SoundId) {
        stop_sound(self.sounds.get(sound));
    }
}
