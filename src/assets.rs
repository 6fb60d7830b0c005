//! Asset loading
//!
//! Resolves the configured paths into GPU textures and decoded sounds.
//! Everything is loaded up front; a missing or undecodable file aborts
//! startup.

use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::{load_texture, FilterMode, Texture2D};
use crate::audio::SoundId;
use crate::config::AssetPaths;
use crate::render::TextureId;

#[derive(Debug)]
pub enum AssetError {
    Texture { path: String, reason: String },
    Sound { path: String, reason: String },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Texture { path, reason } => {
                write!(f, "failed to load texture '{}': {}", path, reason)
            }
            AssetError::Sound { path, reason } => {
                write!(f, "failed to load sound '{}': {}", path, reason)
            }
        }
    }
}

impl std::error::Error for AssetError {}

pub struct Textures {
    pub background: Texture2D,
    pub catcher: Texture2D,
    pub droplet: Texture2D,
}

impl Textures {
    pub fn get(&self, id: TextureId) -> &Texture2D {
        match id {
            TextureId::Background => &self.background,
            TextureId::Catcher => &self.catcher,
            TextureId::Droplet => &self.droplet,
        }
    }
}

pub struct Sounds {
    pub drop: Sound,
    pub music: Sound,
}

impl Sounds {
    pub fn get(&self, id: SoundId) -> &Sound {
        match id {
            SoundId::Drop => &self.drop,
            SoundId::Music => &self.music,
        }
    }
}

pub struct Assets {
    pub textures: Textures,
    pub sounds: Sounds,
}

impl Assets {
    pub async fn load(paths: &AssetPaths) -> Result<Self, AssetError> {
        let textures = Textures {
            background: texture(&paths.background).await?,
            catcher: texture(&paths.catcher).await?,
            droplet: texture(&paths.droplet).await?,
        };
        let sounds = Sounds {
            drop: sound(&paths.drop_sound).await?,
            music: sound(&paths.music).await?,
        };
        log::info!("assets loaded (3 textures, 2 sounds)");
        Ok(Self { textures, sounds })
    }
}

async fn texture(path: &str) -> Result<Texture2D, AssetError> {
    let tex = load_texture(path).await.map_err(|e| AssetError::Texture {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    tex.set_filter(FilterMode::Linear);
    log::debug!("loaded texture {} ({}x{})", path, tex.width(), tex.height());
    Ok(tex)
}

async fn sound(path: &str) -> Result<Sound, AssetError> {
    let snd = load_sound(path).await.map_err(|e| AssetError::Sound {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    log::debug!("loaded sound {}", path);
    Ok(snd)
}
