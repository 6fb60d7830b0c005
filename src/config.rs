//! Game configuration
//!
//! Uses RON (Rusty Object Notation) for a human-editable settings file.
//! Every field has a default, so a config file only needs to name what it
//! changes. A missing file means "all defaults".

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};

/// Where the game looks for its settings file
pub const DEFAULT_CONFIG_PATH: &str = "assets/droplets.ron";

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Which game the binary runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameKind {
    /// Catch the falling droplets
    #[default]
    Droplets,
    /// Endless runner skeleton (background only)
    Runner,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Droplets".to_string(),
            width: 800,
            height: 500,
        }
    }
}

/// Logical world size in world units, independent of window pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self { width: 8.0, height: 5.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatcherSettings {
    pub size: Size,
    /// Horizontal speed in world units per second
    pub speed: f32,
}

impl Default for CatcherSettings {
    fn default() -> Self {
        Self {
            size: Size::new(1.0, 1.0),
            speed: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropletSettings {
    pub size: Size,
    /// Fall speed in world units per second
    pub fall_speed: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
}

impl Default for DropletSettings {
    fn default() -> Self {
        Self {
            size: Size::new(1.0, 1.0),
            fall_speed: 2.0,
            spawn_interval: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { music_volume: 0.5 }
    }
}

/// Asset file paths, relative to the working directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub background: String,
    pub catcher: String,
    pub droplet: String,
    pub drop_sound: String,
    pub music: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: "assets/background.png".to_string(),
            catcher: "assets/bucket.png".to_string(),
            droplet: "assets/drop.png".to_string(),
            drop_sound: "assets/drop.wav".to_string(),
            music: "assets/music.wav".to_string(),
        }
    }
}

/// Where the active config came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// No file at the path
    Defaults,
    File,
    /// The file exists but failed to load; holds the reason
    Rejected(String),
}

impl ConfigSource {
    pub fn log(&self, path: &Path) {
        match self {
            ConfigSource::Defaults => log::info!("no config at {}, using defaults", path.display()),
            ConfigSource::File => log::info!("loaded config from {}", path.display()),
            ConfigSource::Rejected(reason) => {
                log::warn!("ignoring config {}: {}", path.display(), reason)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub game: GameKind,
    pub window: WindowSettings,
    pub world: WorldSettings,
    pub catcher: CatcherSettings,
    pub droplets: DropletSettings,
    pub audio: AudioSettings,
    pub assets: AssetPaths,
}

impl GameConfig {
    /// Parse and validate a config from RON text
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate().map_err(ConfigError::ValidationError)?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load the config file if there is one, otherwise use defaults.
    /// A broken file is replaced by defaults. Nothing is logged here: the
    /// window is configured before logging is up, so the caller reports
    /// the returned [`ConfigSource`] once it is.
    pub fn load_or_default(path: &Path) -> (Self, ConfigSource) {
        if !path.exists() {
            return (Self::default(), ConfigSource::Defaults);
        }
        match Self::load(path) {
            Ok(config) => (config, ConfigSource::File),
            Err(e) => (Self::default(), ConfigSource::Rejected(e.to_string())),
        }
    }

    /// Write the config as pretty RON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .indentor("  ".to_string());
        let text = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Check that every size, speed and interval makes sense
    pub fn validate(&self) -> Result<(), String> {
        if self.window.width <= 0 || self.window.height <= 0 {
            return Err(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            ));
        }
        validate_size(&Size::new(self.world.width, self.world.height), "world")?;
        validate_size(&self.catcher.size, "catcher")?;
        validate_size(&self.droplets.size, "droplet")?;
        validate_positive(self.catcher.speed, "catcher speed")?;
        validate_positive(self.droplets.fall_speed, "droplet fall speed")?;
        validate_positive(self.droplets.spawn_interval, "spawn interval")?;

        fits_world(&self.catcher.size, &self.world, "catcher")?;
        fits_world(&self.droplets.size, &self.world, "droplet")?;

        let volume = self.audio.music_volume;
        if !(0.0..=1.0).contains(&volume) {
            return Err(format!("music volume must be within 0..=1, got {}", volume));
        }
        Ok(())
    }
}

fn validate_positive(value: f32, what: &str) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{} must be a positive number, got {}", what, value));
    }
    Ok(())
}

fn validate_size(size: &Size, what: &str) -> Result<(), String> {
    validate_positive(size.width, &format!("{} width", what))?;
    validate_positive(size.height, &format!("{} height", what))
}

fn fits_world(size: &Size, world: &WorldSettings, what: &str) -> Result<(), String> {
    if size.width > world.width || size.height > world.height {
        return Err(format!(
            "{} ({}x{}) does not fit in the world ({}x{})",
            what, size.width, size.height, world.width, world.height
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.game, GameKind::Droplets);
        assert_eq!(config.world.width, 8.0);
        assert_eq!(config.world.height, 5.0);
        assert_eq!(config.catcher.speed, 5.0);
        assert_eq!(config.droplets.fall_speed, 2.0);
        assert_eq!(config.droplets.spawn_interval, 1.0);
        assert_eq!(config.audio.music_volume, 0.5);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = GameConfig::from_ron("(game: Runner, droplets: (fall_speed: 3.0))").unwrap();
        assert_eq!(config.game, GameKind::Runner);
        assert_eq!(config.droplets.fall_speed, 3.0);
        assert_eq!(config.droplets.spawn_interval, 1.0);
        assert_eq!(config.world, WorldSettings::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad_speed = GameConfig::from_ron("(catcher: (speed: -1.0))");
        assert!(matches!(bad_speed, Err(ConfigError::ValidationError(_))));

        let too_wide = GameConfig::from_ron("(catcher: (size: (width: 9.0, height: 1.0)))");
        assert!(matches!(too_wide, Err(ConfigError::ValidationError(_))));

        let loud = GameConfig::from_ron("(audio: (music_volume: 1.5))");
        assert!(matches!(loud, Err(ConfigError::ValidationError(_))));

        let garbage = GameConfig::from_ron("(world: [");
        assert!(matches!(garbage, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("droplets.ron");

        let mut config = GameConfig::default();
        config.world = WorldSettings { width: 10.0, height: 6.0 };
        config.window.title = "Rain".to_string();
        config.save(&path).unwrap();

        let loaded = GameConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.ron");
        let (config, source) = GameConfig::load_or_default(&missing);
        assert_eq!(config, GameConfig::default());
        assert_eq!(source, ConfigSource::Defaults);

        let broken = dir.path().join("broken.ron");
        std::fs::write(&broken, "(world: (width: 0.0))").unwrap();
        let (config, source) = GameConfig::load_or_default(&broken);
        assert_eq!(config, GameConfig::default());
        assert!(matches!(source, ConfigSource::Rejected(ref reason) if reason.contains("world")));
    }

    #[test]
    fn test_load_or_default_reports_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("droplets.ron");
        std::fs::write(&path, "(game: Runner)").unwrap();

        let (config, source) = GameConfig::load_or_default(&path);
        assert_eq!(config.game, GameKind::Runner);
        assert_eq!(source, ConfigSource::File);
    }
}
