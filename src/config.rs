//=========================================================================
// Game Configuration
//=========================================================================
//
// TOML-backed settings read at startup.
//
// The config file lives next to the working directory as
// `<GAME_NAME>.toml`. When it does not exist yet, the defaults are written
// to it so players have a file to edit:
//
// ```toml
// [logging]
// level = "INFO"
//
// [window]
// title = "State Engine"
// width = 800
// height = 600
// borderless = true
//
// [timing]
// fps = 80
// channel_capacity = 128
// ```
//
// Every section and field is optional when reading; missing values fall
// back to the defaults above.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::constants::{CHANNEL_CAPACITY, FPS, GAME_NAME, GAME_TITLE, SCREEN_SIZE};
use crate::error::ConfigError;
use crate::logging;

//=== GameConfig ==========================================================

/// Root of the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    pub logging: LoggingConfig,
    pub window: WindowConfig,
    pub timing: TimingConfig,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level name, e.g. `INFO`, `DEBUG`, `WARNING`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "INFO".to_string() }
    }
}

/// `[window]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,

    /// Open the window without OS decorations (title bar, borders).
    pub borderless: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: GAME_TITLE.to_string(),
            width: SCREEN_SIZE.0,
            height: SCREEN_SIZE.1,
            borderless: true,
        }
    }
}

/// `[timing]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Frame-rate cap of the controller loop.
    pub fps: u32,

    /// Platform → controller channel capacity, in batches.
    pub channel_capacity: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fps: FPS,
            channel_capacity: CHANNEL_CAPACITY,
        }
    }
}

impl GameConfig {
    //--- Location ---------------------------------------------------------

    /// Path of the config file inside `dir`.
    pub fn config_path(dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(format!("{}.toml", GAME_NAME))
    }

    //--- Loading ----------------------------------------------------------

    /// Reads the config at `path`, creating it with defaults if missing.
    ///
    /// The returned config is validated.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read or created,
    /// [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for values that fail validation.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let config = if path.exists() {
            debug!("Reading config from {}", path.display());
            Self::load(path)?
        } else {
            info!("Config {} not found, writing defaults", path.display());
            let config = Self::default();
            config.save(path)?;
            config
        };

        config.validate()?;
        Ok(config)
    }

    /// Reads and parses the config at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the config to `path` as pretty TOML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = toml::to_string_pretty(self)?;

        fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    //--- Validation -------------------------------------------------------

    /// Rejects values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        logging::parse_level(&self.logging.level)?;

        if self.timing.fps == 0 {
            return Err(ConfigError::Invalid {
                field: "timing.fps",
                reason: "must be greater than zero".into(),
            });
        }

        if self.timing.channel_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "timing.channel_capacity",
                reason: "must be greater than zero".into(),
            });
        }

        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid {
                field: "window",
                reason: format!(
                    "size must be non-zero, got {}x{}",
                    self.window.width, self.window.height
                ),
            });
        }

        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.logging.level, "INFO");
        assert_eq!(config.window.title, GAME_TITLE);
        assert_eq!((config.window.width, config.window.height), SCREEN_SIZE);
        assert!(config.window.borderless);
        assert_eq!(config.timing.fps, FPS);
        assert_eq!(config.timing.channel_capacity, CHANNEL_CAPACITY);
    }

    #[test]
    fn config_path_uses_game_name() {
        let path = GameConfig::config_path("/tmp/game");
        assert_eq!(path, PathBuf::from(format!("/tmp/game/{}.toml", GAME_NAME)));
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = GameConfig::config_path(dir.path());

        let config = GameConfig::load_or_create(&path).unwrap();

        assert_eq!(config, GameConfig::default());
        assert!(path.exists(), "defaults should be written to disk");

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("[logging]"));
        assert!(written.contains("level = \"INFO\""));
    }

    #[test]
    fn existing_file_is_read_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = GameConfig::config_path(dir.path());
        fs::write(&path, "[logging]\nlevel = \"DEBUG\"\n").unwrap();

        let config = GameConfig::load_or_create(&path).unwrap();

        assert_eq!(config.logging.level, "DEBUG");
        assert_eq!(config.timing, TimingConfig::default(), "missing sections use defaults");
        assert_eq!(fs::read_to_string(&path).unwrap(), "[logging]\nlevel = \"DEBUG\"\n");
    }

    #[test]
    fn partial_section_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        fs::write(&path, "[window]\ntitle = \"Demo\"\n").unwrap();

        let config = GameConfig::load(&path).unwrap();

        assert_eq!(config.window.title, "Demo");
        assert_eq!(config.window.width, SCREEN_SIZE.0);
        assert!(config.window.borderless);
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[timing]\nfps = \"fast\"\n").unwrap();

        let err = GameConfig::load_or_create(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "got {:?}", err);
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");

        let mut config = GameConfig::default();
        config.timing.fps = 144;
        config.window.borderless = false;
        config.save(&path).unwrap();

        assert_eq!(GameConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn validate_rejects_zero_fps() {
        let mut config = GameConfig::default();
        config.timing.fps = 0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "timing.fps", .. }));
    }

    #[test]
    fn validate_rejects_zero_channel_capacity() {
        let mut config = GameConfig::default();
        config.timing.channel_capacity = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_window() {
        let mut config = GameConfig::default();
        config.window.height = 0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "window", .. }));
    }

    #[test]
    fn validate_rejects_unknown_log_level() {
        let mut config = GameConfig::default();
        config.logging.level = "LOUD".into();

        assert!(config.validate().is_err());
    }
}
