//! Configuration file loading for the arena.
//!
//! Presets live in `arena.toml` in the current directory:
//!
//! ```toml
//! [presets.quick]
//! games = 5
//! light = "hard"
//! dark = "easy"
//! max_plies = 150
//! seed = 7
//! ```

use draughts_bot::Difficulty;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Requested preset was not found in the configuration.
    #[error("Preset not found: {0}")]
    PresetNotFound(String),
}

/// Reusable match settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PresetConfig {
    /// Number of games to play. Defaults to 10.
    #[serde(default = "default_games")]
    pub games: u32,
    /// Difficulty of the Light bot. Defaults to medium.
    #[serde(default)]
    pub light: Difficulty,
    /// Difficulty of the Dark bot. Defaults to medium.
    #[serde(default)]
    pub dark: Difficulty,
    /// Plies after which an unfinished game is scored a draw. Defaults to 200.
    #[serde(default = "default_max_plies")]
    pub max_plies: usize,
    /// Base seed; game `i` is played with `seed + i`.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_games() -> u32 {
    10
}

fn default_max_plies() -> usize {
    200
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            games: default_games(),
            light: Difficulty::default(),
            dark: Difficulty::default(),
            max_plies: default_max_plies(),
            seed: None,
        }
    }
}

/// Main arena configuration.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ArenaConfig {
    /// Map of preset names to their settings.
    #[serde(default)]
    pub presets: HashMap<String, PresetConfig>,
}

impl ArenaConfig {
    /// Loads `arena.toml` from the current directory, or the default
    /// configuration if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path())
    }

    /// Loads the configuration from `path`, falling back to defaults if the
    /// file does not exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from("arena.toml")
    }

    /// Retrieves a preset by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PresetNotFound`] if no preset has that name.
    pub fn get_preset(&self, name: &str) -> Result<&PresetConfig, ConfigError> {
        self.presets
            .get(name)
            .ok_or_else(|| ConfigError::PresetNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_toml_config() {
        let toml_content = r#"
[presets.quick]
games = 5
light = "hard"
dark = "easy"
max_plies = 150
seed = 7

[presets.long]
games = 100
"#;

        let config: ArenaConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.presets.len(), 2);

        let quick = config.presets.get("quick").unwrap();
        assert_eq!(quick.games, 5);
        assert_eq!(quick.light, Difficulty::Hard);
        assert_eq!(quick.dark, Difficulty::Easy);
        assert_eq!(quick.max_plies, 150);
        assert_eq!(quick.seed, Some(7));

        let long = config.presets.get("long").unwrap();
        assert_eq!(long.games, 100);
        assert_eq!(long.light, Difficulty::Medium);
    }

    #[test]
    fn test_parse_toml_with_missing_optional_fields() {
        let config: ArenaConfig = toml::from_str("[presets.minimal]\n").unwrap();

        let minimal = config.presets.get("minimal").unwrap();
        assert_eq!(minimal, &PresetConfig::default());
        assert_eq!(minimal.games, 10);
        assert_eq!(minimal.max_plies, 200);
        assert_eq!(minimal.seed, None);
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: ArenaConfig = toml::from_str("").unwrap();
        assert!(config.presets.is_empty());
    }

    #[test]
    fn test_unknown_difficulty_is_a_parse_error() {
        let result: Result<ArenaConfig, _> = toml::from_str("[presets.bad]\nlight = \"brutal\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_get_preset_returns_error_for_unknown_preset() {
        let config = ArenaConfig::default();

        match config.get_preset("nonexistent") {
            Err(ConfigError::PresetNotFound(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected PresetNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let path = std::env::temp_dir().join("draughts-arena-missing-config.toml");
        let _ = std::fs::remove_file(&path);
        let config = ArenaConfig::load_from(&path).unwrap();
        assert!(config.presets.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("draughts-arena-test-config.toml");
        std::fs::write(&path, "[presets.duel]\ngames = 3\ndark = \"hard\"\n").unwrap();

        let config = ArenaConfig::load_from(&path).unwrap();
        let duel = config.get_preset("duel").unwrap();
        assert_eq!(duel.games, 3);
        assert_eq!(duel.dark, Difficulty::Hard);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_from_invalid_file_is_parse_error() {
        let path = std::env::temp_dir().join("draughts-arena-invalid-config.toml");
        std::fs::write(&path, "[presets.duel\n").unwrap();

        assert!(matches!(
            ArenaConfig::load_from(&path),
            Err(ConfigError::ParseError(_))
        ));

        std::fs::remove_file(&path).ok();
    }
}
