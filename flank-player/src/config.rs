use std::path::Path;

use crate::difficulty::{Difficulty, HardPolicy};
use derive_more::{Display, Error};
use flank_othello::Player;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Longest allowed pause before a computer move.
pub const MAX_THINK_TIME_MS: u64 = 10_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display(fmt = "failed to read config file {}: {}", path, source)]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    #[display(fmt = "failed to parse TOML: {}", _0)]
    TomlParse(toml::de::Error),

    #[display(fmt = "failed to write TOML: {}", _0)]
    TomlWrite(toml::ser::Error),

    #[display(fmt = "config validation error: {}", _0)]
    Validation(#[error(not(source))] String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::TomlParse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::TomlWrite(err)
    }
}

/// Settings for a game against the computer, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub difficulty: Difficulty,
    pub hard_policy: HardPolicy,
    /// The colour the computer plays.
    pub computer: Player,
    /// Two humans share the terminal; no computer moves are made.
    pub two_player: bool,
    /// Cosmetic pause before each computer move.
    pub think_time_ms: u64,
    /// Seed for the easy tier's random choices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            difficulty: Difficulty::Medium,
            hard_policy: HardPolicy::Positional,
            computer: Player::White,
            two_player: false,
            think_time_ms: 500,
            seed: None,
        }
    }
}

impl PlayConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: PlayConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.think_time_ms > MAX_THINK_TIME_MS {
            return Err(ConfigError::Validation(format!(
                "think_time_ms must be <= {}",
                MAX_THINK_TIME_MS
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&PlayConfig::default())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        PlayConfig::default()
            .validate()
            .expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: PlayConfig = toml::from_str("difficulty = \"hard\"").unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.hard_policy, HardPolicy::Positional);
        assert_eq!(config.computer, Player::White);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: PlayConfig = toml::from_str("").unwrap();
        assert_eq!(config, PlayConfig::default());
    }

    #[test]
    fn test_unknown_difficulty_is_a_parse_error() {
        let err = toml::from_str::<PlayConfig>("difficulty = \"brutal\"").unwrap_err();
        assert!(matches!(ConfigError::from(err), ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_validation_rejects_long_think_time() {
        let config = PlayConfig {
            think_time_ms: MAX_THINK_TIME_MS + 1,
            ..PlayConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = PlayConfig::load_or_default(Path::new("nonexistent_flank.toml")).unwrap();
        assert_eq!(config, PlayConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flank.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
difficulty = "easy"
computer = "black"
seed = 9
"#
        )
        .unwrap();

        let config = PlayConfig::load(&path).unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.computer, Player::Black);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.think_time_ms, 500);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flank.toml");
        std::fs::write(&path, "think_time_ms = 60000\n").unwrap();
        assert!(matches!(
            PlayConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = PlayConfig::default_toml().unwrap();
        let config: PlayConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, PlayConfig::default());
    }
}
