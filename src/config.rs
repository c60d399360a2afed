use std::path::Path;

use crate::error::ConfigError;
use crate::game::Player;
use crate::session::SessionConfig;

/// Which side the human plays, as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HumanSide {
    One,
    Two,
}

impl From<HumanSide> for Player {
    fn from(side: HumanSide) -> Player {
        match side {
            HumanSide::One => Player::One,
            HumanSide::Two => Player::Two,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// Endpoint of the remote move service. When absent the in-process
    /// random oracle is used instead.
    pub url: Option<String>,
    /// Default difficulty, 1..=5; adjustable per game in the UI.
    pub level: u8,
}

impl Default for OracleConfig {
    fn default() -> Self {
        OracleConfig {
            url: None,
            level: 1,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Default side for the human; adjustable per game in the UI.
    pub human_side: HumanSide,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            human_side: HumanSide::One,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub oracle: OracleConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=5).contains(&self.oracle.level) {
            return Err(ConfigError::Validation(
                "oracle.level must be in 1..=5".into(),
            ));
        }
        if let Some(url) = &self.oracle.url {
            if url.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "oracle.url must not be empty".into(),
                ));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }

    /// Initial per-game settings derived from the file defaults.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            human_side: self.game.human_side.into(),
            level: self.oracle.level,
        }
    }
}
