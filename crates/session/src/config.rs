//! Per-game configuration, loadable from TOML.
//!
//! ```toml
//! opponent_enabled = true
//! difficulty = "hard"
//! human_color = "black"
//! board_flipped = true
//! ```

use chess_core::Color;
use opponent::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors while reading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings fixed for the lifetime of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Whether the computer plays the side the human does not
    pub opponent_enabled: bool,
    pub difficulty: Difficulty,
    pub human_color: Color,
    /// Render from Black's side. Purely presentational.
    pub board_flipped: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opponent_enabled: true,
            difficulty: Difficulty::Medium,
            human_color: Color::White,
            board_flipped: false,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Color the computer plays, if enabled.
    pub fn opponent_color(&self) -> Option<Color> {
        self.opponent_enabled.then(|| self.human_color.other())
    }
}
