use std::path::Path;

use crate::error::ConfigError;
use crate::game::DEFAULT_SPAWN_RATE;

/// Default board width in cells.
pub const DEFAULT_WIDTH: usize = 20;
/// Default board height in cells.
pub const DEFAULT_HEIGHT: usize = 10;
/// Smallest playable board, enforced at the boundary rather than by the grid.
pub const MIN_WIDTH: usize = 4;
pub const MIN_HEIGHT: usize = 4;

/// Game configuration, loadable from TOML and overridable from the command
/// line.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in cells.
    pub width: usize,
    /// Board height in cells.
    pub height: usize,
    /// Seed for the random setup; `None` means pick one at startup.
    pub seed: Option<i64>,
    /// Probability that a cell starts alive.
    pub spawn_rate: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            spawn_rate: DEFAULT_SPAWN_RATE,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist. The config file is optional, so a missing file
    /// is not reported.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values. Runs after CLI overrides are applied,
    /// so bad flag values are caught here too.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_WIDTH {
            return Err(ConfigError::Validation(format!(
                "width must be >= {MIN_WIDTH} (got {})",
                self.width
            )));
        }
        if self.height < MIN_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "height must be >= {MIN_HEIGHT} (got {})",
                self.height
            )));
        }
        if !(0.0..=1.0).contains(&self.spawn_rate) {
            return Err(ConfigError::Validation(format!(
                "spawn_rate must be in [0, 1] (got {})",
                self.spawn_rate
            )));
        }
        Ok(())
    }
}
