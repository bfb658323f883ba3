//! Configuration file handling for fractree.
//!
//! The config lives in `config.toml` under the platform config directory
//! (e.g. `~/.config/fractree/` on Linux). A missing file is not an error:
//! every field has a default matching the stock animation.

mod error;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use fractree_core::{
    ColorTheme, DEFAULT_INTERVAL_MS, DEFAULT_TRUNK_RATIO, DEFAULT_TRUNK_WIDTH, TreeParams,
};
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

const CONFIG_FILE: &str = "config.toml";

/// User configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Branch stroke color.
    pub color_theme: ColorTheme,
    /// Milliseconds between revealed depth levels.
    pub frame_interval_ms: u64,
    /// Trunk stroke width in surface units.
    pub trunk_width: f64,
    /// Trunk length as a fraction of the shorter surface side.
    pub trunk_ratio: f64,
    /// Show the key help and status line.
    pub show_help: bool,
    /// Tree shape.
    pub tree: TreeParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_theme: ColorTheme::default(),
            frame_interval_ms: DEFAULT_INTERVAL_MS,
            trunk_width: DEFAULT_TRUNK_WIDTH,
            trunk_ratio: DEFAULT_TRUNK_RATIO,
            show_help: true,
            tree: TreeParams::default(),
        }
    }
}

impl Config {
    /// Platform config directory for fractree.
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "fractree").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Platform cache directory for fractree, used for the log file.
    pub fn cache_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "fractree").map(|dirs| dirs.cache_dir().to_path_buf())
    }

    /// Path of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Self::config_dir()
            .map(|dir| dir.join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the config from the platform config directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load and validate the config at `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save the config to the platform config directory.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let payload = toml::to_string_pretty(self)?;
        std::fs::write(path, payload)?;
        log::info!("saved config to {}", path.display());
        Ok(())
    }

    /// Reject values the animation cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tree.validate()?;
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::Validation {
                message: "frame_interval_ms must be at least 1".to_string(),
            });
        }
        if !(self.trunk_width.is_finite() && self.trunk_width > 0.0) {
            return Err(ConfigError::Validation {
                message: format!("trunk_width must be positive, got {}", self.trunk_width),
            });
        }
        if !(self.trunk_ratio > 0.0 && self.trunk_ratio <= 1.0) {
            return Err(ConfigError::Validation {
                message: format!("trunk_ratio must be in (0, 1], got {}", self.trunk_ratio),
            });
        }
        Ok(())
    }
}
