//! Configuration and settings management for GridSketch
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Grid settings (cell size, initial viewport size)
//! - Selection settings (hit tolerance)
//! - Default drawing style

pub use gridsketch_core::style::StyleDefaults;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Directory name used under the platform config directory.
const APP_DIR: &str = "gridsketch";

/// Default config file name.
const CONFIG_FILE: &str = "config.toml";

/// Grid settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridSettings {
    /// Edge length of one mesh cell in device pixels
    pub cell_size: f64,
    /// Initial canvas width in device pixels
    pub viewport_width_px: f64,
    /// Initial canvas height in device pixels
    pub viewport_height_px: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            viewport_width_px: 800.0,
            viewport_height_px: 600.0,
        }
    }
}

/// Selection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SelectionSettings {
    /// Pick slop for points and lines, in device pixels
    pub hit_tolerance_px: f64,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            hit_tolerance_px: 6.0,
        }
    }
}

fn default_style() -> StyleDefaults {
    StyleDefaults {
        color: Some(0x0066cc),
        stroke_width: Some(2.0),
        stroke_alpha: Some(1.0),
        fill_color: None,
        fill_alpha: None,
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Grid settings
    pub grid: GridSettings,
    /// Selection settings
    pub selection: SelectionSettings,
    /// Default style applied to newly drawn objects
    pub style: StyleDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridSettings::default(),
            selection: SelectionSettings::default(),
            style: default_style(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config file location, e.g. `~/.config/gridsketch/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!(path = %path.display(), "Loaded settings");
        Ok(config)
    }

    /// Load config from file, or return defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = format_of(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
            }
        }

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("grid.cell_size", self.grid.cell_size),
            ("grid.viewport_width_px", self.grid.viewport_width_px),
            ("grid.viewport_height_px", self.grid.viewport_height_px),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }

        let tolerance = self.selection.hit_tolerance_px;
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "selection.hit_tolerance_px".to_string(),
                value: tolerance.to_string(),
            });
        }

        Ok(())
    }
}
