//! GridSketch Settings Crate
//!
//! Handles application configuration: grid geometry, selection tolerance and
//! the default drawing style, loaded from and saved to JSON or TOML files.

pub mod config;
pub mod error;

pub use config::{Config, GridSettings, SelectionSettings, StyleDefaults};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
