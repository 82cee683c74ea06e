//! Configuration management for Sigview
//!
//! This module handles loading and saving application configuration.
//! The configuration is an explicitly owned value: the shell and the
//! dialogs receive it by reference at construction time, and nothing
//! in the crate holds global mutable state.

use crate::utils::error::{Result, SigviewError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Window chrome constants
    pub window: WindowConfig,

    /// Persisted frame geometry
    pub frame: FrameOptions,

    /// General application settings
    pub general: GeneralConfig,
}

/// Window chrome configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Minimum window width in pixels
    pub min_width: u32,

    /// Minimum window height in pixels
    pub min_height: u32,

    /// Thickness of the invisible resize border
    pub border_width: u32,

    /// Height of the custom title bar
    pub titlebar_height: u32,
}

/// Persisted window geometry and language selection
///
/// `right == 0` marks a first run with no saved geometry; the shell
/// then computes a centered default instead of restoring a rectangle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameOptions {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,

    /// Whether the window was maximized when last saved
    pub is_max: bool,

    /// Language code, 0 when never selected
    pub language: i32,
}

/// General application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Remember window position and size across runs
    pub remember_window_state: bool,

    /// Offer to open the user guide on startup
    pub show_documents: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Sigview".to_string(),
            min_width: 800,
            min_height: 520,
            border_width: 8,
            titlebar_height: 32,
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            remember_window_state: true,
            show_documents: true,
        }
    }
}

impl FrameOptions {
    /// Whether a geometry was ever saved
    pub fn has_saved_geometry(&self) -> bool {
        self.right != 0
    }
}

impl Config {
    /// Load configuration
    ///
    /// Configuration is loaded in the following order (later sources
    /// override earlier):
    /// 1. Default values
    /// 2. User config file (~/.config/sigview/config.toml on Linux)
    /// 3. Environment variables (SIGVIEW_* prefix)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                config.merge_from_file(&user_path)?;
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the user config file
    ///
    /// This is the explicit flush point: in-memory geometry updates
    /// during a drag do not touch the disk until this is called.
    pub fn save(&self) -> Result<()> {
        let path = Self::user_config_path()
            .ok_or_else(|| SigviewError::Config("Cannot determine user config path".to_string()))?;
        self.save_to(&path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SigviewError::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let toml = toml::to_string_pretty(self)
            .map_err(|e| SigviewError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, toml)
            .map_err(|e| SigviewError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Merge configuration from a TOML file
    fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SigviewError::Config(format!("Failed to read config file: {}", e)))?;

        match toml::from_str::<Config>(&contents) {
            Ok(file_config) => *self = file_config,
            // A damaged file is a first-run condition, not a fatal error
            Err(e) => log::warn!("Ignoring malformed config {}: {}", path.display(), e),
        }

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(log_level) = std::env::var("SIGVIEW_LOG_LEVEL") {
            self.general.log_level = log_level;
        }

        if let Ok(language) = std::env::var("SIGVIEW_LANGUAGE") {
            self.frame.language = language
                .parse()
                .map_err(|_| SigviewError::Config("Invalid SIGVIEW_LANGUAGE".to_string()))?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.window.min_width == 0 || self.window.min_height == 0 {
            return Err(SigviewError::Config(
                "Minimum window dimensions must be non-zero".to_string(),
            ));
        }

        if self.window.border_width == 0 {
            return Err(SigviewError::Config(
                "Resize border width must be non-zero".to_string(),
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.general.log_level.as_str()) {
            return Err(SigviewError::Config(format!(
                "Invalid log level '{}', must be one of: {:?}",
                self.general.log_level, valid_log_levels
            )));
        }

        Ok(())
    }

    /// Get the user config file path
    ///
    /// `SIGVIEW_CONFIG_DIR` overrides the platform config directory.
    pub fn user_config_path() -> Option<PathBuf> {
        if let Ok(dir) = std::env::var("SIGVIEW_CONFIG_DIR") {
            return Some(PathBuf::from(dir).join("config.toml"));
        }

        dirs::config_dir().map(|p| p.join("sigview").join("config.toml"))
    }
}
