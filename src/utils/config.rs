//! Configuration management for Chromeless
//!
//! This module handles loading and managing application configuration
//! from config files and environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::utils::error::{ChromelessError, IntoChromelessError, Result};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window configuration
    pub window: WindowConfig,

    /// Frame behaviour
    pub frame: FrameConfig,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title, shown in the taskbar only
    pub title: String,

    /// Initial inner width
    pub width: u32,

    /// Initial inner height
    pub height: u32,

    /// Always on top
    pub always_on_top: bool,
}

/// Frame configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Ask the compositor for the native frame shadow
    pub shadow: bool,

    /// Resize border thickness in pixels, instead of the system metrics
    pub border_override: Option<i32>,

    /// Border thickness where no system metric exists
    pub fallback_border: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Window without standard chrome".to_string(),
            width: 640,
            height: 480,
            always_on_top: false,
        }
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            shadow: true,
            border_override: None,
            fallback_border: 8,
        }
    }
}

impl FrameConfig {
    /// Border used by the portable hit testing
    pub fn portable_border(&self) -> i32 {
        self.border_override.unwrap_or(self.fallback_border)
    }
}

impl Config {
    /// Load configuration from various sources
    ///
    /// Later sources override earlier ones:
    /// 1. Default values
    /// 2. `path`, or the user config file (~/.config/chromeless/config.toml on Linux)
    /// 3. Environment variables (CHROMELESS_* prefix)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::user_config_path() {
                Some(user_path) if user_path.exists() => Self::from_file(&user_path)?,
                _ => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Read a TOML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;

        toml::from_str(&contents)
            .config_err(&format!("Failed to parse {}", path.display()))
    }

    /// Save configuration to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)
            .config_err("Failed to serialize config")?;

        std::fs::write(path, toml)?;

        Ok(())
    }

    /// Apply overrides from a variable lookup, normally the environment
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(width) = lookup("CHROMELESS_WIDTH") {
            self.window.width = width.parse()
                .map_err(|_| ChromelessError::Config("Invalid CHROMELESS_WIDTH".to_string()))?;
        }

        if let Some(height) = lookup("CHROMELESS_HEIGHT") {
            self.window.height = height.parse()
                .map_err(|_| ChromelessError::Config("Invalid CHROMELESS_HEIGHT".to_string()))?;
        }

        // Can only turn the shadow off, never back on
        if let Some(value) = lookup("CHROMELESS_NO_SHADOW") {
            if !matches!(value.as_str(), "" | "0" | "false") {
                self.frame.shadow = false;
            }
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ChromelessError::Config("Window dimensions must be non-zero".to_string()));
        }

        if let Some(border) = self.frame.border_override {
            if border < 0 {
                return Err(ChromelessError::Config(format!(
                    "Border override must not be negative, got {}",
                    border
                )));
            }
        }

        if self.frame.fallback_border < 0 {
            return Err(ChromelessError::Config("Fallback border must not be negative".to_string()));
        }

        Ok(())
    }

    /// Get user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        let app_dir = if cfg!(any(target_os = "windows", target_os = "macos")) {
            "Chromeless"
        } else {
            "chromeless"
        };

        dirs::config_dir().map(|p| p.join(app_dir).join("config.toml"))
    }
}
