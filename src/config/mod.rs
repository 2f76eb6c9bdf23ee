// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[prompter]` - Initial speed and font size, and the button increments
//!
//! The scroll state itself is never written back: every session starts paused
//! at the top, with the configured speed and font size.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `TELEPROMPTER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use teleprompter::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::prompter::{FontSize, ScrollSpeed};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Initial prompter parameters and button increments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrompterConfig {
    /// Initial scroll speed in pixels per tick.
    #[serde(default = "default_speed", skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,

    /// Amount added or removed by the speed buttons.
    #[serde(default = "default_speed_step", skip_serializing_if = "Option::is_none")]
    pub speed_step: Option<f32>,

    /// Initial preview font size in pixels.
    #[serde(default = "default_font_size", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u16>,

    /// Amount added or removed by the font size buttons.
    #[serde(
        default = "default_font_size_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_size_step: Option<u16>,
}

impl Default for PrompterConfig {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            speed_step: default_speed_step(),
            font_size: default_font_size(),
            font_size_step: default_font_size_step(),
        }
    }
}

impl PrompterConfig {
    /// Initial speed, floored at the minimum.
    #[must_use]
    pub fn initial_speed(&self) -> ScrollSpeed {
        self.speed.map(ScrollSpeed::new).unwrap_or_default()
    }

    /// Initial font size, clamped to the supported range.
    #[must_use]
    pub fn initial_font_size(&self) -> FontSize {
        self.font_size
            .map(|px| FontSize::new(i32::from(px)))
            .unwrap_or_default()
    }

    /// Speed button increment, never below [`MIN_SPEED_STEP`].
    #[must_use]
    pub fn speed_step(&self) -> f32 {
        match self.speed_step {
            Some(step) if step.is_finite() => step.max(MIN_SPEED_STEP),
            _ => DEFAULT_SPEED_STEP,
        }
    }

    /// Font size button increment, clamped to the supported range.
    #[must_use]
    pub fn font_size_step(&self) -> i32 {
        let step = self
            .font_size_step
            .unwrap_or(DEFAULT_FONT_SIZE_STEP)
            .clamp(MIN_FONT_SIZE_STEP, MAX_FONT_SIZE_STEP);
        i32::from(step)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Prompter settings.
    #[serde(default)]
    pub prompter: PrompterConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_speed() -> Option<f32> {
    Some(DEFAULT_SPEED)
}

fn default_speed_step() -> Option<f32> {
    Some(DEFAULT_SPEED_STEP)
}

fn default_font_size() -> Option<u16> {
    Some(DEFAULT_FONT_SIZE)
}

fn default_font_size_step() -> Option<u16> {
    Some(DEFAULT_FONT_SIZE_STEP)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = paths::settings_path(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), "ignoring unreadable config: {err}");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = paths::settings_path(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
