//! Configuration for rune-odometer.
//!
//! Settings are loaded from `rune.toml` and can be overridden with
//! environment variables.

use std::path::Path;

use rune_morph::MorphOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RuneConfig {
    /// Text morph settings (timing, easing, style, width)
    pub morph: MorphOptions,
    /// Demo application settings
    pub demo: DemoConfig,
}

/// Demo application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Simulated frame interval in milliseconds
    pub frame_ms: f32,
    /// Text shown before the transition
    pub old_text: Option<String>,
    /// Text shown after the transition
    pub new_text: Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frame_ms: 16.0,
            old_text: None,
            new_text: None,
        }
    }
}

fn parse_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl RuneConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default location (rune.toml in the current directory)
    /// or return default configuration if the file doesn't exist
    pub fn load_or_default() -> Self {
        match Self::load_from_file("rune.toml") {
            Ok(config) => config,
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(err) => {
                warn!(%err, "ignoring rune.toml");
                Self::default()
            }
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Values that fail to parse are ignored.
    pub fn merge_with_env(&mut self) {
        // Morph settings
        if let Ok(val) = std::env::var("RUNE_MORPH_DURATION_MS") {
            if let Ok(ms) = val.parse::<f32>() {
                self.morph.base_duration_ms = Some(ms);
            }
        }
        if let Ok(val) = std::env::var("RUNE_MORPH_SOFT_WRAP") {
            self.morph.soft_wrap = parse_flag(&val);
        }
        if let Ok(val) = std::env::var("RUNE_MORPH_MAX_WIDTH") {
            if let Ok(width) = val.parse::<f32>() {
                self.morph.max_width = Some(width);
            }
        }
        if let Ok(val) = std::env::var("RUNE_MORPH_FONT_SIZE") {
            if let Ok(size) = val.parse::<f32>() {
                self.morph.style.font_size = size;
            }
        }

        // Demo settings
        if let Ok(val) = std::env::var("RUNE_DEMO_FRAME_MS") {
            if let Ok(ms) = val.parse::<f32>() {
                self.demo.frame_ms = ms;
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from rune.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
