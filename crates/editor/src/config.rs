// Chunk: docs/chunks/editor_config - JSON configuration with defaults
//!
//! Editor configuration
//!
//! Configuration is an optional JSON file at
//! `<config_dir>/textflow/config.json` (e.g. `~/.config/textflow/config.json`
//! on Linux). Every field has a default, so a partial file only overrides the
//! fields it names:
//!
//! ```json
//! { "font_size": 16, "margin": 8 }
//! ```
//!
//! [`EditorConfig::load_or_default`] degrades gracefully: a missing file is
//! silent, an unreadable or malformed one logs a warning, and both fall back
//! to the defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::font::FontSpec;

/// Application directory name under the platform config directory.
const APP_NAME: &str = "textflow";

/// Config file name within the application directory.
const CONFIG_FILENAME: &str = "config.json";

/// Session settings for an editor window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Font family name
    pub font_family: String,
    /// Initial font size in points
    pub font_size: f32,
    /// Points added or removed per zoom step
    pub font_size_step: f32,
    /// Zooming out never goes below this size
    pub min_font_size: f32,
    /// Left margin in pixels
    pub margin: f32,
    /// Initial window width in pixels
    pub window_width: f32,
    /// Initial window height in pixels
    pub window_height: f32,
    /// Log extra diagnostics such as cursor positions
    pub debug: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_family: "Verdana".to_string(),
            font_size: 12.0,
            font_size_step: 4.0,
            min_font_size: 4.0,
            margin: 5.0,
            window_width: 500.0,
            window_height: 500.0,
            debug: false,
        }
    }
}

impl EditorConfig {
    /// Returns the initial font described by this configuration.
    pub fn font(&self) -> FontSpec {
        FontSpec::new(self.font_family.clone(), self.font_size)
    }

    /// Loads the configuration from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the configuration from `path`. A missing file gives the defaults.
    pub fn load_if_present(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Loads the configuration from `path`, falling back to defaults.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_if_present(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default configuration");
            Self::default()
        })
    }

    /// Loads the configuration from the platform config directory.
    ///
    /// Returns the defaults when there is no config directory or no file.
    /// Unlike [`EditorConfig::load_or_default`] this does not log, so it can
    /// run before logging is set up.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        match config_file_path() {
            Some(path) => Self::load_if_present(&path),
            None => Ok(Self::default()),
        }
    }
}

/// Returns the path of the configuration file, if the platform has a config
/// directory.
pub fn config_file_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_NAME).join(CONFIG_FILENAME))
}
