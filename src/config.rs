//! Renderer Configuration
//!
//! Optional per-user settings for the `canvas-render` binary.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{CanvasError, Result};

/// How rendered drawings are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The drawing as plain text
    #[default]
    Text,
    /// One JSON response document per input
    Json,
}

/// Renderer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Log level directive (e.g. "info", "canvas_render=debug")
    pub log_level: Option<String>,
}

impl RenderConfig {
    /// Configuration directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "canvas", "canvas-render")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Path of the default config file
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }
}

/// Load configuration from `path`, or from the default location.
///
/// A missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path.map(Path::to_path_buf).or_else(RenderConfig::config_path) else {
        return Ok(RenderConfig::default());
    };

    if !path.exists() {
        return Ok(RenderConfig::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CanvasError::Configuration(format!("Failed to read config: {e}")))?;

    // TOML by extension, otherwise JSON
    if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str(&content)
            .map_err(|e| CanvasError::Configuration(format!("Invalid TOML config: {e}")))
    } else {
        serde_json::from_str(&content)
            .map_err(|e| CanvasError::Configuration(format!("Invalid JSON config: {e}")))
    }
}
