// File: src/config.rs
// Purpose: Configuration parsing from form-rules.toml

use crate::extractor::DEFAULT_MARKER;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE: &str = "form-rules.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub views: ViewsConfig,

    #[serde(default)]
    pub extraction: ExtractionConfig,

    #[serde(default)]
    pub form: FormConfig,
}

/// Where views live on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewsConfig {
    /// Directory containing view files (default: "views")
    #[serde(default = "default_views_dir")]
    pub dir: String,

    /// View file extension (default: "html")
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// How rules are read from markup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Attribute holding the rule string (default: "validated")
    #[serde(default = "default_marker_attribute")]
    pub marker_attribute: String,
}

/// Form request defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// View used when a route names none. When unset, the view is inferred
    /// from the route name.
    #[serde(default)]
    pub default_form_view: Option<String>,
}

fn default_views_dir() -> String {
    "views".to_string()
}

fn default_extension() -> String {
    "html".to_string()
}

fn default_marker_attribute() -> String {
    DEFAULT_MARKER.to_string()
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            dir: default_views_dir(),
            extension: default_extension(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            marker_attribute: default_marker_attribute(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./form-rules.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }
}
