//! Scrawl configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level Scrawl configuration (scrawl.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScrawlConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Canvas defaults used when starting a new script
#[derive(Debug, Deserialize, Serialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Multiplier converting dp stroke widths to pixels
    #[serde(default = "default_density")]
    pub density_scale: f32,
}

fn default_width() -> u32 {
    1080
}

fn default_height() -> u32 {
    1920
}

fn default_density() -> f32 {
    1.0
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            density_scale: default_density(),
        }
    }
}

/// Export destination configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Gallery directory for exported images
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
    /// Exported file names are `<prefix>_<millis>.png`
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_dir() -> PathBuf {
    PathBuf::from("gallery")
}

fn default_prefix() -> String {
    "drawing".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            prefix: default_prefix(),
        }
    }
}

impl ScrawlConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Use the explicit path if given, else `scrawl.toml` in the working
    /// directory if present, else built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let local = Path::new("scrawl.toml");
        if local.exists() {
            return Self::load(local);
        }
        Ok(Self::default())
    }
}
