//! Color styles for the guide overlay
//!
//! Overlay colors are symbolic tokens resolved through a small TOML
//! stylesheet, so the same debug output can be recolored per project
//! without touching code.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing overlay styles
#[derive(Error, Debug)]
pub enum OverlayStyleError {
    #[error("failed to read style file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("failed to parse style TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A style mapping overlay tokens to concrete colors
#[derive(Debug, Clone)]
pub struct OverlayStyle {
    /// Optional name for the style
    pub name: Option<String>,
    /// Color mappings: token name -> CSS color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing styles
#[derive(Deserialize)]
struct TomlStyle {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

/// Default palette: red guide outlines on a transparent background,
/// matching the conventional debug-overlay color
const DEFAULT_PALETTE: &str = r##"
[colors]
guide = "#ff3b30"
view = "#8e8e93"
"##;

impl OverlayStyle {
    /// Load a style from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, OverlayStyleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a style from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, OverlayStyleError> {
        let parsed: TomlStyle = toml::from_str(content)?;
        Ok(Self {
            name: parsed.metadata.and_then(|m| m.name),
            colors: parsed.colors,
        })
    }

    /// Color for guide outlines
    pub fn guide_color(&self) -> &str {
        self.colors.get("guide").map(String::as_str).unwrap_or("red")
    }

    /// Color for view outlines
    pub fn view_color(&self) -> &str {
        self.colors.get("view").map(String::as_str).unwrap_or("gray")
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::from_toml(DEFAULT_PALETTE).expect("default palette must parse")
    }
}
