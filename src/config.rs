use anyhow::{bail, Result};
use std::path::PathBuf;

/// How frames are painted by the demo binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    Text,
    Json,
}

impl RenderFormat {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(RenderFormat::Text),
            "json" => Ok(RenderFormat::Json),
            other => bail!("Invalid WIDGET_RENDER_FORMAT: '{}'. Expected text or json", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Selection
    /// Initial language code; `None` means the catalog's first language
    pub language: Option<String>,

    // Rendering
    pub render_format: RenderFormat,

    // Study material
    /// Directory holding the real asset; `None` uses the static descriptor
    pub asset_dir: Option<PathBuf>,
    pub asset_file: String,
    pub download_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Selection
            language: std::env::var("WIDGET_LANGUAGE")
                .ok()
                .filter(|v| !v.trim().is_empty()),

            // Rendering
            render_format: match std::env::var("WIDGET_RENDER_FORMAT") {
                Ok(v) => RenderFormat::parse(&v)?,
                Err(_) => RenderFormat::Text,
            },

            // Study material
            asset_dir: std::env::var("WIDGET_ASSET_DIR").ok().map(PathBuf::from),
            asset_file: std::env::var("WIDGET_ASSET_FILE")
                .unwrap_or_else(|_| crate::content::DEFAULT_ASSET_FILE.to_string()),
            download_dir: std::env::var("WIDGET_DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("downloads")),
        })
    }
}
