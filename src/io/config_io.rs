use std::fs;
use std::path::Path;

use crate::model::config::UiConfig;

/// Error type for theme file loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read theme file: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid theme file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read a theme file. Startup-only; the file is never written back.
pub fn read_theme(path: &Path) -> Result<UiConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    let config: UiConfig = toml::from_str(&text)?;
    Ok(config)
}
