//! Application preferences
//!
//! Renderer settings persisted as JSON in the user's config directory.
//! Load failures fall back to defaults; the design itself is never
//! persisted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use bd_renderer::RendererConfig;

/// Errors from loading or saving preferences
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read preferences: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse preferences: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Persisted application preferences
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Renderer settings applied at startup
    #[serde(default)]
    pub renderer: RendererConfig,
}

impl AppConfig {
    /// Default preference file location
    pub fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
        Some(base.join("barrel-designer").join("config.json"))
    }

    /// Load preferences from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Save preferences, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Load from the default location, falling back to defaults
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!("Falling back to default preferences: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let mut config = AppConfig::default();
        config.renderer.grid.enabled = true;
        config.renderer.shadow.map_size = 1024;

        let text = serde_json::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
