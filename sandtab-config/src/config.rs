//! Tab-strip configuration management.
//!
//! Provides loading, saving, and default values for the tab strip. The
//! config file lives at `<config_dir>/sandtab/config.yaml` and every field
//! is optional; unset fields fall back to their defaults.

use crate::error::ConfigError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_pinned_file() -> String {
    "index.html".to_string()
}

fn default_min_reorder_files() -> usize {
    3
}

fn default_drag_handle() -> bool {
    true
}

/// Tab-strip configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the pinned (required) file. The pinned file is always shown,
    /// can never be dragged, and nothing can be reordered in front of it.
    pub pinned_file: String,

    /// Minimum number of visible files before drag reordering is enabled.
    /// With only the pinned file plus one other file there is nowhere
    /// meaningful to move anything, so the floor is 3.
    pub min_reorder_files: usize,

    /// Whether hovering a tab reveals the drag-handle affordance.
    pub drag_handle: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pinned_file: default_pinned_file(),
            min_reorder_files: default_min_reorder_files(),
            drag_handle: default_drag_handle(),
        }
    }
}

impl Config {
    /// Path of the config file: `<config_dir>/sandtab/config.yaml`.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sandtab").join("config.yaml"))
    }

    /// Load configuration from the default path.
    ///
    /// A missing file yields the default configuration; a present but
    /// malformed or invalid file is an error.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config: Config = serde_yaml_ng::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default path, creating the directory if
    /// needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| ConfigError::Validation("no config directory available".into()))?;
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::Parse)?;
        fs::write(path, yaml).map_err(ConfigError::Io)?;
        log::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Check field values for semantic validity.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.pinned_file.is_empty() {
            return Err(ConfigError::Validation(
                "pinned_file must not be empty".into(),
            ));
        }
        if self.min_reorder_files < 2 {
            return Err(ConfigError::Validation(format!(
                "min_reorder_files must be at least 2, got {}",
                self.min_reorder_files
            )));
        }
        Ok(())
    }
}
