//! Persistent CLI settings

use std::path::Path;

use gallery_table::{DEFAULT_PAGE_SIZE, ViewMode};
use serde::Deserialize;
use serde::Serialize;
use simplelog::LevelFilter;

use crate::error::CliError;

/// Settings read from `settings.toml` in the config directory.
///
/// Every key is optional. Command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub page_size: usize,
    /// Width used for the column visibility policy.
    pub viewport_width: u32,
    pub view_mode: ViewMode,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            viewport_width: 1280,
            view_mode: ViewMode::Table,
            log_level: "debug".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(value: &str) -> Result<Self, CliError> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    /// Loads settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        match std::fs::read_to_string(path) {
            Ok(value) => Self::from_toml(&value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parsed log level, `debug` when unrecognised.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Debug)
    }
}
