//! User settings persistence.
//!
//! Only dashboard preferences are stored here. Readings are never written
//! to disk.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::analysis::FilterSpec;
use crate::generator::METRIC_TYPES;
use crate::session::Mode;

/// Allowed refresh interval, in seconds
pub const REFRESH_INTERVAL_RANGE: RangeInclusive<u64> = 2..=30;

/// Refresh interval used when nothing is configured
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 5;

/// Errors that can occur while saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write settings file: {0}")]
    Write(std::io::Error),
}

/// Dashboard preferences that persist across sessions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_true")]
    pub auto_refresh: bool,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
    #[serde(default)]
    pub show_table: bool,
    #[serde(default = "default_filter")]
    pub filter: FilterSpec,
}

fn default_version() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_refresh_interval() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

/// Both metric types selected, no sensor narrowing
fn default_filter() -> FilterSpec {
    FilterSpec::new(METRIC_TYPES.iter().copied(), BTreeSet::<String>::new())
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            mode: Mode::default(),
            auto_refresh: true,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            show_table: false,
            filter: default_filter(),
        }
    }
}

impl DashboardSettings {
    /// Get the config directory path for StreamDash
    pub fn get_config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::data_dir().map(|p| p.join("StreamDash"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|p| p.join("StreamDash"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            dirs::config_dir().map(|p| p.join("streamdash"))
        }
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from the default location
    pub fn load() -> Self {
        match Self::get_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from `path`, falling back to defaults if missing or corrupt
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content),
            Err(e) => {
                tracing::warn!("Failed to read settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse settings JSON, clamping out-of-range values
    pub fn from_json(content: &str) -> Self {
        let settings: Self = serde_json::from_str(content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring corrupt settings file: {}", e);
            Self::default()
        });
        settings.clamped()
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::get_settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save settings to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SettingsError::CreateDir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(SettingsError::Write)?;

        Ok(())
    }

    /// Refresh interval forced into the supported range
    pub fn clamped(mut self) -> Self {
        self.refresh_interval_secs = self
            .refresh_interval_secs
            .clamp(*REFRESH_INTERVAL_RANGE.start(), *REFRESH_INTERVAL_RANGE.end());
        self
    }
}
