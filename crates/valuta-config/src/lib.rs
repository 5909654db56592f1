//! On-disk configuration for valuta.
//!
//! A small TOML file under the platform config directory holds the
//! persisted theme choice and the backdrop simulation tuning. Loading
//! degrades to defaults on any error — a missing or malformed file never
//! stops the app from starting.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use valuta_core::{SimulationConfig, Theme};

const CONFIG_FILE: &str = "config.toml";

/// Persistent app settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme choice, restored at startup and saved when toggled.
    pub theme: Theme,
    /// Backdrop simulation tuning.
    pub simulation: SimulationConfig,
}

impl Config {
    /// Platform config file path, e.g. `~/.config/valuta/config.toml`.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "valuta").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from disk, falling back to defaults if the file is missing
    /// or unreadable.
    pub fn load() -> Self {
        Self::path()
            .and_then(|path| fs::read_to_string(path).ok())
            .map(|raw| Self::from_toml(&raw))
            .unwrap_or_default()
    }

    /// Parse a TOML document, falling back to defaults when it does not
    /// parse. Unknown theme names inside a valid document already
    /// degrade to dark during deserialization.
    pub fn from_toml(raw: &str) -> Self {
        toml::from_str(raw).unwrap_or_default()
    }

    /// Write the whole config file back to disk, creating the config
    /// directory if needed.
    pub fn save(&self) -> io::Result<()> {
        let Some(path) = Self::path() else {
            // No home directory to resolve a config dir under; nothing
            // to persist to.
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let body = toml::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, body)
    }
}
