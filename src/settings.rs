/// User settings
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/property-table/settings.json
/// - macOS: ~/Library/Application Support/property-table/settings.json
/// - Windows: %APPDATA%\property-table\settings.json
///
/// A missing file simply means default settings.
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const APP_DIR: &str = "property-table";
const SETTINGS_FILE: &str = "settings.json";

/// Which iced theme to use
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Window theme
    pub theme: ThemeChoice,
    /// Read properties from this file instead of the bundled document
    pub data_path: Option<PathBuf>,
    /// One of off, error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Dark,
            data_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Convert to JSON string for the settings file
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON string (from the settings file)
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read settings from `path`. A file that does not exist yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::from_json(&contents)?)
    }

    /// Read settings from the default location, falling back to defaults
    /// when the file is unreadable or malformed.
    ///
    /// Runs before the logger is up, so failures are returned alongside the
    /// settings and logged by the caller.
    pub fn load() -> (Self, Option<Error>) {
        match Self::path() {
            Some(path) => match Self::load_from(&path) {
                Ok(settings) => (settings, None),
                Err(e) => (Self::default(), Some(e)),
            },
            None => (Self::default(), None),
        }
    }

    /// Get the path where the settings file is expected
    pub fn path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push(APP_DIR);
        path.push(SETTINGS_FILE);
        Some(path)
    }

    /// Configured log level; unknown names fall back to `Info`
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or_else(|_| {
            warn!("Unknown log level {:?}, using info", self.log_level);
            LevelFilter::Info
        })
    }
}

/// Directory for the log file: <cache dir>/property-table
pub fn log_dir() -> Option<PathBuf> {
    let mut path = dirs::cache_dir().or_else(dirs::home_dir)?;
    path.push(APP_DIR);
    Some(path)
}
