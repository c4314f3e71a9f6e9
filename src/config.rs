//! Application configuration.
//!
//! An optional JSON file at `~/.class-roster/config.json`. Every key may be
//! omitted; command-line flags take precedence over the file, and the file
//! over the [`Environment`](crate::environment::Environment) defaults.

use crate::browser::{DisplayMode, Field};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Roster endpoint; overrides the environment default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster_url: Option<String>,

    /// Origin for relative media paths; overrides the environment default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_origin: Option<String>,

    /// Header chrome title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,

    /// Display mode the browser opens in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_mode: Option<DisplayMode>,

    /// Card fields hidden at start-up.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hidden_fields: Vec<Field>,
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Like [`Config::load_from_file`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }
}

/// `~/.class-roster/config.json`
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine the home directory",
        )
    })?;
    Ok(home.join(".class-roster").join("config.json"))
}
