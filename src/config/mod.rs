// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Both fields are optional in the file; effective values come from the
//! accessor methods so a missing or partial file behaves like the defaults.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedBanner";

/// Display time applied to requests that do not carry a duration.
pub const DEFAULT_DURATION_MS: u64 = 60_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Whether the one-time startup banner is shown.
    #[serde(default)]
    pub startup_banner: Option<bool>,
    /// Fallback display duration in milliseconds.
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            startup_banner: Some(true),
            default_duration_ms: Some(DEFAULT_DURATION_MS),
        }
    }
}

impl Config {
    /// Returns whether the startup banner should be shown.
    #[must_use]
    pub fn startup_banner(&self) -> bool {
        self.startup_banner.unwrap_or(true)
    }

    /// Returns the fallback display duration.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms.unwrap_or(DEFAULT_DURATION_MS))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, honoring an optional directory override.
pub fn load_with_override(config_dir: Option<&Path>) -> Result<Config> {
    let path = match config_dir {
        Some(dir) => Some(dir.join(CONFIG_FILE)),
        None => get_default_config_path(),
    };
    if let Some(path) = path {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load() -> Result<Config> {
    load_with_override(None)
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
