//! Configuration loading
//!
//! API endpoint resolution follows a fixed priority order:
//! 1. Explicit override (highest priority, e.g. from a launcher flag)
//! 2. `PICTUNE_API_URL` environment variable
//! 3. TOML config file (`~/.config/pictune/config.toml`)
//! 4. Compiled default (fallback)
//!
//! An invalid config file degrades to defaults with a warning; a missing one
//! is the normal case and only debug-logged. Neither aborts startup.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable consulted for the API base URL
pub const API_URL_ENV: &str = "PICTUNE_API_URL";

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Clip-export polling tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClipPollConfig {
    /// First poll delay in milliseconds
    pub initial_interval_ms: u64,
    /// Backoff cap in milliseconds
    pub max_interval_ms: u64,
    /// Give up after this many status checks
    pub max_attempts: u32,
}

impl Default for ClipPollConfig {
    fn default() -> Self {
        Self {
            initial_interval_ms: 1_000,
            max_interval_ms: 30_000,
            max_attempts: 20,
        }
    }
}

impl ClipPollConfig {
    pub fn initial_interval(&self) -> Duration {
        Duration::from_millis(self.initial_interval_ms)
    }

    pub fn max_interval(&self) -> Duration {
        Duration::from_millis(self.max_interval_ms)
    }
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the PicTune backend, without trailing slash
    pub api_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    pub clip_poll: ClipPollConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            clip_poll: ClipPollConfig::default(),
        }
    }
}

impl Config {
    /// Resolve configuration following the priority order documented above.
    ///
    /// `override_url` wins outright when given. The config file only
    /// contributes values the environment did not.
    pub fn resolve(override_url: Option<&str>) -> Config {
        let mut config = match load_config_file() {
            Ok(path) => match parse_config_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Invalid config file, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::debug!(error = %e, "No config file, using defaults");
                Config::default()
            }
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                config.api_url = url;
            }
        }

        if let Some(url) = override_url {
            config.api_url = url.to_string();
        }

        config.normalize();
        config
    }

    /// Parse a TOML document into a config, applying defaults for absent keys.
    pub fn from_toml(content: &str) -> Result<Config> {
        let mut config: Config =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.normalize();
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn normalize(&mut self) {
        while self.api_url.ends_with('/') {
            self.api_url.pop();
        }
    }
}

/// Locate the platform config file, if any.
fn load_config_file() -> Result<PathBuf> {
    let path = dirs::config_dir()
        .map(|d| d.join("pictune").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if path.exists() {
        Ok(path)
    } else {
        Err(Error::Config(format!("Config file not found: {:?}", path)))
    }
}

fn parse_config_file(path: &PathBuf) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    Config::from_toml(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.clip_poll.max_attempts, 20);
    }

    #[test]
    fn test_from_toml_partial_document() {
        let config = Config::from_toml("api_url = \"https://api.example.com/\"").unwrap();
        // Trailing slash stripped, other keys defaulted
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.clip_poll, ClipPollConfig::default());
    }

    #[test]
    fn test_from_toml_full_document() {
        let content = r#"
            api_url = "https://api.example.com"
            request_timeout_secs = 10

            [clip_poll]
            initial_interval_ms = 500
            max_interval_ms = 8000
            max_attempts = 5
        "#;
        let config = Config::from_toml(content).unwrap();
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.clip_poll.initial_interval(), Duration::from_millis(500));
        assert_eq!(config.clip_poll.max_interval(), Duration::from_millis(8000));
        assert_eq!(config.clip_poll.max_attempts, 5);
    }

    #[test]
    fn test_from_toml_invalid_document() {
        assert!(Config::from_toml("api_url = [1, 2]").is_err());
    }
}
