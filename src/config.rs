//! Application configuration.
//!
//! Configuration is stored in `.postview/config.yaml` and includes:
//! - Base URL of the posts API
//! - Request timeout for remote calls

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PostviewError, Result};
use crate::types::{CONFIG_DIR, DEFAULT_BASE_URL};

/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV: &str = "POSTVIEW_BASE_URL";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the posts API (default: jsonplaceholder)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Remote request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            request_timeout: default_request_timeout(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_DIR).join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            PostviewError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PostviewError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            PostviewError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        Ok(())
    }

    /// Get the base URL from environment variable or config, falling back to the default
    pub fn base_url(&self) -> Result<Url> {
        if let Ok(url) = env::var(BASE_URL_ENV)
            && !url.is_empty()
        {
            return Ok(Url::parse(&url)?);
        }

        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Ok(Url::parse(raw)?)
    }

    /// Set the base URL, rejecting anything that is not an absolute http(s) URL
    pub fn set_base_url(&mut self, raw: &str) -> Result<()> {
        let url = Url::parse(raw)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(PostviewError::Config(format!(
                "base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        self.base_url = Some(raw.to_string());
        Ok(())
    }

    /// Get the remote request timeout duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Set the remote request timeout in seconds
    pub fn set_request_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(PostviewError::Config(
                "request_timeout must be at least 1 second".to_string(),
            ));
        }
        self.request_timeout = seconds;
        Ok(())
    }
}
