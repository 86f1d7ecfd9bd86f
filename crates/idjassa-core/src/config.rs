//! Application configuration management.
//!
//! This module handles loading and saving the client configuration: which
//! API origin to talk to, an optional request timeout and the last phone
//! number used to sign in.
//!
//! Configuration is stored at `~/.config/idjassa/config.json`; the session
//! file lives in the user cache directory.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::{ApiClient, DEFAULT_API_URL};
use crate::auth::SessionStore;

/// Application name used for config/cache directory paths
const APP_NAME: &str = "idjassa";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the API origin
pub const API_URL_ENV: &str = "IDJASSA_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub api_url: Option<String>,
    /// Unset means requests wait for the server indefinitely
    pub request_timeout_secs: Option<u64>,
    pub last_telephone: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&contents).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory holding the persisted session
    pub fn session_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    /// Environment first, then the config file, then production
    pub fn api_url(&self) -> String {
        self.resolve_api_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_url(&self, from_env: Option<String>) -> String {
        from_env
            .filter(|url| !url.is_empty())
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn build_client(&self, session: SessionStore) -> Result<ApiClient> {
        ApiClient::with_timeout(&self.api_url(), session, self.request_timeout())
            .context("Failed to build HTTP client")
    }
}
