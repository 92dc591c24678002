//! Configuration management for noip-update.

use crate::detector::DEFAULT_IP_SERVICE;
use crate::error::{DdnsError, Result};
use crate::netrc;
use crate::providers::{DEFAULT_MACHINE, DEFAULT_UPDATE_URL};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings file structure. Every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// IP echo service answering with the caller's address.
    #[serde(default = "default_ip_service")]
    pub ip_service: String,

    /// Provider update endpoint.
    #[serde(default = "default_update_url")]
    pub update_url: String,

    /// Machine name to look up in the authentication file.
    #[serde(default = "default_machine")]
    pub machine: String,

    /// Authentication file (default: `~/.netrc`).
    #[serde(default)]
    pub netrc: Option<PathBuf>,
}

fn default_ip_service() -> String {
    DEFAULT_IP_SERVICE.to_string()
}

fn default_update_url() -> String {
    DEFAULT_UPDATE_URL.to_string()
}

fn default_machine() -> String {
    DEFAULT_MACHINE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip_service: default_ip_service(),
            update_url: default_update_url(),
            machine: default_machine(),
            netrc: None,
        }
    }
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DdnsError::Config("Could not find config directory".to_string()))?;

        Ok(config_dir.join("noip-update").join("config.toml"))
    }

    /// Load configuration from a specific path, defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Authentication file to read credentials from.
    pub fn netrc_path(&self) -> Result<PathBuf> {
        match &self.netrc {
            Some(path) => Ok(path.clone()),
            None => netrc::default_path(),
        }
    }
}

/// The binding requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub hostname: String,
    pub ip: Option<String>,
}

impl Target {
    pub fn new(hostname: impl Into<String>, ip: Option<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ip: ip.filter(|ip| !ip.is_empty()),
        }
    }
}
