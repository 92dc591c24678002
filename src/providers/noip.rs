//! No-IP DDNS provider.

use super::DdnsProvider;
use crate::config::Config;
use crate::error::Result;
use crate::netrc;
use async_trait::async_trait;
use std::path::PathBuf;

/// No-IP update endpoint.
pub const DEFAULT_UPDATE_URL: &str = "http://dynupdate.no-ip.com/nic/update";

/// Machine name looked up in the authentication file.
pub const DEFAULT_MACHINE: &str = "dynupdate.no-ip.com";

/// No-IP DDNS provider.
pub struct NoIpProvider {
    client: reqwest::Client,
    update_url: String,
    machine: String,
    netrc_path: PathBuf,
}

impl NoIpProvider {
    /// Create a new No-IP provider reading credentials from `netrc_path`.
    pub fn new(netrc_path: PathBuf) -> Self {
        Self::with_update_url(
            DEFAULT_UPDATE_URL.to_string(),
            DEFAULT_MACHINE.to_string(),
            netrc_path,
        )
    }

    /// Create with custom endpoint and machine name (for testing).
    pub fn with_update_url(update_url: String, machine: String, netrc_path: PathBuf) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            update_url,
            machine,
            netrc_path,
        }
    }

    /// Create from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_update_url(
            config.update_url.clone(),
            config.machine.clone(),
            config.netrc_path()?,
        ))
    }
}

#[async_trait]
impl DdnsProvider for NoIpProvider {
    fn name(&self) -> &'static str {
        "noip"
    }

    async fn update_ip(&self, hostname: &str, ip: &str) -> Result<String> {
        let credentials = netrc::read_credentials(&self.netrc_path, &self.machine)?;

        let response = self
            .client
            .get(&self.update_url)
            .query(&[("hostname", hostname), ("myip", ip)])
            .basic_auth(&credentials.username, Some(&credentials.password))
            .send()
            .await?;

        // No-IP reports rejections in the body, the status is not meaningful here.
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("{} answered {}: {:?}", self.update_url, status, text);

        Ok(text.trim().to_string())
    }
}
