//! Public IP detection.

use crate::error::{DdnsError, Result};
use async_trait::async_trait;

/// Default "what is my IP" service, answers with the bare address.
pub const DEFAULT_IP_SERVICE: &str = "http://myexternalip.com/raw";

/// Source of the caller's public address.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IpResolver: Send + Sync {
    /// Resolve the current public address.
    async fn resolve(&self) -> Result<String>;
}

/// Looks up the public address with a single request to an IP-echo service.
pub struct IpDetector {
    client: reqwest::Client,
    service: String,
}

impl IpDetector {
    /// Create a new IP detector using the default service.
    pub fn new() -> Self {
        Self::with_service(DEFAULT_IP_SERVICE.to_string())
    }

    /// Create a new IP detector with a custom service.
    pub fn with_service(service: String) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .build()
            .unwrap_or_default();

        Self { client, service }
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

impl Default for IpDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IpResolver for IpDetector {
    async fn resolve(&self) -> Result<String> {
        let response = self.client.get(&self.service).send().await?;

        if !response.status().is_success() {
            return Err(DdnsError::Network(format!(
                "HTTP {} from {}",
                response.status(),
                self.service
            )));
        }

        let text = response.text().await?;
        let ip = text.trim_end_matches(['\r', '\n']).to_string();

        tracing::debug!("Detected address {:?} from {}", ip, self.service);
        Ok(ip)
    }
}
