//! DDNS provider implementations.

mod noip;

#[cfg(test)]
mod tests;

pub use noip::{NoIpProvider, DEFAULT_MACHINE, DEFAULT_UPDATE_URL};

use crate::error::Result;
use async_trait::async_trait;

/// Trait for DDNS providers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DdnsProvider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &'static str;

    /// Bind `hostname` to `ip` and return the provider's raw answer.
    async fn update_ip(&self, hostname: &str, ip: &str) -> Result<String>;
}

/// Plain-text answer of a dyndns2-style update endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    text: String,
}

impl ProviderResponse {
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.trim().to_string(),
        }
    }

    /// `good <ip>` and `nochg <ip>` both mean the record holds the address.
    pub fn is_success(&self) -> bool {
        self.text.starts_with("good") || self.text.starts_with("nochg")
    }

    /// Leading status token, e.g. `good` or `badauth`.
    pub fn code(&self) -> &str {
        self.text.split_whitespace().next().unwrap_or("")
    }

    /// Human readable meaning of the documented No-IP status codes.
    pub fn description(&self) -> Option<&'static str> {
        let description = match self.code() {
            "good" => "DNS hostname update successful",
            "nochg" => "IP address is current, no update performed",
            "nohost" => "Hostname supplied does not exist under specified account",
            "badauth" => "Invalid username password combination",
            "badagent" => "Client disabled",
            "!donator" => "Feature not available to the specified user",
            "abuse" => "Username is blocked due to abuse",
            "911" => "A fatal error on the provider side, retry later",
            _ => return None,
        };
        Some(description)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for ProviderResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
