//! One update run: pick the address, send it, classify the answer.

use crate::config::Target;
use crate::detector::IpResolver;
use crate::error::{DdnsError, Result};
use crate::providers::{DdnsProvider, ProviderResponse};

/// Drives a single update against one provider.
pub struct Updater<'a> {
    resolver: &'a dyn IpResolver,
    provider: &'a dyn DdnsProvider,
}

impl<'a> Updater<'a> {
    pub fn new(resolver: &'a dyn IpResolver, provider: &'a dyn DdnsProvider) -> Self {
        Self { resolver, provider }
    }

    /// Update `target`, returning the provider's answer when it accepted it.
    ///
    /// The resolver is only consulted when the target carries no address.
    pub async fn run(&self, target: &Target) -> Result<ProviderResponse> {
        if target.hostname.is_empty() {
            return Err(DdnsError::Validation(
                "Must specify the hostname to update".to_string(),
            ));
        }

        let ip = match target.ip.as_deref().filter(|ip| !ip.is_empty()) {
            Some(ip) => ip.to_string(),
            None => self.resolver.resolve().await?,
        };
        if ip.is_empty() {
            return Err(DdnsError::Validation(
                "Unable to determine the IP address, aborting".to_string(),
            ));
        }

        tracing::debug!("Updating {} to {}", target.hostname, ip);
        let raw = self.provider.update_ip(&target.hostname, &ip).await?;
        let response = ProviderResponse::new(&raw);

        if !response.is_success() {
            if let Some(description) = response.description() {
                tracing::debug!("{}: {}", response.code(), description);
            }
            return Err(DdnsError::Provider {
                provider: self.provider.name().to_string(),
                message: response.to_string(),
            });
        }

        Ok(response)
    }
}
