//! # noip-update
//!
//! A No-IP dynamic DNS update client.
//!
//! One run detects the public address (unless one is given), reads the
//! credentials for the update endpoint from `~/.netrc`, sends a single
//! authenticated update request and reports the provider's answer.
//!
//! ## Usage
//!
//! ```bash
//! # Detect the public address and update the record
//! noip-update --hostname example.ddns.net
//!
//! # Use an explicit address
//! noip-update --hostname example.ddns.net --ip 203.0.113.5
//! ```
//!
//! Credentials come from a `machine dynupdate.no-ip.com login <user> password <pass>`
//! line, or from a `default login <user> password <pass>` line which takes precedence.

pub mod config;
pub mod detector;
pub mod error;
pub mod netrc;
pub mod providers;
pub mod updater;

pub use config::{Config, Target};
pub use detector::{IpDetector, IpResolver};
pub use error::{DdnsError, Result};
pub use providers::{DdnsProvider, NoIpProvider, ProviderResponse};
pub use updater::Updater;

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
