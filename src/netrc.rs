//! Credential lookup in the user's `~/.netrc`.
//!
//! Only two line shapes are understood, with whitespace separated fields:
//!
//! ```text
//! default login <user> password <pass>
//! machine <host> login <user> password <pass>
//! ```
//!
//! Every other line is ignored.

use crate::error::{DdnsError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Username/password pair used for HTTP Basic authentication.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// True when no entry matched.
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// A single parsed line of the authentication file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetrcLine<'a> {
    Default {
        login: &'a str,
        password: &'a str,
    },
    Machine {
        host: &'a str,
        login: &'a str,
        password: &'a str,
    },
    NoMatch,
}

impl<'a> NetrcLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens[..] {
            ["default", "login", login, "password", password] => {
                NetrcLine::Default { login, password }
            }
            ["machine", host, "login", login, "password", password] => NetrcLine::Machine {
                host,
                login,
                password,
            },
            _ => NetrcLine::NoMatch,
        }
    }
}

/// Location of the authentication file in the current user's home directory.
pub fn default_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(DdnsError::HomeDir)?;
    Ok(home.join(".netrc"))
}

/// Find the credentials to use for `machine`.
///
/// A `default` entry wins over everything and ends the scan. Otherwise the
/// last `machine` entry for `machine` is returned. When nothing matches the
/// result is an empty pair.
pub fn read_credentials(path: &Path, machine: &str) -> Result<Credentials> {
    let file_error = |source: std::io::Error| DdnsError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(file_error)?);
    let mut credentials = Credentials::default();

    // Lines that are not valid UTF-8 can still be skipped as non-matching.
    for line in reader.split(b'\n') {
        let line = line.map_err(file_error)?;
        let line = String::from_utf8_lossy(&line);

        match NetrcLine::parse(&line) {
            NetrcLine::Default { login, password } => {
                tracing::debug!("Using default entry from {}", path.display());
                return Ok(Credentials::new(login, password));
            }
            NetrcLine::Machine {
                host,
                login,
                password,
            } if host == machine => {
                credentials = Credentials::new(login, password);
            }
            _ => {}
        }
    }

    if credentials.is_empty() {
        tracing::warn!("No credentials for {} in {}", machine, path.display());
    } else {
        tracing::debug!("Using machine entry for {} from {}", machine, path.display());
    }

    Ok(credentials)
}
