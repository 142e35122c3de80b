//! Environment-derived configuration.
//!
//! Only two knobs come from the environment:
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `PORT` | `3000` | listen port, bound on `0.0.0.0` |
//! | `API_KEY` | `secret123` | shared secret required on mutating routes |
//!
//! The header carrying the secret is `x-api-key` unless overridden in code.

use std::net::{Ipv4Addr, SocketAddr};

use crate::error::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_KEY: &str = "secret123";
pub const DEFAULT_API_KEY_HEADER: &str = "x-api-key";

/// Shared-secret settings consumed by the authenticator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// Request header inspected for the secret. Matched case-insensitively.
    pub header: String,
    pub secret: String,
}

impl AuthConfig {
    pub fn new(header: impl Into<String>, secret: impl Into<String>) -> Self {
        Self { header: header.into(), secret: secret.into() }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_KEY_HEADER, DEFAULT_API_KEY)
    }
}

/// Root configuration for the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub auth: AuthConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            auth: AuthConfig::default(),
        }
    }
}

impl Config {
    /// Reads `PORT` and `API_KEY` from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same resolution as [`Config::from_env`] over an arbitrary lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|e| Error::Config(format!("PORT `{port}` is not a valid port: {e}")))?;
            config.bind_address.set_port(port);
        }

        if let Some(secret) = lookup("API_KEY") {
            if secret.is_empty() {
                return Err(Error::Config("API_KEY must not be empty".to_owned()));
            }
            config.auth.secret = secret;
        }

        Ok(config)
    }
}
