//! Dev-server configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "web";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid HOST `{0}`: expected an IP address")]
    InvalidHost(String),
    #[error("invalid PORT `{0}`: expected an integer in 0..=65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `STATIC_DIR`: directory holding `index.html` and the wasm bundle, default `web`
    ///
    /// # Errors
    ///
    /// Returns `Err` if `HOST` or `PORT` is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `HOST` or `PORT` is set but does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host_raw = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost(host_raw.clone()))?;

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let static_dir = get("STATIC_DIR").map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);

        Ok(Self { host, port, static_dir })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
