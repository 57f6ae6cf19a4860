//! Client configuration.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, serde_as};

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// Connection settings for a single Wiz device.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wiz_udp_client::ClientConfig;
///
/// let config = ClientConfig::new("192.168.1.100")
///     .with_read_timeout(Duration::from_millis(500));
/// assert_eq!(config.port, 38899);
/// assert_eq!(config.buffer_size, 1024);
/// assert_eq!(config.address(), "192.168.1.100:38899");
/// ```
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub host: String,
    #[serde(default = "ClientConfig::default_port")]
    pub port: u16,
    /// How long `exchange` waits for the reply datagram.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "read_timeout_ms", default = "ClientConfig::default_read_timeout")]
    pub read_timeout: Duration,
    /// Size of the receive buffer; longer replies are truncated by the socket.
    #[serde(default = "ClientConfig::default_buffer_size")]
    pub buffer_size: usize,
}

impl ClientConfig {
    pub const PORT: u16 = 38899;
    pub const TIMEOUT_MS: u64 = 1000;
    pub const BUFFER_SIZE: usize = 1024;

    pub const ENV_HOST: &'static str = "WIZ_HOST";
    pub const ENV_PORT: &'static str = "WIZ_PORT";
    pub const ENV_TIMEOUT_MS: &'static str = "WIZ_TIMEOUT_MS";
    pub const ENV_BUFFER_SIZE: &'static str = "WIZ_BUFFER_SIZE";

    pub fn new(host: &str) -> Self {
        ClientConfig {
            host: host.to_string(),
            port: Self::PORT,
            read_timeout: Self::default_read_timeout(),
            buffer_size: Self::BUFFER_SIZE,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// `host:port` string used for address resolution.
    pub fn address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Reads the configuration from `WIZ_HOST`, `WIZ_PORT`, `WIZ_TIMEOUT_MS`
    /// and `WIZ_BUFFER_SIZE`. Only the host is required.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(Self::ENV_HOST)
            .filter(|h| !h.trim().is_empty())
            .ok_or_else(|| Error::Validation(format!("{} must be set", Self::ENV_HOST)))?;

        let mut config = ClientConfig::new(host.trim());
        if let Some(port) = parse_var(&lookup, Self::ENV_PORT)? {
            config.port = port;
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, Self::ENV_TIMEOUT_MS)? {
            config.read_timeout = Duration::from_millis(ms);
        }
        if let Some(size) = parse_var(&lookup, Self::ENV_BUFFER_SIZE)? {
            config.buffer_size = size;
        }
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that would make every exchange fail.
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(Error::validation("host must not be empty"));
        }
        if self.port == 0 {
            return Err(Error::validation("port must not be 0"));
        }
        if self.read_timeout.is_zero() {
            return Err(Error::validation("read timeout must be greater than zero"));
        }
        if self.buffer_size == 0 {
            return Err(Error::validation("buffer size must be greater than zero"));
        }
        Ok(())
    }

    fn default_port() -> u16 {
        Self::PORT
    }

    fn default_read_timeout() -> Duration {
        Duration::from_millis(Self::TIMEOUT_MS)
    }

    fn default_buffer_size() -> usize {
        Self::BUFFER_SIZE
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Validation(format!("{key} has an invalid value: {raw}"))),
    }
}
