//! Resolved client configuration
//!
//! The page origin is injected at startup instead of being read from
//! ambient state, so every piece that derives URLs from it can be tested
//! with a literal origin string.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Path suffix appended to the origin to reach the backend API
pub const API_SUFFIX: &str = "/api";

/// Port used when the origin does not carry an explicit one
pub const DEFAULT_PORT: u16 = 80;

/// Request timeout applied to every API call
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// The origin the application is served from
///
/// `port` is `None` when the origin string has no port or names the
/// scheme's default port, the same way a browser location reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Origin {
    pub protocol: String,
    pub hostname: String,
    pub port: Option<u16>,
}

impl Origin {
    /// Parse an origin such as `http://host:8080`. Any path, query or
    /// fragment is ignored.
    pub fn parse(origin: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidOrigin {
            origin: origin.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(origin.trim()).map_err(|e| invalid(&e.to_string()))?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(&format!("unsupported scheme '{}'", other))),
        }

        let hostname = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| invalid("missing host"))?
            .to_string();

        Ok(Self {
            protocol: url.scheme().to_string(),
            hostname,
            port: url.port(),
        })
    }

    /// Port with the fallback applied
    pub fn effective_port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// `{protocol}://{hostname}:{port}` with the port always spelled out
    pub fn server_root(&self) -> String {
        format!(
            "{}://{}:{}",
            self.protocol,
            self.hostname,
            self.effective_port()
        )
    }

    /// Base URL for API requests
    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.server_root(), API_SUFFIX)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}://{}:{}", self.protocol, self.hostname, port),
            None => write!(f, "{}://{}", self.protocol, self.hostname),
        }
    }
}

impl FromStr for Origin {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Origin {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Origin> for String {
    fn from(origin: Origin) -> Self {
        origin.to_string()
    }
}

/// A fully resolved client configuration ready for use by core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin the API base URL is derived from
    pub origin: Origin,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config for the given origin with the default timeout
    pub fn new(origin: Origin) -> Self {
        Self {
            origin,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Parse the origin string and build a config from it
    pub fn from_origin(origin: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(Origin::parse(origin)?))
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL every request path is appended to
    pub fn base_url(&self) -> String {
        self.origin.api_base_url()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms".to_string(),
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}
