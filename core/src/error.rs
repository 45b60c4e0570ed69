//! Error types and handling for floorpay core

use thiserror::Error;

/// Result type alias for floorpay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for floorpay core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// API request errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Login gate errors
    #[error("Login error: {0}")]
    Gate(#[from] GateError),

    /// Routing errors
    #[error("Router error: {0}")]
    Router(#[from] RouterError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Configuration-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

/// HTTP client errors
///
/// The client makes no finer distinction than "it failed"; the variants only
/// exist so that logs say which way it failed.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timed out after {timeout_ms} ms: {url}")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("HTTP {status} from {url}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Failed to encode request body: {message}")]
    Encode { message: String },
}

impl ApiError {
    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Login gate errors
#[derive(Error, Debug)]
pub enum GateError {
    /// Prompt was cancelled or left blank
    #[error("No password entered")]
    MissingCredential,

    /// Login request failed or was refused
    #[error("Login rejected: {0}")]
    LoginRejected(#[source] ApiError),

    #[error("Invalid login flow transition: {event} while {from}")]
    InvalidTransition {
        from: &'static str,
        event: &'static str,
    },
}

/// Structured error type for router operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("No routes configured")]
    NoRoutes,

    #[error("Route '{0}' not found")]
    RouteNotFound(String),

    #[error("Initial route '{0}' not found in configuration")]
    InitialRouteMissing(String),

    #[error("Duplicate route path '{0}'")]
    DuplicatePath(String),

    #[error("Duplicate route id '{0}'")]
    DuplicateId(String),
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
