//! Error types for the AI Vision admin dashboard
//!
//! Every remote call in this workspace is fallible and every failure is
//! recoverable: errors surface as transient notices and leave prior state
//! intact. The one exception is [`Error::Authentication`], which the hosting
//! shell intercepts globally (session clear + redirect) and which must never
//! be retried per-resource.

use std::{error::Error as StdError, fmt};

/// Result type alias using our [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the AI Vision admin dashboard
#[derive(Debug)]
pub enum Error {
    /// Client-side validation failure, raised before any request is issued
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Request never reached the server or no response was received
    Network {
        /// Transport error message
        message: String,
    },

    /// Server responded non-2xx with an optional message body
    Server {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body, surfaced verbatim
        message: String,
    },

    /// The session is no longer valid (HTTP 401); non-retryable
    Authentication,

    /// Request exceeded the configured timeout
    Timeout {
        /// Timeout duration in milliseconds
        duration_ms: u64,
    },

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Response body could not be decoded
    Serialization(serde_json::Error),
}

impl Error {
    /// Create a new validation error
    #[must_use]
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new network error
    #[must_use]
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new server error
    #[must_use]
    pub fn server<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Create a new configuration error
    #[must_use]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new timeout error
    #[must_use]
    pub const fn timeout(duration_ms: u64) -> Self {
        Self::Timeout { duration_ms }
    }

    /// Whether this failure must be escalated to the hosting shell
    /// instead of being shown as a per-resource notice
    #[must_use]
    pub const fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication)
    }

    /// Message suitable for a user-facing transient notice
    #[must_use]
    pub fn notice(&self) -> String {
        match self {
            Self::Validation { field, message } => format!("{field}: {message}"),
            Self::Server { message, .. } if !message.is_empty() => message.clone(),
            Self::Server { status, .. } => format!("The server rejected the request ({status})"),
            Self::Network { .. } => "Could not reach the server. Please try again.".to_string(),
            Self::Timeout { .. } => "The request timed out. Please try again.".to_string(),
            Self::Authentication => "Your session has expired.".to_string(),
            Self::Configuration { message } => message.clone(),
            Self::Serialization(_) => "The server returned an unexpected response.".to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation { field, message } => {
                write!(f, "Validation error: {field} - {message}")
            }
            Self::Network { message } => write!(f, "Network error: {message}"),
            Self::Server { status, message } => {
                write!(f, "Server error ({status}): {message}")
            }
            Self::Authentication => write!(f, "Authentication failed"),
            Self::Timeout { duration_ms } => {
                write!(f, "Request timed out after {duration_ms}ms")
            }
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

// From implementations for automatic conversions
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}
