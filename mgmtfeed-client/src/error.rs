//! Error types for the management client.

use mgmtfeed_xml::XmlError;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while fetching a feed.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Connection, TLS, timeout or body read failure, kept as reported by
    /// the HTTP client (`is_connect()`, `is_timeout()`, source chain).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The client could not be built from its configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The response body was not a valid feed.
    #[error("parse error: {0}")]
    Parse(#[from] XmlError),
}

impl ClientError {
    /// True when the server rejected the credentials (401 or 403).
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Http { status: 401 | 403, .. })
    }

    /// HTTP status of the failed request, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
