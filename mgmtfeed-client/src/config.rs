//! Client configuration.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Host that serves the Management Feed.
pub const DEFAULT_SERVER: &str = "https://www.google.com";

/// Connection settings for [`ManagementClient`](crate::ManagementClient).
///
/// `email` and `password` are carried for callers that obtain a token
/// themselves; requests only authenticate when `auth_token` is set.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: Option<String>,
    /// Name of the calling application, sent as the User-Agent.
    pub source: Option<String>,
    /// Scheme and host, without a trailing path (e.g. `https://www.google.com`).
    pub server: String,
    /// Extra headers sent verbatim with every request.
    pub additional_headers: BTreeMap<String, String>,
    /// Pre-obtained `GoogleLogin` auth token.
    pub auth_token: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: None,
            source: None,
            server: DEFAULT_SERVER.to_string(),
            additional_headers: BTreeMap::new(),
            auth_token: None,
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_headers.insert(name.into(), value.into());
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("source", &self.source)
            .field("server", &self.server)
            .field("additional_headers", &self.additional_headers)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
