//! The HTTP seam between the client and the network.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Protocol version header required by the feed.
const GDATA_VERSION: HeaderName = HeaderName::from_static("gdata-version");

/// Performs a GET and returns the body of a successful response.
pub trait Transport {
    fn get(&self, uri: &str) -> ClientResult<String>;
}

/// [`Transport`] over a blocking `reqwest` client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a client that sends the protocol, identity and auth headers
    /// derived from `config` on every request.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers(config)?)
            .build()
            .map_err(|e| ClientError::Config(format!("http client: {e}")))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, uri: &str) -> ClientResult<String> {
        debug!(uri, "GET");
        let response = self.client.get(uri).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|e| {
                debug!(error = %e, uri, "Failed to read error response body");
                String::new()
            });
            warn!(status = status.as_u16(), uri, "Request rejected");
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text()?)
    }
}

/// Headers sent with every request. Additional headers override the
/// built-in ones of the same name.
fn default_headers(config: &ClientConfig) -> ClientResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(GDATA_VERSION, HeaderValue::from_static("2"));

    let user_agent = config.source.clone().unwrap_or_else(|| {
        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    });
    let value = HeaderValue::from_str(&user_agent)
        .map_err(|e| ClientError::Config(format!("source: {e}")))?;
    headers.insert(USER_AGENT, value);

    if let Some(token) = &config.auth_token {
        let value = HeaderValue::from_str(&format!("GoogleLogin auth={token}"))
            .map_err(|e| ClientError::Config(format!("auth token: {e}")))?;
        headers.insert(AUTHORIZATION, value);
    }

    for (name, value) in &config.additional_headers {
        let header = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::Config(format!("header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ClientError::Config(format!("header {name}: {e}")))?;
        headers.insert(header, value);
    }
    Ok(headers)
}
