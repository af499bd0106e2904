//! The Management Client: goals listing over a [`Transport`].

use mgmtfeed_model::Feed;
use tracing::info;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::query::{GoalQuery, goals_uri};
use crate::transport::{HttpTransport, Transport};

/// Client for the analytics Management Feed.
///
/// Holds no per-request state; each call builds its URI, performs one GET
/// and parses the body.
pub struct ManagementClient<T: Transport = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl ManagementClient<HttpTransport> {
    /// Creates a client that talks HTTP to `config.server`.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> ManagementClient<T> {
    /// Creates a client over a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// URI of the goals listing for `query` on the configured server.
    pub fn goals_uri(&self, query: &GoalQuery) -> String {
        goals_uri(&self.config.server, query)
    }

    /// Fetches and parses the goals listing.
    ///
    /// Transport and parse errors are returned unchanged; no retries.
    pub fn get_goals_list(&self, query: &GoalQuery) -> ClientResult<Feed> {
        let uri = self.goals_uri(query);
        let body = self.transport.get(&uri)?;
        let feed = mgmtfeed_xml::parse_feed(&body)?;
        info!(entries = feed.entries.len(), "Fetched goals list");
        Ok(feed)
    }
}
