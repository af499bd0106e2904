//! Blocking client for the analytics Management Feed.
//!
//! [`ManagementClient::get_goals_list`] builds the goals URI from a
//! [`GoalQuery`], fetches it through a [`Transport`] and hands the body to
//! the feed parser in `mgmtfeed-xml`.
//!
//! Authentication is by pre-obtained token only (see
//! [`ClientConfig::auth_token`]).

mod client;
mod config;
mod error;
mod query;
mod transport;

pub use client::ManagementClient;
pub use config::{ClientConfig, DEFAULT_SERVER};
pub use error::{ClientError, ClientResult};
pub use query::{ALL, GoalQuery, goals_uri};
pub use transport::{HttpTransport, Transport};

pub use mgmtfeed_model::{Feed, FeedEntry, Goal};
