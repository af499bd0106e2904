//! Goals listing query and URI construction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Wildcard selecting every account, web property or profile.
pub const ALL: &str = "~all";

/// Selects which goals to list and how the feed is paged.
///
/// The three path ids default to [`ALL`]. Optional parameters are only
/// emitted when set; `extra` carries any parameter not modelled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalQuery {
    pub account_id: String,
    pub web_property_id: String,
    pub profile_id: String,
    pub start_index: Option<u32>,
    pub max_results: Option<u32>,
    pub ids: Option<String>,
    pub sort: Option<String>,
    pub filters: Option<String>,
    pub pretty_print: Option<bool>,
    pub extra: BTreeMap<String, String>,
}

impl Default for GoalQuery {
    fn default() -> Self {
        Self {
            account_id: ALL.to_string(),
            web_property_id: ALL.to_string(),
            profile_id: ALL.to_string(),
            start_index: None,
            max_results: None,
            ids: None,
            sort: None,
            filters: None,
            pretty_print: None,
            extra: BTreeMap::new(),
        }
    }
}

impl GoalQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(mut self, id: impl Into<String>) -> Self {
        self.account_id = id.into();
        self
    }

    pub fn web_property(mut self, id: impl Into<String>) -> Self {
        self.web_property_id = id.into();
        self
    }

    pub fn profile(mut self, id: impl Into<String>) -> Self {
        self.profile_id = id.into();
        self
    }

    /// 1-based index of the first entry to return.
    pub fn start_index(mut self, index: u32) -> Self {
        self.start_index = Some(index);
        self
    }

    pub fn max_results(mut self, max: u32) -> Self {
        self.max_results = Some(max);
        self
    }

    pub fn ids(mut self, ids: impl Into<String>) -> Self {
        self.ids = Some(ids.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn filters(mut self, filters: impl Into<String>) -> Self {
        self.filters = Some(filters.into());
        self
    }

    pub fn pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = Some(pretty);
        self
    }

    /// Adds a raw query parameter. Modelled parameters of the same name
    /// take precedence.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Query parameters keyed by their wire name, sorted by name.
    pub fn parameters(&self) -> BTreeMap<String, String> {
        let mut params = self.extra.clone();
        let modelled = [
            ("start-index", self.start_index.map(|v| v.to_string())),
            ("max-results", self.max_results.map(|v| v.to_string())),
            ("ids", self.ids.clone()),
            ("sort", self.sort.clone()),
            ("filters", self.filters.clone()),
            ("prettyprint", self.pretty_print.map(|v| v.to_string())),
        ];
        for (name, value) in modelled {
            if let Some(value) = value {
                params.insert(name.to_string(), value);
            }
        }
        params
    }
}

/// Builds the goals listing URI for `query` against `server`.
///
/// Pure; the result depends only on the query's contents, never on the
/// order parameters were added in.
pub fn goals_uri(server: &str, query: &GoalQuery) -> String {
    let mut uri = format!(
        "{}/analytics/feeds/datasources/ga/accounts/{}/webproperties/{}/profiles/{}/goals",
        server.trim_end_matches('/'),
        urlencoding::encode(&query.account_id),
        urlencoding::encode(&query.web_property_id),
        urlencoding::encode(&query.profile_id),
    );

    let params = query.parameters();
    if !params.is_empty() {
        let pairs: Vec<String> = params
            .iter()
            .map(|(name, value)| {
                format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
            })
            .collect();
        uri.push('?');
        uri.push_str(&pairs.join("&"));
    }
    uri
}
