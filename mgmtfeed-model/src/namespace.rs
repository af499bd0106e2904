//! XML namespaces used by the Management Feed.

use std::fmt;

/// Atom syndication namespace (`feed`, `entry`, `id`, `title`, `updated`).
pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Goal-specific namespace (`ga:goal`, `ga:destination`, `ga:step`, `ga:engagement`).
pub const GA_NS: &str = "http://schemas.google.com/ga/2009";

/// Generic analytics namespace (`dxp:property`).
pub const DXP_NS: &str = "http://schemas.google.com/analytics/2009";

/// OpenSearch namespace for the feed's result counters.
pub const OPENSEARCH_NS: &str = "http://a9.com/-/spec/opensearch/1.1/";

/// A namespace-qualified element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QName {
    pub namespace: &'static str,
    pub local: &'static str,
}

impl QName {
    #[must_use]
    pub const fn new(namespace: &'static str, local: &'static str) -> Self {
        Self { namespace, local }
    }

    /// Shorthand for an Atom element.
    #[must_use]
    pub const fn atom(local: &'static str) -> Self {
        Self::new(ATOM_NS, local)
    }

    /// Shorthand for a `ga:` element.
    #[must_use]
    pub const fn ga(local: &'static str) -> Self {
        Self::new(GA_NS, local)
    }

    /// Shorthand for a `dxp:` element.
    #[must_use]
    pub const fn dxp(local: &'static str) -> Self {
        Self::new(DXP_NS, local)
    }

    /// Shorthand for an `openSearch:` element.
    #[must_use]
    pub const fn open_search(local: &'static str) -> Self {
        Self::new(OPENSEARCH_NS, local)
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}{}", self.namespace, self.local)
    }
}
