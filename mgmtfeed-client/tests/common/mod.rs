//! Shared test helpers for client tests.

#![allow(dead_code)]

use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to the test harness; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A one-entry goals feed.
pub const ONE_GOAL_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:ga="http://schemas.google.com/ga/2009"
      xmlns:dxp="http://schemas.google.com/analytics/2009"
      xmlns:openSearch="http://a9.com/-/spec/opensearch/1.1/">
  <title>Goals</title>
  <openSearch:totalResults>1</openSearch:totalResults>
  <entry>
    <title>Goal 1</title>
    <ga:goal active="true" name="Signup" number="1" value="5.0">
      <ga:destination caseSensitive="false" expression="/thanks" matchType="head" step1Required="false"/>
    </ga:goal>
    <dxp:property name="ga:profileId" value="1174"/>
  </entry>
</feed>
"#;
