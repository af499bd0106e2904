//! Shared fixtures for feed parser tests.

#![allow(dead_code)]

/// A goals feed with one destination goal (three funnel steps, out of
/// numeric order), one engagement goal and one goal of an unmodelled kind.
pub const GOALS_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:dxp="http://schemas.google.com/analytics/2009"
      xmlns:ga="http://schemas.google.com/ga/2009"
      xmlns:openSearch="http://a9.com/-/spec/opensearch/1.1/"
      xmlns:gd="http://schemas.google.com/g/2005"
      gd:kind="analytics#goals">
  <id>https://www.google.com/analytics/feeds/datasources/ga/accounts/~all/webproperties/~all/profiles/~all/goals</id>
  <updated>2010-03-15T10:00:00.000-07:00</updated>
  <title type="text">Google Analytics Goals for test@example.com</title>
  <openSearch:totalResults>3</openSearch:totalResults>
  <openSearch:startIndex>1</openSearch:startIndex>
  <openSearch:itemsPerPage>1000</openSearch:itemsPerPage>
  <entry gd:etag="W/&quot;CkQAQ3Y-fSp7I2A9WxFXGEU.&quot;">
    <id>https://www.google.com/analytics/feeds/datasources/ga/accounts/30481/webproperties/UA-30481-1/profiles/1174/goals/1</id>
    <updated>2010-03-14T22:15:38.000-07:00</updated>
    <title type="text">Google Analytics Goal 1</title>
    <link rel="self" type="application/atom+xml" href="https://www.google.com/analytics/feeds/datasources/ga/accounts/30481/webproperties/UA-30481-1/profiles/1174/goals/1"/>
    <ga:goal active="true" name="Completing Order" number="1" value="10.0">
      <ga:destination caseSensitive="false" expression="/purchaseComplete.html" matchType="regex" step1Required="false">
        <ga:step name="View Cart" number="2" path="/cart"/>
        <ga:step name="View Product Categories" number="1" path="/Apparel"/>
        <ga:step name="Checkout &amp; Pay" number="3" path="/checkout?step=pay"/>
      </ga:destination>
    </ga:goal>
    <dxp:property name="ga:accountId" value="30481"/>
    <dxp:property name="ga:webPropertyId" value="UA-30481-1"/>
    <dxp:property name="ga:profileId" value="1174"/>
  </entry>
  <entry>
    <id>https://www.google.com/analytics/feeds/datasources/ga/accounts/30481/webproperties/UA-30481-1/profiles/1174/goals/2</id>
    <updated>2010-03-14T22:15:38.000-07:00</updated>
    <title type="text">Google Analytics Goal 2</title>
    <ga:goal name="Long Visit" number="2" value="0.5">
      <ga:engagement comparison="&gt;" thresholdValue="300" type="timeOnSite"/>
    </ga:goal>
    <dxp:property name="ga:profileId" value="1174"/>
  </entry>
  <entry>
    <id>https://www.google.com/analytics/feeds/datasources/ga/accounts/30481/webproperties/UA-30481-1/profiles/1174/goals/3</id>
    <title type="text">Google Analytics Goal 3</title>
    <ga:goal active="true" name="Video Play" number="3" value="2.0">
      <ga:eventCondition type="category" expression="video"/>
    </ga:goal>
  </entry>
</feed>
"#;
