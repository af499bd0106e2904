use mgmtfeed_client::{ALL, ClientConfig, GoalQuery, ManagementClient, Transport, goals_uri};
use mgmtfeed_client::{ClientError, ClientResult};
use pretty_assertions::assert_eq;

const BASE: &str = "https://www.google.com/analytics/feeds/datasources/ga";

// ── Defaults ────────────────────────────────────────────────────

#[test]
fn query_defaults_to_all() {
    let query = GoalQuery::default();
    assert_eq!(query.account_id, ALL);
    assert_eq!(query.web_property_id, ALL);
    assert_eq!(query.profile_id, ALL);
    assert!(query.parameters().is_empty());
}

#[test]
fn default_uri_has_no_query_string() {
    let uri = goals_uri("https://www.google.com", &GoalQuery::new());
    assert_eq!(
        uri,
        format!("{BASE}/accounts/~all/webproperties/~all/profiles/~all/goals")
    );
}

#[test]
fn path_ids_are_substituted() {
    let query = GoalQuery::new()
        .account("30481")
        .web_property("UA-30481-1")
        .profile("1174");
    let uri = goals_uri("https://www.google.com", &query);
    assert_eq!(
        uri,
        format!("{BASE}/accounts/30481/webproperties/UA-30481-1/profiles/1174/goals")
    );
}

#[test]
fn trailing_slash_on_server_is_ignored() {
    let a = goals_uri("https://www.google.com/", &GoalQuery::new());
    let b = goals_uri("https://www.google.com", &GoalQuery::new());
    assert_eq!(a, b);
}

// ── Parameters ──────────────────────────────────────────────────

#[test]
fn ids_and_max_results_are_encoded() {
    let query = GoalQuery::new().ids("ga:123").max_results(10);
    let uri = goals_uri("https://www.google.com", &query);
    assert!(uri.ends_with("/goals?ids=ga%3A123&max-results=10"), "{uri}");
}

#[test]
fn uri_is_independent_of_insertion_order() {
    let a = GoalQuery::new().ids("ga:123").max_results(10);
    let b = GoalQuery::new().max_results(10).ids("ga:123");
    let c = GoalQuery::new()
        .param("max-results", "10")
        .param("ids", "ga:123");
    let d = GoalQuery::new()
        .param("ids", "ga:123")
        .param("max-results", "10");

    let server = "https://www.google.com";
    assert_eq!(goals_uri(server, &a), goals_uri(server, &b));
    assert_eq!(goals_uri(server, &a), goals_uri(server, &c));
    assert_eq!(goals_uri(server, &c), goals_uri(server, &d));
}

#[test]
fn all_modelled_parameters_use_wire_names() {
    let query = GoalQuery::new()
        .start_index(11)
        .max_results(50)
        .ids("ga:1")
        .sort("-ga:visits")
        .filters("ga:country==United States")
        .pretty_print(true);
    let params: Vec<String> = query.parameters().into_keys().collect();
    assert_eq!(
        params,
        vec!["filters", "ids", "max-results", "prettyprint", "sort", "start-index"]
    );

    let uri = goals_uri("https://www.google.com", &query);
    assert!(uri.contains("filters=ga%3Acountry%3D%3DUnited%20States"));
    assert!(uri.contains("sort=-ga%3Avisits"));
    assert!(uri.contains("prettyprint=true"));
    assert!(uri.contains("start-index=11"));
}

#[test]
fn modelled_parameter_wins_over_extra() {
    let query = GoalQuery::new().param("max-results", "99").max_results(10);
    assert_eq!(query.parameters()["max-results"], "10");
}

#[test]
fn extra_names_and_values_are_encoded() {
    let query = GoalQuery::new().param("a b", "x&y=z");
    let uri = goals_uri("https://www.google.com", &query);
    assert!(uri.ends_with("?a%20b=x%26y%3Dz"), "{uri}");
}

#[test]
fn path_ids_are_encoded() {
    let query = GoalQuery::new().profile("a/b");
    let uri = goals_uri("https://www.google.com", &query);
    assert!(uri.contains("/profiles/a%2Fb/goals"));
}

#[test]
fn query_serde_roundtrip() {
    let query = GoalQuery::new().account("1").max_results(5).param("k", "v");
    let json = serde_json::to_string(&query).unwrap();
    let back: GoalQuery = serde_json::from_str(&json).unwrap();
    assert_eq!(back, query);

    let partial: GoalQuery = serde_json::from_str(r#"{"profile_id":"9"}"#).unwrap();
    assert_eq!(partial.profile_id, "9");
    assert_eq!(partial.account_id, ALL);
}

// ── Client-level URI ────────────────────────────────────────────

struct Unused;

impl Transport for Unused {
    fn get(&self, _uri: &str) -> ClientResult<String> {
        Err(ClientError::Config("not used".to_string()))
    }
}

#[test]
fn client_uses_configured_server() {
    let config = ClientConfig::default().with_server("http://localhost:8080");
    let client = ManagementClient::with_transport(config, Unused);
    let uri = client.goals_uri(&GoalQuery::new().ids("ga:1"));
    assert_eq!(
        uri,
        "http://localhost:8080/analytics/feeds/datasources/ga/accounts/~all/webproperties/~all/profiles/~all/goals?ids=ga%3A1"
    );
}
