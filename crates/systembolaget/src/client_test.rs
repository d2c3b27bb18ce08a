use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn test_client(base_url: &str) -> CatalogClient {
    CatalogClient::with_base_url(Client::new(), base_url)
        .expect("client construction should not fail")
}

#[test]
fn new_points_at_production_service() {
    let client = CatalogClient::new(Client::new()).expect("default base URL is valid");
    assert_eq!(client.base_url.as_str(), "http://www.systembolaget.se/");
    assert_eq!(client.user_agent, "systembolaget/0.2");
}

#[test]
fn default_user_agent_reports_library_version() {
    assert_eq!(
        crate::config::DEFAULT_USER_AGENT,
        format!("systembolaget/{}", crate::config::LIBRARY_VERSION)
    );
}

#[test]
fn resolve_builds_article_and_store_endpoints() {
    let client = CatalogClient::new(Client::new()).expect("default base URL is valid");
    assert_eq!(
        client.resolve(ARTICLES_PATH).unwrap().as_str(),
        "http://www.systembolaget.se/Assortment.aspx?Format=Xml"
    );
    assert_eq!(
        client.resolve(STORES_PATH).unwrap().as_str(),
        "http://www.systembolaget.se/Assortment.aspx?butikerombud=1"
    );
}

#[test]
fn with_base_url_adds_trailing_slash() {
    let client = test_client("http://localhost:8080/mirror");
    assert_eq!(client.base_url.as_str(), "http://localhost:8080/mirror/");
    assert_eq!(
        client.resolve(ARTICLES_PATH).unwrap().as_str(),
        "http://localhost:8080/mirror/Assortment.aspx?Format=Xml"
    );
}

#[test]
fn with_base_url_collapses_repeated_trailing_slashes() {
    let client = test_client("http://localhost:8080//");
    assert_eq!(client.base_url.as_str(), "http://localhost:8080/");
}

#[test]
fn with_base_url_rejects_relative_base() {
    let err = CatalogClient::with_base_url(Client::new(), "not a url").unwrap_err();
    assert!(
        matches!(err, CatalogError::MalformedRequest { ref path, .. } if path == "not a url"),
        "expected MalformedRequest, got: {err:?}"
    );
}

#[test]
fn resolve_rejects_invalid_reference() {
    let client = test_client("http://localhost:8080");
    let err = client.resolve("http://[::1").unwrap_err();
    assert!(
        matches!(err, CatalogError::MalformedRequest { ref path, .. } if path == "http://[::1"),
        "expected MalformedRequest, got: {err:?}"
    );
}

#[test]
fn base_url_can_be_overridden_after_construction() {
    let mut client = CatalogClient::new(Client::new()).expect("default base URL is valid");
    client.base_url = Url::parse("http://127.0.0.1:9999/").unwrap();
    assert_eq!(
        client.resolve(STORES_PATH).unwrap().as_str(),
        "http://127.0.0.1:9999/Assortment.aspx?butikerombud=1"
    );
}

#[test]
fn from_config_applies_base_url_and_user_agent() {
    let config = ClientConfig {
        base_url: "http://localhost:4000".to_string(),
        user_agent: "catalog-sync/1.0".to_string(),
        ..ClientConfig::default()
    };
    let client = CatalogClient::from_config(&config).expect("config is valid");
    assert_eq!(client.base_url.as_str(), "http://localhost:4000/");
    assert_eq!(client.user_agent, "catalog-sync/1.0");
}

#[tokio::test]
async fn get_with_malformed_path_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get("http://[::1").await.unwrap_err();
    assert!(matches!(err, CatalogError::MalformedRequest { .. }));
}

#[tokio::test]
async fn get_accepts_ok_and_not_modified_only() {
    let server = MockServer::start().await;
    for (route, status) in [("/ok", 200_u16), ("/not-modified", 304), ("/created", 201)] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
    }

    let client = test_client(&server.uri());
    assert_eq!(client.get("ok").await.unwrap().status(), StatusCode::OK);
    assert_eq!(
        client.get("not-modified").await.unwrap().status(),
        StatusCode::NOT_MODIFIED
    );
    let err = client.get("created").await.unwrap_err();
    assert_eq!(err.status(), Some(201));
}
