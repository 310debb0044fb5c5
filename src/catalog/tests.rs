//! Tests for the catalog client

use super::*;
use crate::error::Error;
use crate::http::HttpClientConfig;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CatalogClient {
    let config = HttpClientConfig::builder().no_rate_limit().build();
    CatalogClient::new(&format!("{}/api", server.uri()), config).unwrap()
}

#[test]
fn test_base_url_gets_trailing_slash() {
    let client = CatalogClient::new("https://example.com/api", HttpClientConfig::default()).unwrap();
    assert_eq!(client.base_url().as_str(), "https://example.com/api/");
    assert_eq!(client.first_page_url(), "https://example.com/api/character");
    assert_eq!(
        client.character_url(42).unwrap().as_str(),
        "https://example.com/api/character/42"
    );
}

#[test]
fn test_invalid_base_url() {
    let err = CatalogClient::new("not a url", HttpClientConfig::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[tokio::test]
async fn test_fetch_page_follows_absolute_next() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "info": {"next": null},
            "results": [{"id": 21, "name": "Aqua Morty"}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let body = client
        .fetch_page(&format!("{}/api/character?page=2", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(body["results"][0]["id"], 21);
}

#[tokio::test]
async fn test_fetch_character() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2,
            "name": "Morty Smith",
            "status": "Alive",
            "episode": ["https://example.com/api/episode/1"]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let character = client.fetch_character(2).await.unwrap();

    assert_eq!(character.name, "Morty Smith");
    assert_eq!(character.episodes.len(), 1);
}

#[tokio::test]
async fn test_fetch_character_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character/9000"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Character not found"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch_character(9000).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_fetch_episode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/episode/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "name": "Pilot",
            "air_date": "December 2, 2013",
            "episode": "S01E01"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let episode = client
        .fetch_episode(&format!("{}/api/episode/1", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(episode.name, "Pilot");
    assert_eq!(episode.code, "S01E01");
}
