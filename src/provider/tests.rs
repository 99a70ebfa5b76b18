//! Unit tests for the API-Football client

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn settings_for(base_url: &str) -> Settings {
    Settings {
        api_football_key: "test_key".to_string(),
        api_football_base_url: base_url.to_string(),
        cache_dir: std::env::temp_dir().join("scoreline-provider-tests"),
        cache_ttl: 300,
        environment: "test".to_string(),
        log_level: "info".to_string(),
    }
}

#[tokio::test]
async fn test_fetch_player_stats_success() {
    let mock_server = MockServer::start().await;

    let payload = json!({
        "response": [{
            "player": { "id": 276, "name": "Erling Haaland" },
            "statistics": [{
                "team": { "name": "Manchester City" },
                "games": { "appearances": 35, "minutes": 3024, "position": "Attacker" },
                "goals": { "total": 36, "assists": 8 }
            }]
        }]
    });

    Mock::given(method("GET"))
        .and(path("/players"))
        .and(query_param("id", "276"))
        .and(query_param("season", "2024"))
        .and(header("x-apisports-key", "test_key"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .mount(&mock_server)
        .await;

    let mut client = FootballApiClient::new(&settings_for(&mock_server.uri()));
    client.connect().unwrap();

    let raw = client
        .fetch_player_stats(PlayerId::new(276), Season::new(2024))
        .await
        .unwrap();
    assert_eq!(raw, payload);
}

#[tokio::test]
async fn test_fetch_before_connect_fails() {
    let client = FootballApiClient::new(&settings_for("https://stub.local"));

    let result = client
        .fetch_player_stats(PlayerId::new(276), Season::new(2024))
        .await;
    assert!(matches!(result, Err(ScorelineError::ClientNotInitialized)));
}

#[tokio::test]
async fn test_fetch_after_close_fails() {
    let mut client = FootballApiClient::new(&settings_for("https://stub.local"));
    client.connect().unwrap();
    client.close();

    let result = client
        .fetch_player_stats(PlayerId::new(276), Season::new(2024))
        .await;
    assert!(matches!(result, Err(ScorelineError::ClientNotInitialized)));
}

#[tokio::test]
async fn test_non_success_status_propagates_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limit exceeded"))
        .mount(&mock_server)
        .await;

    let mut client = FootballApiClient::new(&settings_for(&mock_server.uri()));
    client.connect().unwrap();

    let result = client
        .fetch_player_stats(PlayerId::new(276), Season::new(2024))
        .await;
    match result {
        Err(ScorelineError::UpstreamError { status, body }) => {
            assert_eq!(status, 429);
            assert_eq!(body, "rate limit exceeded");
        }
        other => panic!("expected UpstreamError, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_connection_failure_is_upstream_unavailable() {
    // Nothing listens on the discard port.
    let mut client = FootballApiClient::new(&settings_for("http://127.0.0.1:9"));
    client.connect().unwrap();

    let result = client
        .fetch_player_stats(PlayerId::new(276), Season::new(2024))
        .await;
    assert!(matches!(
        result,
        Err(ScorelineError::UpstreamUnavailable { .. })
    ));
}
