//! Unit tests for error display and conversions

use super::*;

#[test]
fn test_client_not_initialized_display() {
    let err = ScorelineError::ClientNotInitialized;
    assert_eq!(
        err.to_string(),
        "client not initialized: open the connection before use"
    );
}

#[test]
fn test_upstream_error_display_includes_status_and_body() {
    let err = ScorelineError::UpstreamError {
        status: 429,
        body: "rate limit exceeded".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("429"));
    assert!(msg.contains("rate limit exceeded"));
}

#[test]
fn test_malformed_cache_entry_display_includes_key() {
    let err = ScorelineError::MalformedCacheEntry {
        key: "player:276:season:2024".to_string(),
        message: "expected value at line 1".to_string(),
    };
    assert!(err.to_string().contains("player:276:season:2024"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err: ScorelineError = json_err.into();
    assert!(matches!(err, ScorelineError::Json(_)));
    assert!(err.to_string().starts_with("JSON parsing failed"));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: ScorelineError = io_err.into();
    assert!(matches!(err, ScorelineError::Io(_)));
}

#[test]
fn test_invalid_config_display() {
    let err = ScorelineError::InvalidConfig {
        name: "SCORELINE_CACHE_TTL".to_string(),
        message: "invalid digit found in string".to_string(),
    };
    assert!(err.to_string().contains("SCORELINE_CACHE_TTL"));
}
