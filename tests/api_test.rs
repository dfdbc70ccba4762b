//! Unit tests for the API client's pure surface

use dronewatch_dashboard::api::{ApiClient, ApiError, DetectionStats};
use dronewatch_dashboard::config::DashboardConfig;

#[test]
fn test_video_feed_url_construction() {
    let client = ApiClient::new("http://localhost:8000");
    assert_eq!(client.video_feed_url(), "http://localhost:8000/video_feed");
}

#[test]
fn test_client_from_config() {
    let config = DashboardConfig::default();
    let client = ApiClient::from_config(&config);
    assert_eq!(client.base_url(), "http://localhost:8000");
}

#[test]
fn test_stats_payload_deserialization() {
    let payload = r#"{"soldier":2,"civilian":3,"total":5}"#;
    let stats: DetectionStats = serde_json::from_str(payload).unwrap();

    assert_eq!(
        stats,
        DetectionStats {
            soldier: 2,
            civilian: 3,
            total: 5,
        }
    );
}

#[test]
fn test_stats_total_is_trusted_verbatim() {
    // The backend's total is not re-derived client-side.
    let payload = r#"{"soldier":1,"civilian":1,"total":5}"#;
    let stats: DetectionStats = serde_json::from_str(payload).unwrap();
    assert_eq!(stats.total, 5);
}

#[test]
fn test_negative_counts_are_rejected() {
    let payload = r#"{"soldier":-1,"civilian":0,"total":0}"#;
    assert!(serde_json::from_str::<DetectionStats>(payload).is_err());
}

#[test]
fn test_http_error_display_names_the_status() {
    let err = ApiError::Http(503);
    let message = err.to_string();

    assert!(!message.is_empty());
    assert!(message.contains("503"));
}
