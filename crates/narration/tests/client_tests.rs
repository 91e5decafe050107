use httpmock::prelude::*;
use pantryplan_narration::{GenerativeNarrator, NarrationConfig, NarrationError, NarrationService};
use pantryplan_planner::{DayBrief, NarrationRequest};

fn sample_request() -> NarrationRequest {
    NarrationRequest {
        horizon_days: 1,
        days: vec![DayBrief {
            day: 1,
            title: "Minestrone".to_string(),
            missing_ingredients: vec!["pasta".to_string()],
            prep_minutes: 15,
            cook_minutes: 40,
            contains_meat_or_fish: false,
            source_url: "https://r.example/minestrone".to_string(),
        }],
    }
}

fn narrator(server: &MockServer, max_attempts: u32) -> GenerativeNarrator {
    GenerativeNarrator::new(NarrationConfig {
        api_url: server.base_url(),
        api_key: "test-key".to_string(),
        model: "menu-model".to_string(),
        timeout_secs: 5,
        max_attempts,
        retry_backoff_ms: 5,
    })
    .unwrap()
}

const ENDPOINT: &str = "/v1beta/models/menu-model:generateContent";

#[tokio::test]
async fn test_returns_candidate_text() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(ENDPOINT)
                .header("x-goog-api-key", "test-key");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"candidates":[{"content":{"parts":[{"text":"Day 1: soup night."}]}}]}"#);
        })
        .await;

    let text = narrator(&server, 1).narrate(&sample_request()).await.unwrap();

    assert_eq!(text, "Day 1: soup night.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_errors_retry_until_budget_exhausted() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(ENDPOINT);
            then.status(503).body("overloaded");
        })
        .await;

    let err = narrator(&server, 3).narrate(&sample_request()).await.unwrap_err();

    assert!(matches!(
        err,
        NarrationError::ExhaustedRetries { attempts: 3 }
    ));
    mock.assert_hits_async(3).await;
}

#[tokio::test]
async fn test_client_errors_fail_immediately() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(ENDPOINT);
            then.status(400).body("bad request");
        })
        .await;

    let err = narrator(&server, 3).narrate(&sample_request()).await.unwrap_err();

    match err {
        NarrationError::Status { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, "bad request");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_malformed_payload_is_not_retried() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(ENDPOINT);
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"candidates":[]}"#);
        })
        .await;

    let err = narrator(&server, 3).narrate(&sample_request()).await.unwrap_err();

    assert!(matches!(err, NarrationError::MalformedResponse(_)));
    mock.assert_hits_async(1).await;
}
