//! Integration tests for the analysis client using wiremock mock server

use podia_vision::{AnalysisClient, AnalysisError, AnalysisResult};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn client(server: &MockServer) -> AnalysisClient {
    AnalysisClient::new(&server.uri(), "vision-key", "gemini-2.0-flash")
}

#[tokio::test]
async fn test_analyze_returns_model_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .and(query_param("key", "vision-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {
                    "content": {
                        "parts": [
                            { "text": "Conclusion: The image does not show clear visual signs of a diabetic foot ulcer." }
                        ]
                    }
                }
            ]
        })))
        .mount(&server)
        .await;

    let result = client(&server).analyze(b"jpeg-bytes", "image/jpeg").await.unwrap();

    assert!(result.text.contains("does not show clear visual signs"));
    assert!(!result.requires_consultation());
}

#[tokio::test]
async fn test_analyze_sends_prompt_and_inline_image() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [ { "content": { "parts": [ { "text": "ok" } ] } } ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).analyze(b"jpeg-bytes", "image/jpeg").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();

    let parts = &body["contents"][0]["parts"];
    assert!(
        parts[0]["text"]
            .as_str()
            .unwrap()
            .contains("avoid false positives")
    );
    assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
    // b"jpeg-bytes" base64-encoded
    assert_eq!(parts[1]["inlineData"]["data"], "anBlZy1ieXRlcw==");

    let settings = body["safetySettings"].as_array().unwrap();
    assert_eq!(settings.len(), 4);
    assert!(settings.iter().all(|s| s["threshold"] == "BLOCK_NONE"));
}

#[tokio::test]
async fn test_http_403_maps_to_auth_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let result = client(&server).analyze(b"jpeg-bytes", "image/jpeg").await;

    assert!(matches!(result, Err(AnalysisError::AuthFailure { .. })));
}

#[tokio::test]
async fn test_block_reason_maps_to_blocked_with_reason() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let result = client(&server).analyze(b"jpeg-bytes", "image/jpeg").await;

    match result {
        Err(AnalysisError::Blocked { reason, .. }) => assert_eq!(reason, "SAFETY"),
        other => panic!("expected Blocked, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_candidates_maps_to_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let result = client(&server).analyze(b"jpeg-bytes", "image/jpeg").await;

    assert!(matches!(result, Err(AnalysisError::MalformedResponse { .. })));
}

#[tokio::test]
async fn test_server_error_surfaces_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend overloaded"))
        .mount(&server)
        .await;

    let result = client(&server).analyze(b"jpeg-bytes", "image/jpeg").await;

    match result {
        Err(AnalysisError::Api { status, body, .. }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "backend overloaded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn test_requires_consultation_is_case_insensitive_phrase_match() {
    let flagged = AnalysisResult {
        text: "Conclusion: The image shows visual signs that may WARRANT A CONSULTATION with a \
               healthcare professional."
            .to_string(),
    };
    let clear = AnalysisResult {
        text: "Conclusion: The image does not show clear visual signs of a diabetic foot ulcer."
            .to_string(),
    };

    assert!(flagged.requires_consultation());
    assert!(!clear.requires_consultation());
}
