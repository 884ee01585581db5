//! Integration tests for the auth client using wiremock mock server

use podia_session::{AuthClient, AuthError};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path, query_param},
};

#[tokio::test]
async fn test_sign_in_with_password_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts:signInWithPassword"))
        .and(query_param("key", "test-key"))
        .and(body_string_contains("jane@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "uid-1",
            "email": "jane@example.com",
            "idToken": "token-1",
            "refreshToken": "refresh-1"
        })))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(&mock_server.uri(), "test-key");
    let session = client
        .sign_in_with_password("jane@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(session.identity.uid, "uid-1");
    assert_eq!(session.identity.email.as_deref(), Some("jane@example.com"));
    assert!(!session.identity.is_anonymous);
    assert_eq!(session.id_token, "token-1");
    assert_eq!(session.refresh_token.as_deref(), Some("refresh-1"));
}

#[tokio::test]
async fn test_sign_in_wrong_password_maps_to_invalid_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "INVALID_LOGIN_CREDENTIALS"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(&mock_server.uri(), "test-key");
    let result = client.sign_in_with_password("jane@example.com", "wrong").await;

    assert!(matches!(result, Err(AuthError::InvalidCredentials { .. })));
}

#[tokio::test]
async fn test_sign_up_existing_email_maps_to_account_exists() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts:signUp"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "EMAIL_EXISTS"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(&mock_server.uri(), "test-key");
    let result = client.sign_up("jane@example.com", "hunter2").await;

    assert!(matches!(result, Err(AuthError::AccountExists { .. })));
}

#[tokio::test]
async fn test_anonymous_sign_in_yields_anonymous_identity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts:signUp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "guest-1",
            "idToken": "guest-token"
        })))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(&mock_server.uri(), "test-key");
    let session = client.sign_in_anonymously().await.unwrap();

    assert!(session.identity.is_anonymous);
    assert_eq!(session.identity.email, None);
    assert_eq!(session.identity.uid, "guest-1");
}

#[tokio::test]
async fn test_lookup_restores_registered_identity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts:lookup"))
        .and(body_string_contains("token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [
                { "localId": "uid-1", "email": "jane@example.com" }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(&mock_server.uri(), "test-key");
    let identity = client.lookup("token-1").await.unwrap();

    assert_eq!(identity.uid, "uid-1");
    assert!(!identity.is_anonymous);
}

#[tokio::test]
async fn test_lookup_expired_token_maps_to_session_expired() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/accounts:lookup"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "TOKEN_EXPIRED"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = AuthClient::new(&mock_server.uri(), "test-key");
    let result = client.lookup("stale-token").await;

    assert!(matches!(result, Err(AuthError::SessionExpired { .. })));
}
