use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use podia_core::Identity;
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde_json::Value;

/// A confirmed session with the auth provider.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub identity: Identity,
    pub id_token: String,
    pub refresh_token: Option<String>,
}

/// HTTP client for the hosted auth provider's account endpoints
pub struct AuthClient {
    pub base_url: String,
    api_key: String,
    client: ReqwestClient,
}

impl AuthClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Provider URL (e.g., "https://identitytoolkit.googleapis.com/v1")
    /// * `api_key` - Project API key appended to every call
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Sign in an existing account with email and password
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<AuthSession> {
        #[derive(Serialize)]
        struct SignInRequest<'a> {
            email: &'a str,
            password: &'a str,
            #[serde(rename = "returnSecureToken")]
            return_secure_token: bool,
        }

        let body = self
            .execute(
                "accounts:signInWithPassword",
                &SignInRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        Self::session_from_response(&body, false)
    }

    /// Create a new account with email and password
    pub async fn sign_up(&self, email: &str, password: &str) -> AuthErrorResult<AuthSession> {
        #[derive(Serialize)]
        struct SignUpRequest<'a> {
            email: &'a str,
            password: &'a str,
            #[serde(rename = "returnSecureToken")]
            return_secure_token: bool,
        }

        let body = self
            .execute(
                "accounts:signUp",
                &SignUpRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        Self::session_from_response(&body, false)
    }

    /// Create an anonymous session (signUp with no credentials)
    pub async fn sign_in_anonymously(&self) -> AuthErrorResult<AuthSession> {
        #[derive(Serialize)]
        struct AnonymousRequest {
            #[serde(rename = "returnSecureToken")]
            return_secure_token: bool,
        }

        let body = self
            .execute(
                "accounts:signUp",
                &AnonymousRequest {
                    return_secure_token: true,
                },
            )
            .await?;

        Self::session_from_response(&body, true)
    }

    /// Resolve an existing token back into an identity (session restore)
    pub async fn lookup(&self, id_token: &str) -> AuthErrorResult<Identity> {
        #[derive(Serialize)]
        struct LookupRequest<'a> {
            #[serde(rename = "idToken")]
            id_token: &'a str,
        }

        let body = self.execute("accounts:lookup", &LookupRequest { id_token }).await?;

        let user = body
            .get("users")
            .and_then(|u| u.as_array())
            .and_then(|u| u.first())
            .ok_or_else(|| AuthError::SessionExpired {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let uid = user
            .get("localId")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AuthError::SessionExpired {
                location: ErrorLocation::from(Location::caller()),
            })?
            .to_string();

        let email = user
            .get("email")
            .and_then(|v| v.as_str())
            .filter(|e| !e.is_empty())
            .map(String::from);

        debug!("Restored identity for uid {uid}");

        Ok(Identity {
            uid,
            is_anonymous: email.is_none(),
            email,
        })
    }

    /// POST to an account endpoint and handle the provider error envelope
    async fn execute<B: Serialize>(&self, endpoint: &str, body: &B) -> AuthErrorResult<Value> {
        let url = format!("{}/{}?key={}", self.base_url, endpoint, self.api_key);
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            let code = body
                .pointer("/error/message")
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN");
            let message = body
                .pointer("/error/errors/0/message")
                .and_then(|v| v.as_str())
                .unwrap_or(code)
                .to_string();
            return Err(AuthError::from_provider_code(code, message));
        }

        Ok(body)
    }

    fn session_from_response(body: &Value, anonymous: bool) -> AuthErrorResult<AuthSession> {
        let uid = body
            .get("localId")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AuthError::Api {
                code: "MALFORMED_RESPONSE".to_string(),
                message: "provider response is missing localId".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?
            .to_string();

        let id_token = body
            .get("idToken")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AuthError::Api {
                code: "MALFORMED_RESPONSE".to_string(),
                message: "provider response is missing idToken".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?
            .to_string();

        let email = body
            .get("email")
            .and_then(|v| v.as_str())
            .filter(|e| !e.is_empty())
            .map(String::from);

        let refresh_token = body
            .get("refreshToken")
            .and_then(|v| v.as_str())
            .map(String::from);

        let identity = if anonymous {
            Identity::anonymous(uid)
        } else {
            Identity::registered(uid, email)
        };

        Ok(AuthSession {
            identity,
            id_token,
            refresh_token,
        })
    }
}
