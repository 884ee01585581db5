use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur against the auth provider
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("An account already exists for this email {location}")]
    AccountExists { location: ErrorLocation },

    #[error("Session expired or token invalid {location}")]
    SessionExpired { location: ErrorLocation },

    #[error("Auth provider error: {message} (code: {code}) {location}")]
    Api {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Session cache IO error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },
}

impl AuthError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        AuthError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Map a provider error code to the local taxonomy
    #[track_caller]
    pub fn from_provider_code(code: &str, message: String) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match code {
            "EMAIL_EXISTS" => AuthError::AccountExists { location },
            "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
                AuthError::InvalidCredentials { location }
            }
            "TOKEN_EXPIRED" | "INVALID_ID_TOKEN" | "USER_NOT_FOUND" => {
                AuthError::SessionExpired { location }
            }
            _ => AuthError::Api {
                code: code.to_string(),
                message,
                location,
            },
        }
    }
}

impl From<reqwest::Error> for AuthError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        AuthError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
