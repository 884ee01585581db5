use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur against the inference endpoint.
///
/// None of these are retried: every failure requires a new user-initiated
/// analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Authentication failed against the inference endpoint {location}")]
    AuthFailure { location: ErrorLocation },

    #[error("Request was blocked. Reason: {reason} {location}")]
    Blocked {
        reason: String,
        location: ErrorLocation,
    },

    #[error("The model did not return a usable response {location}")]
    MalformedResponse { location: ErrorLocation },

    #[error("Inference request failed with status {status}: {body} {location}")]
    Api {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },
}

impl AnalysisError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        AnalysisError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        AnalysisError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
