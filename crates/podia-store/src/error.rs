use crate::RecordKind;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur against the record store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Singleton record does not exist yet. Callers treat this as "use
    /// defaults", never as a failure.
    #[error("No {kind} record stored {location}")]
    NotFound {
        kind: RecordKind,
        location: ErrorLocation,
    },

    #[error("Store error: {message} (code: {code}) {location}")]
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

    #[error("Malformed {kind} record: {message} {location}")]
    Malformed {
        kind: RecordKind,
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        StoreError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn not_found(kind: RecordKind) -> Self {
        StoreError::NotFound {
            kind,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed<S: Into<String>>(kind: RecordKind, message: S) -> Self {
        StoreError::Malformed {
            kind,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

impl From<reqwest::Error> for StoreError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        StoreError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
