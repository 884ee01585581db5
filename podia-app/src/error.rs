use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Controller-level errors. Service failures pass through transparently;
/// `PolicyGate` is the one error produced locally, without any backend call.
#[derive(Error, Debug)]
pub enum AppError {
    /// A local policy refusal (e.g. anonymous identities cannot touch the
    /// record store). Not a backend failure.
    #[error("{message} {location}")]
    PolicyGate {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger initialization failed: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Config(#[from] podia_config::ConfigError),

    #[error(transparent)]
    Auth(#[from] podia_session::AuthError),

    #[error(transparent)]
    Store(#[from] podia_store::StoreError),

    #[error(transparent)]
    Analysis(#[from] podia_vision::AnalysisError),

    #[error(transparent)]
    Validation(#[from] podia_core::CoreError),
}

impl AppError {
    /// Create a PolicyGate error with context
    #[track_caller]
    pub fn policy_gate(message: impl Into<String>) -> Self {
        AppError::PolicyGate {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a Logger error with context
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        AppError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_policy_gate(&self) -> bool {
        matches!(self, AppError::PolicyGate { .. })
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
