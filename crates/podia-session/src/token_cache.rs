use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct CachedSession {
    id_token: String,
}

/// On-disk session token, used by the `Remember` persistence mode.
pub struct TokenCache {
    path: PathBuf,
}

impl TokenCache {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn save(&self, id_token: &str) -> AuthErrorResult<()> {
        let cached = CachedSession {
            id_token: id_token.to_string(),
        };
        let contents = serde_json::to_string(&cached).map_err(|e| AuthError::Api {
            code: "SERIALIZE".to_string(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        std::fs::write(&self.path, contents).map_err(|e| AuthError::Io {
            message: format!("failed to write {}", self.path.display()),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })
    }

    /// A missing or unreadable cache is "no session", not an error.
    pub fn load(&self) -> Option<String> {
        let contents = std::fs::read_to_string(&self.path).ok()?;

        match serde_json::from_str::<CachedSession>(&contents) {
            Ok(cached) => Some(cached.id_token),
            Err(e) => {
                warn!("Discarding unreadable session cache {}: {e}", self.path.display());
                None
            }
        }
    }

    /// Idempotent: clearing an absent cache is a no-op.
    pub fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            warn!("Failed to remove session cache {}: {e}", self.path.display());
        }
    }
}
