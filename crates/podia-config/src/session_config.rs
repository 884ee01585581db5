use crate::DEFAULT_SESSION_CACHE_FILENAME;

use serde::Deserialize;

/// Session restore behavior at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Filename of the cached session token inside the config dir.
    pub cache_file: String,
    /// Optional externally supplied token to bootstrap a session at startup.
    pub bootstrap_token: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cache_file: String::from(DEFAULT_SESSION_CACHE_FILENAME),
            bootstrap_token: None,
        }
    }
}
