use serde::{Deserialize, Serialize};

/// Whether a session survives a full application restart.
///
/// Selected per sign-in. `Remember` writes the session token to the cache
/// file; `SessionOnly` keeps it in memory until sign-out or process exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persistence {
    Remember,
    SessionOnly,
}
