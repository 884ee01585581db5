mod auth_client;
mod error;
mod persistence;
mod session_manager;
mod token_cache;

pub use auth_client::{AuthClient, AuthSession};
pub use error::{AuthError, Result};
pub use persistence::Persistence;
pub use session_manager::SessionManager;
pub use token_cache::TokenCache;
