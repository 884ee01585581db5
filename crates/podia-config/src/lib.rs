mod auth_service_config;
mod config;
mod error;
mod inference_config;
mod log_level;
mod logging_config;
mod session_config;
mod store_config;

pub use auth_service_config::AuthServiceConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use inference_config::InferenceConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use store_config::StoreConfig;

const DEFAULT_AUTH_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";
const DEFAULT_INFERENCE_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_INFERENCE_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_SESSION_CACHE_FILENAME: &str = "session.json";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[cfg(test)]
pub(crate) mod tests;
