use crate::{
    AuthServiceConfig, ConfigError, ConfigErrorResult, InferenceConfig, LoggingConfig,
    SessionConfig, StoreConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub auth: AuthServiceConfig,
    pub store: StoreConfig,
    pub inference: InferenceConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for PODIA_CONFIG_DIR env var, else use ./.podia/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PODIA_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PODIA_CONFIG_DIR env var > ./.podia/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("PODIA_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".podia"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.auth.validate()?;
        self.store.validate()?;
        self.inference.validate()?;

        if self.session.cache_file.is_empty() || self.session.cache_file.contains('/') {
            return Err(ConfigError::config(
                "session.cache_file must be a bare filename",
            ));
        }

        Ok(())
    }

    /// Absolute path of the cached session token file.
    pub fn session_cache_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.session.cache_file))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  auth: {}", self.auth.endpoint);
        info!("  store: {}", self.store.endpoint);
        info!(
            "  inference: {} (model: {})",
            self.inference.endpoint, self.inference.model
        );
        info!(
            "  session: cache_file={}, bootstrap_token={}",
            self.session.cache_file,
            if self.session.bootstrap_token.is_some() {
                "present"
            } else {
                "absent"
            }
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Auth service
        Self::apply_env_string("PODIA_AUTH_ENDPOINT", &mut self.auth.endpoint);
        Self::apply_env_string("PODIA_AUTH_API_KEY", &mut self.auth.api_key);

        // Record store
        Self::apply_env_string("PODIA_STORE_ENDPOINT", &mut self.store.endpoint);

        // Inference
        Self::apply_env_string("PODIA_INFERENCE_ENDPOINT", &mut self.inference.endpoint);
        Self::apply_env_string("PODIA_INFERENCE_API_KEY", &mut self.inference.api_key);
        Self::apply_env_string("PODIA_INFERENCE_MODEL", &mut self.inference.model);

        // Session
        Self::apply_env_string("PODIA_SESSION_CACHE_FILE", &mut self.session.cache_file);
        Self::apply_env_option_string(
            "PODIA_SESSION_BOOTSTRAP_TOKEN",
            &mut self.session.bootstrap_token,
        );

        // Logging
        Self::apply_env_parse("PODIA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PODIA_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PODIA_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
