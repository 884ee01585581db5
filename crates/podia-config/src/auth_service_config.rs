use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENDPOINT};

use serde::Deserialize;

/// Connection parameters for the hosted authentication provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthServiceConfig {
    pub endpoint: String,
    pub api_key: String,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_AUTH_ENDPOINT),
            api_key: String::new(),
        }
    }
}

impl AuthServiceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.endpoint.starts_with("http") {
            return Err(ConfigError::auth(format!(
                "auth.endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            )));
        }

        if self.api_key.is_empty() {
            return Err(ConfigError::auth("auth.api_key must not be empty"));
        }

        Ok(())
    }
}
