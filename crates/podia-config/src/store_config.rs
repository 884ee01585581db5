use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Connection parameters for the hosted document store.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub endpoint: String,
}

impl StoreConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.endpoint.starts_with("http") {
            return Err(ConfigError::store(format!(
                "store.endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            )));
        }

        Ok(())
    }
}
