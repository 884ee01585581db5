use crate::{ConfigError, ConfigErrorResult, DEFAULT_INFERENCE_ENDPOINT, DEFAULT_INFERENCE_MODEL};

use serde::Deserialize;

/// Connection parameters for the vision-language inference endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_INFERENCE_ENDPOINT),
            api_key: String::new(),
            model: String::from(DEFAULT_INFERENCE_MODEL),
        }
    }
}

impl InferenceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.endpoint.starts_with("http") {
            return Err(ConfigError::inference(format!(
                "inference.endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            )));
        }

        if self.api_key.is_empty() {
            return Err(ConfigError::inference("inference.api_key must not be empty"));
        }

        if self.model.is_empty() {
            return Err(ConfigError::inference("inference.model must not be empty"));
        }

        Ok(())
    }
}
