use crate::{ConfigError, ConfigErrorResult, DEFAULT_CORS_MAX_AGE_SECS, MAX_CORS_MAX_AGE_SECS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// How long browsers may cache a preflight response
    pub max_age_secs: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            max_age_secs: DEFAULT_CORS_MAX_AGE_SECS,
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_age_secs > MAX_CORS_MAX_AGE_SECS {
            return Err(ConfigError::cors(format!(
                "cors.max_age_secs must be <= {}, got {}",
                MAX_CORS_MAX_AGE_SECS, self.max_age_secs
            )));
        }

        Ok(())
    }
}
