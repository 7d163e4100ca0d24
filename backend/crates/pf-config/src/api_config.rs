use crate::{ConfigError, ConfigErrorResult, DEFAULT_ALLOW_SIGNUP, DEFAULT_ROUTE_PREFIX};

use serde::Deserialize;

/// Configuration for the REST API layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// First path segment every route is mounted under
    pub route_prefix: String,
    /// Whether `POST /signup` is served. Anyone who can reach it can create
    /// an admin account.
    pub allow_signup: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
            allow_signup: DEFAULT_ALLOW_SIGNUP,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.route_prefix.is_empty() {
            return Err(ConfigError::api("api.route_prefix cannot be empty"));
        }

        if self.route_prefix.contains('/') {
            return Err(ConfigError::api(format!(
                "api.route_prefix must be a single path segment without '/', got '{}'",
                self.route_prefix
            )));
        }

        Ok(())
    }
}
