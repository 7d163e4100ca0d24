use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS,
    MIN_JWT_SECRET_BYTES, MIN_TOKEN_TTL_SECS,
};

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProviderKind {
    /// Accounts in the local store, HS256 tokens signed by this server
    #[default]
    Local,
    /// Hosted Supabase Auth (GoTrue)
    Supabase,
}

impl FromStr for AuthProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AuthProviderKind::Local),
            "supabase" => Ok(AuthProviderKind::Supabase),
            other => Err(ConfigError::auth(format!(
                "auth.provider must be 'local' or 'supabase', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for AuthProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthProviderKind::Local => f.write_str("local"),
            AuthProviderKind::Supabase => f.write_str("supabase"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub provider: AuthProviderKind,
    /// HS256 signing secret for the local provider
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: u64,
    pub supabase_url: Option<String>,
    pub supabase_service_role_key: Option<String>,
    pub supabase_anon_key: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider: AuthProviderKind::default(),
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            supabase_url: None,
            supabase_service_role_key: None,
            supabase_anon_key: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_TOKEN_TTL_SECS..=MAX_TOKEN_TTL_SECS).contains(&self.token_ttl_secs) {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be {}-{}, got {}",
                MIN_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, self.token_ttl_secs
            )));
        }

        match self.provider {
            AuthProviderKind::Local => self.validate_local(),
            AuthProviderKind::Supabase => self.validate_supabase(),
        }
    }

    fn validate_local(&self) -> ConfigErrorResult<()> {
        let Some(secret) = &self.jwt_secret else {
            return Err(ConfigError::auth(
                "auth.jwt_secret is required when auth.provider = 'local'",
            ));
        };

        if secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_BYTES
            )));
        }

        Ok(())
    }

    fn validate_supabase(&self) -> ConfigErrorResult<()> {
        let url = self.supabase_url.as_deref().unwrap_or_default();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::auth(
                "auth.supabase_url must be an http(s) URL when auth.provider = 'supabase'",
            ));
        }

        if self
            .supabase_service_role_key
            .as_deref()
            .is_none_or(str::is_empty)
        {
            return Err(ConfigError::auth(
                "auth.supabase_service_role_key is required when auth.provider = 'supabase'",
            ));
        }

        Ok(())
    }
}
