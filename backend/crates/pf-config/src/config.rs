use crate::{
    ApiConfig, AuthConfig, AuthProviderKind, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError,
    ConfigErrorResult, CorsConfig, DEFAULT_CONFIG_DIR_NAME, LoggingConfig, ServerConfig,
    StoreBackend, StoreConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub store: StoreConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PF_CONFIG_DIR env var, else use ./.portfolio/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PF_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PF_CONFIG_DIR env var > ./.portfolio/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.api.validate()?;
        self.store.validate()?;
        self.auth.validate()?;
        self.logging.validate()?;
        self.cors.validate()?;

        Ok(())
    }

    /// Absolute path of the SQLite database file.
    pub fn store_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.store.path))
    }

    /// Absolute path of the log file, if logging to a file.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  api: /{} (signup {})",
            self.api.route_prefix,
            if self.api.allow_signup {
                "enabled"
            } else {
                "disabled"
            }
        );

        match self.store.backend {
            StoreBackend::Sqlite => info!("  store: sqlite ({})", self.store.path),
            StoreBackend::Memory => info!("  store: memory (not persisted)"),
        }

        match self.auth.provider {
            AuthProviderKind::Local => info!(
                "  auth: local (HS256, ttl={}s, secret {})",
                self.auth.token_ttl_secs,
                if self.auth.jwt_secret.is_some() {
                    "set"
                } else {
                    "missing"
                }
            ),
            AuthProviderKind::Supabase => info!(
                "  auth: supabase ({})",
                self.auth.supabase_url.as_deref().unwrap_or("<unset>")
            ),
        }

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!("  cors: max_age={}s", self.cors.max_age_secs);

        if self.api.allow_signup {
            warn!(
                "Signup is open: anyone who can reach POST /{}/signup can create an admin account. \
                 Set api.allow_signup = false once the admin exists.",
                self.api.route_prefix
            );
        }
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Server
        Self::apply_env_string("PF_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PF_SERVER_PORT", &mut self.server.port);

        // Api
        Self::apply_env_string("PF_API_ROUTE_PREFIX", &mut self.api.route_prefix);
        Self::apply_env_bool("PF_API_ALLOW_SIGNUP", &mut self.api.allow_signup);

        // Store
        if let Ok(val) = std::env::var("PF_STORE_BACKEND") {
            self.store.backend = val.parse()?;
        }
        Self::apply_env_string("PF_STORE_PATH", &mut self.store.path);

        // Auth
        if let Ok(val) = std::env::var("PF_AUTH_PROVIDER") {
            self.auth.provider = val.parse()?;
        }
        Self::apply_env_option_string("PF_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("PF_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);
        Self::apply_env_option_string("PF_SUPABASE_URL", &mut self.auth.supabase_url);
        Self::apply_env_option_string(
            "PF_SUPABASE_SERVICE_ROLE_KEY",
            &mut self.auth.supabase_service_role_key,
        );
        Self::apply_env_option_string("PF_SUPABASE_ANON_KEY", &mut self.auth.supabase_anon_key);

        // Logging
        Self::apply_env_parse("PF_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PF_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PF_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("PF_LOG_DIR", &mut self.logging.dir);

        // Cors
        Self::apply_env_parse("PF_CORS_MAX_AGE_SECS", &mut self.cors.max_age_secs);

        Ok(())
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
