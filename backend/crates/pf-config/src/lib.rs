mod api_config;
mod auth_config;
mod config;
mod cors_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod store_config;

pub use api_config::ApiConfig;
pub use auth_config::{AuthConfig, AuthProviderKind};
pub use config::Config;
pub use cors_config::CorsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use store_config::{StoreBackend, StoreConfig};

const CONFIG_DIR_ENV: &str = "PF_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".portfolio";
const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

pub const DEFAULT_ROUTE_PREFIX: &str = "make-server-51fd9f23";
const DEFAULT_ALLOW_SIGNUP: bool = true;

const DEFAULT_STORE_FILENAME: &str = "portfolio.db";

const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
const MIN_TOKEN_TTL_SECS: u64 = 60;
const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 3600;
const MIN_JWT_SECRET_BYTES: usize = 32;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_CORS_MAX_AGE_SECS: u64 = 600;
const MAX_CORS_MAX_AGE_SECS: u64 = 86_400;

#[cfg(test)]
mod tests;
