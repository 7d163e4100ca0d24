//! Store and auth provider construction from configuration

use crate::error::Result as ServerErrorResult;

use pf_auth::{AuthProvider, LocalAuthProvider, SupabaseAuthProvider, SupabaseSettings};
use pf_config::{AuthProviderKind, Config, ConfigError, StoreBackend};
use pf_store::{KvStore, MemoryKvStore, SqliteKvStore};

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};

pub async fn build_store(config: &Config) -> ServerErrorResult<Arc<dyn KvStore>> {
    match config.store.backend {
        StoreBackend::Memory => {
            warn!("Using in-memory store - all data is lost on shutdown");
            Ok(Arc::new(MemoryKvStore::new()))
        }
        StoreBackend::Sqlite => {
            let path = config.store_path()?;
            info!("Opening SQLite store: {}", path.display());
            let store = SqliteKvStore::connect(&path).await?;
            info!("SQLite store ready");
            Ok(Arc::new(store))
        }
    }
}

pub fn build_auth_provider(
    config: &Config,
    store: Arc<dyn KvStore>,
) -> ServerErrorResult<Arc<dyn AuthProvider>> {
    let auth = &config.auth;

    match auth.provider {
        AuthProviderKind::Local => {
            let secret = auth
                .jwt_secret
                .as_deref()
                .ok_or_else(|| ConfigError::auth("jwt_secret is required for local auth"))?;
            info!("Auth: local provider (HS256, {}s tokens)", auth.token_ttl_secs);
            Ok(Arc::new(LocalAuthProvider::new(
                store,
                secret.as_bytes(),
                Duration::from_secs(auth.token_ttl_secs),
            )))
        }
        AuthProviderKind::Supabase => {
            let url = auth
                .supabase_url
                .clone()
                .ok_or_else(|| ConfigError::auth("supabase_url is required for supabase auth"))?;
            let service_role_key = auth.supabase_service_role_key.clone().ok_or_else(|| {
                ConfigError::auth("supabase_service_role_key is required for supabase auth")
            })?;
            info!("Auth: supabase provider at {}", url);
            let provider = SupabaseAuthProvider::new(SupabaseSettings {
                url,
                service_role_key,
                anon_key: auth.supabase_anon_key.clone(),
            })?;
            Ok(Arc::new(provider))
        }
    }
}
