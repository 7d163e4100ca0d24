use pf_auth::AuthProvider;
use pf_config::{ApiConfig, CorsConfig};
use pf_store::ProjectRepository;

use std::sync::Arc;

/// Shared handles passed to every handler. Built once in `main`.
#[derive(Clone)]
pub struct AppState {
    pub projects: ProjectRepository,
    pub auth: Arc<dyn AuthProvider>,
    pub api_config: ApiConfig,
    pub cors_config: CorsConfig,
}
