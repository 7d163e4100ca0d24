#![allow(dead_code)]

//! Test infrastructure for pf-server API tests

use pf_auth::{AuthProvider, LocalAuthProvider};
use pf_config::{ApiConfig, CorsConfig};
use pf_server::{AppState, build_router};
use pf_store::{KvStore, MemoryKvStore, ProjectRepository, Result as StoreErrorResult, StoreError};

use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const PREFIX: &str = "/make-server-51fd9f23";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct-horse";

const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
const TEST_HASH_COST: u32 = 4;

/// Memory store that counts every call, to prove a request never reached it
#[derive(Default)]
pub struct CountingKvStore {
    inner: MemoryKvStore,
    calls: AtomicUsize,
}

impl CountingKvStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl KvStore for CountingKvStore {
    async fn get(&self, key: &str) -> StoreErrorResult<Option<Value>> {
        self.touch();
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &Value) -> StoreErrorResult<()> {
        self.touch();
        self.inner.set(key, value).await
    }

    async fn del(&self, key: &str) -> StoreErrorResult<()> {
        self.touch();
        self.inner.del(key).await
    }

    async fn get_by_prefix(&self, prefix: &str) -> StoreErrorResult<Vec<(String, Value)>> {
        self.touch();
        self.inner.get_by_prefix(prefix).await
    }
}

/// Store whose every call fails, standing in for an unreachable database
pub struct FailingKvStore;

#[track_caller]
fn store_down() -> StoreError {
    StoreError::Initialization {
        message: "disk I/O error at /var/lib/portfolio.db".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait]
impl KvStore for FailingKvStore {
    async fn get(&self, _key: &str) -> StoreErrorResult<Option<Value>> {
        Err(store_down())
    }

    async fn set(&self, _key: &str, _value: &Value) -> StoreErrorResult<()> {
        Err(store_down())
    }

    async fn del(&self, _key: &str) -> StoreErrorResult<()> {
        Err(store_down())
    }

    async fn get_by_prefix(&self, _prefix: &str) -> StoreErrorResult<Vec<(String, Value)>> {
        Err(store_down())
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    /// Backs the project routes only; accounts live in a separate store
    pub project_store: Arc<CountingKvStore>,
}

/// Build an app with default API settings and a local auth provider
pub fn create_test_app() -> TestApp {
    create_test_app_with(ApiConfig::default())
}

pub fn create_test_app_with(api_config: ApiConfig) -> TestApp {
    let project_store = Arc::new(CountingKvStore::default());
    build_test_app(project_store.clone(), project_store, api_config)
}

/// App whose project store fails every call; accounts still work
pub fn create_failing_store_app() -> TestApp {
    build_test_app(
        Arc::new(FailingKvStore),
        Arc::new(CountingKvStore::default()),
        ApiConfig::default(),
    )
}

fn build_test_app(
    projects: Arc<dyn KvStore>,
    project_store: Arc<CountingKvStore>,
    api_config: ApiConfig,
) -> TestApp {
    let auth_store: Arc<dyn KvStore> = Arc::new(MemoryKvStore::new());

    let auth: Arc<dyn AuthProvider> = Arc::new(
        LocalAuthProvider::new(auth_store, TEST_SECRET, Duration::from_secs(3600))
            .with_hash_cost(TEST_HASH_COST),
    );

    let state = AppState {
        projects: ProjectRepository::new(projects),
        auth,
        api_config,
        cors_config: CorsConfig::default(),
    };

    TestApp {
        router: build_router(state.clone()),
        state,
        project_store,
    }
}

impl TestApp {
    /// Sign up and log in the admin, returning a bearer token
    pub async fn admin_token(&self) -> String {
        self.state
            .auth
            .sign_up(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .unwrap();

        self.state
            .auth
            .sign_in(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .unwrap()
            .access_token
    }

    /// Send a request under the route prefix and decode the JSON response
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(format!("{}{}", PREFIX, path));

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

        (status, json)
    }
}
