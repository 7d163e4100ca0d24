use crate::{
    ApiError, AppState, create_project, delete_project, get_project, health, list_projects, login,
    request_logging, signup, update_project,
};

use std::time::Duration;

use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE},
    },
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints under `/{route_prefix}`
pub fn build_router(state: AppState) -> Router {
    let prefix = format!("/{}", state.api_config.route_prefix);
    let cors = cors_layer(state.cors_config.max_age_secs);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Accounts
        .route("/signup", post(signup))
        .route("/login", post(login))
        // Projects
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        );

    Router::new()
        .nest(&prefix, api)
        .fallback(|| async { ApiError::not_found("Route not found") })
        .with_state(state)
        .layer(cors)
        .layer(from_fn(request_logging::log_requests))
}

fn cors_layer(max_age_secs: u64) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .expose_headers([CONTENT_LENGTH])
        .max_age(Duration::from_secs(max_age_secs))
}
