//! Account REST API handlers
//!
//! Both routes are public. Errors from the auth provider are sorted into
//! client mistakes (400/401) and provider failures (500).

use crate::{
    ApiError, ApiJson, ApiResult, AppState, CredentialsRequest, LoginResponse, SignupResponse,
};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

const MISSING_CREDENTIALS: &str = "Email and password are required";

#[track_caller]
fn missing_credentials() -> ApiError {
    ApiError::BadRequest {
        message: MISSING_CREDENTIALS.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /{prefix}/signup
///
/// Create a pre-confirmed account. Disabled with 403 when
/// `api.allow_signup` is false.
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CredentialsRequest>,
) -> ApiResult<Json<SignupResponse>> {
    if !state.api_config.allow_signup {
        return Err(ApiError::Forbidden {
            message: "Sign up is disabled".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let (email, password) = request.into_parts().ok_or_else(missing_credentials)?;

    let user = state
        .auth
        .sign_up(&email, &password)
        .await
        .map_err(|e| match e.provider_message() {
            Some(message) => ApiError::BadRequest {
                message: message.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            None => ApiError::internal("Internal server error during sign up", e),
        })?;

    log::info!("Signed up {} via {} provider", user.email, state.auth.name());

    Ok(Json(SignupResponse {
        success: true,
        user,
    }))
}

/// POST /{prefix}/login
///
/// Exchange email and password for a bearer session
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CredentialsRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let (email, password) = request.into_parts().ok_or_else(missing_credentials)?;

    let session = state
        .auth
        .sign_in(&email, &password)
        .await
        .map_err(|e| {
            if e.is_unauthorized() {
                ApiError::Unauthorized {
                    message: "Invalid login credentials".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            } else if let Some(message) = e.provider_message() {
                ApiError::BadRequest {
                    message: message.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            } else {
                ApiError::internal("Internal server error during login", e)
            }
        })?;

    log::info!("Logged in {} via {} provider", session.user.email, state.auth.name());

    Ok(Json(LoginResponse {
        success: true,
        session,
    }))
}
