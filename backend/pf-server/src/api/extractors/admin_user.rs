//! Bearer-token gate for mutating project routes

use crate::{ApiError, AppState};

use pf_auth::{AuthUser, bearer_token};

use std::future::Future;
use std::panic::Location;

use axum::extract::FromRequestParts;
use error_location::ErrorLocation;
use http::{Method, header::AUTHORIZATION, request::Parts};

/// The authenticated caller of a create, update or delete request.
///
/// Rejects with 401 when the `Authorization` header is missing, is not a
/// bearer token, or the auth provider does not accept the token.
pub struct AdminUser(pub AuthUser);

fn action(method: &Method) -> &'static str {
    match *method {
        Method::POST => "create",
        Method::PUT => "update",
        Method::DELETE => "delete",
        _ => "modify",
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let unauthorized = || ApiError::Unauthorized {
                message: format!(
                    "Unauthorized - please log in to {} projects",
                    action(&parts.method)
                ),
                location: ErrorLocation::from(Location::caller()),
            };

            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = match bearer_token(header) {
                Ok(token) => token.to_string(),
                Err(e) => {
                    log::debug!("Rejected {} {}: {}", parts.method, parts.uri.path(), e);
                    return Err(unauthorized());
                }
            };

            match state.auth.verify(&token).await {
                Ok(user) => Ok(AdminUser(user)),
                Err(e) if e.is_unauthorized() => {
                    log::debug!("Token rejected by {} provider: {}", state.auth.name(), e);
                    Err(unauthorized())
                }
                Err(e) => {
                    log::error!("Token check failed at {} provider: {}", state.auth.name(), e);
                    Err(unauthorized())
                }
            }
        }
    }
}
