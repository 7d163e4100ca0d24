//! Hosted GoTrue (Supabase Auth) backend over its REST API.

use crate::{AuthError, AuthProvider, AuthUser, Result as AuthErrorResult, Session};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct SupabaseSettings {
    /// Project URL, e.g. `https://abc.supabase.co`
    pub url: String,
    pub service_role_key: String,
    /// Public key for user-facing calls; the service key is used when unset
    pub anon_key: Option<String>,
}

pub struct SupabaseAuthProvider {
    settings: SupabaseSettings,
    client: ReqwestClient,
}

#[derive(Serialize)]
struct AdminCreateUser<'a> {
    email: &'a str,
    password: &'a str,
    email_confirm: bool,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct GoTrueUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default, with = "pf_core::timestamp::option")]
    created_at: Option<DateTime<Utc>>,
}

impl From<GoTrueUser> for AuthUser {
    fn from(user: GoTrueUser) -> Self {
        Self {
            id: user.id,
            email: user.email.unwrap_or_default(),
            created_at: user.created_at,
        }
    }
}

#[derive(Deserialize)]
struct GoTrueSession {
    access_token: String,
    expires_in: u64,
    user: GoTrueUser,
}

/// GoTrue reports errors under different keys depending on the endpoint
#[derive(Deserialize, Default)]
struct GoTrueError {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl GoTrueError {
    fn into_message(self, status: StatusCode) -> String {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
            .unwrap_or_else(|| format!("Auth provider returned {}", status))
    }
}

impl SupabaseAuthProvider {
    #[track_caller]
    pub fn new(settings: SupabaseSettings) -> AuthErrorResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            settings: SupabaseSettings {
                url: settings.url.trim_end_matches('/').to_string(),
                ..settings
            },
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.settings.url, path)
    }

    fn public_key(&self) -> &str {
        self.settings
            .anon_key
            .as_deref()
            .unwrap_or(&self.settings.service_role_key)
    }

    fn admin_request(&self, request: RequestBuilder) -> RequestBuilder {
        let key = &self.settings.service_role_key;
        request.header("apikey", key).bearer_auth(key)
    }

    async fn error_message(response: Response) -> String {
        let status = response.status();
        response
            .json::<GoTrueError>()
            .await
            .unwrap_or_default()
            .into_message(status)
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuthProvider {
    async fn sign_up(&self, email: &str, password: &str) -> AuthErrorResult<AuthUser> {
        let body = AdminCreateUser {
            email,
            password,
            email_confirm: true,
        };
        let response = self
            .admin_request(self.client.post(self.url("/admin/users")))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_server_error() {
            return Err(AuthError::upstream(Self::error_message(response).await));
        }
        if !status.is_success() {
            return Err(AuthError::provider(Self::error_message(response).await));
        }

        let user: GoTrueUser = response.json().await?;
        Ok(user.into())
    }

    async fn sign_in(&self, email: &str, password: &str) -> AuthErrorResult<Session> {
        let response = self
            .client
            .post(self.url("/token?grant_type=password"))
            .header("apikey", self.public_key())
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
            log::warn!(
                "Supabase rejected login: {}",
                Self::error_message(response).await
            );
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if !status.is_success() {
            return Err(AuthError::upstream(Self::error_message(response).await));
        }

        let session: GoTrueSession = response.json().await?;
        Ok(Session::bearer(
            session.access_token,
            session.expires_in,
            session.user.into(),
        ))
    }

    async fn verify(&self, token: &str) -> AuthErrorResult<AuthUser> {
        let response = self
            .client
            .get(self.url("/user"))
            .header("apikey", self.public_key())
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if status.is_server_error() {
            return Err(AuthError::upstream(Self::error_message(response).await));
        }
        if !status.is_success() {
            return Err(AuthError::invalid_token(Self::error_message(response).await));
        }

        let user: GoTrueUser = response.json().await?;
        Ok(user.into())
    }

    fn name(&self) -> &'static str {
        "supabase"
    }
}
