//! Self-contained auth backend.
//!
//! Accounts live in the shared key-value store under `user:<email>` with a
//! bcrypt password hash. Access tokens are HS256 JWTs signed with the
//! configured secret.

use crate::{
    AuthError, AuthProvider, AuthUser, JwtIssuer, JwtValidator, Result as AuthErrorResult, Session,
};

use pf_core::timestamp;
use pf_store::KvStore;

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const USER_KEY_PREFIX: &str = "user:";
pub const MIN_PASSWORD_LENGTH: usize = 6;

const INVALID_EMAIL_MESSAGE: &str = "Unable to validate email address: invalid format";
const DUPLICATE_EMAIL_MESSAGE: &str = "A user with this email address has already been registered";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAccount {
    id: String,
    email: String,
    password_hash: String,
    #[serde(default, with = "pf_core::timestamp::option")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    email_confirmed: bool,
}

impl StoredAccount {
    fn to_user(&self) -> AuthUser {
        AuthUser {
            id: self.id.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

pub struct LocalAuthProvider {
    store: Arc<dyn KvStore>,
    issuer: JwtIssuer,
    validator: JwtValidator,
    hash_cost: u32,
}

impl LocalAuthProvider {
    pub fn new(store: Arc<dyn KvStore>, jwt_secret: &[u8], token_ttl: Duration) -> Self {
        Self {
            store,
            issuer: JwtIssuer::with_hs256(jwt_secret, token_ttl),
            validator: JwtValidator::with_hs256(jwt_secret),
            hash_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Override the bcrypt work factor
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    fn account_key(email: &str) -> String {
        format!("{}{}", USER_KEY_PREFIX, normalize_email(email))
    }

    async fn load_account(&self, email: &str) -> AuthErrorResult<Option<StoredAccount>> {
        match self.store.get(&Self::account_key(email)).await? {
            Some(value) => serde_json::from_value(value).map(Some).map_err(|e| {
                AuthError::upstream(format!("Unreadable account record: {}", e))
            }),
            None => Ok(None),
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// bcrypt is CPU-bound; keep it off the async workers
async fn run_blocking<T, F>(f: F) -> AuthErrorResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, bcrypt::BcryptError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AuthError::Upstream {
            message: format!("Hashing task failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?
        .map_err(AuthError::from)
}

#[async_trait]
impl AuthProvider for LocalAuthProvider {
    async fn sign_up(&self, email: &str, password: &str) -> AuthErrorResult<AuthUser> {
        let email = normalize_email(email);
        if !email.contains('@') {
            return Err(AuthError::provider(INVALID_EMAIL_MESSAGE));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::provider(format!(
                "Password should be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        if self.load_account(&email).await?.is_some() {
            return Err(AuthError::provider(DUPLICATE_EMAIL_MESSAGE));
        }

        let cost = self.hash_cost;
        let plain = password.to_string();
        let password_hash = run_blocking(move || bcrypt::hash(plain, cost)).await?;

        let account = StoredAccount {
            id: Uuid::new_v4().to_string(),
            email: email.clone(),
            password_hash,
            created_at: Some(timestamp::now()),
            email_confirmed: true,
        };
        let value = serde_json::to_value(&account)
            .map_err(|e| AuthError::upstream(format!("Failed to encode account: {}", e)))?;
        self.store.set(&Self::account_key(&email), &value).await?;

        log::info!("Created account {} ({})", account.id, account.email);
        Ok(account.to_user())
    }

    async fn sign_in(&self, email: &str, password: &str) -> AuthErrorResult<Session> {
        let Some(account) = self.load_account(email).await? else {
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let plain = password.to_string();
        let hash = account.password_hash.clone();
        let matches = run_blocking(move || bcrypt::verify(plain, &hash)).await?;
        if !matches {
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token = self
            .issuer
            .issue(&account.id, &account.email, timestamp::now())?;

        Ok(Session::bearer(
            token,
            self.issuer.ttl().as_secs(),
            account.to_user(),
        ))
    }

    async fn verify(&self, token: &str) -> AuthErrorResult<AuthUser> {
        let claims = self.validator.validate(token)?;

        match self.load_account(&claims.email).await? {
            Some(account) if account.id == claims.sub => Ok(account.to_user()),
            _ => Err(AuthError::invalid_token("account no longer exists")),
        }
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
