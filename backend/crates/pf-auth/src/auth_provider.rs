use crate::{AuthUser, Result as AuthErrorResult, Session};

use async_trait::async_trait;

/// Identity backend: account creation, password login and token checks
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Create a pre-confirmed account
    async fn sign_up(&self, email: &str, password: &str) -> AuthErrorResult<AuthUser>;

    async fn sign_in(&self, email: &str, password: &str) -> AuthErrorResult<Session>;

    /// Resolve a bearer token to its user, or fail with an unauthorized error
    async fn verify(&self, token: &str) -> AuthErrorResult<AuthUser>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}
