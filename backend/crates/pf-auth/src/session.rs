use crate::AuthUser;

use serde::{Deserialize, Serialize};

pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Result of a successful password login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
    pub user: AuthUser,
}

impl Session {
    pub fn bearer(access_token: String, expires_in: u64, user: AuthUser) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in,
            user,
        }
    }
}
