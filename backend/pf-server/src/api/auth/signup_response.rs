use pf_auth::AuthUser;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub user: AuthUser,
}
