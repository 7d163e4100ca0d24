use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account as exposed to API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "pf_core::timestamp::option"
    )]
    pub created_at: Option<DateTime<Utc>>,
}
