pub mod auth_provider;
pub mod auth_user;
pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_issuer;
pub mod jwt_validator;
pub mod providers;
pub mod session;

pub use auth_provider::AuthProvider;
pub use auth_user::AuthUser;
pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_issuer::JwtIssuer;
pub use jwt_validator::JwtValidator;
pub use providers::local_auth_provider::LocalAuthProvider;
pub use providers::supabase_auth_provider::{SupabaseAuthProvider, SupabaseSettings};
pub use session::Session;
