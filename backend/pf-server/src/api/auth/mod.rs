#[allow(clippy::module_inception)]
pub mod auth;
pub mod credentials_request;
pub mod login_response;
pub mod signup_response;
