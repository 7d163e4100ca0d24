pub mod auth;
pub mod error;
pub mod extractors;
pub mod projects;
pub mod success_response;
