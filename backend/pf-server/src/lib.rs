pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_logging;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, signup},
        credentials_request::CredentialsRequest,
        login_response::LoginResponse,
        signup_response::SignupResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{admin_user::AdminUser, api_json::ApiJson},
    projects::{
        project_list_response::ProjectListResponse,
        project_mutation_response::ProjectMutationResponse,
        project_request::ProjectRequest,
        project_response::ProjectResponse,
        projects::{create_project, delete_project, get_project, list_projects, update_project},
    },
    success_response::SuccessResponse,
};
pub use app_state::AppState;

pub use crate::routes::build_router;
