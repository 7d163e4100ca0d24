//! Project REST API handlers
//!
//! Reads are public. Create, update and delete require an [`AdminUser`],
//! which is extracted before the body so an unauthenticated request never
//! reaches the store.

use crate::{
    AdminUser, ApiError, ApiJson, ApiResult, AppState, ProjectListResponse,
    ProjectMutationResponse, ProjectRequest, ProjectResponse, SuccessResponse,
};

use axum::{
    Json,
    extract::{Path, State},
};

const PROJECT_NOT_FOUND: &str = "Project not found";

// =============================================================================
// Handlers
// =============================================================================

/// GET /{prefix}/projects
///
/// List all projects, newest first
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<ProjectListResponse>> {
    let projects = state
        .projects
        .find_all()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch projects", e))?;

    Ok(Json(ProjectListResponse { projects }))
}

/// GET /{prefix}/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let project = state
        .projects
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch project", e))?
        .ok_or_else(|| ApiError::not_found(PROJECT_NOT_FOUND))?;

    Ok(Json(ProjectResponse { project }))
}

/// POST /{prefix}/projects
pub async fn create_project(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
    ApiJson(request): ApiJson<ProjectRequest>,
) -> ApiResult<Json<ProjectMutationResponse>> {
    let draft = request.into_draft()?;

    let project = state
        .projects
        .create(draft)
        .await
        .map_err(|e| ApiError::internal("Failed to create project", e))?;

    log::info!("Created project {} by {} via REST API", project.id, user.email);

    Ok(Json(ProjectMutationResponse::ok(project)))
}

/// PUT /{prefix}/projects/{id}
///
/// Full replacement of the mutable fields. The body is validated before the
/// lookup, so a bad body on an unknown id is a 400, not a 404.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AdminUser(user): AdminUser,
    ApiJson(request): ApiJson<ProjectRequest>,
) -> ApiResult<Json<ProjectMutationResponse>> {
    let draft = request.into_draft()?;

    let project = state
        .projects
        .update(&id, draft)
        .await
        .map_err(|e| ApiError::internal("Failed to update project", e))?
        .ok_or_else(|| ApiError::not_found(PROJECT_NOT_FOUND))?;

    log::info!("Updated project {} by {} via REST API", project.id, user.email);

    Ok(Json(ProjectMutationResponse::ok(project)))
}

/// DELETE /{prefix}/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AdminUser(user): AdminUser,
) -> ApiResult<Json<SuccessResponse>> {
    let deleted = state
        .projects
        .delete(&id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete project", e))?;

    if !deleted {
        return Err(ApiError::not_found(PROJECT_NOT_FOUND));
    }

    log::info!("Deleted project {} by {} via REST API", id, user.email);

    Ok(Json(SuccessResponse::ok()))
}
