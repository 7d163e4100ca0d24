use pf_core::Project;

use serde::Serialize;

/// Returned by create and update: `{"success": true, "project": {...}}`
#[derive(Debug, Serialize)]
pub struct ProjectMutationResponse {
    pub success: bool,
    pub project: Project,
}

impl ProjectMutationResponse {
    pub fn ok(project: Project) -> Self {
        Self {
            success: true,
            project,
        }
    }
}
