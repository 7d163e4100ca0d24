use pf_core::Project;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub project: Project,
}
