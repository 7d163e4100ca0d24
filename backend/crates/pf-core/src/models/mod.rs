pub mod project;
pub mod project_draft;
pub mod project_id;
