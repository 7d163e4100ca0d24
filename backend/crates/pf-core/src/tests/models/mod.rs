mod project;
mod project_draft;
mod project_id;
