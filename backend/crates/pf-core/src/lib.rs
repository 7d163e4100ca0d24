pub mod error;
pub mod models;
pub mod timestamp;

pub use error::{CoreError, Result};
pub use models::project::{Project, sort_newest_first};
pub use models::project_draft::ProjectDraft;
pub use models::project_id::{PROJECT_KEY_PREFIX, ProjectId};

#[cfg(test)]
mod tests;
