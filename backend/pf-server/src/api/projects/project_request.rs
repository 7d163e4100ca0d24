use pf_core::{ProjectDraft, Result as CoreErrorResult};

use serde::Deserialize;

/// Body of POST and PUT `/projects`. Presence of `title` and `imageUrl`
/// is checked in [`ProjectRequest::into_draft`], not during decoding.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub roblox_link: Option<String>,
}

impl ProjectRequest {
    #[track_caller]
    pub fn into_draft(self) -> CoreErrorResult<ProjectDraft> {
        ProjectDraft::new(
            self.title,
            self.description,
            self.image_url,
            self.roblox_link,
        )
    }
}
