//! Project entity - a single portfolio entry.

use crate::{ProjectDraft, ProjectId};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A portfolio entry as stored under its id.
///
/// Timestamps are optional on read so that records written without them
/// still load; every record created here carries both. Unknown fields are
/// kept in `extra` and written back untouched on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub roblox_link: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::option"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::timestamp::option"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// Create a new project with a freshly generated id
    pub fn new(draft: ProjectDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: ProjectId::generate(now),
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            roblox_link: draft.roblox_link,
            created_at: Some(now),
            updated_at: Some(now),
            extra: Map::new(),
        }
    }

    /// Replace the mutable fields and refresh `updated_at`.
    ///
    /// `id`, `created_at` and `extra` are left alone. `updated_at` always
    /// moves forward, by one millisecond when `now` is not past it.
    pub fn apply(&mut self, draft: ProjectDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.description = draft.description;
        self.image_url = draft.image_url;
        self.roblox_link = draft.roblox_link;

        self.updated_at = Some(match self.updated_at {
            Some(previous) if now <= previous => previous + Duration::milliseconds(1),
            _ => now,
        });
    }

    /// Creation time, with missing values treated as the Unix epoch
    pub fn created_at_or_epoch(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or(DateTime::UNIX_EPOCH)
    }
}

/// Order projects newest first. Ties keep their incoming order.
pub fn sort_newest_first(projects: &mut [Project]) {
    projects.sort_by_key(|p| std::cmp::Reverse(p.created_at_or_epoch()));
}
