//! Project CRUD over a [`KvStore`], confined to the `project:` key prefix.
//!
//! Every operation is one read and at most one write. Nothing guards a
//! read-then-write sequence; concurrent updates to one id race and the last
//! write wins.

use crate::{KvStore, Result as StoreErrorResult};

use pf_core::{PROJECT_KEY_PREFIX, Project, ProjectDraft, ProjectId, sort_newest_first, timestamp};

use std::sync::Arc;

use serde_json::Value;

#[derive(Clone)]
pub struct ProjectRepository {
    store: Arc<dyn KvStore>,
}

impl ProjectRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// All projects, newest first. Undecodable records are skipped.
    pub async fn find_all(&self) -> StoreErrorResult<Vec<Project>> {
        let entries = self.store.get_by_prefix(PROJECT_KEY_PREFIX).await?;

        let mut projects: Vec<Project> = entries
            .into_iter()
            .filter_map(|(key, value)| match decode(&key, value) {
                Ok(project) => Some(project),
                Err(e) => {
                    log::warn!("Skipping unreadable project record {}: {}", key, e);
                    None
                }
            })
            .collect();

        sort_newest_first(&mut projects);
        Ok(projects)
    }

    /// Look up one project. Keys outside the project namespace are never read.
    pub async fn find_by_id(&self, id: &str) -> StoreErrorResult<Option<Project>> {
        let Ok(id) = ProjectId::parse(id) else {
            return Ok(None);
        };

        match self.store.get(id.as_str()).await? {
            Some(value) => Ok(Some(decode(id.as_str(), value)?)),
            None => Ok(None),
        }
    }

    pub async fn create(&self, draft: ProjectDraft) -> StoreErrorResult<Project> {
        let project = Project::new(draft, timestamp::now());

        self.save(&project).await?;

        Ok(project)
    }

    /// Replace the mutable fields of an existing project.
    ///
    /// Returns `None` without writing when the id is unknown.
    pub async fn update(&self, id: &str, draft: ProjectDraft) -> StoreErrorResult<Option<Project>> {
        let Some(mut project) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        project.apply(draft, timestamp::now());
        self.save(&project).await?;

        Ok(Some(project))
    }

    /// Returns whether a project was removed
    pub async fn delete(&self, id: &str) -> StoreErrorResult<bool> {
        let Ok(id) = ProjectId::parse(id) else {
            return Ok(false);
        };

        if self.store.get(id.as_str()).await?.is_none() {
            return Ok(false);
        }

        self.store.del(id.as_str()).await?;

        Ok(true)
    }

    async fn save(&self, project: &Project) -> StoreErrorResult<()> {
        let value = serde_json::to_value(project)?;
        self.store.set(project.id.as_str(), &value).await
    }
}

/// Decode a stored record under `key`. The key is authoritative: it fills a
/// missing `id` and replaces a mismatched one.
fn decode(key: &str, mut value: Value) -> serde_json::Result<Project> {
    if let Some(record) = value.as_object_mut() {
        record.insert("id".to_string(), Value::String(key.to_string()));
    }
    serde_json::from_value(value)
}
