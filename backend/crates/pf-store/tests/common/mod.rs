#![allow(dead_code)]

use pf_core::ProjectDraft;
use pf_store::{KvStore, MemoryKvStore, ProjectRepository, SqliteKvStore};

use std::sync::Arc;

/// Repository over a fresh in-memory store, plus the store itself for
/// seeding and inspection
pub fn memory_repository() -> (ProjectRepository, Arc<dyn KvStore>) {
    let store: Arc<dyn KvStore> = Arc::new(MemoryKvStore::new());
    (ProjectRepository::new(store.clone()), store)
}

/// Repository over a migrated in-memory SQLite database
pub async fn sqlite_repository() -> (ProjectRepository, Arc<dyn KvStore>) {
    let store: Arc<dyn KvStore> = Arc::new(
        SqliteKvStore::in_memory()
            .await
            .expect("Failed to create test database"),
    );
    (ProjectRepository::new(store.clone()), store)
}

pub fn draft(title: &str, image_url: &str) -> ProjectDraft {
    ProjectDraft::new(Some(title.to_string()), None, Some(image_url.to_string()), None)
        .expect("valid draft")
}
