pub mod error;
pub mod repositories;
pub mod stores;

pub use error::{Result, StoreError};
pub use repositories::project_repository::ProjectRepository;
pub use stores::kv_store::KvStore;
pub use stores::memory_kv_store::MemoryKvStore;
pub use stores::sqlite_kv_store::SqliteKvStore;
