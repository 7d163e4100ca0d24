//! Key-value persistence seam.
//!
//! Values are arbitrary JSON documents addressed by string keys. Every
//! method is a single atomic operation; callers composing a read and a
//! write get no isolation between them.

use crate::Result as StoreErrorResult;

use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait KvStore: Send + Sync {
    /// Fetch the value stored under `key`
    async fn get(&self, key: &str) -> StoreErrorResult<Option<Value>>;

    /// Insert or overwrite the value under `key`
    async fn set(&self, key: &str, value: &Value) -> StoreErrorResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn del(&self, key: &str) -> StoreErrorResult<()>;

    /// Every `(key, value)` whose key starts with `prefix`, ordered by key.
    /// The match is case-sensitive.
    async fn get_by_prefix(&self, prefix: &str) -> StoreErrorResult<Vec<(String, Value)>>;
}
