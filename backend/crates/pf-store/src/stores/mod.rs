pub mod kv_store;
pub mod memory_kv_store;
pub mod sqlite_kv_store;
