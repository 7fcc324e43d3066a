//! # Storage Traits
//!
//! The key-value abstraction the persistence layer is written against. Any
//! backend that can get and set string values by string key can hold the
//! profile store (SQLite on disk, process memory for tests and throwaway runs).

use async_trait::async_trait;

use crate::error::StorageError;

/// Process-wide persistent key/value storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Retrieve the value stored under `key`
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any existing value
    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
