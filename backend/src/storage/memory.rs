use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use super::traits::KeyValueStore;
use crate::error::StorageError;

/// Non-durable key/value store kept in process memory.
///
/// Used for throwaway runs (`DATABASE_URL=memory`) and tests. Writes can be
/// switched off, for every key or for chosen keys, to exercise the persistence
/// failure paths.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<BTreeMap<String, String>>,
    reject_writes: AtomicBool,
    rejected_keys: RwLock<BTreeSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail (or succeed again)
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Make writes to `key` fail while other keys stay writable
    pub fn reject_writes_to(&self, key: &str) {
        let mut keys = self.rejected_keys.write().unwrap_or_else(|e| e.into_inner());
        keys.insert(key.to_string());
    }

    /// Undo every `reject_writes_to`
    pub fn accept_all_keys(&self) {
        let mut keys = self.rejected_keys.write().unwrap_or_else(|e| e.into_inner());
        keys.clear();
    }

    fn check_writable(&self, key: &str) -> Result<(), StorageError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteRejected {
                key: key.to_string(),
                reason: "store is read-only".to_string(),
            });
        }

        let keys = self.rejected_keys.read().unwrap_or_else(|e| e.into_inner());
        if keys.contains(key) {
            return Err(StorageError::WriteRejected {
                key: key.to_string(),
                reason: "key is read-only".to_string(),
            });
        }
        Ok(())
    }
}

// A poisoned lock only means another writer panicked mid-insert; the map itself is still valid.
#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.read().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable(key)?;
        let mut values = self.values.write().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryStore::new();
        assert!(store.get_value("a").await.unwrap().is_none());

        store.put_value("a", "1").await.unwrap();
        store.put_value("a", "2").await.unwrap();
        assert_eq!(store.get_value("a").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_rejected_writes_leave_values_alone() {
        let store = MemoryStore::new();
        store.put_value("a", "1").await.unwrap();
        store.set_reject_writes(true);

        let err = store.put_value("a", "2").await.unwrap_err();
        assert!(matches!(err, StorageError::WriteRejected { .. }));
        assert_eq!(store.get_value("a").await.unwrap().as_deref(), Some("1"));

        store.set_reject_writes(false);
        store.put_value("a", "2").await.unwrap();
        assert_eq!(store.get_value("a").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_rejecting_one_key_leaves_others_writable() {
        let store = MemoryStore::new();
        store.reject_writes_to("locked");

        let err = store.put_value("locked", "1").await.unwrap_err();
        assert!(matches!(err, StorageError::WriteRejected { ref key, .. } if key == "locked"));
        store.put_value("open", "1").await.unwrap();
        assert!(store.get_value("locked").await.unwrap().is_none());

        store.accept_all_keys();
        store.put_value("locked", "1").await.unwrap();
        assert_eq!(store.get_value("locked").await.unwrap().as_deref(), Some("1"));
    }
}
