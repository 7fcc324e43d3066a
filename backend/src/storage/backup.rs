//! # Backup Rotation
//!
//! Persists a record under a primary key while keeping the previous write in a
//! backup key, so one corrupted value never wipes out all saved state.
//!
//! - `save` copies the current primary value into the backup slot, then writes
//!   the new value to the primary slot.
//! - `load` reads the primary slot and falls back to the backup slot, copying a
//!   good backup back over the primary.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::codec;
use super::traits::KeyValueStore;
use crate::error::StorageError;

/// Primary and backup key for one persisted record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotKeys {
    pub primary: &'static str,
    pub backup: &'static str,
}

/// Which slot a loaded value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Primary,
    Backup,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub slot: Slot,
}

#[derive(Clone)]
pub struct BackupRotationStore {
    store: Arc<dyn KeyValueStore>,
    keys: SlotKeys,
}

impl BackupRotationStore {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: SlotKeys) -> Self {
        Self { store, keys }
    }

    /// Serialize `value` and commit it to the primary slot, rotating the old
    /// primary into the backup slot first.
    ///
    /// Nothing is written if serialization fails, and the primary slot is not
    /// touched if the backup copy fails.
    pub async fn save<T: Serialize>(&self, value: &T) -> Result<(), StorageError> {
        let encoded = codec::encode(value)?;

        let existing = self.store.get_value(self.keys.primary).await?;
        if let Some(existing) = existing {
            self.store.put_value(self.keys.backup, &existing).await?;
        }

        self.store.put_value(self.keys.primary, &encoded).await?;
        debug!("Saved {} ({} bytes)", self.keys.primary, encoded.len());
        Ok(())
    }

    /// Read the record, recovering from the backup slot if the primary is
    /// missing or unreadable. Returns `None` when neither slot decodes.
    pub async fn load<T: DeserializeOwned>(&self) -> Option<Loaded<T>> {
        if let Some((value, _)) = self.read_slot::<T>(self.keys.primary).await {
            debug!("Loaded {} from primary slot", self.keys.primary);
            return Some(Loaded { value, slot: Slot::Primary });
        }

        let (value, raw) = self.read_slot::<T>(self.keys.backup).await?;
        warn!("Recovered {} from backup slot {}", self.keys.primary, self.keys.backup);

        if let Err(e) = self.store.put_value(self.keys.primary, &raw).await {
            error!("Failed to restore {} from backup: {}", self.keys.primary, e);
        }

        Some(Loaded { value, slot: Slot::Backup })
    }

    /// Decoded value plus the raw blob it came from; read errors count as a bad slot
    async fn read_slot<T: DeserializeOwned>(&self, key: &str) -> Option<(T, String)> {
        let raw = match self.store.get_value(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read {}: {}", key, e);
                return None;
            }
        };

        match codec::decode::<T>(&raw) {
            Ok(value) => Some((value, raw)),
            Err(e) => {
                warn!("Discarding unreadable value in {}: {}", key, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use serde::Deserialize;

    const KEYS: SlotKeys = SlotKeys {
        primary: "record",
        backup: "record_backup",
    };

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Counter {
        value: u32,
    }

    fn setup() -> (Arc<MemoryStore>, BackupRotationStore) {
        let kv = Arc::new(MemoryStore::new());
        let store = BackupRotationStore::new(kv.clone(), KEYS);
        (kv, store)
    }

    #[tokio::test]
    async fn test_first_save_leaves_backup_empty() {
        let (kv, store) = setup();
        store.save(&Counter { value: 1 }).await.unwrap();

        assert!(kv.get_value(KEYS.primary).await.unwrap().is_some());
        assert!(kv.get_value(KEYS.backup).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_rotates_previous_primary_into_backup() {
        let (kv, store) = setup();
        store.save(&Counter { value: 1 }).await.unwrap();
        let first_blob = kv.get_value(KEYS.primary).await.unwrap();

        store.save(&Counter { value: 2 }).await.unwrap();

        assert_eq!(kv.get_value(KEYS.backup).await.unwrap(), first_blob);
        let loaded = store.load::<Counter>().await.unwrap();
        assert_eq!(loaded.value, Counter { value: 2 });
        assert_eq!(loaded.slot, Slot::Primary);
    }

    #[tokio::test]
    async fn test_load_recovers_and_repairs_from_backup() {
        let (kv, store) = setup();
        store.save(&Counter { value: 1 }).await.unwrap();
        store.save(&Counter { value: 2 }).await.unwrap();
        kv.put_value(KEYS.primary, "{corrupt").await.unwrap();

        let loaded = store.load::<Counter>().await.unwrap();
        assert_eq!(loaded.value, Counter { value: 1 });
        assert_eq!(loaded.slot, Slot::Backup);

        // Primary now matches the backup it was recovered from
        assert_eq!(
            kv.get_value(KEYS.primary).await.unwrap(),
            kv.get_value(KEYS.backup).await.unwrap()
        );
        assert_eq!(store.load::<Counter>().await.unwrap().slot, Slot::Primary);
    }

    #[tokio::test]
    async fn test_load_treats_schema_mismatch_as_corrupt() {
        let (kv, store) = setup();
        kv.put_value(KEYS.primary, "{\"unrelated\": true}").await.unwrap();
        kv.put_value(KEYS.backup, "{\"value\": 7}").await.unwrap();

        let loaded = store.load::<Counter>().await.unwrap();
        assert_eq!(loaded.value, Counter { value: 7 });
    }

    #[tokio::test]
    async fn test_load_returns_none_when_both_slots_fail() {
        let (kv, store) = setup();
        assert!(store.load::<Counter>().await.is_none());

        kv.put_value(KEYS.primary, "garbage").await.unwrap();
        kv.put_value(KEYS.backup, "more garbage").await.unwrap();
        assert!(store.load::<Counter>().await.is_none());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_backup_and_primary() {
        let (kv, store) = setup();
        store.save(&Counter { value: 1 }).await.unwrap();
        store.save(&Counter { value: 2 }).await.unwrap();
        let primary_before = kv.get_value(KEYS.primary).await.unwrap();
        let backup_before = kv.get_value(KEYS.backup).await.unwrap();

        kv.set_reject_writes(true);
        let result = store.save(&Counter { value: 3 }).await;
        assert!(matches!(result, Err(StorageError::WriteRejected { .. })));

        assert_eq!(kv.get_value(KEYS.primary).await.unwrap(), primary_before);
        assert_eq!(kv.get_value(KEYS.backup).await.unwrap(), backup_before);

        // Next successful save resumes the rotation
        kv.set_reject_writes(false);
        store.save(&Counter { value: 3 }).await.unwrap();
        assert_eq!(kv.get_value(KEYS.backup).await.unwrap(), primary_before);
    }

    #[tokio::test]
    async fn test_failed_primary_write_leaves_last_good_value_in_both_slots() {
        let (kv, store) = setup();
        store.save(&Counter { value: 1 }).await.unwrap();
        store.save(&Counter { value: 2 }).await.unwrap();
        let primary_before = kv.get_value(KEYS.primary).await.unwrap();

        // Backup copy succeeds, the primary write does not
        kv.reject_writes_to(KEYS.primary);
        let result = store.save(&Counter { value: 3 }).await;
        assert!(matches!(
            result,
            Err(StorageError::WriteRejected { ref key, .. }) if key == KEYS.primary
        ));

        assert_eq!(kv.get_value(KEYS.primary).await.unwrap(), primary_before);
        assert_eq!(kv.get_value(KEYS.backup).await.unwrap(), primary_before);
        let loaded = store.load::<Counter>().await.unwrap();
        assert_eq!(loaded.value, Counter { value: 2 });
        assert_eq!(loaded.slot, Slot::Primary);

        kv.accept_all_keys();
        store.save(&Counter { value: 3 }).await.unwrap();
        assert_eq!(kv.get_value(KEYS.backup).await.unwrap(), primary_before);
        assert_eq!(store.load::<Counter>().await.unwrap().value, Counter { value: 3 });
    }

    #[tokio::test]
    async fn test_recovery_still_returns_value_when_repair_fails() {
        let (kv, store) = setup();
        kv.put_value(KEYS.backup, "{\"value\": 4}").await.unwrap();
        kv.set_reject_writes(true);

        let loaded = store.load::<Counter>().await.unwrap();
        assert_eq!(loaded.value, Counter { value: 4 });
        assert!(kv.get_value(KEYS.primary).await.unwrap().is_none());
    }
}
