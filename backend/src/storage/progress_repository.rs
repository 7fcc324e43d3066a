use std::sync::Arc;
use tracing::{info, warn};

use shared::{ChildProfile, ProfileColor, ProfileProgressRecord, ProfileStore, UserProgressData};

use super::backup::{BackupRotationStore, Slot, SlotKeys};
use super::traits::KeyValueStore;
use crate::error::StorageError;

pub const PROFILE_STORE_KEYS: SlotKeys = SlotKeys {
    primary: "user_profile_progress_store_v1",
    backup: "user_profile_progress_store_backup_v1",
};

/// Pre-profile layout: a bare `UserProgressData` with no profile wrapper
pub const LEGACY_PROGRESS_KEYS: SlotKeys = SlotKeys {
    primary: "user_progress_data",
    backup: "user_progress_data_backup",
};

/// Name and color given to the profile synthesized on first launch or migration
pub const DEFAULT_PROFILE_NAME: &str = "Learner 1";
pub const DEFAULT_PROFILE_COLOR: ProfileColor = ProfileColor::Sky;

/// Persisted layouts the repository knows how to read, newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    Current,
    LegacySingleProfile,
}

/// Order in which formats are tried on load
pub const LOAD_CHAIN: [StoreFormat; 2] = [StoreFormat::Current, StoreFormat::LegacySingleProfile];

/// A store recovered from persistence, and how it was found
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedStore {
    pub store: ProfileStore,
    pub format: StoreFormat,
    pub slot: Slot,
}

/// Reads and writes the profile store through backup-rotated slots
#[derive(Clone)]
pub struct ProgressRepository {
    current: BackupRotationStore,
    legacy: BackupRotationStore,
}

impl ProgressRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            current: BackupRotationStore::new(store.clone(), PROFILE_STORE_KEYS),
            legacy: BackupRotationStore::new(store, LEGACY_PROGRESS_KEYS),
        }
    }

    /// Persist the store; always written in the current format
    pub async fn save_store(&self, store: &ProfileStore) -> Result<(), StorageError> {
        self.current.save(store).await
    }

    /// Walk `LOAD_CHAIN` and return the first format that decodes, or `None`
    /// when there is no usable data at all.
    pub async fn load_store(&self) -> Option<LoadedStore> {
        for format in LOAD_CHAIN {
            if let Some(loaded) = self.load_format(format).await {
                info!(
                    "Loaded profile store from {:?} format ({:?} slot)",
                    loaded.format, loaded.slot
                );
                return Some(loaded);
            }
        }

        warn!("No existing progress data found");
        None
    }

    async fn load_format(&self, format: StoreFormat) -> Option<LoadedStore> {
        match format {
            StoreFormat::Current => {
                let loaded = self.current.load::<ProfileStore>().await?;
                Some(LoadedStore {
                    store: loaded.value,
                    format,
                    slot: loaded.slot,
                })
            }
            StoreFormat::LegacySingleProfile => {
                let loaded = self.legacy.load::<UserProgressData>().await?;
                info!("Migrating legacy single-profile progress into '{}'", DEFAULT_PROFILE_NAME);
                Some(LoadedStore {
                    store: migrate_legacy_progress(loaded.value),
                    format,
                    slot: loaded.slot,
                })
            }
        }
    }
}

fn migrate_legacy_progress(progress: UserProgressData) -> ProfileStore {
    let profile = ChildProfile::new(DEFAULT_PROFILE_NAME, DEFAULT_PROFILE_COLOR);
    let active_profile_id = Some(profile.id);
    ProfileStore {
        profiles: vec![ProfileProgressRecord { profile, progress }],
        active_profile_id,
    }
}
