//! # Storage Module
//!
//! Persistence for learner profiles and their progress.
//!
//! - **traits**: the `KeyValueStore` abstraction every backend implements
//! - **db**: SQLite-backed store (`key_values` table) via SQLx
//! - **memory**: in-process store for tests and throwaway runs
//! - **codec**: JSON encoding of persisted records
//! - **backup**: primary/backup slot rotation with recovery on load
//! - **progress_repository**: the profile store, its keys, and legacy migration

pub mod backup;
pub mod codec;
pub mod db;
pub mod memory;
pub mod progress_repository;
pub mod traits;

pub use backup::{BackupRotationStore, Loaded, Slot, SlotKeys};
pub use db::DbConnection;
pub use memory::MemoryStore;
pub use progress_repository::{LoadedStore, ProgressRepository, StoreFormat};
pub use traits::KeyValueStore;
