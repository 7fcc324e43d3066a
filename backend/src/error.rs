//! Error types for the storage and catalog layers.

use std::path::PathBuf;

/// Failures raised by the key-value adapters and the serialization helper.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Error from the underlying SQLite database.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A value could not be encoded, or stored bytes did not decode into the expected schema.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store refused the write.
    #[error("Write rejected for key '{key}': {reason}")]
    WriteRejected { key: String, reason: String },
}

/// Failures raised while loading the bundled card catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unable to find phonics data file at {0}")]
    FileNotFound(PathBuf),

    #[error("The phonics data is empty or unreadable")]
    InvalidData,

    #[error("Failed to decode phonics data: {0}")]
    DecodingFailed(#[from] serde_json::Error),
}
