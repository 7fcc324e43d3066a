//! Encoding of persisted records to and from the text blobs held in the key-value store.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

pub fn encode<T: Serialize>(value: &T) -> Result<String, StorageError> {
    Ok(serde_json::to_string(value)?)
}

/// Fails on corrupt bytes and on well-formed data of the wrong shape alike
pub fn decode<T: DeserializeOwned>(blob: &str) -> Result<T, StorageError> {
    Ok(serde_json::from_str(blob)?)
}
