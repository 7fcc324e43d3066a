//! Application configuration, loaded from environment variables at startup.
//!
//! A `.env` file in the working directory is honoured for local development.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Value of `DATABASE_URL` that selects the non-durable in-memory store
pub const MEMORY_STORAGE: &str = "memory";

const APP_DIRECTORY: &str = "phonics-flashcards";
const DATABASE_FILE: &str = "progress.db";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
    #[error("Could not determine a data directory; set DATABASE_URL")]
    NoDataDirectory,
}

/// Where the profile store is persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite(String),
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_address: SocketAddr,
    pub storage: StorageBackend,
    /// Catalog JSON to load instead of the bundled one
    pub catalog_path: Option<PathBuf>,
    /// Initial premium entitlement
    pub premium_unlocked: bool,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address_str =
            lookup("BIND_ADDRESS").unwrap_or_else(|| "127.0.0.1:3000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let storage = match lookup("DATABASE_URL") {
            Some(url) if url.eq_ignore_ascii_case(MEMORY_STORAGE) => StorageBackend::Memory,
            Some(url) if !url.trim().is_empty() => StorageBackend::Sqlite(url),
            _ => StorageBackend::Sqlite(default_database_url()?),
        };

        let catalog_path = lookup("PHONICS_CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let premium_unlocked = match lookup("PREMIUM_UNLOCKED") {
            Some(value) => value.trim().parse::<bool>().map_err(|e| {
                ConfigError::InvalidValue("PREMIUM_UNLOCKED".to_string(), e.to_string())
            })?,
            None => false,
        };

        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            bind_address,
            storage,
            catalog_path,
            premium_unlocked,
            log_filter,
        })
    }
}

/// SQLite file under the platform data directory
fn default_database_url() -> Result<String, ConfigError> {
    let dir = dirs::data_dir().ok_or(ConfigError::NoDataDirectory)?.join(APP_DIRECTORY);
    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::InvalidValue("DATABASE_URL".to_string(), e.to_string()))?;
    Ok(format!("sqlite:{}", dir.join(DATABASE_FILE).display()))
}
