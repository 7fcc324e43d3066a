//! # Phonics Flashcards Backend
//!
//! Non-UI logic for the phonics flashcards app: learner profiles and their
//! progress, the bundled card catalog, and the marketing site's price table.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (profile registry, catalog, pricing)
//!     ↓
//! Storage Layer (backup-rotated key-value persistence)
//! ```
//!
//! Services are constructed explicitly in `initialize_backend` and handed to
//! the router through `AppState`; there are no process-wide singletons.

pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::Method,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::{AppConfig, StorageBackend};
use crate::domain::{Entitlements, PhonicsCatalog, ProfileService};
use crate::io::rest;
use crate::storage::{DbConnection, KeyValueStore, MemoryStore, ProgressRepository};

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub profile_service: ProfileService,
    pub catalog: Arc<PhonicsCatalog>,
    pub entitlements: Entitlements,
}

impl AppState {
    pub fn new(
        profile_service: ProfileService,
        catalog: PhonicsCatalog,
        entitlements: Entitlements,
    ) -> Self {
        Self {
            profile_service,
            catalog: Arc::new(catalog),
            entitlements,
        }
    }
}

/// Open storage, load the profile registry, the catalog and the entitlement
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    let store: Arc<dyn KeyValueStore> = match &config.storage {
        StorageBackend::Sqlite(url) => {
            info!("Opening progress database: {}", url);
            Arc::new(
                DbConnection::new(url)
                    .await
                    .with_context(|| format!("Failed to open database {}", url))?,
            )
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage; progress will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    info!("Loading profiles");
    let profile_service = ProfileService::initialize(ProgressRepository::new(store)).await;

    let catalog = match &config.catalog_path {
        Some(path) => PhonicsCatalog::from_path(path)?,
        None => PhonicsCatalog::bundled()?,
    };
    info!(
        "Catalog ready: {} cards ({} free, {} premium)",
        catalog.total_cards(),
        catalog.free_cards_count(),
        catalog.premium_cards_count()
    );

    let entitlements = Entitlements::new(config.premium_unlocked);
    info!("Premium unlocked: {}", entitlements.is_premium_unlocked());

    Ok(AppState::new(profile_service, catalog, entitlements))
}

/// Build the API router with CORS enabled
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/profiles", get(rest::list_profiles).post(rest::create_profile))
        .route("/profiles/active", post(rest::set_active_profile))
        .route("/profiles/:id", put(rest::update_profile))
        .route("/progress", get(rest::get_progress))
        .route("/progress/mastered", post(rest::mark_word_mastered))
        .route("/progress/sessions", post(rest::record_study_session))
        .route("/progress/reset", post(rest::reset_progress))
        .route(
            "/save-status",
            get(rest::get_save_status).delete(rest::dismiss_save_error),
        )
        .route("/cards", get(rest::list_cards))
        .route("/pricing", get(rest::get_pricing))
        .route("/pricing/countries", get(rest::list_countries));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state)
}
