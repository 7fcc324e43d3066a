//! # REST API Interface Layer
//!
//! HTTP endpoints over the profile registry, the card catalog and the pricing
//! table. Handlers translate requests into service calls and outcomes into
//! status codes; no business rules live here.
//!
//! Mutations answer with a `ChangeResponse`. A skipped mutation maps to
//! `404`/`409`; a change that applied but could not be saved is still `200`,
//! with `saved = false` and the storage error attached so the client can show it.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use shared::{
    CardListResponse, ChangeResponse, CountryListResponse, CreateProfileRequest,
    LocalizedPriceResponse, MarkWordMasteredRequest, ProfileListResponse,
    ProgressSummaryResponse, RecordStudySessionRequest, SaveStatusResponse,
    SetActiveProfileRequest, UpdateProfileRequest,
};

use crate::domain::pricing;
use crate::domain::{ChangeOutcome, SkipReason};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PricingQuery {
    pub country: Option<String>,
}

fn change_response(
    outcome: ChangeOutcome,
    success_message: &str,
    success_status: StatusCode,
) -> (StatusCode, Json<ChangeResponse>) {
    match outcome {
        ChangeOutcome::Saved => (
            success_status,
            Json(ChangeResponse {
                applied: true,
                saved: true,
                message: success_message.to_string(),
                save_error: None,
            }),
        ),
        ChangeOutcome::Unsaved { error } => (
            success_status,
            Json(ChangeResponse {
                applied: true,
                saved: false,
                message: format!("{}, but it could not be saved", success_message),
                save_error: Some(error),
            }),
        ),
        ChangeOutcome::Skipped(reason) => {
            let (status, message) = match reason {
                SkipReason::UnknownProfile => (StatusCode::NOT_FOUND, "Profile not found"),
                SkipReason::ProfileLimitReached => (StatusCode::CONFLICT, "Profile limit reached"),
                SkipReason::NoActiveProfile => (StatusCode::CONFLICT, "No active profile"),
            };
            (
                status,
                Json(ChangeResponse {
                    applied: false,
                    saved: false,
                    message: message.to_string(),
                    save_error: None,
                }),
            )
        }
    }
}

/// GET /api/profiles
pub async fn list_profiles(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/profiles");
    let service = &state.profile_service;

    let response = ProfileListResponse {
        profiles: service.profiles().await,
        active_profile_id: Some(service.active_profile_id().await),
        can_add_more_profiles: service.can_add_more_profiles().await,
        remaining_profile_slots: service.remaining_profile_slots().await,
        suggested_profile_name: service.suggested_profile_name().await,
        suggested_profile_color: service.suggested_profile_color().await,
    };
    (StatusCode::OK, Json(response))
}

/// POST /api/profiles
pub async fn create_profile(
    State(state): State<AppState>,
    Json(request): Json<CreateProfileRequest>,
) -> impl IntoResponse {
    info!("POST /api/profiles - request: {:?}", request);
    let outcome = state.profile_service.add_profile(&request.name, request.color).await;
    change_response(outcome, "Profile created", StatusCode::CREATED)
}

/// PUT /api/profiles/:id
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProfileRequest>,
) -> impl IntoResponse {
    info!("PUT /api/profiles/{} - request: {:?}", id, request);
    let outcome = state
        .profile_service
        .update_profile(id, &request.name, request.color)
        .await;
    change_response(outcome, "Profile updated", StatusCode::OK)
}

/// POST /api/profiles/active
pub async fn set_active_profile(
    State(state): State<AppState>,
    Json(request): Json<SetActiveProfileRequest>,
) -> impl IntoResponse {
    info!("POST /api/profiles/active - profile: {}", request.profile_id);
    let outcome = state.profile_service.set_active_profile(request.profile_id).await;
    change_response(outcome, "Active profile changed", StatusCode::OK)
}

/// GET /api/progress
pub async fn get_progress(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/progress");
    let service = &state.profile_service;
    let progress = service.active_progress().await;

    let response = ProgressSummaryResponse {
        active_profile: service.active_profile().await,
        display_name: service.active_profile_display_name().await,
        total_cards_studied: progress.total_cards_studied(),
        total_study_sessions: progress.total_study_sessions,
        total_words_mastered: progress.total_words_mastered(),
        progress,
    };
    (StatusCode::OK, Json(response))
}

/// POST /api/progress/mastered
pub async fn mark_word_mastered(
    State(state): State<AppState>,
    Json(request): Json<MarkWordMasteredRequest>,
) -> impl IntoResponse {
    info!("POST /api/progress/mastered - request: {:?}", request);
    let outcome = state
        .profile_service
        .mark_word_mastered(&request.card_title, &request.word)
        .await;
    change_response(outcome, "Word marked as mastered", StatusCode::OK)
}

/// POST /api/progress/sessions
pub async fn record_study_session(
    State(state): State<AppState>,
    Json(request): Json<RecordStudySessionRequest>,
) -> impl IntoResponse {
    info!("POST /api/progress/sessions - card: {}", request.card_title);
    let outcome = state.profile_service.record_study_session(&request.card_title).await;
    change_response(outcome, "Study session recorded", StatusCode::OK)
}

/// POST /api/progress/reset
pub async fn reset_progress(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/progress/reset");
    let outcome = state.profile_service.reset_active_progress().await;
    change_response(outcome, "Progress reset", StatusCode::OK)
}

/// GET /api/save-status
pub async fn get_save_status(State(state): State<AppState>) -> impl IntoResponse {
    let status = state.profile_service.save_status().await;
    Json(SaveStatusResponse {
        last_save_error: status.last_save_error,
        show_save_error_alert: status.show_save_error_alert,
    })
}

/// DELETE /api/save-status
pub async fn dismiss_save_error(State(state): State<AppState>) -> impl IntoResponse {
    info!("DELETE /api/save-status");
    state.profile_service.dismiss_save_error().await;
    StatusCode::NO_CONTENT
}

/// GET /api/cards
pub async fn list_cards(State(state): State<AppState>) -> impl IntoResponse {
    let premium_unlocked = state.entitlements.is_premium_unlocked();
    info!("GET /api/cards - premium unlocked: {}", premium_unlocked);
    let catalog = &state.catalog;
    let cards = catalog
        .visible_cards(premium_unlocked)
        .into_iter()
        .cloned()
        .collect();

    Json(CardListResponse {
        cards,
        total_cards: catalog.total_cards(),
        free_cards_count: catalog.free_cards_count(),
        premium_cards_count: catalog.premium_cards_count(),
    })
}

/// GET /api/pricing
pub async fn get_pricing(Query(query): Query<PricingQuery>) -> impl IntoResponse {
    info!("GET /api/pricing - query: {:?}", query);
    let country_code = query.country.as_deref().and_then(pricing::known_country_code);
    let pricing = pricing::get_localized_pricing(country_code.as_deref());
    let formatted_price = pricing::format_price(&pricing);

    Json(LocalizedPriceResponse {
        country_code,
        pricing,
        formatted_price,
    })
}

/// GET /api/pricing/countries
pub async fn list_countries() -> impl IntoResponse {
    Json(CountryListResponse {
        countries: pricing::get_all_countries(),
    })
}
