//! # Domain Module
//!
//! Business rules for learner profiles, the card catalog, and localized pricing.
//!
//! - **profile_service**: profile registry and per-profile progress tracking
//! - **catalog**: bundled flashcard content and premium gating
//! - **entitlement**: whether premium content has been purchased
//! - **pricing**: static price table and currency formatting

pub mod catalog;
pub mod entitlement;
pub mod pricing;
mod pricing_table;
pub mod profile_service;

pub use catalog::PhonicsCatalog;
pub use entitlement::Entitlements;
pub use profile_service::{ChangeOutcome, ProfileService, SaveStatus, SkipReason};
