use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;

use shared::{
    CardProgress, ChildProfile, PhonicsCard, ProfileColor, ProfileProgressRecord, ProfileStore,
    UserProgressData, FALLBACK_PROFILE_NAME, MAX_PROFILES,
};

use crate::storage::progress_repository::{DEFAULT_PROFILE_COLOR, DEFAULT_PROFILE_NAME};
use crate::storage::ProgressRepository;

/// Why a mutation left the registry untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    UnknownProfile,
    ProfileLimitReached,
    NoActiveProfile,
}

/// What a mutating call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// Applied in memory and persisted
    Saved,
    /// Applied in memory, but the write failed; the save-error flag is raised
    Unsaved { error: String },
    /// Preconditions not met, nothing changed
    Skipped(SkipReason),
}

impl ChangeOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, ChangeOutcome::Skipped(_))
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, ChangeOutcome::Saved)
    }
}

/// User-visible persistence error state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveStatus {
    pub last_save_error: Option<String>,
    pub show_save_error_alert: bool,
}

struct RegistryState {
    profiles: Vec<ProfileProgressRecord>,
    active_profile_id: Uuid,
    save_status: SaveStatus,
}

impl RegistryState {
    fn active_index(&self) -> Option<usize> {
        self.profiles.iter().position(|r| r.id() == self.active_profile_id)
    }

    fn active_record(&self) -> Option<&ProfileProgressRecord> {
        self.active_index().map(|i| &self.profiles[i])
    }

    fn active_progress(&self) -> Option<&UserProgressData> {
        self.active_record().map(|r| &r.progress)
    }

    fn to_store(&self) -> ProfileStore {
        ProfileStore {
            profiles: self.profiles.clone(),
            active_profile_id: Some(self.active_profile_id),
        }
    }
}

/// Profile registry: the ordered list of learner profiles, the active
/// selection, and the persistence of both.
///
/// All state sits behind one async mutex and every mutation persists while
/// still holding it, so writes are serialized and storage always reflects
/// the latest in-memory state that could be saved.
#[derive(Clone)]
pub struct ProfileService {
    state: Arc<Mutex<RegistryState>>,
    repository: ProgressRepository,
}

impl ProfileService {
    /// Load (or create) the profile store and persist the repaired result
    pub async fn initialize(repository: ProgressRepository) -> Self {
        let loaded = repository.load_store().await.map(|l| l.store).unwrap_or_default();
        let now = Utc::now();

        let mut profiles = loaded.profiles;
        if profiles.is_empty() {
            info!("No profiles found, creating '{}'", DEFAULT_PROFILE_NAME);
            let profile = ChildProfile::new(DEFAULT_PROFILE_NAME, DEFAULT_PROFILE_COLOR);
            profiles.push(ProfileProgressRecord {
                profile,
                progress: UserProgressData::default(),
            });
        }
        profiles.truncate(MAX_PROFILES);

        let active_profile_id = match loaded.active_profile_id {
            Some(id) if profiles.iter().any(|r| r.id() == id) => id,
            stale => {
                if stale.is_some() {
                    warn!("Active profile {:?} no longer exists, selecting first profile", stale);
                }
                profiles[0].id()
            }
        };

        let mut state = RegistryState {
            profiles,
            active_profile_id,
            save_status: SaveStatus::default(),
        };
        if let Some(index) = state.active_index() {
            state.profiles[index].progress.last_opened_date = Some(now);
        }

        let service = Self {
            state: Arc::new(Mutex::new(state)),
            repository,
        };

        {
            let mut state = service.state.lock().await;
            service.persist(&mut state).await;
            info!("Profile registry ready with {} profile(s)", state.profiles.len());
        }

        service
    }

    // ---------------------------------------------------------------------
    // Profile management
    // ---------------------------------------------------------------------

    pub async fn set_active_profile(&self, id: Uuid) -> ChangeOutcome {
        let mut state = self.state.lock().await;
        let Some(index) = state.profiles.iter().position(|r| r.id() == id) else {
            warn!("Ignoring switch to unknown profile {}", id);
            return ChangeOutcome::Skipped(SkipReason::UnknownProfile);
        };

        info!("Switching active profile to {}", id);
        state.active_profile_id = id;
        state.profiles[index].progress.last_opened_date = Some(Utc::now());
        self.persist(&mut state).await
    }

    /// Append a profile and make it active; a blank name becomes "Learner N"
    pub async fn add_profile(&self, name: &str, color: ProfileColor) -> ChangeOutcome {
        let mut state = self.state.lock().await;
        if state.profiles.len() >= MAX_PROFILES {
            warn!("Profile limit of {} reached, not adding '{}'", MAX_PROFILES, name);
            return ChangeOutcome::Skipped(SkipReason::ProfileLimitReached);
        }

        let name = sanitized_name(name, Some(state.profiles.len() + 1));
        let profile = ChildProfile::new(name, color);
        info!("Adding profile '{}' ({}) with ID: {}", profile.name, color, profile.id);

        state.active_profile_id = profile.id;
        state.profiles.push(ProfileProgressRecord {
            profile,
            progress: UserProgressData::opened_at(Utc::now()),
        });
        self.persist(&mut state).await
    }

    pub async fn update_profile(&self, id: Uuid, name: &str, color: ProfileColor) -> ChangeOutcome {
        let mut state = self.state.lock().await;
        let Some(record) = state.profiles.iter_mut().find(|r| r.id() == id) else {
            warn!("Ignoring update of unknown profile {}", id);
            return ChangeOutcome::Skipped(SkipReason::UnknownProfile);
        };

        record.profile.name = sanitized_name(name, None);
        record.profile.color = color;
        info!("Updated profile {}: '{}' ({})", id, record.profile.name, color);
        self.persist(&mut state).await
    }

    // ---------------------------------------------------------------------
    // Progress updates (active profile only)
    // ---------------------------------------------------------------------

    pub async fn mark_word_mastered(&self, card_title: &str, word: &str) -> ChangeOutcome {
        info!("Marking '{}' mastered on card '{}'", word, card_title);
        self.modify_active_progress(|progress| {
            progress.update_progress(card_title, Some(word), Utc::now());
        })
        .await
    }

    pub async fn record_study_session(&self, card_title: &str) -> ChangeOutcome {
        info!("Recording study session for card '{}'", card_title);
        self.modify_active_progress(|progress| {
            progress.update_progress(card_title, None, Utc::now());
            progress.total_study_sessions += 1;
        })
        .await
    }

    /// Replace the active profile's progress with an empty record
    pub async fn reset_active_progress(&self) -> ChangeOutcome {
        info!("Resetting progress for the active profile");
        self.modify_active_progress(|progress| {
            *progress = UserProgressData::default();
        })
        .await
    }

    async fn modify_active_progress<F>(&self, mutation: F) -> ChangeOutcome
    where
        F: FnOnce(&mut UserProgressData),
    {
        let mut state = self.state.lock().await;
        let Some(index) = state.active_index() else {
            warn!("No active profile to update");
            return ChangeOutcome::Skipped(SkipReason::NoActiveProfile);
        };

        let progress = &mut state.profiles[index].progress;
        mutation(progress);
        progress.last_opened_date = Some(Utc::now());
        self.persist(&mut state).await
    }

    // ---------------------------------------------------------------------
    // Save error state
    // ---------------------------------------------------------------------

    pub async fn save_status(&self) -> SaveStatus {
        self.state.lock().await.save_status.clone()
    }

    /// Hide the alert; the last error stays readable until a save succeeds
    pub async fn dismiss_save_error(&self) {
        self.state.lock().await.save_status.show_save_error_alert = false;
    }

    async fn persist(&self, state: &mut RegistryState) -> ChangeOutcome {
        match self.repository.save_store(&state.to_store()).await {
            Ok(()) => {
                state.save_status.last_save_error = None;
                ChangeOutcome::Saved
            }
            Err(e) => {
                error!("Failed to save profile store: {}", e);
                let message = e.to_string();
                state.save_status = SaveStatus {
                    last_save_error: Some(message.clone()),
                    show_save_error_alert: true,
                };
                ChangeOutcome::Unsaved { error: message }
            }
        }
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    pub async fn snapshot(&self) -> ProfileStore {
        self.state.lock().await.to_store()
    }

    pub async fn profiles(&self) -> Vec<ChildProfile> {
        let state = self.state.lock().await;
        state.profiles.iter().map(|r| r.profile.clone()).collect()
    }

    pub async fn active_profile_id(&self) -> Uuid {
        self.state.lock().await.active_profile_id
    }

    pub async fn active_profile(&self) -> Option<ChildProfile> {
        let state = self.state.lock().await;
        state.active_record().map(|r| r.profile.clone())
    }

    pub async fn active_profile_display_name(&self) -> String {
        self.active_profile()
            .await
            .map(|p| p.display_name())
            .unwrap_or_else(|| FALLBACK_PROFILE_NAME.to_string())
    }

    pub async fn active_profile_color(&self) -> ProfileColor {
        self.active_profile().await.map(|p| p.color).unwrap_or_default()
    }

    pub async fn active_progress(&self) -> UserProgressData {
        let state = self.state.lock().await;
        state.active_progress().cloned().unwrap_or_default()
    }

    pub async fn can_add_more_profiles(&self) -> bool {
        self.state.lock().await.profiles.len() < MAX_PROFILES
    }

    pub async fn remaining_profile_slots(&self) -> usize {
        MAX_PROFILES.saturating_sub(self.state.lock().await.profiles.len())
    }

    pub async fn suggested_profile_name(&self) -> String {
        format!("Learner {}", self.state.lock().await.profiles.len() + 1)
    }

    /// First color no profile uses yet
    pub async fn suggested_profile_color(&self) -> ProfileColor {
        let state = self.state.lock().await;
        ProfileColor::ALL
            .into_iter()
            .find(|color| !state.profiles.iter().any(|r| r.profile.color == *color))
            .unwrap_or_default()
    }

    pub async fn card_progress(&self, card_title: &str) -> Option<CardProgress> {
        let state = self.state.lock().await;
        state.active_progress()?.progress_for(card_title).cloned()
    }

    pub async fn is_word_mastered(&self, card_title: &str, word: &str) -> bool {
        let state = self.state.lock().await;
        state
            .active_progress()
            .map(|p| p.is_word_mastered(card_title, word))
            .unwrap_or(false)
    }

    pub async fn mastery_percentage(&self, card: &PhonicsCard) -> f64 {
        let state = self.state.lock().await;
        state.active_progress().map(|p| p.mastery_percentage(card)).unwrap_or(0.0)
    }

    pub async fn total_cards_studied(&self) -> usize {
        self.active_progress().await.total_cards_studied()
    }

    pub async fn total_study_sessions(&self) -> u32 {
        self.active_progress().await.total_study_sessions
    }

    pub async fn total_words_mastered(&self) -> usize {
        self.active_progress().await.total_words_mastered()
    }
}

/// Trimmed name; blank names fall back to "Learner N" (or "Learner" without an index)
fn sanitized_name(name: &str, fallback_index: Option<usize>) -> String {
    let trimmed = name.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    match fallback_index {
        Some(index) => format!("Learner {}", index),
        None => FALLBACK_PROFILE_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;
    use crate::storage::progress_repository::{LEGACY_PROGRESS_KEYS, PROFILE_STORE_KEYS};
    use crate::storage::{codec, KeyValueStore};

    async fn setup() -> (Arc<MemoryStore>, ProfileService) {
        let kv = Arc::new(MemoryStore::new());
        let service = ProfileService::initialize(ProgressRepository::new(kv.clone())).await;
        (kv, service)
    }

    async fn stored(kv: &MemoryStore) -> ProfileStore {
        let blob = kv
            .get_value(PROFILE_STORE_KEYS.primary)
            .await
            .unwrap()
            .expect("store persisted");
        codec::decode(&blob).unwrap()
    }

    #[tokio::test]
    async fn test_fresh_install_seeds_default_profile() {
        let (kv, service) = setup().await;

        let profiles = service.profiles().await;
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "Learner 1");
        assert_eq!(profiles[0].color, ProfileColor::Sky);
        assert_eq!(service.active_profile_id().await, profiles[0].id);
        assert!(service.active_progress().await.last_opened_date.is_some());

        assert_eq!(stored(&kv).await, service.snapshot().await);
    }

    #[tokio::test]
    async fn test_reload_returns_saved_state() {
        let (kv, service) = setup().await;
        service.mark_word_mastered("at", "cat").await;
        service.add_profile("Ana", ProfileColor::Mint).await;
        let before = service.snapshot().await;

        let reloaded = ProgressRepository::new(kv.clone()).load_store().await.unwrap();
        assert_eq!(reloaded.store, before);
    }

    #[tokio::test]
    async fn test_stale_active_id_is_repaired() {
        let kv = Arc::new(MemoryStore::new());
        let profile = ChildProfile::new("Kai", ProfileColor::Gold);
        let store = ProfileStore {
            profiles: vec![ProfileProgressRecord {
                profile: profile.clone(),
                progress: UserProgressData::default(),
            }],
            active_profile_id: Some(Uuid::new_v4()),
        };
        kv.put_value(PROFILE_STORE_KEYS.primary, &codec::encode(&store).unwrap())
            .await
            .unwrap();

        let service = ProfileService::initialize(ProgressRepository::new(kv.clone())).await;
        assert_eq!(service.active_profile_id().await, profile.id);
        assert_eq!(stored(&kv).await.active_profile_id, Some(profile.id));
    }

    #[tokio::test]
    async fn test_backup_recovery_on_startup() {
        let kv = Arc::new(MemoryStore::new());
        {
            let service = ProfileService::initialize(ProgressRepository::new(kv.clone())).await;
            service.mark_word_mastered("at", "cat").await;
            service.mark_word_mastered("at", "hat").await;
        }
        kv.put_value(PROFILE_STORE_KEYS.primary, "{broken").await.unwrap();

        let service = ProfileService::initialize(ProgressRepository::new(kv.clone())).await;
        // Backup holds the state from before the last write
        assert!(service.is_word_mastered("at", "cat").await);
        assert!(!service.is_word_mastered("at", "hat").await);
    }

    #[tokio::test]
    async fn test_legacy_progress_migrates_on_startup() {
        let kv = Arc::new(MemoryStore::new());
        let mut legacy = UserProgressData::default();
        legacy.update_progress("ig", Some("pig"), Utc::now());
        kv.put_value(LEGACY_PROGRESS_KEYS.primary, &codec::encode(&legacy).unwrap())
            .await
            .unwrap();

        let service = ProfileService::initialize(ProgressRepository::new(kv.clone())).await;
        assert_eq!(service.profiles().await.len(), 1);
        assert_eq!(service.active_profile_display_name().await, "Learner 1");
        assert!(service.is_word_mastered("ig", "pig").await);
        // Migrated data now lives under the current keys
        assert_eq!(stored(&kv).await.profiles.len(), 1);
    }

    #[tokio::test]
    async fn test_add_profile_enforces_limit() {
        let (_, service) = setup().await;
        for i in 0..4 {
            let outcome = service.add_profile(&format!("Kid {}", i), ProfileColor::Coral).await;
            assert_eq!(outcome, ChangeOutcome::Saved);
        }
        assert!(!service.can_add_more_profiles().await);
        assert_eq!(service.remaining_profile_slots().await, 0);

        let before = service.snapshot().await;
        let outcome = service.add_profile("One Too Many", ProfileColor::Mint).await;
        assert_eq!(outcome, ChangeOutcome::Skipped(SkipReason::ProfileLimitReached));
        assert_eq!(service.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_blank_names_are_sanitized() {
        let (_, service) = setup().await;

        service.add_profile("   ", ProfileColor::Lilac).await;
        let profiles = service.profiles().await;
        assert_eq!(profiles[1].name, format!("Learner {}", profiles.len()));

        service.add_profile("  Ana  ", ProfileColor::Mint).await;
        assert_eq!(service.active_profile().await.unwrap().name, "Ana");

        let id = service.active_profile_id().await;
        service.update_profile(id, "\t\n", ProfileColor::Navy).await;
        let updated = service.active_profile().await.unwrap();
        assert_eq!(updated.name, "Learner");
        assert_eq!(updated.color, ProfileColor::Navy);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_ignored() {
        let (_, service) = setup().await;
        let before = service.snapshot().await;

        assert_eq!(
            service.set_active_profile(Uuid::new_v4()).await,
            ChangeOutcome::Skipped(SkipReason::UnknownProfile)
        );
        assert_eq!(
            service.update_profile(Uuid::new_v4(), "X", ProfileColor::Gold).await,
            ChangeOutcome::Skipped(SkipReason::UnknownProfile)
        );
        assert_eq!(service.snapshot().await, before);
    }

    #[tokio::test]
    async fn test_progress_updates_only_touch_active_profile() {
        let (_, service) = setup().await;
        let learner_one = service.active_profile_id().await;
        service.add_profile("Ana", ProfileColor::Mint).await;
        let ana = service.active_profile_id().await;
        let snapshot = service.snapshot().await;
        let learner_one_before = snapshot.record(learner_one).unwrap().progress.clone();

        service.mark_word_mastered("at", "cat").await;
        service.record_study_session("at").await;

        let snapshot = service.snapshot().await;
        assert_eq!(snapshot.record(learner_one).unwrap().progress, learner_one_before);

        let ana_progress = &snapshot.record(ana).unwrap().progress;
        assert_eq!(ana_progress.total_study_sessions, 1);
        assert_eq!(ana_progress.card_progress["at"].times_studied, 2);
    }

    #[tokio::test]
    async fn test_reset_only_clears_active_profile() {
        let (_, service) = setup().await;
        let learner_one = service.active_profile_id().await;
        service.mark_word_mastered("at", "cat").await;
        service.record_study_session("at").await;

        service.add_profile("Ana", ProfileColor::Mint).await;
        let ana = service.active_profile_id().await;
        service.mark_word_mastered("ig", "pig").await;
        service.record_study_session("ig").await;

        service.set_active_profile(learner_one).await;
        let ana_before = service.snapshot().await.record(ana).unwrap().clone();

        assert_eq!(service.reset_active_progress().await, ChangeOutcome::Saved);

        let snapshot = service.snapshot().await;
        let learner_progress = &snapshot.record(learner_one).unwrap().progress;
        assert!(learner_progress.card_progress.is_empty());
        assert_eq!(learner_progress.total_study_sessions, 0);
        assert_eq!(snapshot.record(ana).unwrap(), &ana_before);
        assert_eq!(snapshot.active_profile_id, Some(learner_one));
    }

    #[tokio::test]
    async fn test_switching_profiles_keeps_mastered_words() {
        let (_, service) = setup().await;
        let learner_one = service.active_profile_id().await;

        service.mark_word_mastered("at", "cat").await;
        service.record_study_session("at").await;
        let progress = service.card_progress("at").await.unwrap();
        assert_eq!(progress.mastered_words.len(), 1);
        assert!(progress.mastered_words.contains("cat"));

        service.add_profile("Ana", ProfileColor::Mint).await;
        assert_eq!(service.profiles().await.len(), 2);
        assert_eq!(service.active_profile_display_name().await, "Ana");
        assert_eq!(service.total_cards_studied().await, 0);

        service.set_active_profile(learner_one).await;
        assert_eq!(service.active_profile_id().await, learner_one);
        assert!(service.is_word_mastered("at", "cat").await);
        assert_eq!(service.total_words_mastered().await, 1);
        assert_eq!(service.total_study_sessions().await, 1);
    }

    #[tokio::test]
    async fn test_write_failure_is_flagged_and_state_retained() {
        let (kv, service) = setup().await;
        let persisted_before = stored(&kv).await;
        let backup_before = kv.get_value(PROFILE_STORE_KEYS.backup).await.unwrap();

        kv.set_reject_writes(true);
        let outcome = service.mark_word_mastered("at", "cat").await;
        assert!(outcome.is_applied());
        assert!(!outcome.is_saved());

        let status = service.save_status().await;
        assert!(status.last_save_error.is_some());
        assert!(status.show_save_error_alert);

        // In-memory state keeps the change, storage is unchanged
        assert!(service.is_word_mastered("at", "cat").await);
        assert_eq!(stored(&kv).await, persisted_before);
        assert_eq!(kv.get_value(PROFILE_STORE_KEYS.backup).await.unwrap(), backup_before);

        service.dismiss_save_error().await;
        assert!(!service.save_status().await.show_save_error_alert);

        kv.set_reject_writes(false);
        assert_eq!(service.record_study_session("at").await, ChangeOutcome::Saved);
        assert!(service.save_status().await.last_save_error.is_none());
        let persisted = stored(&kv).await;
        let record = persisted.record(service.active_profile_id().await).unwrap();
        assert!(record.progress.is_word_mastered("at", "cat"));
    }

    #[tokio::test]
    async fn test_primary_write_failure_keeps_previous_store_in_backup() {
        let (kv, service) = setup().await;
        service.add_profile("Ana", ProfileColor::Mint).await;
        let last_good = kv.get_value(PROFILE_STORE_KEYS.primary).await.unwrap();

        kv.reject_writes_to(PROFILE_STORE_KEYS.primary);
        let outcome = service.mark_word_mastered("at", "cat").await;
        assert!(outcome.is_applied());
        assert!(!outcome.is_saved());
        assert!(service.save_status().await.show_save_error_alert);

        // Neither slot holds the unsaved change
        assert_eq!(kv.get_value(PROFILE_STORE_KEYS.primary).await.unwrap(), last_good);
        assert_eq!(kv.get_value(PROFILE_STORE_KEYS.backup).await.unwrap(), last_good);
        assert!(service.is_word_mastered("at", "cat").await);

        kv.accept_all_keys();
        assert_eq!(service.record_study_session("at").await, ChangeOutcome::Saved);
        assert_eq!(kv.get_value(PROFILE_STORE_KEYS.backup).await.unwrap(), last_good);
        let persisted = stored(&kv).await;
        let record = persisted.record(service.active_profile_id().await).unwrap();
        assert!(record.progress.is_word_mastered("at", "cat"));
    }

    #[tokio::test]
    async fn test_suggestions() {
        let (_, service) = setup().await;
        assert_eq!(service.suggested_profile_name().await, "Learner 2");
        // Sky is taken by the default profile
        assert_eq!(service.suggested_profile_color().await, ProfileColor::Coral);

        service.add_profile("A", ProfileColor::Coral).await;
        assert_eq!(service.suggested_profile_color().await, ProfileColor::Mint);
        assert_eq!(service.active_profile_color().await, ProfileColor::Coral);
    }

    #[tokio::test]
    async fn test_mastery_percentage_for_active_profile() {
        let (_, service) = setup().await;
        let card = PhonicsCard {
            group: "Short A".to_string(),
            title: "at".to_string(),
            words: vec!["cat".into(), "hat".into()],
            is_premium: false,
        };
        assert_eq!(service.mastery_percentage(&card).await, 0.0);
        service.mark_word_mastered("at", "cat").await;
        assert_eq!(service.mastery_percentage(&card).await, 0.5);
    }

    #[test]
    fn test_sanitized_name() {
        assert_eq!(sanitized_name("  Ana ", Some(3)), "Ana");
        assert_eq!(sanitized_name("   ", Some(3)), "Learner 3");
        assert_eq!(sanitized_name("", None), "Learner");
    }
}
