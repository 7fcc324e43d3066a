use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use uuid::Uuid;

/// Maximum number of learner profiles a single install may hold
pub const MAX_PROFILES: usize = 5;

/// Name shown for a profile whose stored name is blank
pub const FALLBACK_PROFILE_NAME: &str = "Learner";

/// Accent color a child picks for their profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileColor {
    Coral,
    Mint,
    #[default]
    Sky,
    Lilac,
    Gold,
    Navy,
}

impl ProfileColor {
    /// Every color, in the order they are offered to the user
    pub const ALL: [ProfileColor; 6] = [
        ProfileColor::Coral,
        ProfileColor::Mint,
        ProfileColor::Sky,
        ProfileColor::Lilac,
        ProfileColor::Gold,
        ProfileColor::Navy,
    ];

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            ProfileColor::Coral => "Coral",
            ProfileColor::Mint => "Mint",
            ProfileColor::Sky => "Sky",
            ProfileColor::Lilac => "Lilac",
            ProfileColor::Gold => "Gold",
            ProfileColor::Navy => "Blue",
        }
    }
}

impl fmt::Display for ProfileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A named, colored learner identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildProfile {
    pub id: Uuid,
    pub name: String,
    pub color: ProfileColor,
}

impl ChildProfile {
    /// Create a profile with a freshly generated ID
    pub fn new(name: impl Into<String>, color: ProfileColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color,
        }
    }

    /// Trimmed name, or the generic fallback when the name is blank
    pub fn display_name(&self) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            FALLBACK_PROFILE_NAME.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// Study state for one flashcard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardProgress {
    /// Card title, used as the card's identity
    pub card_id: String,
    pub last_studied_date: Option<DateTime<Utc>>,
    pub times_studied: u32,
    #[serde(default)]
    pub mastered_words: BTreeSet<String>,
}

impl CardProgress {
    pub fn new(card_id: impl Into<String>) -> Self {
        Self {
            card_id: card_id.into(),
            last_studied_date: None,
            times_studied: 0,
            mastered_words: BTreeSet::new(),
        }
    }
}

/// Learning state owned by a single profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgressData {
    /// Keyed by card title
    #[serde(default)]
    pub card_progress: BTreeMap<String, CardProgress>,
    #[serde(default)]
    pub total_study_sessions: u32,
    pub last_opened_date: Option<DateTime<Utc>>,
}

impl UserProgressData {
    /// Empty progress stamped as opened at `now`
    pub fn opened_at(now: DateTime<Utc>) -> Self {
        Self {
            last_opened_date: Some(now),
            ..Self::default()
        }
    }

    /// Count one study of `card_title`, optionally recording a mastered word.
    /// Mastered words are only ever added here.
    pub fn update_progress(
        &mut self,
        card_title: &str,
        mastered_word: Option<&str>,
        now: DateTime<Utc>,
    ) {
        let progress = self
            .card_progress
            .entry(card_title.to_string())
            .or_insert_with(|| CardProgress::new(card_title));
        progress.times_studied += 1;
        progress.last_studied_date = Some(now);
        if let Some(word) = mastered_word {
            progress.mastered_words.insert(word.to_string());
        }
    }

    pub fn progress_for(&self, card_title: &str) -> Option<&CardProgress> {
        self.card_progress.get(card_title)
    }

    pub fn is_word_mastered(&self, card_title: &str, word: &str) -> bool {
        self.card_progress
            .get(card_title)
            .map(|p| p.mastered_words.contains(word))
            .unwrap_or(false)
    }

    /// Fraction of the card's words that are mastered, 0.0 when unknown or empty
    pub fn mastery_percentage(&self, card: &PhonicsCard) -> f64 {
        match self.card_progress.get(&card.title) {
            Some(progress) if !card.words.is_empty() => {
                progress.mastered_words.len() as f64 / card.words.len() as f64
            }
            _ => 0.0,
        }
    }

    pub fn total_cards_studied(&self) -> usize {
        self.card_progress.len()
    }

    pub fn total_words_mastered(&self) -> usize {
        self.card_progress.values().map(|p| p.mastered_words.len()).sum()
    }
}

/// Binds a profile to its saved progress; identity is the profile ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileProgressRecord {
    pub profile: ChildProfile,
    pub progress: UserProgressData,
}

impl ProfileProgressRecord {
    pub fn id(&self) -> Uuid {
        self.profile.id
    }
}

/// Persisted aggregate of every profile and the current selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStore {
    #[serde(default)]
    pub profiles: Vec<ProfileProgressRecord>,
    pub active_profile_id: Option<Uuid>,
}

impl ProfileStore {
    pub fn record(&self, id: Uuid) -> Option<&ProfileProgressRecord> {
        self.profiles.iter().find(|r| r.id() == id)
    }
}

/// A single phonics flashcard from the bundled catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhonicsCard {
    pub group: String,
    pub title: String,
    pub words: Vec<String>,
    /// Supplied per card by the catalog data
    #[serde(default)]
    pub is_premium: bool,
}

/// Cards sharing a group name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonicsGroup {
    pub name: String,
    pub cards: Vec<PhonicsCard>,
}

/// Localized App Store price for one country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRecord {
    pub country: String,
    pub currency_code: String,
    /// Price exactly as listed, e.g. "4.99" or "2990"
    pub price: String,
    pub numeric_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryPricing {
    pub code: String,
    pub data: PricingRecord,
}

// ---------------------------------------------------------------------------
// REST request/response bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub color: ProfileColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub color: ProfileColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetActiveProfileRequest {
    pub profile_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkWordMasteredRequest {
    pub card_title: String,
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordStudySessionRequest {
    pub card_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileListResponse {
    pub profiles: Vec<ChildProfile>,
    pub active_profile_id: Option<Uuid>,
    pub can_add_more_profiles: bool,
    pub remaining_profile_slots: usize,
    pub suggested_profile_name: String,
    pub suggested_profile_color: ProfileColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummaryResponse {
    pub active_profile: Option<ChildProfile>,
    pub display_name: String,
    pub total_cards_studied: usize,
    pub total_study_sessions: u32,
    pub total_words_mastered: usize,
    pub progress: UserProgressData,
}

/// Result of a profile or progress mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeResponse {
    /// The in-memory state changed
    pub applied: bool,
    /// The change reached storage
    pub saved: bool,
    pub message: String,
    pub save_error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveStatusResponse {
    pub last_save_error: Option<String>,
    pub show_save_error_alert: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedPriceResponse {
    pub country_code: Option<String>,
    pub pricing: PricingRecord,
    pub formatted_price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryListResponse {
    pub countries: Vec<CountryPricing>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardListResponse {
    pub cards: Vec<PhonicsCard>,
    pub total_cards: usize,
    pub free_cards_count: usize,
    pub premium_cards_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, words: &[&str]) -> PhonicsCard {
        PhonicsCard {
            group: "Short Vowels".to_string(),
            title: title.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
            is_premium: false,
        }
    }

    #[test]
    fn test_display_name_falls_back_when_blank() {
        let profile = ChildProfile::new("   ", ProfileColor::Mint);
        assert_eq!(profile.display_name(), "Learner");

        let profile = ChildProfile::new("  Ana ", ProfileColor::Mint);
        assert_eq!(profile.display_name(), "Ana");
    }

    #[test]
    fn test_update_progress_accumulates() {
        let now = Utc::now();
        let mut data = UserProgressData::default();
        data.update_progress("at", Some("cat"), now);
        data.update_progress("at", Some("hat"), now);
        data.update_progress("at", Some("cat"), now);

        let progress = data.progress_for("at").unwrap();
        assert_eq!(progress.times_studied, 3);
        assert_eq!(progress.mastered_words.len(), 2);
        assert_eq!(progress.last_studied_date, Some(now));
        assert!(data.is_word_mastered("at", "hat"));
        assert!(!data.is_word_mastered("at", "bat"));
        assert!(!data.is_word_mastered("ig", "pig"));
        assert_eq!(data.total_cards_studied(), 1);
        assert_eq!(data.total_words_mastered(), 2);
    }

    #[test]
    fn test_mastery_percentage() {
        let mut data = UserProgressData::default();
        data.update_progress("at", Some("cat"), Utc::now());

        assert_eq!(data.mastery_percentage(&card("at", &["cat", "hat", "bat", "mat"])), 0.25);
        assert_eq!(data.mastery_percentage(&card("at", &[])), 0.0);
        assert_eq!(data.mastery_percentage(&card("ig", &["pig"])), 0.0);
    }

    #[test]
    fn test_progress_serializes_camel_case() {
        let mut data = UserProgressData::default();
        data.update_progress("at", Some("cat"), Utc::now());
        let json = serde_json::to_value(&data).unwrap();

        assert!(json.get("cardProgress").is_some());
        assert!(json.get("totalStudySessions").is_some());
        assert!(json["cardProgress"]["at"].get("masteredWords").is_some());
    }

    #[test]
    fn test_profile_color_wire_format() {
        assert_eq!(serde_json::to_string(&ProfileColor::Navy).unwrap(), "\"navy\"");
        assert_eq!(ProfileColor::Navy.label(), "Blue");
        let parsed: ProfileColor = serde_json::from_str("\"lilac\"").unwrap();
        assert_eq!(parsed, ProfileColor::Lilac);
    }
}
