use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

use shared::{PhonicsCard, PhonicsGroup};

use crate::error::CatalogError;

/// Card data compiled into the binary, used when no catalog path is configured
pub const BUNDLED_CATALOG: &str = include_str!("../../data/phonics.json");

/// Read-only collection of flashcards, loaded once at startup.
///
/// Card titles double as progress keys. Whether a card is premium comes from
/// the data itself; the catalog only reads it.
#[derive(Debug, Clone)]
pub struct PhonicsCatalog {
    cards: Vec<PhonicsCard>,
}

impl PhonicsCatalog {
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path).map_err(|_| CatalogError::InvalidData)?;
        let catalog = Self::from_json_str(&contents)?;
        info!("Loaded {} cards from {:?}", catalog.total_cards(), path);
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        if json.trim().is_empty() {
            return Err(CatalogError::InvalidData);
        }

        let cards: Vec<PhonicsCard> = serde_json::from_str(json)?;
        if cards.is_empty() {
            return Err(CatalogError::InvalidData);
        }

        Ok(Self { cards })
    }

    /// Cards grouped by group name; groups sorted by name, cards in catalog order
    pub fn groups(&self) -> Vec<PhonicsGroup> {
        let mut grouped: BTreeMap<&str, Vec<PhonicsCard>> = BTreeMap::new();
        for card in &self.cards {
            grouped.entry(card.group.as_str()).or_default().push(card.clone());
        }

        grouped
            .into_iter()
            .map(|(name, cards)| PhonicsGroup {
                name: name.to_string(),
                cards,
            })
            .collect()
    }

    pub fn cards_in_group(&self, group: &str) -> Vec<&PhonicsCard> {
        self.cards.iter().filter(|c| c.group == group).collect()
    }

    pub fn card_by_title(&self, title: &str) -> Option<&PhonicsCard> {
        self.cards.iter().find(|c| c.title == title)
    }

    pub fn free_cards(&self) -> Vec<&PhonicsCard> {
        self.cards.iter().filter(|c| !c.is_premium).collect()
    }

    pub fn premium_cards(&self) -> Vec<&PhonicsCard> {
        self.cards.iter().filter(|c| c.is_premium).collect()
    }

    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn free_cards_count(&self) -> usize {
        self.cards.iter().filter(|c| !c.is_premium).count()
    }

    pub fn premium_cards_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_premium).count()
    }

    /// Cards available to a learner given the purchase entitlement
    pub fn visible_cards(&self, premium_unlocked: bool) -> Vec<&PhonicsCard> {
        if premium_unlocked {
            self.cards.iter().collect()
        } else {
            self.free_cards()
        }
    }
}
