//! Bundled study content shown on the home and search screens.
//!
//! The catalog is read-only sample data: subjects with their public decks,
//! plus the user's own decks. It is embedded in the binary as JSON and parsed
//! once at startup; nothing is ever written back.

use crate::models::Deck;
use serde::Deserialize;

const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

#[derive(Clone, Debug, Deserialize)]
pub struct Subject {
    pub name: String,
    pub decks: Vec<Deck>,
}

impl Subject {
    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    pub fn card_count(&self) -> usize {
        self.decks.iter().map(Deck::card_count).sum()
    }

    /// "12 Decks · 207 Cards" label for study-guide rows.
    pub fn summary_label(&self) -> String {
        format!("{} Decks · {} Cards", self.deck_count(), self.card_count())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Catalog {
    pub subjects: Vec<Subject>,
    pub my_decks: Vec<Deck>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Catalog {
    /// Parses the catalog embedded in the binary.
    pub fn load_bundled() -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(BUNDLED_CATALOG)?)
    }

    /// Looks a deck up by title, searching the user's decks first.
    pub fn find_deck(&self, title: &str) -> Option<&Deck> {
        self.my_decks
            .iter()
            .chain(self.subjects.iter().flat_map(|s| s.decks.iter()))
            .find(|deck| deck.title == title)
    }

    /// Case-insensitive substring match over deck titles. Only public decks
    /// from subjects are searchable; private decks stay out of results.
    pub fn search_decks(&self, query: &str) -> Vec<&Deck> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.subjects
            .iter()
            .flat_map(|s| s.decks.iter())
            .filter(|deck| deck.visibility && deck.title.to_lowercase().contains(&query))
            .collect()
    }

    /// Subjects whose name matches the query, for the browse-by-subject list.
    /// An empty query lists every subject.
    pub fn search_subjects(&self, query: &str) -> Vec<&Subject> {
        let query = query.trim().to_lowercase();
        self.subjects
            .iter()
            .filter(|s| query.is_empty() || s.name.to_lowercase().contains(&query))
            .collect()
    }
}
