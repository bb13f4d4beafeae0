//! Deck is a named, ordered collection of cards.
use super::Card;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    /// Whether other students can find and study this deck.
    #[serde(default = "default_visibility")]
    pub visibility: bool,
    #[serde(default)]
    pub cards: Vec<Card>,
}

fn default_visibility() -> bool {
    true
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            title: "Untitled deck".to_string(),
            visibility: true,
            cards: Vec::new(),
        }
    }
}

impl Deck {
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// "1 Card" / "8 Cards" label used by the deck lists and the detail screen.
    pub fn card_count_label(&self) -> String {
        let n = self.card_count();
        if n == 1 {
            "1 Card".to_string()
        } else {
            format!("{} Cards", n)
        }
    }
}
