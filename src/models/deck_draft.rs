//! Working state of the deck-creation wizard.
//!
//! Holds the title/visibility entered on the first step and the mutable card
//! list edited on the second. Everything here is session-local: the draft is
//! discarded when the user leaves the create flow, and "Done" only logs the
//! result.

use super::{Card, Deck};

pub struct DeckDraft {
    pub title: String,
    pub visibility: bool,
    cards: Vec<Card>,
}

impl Default for DeckDraft {
    /// A fresh draft starts with a single empty card, so the card step always
    /// has a page to show.
    fn default() -> Self {
        Self {
            title: String::new(),
            visibility: true,
            cards: vec![Card::default()],
        }
    }
}

impl DeckDraft {
    /// Guard for the Title → Cards transition: the "Next" control is enabled
    /// iff the title contains at least one non-whitespace character.
    pub fn can_proceed(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Appends a new empty card and returns its index, so the pager can jump
    /// to the page that was just added.
    pub fn add_card(&mut self) -> usize {
        self.cards.push(Card::default());
        self.cards.len() - 1
    }

    /// Replaces the card at `index`, leaving every other index untouched.
    /// Out-of-range indices are ignored.
    pub fn set_card(&mut self, index: usize, card: Card) {
        if let Some(slot) = self.cards.get_mut(index) {
            *slot = card;
        }
    }

    /// Removes the card at `index` and reindexes the rest.
    ///
    /// The card list is never allowed to become empty: removing the last
    /// remaining card immediately re-inserts one empty placeholder.
    pub fn remove_card(&mut self, index: usize) {
        if index >= self.cards.len() {
            return;
        }
        self.cards.remove(index);
        if self.cards.is_empty() {
            self.cards.push(Card::default());
        }
    }

    /// String-joined card list, one `front | back` line per card, logged when
    /// the user taps "Done".
    pub fn summary(&self) -> String {
        self.cards
            .iter()
            .map(|card| format!("{} | {}", card.front, card.back))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Snapshot of the draft as a deck, with blank cards filtered out.
    /// Only used for the "Done" log today; nothing is persisted.
    pub fn to_deck(&self) -> Deck {
        Deck {
            title: self.title.trim().to_string(),
            visibility: self.visibility,
            cards: self
                .cards
                .iter()
                .filter(|card| !card.is_blank())
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_draft_has_one_empty_card() {
        let draft = DeckDraft::default();
        assert_eq!(draft.card_count(), 1);
        assert!(draft.cards()[0].is_blank());
    }

    #[test]
    fn test_next_guard_requires_non_blank_title() {
        let mut draft = DeckDraft::default();
        assert!(!draft.can_proceed());

        draft.title = "   \t".to_string();
        assert!(!draft.can_proceed());

        draft.title = " os ".to_string();
        assert!(draft.can_proceed());
    }

    #[test]
    fn test_add_card_appends_in_order() {
        let mut draft = DeckDraft::default();
        for i in 0..5 {
            let index = draft.add_card();
            assert_eq!(index, i + 1);
            draft.set_card(index, Card::new(format!("front {}", i), ""));
        }

        assert_eq!(draft.card_count(), 6);
        for (i, card) in draft.cards().iter().skip(1).enumerate() {
            assert_eq!(card.front, format!("front {}", i));
        }
    }

    #[test]
    fn test_set_card_touches_only_that_index() {
        let mut draft = DeckDraft::default();
        draft.add_card();
        draft.add_card();
        draft.set_card(0, Card::new("a", "1"));
        draft.set_card(1, Card::new("b", "2"));
        draft.set_card(2, Card::new("c", "3"));

        draft.set_card(1, Card::new("B", "2!"));

        assert_eq!(draft.cards()[0], Card::new("a", "1"));
        assert_eq!(draft.cards()[1], Card::new("B", "2!"));
        assert_eq!(draft.cards()[2], Card::new("c", "3"));
    }

    #[test]
    fn test_set_card_out_of_range_is_ignored() {
        let mut draft = DeckDraft::default();
        draft.set_card(7, Card::new("x", "y"));
        assert_eq!(draft.card_count(), 1);
        assert!(draft.cards()[0].is_blank());
    }

    #[test]
    fn test_removing_last_card_reinserts_placeholder() {
        let mut draft = DeckDraft::default();
        draft.set_card(0, Card::new("only", "card"));

        draft.remove_card(0);

        assert_eq!(draft.card_count(), 1);
        assert!(draft.cards()[0].is_blank());
    }

    #[test]
    fn test_remove_card_reindexes() {
        let mut draft = DeckDraft::default();
        draft.set_card(0, Card::new("a", ""));
        let index = draft.add_card();
        draft.set_card(index, Card::new("b", ""));
        let index = draft.add_card();
        draft.set_card(index, Card::new("c", ""));

        draft.remove_card(1);

        assert_eq!(draft.card_count(), 2);
        assert_eq!(draft.cards()[0].front, "a");
        assert_eq!(draft.cards()[1].front, "c");
    }

    #[test]
    fn test_remove_card_out_of_range_is_ignored() {
        let mut draft = DeckDraft::default();
        draft.remove_card(3);
        assert_eq!(draft.card_count(), 1);
    }

    #[test]
    fn test_summary_joins_cards_in_order() {
        let mut draft = DeckDraft::default();
        draft.set_card(0, Card::new("stack", "LIFO"));
        let index = draft.add_card();
        draft.set_card(index, Card::new("queue", "FIFO"));

        assert_eq!(draft.summary(), "stack | LIFO\nqueue | FIFO");
    }

    #[test]
    fn test_to_deck_drops_blank_cards_and_trims_title() {
        let mut draft = DeckDraft::default();
        draft.title = "  operating systems ".to_string();
        draft.visibility = false;
        draft.set_card(0, Card::new("syscall", "service request"));
        draft.add_card(); // left blank

        let deck = draft.to_deck();
        assert_eq!(deck.title, "operating systems");
        assert!(!deck.visibility);
        assert_eq!(deck.card_count(), 1);
    }
}
