//! One pass over a deck's cards with a progress counter.
//! Review flow: show front, reveal back, move on.

use super::{Card, StudyProgress};

pub struct StudySession {
    pub deck_title: String,
    cards: Vec<Card>,
    progress: StudyProgress,
    pub show_back: bool,
}

impl StudySession {
    pub fn new(deck_title: String, cards: Vec<Card>) -> Self {
        let total = cards.len();
        Self {
            deck_title,
            cards,
            progress: StudyProgress::new(total),
            show_back: false,
        }
    }

    pub fn progress(&self) -> StudyProgress {
        self.progress
    }

    /// The card currently under review, `None` once the session is complete.
    pub fn current_card(&self) -> Option<&Card> {
        if self.progress.is_complete() {
            None
        } else {
            self.cards.get(self.progress.count())
        }
    }

    pub fn toggle_back(&mut self) {
        self.show_back = !self.show_back;
    }

    /// Moves to the next card and hides the back side again.
    pub fn next_card(&mut self) {
        self.progress.advance();
        self.show_back = false;
    }

    /// Steps back one card; does nothing at the start of the session.
    pub fn prev_card(&mut self) {
        self.progress.retreat();
        self.show_back = false;
    }

    pub fn is_completed(&self) -> bool {
        self.progress.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> StudySession {
        StudySession::new(
            "recursion".to_string(),
            vec![
                Card::new("base case", "the non-recursive branch"),
                Card::new("call stack", "where activation records live"),
            ],
        )
    }

    #[test]
    fn test_session_walks_cards_in_order() {
        let mut session = session();
        assert_eq!(session.current_card().unwrap().front, "base case");

        session.next_card();
        assert_eq!(session.current_card().unwrap().front, "call stack");

        session.next_card();
        assert!(session.current_card().is_none());
        assert!(session.is_completed());
    }

    #[test]
    fn test_next_card_hides_back() {
        let mut session = session();
        session.toggle_back();
        assert!(session.show_back);

        session.next_card();
        assert!(!session.show_back);
    }

    #[test]
    fn test_prev_card_steps_back_and_stops_at_the_start() {
        let mut session = session();
        session.next_card();
        session.prev_card();
        assert_eq!(session.current_card().unwrap().front, "base case");

        session.prev_card();
        session.prev_card();
        assert_eq!(session.progress().count(), 0);
    }

    #[test]
    fn test_empty_deck_session_is_immediately_complete() {
        let session = StudySession::new("empty".to_string(), Vec::new());
        assert!(session.is_completed());
        assert!(session.current_card().is_none());
    }
}
