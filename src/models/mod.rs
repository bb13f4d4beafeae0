pub mod card;
pub mod deck;
pub mod deck_draft;
pub mod study_progress;
pub mod study_session;

pub use card::Card;
pub use deck::Deck;
pub use deck_draft::DeckDraft;
pub use study_progress::StudyProgress;
pub use study_session::StudySession;
