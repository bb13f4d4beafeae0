pub mod app;
pub mod catalog;
pub mod models;
pub mod navigation;
pub mod screens;

pub use app::PrepApp;
pub use catalog::{Catalog, CatalogError, Subject};
pub use models::{Card, Deck, DeckDraft, StudyProgress, StudySession};
pub use navigation::{NavStack, Route};
