//! Top-level application state: the navigation stack, the per-tab screen
//! state, and the eframe update loop dispatching to screens.

use crate::catalog::Catalog;
use crate::models::StudySession;
use crate::navigation::{NavStack, Route, TABS};
use crate::screens;
use crate::screens::create::{CreateAction, CreateFlow};
use crate::screens::deck::DeckAction;
use crate::screens::home::HomeAction;
use crate::screens::search::SearchAction;
use crate::screens::study::StudyAction;
use eframe::egui;

pub struct PrepApp {
    catalog: Catalog,
    nav: NavStack,
    create: CreateFlow,
    study: Option<StudySession>,
    search_query: String,
}

impl PrepApp {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            nav: NavStack::default(),
            create: CreateFlow::default(),
            study: None,
            search_query: String::new(),
        }
    }

    /// Replaces the stack with the chosen tab's root. The create draft only
    /// lives while the create flow is active, so moving to another tab
    /// discards it.
    fn switch_tab(&mut self, tab: Route) {
        if *self.nav.current() == Route::Create && tab != Route::Create {
            self.create.reset();
        }
        self.nav.switch_tab(tab);
    }

    fn open_deck(&mut self, title: String, card_count: usize) {
        self.nav.push(Route::DeckDetail { title, card_count });
    }

    /// Starts a study session over the named deck. Missing decks get an empty
    /// session, which renders as immediately complete.
    fn start_practice(&mut self, title: &str) {
        let cards = self
            .catalog
            .find_deck(title)
            .map(|deck| deck.cards.clone())
            .unwrap_or_default();
        self.study = Some(StudySession::new(title.to_string(), cards));
        self.nav.push(Route::Study);
    }

    fn leave_create_flow(&mut self) {
        self.create.reset();
        self.nav.switch_tab(Route::Home);
    }

    fn end_study(&mut self) {
        self.study = None;
        self.nav.pop();
    }

    fn show_bottom_nav(&mut self, ctx: &egui::Context) {
        let active_tab = self.nav.current().tab();
        let mut selected: Option<Route> = None;

        egui::TopBottomPanel::bottom("bottom_nav").show(ctx, |ui| {
            ui.columns(TABS.len(), |columns| {
                for (column, (tab, label)) in columns.iter_mut().zip(TABS) {
                    let is_active = active_tab == tab;
                    column.vertical_centered(|ui| {
                        if ui.selectable_label(is_active, label).clicked() && !is_active {
                            selected = Some(tab);
                        }
                    });
                }
            });
        });

        if let Some(tab) = selected {
            self.switch_tab(tab);
        }
    }
}

impl eframe::App for PrepApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Panels attach outside-in: the bottom bar has to go in before the
        // screen fills the rest.
        if self.nav.current().shows_bottom_nav() {
            self.show_bottom_nav(ctx);
        }

        let route = self.nav.current().clone();
        match route {
            Route::Home => {
                if let Some(HomeAction::OpenDeck { title, card_count }) =
                    screens::home::show(ctx, &self.catalog)
                {
                    self.open_deck(title, card_count);
                }
            }
            Route::Search => {
                if let Some(SearchAction::OpenDeck { title, card_count }) =
                    screens::search::show(ctx, &mut self.search_query, &self.catalog)
                {
                    self.open_deck(title, card_count);
                }
            }
            Route::Create => match screens::create::show(ctx, &mut self.create) {
                Some(CreateAction::Closed) | Some(CreateAction::Done) => {
                    self.leave_create_flow();
                }
                None => {}
            },
            Route::DeckDetail { title, card_count } => {
                match screens::deck::show(ctx, &title, card_count, &self.catalog) {
                    Some(DeckAction::Back) => self.nav.pop(),
                    Some(DeckAction::Practice) => self.start_practice(&title),
                    None => {}
                }
            }
            Route::Study => {
                if let Some(session) = self.study.as_mut() {
                    if let Some(StudyAction::Exit) = screens::study::show(ctx, session) {
                        self.end_study();
                    }
                } else {
                    // No session to render; unwind to whatever pushed us.
                    self.nav.pop();
                }
            }
            Route::More => screens::more::show(ctx),
        }
    }
}
