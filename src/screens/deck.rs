//! Deck detail: card list plus the "Practice all cards" entry point.

use crate::catalog::Catalog;
use eframe::egui;

pub enum DeckAction {
    Back,
    /// Start a study session over this deck's cards.
    Practice,
}

pub fn show(
    ctx: &egui::Context,
    title: &str,
    card_count: usize,
    catalog: &Catalog,
) -> Option<DeckAction> {
    let mut action = None;

    // Footer panel goes in before the central panel claims the rest.
    egui::TopBottomPanel::bottom("practice_bar").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(6.0);
            if ui.button("Practice all cards").clicked() {
                action = Some(DeckAction::Practice);
            }
            ui.add_space(6.0);
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("←").clicked() {
                action = Some(DeckAction::Back);
            }
            ui.heading(title);
        });
        ui.separator();

        let label = if card_count == 1 {
            "1 Card".to_string()
        } else {
            format!("{} Cards", card_count)
        };
        ui.weak(label);
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .id_source("deck_cards")
            .show(ui, |ui| {
                if let Some(deck) = catalog.find_deck(title) {
                    for card in &deck.cards {
                        ui.group(|ui| {
                            ui.strong(&card.front);
                            ui.separator();
                            ui.weak(&card.back);
                        });
                        ui.add_space(4.0);
                    }
                } else {
                    // Route params may outlive the catalog entry; fall back to
                    // placeholders sized by the card count.
                    for _ in 0..card_count {
                        ui.group(|ui| {
                            ui.strong("Front");
                            ui.separator();
                            ui.weak("Back");
                        });
                        ui.add_space(4.0);
                    }
                }
            });
    });

    action
}
