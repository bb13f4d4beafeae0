//! Search tab: browse decks by subject or look a deck up by title.

use crate::catalog::Catalog;
use eframe::egui;

pub enum SearchAction {
    OpenDeck { title: String, card_count: usize },
}

pub fn show(ctx: &egui::Context, query: &mut String, catalog: &Catalog) -> Option<SearchAction> {
    let mut action = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Search");
        ui.separator();

        ui.add(
            egui::TextEdit::singleline(query)
                .hint_text("Find decks and subjects")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .id_source("search_results")
            .show(ui, |ui| {
                // Deck title hits first, then the matching subjects with their
                // full deck lists.
                let deck_hits = catalog.search_decks(query);
                if !deck_hits.is_empty() {
                    ui.label("Decks");
                    for deck in deck_hits {
                        if ui
                            .selectable_label(
                                false,
                                format!("{} ({})", deck.title, deck.card_count_label()),
                            )
                            .clicked()
                        {
                            action = Some(SearchAction::OpenDeck {
                                title: deck.title.clone(),
                                card_count: deck.card_count(),
                            });
                        }
                    }
                    ui.add_space(8.0);
                }

                ui.label("Subjects");
                for subject in catalog.search_subjects(query) {
                    ui.group(|ui| {
                        ui.strong(&subject.name);
                        ui.weak(subject.summary_label());
                        for deck in &subject.decks {
                            if ui
                                .selectable_label(
                                    false,
                                    format!("  {} ({})", deck.title, deck.card_count_label()),
                                )
                                .clicked()
                            {
                                action = Some(SearchAction::OpenDeck {
                                    title: deck.title.clone(),
                                    card_count: deck.card_count(),
                                });
                            }
                        }
                    });
                }
            });
    });

    action
}
