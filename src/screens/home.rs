//! Home tab: study guides (subjects) and the user's own decks.

use crate::catalog::Catalog;
use eframe::egui;

pub enum HomeAction {
    OpenDeck { title: String, card_count: usize },
}

pub fn show(ctx: &egui::Context, catalog: &Catalog) -> Option<HomeAction> {
    let mut action = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Home");
        ui.separator();

        egui::ScrollArea::vertical()
            .id_source("home_lists")
            .show(ui, |ui| {
                ui.label("Study guides");
                ui.add_space(4.0);
                for subject in &catalog.subjects {
                    ui.group(|ui| {
                        ui.strong(&subject.name);
                        ui.weak(subject.summary_label());
                    });
                }

                ui.add_space(12.0);
                ui.label("My decks");
                ui.add_space(4.0);
                for deck in &catalog.my_decks {
                    let label = if deck.visibility {
                        format!("{} ({})", deck.title, deck.card_count_label())
                    } else {
                        format!("{} ({}) 🔒", deck.title, deck.card_count_label())
                    };
                    if ui.selectable_label(false, label).clicked() {
                        action = Some(HomeAction::OpenDeck {
                            title: deck.title.clone(),
                            card_count: deck.card_count(),
                        });
                    }
                }
            });
    });

    action
}
