//! More tab: static about page.

use eframe::egui;

pub fn show(ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("More");
        ui.separator();

        ui.label(format!("Card Prep {}", env!("CARGO_PKG_VERSION")));
        ui.weak("A deck-building and study app.");
        ui.add_space(8.0);
        ui.weak("Decks and drafts live in memory only; nothing is saved between runs.");
    });
}
