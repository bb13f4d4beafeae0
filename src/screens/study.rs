//! Study flow: one card at a time with a progress-tracked review loop.
//!
//! The progress bar does not jump: its displayed fraction is time-eased toward
//! the counter's real fraction. The easing state lives in the egui context and
//! is keyed to this screen, so it falls away when the user navigates off.

use crate::models::StudySession;
use eframe::egui;

pub enum StudyAction {
    Exit,
}

pub fn show(ctx: &egui::Context, session: &mut StudySession) -> Option<StudyAction> {
    let mut action = None;

    // Deferred so the card borrow ends before the session is mutated.
    let mut action_reveal = false;
    let mut action_next = false;
    let mut action_prev = false;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("←").clicked() {
                action = Some(StudyAction::Exit);
            }
            ui.heading(format!("Studying: {}", session.deck_title));
        });
        ui.separator();

        let progress = session.progress();
        ui.vertical_centered(|ui| {
            ui.label(format!("{} / {}", progress.count(), progress.total()));
        });

        let eased = ctx.animate_value_with_time(
            egui::Id::new("study_progress_bar"),
            progress.fraction(),
            1.0,
        );
        ui.add(egui::ProgressBar::new(eased));

        ui.add_space(16.0);

        if session.is_completed() {
            ui.vertical_centered(|ui| {
                ui.heading("Session complete!");
                ui.label("You went through every card in this deck.");
                ui.add_space(12.0);
                if ui.button("Back to deck").clicked() {
                    action = Some(StudyAction::Exit);
                }
            });
        } else if let Some(card) = session.current_card() {
            let show_back = session.show_back;

            ui.group(|ui| {
                ui.set_min_height(160.0);
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    ui.heading(&card.front);
                    ui.add_space(12.0);
                    if show_back {
                        ui.label(&card.back);
                    } else {
                        ui.weak("(tap 'Show back' to reveal)");
                    }
                    ui.add_space(12.0);
                });
            });

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(progress.count() > 0, egui::Button::new("Previous card"))
                    .clicked()
                {
                    action_prev = true;
                }
                if !show_back && ui.button("Show back").clicked() {
                    action_reveal = true;
                }
                if ui.button("Next card").clicked() {
                    action_next = true;
                }
            });
        }
    });

    if action_reveal {
        session.toggle_back();
    }
    if action_next {
        session.next_card();
    }
    if action_prev {
        session.prev_card();
    }

    action
}
