//! Deck-creation wizard: title entry, then paginated card entry.
//!
//! Two linear states. "Next" on the title step is disabled until the title has
//! a non-whitespace character; the card step pages through the draft's card
//! list with add/remove. "Done" logs the card list and leaves the flow; the
//! draft is discarded, nothing is persisted.

use crate::models::{Card, DeckDraft};
use eframe::egui;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CreateState {
    #[default]
    Title,
    Cards,
}

/// State of the create flow: wizard step, the draft, and the visible page of
/// the card pager. Reset whenever the user navigates away.
#[derive(Default)]
pub struct CreateFlow {
    pub state: CreateState,
    pub draft: DeckDraft,
    pub page: usize,
}

impl CreateFlow {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// What the wizard asks the app shell to do.
pub enum CreateAction {
    /// Close the flow, discarding the draft.
    Closed,
    /// "Done" was tapped: the card list has been logged, leave the flow.
    Done,
}

pub fn show(ctx: &egui::Context, flow: &mut CreateFlow) -> Option<CreateAction> {
    match flow.state {
        CreateState::Title => show_title_step(ctx, flow),
        CreateState::Cards => show_card_step(ctx, flow),
    }
}

fn show_title_step(ctx: &egui::Context, flow: &mut CreateFlow) -> Option<CreateAction> {
    let mut action = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("✕").clicked() {
                action = Some(CreateAction::Closed);
            }
            ui.heading("Create new deck");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Guard: no card step without a title.
                if ui
                    .add_enabled(flow.draft.can_proceed(), egui::Button::new("Next"))
                    .clicked()
                {
                    flow.state = CreateState::Cards;
                }
            });
        });
        ui.separator();

        ui.add_space(24.0);

        ui.add(
            egui::TextEdit::singleline(&mut flow.draft.title)
                .hint_text("Untitled deck")
                .desired_width(f32::INFINITY),
        );

        ui.add_space(16.0);

        ui.horizontal(|ui| {
            ui.label("Visible to everyone");
            ui.checkbox(&mut flow.draft.visibility, "");
        });
        ui.label("Other students can find, view, and study this deck");
    });

    action
}

fn show_card_step(ctx: &egui::Context, flow: &mut CreateFlow) -> Option<CreateAction> {
    let mut action = None;

    // Deferred actions so the draft isn't mutated while its cards are borrowed.
    let mut action_add = false;
    let mut action_remove: Option<usize> = None;
    let mut action_set: Option<(usize, Card)> = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        let card_count = flow.draft.card_count();
        let page = flow.page.min(card_count - 1);

        ui.horizontal(|ui| {
            // No backward guard: close returns to the title step.
            if ui.button("✕").clicked() {
                flow.state = CreateState::Title;
            }
            ui.heading(format!("{}/{}", page + 1, card_count));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Done").clicked() {
                    log::debug!(target: "card_list", "{}", flow.draft.summary());
                    action = Some(CreateAction::Done);
                }
            });
        });
        ui.separator();

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.add_enabled(page > 0, egui::Button::new("◀")).clicked() {
                flow.page = page - 1;
            }

            ui.vertical(|ui| {
                let mut card = flow.draft.cards()[page].clone();
                let mut changed = false;

                // Scope text-edit state to the page so cursors don't leak
                // between cards.
                ui.push_id(page, |ui| {
                    ui.group(|ui| {
                        changed |= ui
                            .add(
                                egui::TextEdit::singleline(&mut card.front)
                                    .hint_text("Front")
                                    .desired_width(f32::INFINITY),
                            )
                            .changed();
                        ui.separator();
                        changed |= ui
                            .add(
                                egui::TextEdit::multiline(&mut card.back)
                                    .hint_text("Back")
                                    .desired_width(f32::INFINITY)
                                    .desired_rows(4),
                            )
                            .changed();

                        if ui.button("🗑").clicked() {
                            action_remove = Some(page);
                        }
                    });
                });

                if changed {
                    action_set = Some((page, card));
                }
            });

            if ui
                .add_enabled(page + 1 < card_count, egui::Button::new("▶"))
                .clicked()
            {
                flow.page = page + 1;
            }
        });

        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            if ui.button("➕").clicked() {
                action_add = true;
            }
        });
    });

    if let Some((index, card)) = action_set {
        flow.draft.set_card(index, card);
    }
    if let Some(index) = action_remove {
        flow.draft.remove_card(index);
        // The list never goes empty, so clamping keeps the page valid.
        flow.page = flow.page.min(flow.draft.card_count() - 1);
    }
    if action_add {
        // Jump to the page that was just added.
        flow.page = flow.draft.add_card();
    }

    action
}
