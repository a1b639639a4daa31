use egui::{Button, Context, RichText};
use crate::QuizApp;
use crate::ui::helpers::{badge, option_button};
use crate::ui::layout::centered_panel;
use crate::view_models::QuestionCard;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context, card: &QuestionCard) {
    let max_width = 560.0;
    let est_height = 120.0 + card.options.len() as f32 * 44.0 + 80.0;

    centered_panel(ctx, est_height, max_width, |ui| {
        let panel_width = ui.available_width();

        ui.horizontal(|ui| {
            badge(ui, card.header());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                badge(ui, card.clock());
            });
        });
        ui.add_space(18.0);

        ui.label(RichText::new(&card.prompt).heading().strong());
        ui.add_space(12.0);

        let mut clicked = None;
        for option in &card.options {
            if option_button(ui, &option.text, panel_width, 36.0, option.selected) {
                clicked = Some(option.idx);
            }
            ui.add_space(4.0);
        }
        if let Some(idx) = clicked {
            app.select_answer(idx);
        }

        ui.add_space(14.0);
        let next = ui.add_enabled(
            card.can_advance,
            Button::new(card.advance_label()).min_size(egui::vec2(160.0, 36.0)),
        );
        if next.clicked() {
            app.advance();
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}
