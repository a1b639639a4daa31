use egui::{Button, Context, RichText};
use crate::QuizApp;
use crate::ui::helpers::stat_box;
use crate::ui::layout::centered_panel;

/// Vista de resultados; también hace de portada mientras no hay pantalla completa.
pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let card = app.results_card();

    centered_panel(ctx, 260.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Results 📊");
            ui.add_space(12.0);
            ui.label(RichText::new(card.headline()).size(18.0));
            ui.add_space(12.0);

            ui.columns(2, |cols| {
                cols[0].vertical_centered(|ui| {
                    stat_box(ui, "Correct Answers", card.correct_answers.to_string());
                });
                cols[1].vertical_centered(|ui| {
                    stat_box(ui, "Wrong Answers", card.wrong_answers.to_string());
                });
            });

            ui.add_space(18.0);
            let restart = ui.add_sized(
                [320.0, 36.0],
                Button::new("Click here to Initialize or Restart Quiz"),
            );
            if restart.clicked() {
                app.restart();
            }

            ui.add_space(12.0);
            ui.label(
                RichText::new("Begin or Complete the Quiz by Clicking on Enter Quiz")
                    .strong(),
            );
        });
    });
}
