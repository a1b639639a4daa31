mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Eventos del entorno antes de pintar: pantalla completa y reloj
        self.pump_fullscreen_events();
        let now = ctx.input(|i| i.time);
        if let Some(wait) = self.drive_timer(now) {
            ctx.request_repaint_after(wait);
        }

        // BOTÓN SUPERIOR ENTRAR/SALIR DEL QUIZ
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Solo se ve la pregunta en pantalla completa y con el quiz sin terminar
        match self.question_card() {
            Some(card) => views::quiz::ui_quiz(self, ctx, &card),
            None => views::results::ui_results(self, ctx),
        }
    }
}
