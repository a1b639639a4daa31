use crate::fullscreen::{FullscreenController, ListenerId};
use crate::session::QuizSession;
use log::{debug, info};
use std::sync::mpsc::{Receiver, channel};

// Submódulos
pub mod events;
pub mod intents;
pub mod ticker;
pub mod view_models;

pub use ticker::Ticker;

/// La app de escritorio/web: la máquina de estados más sus fuentes de eventos
/// (pantalla completa y reloj).
pub struct QuizApp {
    pub session: QuizSession,
    pub message: String,
    fullscreen: Box<dyn FullscreenController>,
    fullscreen_events: Receiver<bool>,
    listener: Option<ListenerId>,
    ticker: Ticker,
}

impl QuizApp {
    pub fn new(mut session: QuizSession, mut fullscreen: Box<dyn FullscreenController>) -> Self {
        // El snapshot puede venir de una sesión que estaba en pantalla completa
        if fullscreen.is_supported() {
            session.reconcile_fullscreen(fullscreen.is_fullscreen());
        }

        let (tx, rx) = channel();
        let listener = fullscreen.subscribe(Box::new(move |on| {
            // el receptor solo desaparece junto con la app
            let _ = tx.send(on);
        }));
        if !fullscreen.is_supported() {
            info!("pantalla completa no disponible; el botón no hará nada");
        }

        Self {
            session,
            message: String::new(),
            fullscreen,
            fullscreen_events: rx,
            listener: Some(listener),
            ticker: Ticker::default(),
        }
    }

    /// Estado real del entorno, no el guardado en el snapshot.
    pub fn environment_fullscreen(&self) -> bool {
        self.fullscreen.is_supported() && self.fullscreen.is_fullscreen()
    }
}

impl Drop for QuizApp {
    fn drop(&mut self) {
        if let Some(id) = self.listener.take() {
            self.fullscreen.unsubscribe(id);
            debug!("oyente de pantalla completa liberado");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_questions_embedded;
    use crate::fullscreen::testing::ScriptedFullscreen;
    use crate::model::{Phase, QUIZ_DURATION_SECS};
    use crate::store::ProgressStore;

    fn app_with(fs: &ScriptedFullscreen) -> QuizApp {
        let questions = read_questions_embedded().expect("banco embebido");
        let session = QuizSession::new(questions, ProgressStore::in_memory());
        QuizApp::new(session, Box::new(fs.clone()))
    }

    #[test]
    fn listener_lives_as_long_as_the_app() {
        let fs = ScriptedFullscreen::new(true);
        let app = app_with(&fs);
        assert_eq!(fs.listener_count(), 1);
        drop(app);
        assert_eq!(fs.listener_count(), 0);
    }

    #[test]
    fn toggle_requests_enter_then_exit() {
        let fs = ScriptedFullscreen::new(true);
        let mut app = app_with(&fs);

        app.request_fullscreen_toggle();
        // la petición no cambia el estado por sí sola
        assert!(!app.session.state().fullscreen_active);

        fs.grant();
        app.pump_fullscreen_events();
        assert!(app.session.state().fullscreen_active);
        assert_eq!(app.session.phase(), Phase::InProgress);

        app.request_fullscreen_toggle();
        fs.grant();
        app.pump_fullscreen_events();
        assert!(!app.session.state().fullscreen_active);
        assert_eq!(fs.requests(), vec![true, false]);
    }

    #[test]
    fn unsupported_fullscreen_ignores_toggle() {
        let fs = ScriptedFullscreen::new(false);
        let mut app = app_with(&fs);
        app.request_fullscreen_toggle();
        assert!(fs.requests().is_empty());
        assert!(app.message.is_empty());
    }

    #[test]
    fn external_exit_drops_back_from_results() {
        let fs = ScriptedFullscreen::new(true);
        let mut app = app_with(&fs);
        fs.set_environment(true);
        app.pump_fullscreen_events();
        app.restart();
        for _ in 0..10 {
            app.select_answer(0);
            app.advance();
        }
        assert_eq!(app.session.phase(), Phase::Finished);

        // Escape del sistema, no iniciado por la app
        fs.set_environment(false);
        app.pump_fullscreen_events();
        assert!(!app.session.state().show_results);
    }

    #[test]
    fn startup_reconciles_fullscreen_without_hiding_results() {
        let mut saved = crate::model::QuizState::default();
        saved.fullscreen_active = true;
        saved.show_results = true;
        saved.results.correct_answers = 4;
        saved.results.score = 4;
        let mut store = ProgressStore::in_memory();
        store.save(&saved);

        let questions = read_questions_embedded().expect("banco embebido");
        let fs = ScriptedFullscreen::new(true);
        let app = QuizApp::new(QuizSession::new(questions, store), Box::new(fs.clone()));

        assert!(!app.session.state().fullscreen_active);
        assert!(app.session.state().show_results);
        assert_eq!(app.session.phase(), Phase::Finished);
    }

    #[test]
    fn unsupported_fullscreen_keeps_last_known_flag() {
        let mut saved = crate::model::QuizState::default();
        saved.fullscreen_active = true;
        let mut store = ProgressStore::in_memory();
        store.save(&saved);

        let questions = read_questions_embedded().expect("banco embebido");
        let fs = ScriptedFullscreen::new(false);
        let app = QuizApp::new(QuizSession::new(questions, store), Box::new(fs.clone()));
        assert!(app.session.state().fullscreen_active);
    }

    #[test]
    fn rejected_intent_sets_message_without_mutating() {
        let fs = ScriptedFullscreen::new(true);
        let mut app = app_with(&fs);
        app.advance();
        assert!(!app.message.is_empty());
        assert_eq!(app.session.state().results.answered(), 0);

        app.select_answer(2);
        assert!(app.message.is_empty());
        assert_eq!(app.session.state().selected_answer_text, "Paris");
    }

    #[test]
    fn timer_ticks_once_per_second_of_frame_time() {
        let fs = ScriptedFullscreen::new(true);
        let mut app = app_with(&fs);
        app.start_timer();

        assert!(app.drive_timer(0.0).is_some());
        app.drive_timer(0.5);
        app.drive_timer(1.0);
        app.drive_timer(1.2);
        app.drive_timer(2.0);
        assert_eq!(app.session.state().time_remaining_secs, QUIZ_DURATION_SECS - 2);

        app.stop_timer();
        assert!(app.drive_timer(3.0).is_none());
        assert!(app.drive_timer(10.0).is_none());
        assert_eq!(app.session.state().time_remaining_secs, QUIZ_DURATION_SECS - 2);
    }
}
