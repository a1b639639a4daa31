use super::*;
use crate::error::QuizError;

impl QuizApp {
    /// Opción pulsada en la vista, por índice dentro de la pregunta activa.
    pub fn select_answer(&mut self, idx: usize) {
        let option = self
            .session
            .active_question()
            .and_then(|q| q.option(idx))
            .map(str::to_owned)
            .unwrap_or_default();
        let result = self.session.select_answer(&option, idx);
        self.report(result);
    }

    pub fn advance(&mut self) {
        let result = self.session.advance().map(|_| ());
        self.report(result);
    }

    pub fn start_timer(&mut self) {
        self.session.start_timer();
    }

    pub fn stop_timer(&mut self) {
        self.session.stop_timer();
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.message.clear();
    }

    /// Pide entrar o salir; el cambio real llega después por el oyente.
    pub fn request_fullscreen_toggle(&mut self) {
        if !self.fullscreen.is_supported() {
            debug!("pantalla completa no soportada; petición ignorada");
            return;
        }
        if self.fullscreen.is_fullscreen() {
            self.fullscreen.exit();
        } else {
            self.fullscreen.enter();
        }
    }

    fn report(&mut self, result: Result<(), QuizError>) {
        match result {
            Ok(()) => self.message.clear(),
            Err(e) => {
                debug!("intención rechazada: {e}");
                self.message = e.to_string();
            }
        }
    }
}
