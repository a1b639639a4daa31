use super::*;
use std::time::Duration;

impl QuizApp {
    /// Observa el entorno y aplica los cambios de pantalla completa pendientes, en orden.
    pub fn pump_fullscreen_events(&mut self) {
        self.fullscreen.sync();
        while let Ok(fullscreen) = self.fullscreen_events.try_recv() {
            self.session.on_fullscreen_changed(fullscreen);
        }
    }

    /// Avanza la cuenta atrás con el tiempo de frame. Devuelve cuánto falta para
    /// el siguiente tick mientras el reloj siga armado.
    pub fn drive_timer(&mut self, now: f64) -> Option<Duration> {
        if self.ticker.poll(now, self.session.timer_armed()) {
            self.session.tick();
            if !self.session.timer_armed() {
                self.ticker.cancel();
            }
        }
        self.ticker.time_to_next(now)
    }
}
