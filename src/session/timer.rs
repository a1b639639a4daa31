use super::*;

impl QuizSession {
    pub fn start_timer(&mut self) {
        if self.arm_timer() {
            self.persist();
        }
    }

    /// Pone el reloj en marcha sin tocar el almacén. Devuelve false si ya corría
    /// o si el quiz está terminado (solo `restart` vuelve a arrancarlo).
    pub(super) fn arm_timer(&mut self) -> bool {
        if self.state.timer_running || self.state.show_results {
            return false;
        }
        self.state.timer_running = true;
        self.state.last_start_timestamp = chrono::Utc::now().timestamp_millis();
        debug!(
            "temporizador en marcha ({} s restantes)",
            self.state.time_remaining_secs
        );
        true
    }

    pub fn stop_timer(&mut self) {
        if self.state.timer_running {
            self.state.timer_running = false;
            debug!("temporizador parado");
            self.persist();
        }
    }

    /// Un segundo de cuenta atrás. Al llegar a cero el quiz termina aunque haya
    /// una respuesta seleccionada sin enviar (no se cuenta).
    pub fn tick(&mut self) {
        if !self.timer_armed() {
            return;
        }
        self.state.time_remaining_secs -= 1;
        if self.state.time_remaining_secs == 0 {
            info!("se acabó el tiempo");
            self.finish();
        }
        self.persist();
    }

    /// El reloj solo debe programar otro tick mientras esto sea cierto.
    pub fn timer_armed(&self) -> bool {
        self.state.timer_running && self.state.time_remaining_secs > 0
    }
}
