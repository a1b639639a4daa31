use super::*;

impl QuizSession {
    /// Borra el progreso guardado y empieza un intento nuevo con el reloj en marcha.
    /// El hueco del almacén queda vacío hasta la siguiente transición.
    pub fn restart(&mut self) {
        self.store.clear();
        self.state = QuizState {
            fullscreen_active: self.state.fullscreen_active,
            ..QuizState::default()
        };
        self.arm_timer();
        info!("quiz reiniciado ({} preguntas)", self.questions.len());
    }
}
