use super::*;

impl QuizSession {
    /// Refleja el estado real de pantalla completa. Al salir siempre se vuelve a
    /// la vista de preguntas, aunque el quiz ya estuviera terminado.
    pub fn on_fullscreen_changed(&mut self, fullscreen: bool) {
        self.state.fullscreen_active = fullscreen;
        if !fullscreen {
            self.state.show_results = false;
        }
        debug!("pantalla completa = {fullscreen}, fase {:?}", self.phase());
        self.persist();
    }

    /// Ajusta la bandera al estado real del entorno al arrancar. No es un cambio
    /// del entorno, así que los resultados siguen visibles.
    pub fn reconcile_fullscreen(&mut self, fullscreen: bool) {
        if self.state.fullscreen_active == fullscreen {
            return;
        }
        self.state.fullscreen_active = fullscreen;
        debug!("pantalla completa al arrancar = {fullscreen}, fase {:?}", self.phase());
        self.persist();
    }
}
