//! Máquina de estados del quiz: dueña de `QuizState` y de todas sus transiciones.
//!
//! Cada transición que cambia algo vuelca el snapshot completo al almacén.

use crate::error::QuizError;
use crate::model::{Phase, Question, QuizState};
use crate::store::ProgressStore;
use log::{debug, info, warn};

// Submódulos
pub mod actions;
pub mod fullscreen;
pub mod queries;
pub mod resets;
pub mod timer;

pub struct QuizSession {
    questions: Vec<Question>,
    state: QuizState,
    store: ProgressStore,
}

impl QuizSession {
    /// Rehidrata el estado desde el almacén. Un snapshot que no encaja con el
    /// banco de preguntas se trata igual que uno ausente.
    pub fn new(questions: Vec<Question>, store: ProgressStore) -> Self {
        let loaded = store.load();
        let state = if snapshot_fits(&loaded, &questions) {
            loaded
        } else {
            warn!("el progreso guardado no encaja con el banco de preguntas; se empieza de cero");
            QuizState::default()
        };

        let session = Self {
            questions,
            state,
            store,
        };

        info!(
            "quiz listo: pregunta {}/{}, {} s restantes, fase {:?}",
            session.state.active_question_index + 1,
            session.questions.len(),
            session.state.time_remaining_secs,
            session.phase()
        );
        session
    }

    fn persist(&mut self) {
        self.store.save(&self.state);
    }

    /// Estado terminal del intento: para el reloj y muestra resultados.
    fn finish(&mut self) {
        self.state.timer_running = false;
        self.state.show_results = true;
        info!(
            "quiz terminado: {} correctas, {} incorrectas",
            self.state.results.correct_answers, self.state.results.wrong_answers
        );
    }
}

fn snapshot_fits(state: &QuizState, questions: &[Question]) -> bool {
    if !state.is_consistent_with(questions.len()) {
        return false;
    }
    match state.selected_answer_index {
        Some(idx) => questions[state.active_question_index].options.len() > idx,
        None => true,
    }
}
