use super::*;

impl QuizSession {
    /// Registra la opción pulsada. La última selección antes de avanzar es la que cuenta.
    pub fn select_answer(&mut self, option: &str, idx: usize) -> Result<(), QuizError> {
        if self.state.show_results {
            return Err(QuizError::Finished);
        }

        let (available, correct) = match self.active_question() {
            Some(q) => (q.options.len(), q.is_correct(option)),
            None => (0, false),
        };
        if idx >= available {
            return Err(QuizError::UnknownOption {
                index: idx,
                available,
            });
        }

        self.state.selected_answer_index = Some(idx);
        self.state.selected_answer_text = if correct {
            option.to_owned()
        } else {
            String::new()
        };
        self.state.answer_checked = true;
        debug!(
            "pregunta {}: opción {idx} ({})",
            self.state.active_question_index + 1,
            if correct { "correcta" } else { "incorrecta" }
        );

        self.persist();
        Ok(())
    }

    /// Suma la respuesta pendiente al marcador y pasa a la siguiente pregunta,
    /// o termina el quiz si era la última.
    pub fn advance(&mut self) -> Result<Phase, QuizError> {
        if self.state.show_results {
            return Err(QuizError::Finished);
        }
        if !self.state.answer_checked {
            return Err(QuizError::NoAnswerSelected);
        }

        let correct = !self.state.selected_answer_text.is_empty();
        self.state.results.record(correct);
        self.state.selected_answer_index = None;
        self.state.selected_answer_text.clear();
        self.state.answer_checked = false;

        if self.is_last_question() {
            self.finish();
        } else {
            self.state.active_question_index += 1;
        }

        self.persist();
        Ok(self.phase())
    }
}
