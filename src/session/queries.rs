use super::*;

impl QuizSession {
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn active_question(&self) -> Option<&Question> {
        self.questions.get(self.state.active_question_index)
    }

    pub fn is_last_question(&self) -> bool {
        self.state.active_question_index + 1 >= self.questions.len()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn store(&self) -> &ProgressStore {
        &self.store
    }
}
