use super::*;
use crate::model::Phase;
use crate::view_models::{OptionRow, QuestionCard, ResultsCard};

impl QuizApp {
    /// Tarjeta de la pregunta activa; solo existe en fase `InProgress`.
    pub fn question_card(&self) -> Option<QuestionCard> {
        if self.session.phase() != Phase::InProgress {
            return None;
        }
        let state = self.session.state();
        let question = self.session.active_question()?;
        Some(QuestionCard {
            number: state.active_question_index + 1,
            total: self.session.question_count(),
            prompt: question.question.clone(),
            options: question
                .options
                .iter()
                .enumerate()
                .map(|(idx, text)| OptionRow {
                    idx,
                    text: text.clone(),
                    selected: state.selected_answer_index == Some(idx),
                })
                .collect(),
            time_remaining_secs: state.time_remaining_secs,
            can_advance: state.answer_checked,
            is_last: self.session.is_last_question(),
        })
    }

    pub fn results_card(&self) -> ResultsCard {
        let results = self.session.state().results;
        ResultsCard {
            score: results.score,
            total: self.session.question_count(),
            correct_answers: results.correct_answers,
            wrong_answers: results.wrong_answers,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::QuizApp;
    use crate::data::read_questions_embedded;
    use crate::fullscreen::NoFullscreen;
    use crate::session::QuizSession;
    use crate::store::ProgressStore;

    fn app() -> QuizApp {
        let questions = read_questions_embedded().expect("banco embebido");
        QuizApp::new(
            QuizSession::new(questions, ProgressStore::in_memory()),
            Box::new(NoFullscreen::default()),
        )
    }

    #[test]
    fn no_question_card_outside_fullscreen() {
        let app = app();
        assert!(app.question_card().is_none());
        assert_eq!(app.results_card().headline(), "You scored 0 out of 10");
    }

    #[test]
    fn question_card_reflects_selection() {
        let mut app = app();
        app.session.on_fullscreen_changed(true);
        app.select_answer(1);
        let card = app.question_card().expect("tarjeta en InProgress");
        assert_eq!(card.header(), "Question: 1/10");
        assert!(card.can_advance);
        assert!(!card.is_last);
        let selected: Vec<usize> = card
            .options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.idx)
            .collect();
        assert_eq!(selected, vec![1]);
    }
}
