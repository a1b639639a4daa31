use serde::{Deserialize, Serialize};

/// Duración total del quiz en segundos (10 minutos).
pub const QUIZ_DURATION_SECS: u32 = 600;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl Question {
    pub fn is_correct(&self, option: &str) -> bool {
        self.answer == option
    }

    pub fn option(&self, idx: usize) -> Option<&str> {
        self.options.get(idx).map(String::as_str)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizResults {
    pub score: u32,
    pub correct_answers: u32,
    pub wrong_answers: u32,
}

impl QuizResults {
    pub fn answered(&self) -> u32 {
        self.correct_answers + self.wrong_answers
    }

    pub fn record(&mut self, correct: bool) {
        if correct {
            self.score += 1;
            self.correct_answers += 1;
        } else {
            self.wrong_answers += 1;
        }
    }
}

/// Snapshot completo del quiz. Es lo que se guarda tal cual en el almacenamiento,
/// con las mismas claves camelCase que usaba la versión web.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizState {
    #[serde(rename = "activeQuestion")]
    pub active_question_index: usize,
    /// Texto de la respuesta si la selección actual es correcta, vacío si no.
    #[serde(rename = "selectedAnswer")]
    pub selected_answer_text: String,
    pub selected_answer_index: Option<usize>,
    #[serde(rename = "checked")]
    pub answer_checked: bool,
    pub show_results: bool,
    pub results: QuizResults,
    #[serde(rename = "isFullscreen")]
    pub fullscreen_active: bool,
    #[serde(rename = "quizTimeRemaining")]
    pub time_remaining_secs: u32,
    #[serde(rename = "quizTimerRunning")]
    pub timer_running: bool,
    /// Epoch en milisegundos del último arranque del temporizador. Solo informativo.
    #[serde(rename = "timestamp")]
    pub last_start_timestamp: i64,
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            active_question_index: 0,
            selected_answer_text: String::new(),
            selected_answer_index: None,
            answer_checked: false,
            show_results: false,
            results: QuizResults::default(),
            fullscreen_active: false,
            time_remaining_secs: QUIZ_DURATION_SECS,
            timer_running: false,
            last_start_timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

impl QuizState {
    pub fn phase(&self) -> Phase {
        if self.show_results {
            Phase::Finished
        } else if self.fullscreen_active {
            Phase::InProgress
        } else {
            Phase::Suspended
        }
    }

    /// Comprueba que un snapshot rehidratado encaja con el banco de preguntas actual.
    pub fn is_consistent_with(&self, question_count: usize) -> bool {
        self.active_question_index < question_count
            && self.time_remaining_secs <= QUIZ_DURATION_SECS
            && self.results.score == self.results.correct_answers
            && self.answer_checked == self.selected_answer_index.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Pantalla completa activa y quiz sin terminar: se muestra la pregunta.
    InProgress,
    /// Sin pantalla completa: la pregunta existe pero la vista no la enseña.
    Suspended,
    Finished,
}
