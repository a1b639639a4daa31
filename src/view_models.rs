// src/view_models.rs

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRow {
    pub idx: usize,
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCard {
    pub number: usize, // número "humano" (1,2,3…)
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionRow>,
    pub time_remaining_secs: u32,
    pub can_advance: bool,
    pub is_last: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsCard {
    pub score: u32,
    pub total: usize,
    pub correct_answers: u32,
    pub wrong_answers: u32,
}

impl QuestionCard {
    pub fn header(&self) -> String {
        format!("Question: {}/{}", self.number, self.total)
    }

    pub fn clock(&self) -> String {
        format!("Time Remaining: {}", format_clock(self.time_remaining_secs))
    }

    pub fn advance_label(&self) -> &'static str {
        if self.is_last {
            "Finish"
        } else {
            "Next Question →"
        }
    }
}

impl ResultsCard {
    pub fn headline(&self) -> String {
        format!("You scored {} out of {}", self.score, self.total)
    }
}

/// Segundos a `m:ss`.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn toggle_label(fullscreen: bool) -> &'static str {
    if fullscreen { "Exit Quiz" } else { "Enter Quiz" }
}
