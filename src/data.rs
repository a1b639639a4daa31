// src/data.rs

use crate::error::QuestionBankError;
use crate::model::Question;
use std::path::Path;

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Result<Vec<Question>, QuestionBankError> {
    let file_content = include_str!("data/quiz_questions.yaml");
    parse_questions(file_content)
}

/// Carga un banco alternativo desde disco (solo escritorio).
pub fn read_questions_from_path(path: &Path) -> Result<Vec<Question>, QuestionBankError> {
    let file_content = std::fs::read_to_string(path)?;
    parse_questions(&file_content)
}

pub fn parse_questions(yaml: &str) -> Result<Vec<Question>, QuestionBankError> {
    let questions: Vec<Question> = serde_yaml::from_str(yaml)?;
    validate_questions(&questions)?;
    Ok(questions)
}

/// Cada pregunta necesita al menos 2 opciones y la respuesta debe coincidir
/// exactamente con una sola de ellas.
pub fn validate_questions(questions: &[Question]) -> Result<(), QuestionBankError> {
    if questions.is_empty() {
        return Err(QuestionBankError::Empty);
    }
    for (i, q) in questions.iter().enumerate() {
        let number = i + 1;
        if q.options.len() < 2 {
            return Err(QuestionBankError::TooFewOptions {
                number,
                found: q.options.len(),
            });
        }
        let found = q.options.iter().filter(|o| **o == q.answer).count();
        if found != 1 {
            return Err(QuestionBankError::AnswerMismatch { number, found });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bank_is_valid() {
        let questions = read_questions_embedded().expect("banco embebido válido");
        assert_eq!(questions.len(), 10);
        assert_eq!(questions[0].answer, "Paris");
        assert_eq!(questions[0].option(2), Some("Paris"));
    }

    #[test]
    fn rejects_empty_bank() {
        assert!(matches!(parse_questions("[]"), Err(QuestionBankError::Empty)));
    }

    #[test]
    fn rejects_single_option() {
        let yaml = r#"
- question: "¿Solo una?"
  options: ["Sí"]
  answer: "Sí"
"#;
        assert!(matches!(
            parse_questions(yaml),
            Err(QuestionBankError::TooFewOptions { number: 1, found: 1 })
        ));
    }

    #[test]
    fn answer_must_match_exactly_one_option() {
        let missing = r#"
- question: "Capital"
  options: ["paris", "Roma"]
  answer: "Paris"
"#;
        assert!(matches!(
            parse_questions(missing),
            Err(QuestionBankError::AnswerMismatch { number: 1, found: 0 })
        ));

        let duplicated = r#"
- question: "Capital"
  options: ["Paris", "Paris"]
  answer: "Paris"
"#;
        assert!(matches!(
            parse_questions(duplicated),
            Err(QuestionBankError::AnswerMismatch { number: 1, found: 2 })
        ));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        assert!(matches!(
            parse_questions("- question: [sin cerrar"),
            Err(QuestionBankError::Parse(_))
        ));
    }
}
