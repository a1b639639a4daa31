//! Configuración: valores por defecto sobrescritos por variables de entorno.

use crate::store::DEFAULT_STORAGE_KEY;
use std::path::PathBuf;

pub const STORAGE_KEY_VAR: &str = "FOCUS_QUIZ_STORAGE_KEY";
pub const PROGRESS_DIR_VAR: &str = "FOCUS_QUIZ_PROGRESS_DIR";
pub const QUESTIONS_VAR: &str = "FOCUS_QUIZ_QUESTIONS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// Clave del hueco donde vive el snapshot.
    pub storage_key: String,
    /// Directorio del fichero de progreso (solo escritorio).
    pub progress_dir: PathBuf,
    /// Banco de preguntas alternativo; sin él se usa el embebido.
    pub questions_path: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            progress_dir: PathBuf::from("."),
            questions_path: None,
        }
    }
}

impl QuizConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).and_then(|v| normalize(&v));

        let storage_key = var(STORAGE_KEY_VAR)
            .or_else(|| option_env!("FOCUS_QUIZ_STORAGE_KEY").and_then(normalize))
            .unwrap_or(defaults.storage_key);

        Self {
            storage_key,
            progress_dir: var(PROGRESS_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.progress_dir),
            questions_path: var(QUESTIONS_VAR).map(PathBuf::from),
        }
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> QuizConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        QuizConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]);
        assert_eq!(config.progress_dir, PathBuf::from("."));
        assert_eq!(config.questions_path, None);
        assert!(!config.storage_key.is_empty());
    }

    #[test]
    fn variables_override_defaults() {
        let config = config_from(&[
            (STORAGE_KEY_VAR, "examen"),
            (PROGRESS_DIR_VAR, "/tmp/quiz"),
            (QUESTIONS_VAR, "preguntas.yaml"),
        ]);
        assert_eq!(config.storage_key, "examen");
        assert_eq!(config.progress_dir, PathBuf::from("/tmp/quiz"));
        assert_eq!(config.questions_path, Some(PathBuf::from("preguntas.yaml")));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = config_from(&[(PROGRESS_DIR_VAR, "   "), (QUESTIONS_VAR, "")]);
        assert_eq!(config.progress_dir, PathBuf::from("."));
        assert_eq!(config.questions_path, None);
    }
}
