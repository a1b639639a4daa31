use thiserror::Error;

/// Intenciones que la máquina de estados rechaza.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("el quiz ha terminado; reinícialo para volver a jugar")]
    Finished,
    #[error("selecciona una respuesta antes de avanzar")]
    NoAnswerSelected,
    #[error("la opción {index} no existe (hay {available})")]
    UnknownOption { index: usize, available: usize },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("error de E/S en el almacenamiento: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot no serializable: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("almacenamiento del navegador no disponible: {0}")]
    Browser(String),
}

#[derive(Debug, Error)]
pub enum QuestionBankError {
    #[error("no se pudo parsear el banco de preguntas YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("no se pudo leer el banco de preguntas: {0}")]
    Io(#[from] std::io::Error),
    #[error("el banco de preguntas está vacío")]
    Empty,
    #[error("la pregunta {number} tiene {found} opciones (mínimo 2)")]
    TooFewOptions { number: usize, found: usize },
    #[error("la respuesta de la pregunta {number} aparece {found} veces entre las opciones")]
    AnswerMismatch { number: usize, found: usize },
}
