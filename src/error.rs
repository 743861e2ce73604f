use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("answers file not found: {0}")]
    AnswersNotFound(String),

    #[error("answers parse error: {0}")]
    AnswersParse(String),

    #[error("unsupported answers format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("rating out of range for {dimension} question {ordinal}: {value} (expected 1-5)")]
    RatingOutOfRange {
        dimension: &'static str,
        ordinal: usize,
        value: u8,
    },

    #[error("hours_per_week must be non-negative, got {0}")]
    NegativeHours(f32),

    #[error("data directory not found: {0}")]
    DataDirNotFound(String),

    #[error("refusing to overwrite existing file: {0}")]
    FileExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl QuizError {
    /// True for errors caused by malformed user input rather than
    /// environment or runtime failures.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            QuizError::AnswersParse(_)
                | QuizError::UnsupportedFormat(_)
                | QuizError::RatingOutOfRange { .. }
                | QuizError::NegativeHours(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
