pub mod json;
pub mod md;
pub mod text;

use crate::error::QuizError;
use crate::types::result::Assessment;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Text,
}

pub fn render(assessment: &Assessment, format: OutputFormat) -> Result<String, QuizError> {
    match format {
        OutputFormat::Json => json::to_json(assessment).map_err(QuizError::Json),
        OutputFormat::Md => Ok(md::to_markdown(assessment)),
        OutputFormat::Text => Ok(text::to_text(assessment)),
    }
}
