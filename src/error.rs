//! Error handling for the transcript ranker application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranscriptRankerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, TranscriptRankerError>;
