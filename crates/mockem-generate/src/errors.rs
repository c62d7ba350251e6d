use thiserror::Error;

use crate::model::GenerationReport;

/// Errors emitted by the generation engine and the export writers.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Core(#[from] mockem_core::Error),
    #[error("invalid bundle: {0}")]
    InvalidBundle(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("utf-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("generation failed")]
    Failed(Box<GenerationReport>),
}

impl GenerationError {
    /// True when the error was caused by the caller's input rather than the server.
    pub fn is_validation(&self) -> bool {
        matches!(self, GenerationError::Core(err) if err.is_validation())
    }
}
