use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecapError {
    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Summarization model error: {0}")]
    ModelError(String),

    #[error("Failed to render PDF: {0}")]
    PdfError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for RecapError {
    fn from(error: reqwest::Error) -> Self {
        RecapError::HttpError(error.to_string())
    }
}

impl From<printpdf::Error> for RecapError {
    fn from(error: printpdf::Error) -> Self {
        RecapError::PdfError(error.to_string())
    }
}

impl From<anyhow::Error> for RecapError {
    fn from(error: anyhow::Error) -> Self {
        RecapError::ModelError(error.to_string())
    }
}
