//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuizSessionError, UploadError};

/// Errors from talking to the quiz service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Non-2xx response carrying a JSON `{error}` body; shown verbatim.
    #[error("{message}")]
    Service { message: String },

    /// Non-2xx response without a usable error body.
    #[error("quiz service request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors while loading a document from disk for upload.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentLoadError {
    #[error("file has no usable name")]
    MissingFileName,

    #[error(transparent)]
    Invalid(#[from] UploadError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors emitted by `QuizFlowService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizFlowError {
    #[error(transparent)]
    Session(#[from] QuizSessionError),

    #[error(transparent)]
    Api(#[from] ApiError),
}
