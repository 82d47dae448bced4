use services::{ApiError, QuizFlowError};
use quiz_core::model::QuizSessionError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// Message reported by the quiz service, shown verbatim.
    Service(String),
    EmptyQuiz,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_flow(err: QuizFlowError) -> Self {
        match err {
            QuizFlowError::Api(ApiError::Service { message }) => Self::Service(message),
            QuizFlowError::Session(QuizSessionError::Empty) => Self::EmptyQuiz,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Service(message) => message,
            Self::EmptyQuiz => "No questions could be generated from this document.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}
