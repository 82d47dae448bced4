#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod flow;

pub use client::{HttpQuizApi, QuizApi, QuizApiConfig, QuizPayload, QuizSource};
pub use error::{ApiError, DocumentLoadError, QuizFlowError};
pub use flow::{QuizFlowService, StartedQuiz};
