use std::env;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use quiz_core::model::{
    AnswerFeedback, DocumentUpload, Question, QuestionId, QuizResult, SessionId,
};

use crate::error::ApiError;

/// Connection settings for the quiz service.
#[derive(Clone, Debug)]
pub struct QuizApiConfig {
    pub base_url: String,
}

impl QuizApiConfig {
    /// The service's default development address.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:5000";

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("QUIZDESK_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.into());
        Self { base_url }
    }
}

/// Everything the upload endpoint returns for a freshly generated quiz.
#[derive(Clone, Debug, Deserialize)]
pub struct QuizPayload {
    pub session_id: SessionId,
    #[serde(default)]
    pub mcq_questions: Vec<Question>,
    #[serde(default)]
    pub tf_questions: Vec<Question>,
    pub total_questions: u32,
    pub filename: String,
    pub analysis_method: String,
    #[serde(default)]
    pub warning: Option<String>,
}

/// Provenance of a generated quiz, shown in the upload status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSource {
    pub filename: String,
    pub analysis_method: String,
    pub warning: Option<String>,
}

/// Client-side contract of the quiz service.
///
/// Three fire-and-await endpoints, each a single request: no retry, no
/// timeout override, no cancellation. A trait so tests can stand in for the
/// remote service.
#[async_trait]
pub trait QuizApi: Send + Sync {
    /// Upload a validated document and receive the generated quiz.
    async fn upload_file(&self, upload: &DocumentUpload) -> Result<QuizPayload, ApiError>;

    /// Grade one answer against the server-held session.
    async fn submit_answer(
        &self,
        session_id: &SessionId,
        question_id: &QuestionId,
        answer: &str,
    ) -> Result<AnswerFeedback, ApiError>;

    /// Fetch the aggregate score for the session.
    async fn get_results(&self, session_id: &SessionId) -> Result<QuizResult, ApiError>;
}

/// `QuizApi` over HTTP, the real service transport.
#[derive(Clone)]
pub struct HttpQuizApi {
    client: Client,
    config: QuizApiConfig,
}

impl HttpQuizApi {
    #[must_use]
    pub fn new(config: QuizApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct SubmitAnswerRequest<'a> {
    session_id: &'a SessionId,
    question_id: &'a QuestionId,
    answer: &'a str,
}

#[derive(Debug, Serialize)]
struct ResultsRequest<'a> {
    session_id: &'a SessionId,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

async fn decode<T>(response: reqwest::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    // Service failures carry a JSON `{error}` body; surface it verbatim.
    match response.json::<ErrorBody>().await {
        Ok(body) => Err(ApiError::Service {
            message: body.error,
        }),
        Err(_) => Err(ApiError::HttpStatus(status)),
    }
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn upload_file(&self, upload: &DocumentUpload) -> Result<QuizPayload, ApiError> {
        let part = Part::bytes(upload.bytes().to_vec())
            .file_name(upload.file_name().to_string())
            .mime_str(upload.mime())?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint("upload_file"))
            .multipart(form)
            .send()
            .await?;
        decode(response).await
    }

    async fn submit_answer(
        &self,
        session_id: &SessionId,
        question_id: &QuestionId,
        answer: &str,
    ) -> Result<AnswerFeedback, ApiError> {
        let response = self
            .client
            .post(self.endpoint("submit_answer"))
            .json(&SubmitAnswerRequest {
                session_id,
                question_id,
                answer,
            })
            .send()
            .await?;
        decode(response).await
    }

    async fn get_results(&self, session_id: &SessionId) -> Result<QuizResult, ApiError> {
        let response = self
            .client
            .post(self.endpoint("get_results"))
            .json(&ResultsRequest { session_id })
            .send()
            .await?;
        decode(response).await
    }
}
