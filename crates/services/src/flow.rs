use std::path::Path;
use std::sync::Arc;

use quiz_core::model::{
    DocumentKind, DocumentUpload, QuizResult, QuizSession, QuizSessionError, RevealedAnswer,
    UploadError, check_size,
};

use crate::client::{QuizApi, QuizSource};
use crate::error::{DocumentLoadError, QuizFlowError};

/// A freshly generated quiz, ready to play.
#[derive(Clone, Debug)]
pub struct StartedQuiz {
    pub session: QuizSession,
    pub source: QuizSource,
}

/// Orchestrates the quiz lifecycle against the remote service.
///
/// Thin by construction: the session state machine lives in `quiz-core` and
/// grading/scoring live in the service. Each operation awaits exactly one
/// request; a failure surfaces as an error and leaves the session unchanged,
/// so every retry is user-initiated.
#[derive(Clone)]
pub struct QuizFlowService {
    api: Arc<dyn QuizApi>,
}

impl QuizFlowService {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>) -> Self {
        Self { api }
    }

    /// Read a document from disk and run the client-side upload checks.
    ///
    /// The declared MIME type is resolved from the file extension, and the
    /// size ceiling is checked against filesystem metadata before the content
    /// is read. Local rejections never touch the network.
    ///
    /// # Errors
    ///
    /// Returns `DocumentLoadError::Invalid` for unsupported or oversized
    /// files and `DocumentLoadError::Io` when the file cannot be read.
    pub async fn load_document(&self, path: &Path) -> Result<DocumentUpload, DocumentLoadError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or(DocumentLoadError::MissingFileName)?
            .to_string();
        let kind = path
            .extension()
            .and_then(|extension| extension.to_str())
            .and_then(DocumentKind::from_extension)
            .ok_or(UploadError::UnsupportedType)?;

        let metadata = tokio::fs::metadata(path).await?;
        check_size(metadata.len())?;

        let bytes = tokio::fs::read(path).await?;
        Ok(DocumentUpload::new(file_name, kind.mime(), bytes)?)
    }

    /// Upload a validated document and build the playable quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Api` for service or transport failures and
    /// `QuizFlowError::Session` when the generated quiz is empty.
    pub async fn start_quiz(&self, upload: &DocumentUpload) -> Result<StartedQuiz, QuizFlowError> {
        let payload = self.api.upload_file(upload).await?;
        let session = QuizSession::new(
            payload.session_id,
            payload.mcq_questions,
            payload.tf_questions,
        )?;

        Ok(StartedQuiz {
            session,
            source: QuizSource {
                filename: payload.filename,
                analysis_method: payload.analysis_method,
                warning: payload.warning,
            },
        })
    }

    /// Submit the selected answer for the current question and apply the
    /// grading to the session.
    ///
    /// Without a selection this is a no-op error: no request is sent. On any
    /// failure the session is unchanged and the user can submit again.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Session` for state violations (no selection,
    /// already revealed) and `QuizFlowError::Api` for request failures.
    pub async fn submit_current(
        &self,
        session: &mut QuizSession,
    ) -> Result<RevealedAnswer, QuizFlowError> {
        if session.is_revealed() {
            return Err(QuizSessionError::AlreadyRevealed.into());
        }
        let selected = session
            .selected()
            .ok_or(QuizSessionError::NoSelection)?;
        let question_id = session.current_question().id().clone();
        let answer = selected.wire_value();

        let feedback = self
            .api
            .submit_answer(session.id(), &question_id, &answer)
            .await?;
        Ok(session.reveal(feedback)?.clone())
    }

    /// Fetch the aggregate results for the session.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Api` on failure; the session is untouched, so
    /// the caller stays on the last answered question and can retry.
    pub async fn fetch_results(&self, session: &QuizSession) -> Result<QuizResult, QuizFlowError> {
        Ok(self.api.get_results(session.id()).await?)
    }
}
