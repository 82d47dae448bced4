mod answer;
mod ids;
mod question;
mod results;
mod session;
mod upload;

pub use answer::{AnswerFeedback, CorrectAnswer, SelectedAnswer};
pub use ids::{QuestionId, SessionId};
pub use question::{Difficulty, Question, option_letter};
pub use results::{QuizResult, ScoreBand, format_score};
pub use session::{QuizProgress, QuizSession, QuizSessionError, RevealedAnswer};
pub use upload::{DocumentKind, DocumentUpload, MAX_UPLOAD_BYTES, UploadError, check_size};
