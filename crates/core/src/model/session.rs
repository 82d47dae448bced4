use thiserror::Error;

use crate::model::{AnswerFeedback, Question, SelectedAnswer, SessionId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSessionError {
    #[error("quiz has no questions")]
    Empty,

    #[error("no answer selected")]
    NoSelection,

    #[error("answer already revealed for this question")]
    AlreadyRevealed,

    #[error("answer not revealed yet")]
    NotRevealed,

    #[error("selected answer does not fit the question")]
    WrongKind,

    #[error("already at the last question")]
    AtLastQuestion,
}

/// Grading outcome kept alongside the pick that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealedAnswer {
    pub selected: SelectedAnswer,
    pub feedback: AnswerFeedback,
}

/// Progress through the quiz, a pure function of (current index, total).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based number of the question on screen.
    pub number: usize,
    pub total: usize,
}

impl QuizProgress {
    #[must_use]
    pub fn label(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }

    /// Fill width of the progress bar, in percent.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.number as f64 / self.total as f64 * 100.0
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz run against one uploaded document.
///
/// Steps through a fixed question list one question at a time: select an
/// answer, reveal the service's grading, advance. The remote service is the
/// source of truth for grading and the final score; this type only guards
/// the client-side transitions.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizSession {
    id: SessionId,
    questions: Vec<Question>,
    current: usize,
    selected: Option<SelectedAnswer>,
    revealed: Option<RevealedAnswer>,
}

impl QuizSession {
    /// Build a session from the two question batches of an upload response.
    ///
    /// The order is fixed at construction: the MCQ batch first, then the
    /// True/False batch, never reordered afterwards.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::Empty` if both batches are empty, so the
    /// current-index invariant holds unconditionally.
    pub fn new(
        id: SessionId,
        mcq: Vec<Question>,
        tf: Vec<Question>,
    ) -> Result<Self, QuizSessionError> {
        let mut questions = mcq;
        questions.extend(tf);

        if questions.is_empty() {
            return Err(QuizSessionError::Empty);
        }

        Ok(Self {
            id,
            questions,
            current: 0,
            selected: None,
            revealed: None,
        })
    }

    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The question on screen. `current` never leaves `[0, total)`.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn selected(&self) -> Option<SelectedAnswer> {
        self.selected
    }

    #[must_use]
    pub fn revealed(&self) -> Option<&RevealedAnswer> {
        self.revealed.as_ref()
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed.is_some()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            number: self.current + 1,
            total: self.questions.len(),
        }
    }

    /// Record the user's pick for the current question; last click wins.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyRevealed` once the question is graded and locked, and
    /// `WrongKind` when the pick's variant does not fit the question (a
    /// True/False pick on an MCQ, or an option index past the options).
    pub fn select(&mut self, answer: SelectedAnswer) -> Result<(), QuizSessionError> {
        if self.revealed.is_some() {
            return Err(QuizSessionError::AlreadyRevealed);
        }

        let fits = match (self.current_question(), answer) {
            (Question::MultipleChoice { options, .. }, SelectedAnswer::Choice(index)) => {
                index < options.len()
            }
            (Question::TrueFalse { .. }, SelectedAnswer::Truth(_)) => true,
            _ => false,
        };
        if !fits {
            return Err(QuizSessionError::WrongKind);
        }

        self.selected = Some(answer);
        Ok(())
    }

    /// Apply the service's grading, locking the question against further
    /// selection and re-submission.
    ///
    /// # Errors
    ///
    /// Returns `NoSelection` without a recorded pick and `AlreadyRevealed`
    /// on a second reveal.
    pub fn reveal(
        &mut self,
        feedback: AnswerFeedback,
    ) -> Result<&RevealedAnswer, QuizSessionError> {
        if self.revealed.is_some() {
            return Err(QuizSessionError::AlreadyRevealed);
        }
        let selected = self.selected.ok_or(QuizSessionError::NoSelection)?;

        self.revealed = Some(RevealedAnswer { selected, feedback });
        self.revealed.as_ref().ok_or(QuizSessionError::NoSelection)
    }

    /// Move to the next question, clearing selection and reveal.
    ///
    /// # Errors
    ///
    /// Returns `NotRevealed` before the current question is graded and
    /// `AtLastQuestion` when there is nothing left; the caller offers
    /// "finish" instead.
    pub fn advance(&mut self) -> Result<(), QuizSessionError> {
        if self.revealed.is_none() {
            return Err(QuizSessionError::NotRevealed);
        }
        if self.is_last() {
            return Err(QuizSessionError::AtLastQuestion);
        }

        self.current += 1;
        self.selected = None;
        self.revealed = None;
        Ok(())
    }

    /// Replay the same question list from the start.
    ///
    /// Keeps the question data and session token; only the position and any
    /// answer-revealed state are discarded. No service round-trip.
    pub fn restart(&mut self) {
        self.current = 0;
        self.selected = None;
        self.revealed = None;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
