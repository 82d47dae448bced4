use quiz_core::model::{
    CorrectAnswer, Question, QuizProgress, QuizResult, QuizSession, SelectedAnswer, option_letter,
};
use services::{QuizFlowService, QuizSource, StartedQuiz};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(SelectedAnswer),
    Submit,
    Next,
    Finish,
    Restart,
    NewQuiz,
}

/// Inline feedback shown under the options once an answer is graded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub headline: &'static str,
    /// Present only for a wrong answer whose correction is known.
    pub correct_line: Option<String>,
}

/// Presentation state for one quiz run.
///
/// Wraps the session state machine and maps it to classes and labels the
/// view renders directly. Invalid clicks (a locked option, a premature
/// advance) are swallowed here so buttons never need to guard themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    session: QuizSession,
    source: QuizSource,
}

impl QuizVm {
    #[must_use]
    pub fn new(started: StartedQuiz) -> Self {
        Self {
            session: started.session,
            source: started.source,
        }
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        self.session.current_question()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        self.session.progress()
    }

    #[must_use]
    pub fn source(&self) -> &QuizSource {
        &self.source
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.session.is_revealed()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.session.is_last()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.session.selected().is_some() && !self.session.is_revealed()
    }

    pub fn select(&mut self, answer: SelectedAnswer) {
        // Clicks on a locked question are no-ops.
        let _ = self.session.select(answer);
    }

    pub fn advance(&mut self) {
        let _ = self.session.advance();
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    /// Submit the current selection for grading.
    ///
    /// # Errors
    ///
    /// Returns the mapped flow error; the question stays answerable.
    pub async fn submit(&mut self, flow: &QuizFlowService) -> Result<(), ViewError> {
        flow.submit_current(&mut self.session)
            .await
            .map(|_| ())
            .map_err(ViewError::from_flow)
    }

    /// Fetch the final score from the service.
    ///
    /// # Errors
    ///
    /// Returns the mapped flow error; the caller stays on the last question.
    pub async fn finish(&self, flow: &QuizFlowService) -> Result<QuizResult, ViewError> {
        flow.fetch_results(&self.session)
            .await
            .map_err(ViewError::from_flow)
    }

    /// Display label for the option at `index` ("A) Berlin").
    #[must_use]
    pub fn option_label(&self, index: usize, text: &str) -> String {
        format!("{}) {text}", option_letter(index))
    }

    /// Classes for a multiple-choice option button.
    ///
    /// Before grading the picked option carries `selected`; after grading the
    /// correct option carries `correct` and a wrong pick `incorrect`.
    #[must_use]
    pub fn option_class(&self, index: usize) -> String {
        let mut class = String::from("option-button");
        let picked = self.session.selected() == Some(SelectedAnswer::Choice(index));
        if picked {
            class.push_str(" selected");
        }
        if let Some(revealed) = self.session.revealed() {
            if revealed.feedback.correct_answer == Some(CorrectAnswer::Choice(index)) {
                class.push_str(" correct");
            } else if picked && !revealed.feedback.is_correct {
                class.push_str(" incorrect");
            }
        }
        class
    }

    /// Classes for a True/False button, same marking scheme as options.
    #[must_use]
    pub fn tf_class(&self, value: bool) -> String {
        let mut class = String::from("tf-button");
        let picked = self.session.selected() == Some(SelectedAnswer::Truth(value));
        if picked {
            class.push_str(" selected");
        }
        if let Some(revealed) = self.session.revealed() {
            if revealed.feedback.correct_answer == Some(CorrectAnswer::Truth(value)) {
                class.push_str(" correct");
            } else if picked && !revealed.feedback.is_correct {
                class.push_str(" incorrect");
            }
        }
        class
    }

    /// Feedback block for the graded question, if any.
    #[must_use]
    pub fn feedback(&self) -> Option<FeedbackVm> {
        let revealed = self.session.revealed()?;
        let is_correct = revealed.feedback.is_correct;
        let headline = if is_correct {
            "✅ Correct!"
        } else {
            "❌ Incorrect!"
        };

        let correct_line = if is_correct {
            None
        } else {
            match revealed.feedback.correct_answer {
                Some(CorrectAnswer::Choice(index)) => match self.question() {
                    Question::MultipleChoice { options, .. } => options.get(index).map(|text| {
                        format!("Correct answer: {}) {text}", option_letter(index))
                    }),
                    Question::TrueFalse { .. } => None,
                },
                Some(CorrectAnswer::Truth(value)) => Some(format!(
                    "Correct answer: {}",
                    if value { "True" } else { "False" }
                )),
                None => None,
            }
        };

        Some(FeedbackVm {
            is_correct,
            headline,
            correct_line,
        })
    }
}
