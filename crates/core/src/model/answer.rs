use serde::{Deserialize, Serialize};

/// The user's in-progress pick for the current question.
///
/// At most one exists per question; re-selecting replaces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectedAnswer {
    /// Option index of a multiple-choice pick.
    Choice(usize),
    /// True/False pick.
    Truth(bool),
}

impl SelectedAnswer {
    /// String encoding the grading endpoint expects (`"1"`, `"true"`).
    #[must_use]
    pub fn wire_value(self) -> String {
        match self {
            Self::Choice(index) => index.to_string(),
            Self::Truth(value) => value.to_string(),
        }
    }
}

/// Correct answer as reported by the grading endpoint: an option index for
/// multiple choice, a boolean for True/False.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
    Choice(usize),
    Truth(bool),
}

/// Grading outcome for one submitted answer.
///
/// `correct_answer` is absent when the service could not match the question.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    #[serde(default)]
    pub correct_answer: Option<CorrectAnswer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_match_service_expectations() {
        assert_eq!(SelectedAnswer::Choice(1).wire_value(), "1");
        assert_eq!(SelectedAnswer::Truth(true).wire_value(), "true");
        assert_eq!(SelectedAnswer::Truth(false).wire_value(), "false");
    }

    #[test]
    fn correct_answer_decodes_index_and_boolean() {
        let index: CorrectAnswer = serde_json::from_str("2").unwrap();
        assert_eq!(index, CorrectAnswer::Choice(2));

        let truth: CorrectAnswer = serde_json::from_str("true").unwrap();
        assert_eq!(truth, CorrectAnswer::Truth(true));
    }

    #[test]
    fn feedback_tolerates_missing_correct_answer() {
        let feedback: AnswerFeedback =
            serde_json::from_str(r#"{"is_correct": false, "correct_answer": null}"#).unwrap();
        assert!(!feedback.is_correct);
        assert_eq!(feedback.correct_answer, None);
    }
}
