use serde::{Deserialize, Serialize};

use crate::model::QuestionId;

/// Difficulty label attached to every generated question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Display text, identical to the wire form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Key selecting the badge style (`difficulty-{key}`).
    #[must_use]
    pub fn style_key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// A question received from the quiz service, immutable once loaded.
///
/// The service ships two batches (`mcq_questions`, `tf_questions`) whose
/// entries are discriminated by a `type` field. Extra fields such as the
/// leaked `correct_answer` are ignored; grading always goes through the
/// service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Question {
    /// One correct option among several.
    #[serde(rename = "mcq")]
    MultipleChoice {
        id: QuestionId,
        question: String,
        options: Vec<String>,
        difficulty: Difficulty,
    },
    /// Binary-answer statement.
    #[serde(rename = "true_false")]
    TrueFalse {
        id: QuestionId,
        statement: String,
        difficulty: Difficulty,
    },
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        match self {
            Self::MultipleChoice { id, .. } | Self::TrueFalse { id, .. } => id,
        }
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        match self {
            Self::MultipleChoice { difficulty, .. } | Self::TrueFalse { difficulty, .. } => {
                *difficulty
            }
        }
    }

    /// Text shown in the question header.
    #[must_use]
    pub fn prompt(&self) -> &str {
        match self {
            Self::MultipleChoice { question, .. } => question,
            Self::TrueFalse { statement, .. } => statement,
        }
    }

    #[must_use]
    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, Self::MultipleChoice { .. })
    }
}

/// Letter shown next to the option at `index` (A = 0, B = 1, ...).
#[must_use]
pub fn option_letter(index: usize) -> char {
    u32::try_from(index)
        .ok()
        .and_then(|offset| char::from_u32('A' as u32 + offset))
        .unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mcq_and_ignores_leaked_answer() {
        let raw = r#"{
            "id": "mcq_0",
            "question": "What is Rust?",
            "options": ["A language", "A fungus"],
            "correct_answer": 0,
            "difficulty": "Easy",
            "type": "mcq"
        }"#;
        let question: Question = serde_json::from_str(raw).unwrap();

        assert!(question.is_multiple_choice());
        assert_eq!(question.prompt(), "What is Rust?");
        assert_eq!(question.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn deserializes_true_false() {
        let raw = r#"{
            "id": "tf_0",
            "statement": "Rust has a garbage collector.",
            "correct_answer": false,
            "difficulty": "Hard",
            "type": "true_false"
        }"#;
        let question: Question = serde_json::from_str(raw).unwrap();

        assert!(!question.is_multiple_choice());
        assert_eq!(question.prompt(), "Rust has a garbage collector.");
        assert_eq!(question.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn option_letters_follow_position() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(1), 'B');
        assert_eq!(option_letter(3), 'D');
        assert_eq!(option_letter(25), 'Z');
    }

    #[test]
    fn difficulty_style_keys_are_lowercase_labels() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(difficulty.style_key(), difficulty.label().to_lowercase());
        }
    }
}
