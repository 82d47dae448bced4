use serde::Deserialize;

/// Aggregate score for a finished quiz, computed by the service.
///
/// Fetched once at quiz end and rendered as-is; the client never recomputes
/// or reconciles it against individual answer feedback.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct QuizResult {
    pub score_percentage: f64,
    pub correct_answers: u32,
    pub total_questions: u32,
}

impl QuizResult {
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_percentage(self.score_percentage)
    }
}

/// Named tier derived from the percentage correct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Excellent
        } else if percentage >= 70.0 {
            Self::Good
        } else if percentage >= 50.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Headline shown on the results view.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::Good => "Good Job!",
            Self::Fair => "Fair",
            Self::Poor => "Keep Trying!",
        }
    }

    /// Key selecting the score-circle style (`score-{key}`).
    #[must_use]
    pub fn style_key(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

/// Render a score percentage the way the service reports it: whole numbers
/// without a decimal point, fractional scores with one decimal.
#[must_use]
pub fn format_score(percentage: f64) -> String {
    if percentage.fract() == 0.0 {
        format!("{percentage:.0}")
    } else {
        format!("{percentage:.1}")
    }
}
