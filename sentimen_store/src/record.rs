use serde::{Deserialize, Serialize};

use sentimen::{Category, PredictionResult};

/// Format of the timestamps stored in records.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns the current local time formatted with [`TIMESTAMP_FORMAT`].
pub fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

fn round2(x: f64) -> f64 {
    (x * 100.).round() / 100.
}

/// One line of the prediction history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub timestamp: String,
    pub original_text: String,
    pub cleaned_text: String,
    pub predicted_label: Category,
    pub confidence: f64,
    pub prob_negative: f64,
    pub prob_neutral: f64,
    pub prob_positive: f64,
}

impl PredictionRecord {
    /// Creates a record stamped with the current time. Percentages are rounded to two
    /// decimals.
    pub fn new(original_text: &str, result: &PredictionResult) -> Self {
        let probabilities = result.probabilities();
        Self {
            timestamp: timestamp(),
            original_text: original_text.to_string(),
            cleaned_text: result.cleaned_text().to_string(),
            predicted_label: result.label(),
            confidence: round2(result.confidence()),
            prob_negative: round2(probabilities.get(Category::Negative)),
            prob_neutral: round2(probabilities.get(Category::Neutral)),
            prob_positive: round2(probabilities.get(Category::Positive)),
        }
    }
}

/// User judgement of one prediction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub timestamp: String,
    pub original_text: String,
    pub predicted_label: Category,
    pub is_correct: bool,
    pub correct_label: Option<Category>,
    pub comment: String,
}

impl FeedbackRecord {
    /// Creates feedback accepting the prediction.
    pub fn correct(original_text: &str, predicted_label: Category) -> Self {
        Self {
            timestamp: timestamp(),
            original_text: original_text.to_string(),
            predicted_label,
            is_correct: true,
            correct_label: None,
            comment: String::new(),
        }
    }

    /// Creates feedback rejecting the prediction.
    ///
    /// # Arguments
    ///
    /// * `original_text` - Analyzed text.
    /// * `predicted_label` - Label returned by the predictor.
    /// * `correct_label` - Label the user expected, if given.
    pub fn incorrect(
        original_text: &str,
        predicted_label: Category,
        correct_label: Option<Category>,
    ) -> Self {
        Self {
            is_correct: false,
            correct_label,
            ..Self::correct(original_text, predicted_label)
        }
    }

    /// Attaches a free-form comment.
    pub fn comment<S>(mut self, comment: S) -> Self
    where
        S: Into<String>,
    {
        self.comment = comment.into();
        self
    }
}

/// Summary of the stored feedback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FeedbackStats {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    /// Share of correct predictions in percent, rounded to two decimals. 0 when no feedback
    /// exists.
    pub accuracy: f64,
}

impl FeedbackStats {
    pub fn from_records(records: &[FeedbackRecord]) -> Self {
        let total = records.len();
        let correct = records.iter().filter(|r| r.is_correct).count();
        let accuracy = if total == 0 {
            0.
        } else {
            round2(correct as f64 / total as f64 * 100.)
        };
        Self {
            total,
            correct,
            incorrect: total - correct,
            accuracy,
        }
    }
}
