use std::ops::Index;

use crate::category::Category;
use crate::preprocessor::PreprocessingTrace;

/// Percentages of each category.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Probabilities([f64; 3]);

impl Probabilities {
    #[inline(always)]
    pub fn get(&self, category: Category) -> f64 {
        self.0[category.index()]
    }

    /// Returns pairs of a category and its percentage in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    pub(crate) fn set(&mut self, category: Category, percentage: f64) {
        self.0[category.index()] = percentage;
    }
}

impl Index<Category> for Probabilities {
    type Output = f64;

    fn index(&self, category: Category) -> &f64 {
        &self.0[category.index()]
    }
}

/// Outcome of one prediction.
///
/// `label` is always the category with the highest percentage, and `confidence` is exactly
/// the percentage of `label`.
#[derive(Clone, Debug)]
pub struct PredictionResult {
    label: Category,
    confidence: f64,
    probabilities: Probabilities,
    preprocessing_steps: PreprocessingTrace,
}

impl PredictionResult {
    pub(crate) fn new(
        label: Category,
        probabilities: Probabilities,
        preprocessing_steps: PreprocessingTrace,
    ) -> Self {
        Self {
            label,
            confidence: probabilities.get(label),
            probabilities,
            preprocessing_steps,
        }
    }

    pub fn label(&self) -> Category {
        self.label
    }

    /// Returns the percentage of the predicted label in `[0, 100]`.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn probabilities(&self) -> &Probabilities {
        &self.probabilities
    }

    /// Returns the preprocessed text. It may be empty.
    pub fn cleaned_text(&self) -> &str {
        self.preprocessing_steps.final_text()
    }

    pub fn preprocessing_steps(&self) -> &PreprocessingTrace {
        &self.preprocessing_steps
    }
}
