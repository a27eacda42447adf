use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::errors::{Result, SentimenError};

/// Shape of a trained classifier.
///
/// A model file carries the configuration it was trained with, so retrained models with other
/// shapes work without code changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub(crate) vocab_size: usize,
    pub(crate) max_length: usize,
    pub(crate) n_classes: usize,
    pub(crate) labels: Vec<Category>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocab_size: 15000,
            max_length: 60,
            n_classes: 3,
            labels: Category::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Sets the vocabulary size. Words with an id equal to or larger than this value are
    /// treated as unknown.
    pub fn vocab_size(mut self, size: usize) -> Self {
        self.vocab_size = size;
        self
    }

    /// Sets the length of encoded sequences.
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = length;
        self
    }

    /// Sets the output layout of the classifier.
    ///
    /// # Arguments
    ///
    /// * `labels` - The category of each output index.
    pub fn labels(mut self, labels: Vec<Category>) -> Self {
        self.n_classes = labels.len();
        self.labels = labels;
        self
    }

    pub fn get_vocab_size(&self) -> usize {
        self.vocab_size
    }

    pub fn get_max_length(&self) -> usize {
        self.max_length
    }

    pub fn get_n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn get_labels(&self) -> &[Category] {
        &self.labels
    }

    /// Checks the consistency of the configuration.
    ///
    /// # Errors
    ///
    /// [`SentimenError::InvalidArgument`] is returned when
    ///   - `vocab_size`, `max_length`, or the number of labels is zero,
    ///   - the number of labels differs from `n_classes`, or
    ///   - a category is assigned to more than one output index.
    pub fn validate(&self) -> Result<()> {
        if self.vocab_size == 0 {
            return Err(SentimenError::invalid_argument(
                "vocab_size",
                "must be at least 1",
            ));
        }
        if self.max_length == 0 {
            return Err(SentimenError::invalid_argument(
                "max_length",
                "must be at least 1",
            ));
        }
        if self.n_classes == 0 {
            return Err(SentimenError::invalid_argument(
                "labels",
                "at least one class is required",
            ));
        }
        if self.labels.len() != self.n_classes {
            return Err(SentimenError::invalid_argument(
                "labels",
                format!(
                    "{} labels are given for {} classes",
                    self.labels.len(),
                    self.n_classes
                ),
            ));
        }
        for (i, label) in self.labels.iter().enumerate() {
            if self.labels[..i].contains(label) {
                return Err(SentimenError::invalid_argument(
                    "labels",
                    format!("{} is assigned twice", label),
                ));
            }
        }
        Ok(())
    }
}
