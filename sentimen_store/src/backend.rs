use std::sync::{Mutex, PoisonError};

use crate::errors::{Result, StoreError};
use crate::record::{FeedbackRecord, PredictionRecord};

/// Storage of predictions and feedback.
pub trait StorageBackend: Send + Sync {
    /// Returns a human-readable name of the backend.
    fn name(&self) -> &str;

    /// Returns `true` if the backend can accept records now.
    fn is_available(&self) -> bool;

    fn save_prediction(&self, record: &PredictionRecord) -> Result<()>;

    fn save_feedback(&self, record: &FeedbackRecord) -> Result<()>;

    /// Returns up to `limit` predictions, newest first.
    fn history(&self, limit: usize) -> Result<Vec<PredictionRecord>>;

    /// Returns every feedback record in insertion order.
    fn feedback(&self) -> Result<Vec<FeedbackRecord>>;
}

/// Returns the last `limit` items in reverse order.
pub(crate) fn newest_first<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    let start = items.len().saturating_sub(limit);
    items.drain(..start);
    items.reverse();
    items
}

/// Backend keeping records in process memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    available: bool,
    predictions: Mutex<Vec<PredictionRecord>>,
    feedback: Mutex<Vec<FeedbackRecord>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            available: true,
            ..Self::default()
        }
    }

    /// Creates a backend that refuses every operation.
    pub fn unavailable() -> Self {
        Self::default()
    }

    fn check(&self) -> Result<()> {
        if self.available {
            Ok(())
        } else {
            Err(StoreError::unavailable(self.name()))
        }
    }
}

impl StorageBackend for MemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn save_prediction(&self, record: &PredictionRecord) -> Result<()> {
        self.check()?;
        self.predictions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }

    fn save_feedback(&self, record: &FeedbackRecord) -> Result<()> {
        self.check()?;
        self.feedback
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }

    fn history(&self, limit: usize) -> Result<Vec<PredictionRecord>> {
        self.check()?;
        let predictions = self
            .predictions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Ok(newest_first(predictions, limit))
    }

    fn feedback(&self) -> Result<Vec<FeedbackRecord>> {
        self.check()?;
        Ok(self
            .feedback
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sentimen::Category;

    #[test]
    fn test_newest_first() {
        assert_eq!(vec![5, 4, 3], newest_first(vec![1, 2, 3, 4, 5], 3));
        assert_eq!(vec![2, 1], newest_first(vec![1, 2], 10));
        assert_eq!(Vec::<u8>::new(), newest_first(vec![1, 2], 0));
    }

    #[test]
    fn test_memory_feedback() {
        let s = MemoryStorage::new();
        assert!(s.is_available());
        s.save_feedback(&FeedbackRecord::correct("a", Category::Neutral))
            .unwrap();
        assert_eq!(1, s.feedback().unwrap().len());
        assert!(s.history(10).unwrap().is_empty());
    }

    #[test]
    fn test_memory_unavailable() {
        let s = MemoryStorage::unavailable();
        assert!(!s.is_available());
        let r = s.save_feedback(&FeedbackRecord::correct("a", Category::Neutral));
        assert!(matches!(r, Err(StoreError::Unavailable(_))));
        assert!(s.feedback().is_err());
    }
}
