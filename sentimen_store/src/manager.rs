use sentimen::PredictionResult;

use crate::backend::StorageBackend;
use crate::record::{FeedbackRecord, FeedbackStats, PredictionRecord};

/// Ordered set of storage backends.
///
/// Records are saved to the first available backend that accepts them. Storage failures are
/// logged and reported as `false`; they never abort the caller.
#[derive(Default)]
pub struct DataManager {
    backends: Vec<Box<dyn StorageBackend>>,
}

impl DataManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a backend with a lower priority than the ones already added.
    pub fn backend<B>(mut self, backend: B) -> Self
    where
        B: StorageBackend + 'static,
    {
        self.backends.push(Box::new(backend));
        self
    }

    fn available(&self) -> impl Iterator<Item = &dyn StorageBackend> {
        self.backends
            .iter()
            .map(|b| &**b)
            .filter(|b| b.is_available())
    }

    /// Returns the name of the backend receiving new records, or `None` if every backend is
    /// unavailable.
    pub fn storage_name(&self) -> Option<&str> {
        self.available().next().map(|b| b.name())
    }

    /// Saves a prediction and returns `true` if a backend stored it.
    pub fn save_prediction(&self, original_text: &str, result: &PredictionResult) -> bool {
        self.save_prediction_record(&PredictionRecord::new(original_text, result))
    }

    pub fn save_prediction_record(&self, record: &PredictionRecord) -> bool {
        for backend in self.available() {
            match backend.save_prediction(record) {
                Ok(()) => return true,
                Err(e) => {
                    tracing::warn!(backend = backend.name(), error = %e, "failed to save prediction");
                }
            }
        }
        false
    }

    /// Saves feedback and returns `true` if a backend stored it.
    pub fn save_feedback(&self, record: &FeedbackRecord) -> bool {
        for backend in self.available() {
            match backend.save_feedback(record) {
                Ok(()) => return true,
                Err(e) => {
                    tracing::warn!(backend = backend.name(), error = %e, "failed to save feedback");
                }
            }
        }
        false
    }

    /// Returns up to `limit` predictions of the active backend, newest first.
    ///
    /// An unreadable history is logged and returned as empty.
    pub fn history(&self, limit: usize) -> Vec<PredictionRecord> {
        let backend = match self.available().next() {
            Some(backend) => backend,
            None => return vec![],
        };
        backend.history(limit).unwrap_or_else(|e| {
            tracing::warn!(backend = backend.name(), error = %e, "failed to read history");
            vec![]
        })
    }

    /// Returns statistics of the feedback stored in the active backend.
    pub fn feedback_stats(&self) -> FeedbackStats {
        let backend = match self.available().next() {
            Some(backend) => backend,
            None => return FeedbackStats::default(),
        };
        match backend.feedback() {
            Ok(records) => FeedbackStats::from_records(&records),
            Err(e) => {
                tracing::warn!(backend = backend.name(), error = %e, "failed to read feedback");
                FeedbackStats::default()
            }
        }
    }
}
