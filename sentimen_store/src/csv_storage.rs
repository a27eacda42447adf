use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::{newest_first, StorageBackend};
use crate::errors::{Result, StoreError};
use crate::record::{FeedbackRecord, PredictionRecord};

pub const HISTORY_FILE_NAME: &str = "prediction_history.csv";
pub const FEEDBACK_FILE_NAME: &str = "prediction_feedback.csv";

/// Backend appending records to CSV files in a directory.
///
/// The header line is written when a file is created.
#[derive(Debug)]
pub struct CsvStorage {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl CsvStorage {
    /// Creates a backend storing files in `dir`. The directory is created if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new<P>(dir: P) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            lock: Mutex::new(()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE_NAME)
    }

    pub fn feedback_path(&self) -> PathBuf {
        self.dir.join(FEEDBACK_FILE_NAME)
    }

    fn append<T>(&self, path: &Path, record: &T) -> Result<()>
    where
        T: Serialize,
    {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let is_new = file.metadata()?.len() == 0;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);
        wtr.serialize(record)?;
        wtr.flush()?;
        Ok(())
    }

    fn read_all<T>(&self, path: &Path) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };
        let mut rdr = csv::Reader::from_reader(file);
        let mut records = vec![];
        for record in rdr.deserialize() {
            records.push(record?);
        }
        Ok(records)
    }
}

impl StorageBackend for CsvStorage {
    fn name(&self) -> &str {
        "csv"
    }

    fn is_available(&self) -> bool {
        self.dir.is_dir()
    }

    fn save_prediction(&self, record: &PredictionRecord) -> Result<()> {
        if !self.is_available() {
            return Err(StoreError::unavailable(self.name()));
        }
        self.append(&self.history_path(), record)
    }

    fn save_feedback(&self, record: &FeedbackRecord) -> Result<()> {
        if !self.is_available() {
            return Err(StoreError::unavailable(self.name()));
        }
        self.append(&self.feedback_path(), record)
    }

    fn history(&self, limit: usize) -> Result<Vec<PredictionRecord>> {
        Ok(newest_first(self.read_all(&self.history_path())?, limit))
    }

    fn feedback(&self) -> Result<Vec<FeedbackRecord>> {
        self.read_all(&self.feedback_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sentimen::Category;

    fn prediction(text: &str, label: Category) -> PredictionRecord {
        PredictionRecord {
            timestamp: "2024-01-02 03:04:05".into(),
            original_text: text.into(),
            cleaned_text: text.to_lowercase(),
            predicted_label: label,
            confidence: 70.,
            prob_negative: 70.,
            prob_neutral: 20.,
            prob_positive: 10.,
        }
    }

    #[test]
    fn test_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let s = CsvStorage::new(dir.path()).unwrap();
        s.save_prediction(&prediction("Enak, sekali", Category::Positive))
            .unwrap();
        s.save_prediction(&prediction("Jelek", Category::Negative))
            .unwrap();
        let content = fs::read_to_string(s.history_path()).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(3, lines.len());
        assert_eq!(
            "timestamp,original_text,cleaned_text,predicted_label,confidence,\
             prob_negative,prob_neutral,prob_positive",
            lines[0]
        );
        assert!(lines[1].contains("\"Enak, sekali\""));
    }

    #[test]
    fn test_history_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let s = CsvStorage::new(dir.path()).unwrap();
        for text in ["a", "b", "c"] {
            s.save_prediction(&prediction(text, Category::Neutral))
                .unwrap();
        }
        let history = s.history(2).unwrap();
        let texts: Vec<_> = history.iter().map(|r| r.original_text.as_str()).collect();
        assert_eq!(vec!["c", "b"], texts);
        assert_eq!(prediction("c", Category::Neutral), history[0]);
    }

    #[test]
    fn test_feedback_with_missing_label() {
        let dir = tempfile::tempdir().unwrap();
        let s = CsvStorage::new(dir.path().join("data")).unwrap();
        s.save_feedback(&FeedbackRecord::incorrect("x", Category::Positive, None))
            .unwrap();
        s.save_feedback(
            &FeedbackRecord::incorrect("y", Category::Positive, Some(Category::Negative))
                .comment("sarkas"),
        )
        .unwrap();
        let feedback = s.feedback().unwrap();
        assert_eq!(2, feedback.len());
        assert_eq!(None, feedback[0].correct_label);
        assert_eq!(Some(Category::Negative), feedback[1].correct_label);
        assert_eq!("sarkas", feedback[1].comment);
    }

    #[test]
    fn test_foreign_files_are_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let foreign = "timestamp,original_text,prob_negatif\n2024-01-02 03:04:05,x,1.0\n";
        for name in ["sentiment_history.csv", "user_feedback.csv"] {
            fs::write(dir.path().join(name), foreign).unwrap();
        }
        let s = CsvStorage::new(dir.path()).unwrap();
        s.save_prediction(&prediction("a", Category::Neutral))
            .unwrap();
        s.save_feedback(&FeedbackRecord::correct("a", Category::Neutral))
            .unwrap();
        assert_eq!(1, s.history(10).unwrap().len());
        assert_eq!(1, s.feedback().unwrap().len());
        for name in ["sentiment_history.csv", "user_feedback.csv"] {
            assert_eq!(foreign, fs::read_to_string(dir.path().join(name)).unwrap());
        }
    }

    #[test]
    fn test_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let s = CsvStorage::new(dir.path()).unwrap();
        assert!(s.history(10).unwrap().is_empty());
        assert!(s.feedback().unwrap().is_empty());
    }

    #[test]
    fn test_removed_directory() {
        let dir = tempfile::tempdir().unwrap();
        let s = CsvStorage::new(dir.path().join("data")).unwrap();
        fs::remove_dir(s.dir()).unwrap();
        assert!(!s.is_available());
        assert!(s
            .save_prediction(&prediction("a", Category::Neutral))
            .is_err());
    }
}
