//! # Sentimen store
//!
//! Persistence of prediction history and user feedback for Sentimen.
//!
//! ```no_run
//! use sentimen_store::{CsvStorage, DataManager, FeedbackRecord, MemoryStorage};
//! use sentimen::Category;
//!
//! let manager = DataManager::new()
//!     .backend(CsvStorage::new("data").unwrap())
//!     .backend(MemoryStorage::new());
//! let saved = manager.save_feedback(&FeedbackRecord::correct("enak bgt", Category::Positive));
//! println!("saved to {:?}: {}", manager.storage_name(), saved);
//! ```

mod backend;
mod csv_storage;
mod manager;
mod record;

pub mod errors;

pub use backend::{MemoryStorage, StorageBackend};
pub use csv_storage::{CsvStorage, FEEDBACK_FILE_NAME, HISTORY_FILE_NAME};
pub use manager::DataManager;
pub use record::{timestamp, FeedbackRecord, FeedbackStats, PredictionRecord, TIMESTAMP_FORMAT};
