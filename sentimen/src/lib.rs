#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Sentimen
//!
//! Sentimen classifies short informal Indonesian comments as negative, neutral, or positive.
//!
//! A raw comment is cleaned by a [`Preprocessor`], encoded into a fixed-length id sequence,
//! and scored by a [`Classifier`]. The [`Predictor`] ties these steps together and returns a
//! [`PredictionResult`] carrying the label, the percentages of every category, and the text
//! after each preprocessing stage.
//!
//! ## Examples
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::{prelude::*, stdin, BufReader};
//!
//! use sentimen::{Model, NormalizationTable, Predictor, Preprocessor, StopwordSet};
//!
//! let mut f = BufReader::new(File::open("sentimen.model").unwrap());
//! let model = Model::read(&mut f).unwrap();
//! let table = NormalizationTable::new([("gk", "tidak"), ("bgt", "banget")]).unwrap();
//! let stopwords = StopwordSet::new(["yang", "di", "dan"]);
//! let preprocessor = Preprocessor::new(table, stopwords).unwrap();
//! let predictor = Predictor::from_model(preprocessor, model).unwrap();
//!
//! for line in stdin().lock().lines() {
//!     let r = predictor.predict(&line.unwrap()).unwrap();
//!     println!("{}\t{:.2}", r.label(), r.confidence());
//! }
//! ```

mod category;
mod classifier;
mod config;
mod encoder;
mod loader;
mod model;
mod predictor;
mod preprocessor;
mod result;
mod tables;
mod vocabulary;

pub mod errors;
pub mod string_filters;

pub use category::Category;
pub use classifier::{Classifier, ClassifierMut, EmbeddingClassifier, Serialized};
pub use config::Config;
pub use encoder::{encode, EncodedSequence};
pub use loader::load_first;
pub use model::Model;
pub use predictor::Predictor;
pub use preprocessor::{PreprocessingTrace, Preprocessor, Stage};
pub use result::{PredictionResult, Probabilities};
pub use tables::{NormalizationTable, StopwordSet};
pub use vocabulary::{Vocabulary, OOV_ID};
