use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::classifier::EmbeddingClassifier;
use crate::config::Config;
use crate::errors::{Result, SentimenError};
use crate::vocabulary::Vocabulary;

/// Model data.
///
/// The id of `words[i]` is `i + 1`. Row 0 of the embedding matrix belongs to padding and
/// unknown words.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Model {
    pub(crate) config: Config,
    pub(crate) words: Vec<String>,
    pub(crate) embedding_dim: usize,
    pub(crate) embeddings: Vec<f32>,
    pub(crate) weights: Vec<f32>,
    pub(crate) bias: Vec<f32>,
}

impl Model {
    /// Creates a model from trained weights.
    ///
    /// # Arguments
    ///
    /// * `config` - Shape of the classifier.
    /// * `words` - Vocabulary ordered by id, starting with id 1.
    /// * `embedding_dim` - Width of each embedding row.
    /// * `embeddings` - `(words.len() + 1) x embedding_dim` matrix in row-major order.
    /// * `weights` - `n_classes x embedding_dim` matrix of the dense layer in row-major order.
    /// * `bias` - Bias of the dense layer.
    ///
    /// # Errors
    ///
    /// [`SentimenError::InvalidModel`] is returned when the shapes disagree with each other or
    /// with `config`.
    pub fn new(
        config: Config,
        words: Vec<String>,
        embedding_dim: usize,
        embeddings: Vec<f32>,
        weights: Vec<f32>,
        bias: Vec<f32>,
    ) -> Result<Self> {
        let model = Self {
            config,
            words,
            embedding_dim,
            embeddings,
            weights,
            bias,
        };
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        self.config
            .validate()
            .map_err(|e| SentimenError::invalid_model(e.to_string()))?;
        if self.embedding_dim == 0 {
            return Err(SentimenError::invalid_model("embedding_dim must be at least 1"));
        }
        if self.embeddings.len() != (self.words.len() + 1) * self.embedding_dim {
            return Err(SentimenError::invalid_model(format!(
                "{} embedding values for {} words of dimension {}",
                self.embeddings.len(),
                self.words.len(),
                self.embedding_dim
            )));
        }
        if self.bias.len() != self.config.n_classes {
            return Err(SentimenError::invalid_model(format!(
                "bias has {} values for {} classes",
                self.bias.len(),
                self.config.n_classes
            )));
        }
        if self.weights.len() != self.config.n_classes * self.embedding_dim {
            return Err(SentimenError::invalid_model(format!(
                "dense layer has {} values, expected {} x {}",
                self.weights.len(),
                self.config.n_classes,
                self.embedding_dim
            )));
        }
        Ok(())
    }

    /// Exports the model data.
    ///
    /// # Arguments
    ///
    /// * `wtr` - Byte-oriented sink object.
    ///
    /// # Errors
    ///
    /// When `wtr` generates an error, it will be returned as is.
    pub fn write<W>(&self, wtr: &mut W) -> Result<()>
    where
        W: Write,
    {
        bincode::serialize_into(wtr, self)?;
        Ok(())
    }

    /// Creates a model from a reader.
    ///
    /// # Arguments
    ///
    /// * `rdr` - A data source.
    ///
    /// # Returns
    ///
    /// A model data read from `rdr`.
    ///
    /// # Errors
    ///
    /// When `rdr` generates an error, it will be returned as is. A decoded model with
    /// inconsistent shapes is rejected.
    pub fn read<R>(rdr: &mut R) -> Result<Self>
    where
        R: Read,
    {
        let model: Self = bincode::deserialize_from(rdr)?;
        model.validate()?;
        Ok(model)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the words ordered by id.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the vocabulary bounded by the configured vocabulary size.
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        Ok(Vocabulary::from_words(self.words.iter().cloned())
            .map_err(|e| SentimenError::invalid_model(e.to_string()))?
            .truncated(self.config.vocab_size))
    }

    /// Shrinks the vocabulary so that every id is less than `vocab_size`.
    ///
    /// Embedding rows of the removed words are dropped as well. A size larger than the
    /// current vocabulary only updates the configuration.
    pub fn truncate_vocabulary(&mut self, vocab_size: usize) -> Result<()> {
        if vocab_size == 0 {
            return Err(SentimenError::invalid_argument(
                "vocab_size",
                "must be at least 1",
            ));
        }
        self.words.truncate(vocab_size - 1);
        self.embeddings.truncate((self.words.len() + 1) * self.embedding_dim);
        self.config.vocab_size = vocab_size;
        Ok(())
    }

    /// Splits the model into a classifier and its vocabulary.
    pub fn into_parts(self) -> Result<(EmbeddingClassifier, Vocabulary)> {
        let vocabulary = self.vocabulary()?;
        let classifier =
            EmbeddingClassifier::new(self.embedding_dim, self.embeddings, self.weights, self.bias)?;
        Ok((classifier, vocabulary))
    }
}
