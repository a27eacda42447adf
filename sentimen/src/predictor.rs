use once_cell::sync::OnceCell;

use crate::classifier::Classifier;
use crate::config::Config;
use crate::encoder::encode;
use crate::errors::{Result, SentimenError};
use crate::model::Model;
use crate::preprocessor::Preprocessor;
use crate::result::{PredictionResult, Probabilities};
use crate::vocabulary::Vocabulary;

struct Assets {
    classifier: Box<dyn Classifier>,
    vocabulary: Vocabulary,
}

/// Sentiment predictor.
///
/// A predictor is created empty and becomes ready once a classifier and its vocabulary are
/// loaded. The loaded assets are never modified afterwards, so a ready predictor can be
/// shared between threads and called concurrently.
pub struct Predictor {
    preprocessor: Preprocessor,
    config: Config,
    assets: OnceCell<Assets>,
}

impl Predictor {
    /// Creates a new predictor without a classifier.
    ///
    /// # Arguments
    ///
    /// * `preprocessor` - Text normalizer.
    /// * `config` - Shape of the classifier to be loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is inconsistent.
    pub fn new(preprocessor: Preprocessor, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            preprocessor,
            config,
            assets: OnceCell::new(),
        })
    }

    /// Creates a ready predictor.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is inconsistent or the classifier does not output
    /// `n_classes` values.
    pub fn with_parts<C>(
        preprocessor: Preprocessor,
        config: Config,
        classifier: C,
        vocabulary: Vocabulary,
    ) -> Result<Self>
    where
        C: Classifier + 'static,
    {
        let predictor = Self::new(preprocessor, config)?;
        predictor.load(|| Ok((classifier, vocabulary)))?;
        Ok(predictor)
    }

    /// Creates a ready predictor using the configuration stored in the model.
    pub fn from_model(preprocessor: Preprocessor, model: Model) -> Result<Self> {
        let predictor = Self::new(preprocessor, model.config().clone())?;
        predictor.load_model(model)?;
        Ok(predictor)
    }

    /// Loads a classifier and its vocabulary.
    ///
    /// The loader runs at most once successfully. Its result becomes visible to other threads
    /// only after it is complete; if it fails, the predictor stays not ready and loading can
    /// be retried. Calling this function on a ready predictor does nothing.
    ///
    /// # Errors
    ///
    /// A failure of `loader` is returned as [`SentimenError::LoadFailure`] carrying its cause.
    /// [`SentimenError::InvalidModel`] is returned if the classifier does not output
    /// `n_classes` values.
    pub fn load<C, F>(&self, loader: F) -> Result<()>
    where
        C: Classifier + 'static,
        F: FnOnce() -> Result<(C, Vocabulary)>,
    {
        self.assets.get_or_try_init(|| {
            let (classifier, vocabulary) = loader()
                .map_err(|e| SentimenError::load_failure("classifier and vocabulary", e))?;
            if classifier.n_classes() != self.config.n_classes {
                return Err(SentimenError::invalid_model(format!(
                    "classifier outputs {} classes, expected {}",
                    classifier.n_classes(),
                    self.config.n_classes
                )));
            }
            tracing::info!(
                n_words = vocabulary.len(),
                n_classes = classifier.n_classes(),
                "classifier loaded"
            );
            Ok(Assets {
                classifier: Box::new(classifier),
                vocabulary: vocabulary.truncated(self.config.vocab_size),
            })
        })?;
        Ok(())
    }

    /// Loads the classifier and the vocabulary of a model.
    ///
    /// # Errors
    ///
    /// [`SentimenError::InvalidArgument`] is returned when the model was built with another
    /// configuration.
    pub fn load_model(&self, model: Model) -> Result<()> {
        if model.config() != &self.config {
            return Err(SentimenError::invalid_argument(
                "model",
                format!(
                    "configuration {:?} differs from {:?}",
                    model.config(),
                    self.config
                ),
            ));
        }
        self.load(|| model.into_parts())
    }

    pub fn is_ready(&self) -> bool {
        self.assets.get().is_some()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    fn assets(&self) -> Result<&Assets> {
        self.assets
            .get()
            .ok_or_else(|| SentimenError::not_ready("classifier and vocabulary"))
    }

    /// Predicts the sentiment of a raw text.
    ///
    /// An empty or entirely unknown text is encoded as padding only and still yields a
    /// result.
    ///
    /// # Errors
    ///
    /// [`SentimenError::NotReady`] is returned when no classifier is loaded, and
    /// [`SentimenError::InvalidModel`] when the classifier output has a wrong length or is
    /// not finite. Other errors of the classifier are returned as they are.
    pub fn predict(&self, text: &str) -> Result<PredictionResult> {
        let assets = self.assets()?;
        let trace = self.preprocessor.trace(text);
        let sequence = encode(
            trace.final_text(),
            &assets.vocabulary,
            self.config.max_length,
        );
        let ys = assets.classifier.forward(&sequence)?;
        if ys.len() != self.config.n_classes {
            return Err(SentimenError::invalid_model(format!(
                "classifier returned {} values, expected {}",
                ys.len(),
                self.config.n_classes
            )));
        }
        if ys.iter().any(|y| !y.is_finite()) {
            return Err(SentimenError::invalid_model(format!(
                "classifier returned non-finite values: {:?}",
                ys
            )));
        }
        let best = argmax(&ys);
        let mut probabilities = Probabilities::default();
        for (&category, &y) in self.config.labels.iter().zip(&ys) {
            probabilities.set(category, y * 100.);
        }
        let label = self.config.labels[best];
        tracing::debug!(
            label = %label,
            confidence = probabilities.get(label),
            padding_only = sequence.is_padding_only(),
            "predicted"
        );
        Ok(PredictionResult::new(label, probabilities, trace))
    }

    /// Predicts the sentiments of several texts. The order of the results follows the input.
    ///
    /// # Errors
    ///
    /// The first error aborts the whole batch.
    pub fn predict_batch<S>(&self, texts: &[S]) -> Result<Vec<PredictionResult>>
    where
        S: AsRef<str>,
    {
        self.assets()?;
        texts.iter().map(|text| self.predict(text.as_ref())).collect()
    }
}

/// Returns the index of the largest value. The first one wins ties.
fn argmax(ys: &[f64]) -> usize {
    let mut best = 0;
    for (i, &y) in ys.iter().enumerate().skip(1) {
        if y > ys[best] {
            best = i;
        }
    }
    best
}
