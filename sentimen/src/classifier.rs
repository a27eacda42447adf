use std::sync::{Mutex, PoisonError};

use crate::encoder::EncodedSequence;
use crate::errors::{Result, SentimenError};
use crate::vocabulary::OOV_ID;

/// Trained classifier.
///
/// `forward` returns one non-negative score per class, summing to about 1. Implementations
/// must be callable from several threads at once; wrap non-reentrant backends in
/// [`Serialized`].
pub trait Classifier: Send + Sync {
    /// Returns the number of output classes.
    fn n_classes(&self) -> usize;

    /// Computes class probabilities of an encoded sequence.
    fn forward(&self, sequence: &EncodedSequence) -> Result<Vec<f64>>;
}

/// Classifier whose forward pass needs exclusive access.
pub trait ClassifierMut: Send {
    /// Returns the number of output classes.
    fn n_classes(&self) -> usize;

    /// Computes class probabilities of an encoded sequence.
    fn forward(&mut self, sequence: &EncodedSequence) -> Result<Vec<f64>>;
}

/// Adapter serializing forward passes of a [`ClassifierMut`].
///
/// Only the forward pass is locked; preprocessing and encoding of concurrent predictions
/// still run in parallel.
pub struct Serialized<C> {
    inner: Mutex<C>,
    n_classes: usize,
}

impl<C> Serialized<C>
where
    C: ClassifierMut,
{
    /// Wraps a classifier.
    pub fn new(classifier: C) -> Self {
        let n_classes = classifier.n_classes();
        Self {
            inner: Mutex::new(classifier),
            n_classes,
        }
    }

    pub fn into_inner(self) -> C {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C> Classifier for Serialized<C>
where
    C: ClassifierMut,
{
    fn n_classes(&self) -> usize {
        self.n_classes
    }

    fn forward(&self, sequence: &EncodedSequence) -> Result<Vec<f64>> {
        // Poisoning is ignored; a forward pass leaves no partial state.
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.forward(sequence)
    }
}

/// Pooled-embedding linear classifier.
///
/// The embedding rows of the non-padding ids are averaged and passed through a dense layer
/// followed by softmax. A sequence without known words pools to the zero vector, so its
/// output is the softmax of the bias.
pub struct EmbeddingClassifier {
    embedding_dim: usize,
    // (vocabulary size + 1) x embedding_dim, row 0 is padding.
    embeddings: Vec<f32>,
    // n_classes x embedding_dim
    weights: Vec<f32>,
    bias: Vec<f32>,
}

impl EmbeddingClassifier {
    /// Creates a new classifier.
    ///
    /// # Errors
    ///
    /// [`SentimenError::InvalidModel`] is returned when the shapes of the matrices do not
    /// agree.
    pub fn new(
        embedding_dim: usize,
        embeddings: Vec<f32>,
        weights: Vec<f32>,
        bias: Vec<f32>,
    ) -> Result<Self> {
        if embedding_dim == 0 {
            return Err(SentimenError::invalid_model("embedding_dim must be at least 1"));
        }
        if embeddings.is_empty() || embeddings.len() % embedding_dim != 0 {
            return Err(SentimenError::invalid_model(format!(
                "embeddings have {} values, not a positive multiple of {}",
                embeddings.len(),
                embedding_dim
            )));
        }
        if bias.is_empty() || weights.len() != bias.len() * embedding_dim {
            return Err(SentimenError::invalid_model(format!(
                "weights have {} values, expected {} x {}",
                weights.len(),
                bias.len(),
                embedding_dim
            )));
        }
        Ok(Self {
            embedding_dim,
            embeddings,
            weights,
            bias,
        })
    }

    /// Returns the number of embedding rows including the padding row.
    pub fn n_rows(&self) -> usize {
        self.embeddings.len() / self.embedding_dim
    }

    fn pool(&self, sequence: &EncodedSequence) -> Vec<f64> {
        let mut pooled = vec![0.; self.embedding_dim];
        let mut n_words = 0u32;
        for &id in sequence.iter() {
            let row = id as usize;
            if id == OOV_ID || row >= self.n_rows() {
                continue;
            }
            let start = row * self.embedding_dim;
            for (p, &e) in pooled
                .iter_mut()
                .zip(&self.embeddings[start..start + self.embedding_dim])
            {
                *p += f64::from(e);
            }
            n_words += 1;
        }
        if n_words != 0 {
            for p in &mut pooled {
                *p /= f64::from(n_words);
            }
        }
        pooled
    }
}

impl Classifier for EmbeddingClassifier {
    fn n_classes(&self) -> usize {
        self.bias.len()
    }

    fn forward(&self, sequence: &EncodedSequence) -> Result<Vec<f64>> {
        let pooled = self.pool(sequence);
        let logits: Vec<f64> = self
            .weights
            .chunks(self.embedding_dim)
            .zip(&self.bias)
            .map(|(ws, &b)| {
                ws.iter()
                    .zip(&pooled)
                    .fold(f64::from(b), |acc, (&w, &x)| acc + f64::from(w) * x)
            })
            .collect();
        Ok(softmax(&logits))
    }
}

fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&x| (x - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::encoder::encode;
    use crate::vocabulary::Vocabulary;

    // "bagus" pushes towards Positive and "jelek" towards Negative.
    fn classifier() -> EmbeddingClassifier {
        EmbeddingClassifier::new(
            2,
            vec![0., 0., 1., 0., 0., 1.],
            vec![0., 2., 0., 0., 2., 0.],
            vec![0., 0., 0.],
        )
        .unwrap()
    }

    fn vocab() -> Vocabulary {
        Vocabulary::from_words(["bagus", "jelek"]).unwrap()
    }

    #[test]
    fn test_forward_sums_to_one() {
        let c = classifier();
        let ys = c.forward(&encode("bagus", &vocab(), 4)).unwrap();
        assert_eq!(3, ys.len());
        assert!((ys.iter().sum::<f64>() - 1.).abs() < 1e-9);
        assert!(ys[2] > ys[1] && ys[2] > ys[0]);
    }

    #[test]
    fn test_forward_negative() {
        let c = classifier();
        let ys = c.forward(&encode("jelek jelek bagus", &vocab(), 4)).unwrap();
        assert!(ys[0] > ys[2]);
    }

    #[test]
    fn test_padding_only_is_uniform() {
        let c = classifier();
        let ys = c.forward(&encode("", &vocab(), 4)).unwrap();
        for y in ys {
            assert!((y - 1. / 3.).abs() < 1e-12);
        }
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(EmbeddingClassifier::new(0, vec![], vec![], vec![]).is_err());
        assert!(EmbeddingClassifier::new(2, vec![0.; 5], vec![0.; 6], vec![0.; 3]).is_err());
        assert!(EmbeddingClassifier::new(2, vec![0.; 6], vec![0.; 5], vec![0.; 3]).is_err());
    }

    struct Counting {
        calls: usize,
    }

    impl ClassifierMut for Counting {
        fn n_classes(&self) -> usize {
            3
        }

        fn forward(&mut self, _: &EncodedSequence) -> Result<Vec<f64>> {
            self.calls += 1;
            Ok(vec![0.2, 0.3, 0.5])
        }
    }

    #[test]
    fn test_serialized() {
        let c = Serialized::new(Counting { calls: 0 });
        let seq = encode("", &vocab(), 3);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| c.forward(&seq).unwrap());
            }
        });
        assert_eq!(3, Classifier::n_classes(&c));
        assert_eq!(4, c.into_inner().calls);
    }
}
