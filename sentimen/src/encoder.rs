use std::ops::Deref;

use crate::vocabulary::{Vocabulary, OOV_ID};

/// Fixed-length sequence of word ids fed to a classifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedSequence(Vec<u32>);

impl EncodedSequence {
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Returns `true` if the sequence carries no known word.
    ///
    /// Empty or entirely unknown texts produce such sequences; they are still valid input.
    pub fn is_padding_only(&self) -> bool {
        self.0.iter().all(|&id| id == OOV_ID)
    }

    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }
}

impl Deref for EncodedSequence {
    type Target = [u32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Encodes a preprocessed text into a sequence of exactly `max_length` ids.
///
/// Unknown words become [`OOV_ID`]. Longer sequences are cut at the end and shorter ones
/// are padded with [`OOV_ID`] at the end.
///
/// # Arguments
///
/// * `text` - A preprocessed text.
/// * `vocabulary` - Word ids.
/// * `max_length` - Length of the output.
///
/// # Examples
///
/// ```
/// use sentimen::{encode, Vocabulary};
///
/// let vocab = Vocabulary::from_pairs([("program", 12), ("bagus", 45)]).unwrap();
/// let seq = encode("program bagus sekali", &vocab, 5);
/// assert_eq!(&[12, 45, 0, 0, 0], seq.as_slice());
/// ```
pub fn encode(text: &str, vocabulary: &Vocabulary, max_length: usize) -> EncodedSequence {
    let mut ids: Vec<u32> = text
        .split_whitespace()
        .take(max_length)
        .map(|word| vocabulary.lookup(word))
        .collect();
    ids.resize(max_length, OOV_ID);
    EncodedSequence(ids)
}
