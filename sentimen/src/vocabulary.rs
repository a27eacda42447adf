use hashbrown::HashMap;

use crate::errors::{Result, SentimenError};

/// Id of unknown words and padding.
pub const OOV_ID: u32 = 0;

/// Fixed mapping from words to integer ids.
///
/// Id [`OOV_ID`] is reserved; every registered word has a positive id.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    ids: HashMap<String, u32>,
}

impl Vocabulary {
    /// Creates a vocabulary assigning ids 1, 2, ... to the words in the given order.
    ///
    /// # Errors
    ///
    /// [`SentimenError::InvalidArgument`] is returned when a word appears twice.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ids = HashMap::new();
        for (i, word) in words.into_iter().enumerate() {
            let id = u32::try_from(i + 1).map_err(|_| {
                SentimenError::invalid_argument("words", "too many words")
            })?;
            if ids.insert(word.into(), id).is_some() {
                return Err(SentimenError::invalid_argument(
                    "words",
                    format!("word #{} is duplicated", id),
                ));
            }
        }
        Ok(Self { ids })
    }

    /// Creates a vocabulary from pairs of a word and its id.
    ///
    /// # Errors
    ///
    /// [`SentimenError::InvalidArgument`] is returned when an id is [`OOV_ID`] or a word
    /// appears twice.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut ids = HashMap::new();
        for (word, id) in pairs {
            let word = word.into();
            if id == OOV_ID {
                return Err(SentimenError::invalid_argument(
                    "pairs",
                    format!("{:?} uses the reserved id {}", word, OOV_ID),
                ));
            }
            if ids.contains_key(&word) {
                return Err(SentimenError::invalid_argument(
                    "pairs",
                    format!("{:?} is duplicated", word),
                ));
            }
            ids.insert(word, id);
        }
        Ok(Self { ids })
    }

    /// Returns the id of the word, or [`OOV_ID`] if it is not registered.
    #[inline]
    pub fn lookup(&self, word: &str) -> u32 {
        self.ids.get(word).copied().unwrap_or(OOV_ID)
    }

    /// Drops every word whose id is equal to or larger than `vocab_size`.
    pub fn truncated(mut self, vocab_size: usize) -> Self {
        self.ids.retain(|_, id| (*id as usize) < vocab_size);
        self
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns pairs of a word and its id in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.ids.iter().map(|(w, id)| (w.as_str(), *id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words() {
        let vocab = Vocabulary::from_words(["program", "bagus", "sekali"]).unwrap();
        assert_eq!(1, vocab.lookup("program"));
        assert_eq!(3, vocab.lookup("sekali"));
        assert_eq!(OOV_ID, vocab.lookup("gunax"));
    }

    #[test]
    fn test_duplicated_word() {
        assert!(Vocabulary::from_words(["a", "b", "a"]).is_err());
        assert!(Vocabulary::from_pairs([("a", 1), ("a", 2)]).is_err());
    }

    #[test]
    fn test_reserved_id() {
        assert!(Vocabulary::from_pairs([("program", 0)]).is_err());
    }

    #[test]
    fn test_truncated() {
        let vocab = Vocabulary::from_pairs([("program", 12), ("bagus", 45), ("sekali", 78)])
            .unwrap()
            .truncated(50);
        assert_eq!(2, vocab.len());
        assert_eq!(45, vocab.lookup("bagus"));
        assert_eq!(OOV_ID, vocab.lookup("sekali"));
    }
}
