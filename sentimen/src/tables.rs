//! Normalization dictionary and stopword set used by the preprocessor.

use hashbrown::{HashMap, HashSet};

use crate::errors::{Result, SentimenError};

/// Mapping from informal words to their canonical forms.
///
/// Keys are case-folded when the table is built; lookups are exact matches against
/// already lowercased words. A canonical form may contain several space-separated words.
#[derive(Clone, Debug, Default)]
pub struct NormalizationTable {
    map: HashMap<String, String>,
}

impl NormalizationTable {
    /// Creates a new table.
    ///
    /// # Arguments
    ///
    /// * `pairs` - Pairs of an informal word and its canonical form.
    ///
    /// # Errors
    ///
    /// [`SentimenError::InvalidArgument`] is returned when two entries share the same key
    /// after case folding.
    pub fn new<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = HashMap::new();
        for (informal, canonical) in pairs {
            let informal = informal.as_ref().to_lowercase();
            if map.contains_key(&informal) {
                return Err(SentimenError::invalid_argument(
                    "pairs",
                    format!("duplicated entry: {}", informal),
                ));
            }
            map.insert(informal, canonical.into());
        }
        Ok(Self { map })
    }

    /// Returns the canonical form of `word`.
    #[inline]
    pub fn get(&self, word: &str) -> Option<&str> {
        self.map.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Set of words discarded after normalization.
#[derive(Clone, Debug, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Creates a new set. Words are case-folded.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_folds_keys() {
        let table = NormalizationTable::new([("YG", "yang"), ("gpp", "tidak apa apa")]).unwrap();
        assert_eq!(Some("yang"), table.get("yg"));
        assert_eq!(None, table.get("YG"));
        assert_eq!(Some("tidak apa apa"), table.get("gpp"));
        assert_eq!(2, table.len());
    }

    #[test]
    fn test_table_duplicated_key() {
        assert!(NormalizationTable::new([("gk", "tidak"), ("GK", "enggak")]).is_err());
    }

    #[test]
    fn test_stopwords() {
        let stopwords = StopwordSet::new(["Yang", "di"]);
        assert!(stopwords.contains("yang"));
        assert!(stopwords.contains("di"));
        assert!(!stopwords.contains("program"));
        assert_eq!(2, stopwords.len());
    }
}
