use crate::string_filters::StringFilter;
use crate::tables::StopwordSet;

/// Removes stopwords.
pub struct StopwordFilter {
    stopwords: StopwordSet,
}

impl StopwordFilter {
    /// Creates a new StopwordFilter.
    ///
    /// # Arguments
    ///
    /// * `stopwords` - Words to be removed.
    pub const fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }
}

impl StringFilter for StopwordFilter {
    fn filter(&self, text: &str) -> String {
        let words: Vec<_> = text
            .split_whitespace()
            .filter(|word| !self.stopwords.contains(word))
            .collect();
        words.join(" ")
    }
}

/// Removes words shorter than the minimum length.
#[derive(Clone, Copy)]
pub struct ShortWordFilter {
    min_length: usize,
}

impl ShortWordFilter {
    /// Creates a new ShortWordFilter.
    ///
    /// # Arguments
    ///
    /// * `min_length` - Words with fewer characters than this value are removed.
    pub const fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl Default for ShortWordFilter {
    fn default() -> Self {
        Self::new(2)
    }
}

impl StringFilter for ShortWordFilter {
    fn filter(&self, text: &str) -> String {
        let words: Vec<_> = text
            .split_whitespace()
            .filter(|word| word.chars().count() >= self.min_length)
            .collect();
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_stopwords() {
        let filter = StopwordFilter::new(StopwordSet::new(["yang", "ini"]));
        assert_eq!("program bagus", filter.filter("program ini yang bagus"));
        assert_eq!("", filter.filter("yang ini"));
    }

    #[test]
    fn test_remove_stopwords_idempotent() {
        let filter = StopwordFilter::new(StopwordSet::new(["di", "dan", "itu"]));
        for text in ["di sana dan di sini", "itu", "", "makan  siang di sekolah"] {
            let once = filter.filter(text);
            assert_eq!(once, filter.filter(&once));
        }
    }

    #[test]
    fn test_remove_short_words() {
        let filter = ShortWordFilter::default();
        assert_eq!("ok di", filter.filter("a ok b di c"));
    }

    #[test]
    fn test_remove_short_words_idempotent() {
        let filter = ShortWordFilter::new(3);
        for text in ["a bc def ghij", "x", "", "aa  bbb"] {
            let once = filter.filter(text);
            assert_eq!(once, filter.filter(&once));
        }
    }

    #[test]
    fn test_min_length_zero_keeps_all() {
        let filter = ShortWordFilter::new(0);
        assert_eq!("a b", filter.filter(" a  b "));
    }
}
