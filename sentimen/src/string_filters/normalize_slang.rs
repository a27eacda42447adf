use crate::string_filters::StringFilter;
use crate::tables::NormalizationTable;

/// Replaces informal words with their canonical forms.
///
/// A canonical form may consist of several words; they are emitted as they are and later
/// filters split them again.
pub struct SlangFilter {
    table: NormalizationTable,
}

impl SlangFilter {
    /// Creates a new SlangFilter.
    ///
    /// # Arguments
    ///
    /// * `table` - Normalization dictionary.
    pub const fn new(table: NormalizationTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &NormalizationTable {
        &self.table
    }
}

impl StringFilter for SlangFilter {
    fn filter(&self, text: &str) -> String {
        let words: Vec<_> = text
            .split_whitespace()
            .map(|word| self.table.get(word).unwrap_or(word))
            .collect();
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> NormalizationTable {
        NormalizationTable::new([
            ("yg", "yang"),
            ("gk", "tidak"),
            ("gpp", "tidak apa apa"),
        ])
        .unwrap()
    }

    #[test]
    fn test_normalize() {
        let filter = SlangFilter::new(table());
        assert_eq!("yang tidak ada gunax", filter.filter("yg gk ada gunax"));
    }

    #[test]
    fn test_multi_word_expansion() {
        let filter = SlangFilter::new(table());
        assert_eq!("tidak apa apa kok", filter.filter("gpp kok"));
    }

    #[test]
    fn test_exact_match_only() {
        let filter = SlangFilter::new(table());
        assert_eq!("YG yga", filter.filter("YG yga"));
        assert_eq!("", filter.filter(""));
    }
}
