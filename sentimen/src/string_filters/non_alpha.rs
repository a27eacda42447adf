use regex::Regex;

use crate::errors::Result;
use crate::string_filters::StringFilter;

/// Replaces every character other than `a`-`z` and whitespace with a space.
///
/// Characters are replaced instead of deleted so that separate words never merge.
#[derive(Clone)]
pub struct NonAlphaFilter {
    pattern: Regex,
}

impl NonAlphaFilter {
    /// Creates a new NonAlphaFilter.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"[^a-z\s]")?,
        })
    }
}

impl StringFilter for NonAlphaFilter {
    fn filter(&self, text: &str) -> String {
        self.pattern.replace_all(text, " ").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_symbols_and_digits() {
        let filter = NonAlphaFilter::new().unwrap();
        assert_eq!("sekali    ", filter.filter("sekali!!! "));
        assert_eq!("rp    ribu", filter.filter("rp.10 ribu"));
    }

    #[test]
    fn test_no_merge() {
        let filter = NonAlphaFilter::new().unwrap();
        assert_eq!("anak anak", filter.filter("anak-anak"));
    }

    #[test]
    fn test_non_ascii_letters() {
        let filter = NonAlphaFilter::new().unwrap();
        assert_eq!("caf ", filter.filter("café"));
    }
}
