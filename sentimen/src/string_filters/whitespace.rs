use regex::Regex;

use crate::errors::Result;
use crate::string_filters::StringFilter;

/// Collapses whitespace runs into a single space and trims both ends.
#[derive(Clone)]
pub struct WhitespaceFilter {
    pattern: Regex,
}

impl WhitespaceFilter {
    /// Creates a new WhitespaceFilter.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"\s+")?,
        })
    }
}

impl StringFilter for WhitespaceFilter {
    fn filter(&self, text: &str) -> String {
        self.pattern.replace_all(text, " ").trim().to_string()
    }
}
