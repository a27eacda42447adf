use regex::Regex;

use crate::errors::Result;
use crate::string_filters::StringFilter;

/// Removes URLs, i.e., tokens starting with `http`, `https`, or `www`.
#[derive(Clone)]
pub struct UrlFilter {
    pattern: Regex,
}

impl UrlFilter {
    /// Creates a new UrlFilter.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"http\S+|www\S+|https\S+")?,
        })
    }
}

impl StringFilter for UrlFilter {
    fn filter(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").into_owned()
    }
}

/// Removes `@mentions` and `#hashtags`.
#[derive(Clone)]
pub struct MentionHashtagFilter {
    pattern: Regex,
}

impl MentionHashtagFilter {
    /// Creates a new MentionHashtagFilter.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"@\w+|#\w+")?,
        })
    }
}

impl StringFilter for MentionHashtagFilter {
    fn filter(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_urls() {
        let filter = UrlFilter::new().unwrap();
        assert_eq!(
            "lihat  dan ",
            filter.filter("lihat https://example.com/a?b=1 dan www.example.com")
        );
    }

    #[test]
    fn test_url_prefix_only() {
        let filter = UrlFilter::new().unwrap();
        assert_eq!("http", filter.filter("http"));
        assert_eq!("", filter.filter(""));
    }

    #[test]
    fn test_remove_mentions_hashtags() {
        let filter = MentionHashtagFilter::new().unwrap();
        assert_eq!("mantap  ", filter.filter("mantap @gov #mbg"));
        assert_eq!("email a.com", filter.filter("email a@b.com"));
    }

    #[test]
    fn test_lone_symbols() {
        let filter = MentionHashtagFilter::new().unwrap();
        assert_eq!("@ # @!", filter.filter("@ # @!"));
    }
}
