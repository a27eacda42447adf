//! Filters applied to raw strings by [`Preprocessor`](crate::Preprocessor).

mod case_folding;
mod non_alpha;
mod normalize_slang;
mod remove_patterns;
mod remove_words;
mod whitespace;

pub use case_folding::CaseFoldingFilter;
pub use non_alpha::NonAlphaFilter;
pub use normalize_slang::SlangFilter;
pub use remove_patterns::{MentionHashtagFilter, UrlFilter};
pub use remove_words::{ShortWordFilter, StopwordFilter};
pub use whitespace::WhitespaceFilter;

/// Filter for strings.
///
/// Every filter accepts any string and returns `""` for `""`.
pub trait StringFilter: Send + Sync {
    /// Filters the specified string.
    ///
    /// # Arguments:
    ///
    /// * `text` - Input text.
    ///
    /// # Returns
    ///
    /// A processed text.
    fn filter(&self, text: &str) -> String;
}
