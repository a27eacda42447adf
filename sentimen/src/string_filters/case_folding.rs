use crate::string_filters::StringFilter;

/// Lowercases the whole string with the locale-independent case mapping.
#[derive(Clone, Copy, Default)]
pub struct CaseFoldingFilter;

impl StringFilter for CaseFoldingFilter {
    fn filter(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        let filter = CaseFoldingFilter;
        assert_eq!(
            "program ini bagus sekali!!!",
            filter.filter("Program ini BAGUS sekali!!!")
        );
    }

    #[test]
    fn test_non_latin() {
        let filter = CaseFoldingFilter;
        assert_eq!("ölçü", filter.filter("ÖLÇÜ"));
        assert_eq!("", filter.filter(""));
    }
}
