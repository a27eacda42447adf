use std::fmt;

use crate::errors::Result;
use crate::string_filters::{
    CaseFoldingFilter, MentionHashtagFilter, NonAlphaFilter, ShortWordFilter, SlangFilter,
    StopwordFilter, StringFilter, UrlFilter, WhitespaceFilter,
};
use crate::tables::{NormalizationTable, StopwordSet};

/// Stage of the preprocessing pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The input text as it is.
    Original,
    CaseFolding,
    RemoveUrls,
    RemoveMentionsHashtags,
    RemoveNonAlpha,
    RemoveExtraWhitespace,
    NormalizeSlang,
    RemoveStopwords,
    RemoveShortWords,
    /// The output of the last filter.
    Final,
}

impl Stage {
    /// All stages in the order they appear in a trace.
    pub const ALL: [Self; 10] = [
        Self::Original,
        Self::CaseFolding,
        Self::RemoveUrls,
        Self::RemoveMentionsHashtags,
        Self::RemoveNonAlpha,
        Self::RemoveExtraWhitespace,
        Self::NormalizeSlang,
        Self::RemoveStopwords,
        Self::RemoveShortWords,
        Self::Final,
    ];

    /// Returns the stable identifier of the stage.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::CaseFolding => "case_folding",
            Self::RemoveUrls => "remove_urls",
            Self::RemoveMentionsHashtags => "remove_mentions_hashtags",
            Self::RemoveNonAlpha => "remove_non_alpha",
            Self::RemoveExtraWhitespace => "remove_extra_whitespace",
            Self::NormalizeSlang => "normalize_slang",
            Self::RemoveStopwords => "remove_stopwords",
            Self::RemoveShortWords => "remove_short_words",
            Self::Final => "final",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Outputs of every preprocessing stage for one input.
///
/// A trace always contains the stages of [`Stage::ALL`] in that order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreprocessingTrace {
    stages: Vec<(Stage, String)>,
}

impl PreprocessingTrace {
    /// Returns the output of the specified stage.
    pub fn get(&self, stage: Stage) -> &str {
        // Every stage is recorded exactly once, at the position of Stage::ALL.
        self.stages
            .iter()
            .find(|(s, _)| *s == stage)
            .map_or("", |(_, text)| text.as_str())
    }

    pub fn original(&self) -> &str {
        self.get(Stage::Original)
    }

    pub fn final_text(&self) -> &str {
        self.get(Stage::Final)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stage, &str)> {
        self.stages.iter().map(|(s, text)| (*s, text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

/// Text normalizer for informal comments.
///
/// The input is case-folded, stripped of URLs, mentions, hashtags, digits and symbols,
/// normalized with the dictionary, and finally stripped of stopwords and short words.
pub struct Preprocessor {
    filters: Vec<(Stage, Box<dyn StringFilter>)>,
}

impl Preprocessor {
    /// Creates a new preprocessor.
    ///
    /// # Arguments
    ///
    /// * `table` - Normalization dictionary.
    /// * `stopwords` - Words removed after normalization.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern of a filter fails to compile.
    pub fn new(table: NormalizationTable, stopwords: StopwordSet) -> Result<Self> {
        let filters: Vec<(Stage, Box<dyn StringFilter>)> = vec![
            (Stage::CaseFolding, Box::new(CaseFoldingFilter)),
            (Stage::RemoveUrls, Box::new(UrlFilter::new()?)),
            (
                Stage::RemoveMentionsHashtags,
                Box::new(MentionHashtagFilter::new()?),
            ),
            (Stage::RemoveNonAlpha, Box::new(NonAlphaFilter::new()?)),
            (
                Stage::RemoveExtraWhitespace,
                Box::new(WhitespaceFilter::new()?),
            ),
            (Stage::NormalizeSlang, Box::new(SlangFilter::new(table))),
            (Stage::RemoveStopwords, Box::new(StopwordFilter::new(stopwords))),
            (Stage::RemoveShortWords, Box::new(ShortWordFilter::default())),
        ];
        Ok(Self { filters })
    }

    /// Sets the minimum number of characters of a word to be kept. The default is 2.
    pub fn min_word_length(mut self, length: usize) -> Self {
        for (stage, filter) in &mut self.filters {
            if *stage == Stage::RemoveShortWords {
                *filter = Box::new(ShortWordFilter::new(length));
            }
        }
        self
    }

    /// Normalizes the text.
    ///
    /// The result consists only of `a`-`z` and single spaces and may be empty.
    pub fn preprocess(&self, text: &str) -> String {
        let mut text = text.to_string();
        for (_, filter) in &self.filters {
            text = filter.filter(&text);
        }
        text
    }

    /// Normalizes the text and records the output of every stage.
    ///
    /// The [`Stage::Final`] entry equals the result of [`Preprocessor::preprocess()`].
    pub fn trace(&self, text: &str) -> PreprocessingTrace {
        let mut stages = Vec::with_capacity(self.filters.len() + 2);
        stages.push((Stage::Original, text.to_string()));
        let mut text = text.to_string();
        for (stage, filter) in &self.filters {
            text = filter.filter(&text);
            stages.push((*stage, text.clone()));
        }
        stages.push((Stage::Final, text));
        PreprocessingTrace { stages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preprocessor() -> Preprocessor {
        let table = NormalizationTable::new([
            ("yg", "yang"),
            ("gk", "tidak"),
            ("gpp", "tidak apa apa"),
            ("mbg", "makan bergizi gratis"),
        ])
        .unwrap();
        let stopwords = StopwordSet::new(["yang", "di", "dan", "itu", "ini", "apa"]);
        Preprocessor::new(table, stopwords).unwrap()
    }

    fn is_clean(text: &str) -> bool {
        text.chars().all(|c| c.is_ascii_lowercase() || c == ' ')
            && !text.starts_with(' ')
            && !text.ends_with(' ')
            && !text.contains("  ")
    }

    #[test]
    fn test_full_pipeline() {
        let p = preprocessor();
        assert_eq!(
            "program bagus sekali",
            p.preprocess("Program ini BAGUS sekali!!! http://x.co @gov #mbg")
        );
    }

    #[test]
    fn test_trace_stages() {
        let p = preprocessor();
        let trace = p.trace("Program ini BAGUS sekali!!! http://x.co @gov #mbg");
        assert_eq!(
            "Program ini BAGUS sekali!!! http://x.co @gov #mbg",
            trace.original()
        );
        assert_eq!(
            "program ini bagus sekali!!! http://x.co @gov #mbg",
            trace.get(Stage::CaseFolding)
        );
        assert_eq!(
            "program ini bagus sekali!!!  @gov #mbg",
            trace.get(Stage::RemoveUrls)
        );
        assert_eq!(
            "program ini bagus sekali!!!   ",
            trace.get(Stage::RemoveMentionsHashtags)
        );
        assert_eq!(
            "program ini bagus sekali      ",
            trace.get(Stage::RemoveNonAlpha)
        );
        assert_eq!(
            "program ini bagus sekali",
            trace.get(Stage::RemoveExtraWhitespace)
        );
        assert_eq!("program ini bagus sekali", trace.get(Stage::NormalizeSlang));
        assert_eq!("program bagus sekali", trace.get(Stage::RemoveStopwords));
        assert_eq!("program bagus sekali", trace.get(Stage::RemoveShortWords));
        assert_eq!("program bagus sekali", trace.final_text());
    }

    #[test]
    fn test_slang_then_stopwords() {
        let p = preprocessor();
        let trace = p.trace("yg gk ada gunax");
        assert_eq!("yang tidak ada gunax", trace.get(Stage::NormalizeSlang));
        assert_eq!("tidak ada gunax", trace.final_text());
    }

    #[test]
    fn test_expanded_words_are_split_again() {
        let p = preprocessor();
        // "gpp" expands to "tidak apa apa" and the expanded "apa" is a stopword.
        assert_eq!("tidak kok", p.preprocess("gpp kok"));
        assert_eq!("makan bergizi gratis enak", p.preprocess("#x MBG enak"));
    }

    #[test]
    fn test_only_stopwords() {
        let p = preprocessor();
        assert_eq!("", p.preprocess("yang di dan itu"));
    }

    #[test]
    fn test_empty_input() {
        let p = preprocessor();
        assert_eq!("", p.preprocess(""));
        let trace = p.trace("");
        assert_eq!(Stage::ALL.len(), trace.len());
        assert!(trace.iter().all(|(_, text)| text.is_empty()));
    }

    #[test]
    fn test_stage_ids_are_fixed() {
        let p = preprocessor();
        for input in ["", "12345 !!!", "Halo @a", "a b c", "yang di"] {
            let ids: Vec<_> = p.trace(input).iter().map(|(s, _)| s.id()).collect();
            assert_eq!(
                vec![
                    "original",
                    "case_folding",
                    "remove_urls",
                    "remove_mentions_hashtags",
                    "remove_non_alpha",
                    "remove_extra_whitespace",
                    "normalize_slang",
                    "remove_stopwords",
                    "remove_short_words",
                    "final",
                ],
                ids
            );
        }
    }

    #[test]
    fn test_trace_matches_preprocess() {
        let p = preprocessor();
        for input in [
            "",
            "   ",
            "1234 5678",
            "GPP kok!!! ~ http://a.b",
            "Mantap 👍👍 program MBG-nya",
            "İstanbul ÇOK güzel",
            "a\tb\nc\r\nd",
            "www.x.id#tag@user",
        ] {
            let cleaned = p.preprocess(input);
            assert_eq!(cleaned, p.trace(input).final_text());
            assert!(is_clean(&cleaned), "{:?} -> {:?}", input, cleaned);
        }
    }

    #[test]
    fn test_min_word_length() {
        let p = preprocessor().min_word_length(4);
        assert_eq!("bagus sekali", p.preprocess("ok bagus sekali"));
    }
}
