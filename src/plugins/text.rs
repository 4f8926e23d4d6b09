//! Free-text validation and the exact/fuzzy comparison primitives shared
//! by the text-like comparators.

use crate::{
    options::Options,
    plugin::{Comparator, ComparisonResult, Context, ValidationResult, Validator},
};

/// Exact equivalence after trimming and ASCII case folding.
pub(crate) fn equivalent(original: &str, comparison: &str) -> ComparisonResult {
    if original.trim().eq_ignore_ascii_case(comparison.trim()) {
        ComparisonResult::matched()
    } else {
        ComparisonResult::unmatched()
    }
}

/// Fuzzy equivalence: the normalized Levenshtein ratio must strictly
/// exceed the configured threshold. A fuzzy (non-identical) match carries
/// the authority spelling as a suggested correction.
pub(crate) fn levenshtein(original: &str, comparison: &str, options: &Options) -> ComparisonResult {
    let ratio = strsim::normalized_levenshtein(original, comparison);
    if ratio > options.levenshtein_ratio_threshold {
        let mut result = ComparisonResult::matched();
        if original != comparison {
            result.correction(comparison);
        }
        result
    } else {
        ComparisonResult::unmatched()
    }
}

/// Sanity checks on title/abstract/description lengths.
pub struct TitleAbstract;

impl Validator for TitleAbstract {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        matches!(
            datatype.to_ascii_lowercase().as_str(),
            "title" | "description" | "abstract"
        )
    }

    fn validate(&self, datatype: &str, value: &str, _ctx: &Context<'_>) -> ValidationResult {
        let mut r = ValidationResult::new();
        let length = value.chars().count();

        if datatype.eq_ignore_ascii_case("title") {
            if length <= 1 {
                r.warn("Title is one character or less long; it might not really be the title");
            } else if length <= 3 {
                r.warn("Title is very short; it might not really be the title");
            }
        } else if length <= 1 {
            r.warn("Description/abstract is one character or less long; very unlikely to be valid");
        } else if length <= 10 {
            r.warn(
                "Description/abstract is very short; it may not be the actual text, \
                 or may be inadequate",
            );
        }
        r
    }
}

/// Fuzzy equivalence of titles and abstracts.
pub struct TitleAbstractCompare;

impl Comparator for TitleAbstractCompare {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        matches!(datatype.to_ascii_lowercase().as_str(), "title" | "abstract")
    }

    fn compare(
        &self,
        _datatype: &str,
        original: &str,
        comparison: &str,
        options: &Options,
    ) -> ComparisonResult {
        levenshtein(original, comparison, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equivalence_ignores_case_and_padding() {
        assert!(equivalent(" 1234-5679 ", "1234-5679").success);
        assert!(equivalent("Nuclear Physics B", "nuclear physics b").success);
        assert!(!equivalent("a", "b").success);
    }

    #[test]
    fn ratio_at_the_threshold_fails() {
        let options = Options {
            levenshtein_ratio_threshold: 0.75,
            ..Options::default()
        };
        // one edit across four characters: ratio exactly 0.75
        assert!(!levenshtein("abcd", "abce", &options).success);
    }

    #[test]
    fn ratio_above_the_threshold_matches_with_correction() {
        let options = Options {
            levenshtein_ratio_threshold: 0.70,
            ..Options::default()
        };
        let result = levenshtein("abcd", "abce", &options);
        assert!(result.success);
        assert_eq!(result.corrections(), ["abce"]);
    }

    #[test]
    fn identical_strings_match_without_correction() {
        let result = levenshtein("same", "same", &Options::default());
        assert!(result.success);
        assert!(result.corrections().is_empty());
    }

    #[test]
    fn short_title_warns() {
        let options = Options::default();
        let ctx_client = NoClient;
        let ctx = Context {
            options: &options,
            client: &ctx_client,
        };
        let r = TitleAbstract.validate("title", "It", &ctx);
        assert!(r.has_warnings());
        let r = TitleAbstract.validate("title", "A perfectly reasonable title", &ctx);
        assert!(!r.has_warnings());
        let r = TitleAbstract.validate("abstract", "too short", &ctx);
        assert!(r.has_warnings());
    }

    struct NoClient;

    impl crate::http::AuthorityClient for NoClient {
        fn get(
            &self,
            _url: &str,
            _accept: Option<&str>,
        ) -> Result<crate::http::AuthorityResponse, crate::error::AuthorityError> {
            Err(crate::error::AuthorityError::Network("offline".into()))
        }
    }
}
