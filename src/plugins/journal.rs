//! Journal titles.

use crate::{
    options::Options,
    plugin::{Comparator, ComparisonResult, Context, ValidationResult, Validator},
};

use super::text;

fn is_journal_datatype(datatype: &str) -> bool {
    matches!(
        datatype.to_ascii_lowercase().as_str(),
        "journal" | "journal_name" | "journal_title"
    )
}

pub struct JournalName;

impl Validator for JournalName {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        is_journal_datatype(datatype)
    }

    fn validate(&self, _datatype: &str, value: &str, _ctx: &Context<'_>) -> ValidationResult {
        let mut r = ValidationResult::new();
        if value.trim().is_empty() {
            r.error("Journal title is the empty string");
        }
        r
    }
}

/// Fuzzy equivalence of journal titles.
pub struct JournalCompare;

impl Comparator for JournalCompare {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        is_journal_datatype(datatype)
    }

    fn compare(
        &self,
        _datatype: &str,
        original: &str,
        comparison: &str,
        options: &Options,
    ) -> ComparisonResult {
        text::levenshtein(original, comparison, options)
    }
}
