//! Integer equality comparators for volume, issue, and page numbers.

use crate::{
    options::Options,
    plugin::{Comparator, ComparisonResult},
};

/// Equality of two integers in string form. Values that do not parse never
/// match.
fn integers_equal(original: &str, comparison: &str) -> ComparisonResult {
    match (
        original.trim().parse::<i64>(),
        comparison.trim().parse::<i64>(),
    ) {
        (Ok(a), Ok(b)) if a == b => ComparisonResult::matched(),
        _ => ComparisonResult::unmatched(),
    }
}

pub struct VolumeCompare;

impl Comparator for VolumeCompare {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        datatype.eq_ignore_ascii_case("volume")
    }

    fn compare(
        &self,
        _datatype: &str,
        original: &str,
        comparison: &str,
        _options: &Options,
    ) -> ComparisonResult {
        integers_equal(original, comparison)
    }
}

pub struct IssueCompare;

impl Comparator for IssueCompare {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        datatype.eq_ignore_ascii_case("issue")
    }

    fn compare(
        &self,
        _datatype: &str,
        original: &str,
        comparison: &str,
        _options: &Options,
    ) -> ComparisonResult {
        integers_equal(original, comparison)
    }
}

pub struct PageNumberCompare;

impl Comparator for PageNumberCompare {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        matches!(
            datatype.to_ascii_lowercase().as_str(),
            "page_count" | "start_page" | "end_page"
        )
    }

    fn compare(
        &self,
        _datatype: &str,
        original: &str,
        comparison: &str,
        _options: &Options,
    ) -> ComparisonResult {
        integers_equal(original, comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_integers_match() {
        assert!(integers_equal("614", " 614 ").success);
        assert!(!integers_equal("614", "615").success);
    }

    #[test]
    fn unparseable_values_never_match() {
        assert!(!integers_equal("xiv", "xiv").success);
        assert!(!integers_equal("12", "12a").success);
    }
}
