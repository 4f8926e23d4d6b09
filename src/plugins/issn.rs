//! ISSN format validation and exact comparison.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    options::Options,
    plugin::{Comparator, ComparisonResult, Context, ValidationResult, Validator},
};

use super::text;

static HYPHENATED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{3}[0-9Xx]$").unwrap());
static BARE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{7}[0-9Xx]$").unwrap());

pub struct Issn;

impl Validator for Issn {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        datatype.eq_ignore_ascii_case("issn")
    }

    fn validate(&self, _datatype: &str, value: &str, _ctx: &Context<'_>) -> ValidationResult {
        let mut r = ValidationResult::new();
        validate_format(value, &mut r);
        r
    }
}

fn validate_format(value: &str, r: &mut ValidationResult) {
    if HYPHENATED.is_match(value) {
        // canonical form, nothing to flag
    } else if BARE.is_match(value) {
        r.warn(
            "ISSN consists of 8 valid digits but is not hyphenated; \
             the recommended form is nnnn-nnnn",
        );
        r.correction(format!("{}-{}", &value[..4], &value[4..]));
    } else {
        r.error("ISSN does not pass the format check; expected the form nnnn-nnnn");
        return;
    }

    let expected = checksum(value);
    let last = value
        .chars()
        .next_back()
        .map(|c| c.to_ascii_uppercase());
    if last == Some(expected) {
        r.info("ISSN check digit agrees with the calculated checksum");
    } else {
        r.error("ISSN check digit does not match the calculated checksum");
    }
}

/// Mod-11 check digit over the first seven digits, weights 8 down to 2.
fn checksum(issn: &str) -> char {
    let sum: u32 = issn
        .chars()
        .filter(|c| *c != '-')
        .take(7)
        .enumerate()
        .map(|(i, c)| c.to_digit(10).unwrap_or(0) * (8 - i as u32))
        .sum();

    match 11 - (sum % 11) {
        11 => '0',
        10 => 'X',
        digit => char::from_digit(digit, 11).unwrap_or('0'),
    }
}

/// Exact equivalence of two ISSNs.
pub struct IssnCompare;

impl Comparator for IssnCompare {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        datatype.eq_ignore_ascii_case("issn")
    }

    fn compare(
        &self,
        _datatype: &str,
        original: &str,
        comparison: &str,
        _options: &Options,
    ) -> ComparisonResult {
        text::equivalent(original, comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(value: &str) -> ValidationResult {
        let mut r = ValidationResult::new();
        validate_format(value, &mut r);
        r
    }

    #[test]
    fn hyphenated_with_valid_checksum() {
        let r = run("1234-5679");
        assert!(!r.has_errors());
        assert!(!r.has_warnings());
        assert_eq!(r.infos().len(), 1);
    }

    #[test]
    fn bare_digits_get_hyphenation_correction() {
        let r = run("12345679");
        assert!(!r.has_errors());
        assert!(r.has_warnings());
        assert_eq!(r.corrections(), ["1234-5679"]);
    }

    #[test]
    fn checksum_x_digit() {
        // 2434-561X is a real ISSN whose check digit is X
        let r = run("2434-561X");
        assert!(!r.has_errors());
    }

    #[test]
    fn wrong_check_digit_is_an_error() {
        let r = run("1234-5678");
        assert!(r.has_errors());
    }

    #[test]
    fn malformed_is_an_error() {
        assert!(run("12-345679").has_errors());
        assert!(run("abcd-efgh").has_errors());
    }
}
