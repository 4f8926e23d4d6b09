//! ISBN-10/13 format validation.

use crate::{
    options::Options,
    plugin::{Context, ValidationResult, Validator},
};

pub struct Isbn;

impl Validator for Isbn {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        matches!(
            datatype.to_ascii_lowercase().as_str(),
            "isbn" | "isbn10" | "isbn13"
        )
    }

    fn validate(&self, _datatype: &str, value: &str, _ctx: &Context<'_>) -> ValidationResult {
        let mut r = ValidationResult::new();
        validate_format(value, &mut r);
        r
    }
}

fn validate_format(value: &str, r: &mut ValidationResult) {
    let normalized = normalize(value);

    match normalized.len() {
        10 if is_isbn10_shaped(&normalized) => {
            let expected = checksum10(&normalized);
            if normalized.ends_with(expected) {
                r.info("ISBN is a legal 10-digit ISBN");
            } else {
                r.error(format!(
                    "ISBN check digit does not match the calculated checksum ({expected})"
                ));
            }
        }
        13 if normalized.bytes().all(|b| b.is_ascii_digit()) => {
            let expected = checksum13(&normalized);
            if normalized.ends_with(expected) {
                r.info("ISBN is a legal 13-digit ISBN");
            } else {
                r.error(format!(
                    "ISBN check digit does not match the calculated checksum ({expected})"
                ));
            }
        }
        _ => {
            r.error(
                "ISBN does not pass the format check; expected a 10 or 13 digit number \
                 (with optional hyphenation), possibly prefixed with 'ISBN:'",
            );
        }
    }
}

/// Strip spaces, hyphens, and an optional leading `ISBN:`.
fn normalize(value: &str) -> String {
    let mut normalized: String = value
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect::<String>()
        .to_ascii_uppercase();
    if let Some(rest) = normalized.strip_prefix("ISBN") {
        normalized = rest.strip_prefix(':').unwrap_or(rest).to_owned();
    }
    normalized
}

fn is_isbn10_shaped(normalized: &str) -> bool {
    let bytes = normalized.as_bytes();
    bytes[..9].iter().all(u8::is_ascii_digit) && (bytes[9].is_ascii_digit() || bytes[9] == b'X')
}

/// ISBN-10 check digit: weights 10 down to 2 over the first nine digits,
/// mod 11, with 10 written as X.
fn checksum10(normalized: &str) -> char {
    let sum: u32 = normalized
        .bytes()
        .take(9)
        .enumerate()
        .map(|(i, b)| u32::from(b - b'0') * (10 - i as u32))
        .sum();
    match (11 - sum % 11) % 11 {
        10 => 'X',
        digit => char::from_digit(digit, 10).unwrap_or('0'),
    }
}

/// ISBN-13 check digit: alternating weights 1 and 3 over the first twelve
/// digits, mod 10.
fn checksum13(normalized: &str) -> char {
    let sum: u32 = normalized
        .bytes()
        .take(12)
        .enumerate()
        .map(|(i, b)| u32::from(b - b'0') * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    char::from_digit((10 - sum % 10) % 10, 10).unwrap_or('0')
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
    fn valid_isbn13() {
        assert!(!run("9781119942399").has_errors());
        assert!(!run("978-0-596-52068-7").has_errors());
    }

    #[test]
    fn valid_isbn10() {
        assert!(!run("111994239X").has_errors());
        assert!(!run("3-642-65185-2").has_errors());
        assert!(!run("ISBN: 0-596-52068-9").has_errors());
    }

    #[test]
    fn bad_check_digit() {
        assert!(run("9781119942390").has_errors());
        assert!(run("1119942398").has_errors());
    }

    #[test]
    fn wrong_shape() {
        assert!(run("12345").has_errors());
        assert!(run("97811199423XX").has_errors());
    }
}
