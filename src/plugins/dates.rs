//! Date parsing and similarity.
//!
//! Dates arrive in anything from bare years to full day-month-year forms
//! with either endianness, so parsing tries every accepted shape and the
//! comparator succeeds when any parse of one side equals any parse of the
//! other.

use chrono::{Datelike, NaiveDate};

use crate::{
    options::Options,
    plugin::{Comparator, ComparisonResult, Context, ValidationResult, Validator},
};

/// A date at whatever granularity the input carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DateParts {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
}

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Month number for an English month name or abbreviation.
pub(crate) fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|m| lower.starts_with(m))
        .map(|i| i as u32 + 1)
}

/// Numeric day-month-year forms, with the year in either position and the
/// day on either side of the month.
const FULL_NUMERIC: [&str; 11] = [
    "%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", // year first
    "%d-%m-%Y", "%d/%m/%Y", "%d.%m.%Y", // day first
    "%m-%d-%Y", "%m/%d/%Y", // month first
    "%Y-%d-%m", "%Y/%d/%m", // year first, day first
    "%Y%m%d",
];

/// Forms with a named month.
const FULL_NAMED: [&str; 6] = [
    "%d %B %Y", "%d %b %Y", "%B %d, %Y", "%b %d, %Y", "%B %d %Y", "%b %d %Y",
];

/// Every plausible reading of the value across the accepted shapes,
/// deduplicated. Empty when the value does not parse as a date at all.
fn parse_all(value: &str) -> Vec<DateParts> {
    let value = value.trim();
    let mut parses = Vec::new();
    let mut push = |parts: DateParts| {
        if !parses.contains(&parts) {
            parses.push(parts);
        }
    };

    for format in FULL_NUMERIC.iter().chain(&FULL_NAMED) {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            push(DateParts {
                year: date.year(),
                month: Some(date.month()),
                day: Some(date.day()),
            });
        }
    }

    // bare year
    if value.len() == 4 {
        if let Ok(year) = value.parse::<i32>() {
            push(DateParts {
                year,
                month: None,
                day: None,
            });
        }
    }

    // year-month and month-year at month granularity
    for separator in ['-', '/', '.', ' '] {
        if let Some((left, right)) = value.split_once(separator) {
            if let Some(parts) = year_month(left.trim(), right.trim()) {
                push(parts);
            }
            if let Some(parts) = year_month(right.trim(), left.trim()) {
                push(parts);
            }
        }
    }

    parses
}

fn year_month(year: &str, month: &str) -> Option<DateParts> {
    if year.len() != 4 {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month = match month.parse::<u32>() {
        Ok(number) if (1..=12).contains(&number) => number,
        Ok(_) => return None,
        Err(_) => month_number(month)?,
    };
    Some(DateParts {
        year,
        month: Some(month),
        day: None,
    })
}

pub struct DateValidator;

impl Validator for DateValidator {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        datatype.eq_ignore_ascii_case("date")
    }

    fn validate(&self, _datatype: &str, value: &str, _ctx: &Context<'_>) -> ValidationResult {
        let mut r = ValidationResult::new();
        if parse_all(value).is_empty() {
            r.error("Unable to parse the supplied date");
        } else {
            r.info("Date was successfully parsed");
        }
        r
    }
}

/// Two date strings are similar when any reading of one equals any reading
/// of the other.
pub struct PublishedDateCompare;

impl Comparator for PublishedDateCompare {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        matches!(
            datatype.to_ascii_lowercase().as_str(),
            "issued_date" | "published_date"
        )
    }

    fn compare(
        &self,
        _datatype: &str,
        original: &str,
        comparison: &str,
        _options: &Options,
    ) -> ComparisonResult {
        let originals = parse_all(original);
        let comparisons = parse_all(comparison);
        let matched = originals
            .iter()
            .any(|o| comparisons.iter().any(|c| o == c));
        if matched {
            ComparisonResult::matched()
        } else {
            ComparisonResult::unmatched()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(a: &str, b: &str) -> bool {
        PublishedDateCompare
            .compare("published_date", a, b, &Options::default())
            .success
    }

    #[test]
    fn month_names_map_to_numbers() {
        assert_eq!(month_number("Jun"), Some(6));
        assert_eq!(month_number("november"), Some(11));
        assert_eq!(month_number("frimaire"), None);
    }

    #[test]
    fn parses_common_forms() {
        assert!(!parse_all("2001-11-21").is_empty());
        assert!(!parse_all("21/11/2001").is_empty());
        assert!(!parse_all("2001").is_empty());
        assert!(!parse_all("2001-11").is_empty());
        assert!(!parse_all("Nov 2001").is_empty());
        assert!(parse_all("not a date").is_empty());
    }

    #[test]
    fn similarity_across_endianness() {
        assert!(compare("2001-11-21", "21/11/2001"));
        assert!(compare("2001-11", "Nov 2001"));
        assert!(compare("2001", "2001"));
        assert!(!compare("2001-11-21", "2002-11-21"));
    }

    #[test]
    fn ambiguous_readings_can_match_either_way() {
        // 03/04/2001 reads as 3 April or 4 March; both candidates count
        assert!(compare("03/04/2001", "2001-04-03"));
        assert!(compare("03/04/2001", "2001-03-04"));
    }

    #[test]
    fn granularities_do_not_cross_match() {
        assert!(!compare("2001", "2001-11"));
    }

    #[test]
    fn unparseable_sides_never_match() {
        assert!(!compare("garbled", "garbled"));
    }
}
