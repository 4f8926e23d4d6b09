//! DOI validation against the doi.org redirect service, and semantic DOI
//! comparison.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::{
    options::Options,
    plugin::{Comparator, ComparisonResult, Context, ValidationResult, Validator},
};

use super::{crossref::CrossRefCsl, request};

/// A DOI, optionally carrying one of the prefixes in common circulation.
static DOI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:https?://)?(?:dx\.)?doi\.org/|(?:https?://)?hdl\.handle\.net/|doi:|info:doi:)?(?P<id>10\.[^\s/]+/\S+)$",
    )
    .unwrap()
});

const CSL_JSON: &str = "application/vnd.citationstyles.csl+json";

/// The operational `10.x/...` tail, with any recognized prefix stripped.
fn operational_part(value: &str) -> Option<&str> {
    DOI_RE
        .captures(value)
        .and_then(|captures| captures.name("id"))
        .map(|id| id.as_str())
}

pub struct Doi;

impl Validator for Doi {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        datatype.eq_ignore_ascii_case("doi")
    }

    fn validate(&self, _datatype: &str, value: &str, ctx: &Context<'_>) -> ValidationResult {
        let mut r = ValidationResult::new();

        let id = match operational_part(value) {
            Some(id) => {
                r.info("DOI meets the format criteria");
                id.to_owned()
            }
            None => {
                r.error("DOI does not match the form of a DOI");
                return r;
            }
        };

        validate_realism(&id, ctx, &mut r);
        r
    }
}

/// Dereference the DOI at doi.org, asking for the CSL JSON rendition of
/// the record; a hit becomes a CrossRef data wrapper.
fn validate_realism(id: &str, ctx: &Context<'_>, r: &mut ValidationResult) {
    let url = format!("https://doi.org/{id}");
    let Some(response) = request(ctx, &url, Some(CSL_JSON), "doi.org", r) else {
        return;
    };

    if response.is_denied() {
        r.error(
            "Unable to locate DOI in the doi.org redirect service, \
             so even if this DOI is real, it is broken",
        );
    } else if response.is_server_error() {
        r.warn("doi.org returned a server error on retrieving this DOI");
    } else {
        match CrossRefCsl::from_json(&response.body) {
            Ok(wrapper) => {
                r.info("doi.org successfully responded to this DOI");
                r.data = Some(Arc::new(wrapper));
            }
            Err(_) => {
                r.warn("the CSL document returned for this DOI could not be parsed");
            }
        }
    }
}

/// Semantic DOI equivalence: strip recognized prefixes from both sides and
/// compare the operational parts byte for byte.
pub struct DoiCompare;

impl Comparator for DoiCompare {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        matches!(
            datatype.to_ascii_lowercase().as_str(),
            "doi" | "publication_identifier"
        )
    }

    fn compare(
        &self,
        _datatype: &str,
        original: &str,
        comparison: &str,
        _options: &Options,
    ) -> ComparisonResult {
        match (operational_part(original), operational_part(comparison)) {
            (Some(a), Some(b)) if a == b => ComparisonResult::matched(),
            _ => ComparisonResult::unmatched(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_prefixed_forms() {
        for form in [
            "10.1000/xyz",
            "doi:10.1000/xyz",
            "info:doi:10.1000/xyz",
            "http://dx.doi.org/10.1000/xyz",
            "https://doi.org/10.1000/xyz",
        ] {
            assert_eq!(operational_part(form), Some("10.1000/xyz"), "{form}");
        }
    }

    #[test]
    fn rejects_non_dois() {
        assert_eq!(operational_part("11.1000/xyz"), None);
        assert_eq!(operational_part("10.1000"), None);
        assert_eq!(operational_part("not a doi"), None);
    }

    #[test]
    fn comparator_matches_across_prefixes() {
        let options = Options::default();
        let result = DoiCompare.compare(
            "publication_identifier",
            "10.1000/xyz",
            "http://dx.doi.org/10.1000/xyz",
            &options,
        );
        assert!(result.success);

        let result = DoiCompare.compare("doi", "10.1000/xyz", "10.1000/other", &options);
        assert!(!result.success);
    }

    #[test]
    fn comparator_never_matches_unparseable_input() {
        let options = Options::default();
        assert!(
            !DoiCompare
                .compare("doi", "garbage", "garbage", &options)
                .success
        );
    }
}
