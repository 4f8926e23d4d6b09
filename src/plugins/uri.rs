//! URI syntax validation and best-effort dereferencing.

use url::Url;

use crate::{
    options::Options,
    plugin::{Comparator, ComparisonResult, Context, ValidationResult, Validator},
};

use super::{request, text};

pub struct Uri;

impl Validator for Uri {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        matches!(datatype.to_ascii_lowercase().as_str(), "uri" | "url")
    }

    fn validate(&self, _datatype: &str, value: &str, ctx: &Context<'_>) -> ValidationResult {
        let mut r = ValidationResult::new();

        if Url::parse(value).is_err() {
            r.error("URI does not match the form of an absolute URI");
            return r;
        }
        r.info("URI meets the format criteria");

        // only http(s) URIs can be dereferenced
        if value.starts_with("http") {
            validate_realism(value, ctx, &mut r);
        }
        r
    }
}

fn validate_realism(value: &str, ctx: &Context<'_>, r: &mut ValidationResult) {
    let Some(response) = request(ctx, value, None, "the remote server", r) else {
        return;
    };

    if response.is_denied() {
        r.error("HTTP URI does not resolve to a valid resource");
    } else if response.is_server_error() {
        r.warn("HTTP URI resolved to a server which failed while retrieving it");
    } else {
        r.info(
            "HTTP URI was successfully resolved, although this does not guarantee \
             it points at the document you think it points at",
        );
    }
}

/// Exact equivalence of two URIs.
pub struct UriCompare;

impl Comparator for UriCompare {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        matches!(
            datatype.to_ascii_lowercase().as_str(),
            "uri" | "url" | "publication_identifier"
        )
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
    use crate::{error::AuthorityError, http::AuthorityClient, http::AuthorityResponse};

    struct NoNetwork;

    impl AuthorityClient for NoNetwork {
        fn get(
            &self,
            _url: &str,
            _accept: Option<&str>,
        ) -> Result<AuthorityResponse, AuthorityError> {
            Err(AuthorityError::Network("offline".into()))
        }
    }

    #[test]
    fn non_http_uris_skip_dereferencing() {
        let options = Options::default();
        let ctx = Context {
            options: &options,
            client: &NoNetwork,
        };
        let r = Uri.validate("uri", "urn:isbn:9781119942399", &ctx);
        assert!(!r.has_errors());
        assert!(!r.has_warnings());
    }

    #[test]
    fn relative_references_fail_the_format_check() {
        let options = Options::default();
        let ctx = Context {
            options: &options,
            client: &NoNetwork,
        };
        let r = Uri.validate("uri", "/just/a/path", &ctx);
        assert!(r.has_errors());
    }

    #[test]
    fn unreachable_http_uri_is_a_warning() {
        let options = Options::default();
        let ctx = Context {
            options: &options,
            client: &NoNetwork,
        };
        let r = Uri.validate("url", "https://example.org/paper", &ctx);
        assert!(!r.has_errors());
        assert!(r.has_warnings());
    }
}
