//! Handle system identifiers: format validation and dereferencing against
//! hdl.handle.net.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::{
    options::Options,
    plugin::{Context, DataWrapper, ValidationResult, Validator},
};

use super::request;

static HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:https?://)?hdl\.handle\.net/|hdl:)?(?P<id>\d[^\s/]*/\S+)$").unwrap()
});

pub struct Handle;

impl Validator for Handle {
    fn supports(&self, datatype: &str, _options: &Options) -> bool {
        matches!(datatype.to_ascii_lowercase().as_str(), "handle" | "hdl")
    }

    fn validate(&self, _datatype: &str, value: &str, ctx: &Context<'_>) -> ValidationResult {
        let mut r = ValidationResult::new();

        let id = match HANDLE_RE.captures(value).and_then(|c| c.name("id")) {
            Some(id) => {
                r.info("Handle meets the format criteria");
                id.as_str().to_owned()
            }
            None => {
                r.error("Handle does not match the form of a Handle");
                return r;
            }
        };

        let prefixed = value.starts_with("http://hdl.handle.net")
            || value.starts_with("https://hdl.handle.net")
            || value.starts_with("hdl:")
            || value.starts_with("hdl.handle.net");
        if !prefixed {
            r.warn("The handle has no prefix, which may make it ambiguous in some contexts");
            r.correction(format!("https://hdl.handle.net/{id}"));
        } else if value.starts_with("hdl.handle.net") {
            r.warn("The handle does not carry a protocol prefix");
            r.correction(format!("https://{value}"));
        }

        validate_realism(&id, ctx, &mut r);
        r
    }
}

fn validate_realism(id: &str, ctx: &Context<'_>, r: &mut ValidationResult) {
    let url = format!("https://hdl.handle.net/{id}");
    let Some(response) = request(ctx, &url, None, "handle.net", r) else {
        return;
    };

    if response.is_denied() {
        r.error(
            "Unable to locate the Handle in the handle.net redirect service, \
             so even if this Handle is real, it is broken",
        );
    } else if response.is_server_error() {
        r.warn("handle.net returned a server error on retrieving this Handle");
    } else {
        r.info("handle.net successfully responded to this Handle");
        r.data = Some(Arc::new(HandleRecord {
            url: response.final_url,
        }));
    }
}

/// Handle onto a resolved handle: the URL the handle server redirected to.
pub struct HandleRecord {
    url: String,
}

impl DataWrapper for HandleRecord {
    fn source_name(&self) -> &str {
        "handle"
    }

    fn get(&self, datatype: &str) -> Vec<String> {
        match datatype.to_ascii_lowercase().as_str() {
            "publication_identifier" | "url" | "uri" => vec![self.url.clone()],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(value: &str) -> Option<String> {
        HANDLE_RE
            .captures(value)
            .and_then(|c| c.name("id"))
            .map(|m| m.as_str().to_owned())
    }

    #[test]
    fn recognizes_prefixed_forms() {
        for form in [
            "10378.1/123456",
            "hdl:10378.1/123456",
            "http://hdl.handle.net/10378.1/123456",
            "https://hdl.handle.net/10378.1/123456",
        ] {
            assert_eq!(extract(form).as_deref(), Some("10378.1/123456"), "{form}");
        }
    }

    #[test]
    fn rejects_non_handles() {
        assert_eq!(extract("not a handle"), None);
        assert_eq!(extract("abc/def"), None);
    }

    #[test]
    fn record_exposes_url_as_identifier() {
        let record = HandleRecord {
            url: "https://example.org/item/1".to_owned(),
        };
        assert_eq!(
            record.get("publication_identifier"),
            ["https://example.org/item/1"]
        );
        assert!(record.get("title").is_empty());
    }
}
