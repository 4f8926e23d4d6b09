//! # Built-in plugins
//! The validator, comparator, generator, and authority-adapter roster.
//! Registered names follow `<module>.<TypeName>`; see
//! [`Registry::with_builtins`](crate::registry::Registry::with_builtins).

pub mod cerif;
pub mod crossref;
pub mod csl;
pub mod dates;
pub mod doi;
pub mod handle;
pub mod isbn;
pub mod issn;
pub mod journal;
pub mod language;
pub mod number;
pub mod pmid;
pub mod text;
pub mod uri;

use itertools::Itertools;

use crate::{
    error::AuthorityError,
    http::AuthorityResponse,
    plugin::{Context, ValidationResult},
};

/// Issue a best-effort authority request. Transport failures never fail a
/// value: they become a warning on the result and `None` is returned.
/// Responses come back whatever their status; the caller maps 2xx/4xx/5xx
/// onto its own messages.
pub(crate) fn request(
    ctx: &Context<'_>,
    url: &str,
    accept: Option<&str>,
    authority: &str,
    r: &mut ValidationResult,
) -> Option<AuthorityResponse> {
    match ctx.client.get(url, accept) {
        Ok(response) => Some(response),
        Err(AuthorityError::Timeout) => {
            r.warn(format!(
                "Attempted to verify the value against {authority}, but the request timed out"
            ));
            None
        }
        Err(AuthorityError::Network(reason)) => {
            r.warn(format!(
                "Attempted to verify the value against {authority}, but the request failed: {reason}"
            ));
            None
        }
    }
}

/// Deduplicate preserving first-occurrence order, so wrapper projections
/// are reproducible.
pub(crate) fn unique(values: Vec<String>) -> Vec<String> {
    values.into_iter().unique().collect()
}
