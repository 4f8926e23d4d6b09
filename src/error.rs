//! # Error implementation
//! The main error types which result from normal usage.

use thiserror::Error;

/// Top-level engine error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("model type '{0}' is not supported by any registered generator")]
    UnsupportedModelType(String),
    #[error("failed to generate field sets: {0}")]
    Generate(#[from] GenerateError),
}

/// Failure to turn an input document into field sets.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("malformed XML document: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("document is missing required element '{0}'")]
    MissingElement(&'static str),
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Transport-level failure of an authority request.
///
/// Status codes are not errors: responses with any status are returned to
/// the caller, which maps them onto the validation message streams.
#[derive(Error, Debug)]
pub enum AuthorityError {
    #[error("request timed out")]
    Timeout,
    #[error("network failure: {0}")]
    Network(String),
}
