//! # Plugin contracts
//! This module defines the plugin interfaces [`Validator`], [`Comparator`],
//! and [`Generator`], together with the response records they produce and
//! the [`DataWrapper`] handle onto an external authority's record.
//!
//! Plugins declare applicability through `supports`; the engine never calls
//! a plugin whose support check returned false. Plugins do not fail by
//! signature: trouble reaching an authority is folded into the response's
//! message streams (see [`ValidationResult`]).

use std::{fmt, sync::Arc};

use serde::Serialize;

use crate::{error::GenerateError, fieldset::FieldSet, http::AuthorityClient, options::Options};

/// A shared handle onto an authority record, as attached to a
/// [`ValidationResult`] and harvested by the cross-reference pass.
pub type SharedData = Arc<dyn DataWrapper>;

/// Everything a validator may need besides the value under test: the
/// options record and the authority client used for realism checks.
pub struct Context<'a> {
    pub options: &'a Options,
    pub client: &'a dyn AuthorityClient,
}

/// Judges a single `(datatype, value)` pair.
///
/// Implementations conventionally split into a syntactic `validate_format`
/// step (grammar, checksum, canonical form) and a semantic
/// `validate_realism` step (authority lookup); only `validate` is part of
/// the contract. Authority lookups must be best-effort: a timeout or server
/// error becomes a warning, an explicit denial becomes an error, and
/// neither aborts the run.
pub trait Validator: Send + Sync {
    fn supports(&self, datatype: &str, options: &Options) -> bool;

    fn validate(&self, datatype: &str, value: &str, ctx: &Context<'_>) -> ValidationResult;
}

/// Judges equivalence of two values under a crossref datatype.
///
/// `original` is the input-side value and `comparison` the authority-side
/// value. A comparator never fails: values it cannot parse compare
/// unsuccessfully.
pub trait Comparator: Send + Sync {
    fn supports(&self, datatype: &str, options: &Options) -> bool;

    fn compare(
        &self,
        datatype: &str,
        original: &str,
        comparison: &str,
        options: &Options,
    ) -> ComparisonResult;
}

/// Parses an input document of a given model type into field sets.
pub trait Generator: Send + Sync {
    fn supports(&self, modeltype: &str, options: &Options) -> bool;

    fn generate(
        &self,
        modeltype: &str,
        input: &[u8],
        options: &Options,
    ) -> Result<Vec<FieldSet>, GenerateError>;
}

/// An opaque handle onto a third-party authority's record.
///
/// `get` projects the authority's native schema onto the engine's semantic
/// datatypes; unsupported or absent datatypes yield an empty sequence. The
/// returned values are deduplicated in first-occurrence order so that runs
/// are reproducible.
pub trait DataWrapper: Send + Sync {
    /// Stable identifier of the authority, e.g. `"crossref"` or `"entrez"`.
    fn source_name(&self) -> &str;

    fn get(&self, datatype: &str) -> Vec<String>;
}

/// The outcome of one validator's judgement of one value.
///
/// A non-empty `error` stream means the value failed validation; `warn`
/// carries doubts that do not fail the value; `info` carries confirmations
/// and derived facts. `correction` proposes literal replacements for the
/// value and `alternative` proposes equivalent forms of it.
#[derive(Default, Serialize)]
pub struct ValidationResult {
    provenance: String,
    info: Vec<String>,
    warn: Vec<String>,
    error: Vec<String>,
    correction: Vec<String>,
    alternative: Vec<String>,
    /// Handle onto the authority record that confirmed the value, when one
    /// did; drives the cross-reference pass.
    #[serde(skip)]
    pub data: Option<SharedData>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.info.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warn.push(message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.error.push(message.into());
    }

    pub fn correction(&mut self, replacement: impl Into<String>) {
        self.correction.push(replacement.into());
    }

    pub fn alternative(&mut self, equivalent: impl Into<String>) {
        self.alternative.push(equivalent.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.error.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warn.is_empty()
    }

    /// Name the producing plugin was registered under. Assigned by the
    /// dispatcher; anything a plugin writes here is overwritten.
    pub fn provenance(&self) -> &str {
        &self.provenance
    }

    pub fn infos(&self) -> &[String] {
        &self.info
    }

    pub fn warnings(&self) -> &[String] {
        &self.warn
    }

    pub fn errors(&self) -> &[String] {
        &self.error
    }

    pub fn corrections(&self) -> &[String] {
        &self.correction
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternative
    }

    pub(crate) fn set_provenance(&mut self, name: &str) {
        self.provenance = name.to_owned();
    }
}

impl fmt::Debug for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationResult")
            .field("provenance", &self.provenance)
            .field("info", &self.info)
            .field("warn", &self.warn)
            .field("error", &self.error)
            .field("correction", &self.correction)
            .field("alternative", &self.alternative)
            .field("data", &self.data.as_ref().map(|w| w.source_name()))
            .finish()
    }
}

/// The outcome of one comparator's judgement of one (input, authority)
/// value pair.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComparisonResult {
    /// True iff the comparator deemed the two values equivalent under its
    /// rule. Set by the comparator; everything else is set by the engine.
    pub success: bool,
    comparator: String,
    data_source: String,
    compared_with: String,
    correction: Vec<String>,
}

impl ComparisonResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matched() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    pub fn unmatched() -> Self {
        Self::default()
    }

    pub fn correction(&mut self, replacement: impl Into<String>) {
        self.correction.push(replacement.into());
    }

    /// Name the producing comparator was registered under.
    pub fn comparator(&self) -> &str {
        &self.comparator
    }

    /// Authority that supplied the value compared against.
    pub fn data_source(&self) -> &str {
        &self.data_source
    }

    /// The literal authority-side value compared against.
    pub fn compared_with(&self) -> &str {
        &self.compared_with
    }

    pub fn corrections(&self) -> &[String] {
        &self.correction
    }

    pub(crate) fn set_attribution(&mut self, comparator: &str, source: &str, compared_with: &str) {
        self.comparator = comparator.to_owned();
        self.data_source = source.to_owned();
        self.compared_with = compared_with.to_owned();
    }
}
