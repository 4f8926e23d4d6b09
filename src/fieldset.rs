//! # Field sets
//! This module implements [`FieldSet`], the central structure carried
//! through the validation pipeline: a mapping from field name to datatype,
//! crossref datatype, and values, progressively enriched with validation
//! results, comparison results, and authority-side "additional" values.
//!
//! Fields are keyed by unique name and iterated in insertion order; values
//! within a field are unique while preserving insertion order. Both
//! properties make repeat runs over the same input serialize identically.

use indexmap::IndexMap;
use serde::Serialize;

use crate::plugin::{ComparisonResult, ValidationResult};

/// Overall judgement of a single value, derived from its validation
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueStatus {
    /// At least one validator ran and none reported an error or warning.
    Pass,
    /// No errors, but at least one warning.
    PassWarn,
    /// At least one validator reported an error.
    Fail,
    /// No applicable validator ran for the value.
    Unvalidated,
}

/// An authority-supplied value absent from the input, surfaced as a
/// suggestion alongside the authority that supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Additional {
    pub value: String,
    pub source: String,
}

#[derive(Debug, Default, Serialize)]
struct Field {
    datatype: String,
    crossref: Option<String>,
    values: Vec<String>,
    validation: IndexMap<String, Vec<ValidationResult>>,
    /// `None` means cross-reference was never attempted for this field;
    /// an empty per-value list means attempted with no successful match.
    #[serde(skip_serializing_if = "Option::is_none")]
    comparison: Option<IndexMap<String, Vec<ComparisonResult>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    additional: Option<IndexMap<String, Vec<Additional>>>,
}

/// A set of named fields extracted from one input record.
///
/// Constructed empty by a [`Generator`](crate::plugin::Generator),
/// populated with [`field`](Self::field) or the incremental
/// [`add`](Self::add) / [`set_datatype`](Self::set_datatype) /
/// [`set_crossref`](Self::set_crossref) calls, enriched by the engine, and
/// then read by serializers.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct FieldSet {
    fields: IndexMap<String, Field>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Declare a field with its datatypes and one or more values. Values
    /// already present on the field are not duplicated; the datatype and
    /// crossref datatype are overwritten.
    pub fn field<I, S>(&mut self, name: &str, datatype: &str, values: I, crossref: Option<&str>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.add(name, value);
        }
        self.set_datatype(name, datatype);
        self.set_crossref(name, crossref);
    }

    /// Append a value to a field, creating the field if needed. Duplicate
    /// values are ignored.
    pub fn add(&mut self, name: &str, value: impl Into<String>) {
        let field = self.entry(name);
        let value = value.into();
        if !field.values.contains(&value) {
            field.values.push(value);
        }
    }

    pub fn set_datatype(&mut self, name: &str, datatype: &str) {
        self.entry(name).datatype = datatype.to_owned();
    }

    pub fn set_crossref(&mut self, name: &str, crossref: Option<&str>) {
        self.entry(name).crossref = crossref.map(str::to_owned);
    }

    /// Field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn datatype(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|f| f.datatype.as_str())
    }

    pub fn crossref(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|f| f.crossref.as_deref())
    }

    /// Input values of the field, unique and in insertion order.
    pub fn values(&self, name: &str) -> &[String] {
        self.fields.get(name).map_or(&[], |f| f.values.as_slice())
    }

    /// Validation results recorded for a value, or `None` when the
    /// dispatcher has not run for it. An empty slice means the dispatcher
    /// ran and found no applicable validator.
    pub fn validations(&self, name: &str, value: &str) -> Option<&[ValidationResult]> {
        self.fields
            .get(name)
            .and_then(|f| f.validation.get(value))
            .map(Vec::as_slice)
    }

    /// Comparison results recorded for a value, or `None` when
    /// cross-reference was never attempted. An empty slice means attempted
    /// with no authority match.
    pub fn comparisons(&self, name: &str, value: &str) -> Option<&[ComparisonResult]> {
        self.fields
            .get(name)
            .and_then(|f| f.comparison.as_ref())
            .and_then(|register| register.get(value))
            .map(Vec::as_slice)
    }

    /// Authority values for this field that no input value matched, in
    /// authority order, or `None` when cross-reference produced none.
    pub fn additionals(&self, name: &str) -> Option<impl Iterator<Item = &Additional>> {
        self.fields
            .get(name)
            .and_then(|f| f.additional.as_ref())
            .map(|map| map.values().flatten())
    }

    /// Derive the overall judgement of a single value from its recorded
    /// validation results.
    pub fn value_status(&self, name: &str, value: &str) -> ValueStatus {
        match self.validations(name, value) {
            None | Some([]) => ValueStatus::Unvalidated,
            Some(results) => {
                if results.iter().any(ValidationResult::has_errors) {
                    ValueStatus::Fail
                } else if results.iter().any(ValidationResult::has_warnings) {
                    ValueStatus::PassWarn
                } else {
                    ValueStatus::Pass
                }
            }
        }
    }

    pub(crate) fn record_validations(
        &mut self,
        name: &str,
        value: &str,
        results: Vec<ValidationResult>,
    ) {
        self.entry(name).validation.insert(value.to_owned(), results);
    }

    pub(crate) fn record_comparisons(
        &mut self,
        name: &str,
        register: IndexMap<String, Vec<ComparisonResult>>,
    ) {
        self.entry(name).comparison = Some(register);
    }

    pub(crate) fn record_additionals(
        &mut self,
        name: &str,
        additionals: IndexMap<String, Vec<Additional>>,
    ) {
        self.entry(name).additional = Some(additionals);
    }

    fn entry(&mut self, name: &str) -> &mut Field {
        self.fields.entry(name.to_owned()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_unique_in_insertion_order() {
        let mut fs = FieldSet::new();
        fs.field("ids", "issn", ["b", "a", "b"], Some("issn"));
        fs.add("ids", "a");
        fs.add("ids", "c");
        assert_eq!(fs.values("ids"), ["b", "a", "c"]);
    }

    #[test]
    fn fields_keep_insertion_order() {
        let mut fs = FieldSet::new();
        fs.field("z", "title", ["t"], None);
        fs.field("a", "issn", ["i"], Some("issn"));
        let names: Vec<&str> = fs.fields().collect();
        assert_eq!(names, ["z", "a"]);
    }

    #[test]
    fn value_status_distinguishes_unvalidated() {
        let mut fs = FieldSet::new();
        fs.field("f", "custom", ["v"], None);
        assert_eq!(fs.value_status("f", "v"), ValueStatus::Unvalidated);

        fs.record_validations("f", "v", Vec::new());
        assert_eq!(fs.value_status("f", "v"), ValueStatus::Unvalidated);

        let mut ok = ValidationResult::new();
        ok.info("fine");
        fs.record_validations("f", "v", vec![ok]);
        assert_eq!(fs.value_status("f", "v"), ValueStatus::Pass);

        let mut warned = ValidationResult::new();
        warned.warn("hm");
        fs.record_validations("f", "v", vec![warned]);
        assert_eq!(fs.value_status("f", "v"), ValueStatus::PassWarn);

        let mut failed = ValidationResult::new();
        failed.error("no");
        fs.record_validations("f", "v", vec![failed]);
        assert_eq!(fs.value_status("f", "v"), ValueStatus::Fail);
    }

    #[test]
    fn comparison_absent_until_recorded() {
        let mut fs = FieldSet::new();
        fs.field("f", "title", ["v"], Some("title"));
        assert!(fs.comparisons("f", "v").is_none());

        let mut register = IndexMap::new();
        register.insert("v".to_owned(), Vec::new());
        fs.record_comparisons("f", register);
        assert!(fs.comparisons("f", "v").is_some_and(|c| c.is_empty()));
    }

    #[test]
    fn serializes_without_comparison_key_when_not_attempted() {
        let mut fs = FieldSet::new();
        fs.field("f", "title", ["v"], None);
        fs.record_validations("f", "v", Vec::new());
        let json = serde_json::to_value(&fs).unwrap();
        let field = &json["f"];
        assert!(field.get("comparison").is_none());
        assert!(field.get("additional").is_none());
        assert_eq!(field["datatype"], "title");
        assert_eq!(field["values"][0], "v");
    }
}
