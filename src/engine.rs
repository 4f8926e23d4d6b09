//! # Validation engine
//! This module implements the two-pass dispatcher over a [`FieldSet`]:
//! per-value validation ([`Engine::validate_field`]) followed by
//! cross-referencing against every authority record harvested from the
//! validation results ([`Engine::validate_fieldset`]).
//!
//! All iteration (validators, comparators, fields, values, wrappers) is in
//! stable registration/insertion order, so two runs over the same input
//! with the same registry serialize byte-identically.

use std::sync::Arc;

use indexmap::IndexMap;
use log::debug;

use crate::{
    error::Error,
    fieldset::{Additional, FieldSet},
    http::AuthorityClient,
    options::Options,
    plugin::{Comparator, Context, DataWrapper, SharedData, ValidationResult},
    registry::Registry,
};

pub struct Engine<'r> {
    registry: &'r Registry,
    client: Box<dyn AuthorityClient>,
    options: Options,
}

impl<'r> Engine<'r> {
    pub fn new(registry: &'r Registry, client: Box<dyn AuthorityClient>, options: Options) -> Self {
        Self {
            registry,
            client,
            options,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Run every applicable validator over a single `(datatype, value)`
    /// pair, stamping each result with the validator's registered name.
    /// Results appear in registration order; an empty list means no
    /// registered validator supports the datatype.
    pub fn validate_field(&self, datatype: &str, value: &str) -> Vec<ValidationResult> {
        let ctx = Context {
            options: &self.options,
            client: self.client.as_ref(),
        };

        let mut results = Vec::new();
        for (name, validator) in self.registry.validators() {
            if validator.supports(datatype, &self.options) {
                let mut result = validator.validate(datatype, value, &ctx);
                result.set_provenance(name);
                results.push(result);
            }
        }
        results
    }

    /// Validate every value of every field, then cross-reference the field
    /// set against all authority records the validators surfaced.
    pub fn validate_fieldset(&self, fieldset: &mut FieldSet) {
        let names: Vec<String> = fieldset.fields().map(str::to_owned).collect();

        // Pass one: individual validation, which may also hand us
        // authority records to cross-reference against.
        for name in &names {
            let datatype = match fieldset.datatype(name) {
                Some(datatype) => datatype.to_owned(),
                None => continue,
            };
            for value in fieldset.values(name).to_vec() {
                debug!("validating {name}[{value}] as {datatype}");
                let results = self.validate_field(&datatype, &value);
                fieldset.record_validations(name, &value, results);
            }
        }

        let wrappers = harvest(fieldset, &names);
        if wrappers.is_empty() {
            return;
        }
        debug!("harvested {} authority record(s)", wrappers.len());

        // Pass two: compare each field's values against every authority
        // record that can speak to its crossref datatype.
        for name in &names {
            let crossref = match fieldset.crossref(name) {
                Some(crossref) => crossref.to_owned(),
                None => continue,
            };

            let comparators: Vec<(&str, &dyn Comparator)> = self
                .registry
                .comparators()
                .filter(|(_, c)| c.supports(&crossref, &self.options))
                .collect();
            if comparators.is_empty() {
                continue;
            }

            let originals = fieldset.values(name).to_vec();
            let mut register: IndexMap<String, Vec<_>> = IndexMap::new();
            let mut additionals: IndexMap<String, Vec<Additional>> = IndexMap::new();

            for wrapper in &wrappers {
                let compare = wrapper.get(&crossref);
                if compare.is_empty() {
                    continue;
                }
                let unmatched = self.list_compare(
                    &mut register,
                    &crossref,
                    &originals,
                    &compare,
                    &comparators,
                    wrapper.as_ref(),
                );
                for value in unmatched {
                    additionals.entry(value.clone()).or_default().push(Additional {
                        value,
                        source: wrapper.source_name().to_owned(),
                    });
                }
            }

            if !register.is_empty() {
                fieldset.record_comparisons(name, register);
            }
            if !additionals.is_empty() {
                fieldset.record_additionals(name, additionals);
            }
        }
    }

    /// Parse an input document with the first generator supporting the
    /// model type and validate every resulting field set.
    pub fn validate_model(&self, modeltype: &str, input: &[u8]) -> Result<Vec<FieldSet>, Error> {
        let generator = self
            .registry
            .generators()
            .find(|(_, g)| g.supports(modeltype, &self.options));

        let (name, generator) = match generator {
            Some(found) => found,
            None => return Err(Error::UnsupportedModelType(modeltype.to_owned())),
        };
        debug!("generating field sets for '{modeltype}' with {name}");

        let mut fieldsets = generator.generate(modeltype, input, &self.options)?;
        for fieldset in &mut fieldsets {
            self.validate_fieldset(fieldset);
        }
        Ok(fieldsets)
    }

    /// Compare every original value against every authority value with
    /// every selected comparator, appending successes to the register and
    /// returning the authority values no original matched.
    ///
    /// An original with no success anywhere still gets an (empty) register
    /// entry, marking the value as attempted-but-unmatched.
    fn list_compare(
        &self,
        register: &mut IndexMap<String, Vec<crate::plugin::ComparisonResult>>,
        datatype: &str,
        originals: &[String],
        compare: &[String],
        comparators: &[(&str, &dyn Comparator)],
        source: &dyn DataWrapper,
    ) -> Vec<String> {
        let mut unmatched: Vec<String> = compare.to_vec();

        for original in originals {
            for candidate in compare {
                for (name, comparator) in comparators {
                    let mut result =
                        comparator.compare(datatype, original, candidate, &self.options);
                    result.set_attribution(name, source.source_name(), candidate);
                    if result.success {
                        register.entry(original.clone()).or_default().push(result);
                        if let Some(position) = unmatched.iter().position(|v| v == candidate) {
                            unmatched.remove(position);
                        }
                    }
                }
            }
            if !register.contains_key(original.as_str()) {
                register.insert(original.clone(), Vec::new());
            }
        }

        unmatched
    }
}

/// Collect every authority record attached to a validation result, in
/// field/value/result order, deduplicated by handle identity.
fn harvest(fieldset: &FieldSet, names: &[String]) -> Vec<SharedData> {
    let mut wrappers: Vec<SharedData> = Vec::new();
    for name in names {
        for value in fieldset.values(name) {
            let Some(results) = fieldset.validations(name, value) else {
                continue;
            };
            for result in results {
                if let Some(wrapper) = &result.data {
                    if !wrappers.iter().any(|seen| Arc::ptr_eq(seen, wrapper)) {
                        wrappers.push(Arc::clone(wrapper));
                    }
                }
            }
        }
    }
    wrappers
}
