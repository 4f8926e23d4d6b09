//! # Plugin registry
//! Order-preserving registries of validator, comparator, and generator
//! instances, keyed by stable plugin name. A registry is built once at
//! startup and never mutated afterwards, so it is safe to share across
//! threads.
//!
//! Plugin names follow the `<module>.<TypeName>` convention (for example
//! `issn.Issn`); the engine stamps them onto every result as provenance so
//! messages can be attributed. Registering a duplicate name replaces the
//! instance and keeps the original position.

use indexmap::IndexMap;

use crate::{
    plugin::{Comparator, Generator, Validator},
    plugins,
};

#[derive(Default)]
pub struct Registry {
    validators: IndexMap<String, Box<dyn Validator>>,
    comparators: IndexMap<String, Box<dyn Comparator>>,
    generators: IndexMap<String, Box<dyn Generator>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The full built-in plugin roster, in a fixed registration order.
    pub fn with_builtins() -> Self {
        Self::builder()
            .validator("issn.Issn", plugins::issn::Issn)
            .validator("isbn.Isbn", plugins::isbn::Isbn)
            .validator("doi.Doi", plugins::doi::Doi)
            .validator("pmid.Pmid", plugins::pmid::Pmid)
            .validator("handle.Handle", plugins::handle::Handle)
            .validator("uri.Uri", plugins::uri::Uri)
            .validator("journal.JournalName", plugins::journal::JournalName)
            .validator("text.TitleAbstract", plugins::text::TitleAbstract)
            .validator("dates.DateValidator", plugins::dates::DateValidator)
            .validator("language.Iso6391", plugins::language::Iso6391)
            .validator("language.Iso6392", plugins::language::Iso6392)
            .validator("language.LanguageName", plugins::language::LanguageName)
            .comparator("issn.IssnCompare", plugins::issn::IssnCompare)
            .comparator("doi.DoiCompare", plugins::doi::DoiCompare)
            .comparator("uri.UriCompare", plugins::uri::UriCompare)
            .comparator("journal.JournalCompare", plugins::journal::JournalCompare)
            .comparator(
                "text.TitleAbstractCompare",
                plugins::text::TitleAbstractCompare,
            )
            .comparator("number.VolumeCompare", plugins::number::VolumeCompare)
            .comparator("number.IssueCompare", plugins::number::IssueCompare)
            .comparator(
                "number.PageNumberCompare",
                plugins::number::PageNumberCompare,
            )
            .comparator(
                "dates.PublishedDateCompare",
                plugins::dates::PublishedDateCompare,
            )
            .comparator("language.LanguageCompare", plugins::language::LanguageCompare)
            .generator("cerif.CerifOutputs", plugins::cerif::CerifOutputs)
            .generator("csl.CslJson", plugins::csl::CslJson)
            .build()
    }

    /// Registered validators, in registration order.
    pub fn validators(&self) -> impl Iterator<Item = (&str, &dyn Validator)> {
        self.validators.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Registered comparators, in registration order.
    pub fn comparators(&self) -> impl Iterator<Item = (&str, &dyn Comparator)> {
        self.comparators
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Registered generators, in registration order.
    pub fn generators(&self) -> impl Iterator<Item = (&str, &dyn Generator)> {
        self.generators
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_ref()))
    }
}

#[derive(Default)]
pub struct RegistryBuilder {
    registry: Registry,
}

impl RegistryBuilder {
    pub fn validator(mut self, name: impl Into<String>, plugin: impl Validator + 'static) -> Self {
        self.registry
            .validators
            .insert(name.into(), Box::new(plugin));
        self
    }

    pub fn comparator(
        mut self,
        name: impl Into<String>,
        plugin: impl Comparator + 'static,
    ) -> Self {
        self.registry
            .comparators
            .insert(name.into(), Box::new(plugin));
        self
    }

    pub fn generator(mut self, name: impl Into<String>, plugin: impl Generator + 'static) -> Self {
        self.registry
            .generators
            .insert(name.into(), Box::new(plugin));
        self
    }

    pub fn build(self) -> Registry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_keep_registration_order() {
        let registry = Registry::with_builtins();
        let names: Vec<&str> = registry.validators().map(|(name, _)| name).collect();
        assert_eq!(names.first(), Some(&"issn.Issn"));
        assert!(names.contains(&"language.LanguageName"));

        let comparators: Vec<&str> = registry.comparators().map(|(name, _)| name).collect();
        assert_eq!(comparators.first(), Some(&"issn.IssnCompare"));
    }

    #[test]
    fn duplicate_registration_replaces_in_place() {
        let registry = Registry::builder()
            .validator("issn.Issn", plugins::issn::Issn)
            .validator("isbn.Isbn", plugins::isbn::Isbn)
            .validator("issn.Issn", plugins::issn::Issn)
            .build();
        let names: Vec<&str> = registry.validators().map(|(name, _)| name).collect();
        assert_eq!(names, ["issn.Issn", "isbn.Isbn"]);
    }
}
