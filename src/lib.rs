//! # metacheck
//! Validation and cross-referencing of bibliographic metadata records.
//!
//! A metadata document is converted by a [`Generator`] into one or more
//! [`FieldSet`]s, each mapping field names to typed values. The [`Engine`]
//! then runs two passes over every field set:
//!
//! 1. **Validation**: every value is offered to each registered
//!    [`Validator`] that supports the field's datatype. Validators judge
//!    syntactic form (checksums, grammars) and, where an external authority
//!    exists for the datatype, confirm the value against it. An authority
//!    hit yields a [`DataWrapper`], an opaque handle onto the authority's
//!    record.
//! 2. **Cross-reference**: values extracted from the harvested wrappers
//!    are pairwise compared against the input values by each registered
//!    [`Comparator`] that supports the field's crossref datatype. Matches,
//!    misses, and authority values absent from the input ("additionals")
//!    are recorded on the field set.
//!
//! The enriched [`FieldSet`] carries the full evidence trail and has a
//! stable JSON projection.

pub mod engine;
pub mod error;
pub mod fieldset;
pub mod http;
pub mod logger;
pub mod options;
pub mod plugin;
pub mod plugins;
pub mod registry;

pub use self::{
    engine::Engine,
    error::{AuthorityError, Error, GenerateError},
    fieldset::{Additional, FieldSet, ValueStatus},
    http::{AuthorityClient, AuthorityResponse, UreqClient},
    options::Options,
    plugin::{
        Comparator, ComparisonResult, Context, DataWrapper, Generator, SharedData,
        ValidationResult, Validator,
    },
    registry::{Registry, RegistryBuilder},
};
