//! SEO keyword generation for water-purifier rental city pages.
//!
//! [`KeywordSetGenerator`] expands fixed vocabulary tables and a [`Locality`]
//! into a deduplicated, deterministically ordered [`KeywordSet`].
//! [`CityCatalog`] runs it once per configured city at load time.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod types;
pub mod vocab;

pub use catalog::{CityCatalog, CityPage, META_SEPARATOR};
pub use config::{slugify, CatalogConfig, CityEntry};
pub use engine::{hyperlocal_phrases, GenerationReport, GeneratorLimits, KeywordSetGenerator};
pub use types::{KeywordSet, KwError, KwResult, Locality};
pub use vocab::{Vocabulary, VocabularyOverrides, VocabularyTable};
