//! Keyword generation engine.

pub mod generator;

pub use generator::{hyperlocal_phrases, GenerationReport, GeneratorLimits, KeywordSetGenerator};
