//! TOML configuration for the city catalog.
//!
//! ```toml
//! [limits]
//! price_products = 10
//!
//! [vocabulary]
//! price_terms = ["299", "cheap"]
//!
//! [[city]]
//! name = "Pune"
//! areas = ["Baner", "Wakad"]
//! extra_phrases = ["पुण्यात RO भाड्याने"]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::engine::{GeneratorLimits, KeywordSetGenerator};
use crate::types::{KwResult, Locality};
use crate::vocab::{Vocabulary, VocabularyOverrides};

/// One `[[city]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CityEntry {
    pub name: String,
    /// URL slug; derived from `name` when absent.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub areas: Vec<String>,
    #[serde(default)]
    pub extra_phrases: Vec<String>,
}

impl CityEntry {
    pub fn locality(&self) -> Locality {
        Locality {
            name: self.name.clone(),
            areas: self.areas.clone(),
            extra_phrases: self.extra_phrases.clone(),
        }
    }

    /// The configured slug, or one derived from the name.
    pub fn slug(&self) -> String {
        match &self.slug {
            Some(slug) => slug.clone(),
            None => slugify(&self.name),
        }
    }
}

/// Parsed catalog configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub limits: GeneratorLimits,
    pub vocabulary: VocabularyOverrides,
    #[serde(rename = "city")]
    pub cities: Vec<CityEntry>,
}

impl CatalogConfig {
    pub fn from_toml_str(s: &str) -> KwResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> KwResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!(
            "loaded catalog config from {} ({} cities)",
            path.display(),
            config.cities.len()
        );
        Ok(config)
    }

    /// A generator using the configured limits and vocabulary overrides.
    pub fn generator(&self) -> KeywordSetGenerator {
        KeywordSetGenerator::new()
            .with_vocabulary(Vocabulary::builtin().with_overrides(&self.vocabulary))
            .with_limits(self.limits)
    }
}

/// Lowercase `name`, collapse runs of non-word characters into `-` and trim
/// leading/trailing dashes.
///
/// Word characters are alphanumerics plus combining marks, so Indic conjuncts
/// such as "दिल्ली" stay in one piece. Zero-width joiners are dropped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if is_zero_width_joiner(c) {
            continue;
        }
        if c.is_alphanumeric() || is_combining_mark(c) {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

fn is_zero_width_joiner(c: char) -> bool {
    matches!(c, '\u{200C}' | '\u{200D}')
}

/// Combining diacritics, and vowel signs, viramas and other marks of the
/// Indic blocks (Devanagari through Sinhala). Dandas are punctuation.
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}'
        | '\u{1AB0}'..='\u{1AFF}'
        | '\u{1DC0}'..='\u{1DFF}'
        | '\u{20D0}'..='\u{20FF}'
        | '\u{0900}'..='\u{0963}'
        | '\u{0966}'..='\u{0DFF}')
}
