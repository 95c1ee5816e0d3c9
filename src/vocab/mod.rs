//! Vocabulary tables: ordered phrase fragments per keyword dimension.

pub mod tables;

use serde::{Deserialize, Serialize};

/// An ordered sequence of interchangeable phrase fragments for one dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabularyTable {
    entries: Vec<String>,
}

impl VocabularyTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The first `n` entries, or the whole table if it is shorter.
    pub fn prefix(&self, n: usize) -> &[String] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&[&str]> for VocabularyTable {
    fn from(entries: &[&str]) -> Self {
        Self::new(entries.iter().copied())
    }
}

/// The five vocabulary tables the generator combines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub product_types: VocabularyTable,
    pub rental_terms: VocabularyTable,
    pub price_terms: VocabularyTable,
    pub intent_modifiers: VocabularyTable,
    pub localized_phrase_templates: VocabularyTable,
}

impl Vocabulary {
    /// The reference tables shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            product_types: tables::PRODUCT_TYPES.into(),
            rental_terms: tables::RENTAL_TERMS.into(),
            price_terms: tables::PRICE_TERMS.into(),
            intent_modifiers: tables::INTENT_MODIFIERS.into(),
            localized_phrase_templates: tables::LOCALIZED_PHRASE_TEMPLATES.into(),
        }
    }

    /// Replace each table that has an override, keeping the rest.
    pub fn with_overrides(mut self, overrides: &VocabularyOverrides) -> Self {
        let pairs = [
            (&mut self.product_types, &overrides.product_types),
            (&mut self.rental_terms, &overrides.rental_terms),
            (&mut self.price_terms, &overrides.price_terms),
            (&mut self.intent_modifiers, &overrides.intent_modifiers),
            (
                &mut self.localized_phrase_templates,
                &overrides.localized_phrase_templates,
            ),
        ];
        for (table, replacement) in pairs {
            if let Some(entries) = replacement {
                *table = VocabularyTable::new(entries.iter().cloned());
            }
        }
        self
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Optional per-table replacements, as read from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VocabularyOverrides {
    pub product_types: Option<Vec<String>>,
    pub rental_terms: Option<Vec<String>>,
    pub price_terms: Option<Vec<String>>,
    pub intent_modifiers: Option<Vec<String>>,
    pub localized_phrase_templates: Option<Vec<String>>,
}
