//! A served geography and its identifying data.

use serde::{Deserialize, Serialize};

/// A city (or other served geography) to generate keywords for.
///
/// `name` is interpolated verbatim into every template. No trimming or case
/// change is applied, so "Pune" and "pune" produce distinct keyword sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality {
    pub name: String,
    /// Named sub-areas (neighbourhoods) of the locality, in display order.
    #[serde(default)]
    pub areas: Vec<String>,
    /// Hand-authored phrases merged into the output verbatim.
    #[serde(default)]
    pub extra_phrases: Vec<String>,
}

impl Locality {
    /// A locality with no sub-areas and no extra phrases.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            areas: Vec::new(),
            extra_phrases: Vec::new(),
        }
    }

    pub fn with_areas<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.areas = areas.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_extra_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_phrases = phrases.into_iter().map(Into::into).collect();
        self
    }
}
