//! Combinatorial keyword generation for a single locality.
//!
//! Five independent expansion passes feed one insertion-ordered set, then the
//! locality's hand-authored phrases are merged verbatim. No pass removes or
//! rewrites what an earlier pass added.

use serde::{Deserialize, Serialize};

use crate::types::{KeywordSet, KwError, KwResult, Locality};
use crate::vocab::Vocabulary;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Prefix lengths applied to the product and rental tables in the price and
/// intent passes. The base pass always uses the full tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorLimits {
    /// Products combined with price terms (default: 10).
    pub price_products: usize,
    /// Rental terms combined with price terms (default: 10).
    pub price_rentals: usize,
    /// Products combined with intent modifiers (default: 5).
    pub intent_products: usize,
    /// Rental terms combined with intent modifiers (default: 5).
    pub intent_rentals: usize,
}

impl Default for GeneratorLimits {
    fn default() -> Self {
        Self {
            price_products: 10,
            price_rentals: 10,
            intent_products: 5,
            intent_rentals: 5,
        }
    }
}

/// Candidate counts per pass, before deduplication against earlier passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub base: usize,
    pub price: usize,
    pub intent: usize,
    pub hyperlocal: usize,
    pub localized: usize,
    pub extra: usize,
    /// Size of the final set.
    pub unique: usize,
}

impl GenerationReport {
    /// Total candidates emitted across all passes.
    pub fn candidates(&self) -> usize {
        self.base + self.price + self.intent + self.hyperlocal + self.localized + self.extra
    }

    /// Candidates dropped as exact duplicates.
    pub fn duplicates(&self) -> usize {
        self.candidates() - self.unique
    }
}

/// Expands vocabulary tables and one locality into a deduplicated keyword set.
///
/// The generator holds no mutable state; one instance can serve any number of
/// localities from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct KeywordSetGenerator {
    vocabulary: Vocabulary,
    limits: GeneratorLimits,
}

impl KeywordSetGenerator {
    /// A generator over the built-in vocabulary with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn with_limits(mut self, limits: GeneratorLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn limits(&self) -> GeneratorLimits {
        self.limits
    }

    /// Generate the keyword set for `locality`.
    ///
    /// Fails with [`KwError::InvalidInput`] if the name is empty. Empty area
    /// and phrase lists only skip the passes that depend on them.
    pub fn generate(&self, locality: &Locality) -> KwResult<KeywordSet> {
        self.generate_with_report(locality).map(|(set, _)| set)
    }

    /// Like [`generate`](Self::generate), also returning per-pass counts.
    pub fn generate_with_report(
        &self,
        locality: &Locality,
    ) -> KwResult<(KeywordSet, GenerationReport)> {
        if locality.name.is_empty() {
            return Err(KwError::InvalidInput(
                "locality name must not be empty".to_string(),
            ));
        }

        let name = locality.name.as_str();
        let mut set = KeywordSet::with_capacity(self.estimated_size(locality));
        let mut report = GenerationReport {
            base: self.base_pass(&mut set, name),
            price: self.price_pass(&mut set, name),
            intent: self.intent_pass(&mut set, name),
            hyperlocal: hyperlocal_pass(&mut set, name, &locality.areas),
            localized: self.localized_pass(&mut set, name),
            extra: locality.extra_phrases.len(),
            unique: 0,
        };
        set.extend(locality.extra_phrases.iter().map(String::as_str));
        report.unique = set.len();

        log::debug!(
            "generated {} keywords for '{}' ({} candidates, {} duplicates)",
            report.unique,
            name,
            report.candidates(),
            report.duplicates()
        );

        Ok((set, report))
    }

    /// Upper bound on the output size, used to presize the set.
    fn estimated_size(&self, locality: &Locality) -> usize {
        let v = &self.vocabulary;
        let l = &self.limits;
        let price = v.product_types.prefix(l.price_products).len()
            * v.rental_terms.prefix(l.price_rentals).len()
            * v.price_terms.len();
        let intent = v.product_types.prefix(l.intent_products).len()
            * v.rental_terms.prefix(l.intent_rentals).len()
            * v.intent_modifiers.len();
        2 * (v.product_types.len() * v.rental_terms.len()
            + price
            + intent
            + v.localized_phrase_templates.len())
            + HYPERLOCAL_TEMPLATES * locality.areas.len()
            + locality.extra_phrases.len()
    }

    // -----------------------------------------------------------------------
    // Passes. Each returns the number of candidates it emitted.
    // -----------------------------------------------------------------------

    fn base_pass(&self, set: &mut KeywordSet, name: &str) -> usize {
        let mut emitted = 0;
        for product in self.vocabulary.product_types.entries() {
            for rental in self.vocabulary.rental_terms.entries() {
                set.insert(format!("{product} {rental} in {name}"));
                set.insert(format!("{product} {rental} {name}"));
                emitted += 2;
            }
        }
        emitted
    }

    fn price_pass(&self, set: &mut KeywordSet, name: &str) -> usize {
        let products = self.vocabulary.product_types.prefix(self.limits.price_products);
        let rentals = self.vocabulary.rental_terms.prefix(self.limits.price_rentals);
        let mut emitted = 0;
        for product in products {
            for rental in rentals {
                for price in self.vocabulary.price_terms.entries() {
                    set.insert(format!("{product} {rental} {price} {name}"));
                    set.insert(format!("{product} {rental} {name} {price}"));
                    emitted += 2;
                }
            }
        }
        emitted
    }

    fn intent_pass(&self, set: &mut KeywordSet, name: &str) -> usize {
        let products = self.vocabulary.product_types.prefix(self.limits.intent_products);
        let rentals = self.vocabulary.rental_terms.prefix(self.limits.intent_rentals);
        let mut emitted = 0;
        for product in products {
            for rental in rentals {
                for intent in self.vocabulary.intent_modifiers.entries() {
                    set.insert(format!("{product} {rental} {intent} {name}"));
                    set.insert(format!("{product} {rental} {name} {intent}"));
                    emitted += 2;
                }
            }
        }
        emitted
    }

    fn localized_pass(&self, set: &mut KeywordSet, name: &str) -> usize {
        let mut emitted = 0;
        for template in self.vocabulary.localized_phrase_templates.entries() {
            set.insert(format!("RO {template} {name}"));
            set.insert(format!("Water purifier {template} {name}"));
            emitted += 2;
        }
        emitted
    }
}

/// Number of fixed templates emitted per sub-area.
const HYPERLOCAL_TEMPLATES: usize = 4;

/// The fixed hyperlocal templates for one sub-area. Uses generic product
/// phrasing rather than the product table.
///
/// Every template ends with or contains the locality name, including
/// "RO rent near {area} {name}", so each generated keyword names its city.
pub fn hyperlocal_phrases(area: &str, name: &str) -> [String; HYPERLOCAL_TEMPLATES] {
    [
        format!("RO on rent in {area} {name}"),
        format!("Water purifier rental {area} {name}"),
        format!("RO rent near {area} {name}"),
        format!("{name} {area} RO rental"),
    ]
}

fn hyperlocal_pass(set: &mut KeywordSet, name: &str, areas: &[String]) -> usize {
    let mut emitted = 0;
    for area in areas {
        set.extend(hyperlocal_phrases(area, name));
        emitted += HYPERLOCAL_TEMPLATES;
    }
    emitted
}
