//! City catalog: one landing-page record per configured locality, with its
//! keyword set computed eagerly at load time.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::config::CatalogConfig;
use crate::types::{KeywordSet, KwError, KwResult, Locality};

/// Separator used when rendering keywords into a meta tag.
pub const META_SEPARATOR: &str = ", ";

/// A city landing page's identity and SEO keywords.
#[derive(Debug, Clone, Serialize)]
pub struct CityPage {
    pub slug: String,
    pub locality: Locality,
    pub keywords: KeywordSet,
}

/// All configured city pages, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct CityCatalog {
    pages: Vec<CityPage>,
    by_slug: HashMap<String, usize>,
}

impl CityCatalog {
    /// Generate keywords for every configured city.
    ///
    /// Fails on the first city with an empty name, an empty slug or a repeated
    /// slug.
    pub fn build(config: &CatalogConfig) -> KwResult<Self> {
        let generator = config.generator();
        let mut catalog = Self::default();

        for entry in &config.cities {
            let slug = entry.slug();
            if slug.is_empty() {
                return Err(KwError::InvalidInput(format!(
                    "city '{}' has an empty slug",
                    entry.name
                )));
            }
            if catalog.by_slug.contains_key(&slug) {
                return Err(KwError::DuplicateLocality(slug));
            }
            let locality = entry.locality();
            let keywords = generator.generate(&locality)?;
            catalog.by_slug.insert(slug.clone(), catalog.pages.len());
            catalog.pages.push(CityPage {
                slug,
                locality,
                keywords,
            });
        }

        log::info!(
            "built city catalog: {} cities, {} keywords",
            catalog.pages.len(),
            catalog.pages.iter().map(|p| p.keywords.len()).sum::<usize>()
        );
        Ok(catalog)
    }

    /// Load a TOML configuration file and build the catalog from it.
    pub fn load(path: impl AsRef<Path>) -> KwResult<Self> {
        Self::build(&CatalogConfig::load(path)?)
    }

    pub fn get(&self, slug: &str) -> Option<&CityPage> {
        self.by_slug.get(slug).map(|&i| &self.pages[i])
    }

    pub fn pages(&self) -> &[CityPage] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Keywords for `slug` joined for a `<meta name="keywords">` tag.
    pub fn meta_keywords(&self, slug: &str) -> Option<String> {
        self.get(slug)
            .map(|page| page.keywords.to_meta_content(META_SEPARATOR))
    }
}
