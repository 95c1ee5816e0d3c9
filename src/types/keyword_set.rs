//! Insertion-ordered, exact-match deduplicated keyword collection.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// The generated keywords for one locality.
///
/// Two keywords are duplicates only if they are byte-identical. Iteration
/// yields keywords in first-seen order, so identical input always produces
/// an identical sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordSet {
    keywords: IndexSet<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keywords: IndexSet::with_capacity(capacity),
        }
    }

    /// Insert a keyword. Returns `false` if it was already present.
    pub fn insert(&mut self, keyword: impl Into<String>) -> bool {
        self.keywords.insert(keyword.into())
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.keywords.into_iter().collect()
    }

    /// Join all keywords for a `<meta name="keywords">` content attribute.
    pub fn to_meta_content(&self, separator: &str) -> String {
        let mut out = String::new();
        for (i, keyword) in self.keywords.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(keyword);
        }
        out
    }
}

impl<S: Into<String>> Extend<S> for KeywordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for keyword in iter {
            self.insert(keyword);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for KeywordSet {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keywords.into_iter()
    }
}
