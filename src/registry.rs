//! Build-scoped set of matched call texts.

use std::collections::HashSet;

/// Deduplicated call texts collected over one build.
///
/// Entries are keyed on the raw call text, so `Drupal.t('a')` and
/// `(Drupal).t('a')` are two entries even though the manifest renders them
/// identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationRegistry {
    /// Raw call texts
    entries: HashSet<String>,
}

impl TranslationRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a call text. Returns `false` if it was already present.
    pub fn insert(&mut self, text: &str) -> bool {
        if self.entries.contains(text) {
            return false;
        }
        self.entries.insert(text.to_string())
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains(text)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in no particular order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
