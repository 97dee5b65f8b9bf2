//! Renders the registry into the `translations.js` asset.
//!
//! Each call becomes one `// <call>` line. Drupal's JavaScript translation
//! harvester reads these comments from the emitted file, so only the call text
//! matters, not what the file would do if executed.

use std::borrow::Cow;
use std::fmt;

use crate::extractor::{
    NAMESPACE,
    WRAPPED_NAMESPACE,
};
use crate::registry::TranslationRegistry;

/// File name of the emitted asset.
pub const MANIFEST_FILE_NAME: &str = "translations.js";

/// Prefix written before every call.
pub const LINE_PREFIX: &str = "// ";

/// Rewrites the first `(Drupal)` in a call text to `Drupal`.
#[must_use]
pub fn normalize(text: &str) -> Cow<'_, str> {
    if text.contains(WRAPPED_NAMESPACE) {
        Cow::Owned(text.replacen(WRAPPED_NAMESPACE, NAMESPACE, 1))
    } else {
        Cow::Borrowed(text)
    }
}

/// Sorted, normalized manifest lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Rendered lines, prefix included
    lines: Vec<String>,
}

impl Manifest {
    /// Builds the manifest for a registry.
    ///
    /// Entries are ordered by their raw text before normalization, so a
    /// `(Drupal)` call sorts ahead of every `Drupal` call.
    #[must_use]
    pub fn from_registry(registry: &TranslationRegistry) -> Self {
        let mut entries: Vec<&str> = registry.values().collect();
        entries.sort_unstable();

        let lines =
            entries.into_iter().map(|entry| format!("{LINE_PREFIX}{}", normalize(entry))).collect();
        Self { lines }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Joins the lines with `\n`, without a trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
