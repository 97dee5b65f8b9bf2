//! Locates `Drupal.t` and `Drupal.formatPlural` call expressions in source text.
//!
//! The matcher never parses or evaluates the calls it finds. Every match is a
//! verbatim slice of the input.

/// Depth-tracking scanner
mod balanced;
/// Regular-expression matcher
mod pattern;
/// Extractor types
mod types;

pub use types::{
    CallMatch,
    CallShape,
    MatchMode,
    NAMESPACE,
    WRAPPED_NAMESPACE,
};

/// Finds localization calls in source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallMatcher {
    /// Argument delimiting strategy
    mode: MatchMode,
}

impl CallMatcher {
    #[must_use]
    pub const fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Finds every call of one shape, left to right, without overlaps.
    #[must_use]
    pub fn find<'a>(&self, source: &'a str, shape: CallShape) -> Vec<CallMatch<'a>> {
        match self.mode {
            MatchMode::Lazy => pattern::find_lazy(source, shape),
            MatchMode::Balanced => balanced::find_balanced(source, shape),
        }
    }

    /// Finds calls of every shape.
    ///
    /// Shapes are scanned independently, so a `Drupal.t` call nested inside
    /// the arguments of a `Drupal.formatPlural` call is reported by both scans.
    #[must_use]
    pub fn find_all<'a>(&self, source: &'a str) -> Vec<CallMatch<'a>> {
        CallShape::ALL.iter().flat_map(|&shape| self.find(source, shape)).collect()
    }
}
