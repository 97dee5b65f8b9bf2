//! Types for the extractor module

use std::ops::Range;

use serde::{
    Deserialize,
    Serialize,
};

/// Bare spelling of the localization namespace.
pub const NAMESPACE: &str = "Drupal";

/// Parenthesis-wrapped spelling of the localization namespace.
pub const WRAPPED_NAMESPACE: &str = "(Drupal)";

/// Returns true for characters JavaScript's `\s` matches.
pub(super) const fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Recognized localization call grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallShape {
    /// `Drupal.t('text', args?, options?)`
    Translate,
    /// `Drupal.formatPlural(count, 'singular', 'plural', args, options?)`
    FormatPlural,
}

impl CallShape {
    /// Every shape, in scan order.
    pub const ALL: [Self; 2] = [Self::Translate, Self::FormatPlural];

    /// Member name following the namespace token.
    #[must_use]
    pub const fn method_name(self) -> &'static str {
        match self {
            Self::Translate => "t",
            Self::FormatPlural => "formatPlural",
        }
    }
}

/// How trailing call arguments are delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMode {
    /// Shortest text that reaches a closing parenthesis. Nested parentheses in
    /// trailing arguments are not balanced.
    #[default]
    Lazy,
    /// Track parenthesis, bracket and brace depth, skipping string literals.
    Balanced,
}

/// A call expression found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallMatch<'a> {
    /// Grammar that matched
    pub shape: CallShape,
    /// Verbatim call text, namespace through closing parenthesis
    pub text: &'a str,
    /// Byte range of `text` in the scanned source
    pub range: Range<usize>,
}
