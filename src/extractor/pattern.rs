//! Regular-expression call matching.
//!
//! Both grammars use lazy quantifiers for the string literals and trailing
//! arguments, so a call ends at the first `)` that lets the whole pattern
//! succeed. Parentheses inside trailing arguments are not balanced: given
//! `Drupal.t('a', fn(x))` the match stops at `fn(x)`. Manifests harvested by
//! downstream tooling depend on this exact behavior.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{
    CallMatch,
    CallShape,
};

/// `Drupal.t('...')` and `(Drupal).t('...')`, with any trailing arguments.
#[allow(clippy::expect_used)]
static TRANSLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\(Drupal\)|Drupal)\.t\((['"`][\s\S]*?['"`](?:,[\s\S]*?)*?)\)"#)
        .expect("translate pattern is valid")
});

/// Whitespace as JavaScript's `\s` defines it. Unlike the Unicode `\s` of
/// `regex`, it includes U+FEFF and excludes U+0085.
const JS_WHITESPACE: &str =
    r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// `Drupal.formatPlural(count, '...', '...', args, options?)`.
///
/// The count is ASCII digits only.
#[allow(clippy::expect_used)]
static FORMAT_PLURAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        concat!(
            r"(\(Drupal\)|Drupal)\.formatPlural\(([0-9]+),",
            r#"{ws}*(['"`][\s\S]*?['"`]),"#,
            r#"{ws}*(['"`][\s\S]*?['"`]),"#,
            r"{ws}*([\s\S]*?)(?:,{ws}*([\s\S]*?))?\)",
        ),
        ws = JS_WHITESPACE
    ))
    .expect("formatPlural pattern is valid")
});

/// Returns the compiled pattern for a call shape.
fn regex_for(shape: CallShape) -> &'static Regex {
    match shape {
        CallShape::Translate => &TRANSLATE_REGEX,
        CallShape::FormatPlural => &FORMAT_PLURAL_REGEX,
    }
}

/// Finds every non-overlapping `shape` call in `source`, left to right.
pub(super) fn find_lazy(source: &str, shape: CallShape) -> Vec<CallMatch<'_>> {
    regex_for(shape)
        .find_iter(source)
        .map(|m| CallMatch { shape, text: m.as_str(), range: m.range() })
        .collect()
}
