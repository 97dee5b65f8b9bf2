//! Depth-tracking call scanner.
//!
//! Uses the same head grammar as the regular-expression matcher but walks the
//! argument list character by character, so `Drupal.t('a', fn(x))` is captured
//! whole. Only enabled through [`MatchMode::Balanced`](super::MatchMode).
//!
//! A candidate is followed for at most [`MAX_CALL_LEN`] bytes past its head,
//! so a source full of unterminated calls is scanned in linear time.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{
    CallMatch,
    CallShape,
    is_js_whitespace,
};

/// Longest argument list followed after a call head, in bytes. Longer
/// candidates are rejected.
pub(super) const MAX_CALL_LEN: usize = 4096;

/// `Drupal.t(` and `(Drupal).t(`
#[allow(clippy::expect_used)]
static TRANSLATE_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\(Drupal\)|Drupal)\.t\(").expect("translate head pattern is valid")
});

/// `Drupal.formatPlural(` and `(Drupal).formatPlural(`
#[allow(clippy::expect_used)]
static FORMAT_PLURAL_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\(Drupal\)|Drupal)\.formatPlural\(")
        .expect("formatPlural head pattern is valid")
});

/// Forward-only reader over the source text.
struct Cursor<'a> {
    /// Whole source text
    source: &'a str,
    /// Current byte offset, always on a char boundary
    pos: usize,
    /// No character starting at or after this offset is read
    limit: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at `pos`, reading at most
    /// [`MAX_CALL_LEN`] bytes.
    const fn new(source: &'a str, pos: usize) -> Self {
        Self { source, pos, limit: pos.saturating_add(MAX_CALL_LEN) }
    }

    /// Returns the next character without consuming it.
    fn peek(&self) -> Option<char> {
        if self.pos >= self.limit {
            return None;
        }
        self.source.get(self.pos..)?.chars().next()
    }

    /// Consumes and returns the next character.
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes `expected` if it is the next character.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Skips whitespace as JavaScript defines it, line breaks included.
    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_js_whitespace) {
            self.bump();
        }
    }

    /// Consumes one or more ASCII digits.
    fn integer(&mut self) -> Option<()> {
        if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
            return None;
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
        }
        Some(())
    }

    /// Consumes a quoted literal. Backslash escapes are honored and line
    /// breaks are allowed in every quoting style.
    fn string_literal(&mut self) -> Option<()> {
        let quote = self.bump().filter(|c| matches!(c, '\'' | '"' | '`'))?;
        loop {
            match self.bump()? {
                '\\' => {
                    self.bump()?;
                }
                c if c == quote => return Some(()),
                _ => {}
            }
        }
    }

    /// Consumes arguments up to and including the closing `)` at depth zero.
    ///
    /// Returns the trimmed top-level argument texts.
    fn argument_tail(&mut self) -> Option<Vec<&'a str>> {
        let mut closers: Vec<char> = Vec::new();
        let mut segments = Vec::new();
        let mut start = self.pos;

        loop {
            let here = self.pos;
            match self.peek()? {
                '\'' | '"' | '`' => {
                    self.string_literal()?;
                    continue;
                }
                '(' => closers.push(')'),
                '[' => closers.push(']'),
                '{' => closers.push('}'),
                ')' if closers.is_empty() => {
                    segments.push(self.source.get(start..here)?.trim_matches(is_js_whitespace));
                    self.bump();
                    return Some(segments);
                }
                c @ (')' | ']' | '}') => {
                    if closers.pop() != Some(c) {
                        return None;
                    }
                }
                ',' if closers.is_empty() => {
                    segments.push(self.source.get(start..here)?.trim_matches(is_js_whitespace));
                    start = here + 1;
                }
                _ => {}
            }
            self.bump();
        }
    }

    /// Consumes the rest of a `Drupal.t(` call.
    fn translate_call(&mut self) -> Option<()> {
        self.string_literal()?;
        if self.eat(')') {
            return Some(());
        }
        if !self.eat(',') {
            return None;
        }
        self.argument_tail().map(|_| ())
    }

    /// Consumes the rest of a `Drupal.formatPlural(` call.
    fn format_plural_call(&mut self) -> Option<()> {
        self.integer()?;
        for _ in 0..2 {
            if !self.eat(',') {
                return None;
            }
            self.skip_whitespace();
            self.string_literal()?;
        }
        if !self.eat(',') {
            return None;
        }

        let mut args = self.argument_tail()?;
        // JS allows a trailing comma before `)`.
        if args.len() > 1 && args.last().is_some_and(|arg| arg.is_empty()) {
            args.pop();
        }
        let has_replacements = args.first().is_some_and(|arg| !arg.is_empty());
        (has_replacements && args.len() <= 2).then_some(())
    }
}

/// Finds every non-overlapping `shape` call in `source`, left to right.
pub(super) fn find_balanced(source: &str, shape: CallShape) -> Vec<CallMatch<'_>> {
    let head = match shape {
        CallShape::Translate => &*TRANSLATE_HEAD,
        CallShape::FormatPlural => &*FORMAT_PLURAL_HEAD,
    };

    let mut found = Vec::new();
    let mut from = 0;
    while let Some(head_match) = head.find_at(source, from) {
        let mut cursor = Cursor::new(source, head_match.end());
        let complete = match shape {
            CallShape::Translate => cursor.translate_call(),
            CallShape::FormatPlural => cursor.format_plural_call(),
        };

        match (complete, source.get(head_match.start()..cursor.pos)) {
            (Some(()), Some(text)) => {
                found.push(CallMatch { shape, text, range: head_match.start()..cursor.pos });
                from = cursor.pos;
            }
            _ => from = head_match.end(),
        }
    }
    found
}
