//! Span matchers for heading-delimited sections.
//!
//! A section starts at a literal heading and runs until the first terminator
//! after it, or to the end of the message when no terminator follows.

use super::{cursor::Cursor, text::Span};

/// A literal heading, optionally followed by suffixes that are consumed
/// in order when present (e.g. a plural `s` then a `:`).
#[derive(Debug, Clone, Copy)]
pub struct Heading {
    pub literal: &'static str,
    pub optional_suffixes: &'static [&'static str],
}

impl Heading {
    pub const fn exact(literal: &'static str) -> Self {
        Self {
            literal,
            optional_suffixes: &[],
        }
    }
}

/// A located section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Heading through terminator (exclusive) or end of message.
    pub full: Span,
    /// Text between the heading (with its suffixes) and the terminator.
    pub body: Span,
}

/// Finds the first occurrence of `heading` at or after `from`.
pub fn find_heading(s: &str, heading: Heading, from: usize) -> Option<Span> {
    let mut cur = Cursor::new(s, 0);
    cur.bump_n(from);
    if !cur.seek(heading.literal.as_bytes()) {
        return None;
    }
    let start = cur.pos();
    cur.bump_n(heading.literal.len());
    for suffix in heading.optional_suffixes {
        cur.eat(suffix.as_bytes());
    }
    Some(Span::new(start, cur.pos()))
}

/// Finds where a section starting at `from` ends: the start of the first
/// `terminator` occurrence, or `None` if the section runs to end of input.
pub fn find_terminator(s: &str, terminator: &str, from: usize) -> Option<usize> {
    let mut cur = Cursor::new(s, 0);
    cur.bump_n(from);
    cur.seek(terminator.as_bytes()).then(|| cur.pos())
}

/// Locates the section introduced by `heading` and closed by `terminator`.
pub fn section_span(s: &str, heading: Heading, terminator: &str) -> Option<Section> {
    let heading_span = find_heading(s, heading, 0)?;
    let end = find_terminator(s, terminator, heading_span.end).unwrap_or(s.len());
    Some(Section {
        full: Span::new(heading_span.start, end),
        body: Span::new(heading_span.end, end),
    })
}
