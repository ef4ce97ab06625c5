use super::span::Span;

/// Borrows the text for a span.
///
/// Out-of-range or non-boundary spans yield an empty string rather than
/// panicking.
pub fn slice(s: &str, sp: Span) -> &str {
    s.get(sp.start..sp.end).unwrap_or("")
}

/// Extracts text for a span, truncating to at most `max` bytes with "..."
/// suffix if needed.
///
/// Used for human-readable snapshot output. Truncation backs off to the
/// previous char boundary.
pub fn preview(s: &str, sp: Span, max: usize) -> String {
    let text = slice(s, sp);
    if text.len() <= max {
        return text.to_string();
    }
    let mut cut = max;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    let mut out = text[..cut].to_string();
    out.push_str("...");
    out
}
