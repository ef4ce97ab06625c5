use super::span::Span;

/// A reference to a single line in the message with its content span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of the line content, without `\n` or `\r\n`.
    pub content: Span,
    /// The line content.
    pub text: &'a str,
}

/// Returns an iterator over lines with their byte spans.
///
/// Unlike `str::lines` this keeps track of offsets, so callers can claim a
/// line's span from the original message.
pub fn lines_with_spans(s: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    s.split_inclusive('\n').map(move |raw| {
        let start = offset;
        offset += raw.len();
        let text = raw.trim_end_matches(['\r', '\n']);
        LineRef {
            content: Span::new(start, start + text.len()),
            text,
        }
    })
}
