//! Residual text: the message with every claimed span cut out.
//!
//! Instead of re-running substitutions over the message, the cleaner works
//! from the spans the extractors already claimed, so whatever was turned
//! into a block is exactly what disappears from the prose.

use super::{
    kinds::SectionBreak,
    sections::find_terminator,
    text::{Span, slice},
};

/// The run from the first `###` marker outside `claimed` to the end of the
/// message.
///
/// A marker inside an already claimed span (a confirmation line, say) goes
/// with that span and does not start the cut.
pub fn trailing_break(message: &str, claimed: &[Span]) -> Option<Span> {
    let mut from = 0;
    while let Some(at) = find_terminator(message, SectionBreak::MARKER, from) {
        let marker = Span::new(at, at + SectionBreak::MARKER.len());
        if !claimed.iter().any(|sp| sp.contains(marker)) {
            return Some(Span::new(at, message.len()));
        }
        from = at + 1;
    }
    None
}

/// Concatenates the gaps between `claimed` spans and trims the result.
///
/// `claimed` must be merged (see [`Span::merge_all`]).
pub fn residual(message: &str, claimed: &[Span]) -> String {
    let kept: String = Span::gaps(claimed, message.len())
        .into_iter()
        .map(|gap| slice(message, gap))
        .collect();
    kept.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_break_runs_to_end() {
        let msg = "Hello\n### More options\nline";
        assert_eq!(trailing_break(msg, &[]), Some(Span::new(6, msg.len())));
        assert_eq!(trailing_break("no marker", &[]), None);
    }

    #[test]
    fn trailing_break_skips_claimed_markers() {
        let msg = "✅ booked ### ref 42\nMore ### tail";
        let line_end = msg.find('\n').unwrap();
        let tail = msg.rfind("###").unwrap();
        assert_eq!(
            trailing_break(msg, &[Span::new(0, line_end)]),
            Some(Span::new(tail, msg.len()))
        );
        assert_eq!(trailing_break("✅ ### only", &[Span::new(0, 12)]), None);
    }

    #[test]
    fn residual_joins_gaps_and_trims() {
        let msg = "  keep this, drop that, keep end  ";
        let drop = msg.find("drop that, ").unwrap();
        let claimed = [Span::new(drop, drop + "drop that, ".len())];
        assert_eq!(residual(msg, &claimed), "keep this, keep end");
    }

    #[test]
    fn residual_of_fully_claimed_message_is_empty() {
        assert_eq!(residual("abc", &[Span::new(0, 3)]), "");
    }

    #[test]
    fn residual_keeps_line_breaks_between_gaps() {
        let msg = "Here you go.\n✅ Spa appointment booked\nEnjoy!";
        let glyph = msg.find('✅').unwrap();
        let line_end = msg.rfind('\n').unwrap();
        assert_eq!(
            residual(msg, &[Span::new(glyph, line_end)]),
            "Here you go.\n\nEnjoy!"
        );
    }
}
