use crate::parsing::{
    ParsedMessage, parse_message,
    text::{Span, preview},
    types::ContentBlock,
};

const PREVIEW_LEN: usize = 40;

/// Validates parser output invariants.
///
/// Asserts that:
/// - Claimed spans are within bounds, on char boundaries, sorted and disjoint
/// - Block kinds appear at most once and in the fixed order
/// - Structured blocks are never empty and text, if any, is last and trimmed
/// - Parsing the residual text again finds no further structure
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(message: &str, parsed: &ParsedMessage) {
    let n = message.len();
    let mut prev_end = None;
    for sp in &parsed.claimed {
        assert!(
            sp.start < sp.end && sp.end <= n,
            "claimed span out of bounds or empty: {sp:?} (message len: {n})"
        );
        assert!(
            message.is_char_boundary(sp.start) && message.is_char_boundary(sp.end),
            "claimed span splits a character: {sp:?}"
        );
        if let Some(end) = prev_end {
            assert!(
                sp.start > end,
                "claimed spans not merged: {sp:?} ({:?}) starts at or before {end}",
                preview(message, *sp, PREVIEW_LEN)
            );
        }
        prev_end = Some(sp.end);
    }

    for pair in parsed.blocks.windows(2) {
        assert!(
            pair[0].kind() < pair[1].kind(),
            "blocks out of order: {:?} before {:?}",
            pair[0].kind(),
            pair[1].kind()
        );
    }

    for block in &parsed.blocks {
        let empty = match block {
            ContentBlock::RestaurantList(items) => items.is_empty(),
            ContentBlock::SpaServices(items) => items.is_empty(),
            ContentBlock::BookingConfirmation(items) => items.is_empty(),
            ContentBlock::Text(text) => {
                assert_eq!(text.trim(), text, "text block is not trimmed");
                text.is_empty()
            }
        };
        assert!(!empty, "empty {:?} block emitted", block.kind());
    }

    let residual = parsed.residual();
    let again = parse_message(residual);
    assert!(
        again
            .blocks
            .iter()
            .all(|b| matches!(b, ContentBlock::Text(_))),
        "residual text {:?} still contains structure: {:?}",
        preview(residual, Span::new(0, residual.len()), PREVIEW_LEN),
        again.blocks
    );
    assert_eq!(
        again.residual(),
        residual,
        "residual text is not stable under re-parsing"
    );
}
