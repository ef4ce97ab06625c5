use crate::parsing::{
    kinds::Confirmation,
    text::{Span, lines_with_spans},
    types::BookingConfirmation,
};

use super::Extraction;

/// Extracts one confirmation per line carrying the checkmark glyph, in line
/// order.
///
/// The message is the whole line with the glyph removed, but only the run
/// from the first glyph to the end of the line (not its newline) is claimed.
/// Text before the glyph stays in the prose.
pub fn extract(message: &str) -> Option<Extraction<BookingConfirmation>> {
    let mut items = vec![];
    let mut claimed = vec![];

    for line in lines_with_spans(message) {
        let Some(glyph_at) = line.text.find(Confirmation::CHECKMARK) else {
            continue;
        };
        let text = line.text.replace(Confirmation::CHECKMARK, "");
        let text = text.trim();
        items.push(BookingConfirmation {
            category: Confirmation::classify(text),
            message: text.to_string(),
        });
        claimed.push(Span::new(line.content.start + glyph_at, line.content.end));
    }

    if items.is_empty() {
        return None;
    }
    log::debug!("found {} booking confirmations", items.len());
    Some(Extraction { items, claimed })
}
