//! # Message Parsing
//!
//! Turns free-form assistant text into an ordered list of [`ContentBlock`]s.
//!
//! ## Pipeline
//!
//! 1. **Extract**: the restaurant, spa and confirmation extractors each scan
//!    the original message and report entities plus the spans they claim
//! 2. **Clean**: claimed spans (and the trailing `###` run) are merged and the
//!    gaps between them become the residual prose
//! 3. **Assemble**: blocks are emitted in the fixed order restaurant list,
//!    spa services, booking confirmations, text
//!
//! ## Modules
//!
//! - **`text`**: `Span`, line iteration and slicing over the message
//! - **`cursor`**: byte `Cursor` used by the span matchers
//! - **`sections`**: heading/terminator matchers producing `Section`s
//! - **`kinds`**: owners of every literal token the parser recognises
//! - **`extract`**: the three segment extractors
//! - **`cleaner`**: residual text from merged claimed spans
//! - **`types`**: the `ContentBlock` data model
//! - **`snapshot`**: normalisation and invariant checks for tests
//!
//! Parsing never fails. Unrecognised or malformed input falls through to the
//! text block.

pub mod cleaner;
pub mod cursor;
pub mod extract;
pub mod kinds;
pub mod sections;
pub mod snapshot;
pub mod text;
pub mod types;

use extract::Extraction;
use text::Span;
use types::ContentBlock;

/// The blocks of one message together with the spans that were consumed
/// as structured content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    pub blocks: Vec<ContentBlock>,
    /// Merged (sorted, non-overlapping) claimed spans.
    pub claimed: Vec<Span>,
}

impl ParsedMessage {
    /// The residual prose, or `""` when nothing was left.
    pub fn residual(&self) -> &str {
        match self.blocks.last() {
            Some(ContentBlock::Text(text)) => text,
            _ => "",
        }
    }
}

/// Parses `message` into content blocks.
///
/// An empty or fully structured message produces no text block, so `""`
/// yields an empty list.
pub fn transform(message: &str) -> Vec<ContentBlock> {
    parse_message(message).blocks
}

/// Parses `message`, keeping the claimed spans alongside the blocks.
pub fn parse_message(message: &str) -> ParsedMessage {
    let mut blocks = vec![];
    let mut claimed = vec![];

    blocks.extend(collect(
        extract::restaurant::extract(message),
        &mut claimed,
        ContentBlock::RestaurantList,
    ));
    blocks.extend(collect(
        extract::spa::extract(message),
        &mut claimed,
        ContentBlock::SpaServices,
    ));
    blocks.extend(collect(
        extract::confirmation::extract(message),
        &mut claimed,
        ContentBlock::BookingConfirmation,
    ));

    let trailing = cleaner::trailing_break(message, &claimed);
    claimed.extend(trailing);
    let claimed = Span::merge_all(claimed);

    let residual = cleaner::residual(message, &claimed);
    if !residual.is_empty() {
        blocks.push(ContentBlock::Text(residual));
    }

    log::debug!(
        "parsed message of {} bytes into {} blocks ({} claimed spans)",
        message.len(),
        blocks.len(),
        claimed.len()
    );
    ParsedMessage { blocks, claimed }
}

/// Records an extraction's claimed spans and wraps its items in a block,
/// unless there were none.
fn collect<T>(
    found: Option<Extraction<T>>,
    claimed: &mut Vec<Span>,
    wrap: fn(Vec<T>) -> ContentBlock,
) -> Option<ContentBlock> {
    let found = found?;
    claimed.extend(found.claimed);
    (!found.items.is_empty()).then(|| wrap(found.items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use types::{BlockKind, BookingCategory, RestaurantSummary, SpaServiceSummary};

    #[test]
    fn plain_message_is_one_text_block() {
        assert_eq!(
            transform("Hello, how can I help you today?"),
            vec![ContentBlock::Text("Hello, how can I help you today?".into())]
        );
    }

    #[test]
    fn empty_message_has_no_blocks() {
        assert!(transform("").is_empty());
        assert!(transform("  \n\t").is_empty());
    }

    #[test]
    fn restaurant_example() {
        let blocks = transform("Available Restaurants:\n1. **The Grill** (Floor 2) - 5:00 PM - 11:00 PM\n");
        assert_eq!(
            blocks,
            vec![ContentBlock::RestaurantList(vec![RestaurantSummary {
                name: "The Grill".into(),
                details: "The Grill (Floor 2) - 5:00 PM - 11:00 PM".into(),
                hours: Some("5:00 PM - 11:00 PM".into()),
                location: Some("Floor 2".into()),
            }])]
        );
    }

    #[test]
    fn spa_example() {
        let blocks = transform(
            "Available Spa Services:\n**Swedish Massage** (60 min) - Relaxing full body massage $120\n",
        );
        assert_eq!(
            blocks,
            vec![ContentBlock::SpaServices(vec![SpaServiceSummary {
                name: "Swedish Massage".into(),
                duration: Some("60 min".into()),
                description: Some("Relaxing full body massage".into()),
                price: Some("$120".into()),
            }])]
        );
    }

    #[test]
    fn mixed_message_keeps_fixed_order() {
        let msg = "Great choice! Here is what I found.\n\
                   ✅ Spa appointment booked at 3pm\n\
                   Available Restaurants:\n\
                   1. **The Grill** (Floor 2) - 5:00 PM - 11:00 PM\n\
                   Available Spa Services:\n\
                   **Swedish Massage** (60 min) - Relaxing $120\n\
                   ### Need anything else?";
        let parsed = parse_message(msg);
        let kinds: Vec<_> = parsed.blocks.iter().map(ContentBlock::kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::RestaurantList,
                BlockKind::SpaServices,
                BlockKind::BookingConfirmation,
                BlockKind::Text,
            ]
        );
        assert_eq!(parsed.residual(), "Great choice! Here is what I found.");
        snapshot::invariants(msg, &parsed);
    }

    #[test]
    fn heading_without_entries_still_leaves_prose_clean() {
        let parsed = parse_message("Sure.\nAvailable Restaurants:\n   \n");
        assert_eq!(parsed.blocks, vec![ContentBlock::Text("Sure.".into())]);
    }

    #[test]
    fn confirmations_only() {
        let blocks = transform("✅ Restaurant reservation confirmed for 2 guests\n✅ Spa appointment booked at 3pm");
        match blocks.as_slice() {
            [ContentBlock::BookingConfirmation(items)] => {
                let cats: Vec<_> = items.iter().map(|c| c.category).collect();
                assert_eq!(cats, vec![BookingCategory::Restaurant, BookingCategory::Spa]);
            }
            other => panic!("expected one confirmation block, got {other:?}"),
        }
    }

    #[test]
    fn trailing_section_break_is_not_prose() {
        assert_eq!(
            transform("Enjoy your stay!\n### Quick links\n- Spa\n- Dining"),
            vec![ContentBlock::Text("Enjoy your stay!".into())]
        );
    }
}
