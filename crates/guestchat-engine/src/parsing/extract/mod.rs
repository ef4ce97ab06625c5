//! # Segment Extractors
//!
//! Each extractor scans the full message for one structured pattern and
//! reports both the entities it found and the spans of the message it
//! claims. Extractors are total: a missing heading yields `None`, and a
//! malformed entry degrades to `None` fields rather than aborting the pass.
//!
//! - **`restaurant`**: numbered entries under "Available Restaurants:"
//! - **`spa`**: bold-led entries under "Available Spa Services"
//! - **`confirmation`**: every line carrying the checkmark glyph

pub mod confirmation;
pub mod restaurant;
pub mod spa;

use super::text::Span;

/// What an extractor found and which parts of the message it consumed.
///
/// `claimed` may be non-empty while `items` is empty: a heading with no
/// usable entries is still structured content and is removed from the prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<T> {
    pub items: Vec<T>,
    pub claimed: Vec<Span>,
}
