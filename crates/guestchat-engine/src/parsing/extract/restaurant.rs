use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::{
    cursor::Cursor,
    kinds::{Bold, RestaurantList},
    sections::section_span,
    text::{Span, slice},
    types::RestaurantSummary,
};

use super::Extraction;

static HOURS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(RestaurantList::HOURS_PATTERN).expect("hours pattern must compile")
});

static LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(RestaurantList::LOCATION_PATTERN).expect("location pattern must compile")
});

/// Extracts the restaurant listing, if the message has one.
///
/// The whole section (heading through the spa heading or end of message) is
/// claimed. Entries with an empty name are kept.
pub fn extract(message: &str) -> Option<Extraction<RestaurantSummary>> {
    let section = section_span(message, RestaurantList::HEADING, RestaurantList::TERMINATOR)?;

    let items: Vec<_> = split_entries(message, section.body)
        .into_iter()
        .filter_map(|sp| summarize(slice(message, sp)))
        .collect();
    log::debug!(
        "restaurant section {:?} yielded {} entries",
        section.full,
        items.len()
    );

    Some(Extraction {
        items,
        claimed: vec![section.full],
    })
}

/// Splits a section body on numbered-list markers (`1.`, `12.`).
///
/// Returns the spans between markers, including the (usually blank) text
/// before the first one.
pub fn split_entries(message: &str, body: Span) -> Vec<Span> {
    let mut cur = Cursor::new(slice(message, body), body.start);
    let mut out = vec![];
    let mut entry_start = cur.pos();

    while !cur.eof() {
        let at = cur.pos();
        if cur.eat_digits() > 0 {
            if cur.peek() == Some(RestaurantList::ENTRY_MARKER) {
                out.push(Span::new(entry_start, at));
                cur.bump(); // .
                entry_start = cur.pos();
            }
            continue;
        }
        cur.bump();
    }

    out.push(Span::new(entry_start, cur.pos()));
    out
}

/// Builds a summary from the first non-blank line of an entry.
fn summarize(entry: &str) -> Option<RestaurantSummary> {
    let header = entry.lines().map(str::trim).find(|l| !l.is_empty())?;
    let details = Bold::strip(header);

    let name = details
        .split_once(RestaurantList::NAME_END)
        .map_or(details.as_str(), |(name, _)| name)
        .trim()
        .to_string();
    let hours = HOURS
        .find(&details)
        .map(|m| m.as_str().trim().to_string());
    let location = LOCATION.find(&details).map(|m| m.as_str().to_string());

    Some(RestaurantSummary {
        name,
        details,
        hours,
        location,
    })
}
