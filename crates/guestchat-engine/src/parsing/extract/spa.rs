use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::{
    cursor::Cursor,
    kinds::{Bold, SpaServices},
    sections::section_span,
    text::{Span, slice},
    types::SpaServiceSummary,
};

use super::Extraction;

static PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SpaServices::PRICE_PATTERN).expect("price pattern must compile"));

/// Extracts the spa service listing, if the message has one.
///
/// The whole section (heading through the next `###` or end of message) is
/// claimed. Candidates without a name are discarded.
pub fn extract(message: &str) -> Option<Extraction<SpaServiceSummary>> {
    let section = section_span(message, SpaServices::HEADING, SpaServices::TERMINATOR)?;

    let items: Vec<_> = split_candidates(message, section.body)
        .into_iter()
        .map(|sp| slice(message, sp))
        .filter(|c| {
            c.contains(char::from(SpaServices::DURATION_OPEN))
                && c.contains(char::from(SpaServices::DURATION_CLOSE))
        })
        .filter_map(summarize)
        .collect();
    log::debug!(
        "spa section {:?} yielded {} services",
        section.full,
        items.len()
    );

    Some(Extraction {
        items,
        claimed: vec![section.full],
    })
}

/// Splits a section body at every opening bold marker.
///
/// A marker opens when it starts the body or follows whitespace, so
/// `**Name** (60 min)` stays in one candidate while the closing `**` is kept
/// inside it.
pub fn split_candidates(message: &str, body: Span) -> Vec<Span> {
    let marker = Bold::MARKER.as_bytes();
    let mut cur = Cursor::new(slice(message, body), body.start);
    let mut out = vec![];
    let mut candidate_start = cur.pos();

    while !cur.eof() {
        let opens =
            cur.starts_with(marker) && cur.prev().is_none_or(|b| b.is_ascii_whitespace());
        if opens {
            out.push(Span::new(candidate_start, cur.pos()));
            cur.bump_n(marker.len());
            candidate_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    out.push(Span::new(candidate_start, cur.pos()));
    out
}

fn summarize(candidate: &str) -> Option<SpaServiceSummary> {
    let open = candidate.find(char::from(SpaServices::DURATION_OPEN))?;
    let name = Bold::strip(&candidate[..open]).trim().to_string();
    if name.is_empty() {
        return None;
    }

    let inside = &candidate[open + 1..];
    let (duration, rest) = match inside.find(char::from(SpaServices::DURATION_CLOSE)) {
        Some(close) => (non_empty(&inside[..close]), &inside[close + 1..]),
        None => (None, inside),
    };

    let price = PRICE.find(candidate).map(|m| m.as_str().to_string());
    let description = rest
        .split_once(SpaServices::DESCRIPTION_MARKER)
        .and_then(|(_, tail)| {
            let tail = PRICE.find(tail).map_or(tail, |m| &tail[..m.start()]);
            non_empty(&Bold::strip(tail))
        });

    Some(SpaServiceSummary {
        name,
        duration,
        description,
        price,
    })
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
