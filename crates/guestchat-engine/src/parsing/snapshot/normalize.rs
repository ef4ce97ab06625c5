use std::fmt::Write;

use crate::parsing::{ParsedMessage, types::ContentBlock};

/// Renders the blocks of a parsed message as indented text.
///
/// Absent fields print as `~` and empty strings as `""`, so neither leaves
/// trailing whitespace in a snapshot.
pub fn normalize(parsed: &ParsedMessage) -> String {
    let mut out = String::new();
    for block in &parsed.blocks {
        let _ = writeln!(out, "{}", block.kind().as_str());
        match block {
            ContentBlock::RestaurantList(items) => {
                for r in items {
                    let _ = writeln!(out, "  - name: {}", show(&r.name));
                    let _ = writeln!(out, "    details: {}", show(&r.details));
                    let _ = writeln!(out, "    hours: {}", opt(&r.hours));
                    let _ = writeln!(out, "    location: {}", opt(&r.location));
                }
            }
            ContentBlock::SpaServices(items) => {
                for s in items {
                    let _ = writeln!(out, "  - name: {}", show(&s.name));
                    let _ = writeln!(out, "    duration: {}", opt(&s.duration));
                    let _ = writeln!(out, "    description: {}", opt(&s.description));
                    let _ = writeln!(out, "    price: {}", opt(&s.price));
                }
            }
            ContentBlock::BookingConfirmation(items) => {
                for c in items {
                    let _ = writeln!(out, "  - {}: {}", c.category.label(), show(&c.message));
                }
            }
            ContentBlock::Text(text) => {
                for line in text.lines() {
                    if line.is_empty() {
                        let _ = writeln!(out, "  |");
                    } else {
                        let _ = writeln!(out, "  | {line}");
                    }
                }
            }
        }
    }
    out
}

fn opt(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("~")
}

fn show(s: &str) -> &str {
    if s.is_empty() { "\"\"" } else { s }
}
