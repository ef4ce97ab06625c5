use crate::parsing::types::{ContentBlock, RestaurantSummary, SpaServiceSummary};

use super::quick_action::{QuickAction, QuickActionHandler, QuickBook};

/// A "Book Now" affordance attached to one rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    /// Index into [`RenderedMessage::lines`] where the affordance is drawn.
    pub line: usize,
    pub action: QuickAction,
}

/// Presentation lines for a message plus its call-to-actions, in block order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedMessage {
    pub lines: Vec<String>,
    pub actions: Vec<CallToAction>,
}

impl RenderedMessage {
    /// Fires `handler` for call-to-action `index`.
    ///
    /// Returns false without calling the handler when `index` is out of range.
    pub fn trigger(&self, index: usize, handler: &mut impl QuickActionHandler) -> bool {
        match self.actions.get(index) {
            Some(cta) => {
                log::info!(
                    "{} {}: {}",
                    cta.action.action(),
                    cta.action.data().item_type(),
                    cta.action.data().item_name()
                );
                handler.on_quick_action(&cta.action);
                true
            }
            None => false,
        }
    }
}

/// Renders blocks into display lines, one card group per block.
pub fn render_blocks(blocks: &[ContentBlock]) -> RenderedMessage {
    let mut out = RenderedMessage::default();

    for block in blocks {
        match block {
            ContentBlock::RestaurantList(items) => {
                out.lines.push("🍽  Restaurants".to_string());
                for r in items {
                    restaurant_card(&mut out, r);
                }
            }
            ContentBlock::SpaServices(items) => {
                out.lines.push("💆 Spa Services".to_string());
                for s in items {
                    spa_card(&mut out, s);
                }
            }
            ContentBlock::BookingConfirmation(items) => {
                out.lines.push("✅ Confirmed".to_string());
                for c in items {
                    out.lines
                        .push(format!("  • {}: {}", c.category.label(), c.message));
                }
            }
            ContentBlock::Text(text) => {
                out.lines.extend(text.lines().map(str::to_string));
            }
        }
        out.lines.push(String::new()); // Empty line between blocks
    }

    if out.lines.last().is_some_and(String::is_empty) {
        out.lines.pop();
    }
    out
}

fn restaurant_card(out: &mut RenderedMessage, r: &RestaurantSummary) {
    let title = if r.name.is_empty() { &r.details } else { &r.name };
    out.lines.push(format!("  • {title}"));

    let facts: Vec<&str> = [r.location.as_deref(), r.hours.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !facts.is_empty() {
        out.lines.push(format!("    {}", facts.join(" · ")));
    }

    push_cta(out, QuickBook::Restaurant(r.clone()));
}

fn spa_card(out: &mut RenderedMessage, s: &SpaServiceSummary) {
    let mut title = format!("  • {}", s.name);
    if let Some(duration) = &s.duration {
        title.push_str(&format!(" ({duration})"));
    }
    if let Some(price) = &s.price {
        title.push_str(&format!(" {price}"));
    }
    out.lines.push(title);

    if let Some(description) = &s.description {
        out.lines.push(format!("    {description}"));
    }

    push_cta(out, QuickBook::Spa(s.clone()));
}

fn push_cta(out: &mut RenderedMessage, data: QuickBook) {
    let number = out.actions.len() + 1;
    out.actions.push(CallToAction {
        line: out.lines.len(),
        action: QuickAction::QuickBook(data),
    });
    out.lines.push(format!("    [{number}] Book Now"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::transform;
    use pretty_assertions::assert_eq;

    const MIXED: &str = "Here you go!\n\
                         Available Restaurants:\n\
                         1. **The Grill** (Floor 2) - 5:00 PM - 11:00 PM\n\
                         2. **Azure Lounge**\n\
                         Available Spa Services:\n\
                         **Swedish Massage** (60 min) - Relaxing full body massage $120\n\
                         ✅ Event registration complete";

    #[test]
    fn renders_cards_in_block_order() {
        let rendered = render_blocks(&transform(MIXED));
        insta::assert_snapshot!(rendered.lines.join("\n"), @r"
        🍽  Restaurants
          • The Grill
            Floor 2 · 5:00 PM - 11:00 PM
            [1] Book Now
          • Azure Lounge
            [2] Book Now

        💆 Spa Services
          • Swedish Massage (60 min) $120
            Relaxing full body massage
            [3] Book Now

        ✅ Confirmed
          • Event: Event registration complete

        Here you go!
        ");
    }

    #[test]
    fn call_to_actions_point_at_their_lines() {
        let rendered = render_blocks(&transform(MIXED));
        assert_eq!(rendered.actions.len(), 3);
        for cta in &rendered.actions {
            assert!(rendered.lines[cta.line].ends_with("Book Now"));
        }
        assert_eq!(rendered.actions[2].action.data().item_name(), "Swedish Massage");
    }

    #[test]
    fn trigger_invokes_handler_with_item() {
        let rendered = render_blocks(&transform(MIXED));
        let mut booked = vec![];
        let mut handler = |a: &QuickAction| {
            booked.push((a.action(), a.data().item_type(), a.data().item_name().to_string()))
        };

        assert!(rendered.trigger(0, &mut handler));
        assert!(rendered.trigger(2, &mut handler));
        assert!(!rendered.trigger(3, &mut handler));

        assert_eq!(
            booked,
            vec![
                ("quick_book", "restaurant", "The Grill".to_string()),
                ("quick_book", "spa", "Swedish Massage".to_string()),
            ]
        );
    }

    #[test]
    fn plain_text_has_no_actions() {
        let rendered = render_blocks(&transform("Hello\nWorld"));
        assert_eq!(rendered.lines, vec!["Hello", "World"]);
        assert!(rendered.actions.is_empty());
    }

    #[test]
    fn empty_blocks_render_nothing() {
        assert_eq!(render_blocks(&[]), RenderedMessage::default());
    }
}
