use serde::Serialize;

use crate::parsing::types::{RestaurantSummary, SpaServiceSummary};

/// A request raised by the UI from a rendered block.
///
/// Serialises as `{"action": "quick_book", "data": {"type": ..., "item": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "data", rename_all = "snake_case")]
pub enum QuickAction {
    QuickBook(QuickBook),
}

impl QuickAction {
    pub const QUICK_BOOK: &'static str = "quick_book";

    /// The action name handed to callbacks.
    pub fn action(&self) -> &'static str {
        match self {
            QuickAction::QuickBook(_) => Self::QUICK_BOOK,
        }
    }

    pub fn data(&self) -> &QuickBook {
        match self {
            QuickAction::QuickBook(data) => data,
        }
    }
}

/// The item a quick booking refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "item", rename_all = "snake_case")]
pub enum QuickBook {
    Restaurant(RestaurantSummary),
    Spa(SpaServiceSummary),
}

impl QuickBook {
    pub fn item_type(&self) -> &'static str {
        match self {
            QuickBook::Restaurant(_) => "restaurant",
            QuickBook::Spa(_) => "spa",
        }
    }

    pub fn item_name(&self) -> &str {
        match self {
            QuickBook::Restaurant(r) => &r.name,
            QuickBook::Spa(s) => &s.name,
        }
    }
}

/// Receives quick actions triggered from rendered blocks.
///
/// Implemented for any `FnMut(&QuickAction)`, so tests and UIs can pass a
/// closure.
pub trait QuickActionHandler {
    fn on_quick_action(&mut self, action: &QuickAction);
}

impl<F> QuickActionHandler for F
where
    F: FnMut(&QuickAction),
{
    fn on_quick_action(&mut self, action: &QuickAction) {
        (self)(action)
    }
}
