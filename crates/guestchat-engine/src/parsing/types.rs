use serde::Serialize;

/// One structured unit of a parsed assistant message.
///
/// Serialises as `{"kind": "...", "payload": ...}` for front ends that
/// switch on the kind tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum ContentBlock {
    RestaurantList(Vec<RestaurantSummary>),
    SpaServices(Vec<SpaServiceSummary>),
    BookingConfirmation(Vec<BookingConfirmation>),
    /// Residual prose left after every structured span was removed.
    Text(String),
}

impl ContentBlock {
    pub fn kind(&self) -> BlockKind {
        match self {
            ContentBlock::RestaurantList(_) => BlockKind::RestaurantList,
            ContentBlock::SpaServices(_) => BlockKind::SpaServices,
            ContentBlock::BookingConfirmation(_) => BlockKind::BookingConfirmation,
            ContentBlock::Text(_) => BlockKind::Text,
        }
    }
}

/// Discriminant of a [`ContentBlock`].
///
/// Ordering follows the fixed emission and layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlockKind {
    RestaurantList,
    SpaServices,
    BookingConfirmation,
    Text,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::RestaurantList => "restaurant_list",
            BlockKind::SpaServices => "spa_services",
            BlockKind::BookingConfirmation => "booking_confirmation",
            BlockKind::Text => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantSummary {
    /// May be empty when the header line has no text before ` (`.
    pub name: String,
    /// Header line with bold markers removed.
    pub details: String,
    pub hours: Option<String>,
    pub location: Option<String>,
}

/// Spa entries without a name are dropped during extraction, so `name` is
/// always present here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpaServiceSummary {
    pub name: String,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingConfirmation {
    pub category: BookingCategory,
    /// The confirmation line without the checkmark glyph, trimmed.
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingCategory {
    Restaurant,
    Spa,
    Event,
    Service,
}

impl BookingCategory {
    pub fn label(self) -> &'static str {
        match self {
            BookingCategory::Restaurant => "Restaurant",
            BookingCategory::Spa => "Spa",
            BookingCategory::Event => "Event",
            BookingCategory::Service => "Service",
        }
    }
}
