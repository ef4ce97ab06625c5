use crate::parsing::types::BookingCategory;

pub struct Confirmation;

impl Confirmation {
    pub const CHECKMARK: &'static str = "✅";

    /// Category phrases in priority order; the first contained phrase wins.
    pub const CATEGORIES: [(&'static str, BookingCategory); 3] = [
        ("Restaurant reservation", BookingCategory::Restaurant),
        ("Spa appointment", BookingCategory::Spa),
        ("Event registration", BookingCategory::Event),
    ];

    /// Classifies a confirmation line, falling back to [`BookingCategory::Service`].
    pub fn classify(line: &str) -> BookingCategory {
        Self::CATEGORIES
            .iter()
            .find(|(phrase, _)| line.contains(phrase))
            .map(|(_, category)| *category)
            .unwrap_or(BookingCategory::Service)
    }
}
