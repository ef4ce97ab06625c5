use crate::parsing::sections::Heading;

pub struct SpaServices;

impl SpaServices {
    /// Matches "Available Spa Service", "Available Spa Services" and either with a colon.
    pub const HEADING: Heading = Heading {
        literal: "Available Spa Service",
        optional_suffixes: &["s", ":"],
    };
    pub const TERMINATOR: &'static str = super::SectionBreak::MARKER;
    pub const DURATION_OPEN: u8 = b'(';
    pub const DURATION_CLOSE: u8 = b')';
    pub const DESCRIPTION_MARKER: char = '-';
    /// `$` and a digit run with optional cents. Thousands separators are not
    /// part of the price, so `$1,200` yields `$1`.
    pub const PRICE_PATTERN: &'static str = r"\$\d+(?:\.\d{2})?";
}
