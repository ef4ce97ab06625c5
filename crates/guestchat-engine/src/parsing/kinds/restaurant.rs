use crate::parsing::sections::Heading;

use super::SpaServices;

pub struct RestaurantList;

impl RestaurantList {
    pub const HEADING: Heading = Heading::exact("Available Restaurants:");
    /// The restaurant section stops where the spa section begins.
    pub const TERMINATOR: &'static str = SpaServices::HEADING.literal;
    /// Entries are numbered `1.`, `2.` ...; the marker is a digit run followed by this.
    pub const ENTRY_MARKER: u8 = b'.';
    /// Separates the restaurant name from trailing details on the header line.
    pub const NAME_END: &'static str = " (";
    pub const HOURS_PATTERN: &'static str = r"(?i)\d{1,2}:\d{2}\s*[AP]M.*";
    pub const LOCATION_PATTERN: &'static str = r"(?i)Floor \d+|Main Lobby|Lobby|Poolside|Outdoor";
}
