//! # Kinds
//!
//! Types that own the literal tokens of each construct found in assistant
//! messages. Extractors call these constants; they never hardcode
//! `"Available Restaurants:"`, `**` or `✅` themselves.
//!
//! ## Types
//!
//! - **`RestaurantList`**: heading, terminator, entry marker and the field patterns
//! - **`SpaServices`**: heading (singular/plural tolerant), terminator, price pattern
//! - **`Confirmation`**: checkmark glyph and the category phrases
//! - **`Bold`**: the `**` emphasis marker
//! - **`SectionBreak`**: the `###` marker that closes structured content

pub mod confirmation;
pub mod markers;
pub mod restaurant;
pub mod spa;

pub use confirmation::Confirmation;
pub use markers::{Bold, SectionBreak};
pub use restaurant::RestaurantList;
pub use spa::SpaServices;
