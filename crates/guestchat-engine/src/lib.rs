pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use models::MessageFile;
pub use parsing::{
    ParsedMessage, parse_message, transform,
    types::{
        BlockKind, BookingCategory, BookingConfirmation, ContentBlock, RestaurantSummary,
        SpaServiceSummary,
    },
};
pub use render::{QuickAction, QuickActionHandler, QuickBook, RenderedMessage, render_blocks};
