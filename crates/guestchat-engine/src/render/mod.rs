//! # Rendering
//!
//! Presentation of parsed blocks for a terminal or any line-oriented UI,
//! plus the quick-action hook that lets a user book an item straight from a
//! rendered card.
//!
//! The parser itself never invokes a handler: [`RenderedMessage::trigger`]
//! is called by the UI when the user activates a call-to-action.

pub mod quick_action;
pub mod view;

pub use quick_action::{QuickAction, QuickActionHandler, QuickBook};
pub use view::{CallToAction, RenderedMessage, render_blocks};
