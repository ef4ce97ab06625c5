//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders parsed blocks into a stable, line-oriented text
//!   form for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (claimed spans in
//!   bounds and merged, fixed block order, residual text free of structure)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
