//! Strata UI Components
//!
//! Dioxus components that render from a resolved [`TokenSet`].
//!
//! ## Conventions
//!
//! - Every component takes `tokens: Arc<TokenSet>` as a prop. Nothing reads
//!   ambient theme state, so a mode switch is a new `Arc` passed down.
//! - Styling is inline and computed by plain functions (`*_style`) that can
//!   be tested without a renderer.
//! - Icons and illustrations looked up by string render nothing when the
//!   name is unknown, with a `tracing` warning.
//!
//! [`TokenSet`]: strata_tokens::TokenSet

pub mod components;
pub mod style;

pub use components::*;
pub use style::Style;
