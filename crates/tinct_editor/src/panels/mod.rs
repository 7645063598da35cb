//! Headless customizer panels
//!
//! Each panel edits one slice of the token set through the shared
//! [`TokenStore`](tinct_theme::TokenStore) and exposes what a view needs to
//! draw it: option chips with their active state, the current editable
//! value, and preview styles. Panels hold no state of their own; every
//! read goes through the store, so two panels over the same store never
//! disagree.

mod color;
mod radius;
mod shadow;
mod typography;

pub use color::{ColorPanel, ColorSwatch};
pub use radius::RadiusPanel;
pub use shadow::ShadowPanel;
pub use typography::TypographyPanel;
