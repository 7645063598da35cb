//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors (shade scales and single colors)
//! - Typography (family, sizes, weights, line heights)
//! - Border radii
//! - Shadows

mod color;
mod radius;
mod shadow;
mod typography;

pub use color::*;
pub use radius::*;
pub use shadow::*;
pub use typography::*;

use serde::{Deserialize, Serialize};

/// The root token value edited by the customizer panels
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub colors: ColorTokens,
    pub typography: TypographyTokens,
    pub radius: RadiusTokens,
    pub shadows: ShadowTokens,
}

impl Default for TokenSet {
    fn default() -> Self {
        crate::defaults::default_tokens()
    }
}
