//! Shadow tokens for theming

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic shadow token keys; the set is fixed
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ShadowKey {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "2xs")]
    Xxs,
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[default]
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl ShadowKey {
    pub const ALL: [ShadowKey; 8] = [
        ShadowKey::None,
        ShadowKey::Xxs,
        ShadowKey::Xs,
        ShadowKey::Sm,
        ShadowKey::Md,
        ShadowKey::Lg,
        ShadowKey::Xl,
        ShadowKey::Xxl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Xxs => "2xs",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for ShadowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete set of shadow tokens as CSS `box-shadow` values
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowTokens {
    pub none: String,
    #[serde(rename = "2xs")]
    pub xxs: String,
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xxl: String,
}

impl ShadowTokens {
    /// Get shadow by token key
    pub fn get(&self, key: ShadowKey) -> &str {
        match key {
            ShadowKey::None => &self.none,
            ShadowKey::Xxs => &self.xxs,
            ShadowKey::Xs => &self.xs,
            ShadowKey::Sm => &self.sm,
            ShadowKey::Md => &self.md,
            ShadowKey::Lg => &self.lg,
            ShadowKey::Xl => &self.xl,
            ShadowKey::Xxl => &self.xxl,
        }
    }

    pub fn set(&mut self, key: ShadowKey, value: impl Into<String>) {
        let slot = match key {
            ShadowKey::None => &mut self.none,
            ShadowKey::Xxs => &mut self.xxs,
            ShadowKey::Xs => &mut self.xs,
            ShadowKey::Sm => &mut self.sm,
            ShadowKey::Md => &mut self.md,
            ShadowKey::Lg => &mut self.lg,
            ShadowKey::Xl => &mut self.xl,
            ShadowKey::Xxl => &mut self.xxl,
        };
        *slot = value.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShadowKey, &str)> {
        ShadowKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self {
            none: "0 0 #0000".into(),
            xxs: "0 1px rgb(0 0 0 / 0.05)".into(),
            xs: "0 1px 2px 0 rgb(0 0 0 / 0.05)".into(),
            sm: "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)".into(),
            md: "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)".into(),
            lg: "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)".into(),
            xl: "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)".into(),
            xxl: "0 25px 50px -12px rgb(0 0 0 / 0.25)".into(),
        }
    }
}
