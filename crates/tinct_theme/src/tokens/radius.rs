//! Border radius tokens for theming

use serde::{Deserialize, Serialize};
use std::fmt;

/// Radius token keys; the set is fixed
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum RadiusKey {
    #[serde(rename = "none")]
    None,
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
    #[serde(rename = "full")]
    Full,
}

impl RadiusKey {
    pub const ALL: [RadiusKey; 7] = [
        RadiusKey::None,
        RadiusKey::Sm,
        RadiusKey::Md,
        RadiusKey::Lg,
        RadiusKey::Xl,
        RadiusKey::Xxl,
        RadiusKey::Full,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
            Self::Full => "full",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl fmt::Display for RadiusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete set of radius tokens as CSS lengths
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadiusTokens {
    pub none: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xxl: String,
    pub full: String,
}

impl RadiusTokens {
    /// Get radius by token key
    pub fn get(&self, key: RadiusKey) -> &str {
        match key {
            RadiusKey::None => &self.none,
            RadiusKey::Sm => &self.sm,
            RadiusKey::Md => &self.md,
            RadiusKey::Lg => &self.lg,
            RadiusKey::Xl => &self.xl,
            RadiusKey::Xxl => &self.xxl,
            RadiusKey::Full => &self.full,
        }
    }

    pub fn set(&mut self, key: RadiusKey, value: impl Into<String>) {
        let slot = match key {
            RadiusKey::None => &mut self.none,
            RadiusKey::Sm => &mut self.sm,
            RadiusKey::Md => &mut self.md,
            RadiusKey::Lg => &mut self.lg,
            RadiusKey::Xl => &mut self.xl,
            RadiusKey::Xxl => &mut self.xxl,
            RadiusKey::Full => &mut self.full,
        };
        *slot = value.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (RadiusKey, &str)> {
        RadiusKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            none: "0px".into(),
            sm: "0.125rem".into(),
            md: "0.375rem".into(),
            lg: "0.5rem".into(),
            xl: "0.75rem".into(),
            xxl: "1rem".into(),
            full: "9999px".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_touches_one_key() {
        let mut radii = RadiusTokens::default();
        radii.set(RadiusKey::Xxl, "2rem");
        assert_eq!(radii.get(RadiusKey::Xxl), "2rem");

        let untouched = RadiusTokens::default();
        for key in RadiusKey::ALL.into_iter().filter(|k| *k != RadiusKey::Xxl) {
            assert_eq!(radii.get(key), untouched.get(key));
        }
    }

    #[test]
    fn test_wire_key_for_2xl() {
        let json = serde_json::to_value(RadiusTokens::default()).unwrap();
        assert_eq!(json["2xl"], "1rem");
        assert_eq!(
            serde_json::from_str::<RadiusKey>(r#""2xl""#).unwrap(),
            RadiusKey::Xxl
        );
    }
}
