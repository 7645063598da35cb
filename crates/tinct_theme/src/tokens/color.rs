//! Color tokens for theming

use indexmap::IndexMap;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shade keys of a color scale, lightest to darkest
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum ShadeKey {
    S50,
    S100,
    S200,
    S300,
    S400,
    #[default]
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl ShadeKey {
    /// Every shade, in scale order
    pub const ALL: [ShadeKey; 11] = [
        ShadeKey::S50,
        ShadeKey::S100,
        ShadeKey::S200,
        ShadeKey::S300,
        ShadeKey::S400,
        ShadeKey::S500,
        ShadeKey::S600,
        ShadeKey::S700,
        ShadeKey::S800,
        ShadeKey::S900,
        ShadeKey::S950,
    ];

    /// Key as written in CSS property names and persisted JSON
    pub fn as_str(self) -> &'static str {
        match self {
            Self::S50 => "50",
            Self::S100 => "100",
            Self::S200 => "200",
            Self::S300 => "300",
            Self::S400 => "400",
            Self::S500 => "500",
            Self::S600 => "600",
            Self::S700 => "700",
            Self::S800 => "800",
            Self::S900 => "900",
            Self::S950 => "950",
        }
    }

    /// Parse a shade key; the empty string and unknown keys yield `None`
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|shade| shade.as_str() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ShadeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ShadeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShadeVisitor;

        impl<'de> Visitor<'de> for ShadeVisitor {
            type Value = ShadeKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a shade key such as \"500\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ShadeKey, E> {
                ShadeKey::parse(v).ok_or_else(|| E::custom(format!("unknown shade key `{v}`")))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ShadeKey, E> {
                self.visit_str(&v.to_string())
            }
        }

        deserializer.deserialize_any(ShadeVisitor)
    }
}

/// A complete eleven-shade color scale
///
/// A scale can only be built with every shade present. Deserializing a
/// scale that lacks any shade fails, which is how invalid persisted state
/// gets rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorScale {
    shades: [String; 11],
}

impl ColorScale {
    pub fn new(shades: [String; 11]) -> Self {
        Self { shades }
    }

    /// Build a scale from eleven string literals, lightest first
    pub fn from_strs(shades: [&str; 11]) -> Self {
        Self {
            shades: shades.map(str::to_string),
        }
    }

    pub fn get(&self, shade: ShadeKey) -> &str {
        &self.shades[shade.index()]
    }

    pub fn set(&mut self, shade: ShadeKey, value: impl Into<String>) {
        self.shades[shade.index()] = value.into();
    }

    /// Iterate `(shade, value)` pairs in scale order
    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, &str)> {
        ShadeKey::ALL
            .into_iter()
            .map(move |shade| (shade, self.get(shade)))
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.shades.len()))?;
        for (shade, value) in self.iter() {
            map.serialize_entry(shade.as_str(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ColorScale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScaleVisitor;

        impl<'de> Visitor<'de> for ScaleVisitor {
            type Value = ColorScale;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from shade key to color")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ColorScale, A::Error> {
                let mut slots: [Option<String>; 11] = Default::default();
                while let Some(key) = access.next_key::<String>()? {
                    match ShadeKey::parse(&key) {
                        Some(shade) => slots[shade.index()] = Some(access.next_value()?),
                        None => {
                            access.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                let mut shades: [String; 11] = Default::default();
                for shade in ShadeKey::ALL {
                    shades[shade.index()] = slots[shade.index()]
                        .take()
                        .ok_or_else(|| de::Error::missing_field(shade.as_str()))?;
                }
                Ok(ColorScale { shades })
            }
        }

        deserializer.deserialize_map(ScaleVisitor)
    }
}

/// One named color slot: either a bare color or a full scale
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSlot {
    Single(String),
    Scale(ColorScale),
}

impl ColorSlot {
    pub fn is_scale(&self) -> bool {
        matches!(self, Self::Scale(_))
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Scale(_) => None,
        }
    }

    pub fn as_scale(&self) -> Option<&ColorScale> {
        match self {
            Self::Single(_) => None,
            Self::Scale(scale) => Some(scale),
        }
    }
}

/// Color groups every token set must carry
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorGroup {
    // Brand scales
    Primary,
    Secondary,
    Accent,
    Muted,

    // Surface colors
    Background,
    Foreground,
    Card,

    // Status colors
    Success,
    Warning,
    Info,
}

impl ColorGroup {
    pub const ALL: [ColorGroup; 10] = [
        ColorGroup::Primary,
        ColorGroup::Secondary,
        ColorGroup::Accent,
        ColorGroup::Muted,
        ColorGroup::Background,
        ColorGroup::Foreground,
        ColorGroup::Card,
        ColorGroup::Success,
        ColorGroup::Warning,
        ColorGroup::Info,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Muted => "muted",
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Card => "card",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Whether this group holds a shade scale rather than a single color
    pub fn is_scale(self) -> bool {
        matches!(
            self,
            Self::Primary | Self::Secondary | Self::Accent | Self::Muted
        )
    }

    /// Human-readable label used by the color panel
    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary Color",
            Self::Secondary => "Secondary Color",
            Self::Accent => "Accent Color",
            Self::Muted => "Muted Color",
            Self::Background => "Background",
            Self::Foreground => "Foreground",
            Self::Card => "Card",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

impl AsRef<str> for ColorGroup {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

/// Named color slots, in insertion order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTokens {
    groups: IndexMap<String, ColorSlot>,
}

impl ColorTokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a slot
    pub fn insert(&mut self, name: impl Into<String>, slot: ColorSlot) {
        self.groups.insert(name.into(), slot);
    }

    pub fn get(&self, name: &str) -> Option<&ColorSlot> {
        self.groups.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ColorSlot> {
        self.groups.get_mut(name)
    }

    /// The scale stored under `name`, if that slot is a scale
    pub fn scale(&self, name: &str) -> Option<&ColorScale> {
        self.get(name).and_then(ColorSlot::as_scale)
    }

    /// The bare color stored under `name`, if that slot is a single color
    pub fn single(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ColorSlot::as_single)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorSlot)> {
        self.groups.iter().map(|(name, slot)| (name.as_str(), slot))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// First required group that is absent or has the wrong shape
    pub fn first_invalid_group(&self) -> Option<ColorGroup> {
        ColorGroup::ALL.into_iter().find(|group| {
            match self.get(group.name()) {
                Some(slot) => slot.is_scale() != group.is_scale(),
                None => true,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(prefix: &str) -> ColorScale {
        ColorScale::new(ShadeKey::ALL.map(|s| format!("{prefix}-{s}")))
    }

    #[test]
    fn test_shade_key_parse() {
        assert_eq!(ShadeKey::parse("950"), Some(ShadeKey::S950));
        assert_eq!(ShadeKey::parse(""), None);
        assert_eq!(ShadeKey::parse("550"), None);
        assert_eq!(ShadeKey::default(), ShadeKey::S500);
    }

    #[test]
    fn test_scale_serializes_in_shade_order() {
        let json = serde_json::to_string(&ramp("c")).unwrap();
        assert!(json.starts_with(r#"{"50":"c-50","100":"c-100""#));
        assert!(json.ends_with(r#""950":"c-950"}"#));
    }

    #[test]
    fn test_scale_missing_shade_is_rejected() {
        let mut value = serde_json::to_value(ramp("c")).unwrap();
        value.as_object_mut().unwrap().remove("700");
        let err = serde_json::from_value::<ColorScale>(value).unwrap_err();
        assert!(err.to_string().contains("700"));
    }

    #[test]
    fn test_slot_shape_detected_on_deserialize() {
        let single: ColorSlot = serde_json::from_str(r##""#ffffff""##).unwrap();
        assert_eq!(single.as_single(), Some("#ffffff"));

        let scale: ColorSlot = serde_json::to_value(ramp("p"))
            .and_then(serde_json::from_value)
            .unwrap();
        assert!(scale.is_scale());
    }

    #[test]
    fn test_first_invalid_group() {
        let mut colors = ColorTokens::new();
        for group in ColorGroup::ALL {
            let slot = if group.is_scale() {
                ColorSlot::Scale(ramp(group.name()))
            } else {
                ColorSlot::Single("#000000".into())
            };
            colors.insert(group.name(), slot);
        }
        assert_eq!(colors.first_invalid_group(), None);

        colors.insert("accent", ColorSlot::Single("#123456".into()));
        assert_eq!(colors.first_invalid_group(), Some(ColorGroup::Accent));
    }
}
