//! Built-in default token table and font family presets.

use crate::tokens::*;
use indexmap::IndexMap;
use std::fmt::{Display, Formatter};

/// Built-in font family catalog offered by the typography panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFamilyPreset {
    Inter,
    Roboto,
    OpenSans,
    Lato,
    Montserrat,
    RobotoMono,
}

impl FontFamilyPreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Inter => "inter",
            Self::Roboto => "roboto",
            Self::OpenSans => "open-sans",
            Self::Lato => "lato",
            Self::Montserrat => "montserrat",
            Self::RobotoMono => "roboto-mono",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Inter => "Inter",
            Self::Roboto => "Roboto",
            Self::OpenSans => "Open Sans",
            Self::Lato => "Lato",
            Self::Montserrat => "Montserrat",
            Self::RobotoMono => "Roboto Mono",
        }
    }

    /// CSS `font-family` stack.
    pub fn stack(self) -> &'static str {
        match self {
            Self::Inter => "Inter, system-ui, sans-serif",
            Self::Roboto => "Roboto, system-ui, sans-serif",
            Self::OpenSans => "'Open Sans', system-ui, sans-serif",
            Self::Lato => "Lato, system-ui, sans-serif",
            Self::Montserrat => "Montserrat, system-ui, sans-serif",
            Self::RobotoMono => "'Roboto Mono', monospace",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [FontFamilyPreset] {
        const PRESETS: [FontFamilyPreset; 6] = [
            FontFamilyPreset::Inter,
            FontFamilyPreset::Roboto,
            FontFamilyPreset::OpenSans,
            FontFamilyPreset::Lato,
            FontFamilyPreset::Montserrat,
            FontFamilyPreset::RobotoMono,
        ];
        &PRESETS
    }

    /// Preset whose stack matches `family` exactly.
    pub fn from_stack(family: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.stack() == family)
    }
}

impl Display for FontFamilyPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Default selected font size key
pub const DEFAULT_FONT_SIZE: &str = "base";

/// Default selected font weight key
pub const DEFAULT_FONT_WEIGHT: &str = "normal";

/// The built-in token table used at first load and on reset.
pub fn default_tokens() -> TokenSet {
    TokenSet {
        colors: default_colors(),
        typography: default_typography(),
        radius: RadiusTokens::default(),
        shadows: ShadowTokens::default(),
    }
}

/// Default color groups: a blue OKLCH primary and hex scales elsewhere.
pub fn default_colors() -> ColorTokens {
    let mut colors = ColorTokens::new();

    colors.insert(
        ColorGroup::Primary.name(),
        ColorSlot::Scale(ColorScale::from_strs([
            "oklch(0.97 0.014 254.604)",
            "oklch(0.932 0.032 255.585)",
            "oklch(0.882 0.059 254.128)",
            "oklch(0.809 0.105 251.813)",
            "oklch(0.707 0.165 254.624)",
            "oklch(0.623 0.214 259.815)",
            "oklch(0.546 0.245 262.881)",
            "oklch(0.488 0.243 264.376)",
            "oklch(0.424 0.199 265.638)",
            "oklch(0.379 0.146 265.522)",
            "oklch(0.282 0.091 267.935)",
        ])),
    );
    colors.insert(
        ColorGroup::Secondary.name(),
        ColorSlot::Scale(ColorScale::from_strs([
            "#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed",
            "#6d28d9", "#5b21b6", "#4c1d95", "#2e1065",
        ])),
    );
    colors.insert(
        ColorGroup::Accent.name(),
        ColorSlot::Scale(ColorScale::from_strs([
            "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b", "#d97706",
            "#b45309", "#92400e", "#78350f", "#451a03",
        ])),
    );
    colors.insert(
        ColorGroup::Muted.name(),
        ColorSlot::Scale(ColorScale::from_strs([
            "#fafafa", "#f4f4f5", "#e4e4e7", "#d4d4d8", "#a1a1aa", "#71717a", "#52525b",
            "#3f3f46", "#27272a", "#18181b", "#09090b",
        ])),
    );

    for (group, value) in [
        (ColorGroup::Background, "#ffffff"),
        (ColorGroup::Foreground, "#09090b"),
        (ColorGroup::Card, "#ffffff"),
        (ColorGroup::Success, "#22c55e"),
        (ColorGroup::Warning, "#f59e0b"),
        (ColorGroup::Info, "#3b82f6"),
    ] {
        colors.insert(group.name(), ColorSlot::Single(value.to_string()));
    }

    colors
}

/// Default typography: Inter with a Tailwind-style size scale.
pub fn default_typography() -> TypographyTokens {
    TypographyTokens {
        font_family: FontFamilyPreset::Inter.stack().to_string(),
        font_size: string_map(&[
            ("xs", "0.75rem"),
            ("sm", "0.875rem"),
            ("base", "1rem"),
            ("lg", "1.125rem"),
            ("xl", "1.25rem"),
            ("2xl", "1.5rem"),
            ("3xl", "1.875rem"),
            ("4xl", "2.25rem"),
        ]),
        font_weight: [
            ("light", 300),
            ("normal", 400),
            ("medium", 500),
            ("semibold", 600),
            ("bold", 700),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect(),
        line_height: string_map(&[
            ("none", "1"),
            ("tight", "1.25"),
            ("snug", "1.375"),
            ("normal", "1.5"),
            ("relaxed", "1.625"),
            ("loose", "2"),
        ]),
    }
}

fn string_map(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_every_required_group() {
        assert_eq!(default_colors().first_invalid_group(), None);
    }

    #[test]
    fn test_default_selection_keys_exist() {
        let typography = default_typography();
        assert!(typography.font_size(DEFAULT_FONT_SIZE).is_some());
        assert_eq!(typography.font_weight(DEFAULT_FONT_WEIGHT), Some(400));
    }

    #[test]
    fn test_font_preset_catalog() {
        let mut ids: Vec<&str> = FontFamilyPreset::all().iter().map(|p| p.id()).collect();
        ids.sort_unstable();
        assert_eq!(
            ids,
            vec!["inter", "lato", "montserrat", "open-sans", "roboto", "roboto-mono"]
        );
        assert_eq!(
            FontFamilyPreset::from_stack(&default_typography().font_family),
            Some(FontFamilyPreset::Inter)
        );
    }
}
