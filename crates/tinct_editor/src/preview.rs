//! Resolved preview styles shared by the customizer panels

use tinct_theme::{contrast_color, ShadeKey, StoreSnapshot};

/// One CSS declaration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleDecl {
    pub property: &'static str,
    pub value: String,
}

impl StyleDecl {
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// Look up a declaration by property name
pub fn style_value<'a>(styles: &'a [StyleDecl], property: &str) -> Option<&'a str> {
    styles
        .iter()
        .find(|decl| decl.property == property)
        .map(|decl| decl.value.as_str())
}

/// Kind of element rendered in the design preview card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    Heading,
    Swatch,
    Button,
    Input,
    Textarea,
    Card,
}

/// A preview element with its inline styles
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewElement {
    pub kind: PreviewKind,
    pub label: &'static str,
    pub styles: Vec<StyleDecl>,
}

/// A selectable option button in a panel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionChip<K> {
    pub key: K,
    pub label: String,
    pub active: bool,
    pub styles: Vec<StyleDecl>,
}

impl<K> OptionChip<K> {
    /// Chip styled against the card color: the active chip is filled with
    /// the card's contrast color, inactive chips are outlined with it.
    pub fn new(key: K, label: impl Into<String>, active: bool, snapshot: &StoreSnapshot) -> Self {
        let card = card_color(snapshot);
        let ink = contrast_color(card);
        let radius = snapshot.selected_radius().to_string();
        let styles = if active {
            vec![
                StyleDecl::new("background-color", ink),
                StyleDecl::new("color", card),
                StyleDecl::new("border-radius", radius),
            ]
        } else {
            vec![
                StyleDecl::new("background-color", "transparent"),
                StyleDecl::new("color", ink),
                StyleDecl::new("border-color", ink),
                StyleDecl::new("border-radius", radius),
            ]
        };

        Self {
            key,
            label: label.into(),
            active,
            styles,
        }
    }
}

/// Card background, or an empty string if the slot is not a single color
pub(crate) fn card_color(snapshot: &StoreSnapshot) -> &str {
    snapshot.tokens.colors.single("card").unwrap_or_default()
}

/// Text color used for panel chrome drawn on the card
pub(crate) fn panel_text_color(snapshot: &StoreSnapshot) -> &'static str {
    contrast_color(card_color(snapshot))
}

/// Preview card: heading, primary swatch, button, input, textarea, card,
/// all using the selected radius and shadow.
pub fn design_preview(snapshot: &StoreSnapshot) -> Vec<PreviewElement> {
    let tokens = &snapshot.tokens;
    let typography = &tokens.typography;
    let radius = snapshot.selected_radius();
    let shadow = snapshot.selected_shadow();
    let foreground = tokens.colors.single("foreground").unwrap_or_default();
    let font_size = typography
        .font_size(&snapshot.selection.font_size)
        .unwrap_or_default();
    let font_weight = typography
        .font_weight(&snapshot.selection.font_weight)
        .map(|w| w.to_string())
        .unwrap_or_default();

    let framed = |extra: Vec<StyleDecl>| {
        let mut styles = vec![
            StyleDecl::new("border-radius", radius),
            StyleDecl::new("box-shadow", shadow),
        ];
        styles.extend(extra);
        styles
    };
    let text = || {
        vec![
            StyleDecl::new("font-family", typography.font_family.as_str()),
            StyleDecl::new("font-size", font_size),
            StyleDecl::new("font-weight", font_weight.as_str()),
        ]
    };
    let scale_shade = |group: &str, shade: ShadeKey| {
        tokens
            .colors
            .scale(group)
            .map(|scale| scale.get(shade))
            .unwrap_or_default()
    };

    let muted = scale_shade("muted", ShadeKey::S200);
    let card = card_color(snapshot);
    let mut heading = text();
    heading.push(StyleDecl::new("color", foreground));

    vec![
        PreviewElement {
            kind: PreviewKind::Heading,
            label: "Preview",
            styles: heading,
        },
        PreviewElement {
            kind: PreviewKind::Swatch,
            label: "",
            styles: framed(vec![StyleDecl::new(
                "background-color",
                scale_shade("primary", ShadeKey::S500),
            )]),
        },
        PreviewElement {
            kind: PreviewKind::Button,
            label: "Button Example",
            styles: framed(text()),
        },
        PreviewElement {
            kind: PreviewKind::Input,
            label: "Input field",
            styles: framed(text()),
        },
        PreviewElement {
            kind: PreviewKind::Textarea,
            label: "Textarea",
            styles: framed(
                [
                    vec![
                        StyleDecl::new("background-color", muted),
                        StyleDecl::new("color", contrast_color(muted)),
                    ],
                    text(),
                ]
                .concat(),
            ),
        },
        PreviewElement {
            kind: PreviewKind::Card,
            label: "Card content with custom radius and shadow",
            styles: framed(vec![
                StyleDecl::new("background-color", card),
                StyleDecl::new("color", contrast_color(card)),
            ]),
        },
    ]
}
