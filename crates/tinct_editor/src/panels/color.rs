use crate::preview::{panel_text_color, OptionChip, StyleDecl};
use std::sync::Arc;
use tinct_theme::{contrast_color, ColorGroup, ShadeKey, ThemeError, TokenStore};

/// Preview of one color group at the current shade
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorSwatch {
    pub group: ColorGroup,
    pub label: &'static str,
    pub value: String,
    /// Filled button in the color itself
    pub solid: Vec<StyleDecl>,
    /// The same color at 20% alpha
    pub light: Vec<StyleDecl>,
}

impl ColorSwatch {
    fn new(group: ColorGroup, value: String) -> Self {
        let tint = format!("{value}33");
        let solid = swatch_styles(&value);
        let light = swatch_styles(&tint);
        Self {
            group,
            label: group.label(),
            value,
            solid,
            light,
        }
    }
}

fn swatch_styles(background: &str) -> Vec<StyleDecl> {
    vec![
        StyleDecl::new("background-color", background),
        StyleDecl::new("color", contrast_color(background)),
        StyleDecl::new("border-radius", "var(--radius-default)"),
        StyleDecl::new("box-shadow", "var(--shadow-default)"),
    ]
}

/// Color editor
///
/// Scale groups are edited one shade at a time through the selected shade;
/// single groups are edited directly.
pub struct ColorPanel {
    store: Arc<TokenStore>,
}

impl ColorPanel {
    pub fn new(store: Arc<TokenStore>) -> Self {
        Self { store }
    }

    /// Text color for panel chrome drawn on the card background
    pub fn text_color(&self) -> &'static str {
        panel_text_color(&self.store.snapshot())
    }

    pub fn shades(&self) -> Vec<OptionChip<ShadeKey>> {
        let snapshot = self.store.snapshot();
        ShadeKey::ALL
            .into_iter()
            .map(|shade| {
                OptionChip::new(
                    shade,
                    shade.as_str(),
                    shade == snapshot.selection.shade,
                    &snapshot,
                )
            })
            .collect()
    }

    pub fn selected_shade(&self) -> ShadeKey {
        self.store.selection().shade
    }

    pub fn select_shade(&self, shade: ShadeKey) {
        self.store.set_selected_shade(shade);
    }

    pub fn scale_groups(&self) -> impl Iterator<Item = ColorGroup> {
        ColorGroup::ALL.into_iter().filter(|g| g.is_scale())
    }

    pub fn single_groups(&self) -> impl Iterator<Item = ColorGroup> {
        ColorGroup::ALL.into_iter().filter(|g| !g.is_scale())
    }

    /// Current value of `group`, at the selected shade for scales
    pub fn color(&self, group: ColorGroup) -> Option<String> {
        let snapshot = self.store.snapshot();
        let slot = snapshot.tokens.colors.get(group.name())?;
        if let Some(scale) = slot.as_scale() {
            Some(scale.get(snapshot.selection.shade).to_string())
        } else {
            slot.as_single().map(str::to_string)
        }
    }

    /// Replace the value of `group`; for scales only the selected shade
    pub fn edit(&self, group: ColorGroup, value: &str) -> Result<(), ThemeError> {
        let shade = group.is_scale().then(|| self.selected_shade());
        self.store.update_color(group, shade, value)
    }

    /// Swatches for every scale group at the selected shade
    pub fn swatches(&self) -> Vec<ColorSwatch> {
        self.scale_groups()
            .filter_map(|group| self.color(group).map(|value| ColorSwatch::new(group, value)))
            .collect()
    }
}
