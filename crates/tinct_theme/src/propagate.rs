//! Theme propagation: snapshot → CSS custom properties
//!
//! [`css_properties`] flattens a snapshot into the full property set;
//! [`ThemePropagator`] writes that set onto a [`StyleScope`] (the document
//! root in a browser host). Applying the same snapshot twice changes
//! nothing the second time.
//!
//! Property names:
//! - `--font-family`, `--font-size-<k>`, `--font-weight-<k>`, `--line-height-<k>`
//! - `--<color>` / `--<color>-text` for single colors
//! - `--<group>-<shade>` / `--<group>-<shade>-text` for scales
//! - `--radius-<k>`, `--shadow-<k>`
//! - aliases `--radius`, `--shadow` (the `md` values), `--radius-default`,
//!   `--shadow-default`, `--font-size-default`, `--font-weight-default`
//!   (the selected keys; a font alias whose key is missing is omitted)

use crate::contrast::contrast_color;
use crate::state::StoreSnapshot;
use crate::tokens::{ColorSlot, RadiusKey, ShadowKey};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;

/// Sink for CSS custom properties
pub trait StyleScope {
    fn set_property(&mut self, name: &str, value: &str);

    fn get_property(&self, name: &str) -> Option<&str>;

    fn remove_property(&mut self, name: &str);
}

/// In-memory document root style
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootStyle {
    properties: IndexMap<String, String>,
}

impl RootStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render as a `:root { ... }` rule
    pub fn to_stylesheet(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.properties {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push('}');
        css
    }
}

impl StyleScope for RootStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        match self.properties.get_mut(name) {
            Some(current) => value.clone_into(current),
            None => {
                self.properties.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn get_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.shift_remove(name);
    }
}

/// Flatten a snapshot into every custom property it defines
pub fn css_properties(snapshot: &StoreSnapshot) -> IndexMap<String, String> {
    let tokens = &snapshot.tokens;
    let selection = &snapshot.selection;
    let mut vars = IndexMap::with_capacity(128);

    // Typography
    let typography = &tokens.typography;
    vars.insert("--font-family".to_string(), typography.font_family.clone());
    for (key, value) in &typography.font_size {
        vars.insert(format!("--font-size-{key}"), value.clone());
    }
    for (key, weight) in &typography.font_weight {
        vars.insert(format!("--font-weight-{key}"), weight.to_string());
    }
    for (key, value) in &typography.line_height {
        vars.insert(format!("--line-height-{key}"), value.clone());
    }
    match typography.font_size(&selection.font_size) {
        Some(size) => {
            vars.insert("--font-size-default".to_string(), size.to_string());
        }
        None => tracing::trace!("css_properties - no font size `{}`", selection.font_size),
    }
    match typography.font_weight(&selection.font_weight) {
        Some(weight) => {
            vars.insert("--font-weight-default".to_string(), weight.to_string());
        }
        None => tracing::trace!("css_properties - no font weight `{}`", selection.font_weight),
    }

    // Colors, each with a readable text companion
    for (name, slot) in tokens.colors.iter() {
        match slot {
            ColorSlot::Single(value) => {
                vars.insert(format!("--{name}"), value.clone());
                vars.insert(format!("--{name}-text"), contrast_color(value).to_string());
            }
            ColorSlot::Scale(scale) => {
                for (shade, value) in scale.iter() {
                    vars.insert(format!("--{name}-{shade}"), value.to_string());
                    vars.insert(
                        format!("--{name}-{shade}-text"),
                        contrast_color(value).to_string(),
                    );
                }
            }
        }
    }

    // Radii
    for (key, value) in tokens.radius.iter() {
        vars.insert(format!("--radius-{key}"), value.to_string());
    }
    vars.insert(
        "--radius".to_string(),
        tokens.radius.get(RadiusKey::Md).to_string(),
    );
    vars.insert(
        "--radius-default".to_string(),
        snapshot.selected_radius().to_string(),
    );

    // Shadows
    for (key, value) in tokens.shadows.iter() {
        vars.insert(format!("--shadow-{key}"), value.to_string());
    }
    vars.insert(
        "--shadow".to_string(),
        tokens.shadows.get(ShadowKey::Md).to_string(),
    );
    vars.insert(
        "--shadow-default".to_string(),
        snapshot.selected_shadow().to_string(),
    );

    vars
}

/// Writes resolved properties onto a style scope
///
/// Properties written by an earlier apply that a later snapshot no longer
/// defines (a selection alias pointing at a missing key) are removed.
pub struct ThemePropagator<S: StyleScope> {
    scope: S,
    written: FxHashSet<String>,
}

impl<S: StyleScope> ThemePropagator<S> {
    pub fn new(scope: S) -> Self {
        Self {
            scope,
            written: FxHashSet::default(),
        }
    }

    /// Write every property of `snapshot`; returns how many values changed
    pub fn apply(&mut self, snapshot: &StoreSnapshot) -> usize {
        let vars = css_properties(snapshot);
        let mut changed = 0;

        for name in self.written.iter().filter(|name| !vars.contains_key(*name)) {
            self.scope.remove_property(name);
            changed += 1;
        }
        for (name, value) in &vars {
            if self.scope.get_property(name) != Some(value.as_str()) {
                self.scope.set_property(name, value);
                changed += 1;
            }
        }

        self.written = vars.into_keys().collect();
        tracing::trace!("ThemePropagator::apply - {} properties changed", changed);
        changed
    }

    pub fn scope(&self) -> &S {
        &self.scope
    }
}
