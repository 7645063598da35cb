use crate::preview::{design_preview, OptionChip, PreviewElement};
use std::sync::Arc;
use tinct_theme::{RadiusKey, TokenStore};

/// Border radius editor
pub struct RadiusPanel {
    store: Arc<TokenStore>,
}

impl RadiusPanel {
    pub fn new(store: Arc<TokenStore>) -> Self {
        Self { store }
    }

    /// One chip per radius key, the selected one active
    pub fn options(&self) -> Vec<OptionChip<RadiusKey>> {
        let snapshot = self.store.snapshot();
        RadiusKey::ALL
            .into_iter()
            .map(|key| OptionChip::new(key, key.as_str(), key == snapshot.selection.radius, &snapshot))
            .collect()
    }

    pub fn select(&self, key: RadiusKey) {
        self.store.set_selected_radius(key);
    }

    /// Value of the selected key, as shown in the text field
    pub fn value(&self) -> String {
        self.store.snapshot().selected_radius().to_string()
    }

    /// Replace the selected key's value with raw text input
    pub fn edit(&self, value: &str) {
        let key = self.store.selection().radius;
        self.store.update_radius(key, value);
    }

    pub fn restore_defaults(&self) {
        self.store.reset_radius();
    }

    pub fn preview(&self) -> Vec<PreviewElement> {
        design_preview(&self.store.snapshot())
    }
}
