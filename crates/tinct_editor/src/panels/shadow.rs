use crate::preview::{design_preview, OptionChip, PreviewElement};
use std::sync::Arc;
use tinct_theme::{ShadowKey, TokenStore};

/// Box shadow editor
pub struct ShadowPanel {
    store: Arc<TokenStore>,
}

impl ShadowPanel {
    pub fn new(store: Arc<TokenStore>) -> Self {
        Self { store }
    }

    pub fn options(&self) -> Vec<OptionChip<ShadowKey>> {
        let snapshot = self.store.snapshot();
        ShadowKey::ALL
            .into_iter()
            .map(|key| OptionChip::new(key, key.as_str(), key == snapshot.selection.shadow, &snapshot))
            .collect()
    }

    pub fn select(&self, key: ShadowKey) {
        self.store.set_selected_shadow(key);
    }

    pub fn value(&self) -> String {
        self.store.snapshot().selected_shadow().to_string()
    }

    pub fn edit(&self, value: &str) {
        let key = self.store.selection().shadow;
        self.store.update_shadow(key, value);
    }

    pub fn restore_defaults(&self) {
        self.store.reset_shadows();
    }

    pub fn preview(&self) -> Vec<PreviewElement> {
        design_preview(&self.store.snapshot())
    }
}
