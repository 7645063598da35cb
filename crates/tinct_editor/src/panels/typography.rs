use crate::preview::{design_preview, OptionChip, PreviewElement};
use std::sync::Arc;
use tinct_theme::{FontFamilyPreset, ThemeError, TokenStore, TypographyUpdate};
use tracing::debug;

/// Font family, size and weight editor
pub struct TypographyPanel {
    store: Arc<TokenStore>,
}

impl TypographyPanel {
    pub fn new(store: Arc<TokenStore>) -> Self {
        Self { store }
    }

    // ========== Font Family ==========

    /// Preset chips; none is active when a custom stack is set
    pub fn font_families(&self) -> Vec<OptionChip<FontFamilyPreset>> {
        let snapshot = self.store.snapshot();
        let current = FontFamilyPreset::from_stack(&snapshot.tokens.typography.font_family);
        FontFamilyPreset::all()
            .iter()
            .map(|&preset| {
                OptionChip::new(
                    preset,
                    preset.display_name(),
                    current == Some(preset),
                    &snapshot,
                )
            })
            .collect()
    }

    pub fn font_family(&self) -> String {
        self.store.tokens().typography.font_family
    }

    pub fn choose_font_family(&self, preset: FontFamilyPreset) {
        self.set_custom_font_family(preset.stack());
    }

    pub fn set_custom_font_family(&self, family: &str) {
        self.store
            .update_typography(TypographyUpdate::FontFamily(family.to_string()));
    }

    pub fn restore_font_family(&self) {
        self.store.reset_font_family();
    }

    // ========== Font Size ==========

    pub fn font_sizes(&self) -> Vec<OptionChip<String>> {
        let snapshot = self.store.snapshot();
        snapshot
            .tokens
            .typography
            .font_size
            .keys()
            .map(|key| {
                let active = *key == snapshot.selection.font_size;
                OptionChip::new(key.clone(), key.as_str(), active, &snapshot)
            })
            .collect()
    }

    pub fn select_font_size(&self, key: &str) {
        self.store.set_selected_font_size(key);
    }

    /// Value of the selected size key, empty if the key is gone
    pub fn font_size(&self) -> String {
        let snapshot = self.store.snapshot();
        snapshot
            .tokens
            .typography
            .font_size(&snapshot.selection.font_size)
            .unwrap_or_default()
            .to_string()
    }

    pub fn edit_font_size(&self, value: &str) {
        let key = self.store.selection().font_size;
        self.store.update_typography(TypographyUpdate::FontSize {
            key,
            value: value.to_string(),
        });
    }

    pub fn restore_font_sizes(&self) {
        self.store.reset_font_sizes();
    }

    // ========== Font Weight ==========

    pub fn font_weights(&self) -> Vec<OptionChip<String>> {
        let snapshot = self.store.snapshot();
        snapshot
            .tokens
            .typography
            .font_weight
            .keys()
            .map(|key| {
                let active = *key == snapshot.selection.font_weight;
                OptionChip::new(key.clone(), key.as_str(), active, &snapshot)
            })
            .collect()
    }

    pub fn select_font_weight(&self, key: &str) {
        self.store.set_selected_font_weight(key);
    }

    pub fn font_weight(&self) -> Option<u16> {
        let snapshot = self.store.snapshot();
        snapshot
            .tokens
            .typography
            .font_weight(&snapshot.selection.font_weight)
    }

    /// Set the selected weight from text field input.
    ///
    /// Input that is not an integer weight leaves the store untouched.
    pub fn edit_font_weight(&self, text: &str) -> Result<(), ThemeError> {
        let weight: u16 = text.trim().parse().map_err(|_| {
            debug!("rejected font weight input {:?}", text);
            ThemeError::InvalidFontWeight(text.to_string())
        })?;
        let key = self.store.selection().font_weight;
        self.store
            .update_typography(TypographyUpdate::FontWeight { key, weight });
        Ok(())
    }

    pub fn restore_font_weights(&self) {
        self.store.reset_font_weights();
    }

    pub fn preview(&self) -> Vec<PreviewElement> {
        design_preview(&self.store.snapshot())
    }
}
