//! Typography tokens for theming

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single typography edit
///
/// Size, weight and line-height edits replace one entry, inserting the key
/// when it is new. A font family edit replaces the whole family string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypographyUpdate {
    FontFamily(String),
    FontSize { key: String, value: String },
    FontWeight { key: String, weight: u16 },
    LineHeight { key: String, value: String },
}

/// Font family, size scale, weights and line heights
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    pub font_family: String,
    pub font_size: IndexMap<String, String>,
    pub font_weight: IndexMap<String, u16>,
    #[serde(default)]
    pub line_height: IndexMap<String, String>,
}

impl TypographyTokens {
    /// CSS length for a named size
    pub fn font_size(&self, key: &str) -> Option<&str> {
        self.font_size.get(key).map(String::as_str)
    }

    /// Numeric weight for a named weight
    pub fn font_weight(&self, key: &str) -> Option<u16> {
        self.font_weight.get(key).copied()
    }

    pub fn line_height(&self, key: &str) -> Option<&str> {
        self.line_height.get(key).map(String::as_str)
    }

    /// Apply one edit in place
    pub fn apply(&mut self, update: TypographyUpdate) {
        match update {
            TypographyUpdate::FontFamily(value) => self.font_family = value,
            TypographyUpdate::FontSize { key, value } => {
                self.font_size.insert(key, value);
            }
            TypographyUpdate::FontWeight { key, weight } => {
                self.font_weight.insert(key, weight);
            }
            TypographyUpdate::LineHeight { key, value } => {
                self.line_height.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TypographyTokens {
        TypographyTokens {
            font_family: "Inter".into(),
            font_size: [("sm", "0.875rem"), ("base", "1rem")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            font_weight: [("normal".to_string(), 400), ("bold".to_string(), 700)]
                .into_iter()
                .collect(),
            line_height: IndexMap::new(),
        }
    }

    #[test]
    fn test_font_size_edit_keeps_other_keys() {
        let mut typography = sample();
        typography.apply(TypographyUpdate::FontSize {
            key: "base".into(),
            value: "17px".into(),
        });
        assert_eq!(typography.font_size("base"), Some("17px"));
        assert_eq!(typography.font_size("sm"), Some("0.875rem"));
        assert_eq!(typography.font_family, "Inter");
    }

    #[test]
    fn test_line_height_edit_inserts_new_key() {
        let mut typography = sample();
        typography.apply(TypographyUpdate::LineHeight {
            key: "snug".into(),
            value: "1.3".into(),
        });
        typography.apply(TypographyUpdate::LineHeight {
            key: "snug".into(),
            value: "1.35".into(),
        });
        assert_eq!(typography.line_height("snug"), Some("1.35"));
        assert_eq!(typography.line_height.len(), 1);
    }

    #[test]
    fn test_camel_case_wire_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("fontFamily").is_some());
        assert_eq!(json["fontWeight"]["bold"], 700);
    }
}
