//! Copy-out exporters
//!
//! Both exporters are pure: the same token set always produces the same
//! text, and token values are copied verbatim.

use crate::tokens::{ColorGroup, ColorSlot, TokenSet};
use crate::ThemeError;
use serde_json::{Map, Value};

const TAILWIND_HEADER: &str = "/** @type {import('tailwindcss').Config} */";

/// Flat `:root` block with one custom property per token
pub fn css_variables(tokens: &TokenSet) -> String {
    let mut css = String::from(":root {\n");
    let mut line = |name: String, value: &str| {
        css.push_str(&format!("  --{name}: {value};\n"));
    };

    for (name, slot) in tokens.colors.iter() {
        match slot {
            ColorSlot::Scale(scale) => {
                for (shade, value) in scale.iter() {
                    line(format!("{name}-{shade}"), value);
                }
            }
            ColorSlot::Single(value) => line(name.to_string(), value),
        }
    }

    let typography = &tokens.typography;
    line("font-family".to_string(), &typography.font_family);
    for (key, value) in &typography.font_size {
        line(format!("font-size-{key}"), value);
    }
    for (key, weight) in &typography.font_weight {
        line(format!("font-weight-{key}"), &weight.to_string());
    }
    for (key, value) in &typography.line_height {
        line(format!("line-height-{key}"), value);
    }
    for (key, value) in tokens.radius.iter() {
        line(format!("radius-{key}"), value);
    }
    for (key, value) in tokens.shadows.iter() {
        line(format!("shadow-{key}"), value);
    }

    css.push('}');
    css
}

/// Tailwind `theme.extend` config, as a CommonJS module
///
/// The background color is exported as `page-background` so it does not
/// shadow Tailwind's `background` utilities.
pub fn tailwind_config(tokens: &TokenSet) -> Result<String, ThemeError> {
    let mut colors = Map::new();
    for (name, slot) in tokens.colors.iter() {
        let key = if name == ColorGroup::Background.name() {
            "page-background".to_string()
        } else {
            name.to_string()
        };
        colors.insert(key, serde_json::to_value(slot)?);
    }

    let typography = &tokens.typography;
    let mut extend = Map::new();
    extend.insert("colors".into(), Value::Object(colors));
    extend.insert(
        "fontFamily".into(),
        Value::Object(Map::from_iter([(
            "sans".to_string(),
            Value::Array(
                typography
                    .font_family
                    .split(',')
                    .map(|family| Value::String(family.trim().to_string()))
                    .collect(),
            ),
        )])),
    );
    extend.insert("fontSize".into(), serde_json::to_value(&typography.font_size)?);
    extend.insert("fontWeight".into(), serde_json::to_value(&typography.font_weight)?);
    extend.insert("lineHeight".into(), serde_json::to_value(&typography.line_height)?);
    extend.insert("borderRadius".into(), serde_json::to_value(&tokens.radius)?);
    extend.insert("boxShadow".into(), serde_json::to_value(&tokens.shadows)?);

    let config = serde_json::json!({ "theme": { "extend": extend } });
    Ok(format!(
        "{TAILWIND_HEADER}\nmodule.exports = {}",
        serde_json::to_string_pretty(&config)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::ShadeKey;

    #[test]
    fn test_css_block_framing() {
        let css = css_variables(&TokenSet::default());
        assert!(css.starts_with(":root {\n  --primary-50: oklch(0.97 0.014 254.604);\n"));
        assert!(css.ends_with(";\n}"));
        assert!(css.contains("  --background: #ffffff;\n"));
        assert!(css.contains("  --font-weight-bold: 700;\n"));
        assert!(css.contains("  --shadow-2xs: 0 1px rgb(0 0 0 / 0.05);\n"));
    }

    #[test]
    fn test_css_has_no_selection_aliases() {
        let css = css_variables(&TokenSet::default());
        assert!(!css.contains("-default:"));
        assert!(!css.contains("-text:"));
    }

    #[test]
    fn test_tailwind_shape() {
        let mut tokens = TokenSet::default();
        if let Some(ColorSlot::Scale(scale)) = tokens.colors.get_mut("accent") {
            scale.set(ShadeKey::S400, "#abcdef");
        }

        let text = tailwind_config(&tokens).unwrap();
        let (header, body) = text.split_once('\n').unwrap();
        assert_eq!(header, TAILWIND_HEADER);

        let json: Value = serde_json::from_str(body.strip_prefix("module.exports = ").unwrap()).unwrap();
        let extend = &json["theme"]["extend"];
        assert_eq!(extend["colors"]["accent"]["400"], "#abcdef");
        assert_eq!(extend["colors"]["page-background"], "#ffffff");
        assert!(extend["colors"].get("background").is_none());
        assert_eq!(extend["borderRadius"]["2xl"], "1rem");
        assert_eq!(extend["fontWeight"]["semibold"], 600);
        assert_eq!(extend["fontFamily"]["sans"][0], "Inter");
    }
}
