//! Readable text color for a given background color

/// Text color for dark backgrounds
pub const WHITE: &str = "#ffffff";

/// Text color for light backgrounds
pub const BLACK: &str = "#000000";

/// Function prefixes whose first component is perceptual lightness in `0..=1`
const LIGHTNESS_FUNCTIONS: [&str; 2] = ["oklch(", "oklab("];

/// Pick black or white text for legibility on `color`.
///
/// Accepts `#rrggbb` hex (any trailing alpha digits are ignored) and
/// `oklch(...)` / `oklab(...)` notation. Lightness notation is thresholded
/// at 0.5 directly; hex is converted to weighted luminance
/// `(0.299 R + 0.587 G + 0.114 B) / 255` and thresholded at 0.5.
///
/// Other inputs are not supported. A malformed hex value yields white and
/// never panics.
pub fn contrast_color(color: &str) -> &'static str {
    if let Some(lightness) = leading_lightness(color) {
        return if lightness < 0.5 { WHITE } else { BLACK };
    }

    match luminance(color) {
        Some(luminance) if luminance > 0.5 => BLACK,
        _ => WHITE,
    }
}

/// Lightness of an `oklch(`/`oklab(` color, as a fraction
fn leading_lightness(color: &str) -> Option<f32> {
    let rest = LIGHTNESS_FUNCTIONS
        .iter()
        .find_map(|prefix| color.strip_prefix(prefix))?
        .trim_start();

    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(rest.len());
    let value: f32 = rest[..end].parse().ok()?;

    if rest[end..].starts_with('%') {
        Some(value / 100.0)
    } else {
        Some(value)
    }
}

/// Weighted luminance of a hex triplet, normalized to `0..=1`
fn luminance(color: &str) -> Option<f32> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .map(f32::from)
    };

    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;
    Some((0.299 * r + 0.587 * g + 0.114 * b) / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_extremes() {
        assert_eq!(contrast_color("#000000"), WHITE);
        assert_eq!(contrast_color("#ffffff"), BLACK);
    }

    #[test]
    fn test_hex_without_hash_and_with_alpha() {
        assert_eq!(contrast_color("ffffff"), BLACK);
        assert_eq!(contrast_color("#fbbf2433"), BLACK);
        assert_eq!(contrast_color("#1e3a8a33"), WHITE);
    }

    #[test]
    fn test_lightness_notation() {
        assert_eq!(contrast_color("oklch(0.97 0.014 254.604)"), BLACK);
        assert_eq!(contrast_color("oklch(0.282 0.091 267.935)"), WHITE);
        assert_eq!(contrast_color("oklch(0.5 0 0)"), BLACK);
        assert_eq!(contrast_color("oklch(42% 0.1 30)"), WHITE);
        assert_eq!(contrast_color("oklab(0.9 0.01 0.02)"), BLACK);
    }

    #[test]
    fn test_hex_threshold_is_exclusive() {
        // #808080 sits just above the midpoint
        assert_eq!(contrast_color("#808080"), BLACK);
        assert_eq!(contrast_color("#7f7f7f"), WHITE);
    }

    #[test]
    fn test_malformed_input_does_not_panic() {
        for input in ["", "#", "#12", "oklch(", "rgb(0 0 0)", "#zzzzzz", "#ééé"] {
            assert_eq!(contrast_color(input), WHITE, "input={input:?}");
        }
    }

    proptest! {
        #[test]
        fn prop_hex_maps_to_black_or_white(r: u8, g: u8, b: u8) {
            let color = format!("#{r:02x}{g:02x}{b:02x}");
            let first = contrast_color(&color);
            prop_assert!(first == WHITE || first == BLACK);
            prop_assert_eq!(first, contrast_color(&color));
        }
    }
}
