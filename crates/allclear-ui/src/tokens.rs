//! Design-token exports derived from the palette tables.
//!
//! Custom property names come straight from each entry's `variable`, so the
//! stylesheet and the style guide always agree on naming.

use serde::Serialize;

use crate::palette::{COLOR_PALETTE, ColorEntry, GRADIENTS, GradientEntry};

/// Serializable bundle of every design token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TokenSet<'a> {
    /// Palette entries in declaration order.
    pub colors: &'a [ColorEntry],
    /// Gradient entries in declaration order.
    pub gradients: &'a [GradientEntry],
}

impl TokenSet<'static> {
    /// Token set backed by the brand tables.
    #[must_use]
    pub const fn brand() -> Self {
        Self {
            colors: COLOR_PALETTE,
            gradients: GRADIENTS,
        }
    }
}

/// Renders `:root { --<variable>: <hex>; }` for the given palette.
#[must_use]
pub fn custom_properties(entries: &[ColorEntry]) -> String {
    let mut css = String::from(":root {\n");
    for entry in entries {
        css.push_str("  --");
        css.push_str(entry.variable);
        css.push_str(": ");
        css.push_str(entry.hex);
        css.push_str(";\n");
    }
    css.push_str("}\n");
    css
}

/// Custom properties for the brand palette.
#[must_use]
pub fn css_custom_properties() -> String {
    custom_properties(COLOR_PALETTE)
}

/// Pretty JSON for the brand token set.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn tokens_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&TokenSet::brand())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn custom_properties_follow_palette_order() {
        let css = css_custom_properties();
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(lines.first(), Some(&":root {"));
        assert_eq!(lines.get(1), Some(&"  --primary-yellow: #FFD809;"));
        assert_eq!(lines.get(2), Some(&"  --black: #000000;"));
        assert_eq!(lines.last(), Some(&"}"));
        assert_eq!(lines.len(), COLOR_PALETTE.len() + 2);
    }

    #[test]
    fn custom_properties_for_empty_palette_is_empty_block() {
        assert_eq!(custom_properties(&[]), ":root {\n}\n");
    }

    #[test]
    fn tokens_json_uses_camel_case_fields() -> Result<(), serde_json::Error> {
        let value: Value = serde_json::from_str(&tokens_json()?)?;
        assert_eq!(value["colors"][0]["hex"], "#FFD809");
        assert_eq!(value["colors"][0]["textColor"], "black");
        assert_eq!(value["colors"][1]["textColor"], "white");
        assert_eq!(
            value["gradients"][0]["css"],
            "bg-gradient-to-r from-black/60 to-transparent"
        );
        Ok(())
    }
}
