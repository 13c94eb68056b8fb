//! Brand palette and gradient tables for the All Clear Gear style guide.
//!
//! Both tables are literal and ordered: the style guide renders entries in
//! declaration order. Palette entries are keyed by `hex`, so the table must
//! not repeat a hex code.

use serde::Serialize;

/// Foreground color drawn on top of a swatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    /// Black text, for light swatches.
    Black,
    /// White text, for dark swatches.
    White,
}

impl TextColor {
    /// CSS color keyword for the foreground.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

/// A named brand color with its usage notes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorEntry {
    /// Display label.
    pub name: &'static str,
    /// `#RRGGBB` code.
    pub hex: &'static str,
    /// Where the color is applied.
    pub usage: &'static str,
    /// Kebab-case symbolic identifier.
    pub variable: &'static str,
    /// Contrasting foreground chosen by the palette author.
    pub text_color: TextColor,
}

/// A named gradient with its CSS and utility-class forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientEntry {
    /// Display label.
    pub name: &'static str,
    /// CSS gradient function applied as an inline background.
    pub gradient: &'static str,
    /// Where the gradient is applied.
    pub usage: &'static str,
    /// Utility-class expression producing the same gradient.
    pub css: &'static str,
}

/// Primary brand yellow. Always `#FFD809`, never `#FFD804`.
pub const PRIMARY_YELLOW: &str = "#FFD809";

/// Core colors used throughout the marketplace application.
pub const COLOR_PALETTE: &[ColorEntry] = &[
    ColorEntry {
        name: "Primary Yellow",
        hex: PRIMARY_YELLOW,
        usage: "Brand color, buttons, highlights, active states",
        variable: "primary-yellow",
        text_color: TextColor::Black,
    },
    ColorEntry {
        name: "Black",
        hex: "#000000",
        usage: "Header, sidebar, primary text",
        variable: "black",
        text_color: TextColor::White,
    },
    ColorEntry {
        name: "White",
        hex: "#FFFFFF",
        usage: "Text on dark backgrounds, card backgrounds",
        variable: "white",
        text_color: TextColor::Black,
    },
    ColorEntry {
        name: "Gray 100",
        hex: "#F3F4F6",
        usage: "Page background, light backgrounds",
        variable: "gray-100",
        text_color: TextColor::Black,
    },
    ColorEntry {
        name: "Gray 400",
        hex: "#9CA3AF",
        usage: "Placeholder text, icons, disabled states",
        variable: "gray-400",
        text_color: TextColor::White,
    },
    ColorEntry {
        name: "Gray 800",
        hex: "#1F2937",
        usage: "Secondary text, borders",
        variable: "gray-800",
        text_color: TextColor::White,
    },
];

/// Gradient overlays and effects used in the design.
pub const GRADIENTS: &[GradientEntry] = &[GradientEntry {
    name: "Hero Overlay",
    gradient: "linear-gradient(to right, rgba(0, 0, 0, 0.6), transparent)",
    usage: "Hero section overlay",
    css: "bg-gradient-to-r from-black/60 to-transparent",
}];

/// Returns `true` when `value` is `#` followed by exactly six hex digits.
#[must_use]
pub fn is_hex_code(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|digits| digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Returns `true` for non-empty lowercase kebab-case identifiers.
#[must_use]
pub fn is_kebab_case(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// First hex code that appears more than once, compared case-insensitively.
///
/// A repeated hex breaks list identity for the palette; treat a hit as a
/// data-entry bug.
#[must_use]
pub fn duplicate_hex(entries: &[ColorEntry]) -> Option<&'static str> {
    entries.iter().enumerate().find_map(|(index, entry)| {
        entries[..index]
            .iter()
            .any(|earlier| earlier.hex.eq_ignore_ascii_case(entry.hex))
            .then_some(entry.hex)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_keeps_declaration_order() {
        let names: Vec<_> = COLOR_PALETTE.iter().map(|entry| entry.name).collect();
        assert_eq!(
            names,
            [
                "Primary Yellow",
                "Black",
                "White",
                "Gray 100",
                "Gray 400",
                "Gray 800"
            ]
        );
    }

    #[test]
    fn palette_hex_codes_are_unique() {
        assert_eq!(duplicate_hex(COLOR_PALETTE), None);
    }

    #[test]
    fn palette_literals_are_well_formed() {
        for entry in COLOR_PALETTE {
            assert!(is_hex_code(entry.hex), "bad hex for {}", entry.name);
            assert!(is_kebab_case(entry.variable), "bad variable for {}", entry.name);
            assert!(!entry.usage.is_empty());
        }
    }

    #[test]
    fn primary_yellow_uses_black_text() {
        let yellow = COLOR_PALETTE
            .iter()
            .find(|entry| entry.hex == PRIMARY_YELLOW);
        assert_eq!(yellow.map(|entry| entry.text_color), Some(TextColor::Black));
    }

    #[test]
    fn duplicate_hex_flags_repeats_case_insensitively() {
        let mut entries = COLOR_PALETTE.to_vec();
        entries.push(ColorEntry {
            name: "Yellow Again",
            hex: "#ffd809",
            usage: "",
            variable: "yellow-again",
            text_color: TextColor::Black,
        });
        assert_eq!(duplicate_hex(&entries), Some("#ffd809"));
    }

    #[test]
    fn hex_and_kebab_checks_reject_malformed_values() {
        assert!(is_hex_code("#1f2937"));
        assert!(!is_hex_code("FFD809"));
        assert!(!is_hex_code("#FFD8"));
        assert!(!is_hex_code("#GGGGGG"));
        assert!(!is_kebab_case("Gray-100"));
        assert!(!is_kebab_case("gray--100"));
        assert!(!is_kebab_case(""));
    }

    #[test]
    fn text_color_maps_to_css_keyword() {
        assert_eq!(TextColor::Black.as_str(), "black");
        assert_eq!(TextColor::White.as_str(), "white");
    }
}
