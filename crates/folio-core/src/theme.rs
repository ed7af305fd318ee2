//! Named color palettes and the fixed palette registry.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Palette id reserved for ad-hoc user-supplied colors.
pub const CUSTOM_PALETTE_ID: &str = "custom";

/// The four colors a palette carries, hex-encoded (`#RRGGBB`).
///
/// Field names match the backend theme-preference payload and the local
/// preferences file, so this type serializes on both paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub accent_color: String,
    pub background_color: String,
    pub dark_text_color: String,
    pub light_text_color: String,
}

/// A named palette from the registry, or an ad-hoc custom one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub id: String,
    pub name: String,
    pub colors: ThemeColors,
}

impl Palette {
    fn predefined(id: &str, name: &str, colors: [&str; 4]) -> Self {
        let [accent, background, dark, light] = colors;
        Self {
            id: id.to_string(),
            name: name.to_string(),
            colors: ThemeColors {
                accent_color: accent.to_string(),
                background_color: background.to_string(),
                dark_text_color: dark.to_string(),
                light_text_color: light.to_string(),
            },
        }
    }

    /// Builds the ad-hoc palette for user-supplied colors.
    pub fn custom(colors: ThemeColors) -> Self {
        Self {
            id: CUSTOM_PALETTE_ID.to_string(),
            name: "Custom".to_string(),
            colors,
        }
    }
}

static PREDEFINED: LazyLock<Vec<Palette>> = LazyLock::new(|| {
    vec![
        Palette::predefined(
            "burgundy",
            "Burgundy",
            ["#6F1110", "#EDEBDD", "#1B1717", "#EDEBDD"],
        ),
        Palette::predefined(
            "forest",
            "Forest",
            ["#233126", "#D8D0C2", "#1B1717", "#D8D0C2"],
        ),
        Palette::predefined(
            "ocean",
            "Ocean",
            ["#0a5a7a", "#d9e8f0", "#1B1717", "#d9e8f0"],
        ),
        Palette::predefined(
            "sunset",
            "Sunset",
            ["#d97441", "#fce4d9", "#2d1b0f", "#fce4d9"],
        ),
        Palette::predefined(
            "midnight",
            "Midnight",
            ["#465b75", "#0f1419", "#ffffff", "#d1d5db"],
        ),
    ]
});

/// Returns the predefined palettes in picker display order.
pub fn palettes() -> &'static [Palette] {
    &PREDEFINED
}

/// Looks up a predefined palette by id.
pub fn find_palette(id: &str) -> Option<&'static Palette> {
    PREDEFINED.iter().find(|palette| palette.id == id)
}

/// Returns the fallback palette. The registry always has at least one entry.
pub fn default_palette() -> &'static Palette {
    &PREDEFINED[0]
}

/// Parses a `#RRGGBB` hex color into RGB components.
///
/// Strict: exactly one leading `#` followed by six hex digits.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let digits = value.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}
