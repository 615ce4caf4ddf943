/// A color-name keyword and the swatch color it renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchRule {
    pub keyword: &'static str,
    pub rgb: [u8; 3],
}

/// Color used when no rule matches a color name.
pub const FALLBACK_SWATCH: [u8; 3] = [0x6b, 0x72, 0x80];

/// Rules are checked in order and the first keyword found wins, so
/// "Charcoal black" is black and "Crisp white" is white.
pub const SWATCH_RULES: [SwatchRule; 10] = [
    SwatchRule { keyword: "white", rgb: [0xff, 0xff, 0xff] },
    SwatchRule { keyword: "black", rgb: [0x00, 0x00, 0x00] },
    SwatchRule { keyword: "gray", rgb: [0x6b, 0x72, 0x80] },
    SwatchRule { keyword: "blue", rgb: [0x3b, 0x82, 0xf6] },
    SwatchRule { keyword: "green", rgb: [0x10, 0xb9, 0x81] },
    SwatchRule { keyword: "yellow", rgb: [0xf5, 0x9e, 0x0b] },
    SwatchRule { keyword: "red", rgb: [0xef, 0x44, 0x44] },
    SwatchRule { keyword: "purple", rgb: [0x8b, 0x5c, 0xf6] },
    SwatchRule { keyword: "pink", rgb: [0xec, 0x48, 0x99] },
    SwatchRule { keyword: "brown", rgb: [0xa3, 0x76, 0x5b] },
];

/// Swatch color for a human-readable color name (case-insensitive).
pub fn swatch_rgb(color_name: &str) -> [u8; 3] {
    let name = color_name.to_lowercase();
    SWATCH_RULES
        .iter()
        .find(|rule| name.contains(rule.keyword))
        .map(|rule| rule.rgb)
        .unwrap_or(FALLBACK_SWATCH)
}

pub fn swatch_hex(color_name: &str) -> String {
    let [r, g, b] = swatch_rgb(color_name);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
