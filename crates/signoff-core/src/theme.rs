//! Color themes for the capture screen.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#rrggbb` string. Malformed input falls back to mid-gray.
    pub fn from_hex(hex: &str) -> Self {
        // The ASCII check keeps the byte slices below on char boundaries.
        if hex.starts_with('#') && hex.len() == 7 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[1..3], 16).unwrap_or(128);
            let g = u8::from_str_radix(&hex[3..5], 16).unwrap_or(128);
            let b = u8::from_str_radix(&hex[5..7], 16).unwrap_or(128);
            Self::new(r, g, b, 255)
        } else {
            Self::new(128, 128, 128, 255)
        }
    }

    /// Format as `#rrggbb`, dropping alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Screen appearance selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// The palette for this appearance.
    pub fn theme(self) -> Theme {
        match self {
            ColorScheme::Light => Theme::light(),
            ColorScheme::Dark => Theme::dark(),
        }
    }

    /// Switch to the other appearance.
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }
}

/// Palette for one appearance.
///
/// Always passed down explicitly, never read from a global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Screen background.
    pub background: Rgba,
    /// Primary text and ink color.
    pub text: Rgba,
    /// Secondary labels and placeholders.
    pub muted_text: Rgba,
    /// Card surfaces, including the signature canvas.
    pub card: Rgba,
    /// Card and canvas outlines.
    pub border: Rgba,
    /// Primary action color.
    pub accent: Rgba,
    /// Text placed on the accent color.
    pub accent_text: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Rgba::new(0xf4, 0xf6, 0xfb, 0xff),
            text: Rgba::new(0x1a, 0x1a, 0x1a, 0xff),
            muted_text: Rgba::new(0x4f, 0x5a, 0x70, 0xff),
            card: Rgba::new(0xff, 0xff, 0xff, 0xff),
            border: Rgba::new(0xdd, 0xe3, 0xf0, 0xff),
            accent: Rgba::new(0x3d, 0x5a, 0xfe, 0xff),
            accent_text: Rgba::new(0xff, 0xff, 0xff, 0xff),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Rgba::new(0x0e, 0x12, 0x1b, 0xff),
            text: Rgba::new(0xf0, 0xf3, 0xff, 0xff),
            muted_text: Rgba::new(0x9b, 0xa6, 0xc1, 0xff),
            card: Rgba::new(0x17, 0x1f, 0x2d, 0xff),
            border: Rgba::new(0x1f, 0x2a, 0x3e, 0xff),
            accent: Rgba::new(0x76, 0x90, 0xff, 0xff),
            accent_text: Rgba::new(0x0e, 0x12, 0x1b, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_per_scheme() {
        let light = ColorScheme::Light.theme();
        let dark = ColorScheme::Dark.theme();

        assert_eq!(light.background.to_hex(), "#f4f6fb");
        assert_eq!(dark.background.to_hex(), "#0e121b");
        assert_ne!(light.accent, dark.accent);
    }

    #[test]
    fn test_scheme_toggle() {
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggled(), ColorScheme::Light);
    }

    #[test]
    fn test_hex_parse_and_format() {
        let accent = Rgba::from_hex("#3d5afe");
        assert_eq!(accent, Rgba::new(0x3d, 0x5a, 0xfe, 0xff));
        assert_eq!(accent.to_hex(), "#3d5afe");
    }

    #[test]
    fn test_malformed_hex_falls_back_to_gray() {
        assert_eq!(Rgba::from_hex("3d5afe"), Rgba::new(128, 128, 128, 255));
        assert_eq!(Rgba::from_hex("#zzzzzz"), Rgba::new(128, 128, 128, 255));
    }

    #[test]
    fn test_multibyte_hex_falls_back_to_gray() {
        // 7 bytes but not 7 ASCII digits; must not slice inside the char.
        assert_eq!(Rgba::from_hex("#a€zz"), Rgba::new(128, 128, 128, 255));
        assert_eq!(Rgba::from_hex("#ééé"), Rgba::new(128, 128, 128, 255));
    }

    #[test]
    fn test_peniko_conversion_round_trip() {
        let accent = Rgba::new(0x3d, 0x5a, 0xfe, 0xff);
        let color: Color = accent.into();
        let back: Rgba = color.into();
        assert_eq!(accent, back);
    }
}
