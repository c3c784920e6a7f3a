//! Palette color values: hex RGB or one of egui's named `Color32` constants.

use std::fmt;

use eframe::egui::Color32;
use once_cell::sync::Lazy;

use crate::error::{AppError, Result};

/// A named `Color32` constant, e.g. `Color32::WHITE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: Color32,
}

pub static NAMED_COLORS: Lazy<Vec<NamedColor>> = Lazy::new(|| {
    [
        ("BLACK", Color32::BLACK),
        ("DARK_GRAY", Color32::DARK_GRAY),
        ("GRAY", Color32::GRAY),
        ("LIGHT_GRAY", Color32::LIGHT_GRAY),
        ("WHITE", Color32::WHITE),
        ("BROWN", Color32::BROWN),
        ("DARK_RED", Color32::DARK_RED),
        ("RED", Color32::RED),
        ("LIGHT_RED", Color32::LIGHT_RED),
        ("YELLOW", Color32::YELLOW),
        ("ORANGE", Color32::ORANGE),
        ("LIGHT_YELLOW", Color32::LIGHT_YELLOW),
        ("KHAKI", Color32::KHAKI),
        ("DARK_GREEN", Color32::DARK_GREEN),
        ("GREEN", Color32::GREEN),
        ("LIGHT_GREEN", Color32::LIGHT_GREEN),
        ("DARK_BLUE", Color32::DARK_BLUE),
        ("BLUE", Color32::BLUE),
        ("LIGHT_BLUE", Color32::LIGHT_BLUE),
        ("GOLD", Color32::GOLD),
    ]
    .into_iter()
    .map(|(name, color)| NamedColor { name, color })
    .collect()
});

/// The value held by a palette role.
///
/// Colors chosen in the picker are always [`PaletteColor::Hex`]; preset
/// defaults that land exactly on a named constant become
/// [`PaletteColor::Named`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    Hex(Color32),
    Named(NamedColor),
}

impl PaletteColor {
    /// Opaque hex value.
    pub fn hex(color: Color32) -> Self {
        PaletteColor::Hex(color.to_opaque())
    }

    /// Classify a toolkit color, preferring a named constant on exact match.
    pub fn from_color32(color: Color32) -> Self {
        let color = color.to_opaque();
        NAMED_COLORS
            .iter()
            .find(|named| named.color == color)
            .map_or(PaletteColor::Hex(color), |named| PaletteColor::Named(*named))
    }

    pub fn color(&self) -> Color32 {
        match self {
            PaletteColor::Hex(c) => *c,
            PaletteColor::Named(named) => named.color,
        }
    }

    /// `#rrggbb`, regardless of variant.
    pub fn to_hex(&self) -> String {
        format_hex(self.color())
    }
}

/// Source-code token used in the palette dump.
impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteColor::Hex(c) => write!(f, "\"{}\"", format_hex(*c)),
            PaletteColor::Named(named) => write!(f, "Color32::{}", named.name),
        }
    }
}

/// Composite a premultiplied (possibly additive, alpha 0) color over an opaque
/// background.
pub fn flatten_over(color: Color32, background: Color32) -> Color32 {
    let keep = 255 - u16::from(color.a());
    let channel = |c: u8, bg: u8| {
        let bg = (u16::from(bg) * keep + 127) / 255;
        (u16::from(c) + bg).min(255) as u8
    };
    Color32::from_rgb(
        channel(color.r(), background.r()),
        channel(color.g(), background.g()),
        channel(color.b(), background.b()),
    )
}

pub fn format_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Parse `#rrggbb` / `#rgb` (leading `#` optional, case-insensitive).
pub fn parse_hex(input: &str) -> Result<Color32> {
    let invalid = || AppError::InvalidColor(input.to_owned());
    let digits = input.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match digits.len() {
        6 => Ok(Color32::from_rgb(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 0x11);
            Ok(Color32::from_rgb(short(0)?, short(1)?, short(2)?))
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_forms() {
        assert_eq!(parse_hex("#ff0000"), Ok(Color32::from_rgb(255, 0, 0)));
        assert_eq!(parse_hex("  00FF7f "), Ok(Color32::from_rgb(0, 255, 127)));
        assert_eq!(parse_hex("#0f8"), Ok(Color32::from_rgb(0x00, 0xff, 0x88)));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "#", "#ff00", "#ff00000", "zzzzzz", "#+12345", "#ff 000"] {
            assert_eq!(
                parse_hex(bad),
                Err(AppError::InvalidColor(bad.to_owned())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn hex_formatting_is_lowercase_rgb() {
        assert_eq!(format_hex(Color32::from_rgb(171, 205, 239)), "#abcdef");
        assert_eq!(PaletteColor::hex(Color32::RED).to_hex(), "#ff0000");
    }

    #[test]
    fn flattening_handles_additive_and_opaque_colors() {
        let additive = Color32::from_additive_luminance(5);
        assert_eq!(flatten_over(additive, Color32::from_gray(27)), Color32::from_gray(32));
        assert_eq!(flatten_over(additive, Color32::from_gray(248)), Color32::from_gray(253));
        assert_eq!(flatten_over(additive, Color32::WHITE), Color32::WHITE);
        assert_eq!(flatten_over(Color32::RED, Color32::BLUE), Color32::RED);
    }

    #[test]
    fn exact_constants_become_named() {
        let white = PaletteColor::from_color32(Color32::WHITE);
        assert!(matches!(white, PaletteColor::Named(n) if n.name == "WHITE"));
        assert_eq!(white.to_string(), "Color32::WHITE");

        let off_white = PaletteColor::from_color32(Color32::from_rgb(254, 255, 255));
        assert_eq!(off_white, PaletteColor::Hex(Color32::from_rgb(254, 255, 255)));
        assert_eq!(off_white.to_string(), "\"#feffff\"");
    }

    #[test]
    fn picked_colors_stay_hex_even_when_named() {
        let red = PaletteColor::hex(Color32::RED);
        assert_eq!(red.to_string(), "\"#ff0000\"");
    }
}
