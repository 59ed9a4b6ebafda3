use serde::Serialize;
use std::fmt;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn parse_hex(text: &str) -> Option<Self> {
        let hex = text.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// A named LED color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PaletteColor {
    pub name: &'static str,
    pub rgb: Rgb,
}

impl PaletteColor {
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            rgb: Rgb(r, g, b),
        }
    }
}

pub const RED: PaletteColor = PaletteColor::new("red", 0xff, 0x00, 0x00);
pub const GREEN: PaletteColor = PaletteColor::new("green", 0x00, 0xff, 0x00);
pub const CYAN: PaletteColor = PaletteColor::new("cyan", 0x00, 0xff, 0xff);
pub const AMBER: PaletteColor = PaletteColor::new("amber", 0xff, 0x99, 0x00);
pub const MAGENTA: PaletteColor = PaletteColor::new("magenta", 0xff, 0x00, 0xff);

/// Fixed, ordered, non-empty list of LED colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<PaletteColor>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![RED, GREEN, CYAN, AMBER, MAGENTA],
        }
    }
}

impl Palette {
    pub fn new(colors: Vec<PaletteColor>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[PaletteColor] {
        &self.colors
    }

    /// Color at `selection`, wrapping if the selection came from a larger palette.
    pub fn color(&self, selection: ColorSelection) -> PaletteColor {
        self.colors[selection.index() % self.colors.len()]
    }

    /// Finds a color by name (case-insensitive) or by `#rrggbb` hex value.
    pub fn resolve(&self, name_or_hex: &str) -> Result<ColorSelection> {
        let needle = name_or_hex.trim();
        let by_hex = Rgb::parse_hex(&needle.to_ascii_lowercase());

        self.colors
            .iter()
            .position(|color| {
                color.name.eq_ignore_ascii_case(needle) || Some(color.rgb) == by_hex
            })
            .map(ColorSelection::new)
            .ok_or_else(|| Error::UnknownColor(name_or_hex.to_string()))
    }
}

/// Index into a palette that cycles forward and wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ColorSelection(usize);

impl ColorSelection {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// `(index + 1) mod palette_len`. A zero length leaves the selection at 0.
    pub fn advanced(self, palette_len: usize) -> Self {
        if palette_len == 0 {
            return Self(0);
        }
        Self((self.0 % palette_len + 1) % palette_len)
    }
}
