use crate::{CubeError, Result, FACE_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// 8-bit RGB color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to 0..=1, as instance color buffers expect
    pub fn to_f32(self) -> [f32; 3] {
        [self.r, self.g, self.b].map(|v| v as f32 / 255.0)
    }
}

impl FromStr for Color {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self> {
        let err = || CubeError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = CubeError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// One color per face, index-aligned with [`crate::FACES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette(pub [Color; FACE_COUNT]);

impl Palette {
    pub const DEFAULT: Palette = Palette([
        Color::rgb(0xff, 0x00, 0x3c),
        Color::rgb(0xff, 0x7b, 0x00),
        Color::rgb(0xff, 0xcd, 0x00),
        Color::rgb(0x5e, 0xd7, 0x23),
        Color::rgb(0x1e, 0x63, 0xff),
        Color::rgb(0xba, 0x0d, 0xbe),
    ]);

    pub fn get(&self, face: usize) -> Option<Color> {
        self.0.get(face).copied()
    }

    pub fn colors(&self) -> &[Color; FACE_COUNT] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Sole owner of the mutable palette.
///
/// Every successful [`PaletteAssigner::set_color`] raises a change flag the
/// caller drains with [`PaletteAssigner::take_changed`] before laying out again.
#[derive(Debug, Clone, Default)]
pub struct PaletteAssigner {
    palette: Palette,
    changed: bool,
}

impl PaletteAssigner {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            changed: false,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_color(&mut self, face: usize, color: Color) -> Result<()> {
        let slot = self
            .palette
            .0
            .get_mut(face)
            .ok_or(CubeError::FaceIndex(face))?;
        debug!(face, %color, "palette color set");
        *slot = color;
        self.changed = true;
        Ok(())
    }

    /// Whether colors changed since the last call
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}
