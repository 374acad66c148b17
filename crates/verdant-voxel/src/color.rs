//! 24-bit voxel colors and the per-plant [`ColorPalette`].

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rgb
// ---------------------------------------------------------------------------

/// A packed `0xRRGGBB` sRGB color.
///
/// Serialized as a bare integer so catalog files can write `0xE8453C`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Rgb(u32);

impl Rgb {
    /// Builds a color from a hex literal. Bits above the low 24 are discarded.
    pub const fn hex(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }

    /// Returns the packed `0xRRGGBB` value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the `(r, g, b)` channels.
    pub const fn channels(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }

    /// Converts to linear RGBA with full opacity, the form the cube renderer
    /// uploads per instance.
    pub fn to_linear_rgba(self) -> [f32; 4] {
        let (r, g, b) = self.channels();
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), 1.0]
    }
}

impl From<u32> for Rgb {
    fn from(value: u32) -> Self {
        Self::hex(value)
    }
}

impl From<Rgb> for u32 {
    fn from(color: Rgb) -> Self {
        color.0
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

fn srgb_to_linear(channel: u8) -> f32 {
    let c = f32::from(channel) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ---------------------------------------------------------------------------
// ColorPalette
// ---------------------------------------------------------------------------

/// Colors driving a plant recipe.
///
/// `primary` paints the dominant ornament, `foliage` the green mass and
/// stalks. `secondary` is an optional contrasting accent; recipes read it
/// through [`ColorPalette::accent`], which falls back to `primary`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Dominant flower / ornament color.
    pub primary: Rgb,
    /// Optional accent color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Rgb>,
    /// Leaf and stalk color.
    pub foliage: Rgb,
}

impl ColorPalette {
    /// Creates a palette with an accent color.
    pub const fn new(primary: Rgb, secondary: Rgb, foliage: Rgb) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
            foliage,
        }
    }

    /// Creates a palette without an accent color.
    pub const fn without_accent(primary: Rgb, foliage: Rgb) -> Self {
        Self {
            primary,
            secondary: None,
            foliage,
        }
    }

    /// The accent color: `secondary` when present, otherwise `primary`.
    pub fn accent(&self) -> Rgb {
        self.secondary.unwrap_or(self.primary)
    }
}
