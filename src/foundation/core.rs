use crate::foundation::error::{PlacardError, PlacardResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Card canvas width in logical pixel units, fixed for all templates.
pub const CARD_WIDTH: f64 = 1050.0;

/// Card canvas height in logical pixel units, fixed for all templates.
pub const CARD_HEIGHT: f64 = 600.0;

/// Straight-alpha RGBA8 color.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default,
)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Build an opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build a color from all four channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Whether the color is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` hex notation.
    pub fn parse_hex(s: &str) -> PlacardResult<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(PlacardError::template(format!("invalid hex color '{s}'")));
        }
        let nibble = |idx: usize| -> PlacardResult<u8> {
            u8::from_str_radix(&hex[idx..idx + 1], 16)
                .map_err(|_| PlacardError::template(format!("invalid hex color '{s}'")))
        };
        let byte = |idx: usize| -> PlacardResult<u8> {
            u8::from_str_radix(&hex[idx..idx + 2], 16)
                .map_err(|_| PlacardError::template(format!("invalid hex color '{s}'")))
        };
        match hex.len() {
            3 => {
                let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(PlacardError::template(format!("invalid hex color '{s}'"))),
        }
    }

    /// Format as lowercase `#rrggbb` (alpha omitted when opaque).
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}
