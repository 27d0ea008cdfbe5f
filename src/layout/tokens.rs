//! Layout tokens: the named constants shared by every template.
//!
//! Spacing, typography and logo tiers are identical across templates so the
//! standardized column reads the same everywhere; only the content area
//! (where the column sits) varies per template.

use crate::scene::object::{FontWeight, TextAlign, TextStyle};

/// Base font size for the business name before heading scaling.
pub const NAME_FONT_SIZE: f64 = 44.0;
/// Font size for the tagline.
pub const TITLE_FONT_SIZE: f64 = 18.0;
/// Font size for contact rows.
pub const CONTACT_FONT_SIZE: f64 = 14.0;

/// Gap below the logo box.
pub const LOGO_GAP: f64 = 20.0;
/// Gap below the name line.
pub const NAME_GAP: f64 = 8.0;
/// Gap below the title line.
pub const TITLE_GAP: f64 = 18.0;
/// Gap below the divider.
pub const DIVIDER_GAP: f64 = 16.0;
/// Vertical gap between contact rows (added to the contact font size).
pub const CONTACT_GAP: f64 = 10.0;

/// Divider bar thickness.
pub const DIVIDER_THICKNESS: f64 = 2.0;
/// Divider width cap (the divider is min of this and 25% of area width).
pub const DIVIDER_MAX_WIDTH: f64 = 100.0;

/// Horizontal offset of contact row text from the content-area left edge.
pub const CONTACT_TEXT_OFFSET: f64 = 18.0;
/// Horizontal offset of contact bullet dots from the content-area left edge.
pub const CONTACT_DOT_OFFSET: f64 = 6.0;
/// Bullet dot radius.
pub const CONTACT_DOT_RADIUS: f64 = 3.0;

/// Line-height multiplier for the name slot.
pub const NAME_LINE_HEIGHT: f64 = 1.15;
/// Line-height multiplier for the title slot.
pub const TITLE_LINE_HEIGHT: f64 = 1.3;

/// Width-estimation ratio: average glyph advance per character as a fraction
/// of the font size. A documented approximation, not real glyph metrics.
pub const CHAR_WIDTH_RATIO: f64 = 0.55;

/// Discrete logo box size tiers selected by content-area width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoTier {
    /// Narrow areas (width < 350).
    Small,
    /// Default tier.
    Medium,
    /// Wide areas (width >= 500).
    Large,
}

impl LogoTier {
    /// Pick the tier for a content-area width.
    pub fn for_width(width: f64) -> Self {
        if width < 350.0 {
            Self::Small
        } else if width >= 500.0 {
            Self::Large
        } else {
            Self::Medium
        }
    }

    /// Logo box side length for this tier (boxes are square).
    pub fn size(self) -> f64 {
        match self {
            Self::Small => 60.0,
            Self::Medium => 80.0,
            Self::Large => 100.0,
        }
    }
}

/// Typography token for the name slot (size applied after heading scaling).
pub const NAME_STYLE: TextStyle = TextStyle {
    font_size: NAME_FONT_SIZE,
    weight: FontWeight::Bold,
    letter_spacing: 0.0,
    align: TextAlign::Left,
};

/// Typography token for the title slot.
pub const TITLE_STYLE: TextStyle = TextStyle {
    font_size: TITLE_FONT_SIZE,
    weight: FontWeight::Normal,
    letter_spacing: 0.4,
    align: TextAlign::Left,
};

/// Typography token for contact rows.
pub const CONTACT_STYLE: TextStyle = TextStyle {
    font_size: CONTACT_FONT_SIZE,
    weight: FontWeight::Normal,
    letter_spacing: 0.2,
    align: TextAlign::Left,
};
