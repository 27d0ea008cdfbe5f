//! Standardized vertical-column layout.
//!
//! Given a template's content area, [`compute_layout`] walks a vertical
//! cursor once and produces every slot the hydrators fill in: logo box, name
//! and title lines, divider, and the four contact rows. Positions are derived
//! values, computed once per hydrate call, never mutated afterwards.

use crate::foundation::core::Rect;
use crate::layout::tokens::{
    self, CONTACT_DOT_OFFSET, CONTACT_DOT_RADIUS, CONTACT_GAP, CONTACT_TEXT_OFFSET, DIVIDER_GAP,
    DIVIDER_MAX_WIDTH, DIVIDER_THICKNESS, LOGO_GAP, LogoTier, NAME_GAP, NAME_LINE_HEIGHT,
    TITLE_GAP, TITLE_LINE_HEIGHT,
};
use crate::scene::node::TextRole;
use crate::scene::object::TextStyle;

/// The rectangular region of a template where the standardized column sits.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContentArea {
    /// Left edge in card pixels.
    pub left: f64,
    /// Top edge in card pixels.
    pub top: f64,
    /// Usable width in card pixels.
    pub width: f64,
}

/// Default content area for templates absent from the lookup table.
pub const DEFAULT_CONTENT_AREA: ContentArea = ContentArea {
    left: 60.0,
    top: 50.0,
    width: 500.0,
};

/// Static lookup table from template identifier (filename stem) to its
/// content area. Unknown templates fall back to [`DEFAULT_CONTENT_AREA`].
const CONTENT_AREAS: [(&str, ContentArea); 5] = [
    (
        "classic",
        ContentArea {
            left: 60.0,
            top: 50.0,
            width: 500.0,
        },
    ),
    (
        "sidebar-left",
        ContentArea {
            left: 70.0,
            top: 60.0,
            width: 430.0,
        },
    ),
    (
        "banner-top",
        ContentArea {
            left: 80.0,
            top: 200.0,
            width: 560.0,
        },
    ),
    (
        "compact",
        ContentArea {
            left: 50.0,
            top: 40.0,
            width: 330.0,
        },
    ),
    (
        "wide-split",
        ContentArea {
            left: 90.0,
            top: 70.0,
            width: 620.0,
        },
    ),
];

/// Look up the content area for a template identifier.
pub fn content_area_for(template_id: &str) -> ContentArea {
    CONTENT_AREAS
        .iter()
        .find(|(stem, _)| *stem == template_id)
        .map(|(_, area)| *area)
        .unwrap_or(DEFAULT_CONTENT_AREA)
}

/// An anchored text slot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextSlot {
    /// Left anchor of the text origin.
    pub x: f64,
    /// Top anchor of the text origin.
    pub y: f64,
    /// Typography for this slot (font size already heading-scaled).
    pub style: TextStyle,
    /// Maximum text width before truncation.
    pub max_width: f64,
}

/// Anchor of a contact row's bullet dot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DotAnchor {
    /// Dot center x.
    pub x: f64,
    /// Dot center y (centered vertically on the row).
    pub y: f64,
    /// Dot radius.
    pub radius: f64,
}

/// One contact row: a text anchor plus its bullet-dot anchor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContactRow {
    /// Which profile field this row binds to.
    pub role: TextRole,
    /// Text slot.
    pub text: TextSlot,
    /// Bullet-dot anchor.
    pub dot: DotAnchor,
}

/// All slot positions of the standardized column, computed once per hydrate.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutPositions {
    /// Logo box.
    pub logo: Rect,
    /// Logo tier the box was sized from.
    pub logo_tier: LogoTier,
    /// Business name slot.
    pub name: TextSlot,
    /// Tagline slot.
    pub title: TextSlot,
    /// Divider bar.
    pub divider: Rect,
    /// The four contact rows in fixed order {phone, email, website, address}.
    pub contacts: [ContactRow; 4],
}

/// Compute the standardized column layout for a content area.
///
/// The vertical cursor starts at `area.top` and advances through logo box,
/// name, title, divider and the four contact rows; every advance uses the
/// shared tokens, so row Y positions strictly increase down the stack.
pub fn compute_layout(area: &ContentArea) -> LayoutPositions {
    let heading_scale = if area.width < 400.0 {
        (area.width / 500.0).max(0.7)
    } else {
        1.0
    };
    let name_font_size = (tokens::NAME_FONT_SIZE * heading_scale).round();

    let tier = LogoTier::for_width(area.width);
    let logo_size = tier.size();

    let mut y = area.top;

    let logo = Rect::new(area.left, y, area.left + logo_size, y + logo_size);
    y += logo_size + LOGO_GAP;

    let name = TextSlot {
        x: area.left,
        y,
        style: TextStyle {
            font_size: name_font_size,
            ..tokens::NAME_STYLE
        },
        max_width: area.width,
    };
    y += (name_font_size * NAME_LINE_HEIGHT).ceil() + NAME_GAP;

    let title = TextSlot {
        x: area.left,
        y,
        style: tokens::TITLE_STYLE,
        max_width: area.width,
    };
    y += (tokens::TITLE_FONT_SIZE * TITLE_LINE_HEIGHT).ceil() + TITLE_GAP;

    let divider_width = (area.width * 0.25).min(DIVIDER_MAX_WIDTH);
    let divider = Rect::new(area.left, y, area.left + divider_width, y + DIVIDER_THICKNESS);
    y += DIVIDER_THICKNESS + DIVIDER_GAP;

    let contacts = TextRole::CONTACT_ORDER.map(|role| {
        let row = ContactRow {
            role,
            text: TextSlot {
                x: area.left + CONTACT_TEXT_OFFSET,
                y,
                style: tokens::CONTACT_STYLE,
                max_width: (area.width - CONTACT_TEXT_OFFSET).max(0.0),
            },
            dot: DotAnchor {
                x: area.left + CONTACT_DOT_OFFSET,
                y: y + tokens::CONTACT_FONT_SIZE / 2.0,
                radius: CONTACT_DOT_RADIUS,
            },
        };
        y += tokens::CONTACT_FONT_SIZE + CONTACT_GAP;
        row
    });

    LayoutPositions {
        logo,
        logo_tier: tier,
        name,
        title,
        divider,
        contacts,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
