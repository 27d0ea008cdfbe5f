//! Text field hydration.
//!
//! Resolves semantic ids to brand profile content, estimates widths with the
//! documented character-ratio heuristic, truncates overflowing content with
//! an ellipsis, and materializes the final text nodes plus the structural
//! divider and bullet dots at their layout slots.

use crate::brand::profile::BrandProfile;
use crate::foundation::core::Rect;
use crate::hydrate::flatten::TextFieldMetadata;
use crate::layout::solver::{LayoutPositions, TextSlot};
use crate::layout::tokens::CHAR_WIDTH_RATIO;
use crate::scene::node::{Semantic, ShapeKind, TextRole, classify};
use crate::scene::object::{
    ObjectKind, ObjectRole, Placement, RenderableObject, ResolvedPaint, TextStyle,
};
use crate::transform::affine::decompose;

const ELLIPSIS: &str = "\u{2026}";

/// Resolve a text role to brand profile content.
///
/// Never fails: every role has a literal fallback used when the profile
/// field is empty.
pub fn resolve_content(role: TextRole, profile: &BrandProfile) -> String {
    fn or_default(value: &str, fallback: &str) -> String {
        if value.trim().is_empty() {
            fallback.to_string()
        } else {
            value.to_string()
        }
    }
    match role {
        TextRole::Name => or_default(&profile.business_name, "Your Business Name"),
        TextRole::Title => or_default(&profile.tagline, "Your Tagline"),
        TextRole::Phone => or_default(&profile.contact_info.phone, "(555) 123-4567"),
        TextRole::Email => or_default(&profile.contact_info.email, "hello@example.com"),
        TextRole::Website => or_default(&profile.contact_info.website, "www.example.com"),
        TextRole::Address => or_default(&profile.contact_info.address, "123 Main Street"),
    }
}

/// Resolve a raw semantic id to profile content.
///
/// Ids outside the text-field vocabulary yield a visible placeholder string
/// rather than an error.
pub fn resolve_field(id: &str, profile: &BrandProfile) -> String {
    match classify(Some(id)) {
        Semantic::TextField(role) => resolve_content(role, profile),
        _ => "Placeholder".to_string(),
    }
}

/// Estimate rendered text width with the constant-ratio heuristic.
///
/// Not real glyph metrics; the truncation contract (ellipsis, fits within
/// the box width under this same estimate) is what downstream relies on.
pub fn estimate_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * CHAR_WIDTH_RATIO
}

/// Truncate text so its estimated width fits `max_width`, appending an
/// ellipsis. Worst case returns the ellipsis alone; never fails.
pub fn truncate(text: &str, font_size: f64, max_width: f64) -> String {
    if estimate_width(text, font_size) <= max_width {
        return text.to_string();
    }
    let char_width = font_size * CHAR_WIDTH_RATIO;
    let available = max_width - estimate_width(ELLIPSIS, font_size);
    let max_chars = if available > 0.0 {
        (available / char_width).floor() as usize
    } else {
        0
    };
    if max_chars == 0 {
        return ELLIPSIS.to_string();
    }
    let kept: String = text.chars().take(max_chars).collect();
    format!("{kept}{ELLIPSIS}")
}

/// Text plus structural objects produced by the hydrator.
#[derive(Clone, Debug, Default)]
pub struct TextHydration {
    /// Final text nodes.
    pub texts: Vec<RenderableObject>,
    /// Divider and bullet dots, locked.
    pub structural: Vec<RenderableObject>,
}

/// Materialize text fields and structural elements at their layout slots.
///
/// Each collected field becomes one text node at its slot (duplicate roles
/// keep the first occurrence). The divider and all four bullet dots are part
/// of the standardized column and are always emitted.
#[tracing::instrument(skip_all)]
pub fn materialize(
    layout: &LayoutPositions,
    fields: &[TextFieldMetadata],
    profile: &BrandProfile,
) -> TextHydration {
    let mut out = TextHydration::default();
    let mut seen: Vec<TextRole> = Vec::new();

    for field in fields {
        if seen.contains(&field.role) {
            continue;
        }
        seen.push(field.role);

        let slot = match field.role {
            TextRole::Name => layout.name,
            TextRole::Title => layout.title,
            role => {
                let row = layout
                    .contacts
                    .iter()
                    .find(|row| row.role == role)
                    .map(|row| row.text);
                match row {
                    Some(slot) => slot,
                    None => continue,
                }
            }
        };
        out.texts.push(build_text(field, slot, profile));
    }

    out.structural.push(divider_object(layout.divider, profile));
    for row in &layout.contacts {
        out.structural.push(RenderableObject {
            id: Some(format!("#layout_dot_{:?}", row.role).to_lowercase()),
            kind: ObjectKind::Shape {
                shape: ShapeKind::Circle,
                corner_radius: 0.0,
            },
            placement: Placement::from_rect(Rect::new(
                row.dot.x - row.dot.radius,
                row.dot.y - row.dot.radius,
                row.dot.x + row.dot.radius,
                row.dot.y + row.dot.radius,
            )),
            fill: ResolvedPaint::Color(profile.colors.primary_text),
            stroke: ResolvedPaint::None,
            role: ObjectRole::Structural,
            locked: true,
        });
    }
    out
}

fn build_text(
    field: &TextFieldMetadata,
    slot: TextSlot,
    profile: &BrandProfile,
) -> RenderableObject {
    // Bake any inherited scale into the font size so the emitted node has
    // unit scale and downstream tools work in true pixel units.
    let inherited_scale = decompose(field.absolute)
        .map(|d| d.scale_y.abs())
        .unwrap_or(1.0);
    let font_size = if inherited_scale > 0.0 {
        (slot.style.font_size * inherited_scale).round()
    } else {
        slot.style.font_size
    };

    let content = truncate(&resolve_content(field.role, profile), font_size, slot.max_width);

    RenderableObject {
        id: Some(field.id.clone()),
        kind: ObjectKind::Text {
            content,
            style: TextStyle {
                font_size,
                ..slot.style
            },
        },
        placement: Placement::from_rect(Rect::new(
            slot.x,
            slot.y,
            slot.x + slot.max_width,
            slot.y + font_size,
        )),
        fill: ResolvedPaint::Color(profile.colors.text),
        stroke: ResolvedPaint::None,
        role: ObjectRole::TextField,
        locked: false,
    }
}

fn divider_object(divider: Rect, profile: &BrandProfile) -> RenderableObject {
    RenderableObject {
        id: Some("#layout_divider".to_string()),
        kind: ObjectKind::Shape {
            shape: ShapeKind::Rect,
            corner_radius: 0.0,
        },
        placement: Placement::from_rect(divider),
        fill: ResolvedPaint::Color(profile.colors.primary_text),
        stroke: ResolvedPaint::None,
        role: ObjectRole::Structural,
        locked: true,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hydrate/text.rs"]
mod tests;
