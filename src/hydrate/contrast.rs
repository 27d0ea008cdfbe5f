//! WCAG contrast auto-fix sweep.
//!
//! The final pass over the assembled object list. Text and structural
//! elements whose fill does not clear the required contrast ratio against
//! whatever sits behind them get recolored from a fixed candidate ladder.
//! The sweep is pure and idempotent: running it twice yields the same list.

use crate::brand::profile::BrandColors;
use crate::foundation::color::{contrast_ratio, relative_luminance};
use crate::foundation::core::Rgba8;
use crate::hydrate::background::detect_background;
use crate::scene::object::{FontWeight, ObjectKind, ObjectRole, RenderableObject, ResolvedPaint};

/// Minimum ratio for normal-size text (WCAG AA).
pub const NORMAL_TEXT_RATIO: f64 = 4.5;

/// Minimum ratio for large text and structural marks (WCAG AA large).
pub const LARGE_TEXT_RATIO: f64 = 3.0;

/// Large text per WCAG: 24px, or 18.66px when bold.
fn required_ratio(object: &RenderableObject) -> Option<f64> {
    match (&object.kind, object.role) {
        (ObjectKind::Text { style, .. }, ObjectRole::TextField) => {
            let large = style.font_size >= 24.0
                || (style.font_size >= 18.66 && style.weight == FontWeight::Bold);
            Some(if large { LARGE_TEXT_RATIO } else { NORMAL_TEXT_RATIO })
        }
        (_, ObjectRole::Structural) => Some(LARGE_TEXT_RATIO),
        _ => None,
    }
}

/// Recolor any text or structural object that fails its contrast requirement.
///
/// The current fill is checked first and kept when it already passes, which
/// is what makes the sweep idempotent. Otherwise candidates are tried in
/// order and the first passing one wins; when nothing passes, the fill snaps
/// to black or white by backdrop luminance.
#[tracing::instrument(skip_all)]
pub fn sweep(
    objects: Vec<RenderableObject>,
    colors: &BrandColors,
    logo_tone: Option<Rgba8>,
) -> Vec<RenderableObject> {
    let mut out = objects;
    for index in 0..out.len() {
        let Some(required) = required_ratio(&out[index]) else {
            continue;
        };
        let ResolvedPaint::Color(current) = out[index].fill else {
            continue;
        };
        let behind = detect_background(&out[..index], out[index].placement.center());
        if contrast_ratio(current, behind) >= required {
            continue;
        }

        let ladder = [
            Some(Rgba8::WHITE),
            Some(Rgba8::BLACK),
            Some(colors.primary_text),
            logo_tone,
        ];
        let fixed = ladder
            .into_iter()
            .flatten()
            .find(|candidate| contrast_ratio(*candidate, behind) >= required)
            .unwrap_or(if relative_luminance(behind) >= 0.5 {
                Rgba8::BLACK
            } else {
                Rgba8::WHITE
            });
        tracing::debug!(
            id = out[index].id.as_deref().unwrap_or(""),
            from = %current.to_hex(),
            to = %fixed.to_hex(),
            "contrast fix applied"
        );
        out[index].fill = ResolvedPaint::Color(fixed);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/hydrate/contrast.rs"]
mod tests;
