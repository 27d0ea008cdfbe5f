//! Two-color palette mapper.
//!
//! Every paint that reaches the render list goes through [`map_paint`], which
//! guarantees palette closure: the output is one of the brand's two palette
//! colors, the dedicated text color, or a passthrough value. Arbitrary source
//! colors never survive hydration.

use crate::brand::profile::BrandColors;
use crate::foundation::color::squared_distance;
use crate::scene::node::Paint;
use crate::scene::object::ResolvedPaint;

/// Node context the mapping rules depend on.
#[derive(Clone, Copy, Debug, Default)]
pub struct MapContext {
    /// The node is classified as a text field (always gets the dedicated
    /// text color, never distance-mapped).
    pub is_text_field: bool,
    /// The node's id indicates a background-class role, which flips the
    /// complex-paint fallback.
    pub is_background_role: bool,
}

/// Map a source paint onto the brand palette.
///
/// Rules, in order: passthrough for none/transparent; `currentColor` becomes
/// the primary palette color; text fields get the dedicated text color; any
/// other solid color snaps to the nearest of {primary, background} by squared
/// RGB distance with ties broken toward primary; complex paints fall back by
/// role.
pub fn map_paint(paint: Paint, ctx: MapContext, colors: &BrandColors) -> ResolvedPaint {
    match paint {
        Paint::None => ResolvedPaint::None,
        Paint::Transparent => ResolvedPaint::Transparent,
        Paint::CurrentColor => ResolvedPaint::Color(colors.primary_text),
        _ if ctx.is_text_field => ResolvedPaint::Color(colors.text),
        Paint::Solid(source) => {
            let to_primary = squared_distance(source, colors.primary_text);
            let to_background = squared_distance(source, colors.background);
            if to_primary <= to_background {
                ResolvedPaint::Color(colors.primary_text)
            } else {
                ResolvedPaint::Color(colors.background)
            }
        }
        Paint::Complex => {
            if ctx.is_background_role {
                ResolvedPaint::Color(colors.primary_text)
            } else {
                ResolvedPaint::Color(colors.background)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/mapper.rs"]
mod tests;
