//! Detection of the color directly behind a point on the card.
//!
//! Used by the logo resolver (what is behind the placeholder?) and the
//! contrast sweep (what is behind this text?). The scan walks the placed
//! object list in reverse draw order and returns the fill of the topmost
//! opaque shape containing the probe point. Text, logo and structural
//! elements never count as background; neither do shapes below a minimum
//! footprint, which would otherwise match decorative noise.

use crate::foundation::core::{Affine, Point, Rgba8};
use crate::scene::node::{NodeKind, Paint, SceneNode};
use crate::scene::object::{ObjectKind, ObjectRole, RenderableObject};
use crate::transform::affine::compose;

/// Minimum footprint (either axis) for a shape to count as background.
pub const MIN_BACKGROUND_SIZE: f64 = 40.0;

/// The card base color, returned when nothing else is behind the point.
pub const CARD_BASE: Rgba8 = Rgba8::WHITE;

/// Detect the dominant background color behind a point.
pub fn detect_background(objects: &[RenderableObject], point: Point) -> Rgba8 {
    objects
        .iter()
        .rev()
        .find_map(|obj| color_at(obj, point))
        .unwrap_or(CARD_BASE)
}

fn color_at(obj: &RenderableObject, point: Point) -> Option<Rgba8> {
    match obj.role {
        ObjectRole::TextField
        | ObjectRole::Structural
        | ObjectRole::Logo
        | ObjectRole::LogoContainer => return None,
        ObjectRole::Base | ObjectRole::LockedGroup => {}
    }
    match &obj.kind {
        ObjectKind::Shape { .. } => {
            let bounds = obj.placement.bounds();
            if bounds.width() < MIN_BACKGROUND_SIZE || bounds.height() < MIN_BACKGROUND_SIZE {
                return None;
            }
            if !bounds.contains(point) {
                return None;
            }
            obj.fill.color().filter(|c| c.is_opaque())
        }
        ObjectKind::Group { children } => {
            // Locked groups keep their original subtree and paints; probe it
            // in reverse draw order through the group's absolute transform.
            let group_affine = obj.placement.to_affine();
            children
                .iter()
                .rev()
                .find_map(|child| node_color_at(child, group_affine, point))
        }
        ObjectKind::Text { .. } | ObjectKind::Image { .. } => None,
    }
}

fn node_color_at(node: &SceneNode, parent: Affine, point: Point) -> Option<Rgba8> {
    let absolute = compose(parent, node.transform);
    match &node.kind {
        NodeKind::Group { children } => children
            .iter()
            .rev()
            .find_map(|child| node_color_at(child, absolute, point)),
        NodeKind::Shape { .. } => {
            let Paint::Solid(color) = node.fill else {
                return None;
            };
            if !color.is_opaque() {
                return None;
            }
            let det = {
                let c = absolute.as_coeffs();
                c[0] * c[3] - c[1] * c[2]
            };
            if det.abs() < 1e-12 {
                return None;
            }
            // Map the probe into the node's local space and test its box.
            let local = absolute.inverse() * point;
            let scale = det.abs().sqrt();
            if node.width * scale < MIN_BACKGROUND_SIZE || node.height * scale < MIN_BACKGROUND_SIZE
            {
                return None;
            }
            if local.x >= 0.0 && local.x <= node.width && local.y >= 0.0 && local.y <= node.height {
                Some(color)
            } else {
                None
            }
        }
        NodeKind::Text { .. } | NodeKind::Image { .. } => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hydrate/background.rs"]
mod tests;
