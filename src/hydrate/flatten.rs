//! Flatten pass: one traversal over the source tree.
//!
//! Transform composition and semantic classification happen together here.
//! Shapes and decorative elements are placed immediately through the palette
//! mapper; text fields and logo placeholders bypass the mapper and are
//! collected as metadata for the later hydration passes. Locked background
//! groups are placed as opaque units with their composed transform, internal
//! layout untouched.

use crate::brand::profile::BrandColors;
use crate::foundation::core::Affine;
use crate::foundation::error::PlacardResult;
use crate::palette::mapper::{MapContext, map_paint};
use crate::scene::node::{
    NodeKind, Paint, SceneNode, Semantic, TextRole, is_background_role, is_legacy_accent,
};
use crate::scene::object::{ObjectKind, ObjectRole, Placement, RenderableObject, ResolvedPaint};
use crate::transform::affine::{compose, decompose};

/// A text field deferred during flatten, consumed by the text hydrator.
#[derive(Clone, Debug, PartialEq)]
pub struct TextFieldMetadata {
    /// Which profile field the node binds to.
    pub role: TextRole,
    /// The node's semantic id.
    pub id: String,
    /// Composed absolute transform at the node.
    pub absolute: Affine,
    /// Original text content as authored, when the node carried any.
    pub original_text: String,
}

/// A logo placeholder collected during flatten, resolved asynchronously.
#[derive(Clone, Debug, PartialEq)]
pub struct LogoPlaceholder {
    /// The node's semantic id.
    pub id: String,
    /// Composed absolute transform at the node.
    pub absolute: Affine,
    /// Untransformed placeholder width.
    pub width: f64,
    /// Untransformed placeholder height.
    pub height: f64,
}

/// Everything the flatten pass produces.
#[derive(Clone, Debug, Default)]
pub struct FlattenOutput {
    /// Base objects in draw order (palette already applied).
    pub objects: Vec<RenderableObject>,
    /// Deferred text fields.
    pub text_fields: Vec<TextFieldMetadata>,
    /// Deferred logo placeholders.
    pub logos: Vec<LogoPlaceholder>,
}

/// Flatten a source tree into placed objects plus deferred metadata.
///
/// Fails only on a malformed transform chain; this is the hydrate call's one
/// fatal path.
#[tracing::instrument(skip_all)]
pub fn flatten(root: &SceneNode, colors: &BrandColors) -> PlacardResult<FlattenOutput> {
    let mut out = FlattenOutput::default();
    walk(root, Affine::IDENTITY, colors, &mut out)?;
    tracing::debug!(
        objects = out.objects.len(),
        text_fields = out.text_fields.len(),
        logos = out.logos.len(),
        "flatten pass complete"
    );
    Ok(out)
}

fn walk(
    node: &SceneNode,
    parent: Affine,
    colors: &BrandColors,
    out: &mut FlattenOutput,
) -> PlacardResult<()> {
    let absolute = compose(parent, node.transform);
    let id = node.id.as_deref();

    match node.semantic() {
        Semantic::Locked => match &node.kind {
            NodeKind::Group { children } => {
                // Opaque unit: place with the composed transform, do not
                // recurse.
                let d = decompose(absolute)?;
                out.objects.push(RenderableObject {
                    id: node.id.clone(),
                    kind: ObjectKind::Group {
                        children: children.clone(),
                    },
                    placement: Placement::from_decomposed(&d, node.width, node.height),
                    fill: ResolvedPaint::None,
                    stroke: ResolvedPaint::None,
                    role: ObjectRole::LockedGroup,
                    locked: true,
                });
            }
            // A locked leaf (a bare background rect, say) keeps its kind and
            // paint so it still answers background probes.
            _ => out.objects.push(place_locked_leaf(node, absolute, colors)?),
        },
        Semantic::TextField(role) => {
            // Validate the chain now so a bad transform fails the call even
            // though the node is materialized later.
            decompose(absolute)?;
            out.text_fields.push(TextFieldMetadata {
                role,
                id: id.unwrap_or_default().to_string(),
                absolute,
                original_text: node.text_content().unwrap_or_default().to_string(),
            });
        }
        Semantic::Logo => {
            decompose(absolute)?;
            out.logos.push(LogoPlaceholder {
                id: id.unwrap_or_default().to_string(),
                absolute,
                width: node.width,
                height: node.height,
            });
        }
        Semantic::Decorative | Semantic::Unmarked => {
            if is_legacy_accent(id) {
                tracing::debug!(id = id.unwrap_or_default(), "dropping legacy accent");
                return Ok(());
            }
            match &node.kind {
                NodeKind::Group { children } => {
                    for child in children {
                        walk(child, absolute, colors, out)?;
                    }
                }
                _ => out.objects.push(place_leaf(node, absolute, colors)?),
            }
        }
    }
    Ok(())
}

fn leaf_kind(node: &SceneNode) -> ObjectKind {
    match &node.kind {
        NodeKind::Shape { shape } => ObjectKind::Shape {
            shape: *shape,
            corner_radius: 0.0,
        },
        NodeKind::Text { content } => ObjectKind::Text {
            content: content.clone(),
            style: crate::layout::tokens::CONTACT_STYLE,
        },
        NodeKind::Image { href } => ObjectKind::Image {
            source: href.clone().unwrap_or_default(),
        },
        NodeKind::Group { children } => ObjectKind::Group {
            children: children.clone(),
        },
    }
}

fn place_leaf(
    node: &SceneNode,
    absolute: Affine,
    colors: &BrandColors,
) -> PlacardResult<RenderableObject> {
    let d = decompose(absolute)?;
    // Untagged text still counts as text for paint mapping; only the
    // semantic text fields bypass the mapper entirely.
    let ctx = MapContext {
        is_text_field: matches!(node.kind, NodeKind::Text { .. }),
        is_background_role: is_background_role(node.id.as_deref()),
    };
    Ok(RenderableObject {
        id: node.id.clone(),
        kind: leaf_kind(node),
        placement: Placement::from_decomposed(&d, node.width, node.height),
        fill: map_paint(node.fill, ctx, colors),
        stroke: map_paint(node.stroke, ctx, colors),
        role: ObjectRole::Base,
        locked: false,
    })
}

/// Solid paints on locked leaves pass through verbatim; only the paint kinds
/// without a concrete color fall back to the palette mapper.
fn locked_paint(paint: Paint, id: Option<&str>, colors: &BrandColors) -> ResolvedPaint {
    match paint {
        Paint::Solid(color) => ResolvedPaint::Color(color),
        other => map_paint(
            other,
            MapContext {
                is_text_field: false,
                is_background_role: is_background_role(id),
            },
            colors,
        ),
    }
}

fn place_locked_leaf(
    node: &SceneNode,
    absolute: Affine,
    colors: &BrandColors,
) -> PlacardResult<RenderableObject> {
    let d = decompose(absolute)?;
    let id = node.id.as_deref();
    Ok(RenderableObject {
        id: node.id.clone(),
        kind: leaf_kind(node),
        placement: Placement::from_decomposed(&d, node.width, node.height),
        fill: locked_paint(node.fill, id, colors),
        stroke: locked_paint(node.stroke, id, colors),
        role: ObjectRole::LockedGroup,
        locked: true,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/hydrate/flatten.rs"]
mod tests;
