//! Adapter from raw SVG template markup to the scene-node tree.
//!
//! Templates are authored as plain SVG with semantic ids (`name`, `logo`,
//! `bg_panel`, `color_accent_phone`, ...). `usvg` flattens the markup into
//! groups, paths, images and text; this adapter re-expresses that tree as
//! [`SceneNode`] values and normalizes author ids into the `#`-prefixed
//! semantic vocabulary.

use anyhow::Context as _;
use base64::Engine as _;

use crate::foundation::core::{Affine, Rgba8};
use crate::foundation::error::PlacardResult;
use crate::scene::node::{NodeKind, Paint, SceneNode, ShapeKind};

/// Parse SVG template bytes into a scene tree.
///
/// The returned root is an unmarked group whose transform is the identity;
/// the card canvas is fixed, so the template's own viewport is ignored.
pub fn parse_template(bytes: &[u8]) -> PlacardResult<SceneNode> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg template")?;
    Ok(convert_group(tree.root()))
}

fn convert_group(group: &usvg::Group) -> SceneNode {
    let children = group.children().iter().map(convert_node).collect();
    SceneNode {
        id: normalize_id(group.id()),
        transform: to_affine(group.transform()),
        width: 0.0,
        height: 0.0,
        fill: Paint::None,
        stroke: Paint::None,
        kind: NodeKind::Group { children },
    }
}

fn convert_node(node: &usvg::Node) -> SceneNode {
    match node {
        usvg::Node::Group(g) => convert_group(g.as_ref()),
        usvg::Node::Path(p) => {
            let bbox = p.bounding_box();
            SceneNode {
                id: normalize_id(p.id()),
                transform: Affine::translate((f64::from(bbox.x()), f64::from(bbox.y()))),
                width: f64::from(bbox.width()),
                height: f64::from(bbox.height()),
                fill: convert_fill(p.fill()),
                stroke: convert_stroke(p.stroke()),
                kind: NodeKind::Shape {
                    shape: ShapeKind::Path,
                },
            }
        }
        usvg::Node::Image(i) => {
            let bbox = i.bounding_box();
            SceneNode {
                id: normalize_id(i.id()),
                transform: Affine::translate((f64::from(bbox.x()), f64::from(bbox.y()))),
                width: f64::from(bbox.width()),
                height: f64::from(bbox.height()),
                fill: Paint::None,
                stroke: Paint::None,
                kind: NodeKind::Image {
                    href: image_href(i.kind()),
                },
            }
        }
        usvg::Node::Text(t) => {
            let bbox = t.bounding_box();
            let content: String = t
                .chunks()
                .iter()
                .map(|chunk| chunk.text())
                .collect::<Vec<_>>()
                .join("");
            let fill = t
                .chunks()
                .first()
                .and_then(|chunk| chunk.spans().first())
                .map_or(Paint::None, |span| convert_fill(span.fill()));
            SceneNode {
                id: normalize_id(t.id()),
                transform: Affine::translate((f64::from(bbox.x()), f64::from(bbox.y()))),
                width: f64::from(bbox.width()),
                height: f64::from(bbox.height()),
                fill,
                stroke: Paint::None,
                kind: NodeKind::Text { content },
            }
        }
    }
}

/// Re-encode an embedded raster payload as a `data:` URL so downstream
/// consumers (and the logo fetcher) can address it. Vector payloads have no
/// byte-level source to surface.
fn image_href(kind: &usvg::ImageKind) -> Option<String> {
    let (mime, data) = match kind {
        usvg::ImageKind::PNG(data) => ("image/png", data),
        usvg::ImageKind::JPEG(data) => ("image/jpeg", data),
        usvg::ImageKind::GIF(data) => ("image/gif", data),
        _ => return None,
    };
    let payload = base64::engine::general_purpose::STANDARD.encode(&data[..]);
    Some(format!("data:{mime};base64,{payload}"))
}

fn to_affine(t: usvg::Transform) -> Affine {
    Affine::new([
        f64::from(t.sx),
        f64::from(t.ky),
        f64::from(t.kx),
        f64::from(t.sy),
        f64::from(t.tx),
        f64::from(t.ty),
    ])
}

fn convert_fill(fill: Option<&usvg::Fill>) -> Paint {
    match fill {
        None => Paint::None,
        Some(fill) => convert_paint(fill.paint(), fill.opacity().get()),
    }
}

fn convert_stroke(stroke: Option<&usvg::Stroke>) -> Paint {
    match stroke {
        None => Paint::None,
        Some(stroke) => convert_paint(stroke.paint(), stroke.opacity().get()),
    }
}

fn convert_paint(paint: &usvg::Paint, opacity: f32) -> Paint {
    if opacity == 0.0 {
        return Paint::Transparent;
    }
    match paint {
        usvg::Paint::Color(c) => Paint::Solid(Rgba8::rgba(
            c.red,
            c.green,
            c.blue,
            (opacity * 255.0).round() as u8,
        )),
        usvg::Paint::LinearGradient(_)
        | usvg::Paint::RadialGradient(_)
        | usvg::Paint::Pattern(_) => Paint::Complex,
    }
}

/// Stems of the semantic vocabulary; author ids matching one of these get the
/// `#` sigil prefixed, since XML ids cannot start with `#` themselves.
const SEMANTIC_STEMS: [&str; 12] = [
    "name", "title", "phone", "email", "website", "address", "logo", "bg", "lock",
    "color_primary", "color_secondary", "color_accent",
];

fn normalize_id(id: &str) -> Option<String> {
    if id.is_empty() {
        return None;
    }
    if id.starts_with('#') {
        return Some(id.to_string());
    }
    if SEMANTIC_STEMS.iter().any(|stem| id.starts_with(stem)) {
        return Some(format!("#{id}"));
    }
    Some(id.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
