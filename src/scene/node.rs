//! Source scene tree consumed by the hydration pipeline.
//!
//! A [`SceneNode`] tree is produced upstream, either by the SVG adapter
//! ([`crate::scene::svg`]) or by deserializing a canvas-state JSON document.
//! The core reads the tree and never mutates it.

use crate::foundation::core::{Affine, Rgba8};
use crate::foundation::error::{PlacardError, PlacardResult};

/// A node in the parsed template tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneNode {
    /// Optional semantic id (for example `#name`, `#logo`, `#bg_panel`).
    #[serde(default)]
    pub id: Option<String>,
    /// Local transform relative to the parent node.
    #[serde(default)]
    pub transform: Affine,
    /// Untransformed width of the node's local bounding box.
    #[serde(default)]
    pub width: f64,
    /// Untransformed height of the node's local bounding box.
    #[serde(default)]
    pub height: f64,
    /// Fill paint.
    #[serde(default)]
    pub fill: Paint,
    /// Stroke paint.
    #[serde(default)]
    pub stroke: Paint,
    /// Node kind and kind-specific payload.
    pub kind: NodeKind,
}

impl SceneNode {
    /// Parse a serialized canvas-state document into a scene tree.
    pub fn from_json(doc: &str) -> PlacardResult<Self> {
        serde_json::from_str(doc)
            .map_err(|e| PlacardError::serde(format!("invalid scene document: {e}")))
    }

    /// The semantic classification of this node's id.
    pub fn semantic(&self) -> Semantic {
        classify(self.id.as_deref())
    }

    /// Text content, if this is a text node.
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { content } => Some(content),
            _ => None,
        }
    }
}

/// The kind of a scene node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A group of child nodes.
    Group {
        /// Children in draw order.
        children: Vec<SceneNode>,
    },
    /// A text run.
    Text {
        /// Raw text content as authored in the template.
        content: String,
    },
    /// A filled/stroked shape.
    Shape {
        /// Geometric primitive classification.
        shape: ShapeKind,
    },
    /// A raster or linked image.
    Image {
        /// Source reference, when the template carries one.
        #[serde(default)]
        href: Option<String>,
    },
}

/// Geometric primitive classification for shape nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Axis-aligned rectangle.
    Rect,
    /// Circle.
    Circle,
    /// Ellipse.
    Ellipse,
    /// Arbitrary path (treated as its bounding box for placement).
    Path,
    /// Polygon.
    Polygon,
    /// Line segment.
    Line,
}

/// A paint attribute as authored in the template.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    /// No paint (`fill="none"`).
    #[default]
    None,
    /// Explicitly transparent paint.
    Transparent,
    /// Inherit the contextual color (`currentColor`).
    CurrentColor,
    /// A solid color.
    Solid(Rgba8),
    /// Gradient, pattern or otherwise unparsable paint.
    Complex,
}

/// Text roles bound to brand profile content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    /// Business name (`#name`).
    Name,
    /// Tagline (`#title`).
    Title,
    /// Phone contact row (`#phone`).
    Phone,
    /// Email contact row (`#email`).
    Email,
    /// Website contact row (`#website`).
    Website,
    /// Address contact row (`#address`).
    Address,
}

impl TextRole {
    /// All four contact rows, in their fixed layout order.
    pub const CONTACT_ORDER: [Self; 4] = [Self::Phone, Self::Email, Self::Website, Self::Address];
}

/// Semantic classification of a node id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Semantic {
    /// A text field bound to profile content.
    TextField(TextRole),
    /// A logo image placeholder (`#logo`).
    Logo,
    /// An opaque locked background group (`#bg*`, `#lock*`).
    Locked,
    /// A decorative element remapped via the palette (`#color_*`).
    Decorative,
    /// No recognized marker.
    Unmarked,
}

/// Classify a node id against the semantic vocabulary.
///
/// Matching is exact-prefix and case-sensitive, per the template-authoring
/// convention.
pub fn classify(id: Option<&str>) -> Semantic {
    let Some(id) = id else {
        return Semantic::Unmarked;
    };
    const TEXT_PREFIXES: [(&str, TextRole); 6] = [
        ("#name", TextRole::Name),
        ("#title", TextRole::Title),
        ("#phone", TextRole::Phone),
        ("#email", TextRole::Email),
        ("#website", TextRole::Website),
        ("#address", TextRole::Address),
    ];
    for (prefix, role) in TEXT_PREFIXES {
        if id.starts_with(prefix) {
            return Semantic::TextField(role);
        }
    }
    if id.starts_with("#logo") {
        return Semantic::Logo;
    }
    if id.starts_with("#bg") || id.starts_with("#lock") {
        return Semantic::Locked;
    }
    if id.starts_with("#color_primary")
        || id.starts_with("#color_secondary")
        || id.starts_with("#color_accent")
    {
        return Semantic::Decorative;
    }
    Semantic::Unmarked
}

/// Whether an id marks a background-class role for complex-paint mapping.
pub fn is_background_role(id: Option<&str>) -> bool {
    id.is_some_and(|id| id.starts_with("#bg"))
}

/// Keywords that identify legacy hand-authored contact dots and dividers
/// inside `#color_accent_*` elements. These are template-authoring
/// conventions; the standardized layout re-emits their replacements.
const LEGACY_ACCENT_KEYWORDS: [&str; 6] = ["phone", "email", "web", "addr", "contact", "divider"];

/// Whether a node is a legacy accent element superseded by the standardized
/// layout (dropped during flatten).
pub fn is_legacy_accent(id: Option<&str>) -> bool {
    let Some(id) = id else { return false };
    id.strip_prefix("#color_accent_").is_some_and(|rest| {
        LEGACY_ACCENT_KEYWORDS
            .iter()
            .any(|keyword| rest.contains(keyword))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
