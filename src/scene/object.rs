//! Final flat render list produced by a hydrate call.

use crate::foundation::core::{Affine, Point, Rect, Rgba8};
use crate::scene::node::{SceneNode, ShapeKind};
use crate::transform::affine::{Decomposed, recompose};

/// Absolute placement of an object on the card canvas.
///
/// `width`/`height` are the object's untransformed dimensions; the effective
/// on-canvas footprint also applies `scale_x`/`scale_y`. Angles are radians.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    /// Left edge (canvas pixels).
    pub left: f64,
    /// Top edge (canvas pixels).
    pub top: f64,
    /// Untransformed width.
    pub width: f64,
    /// Untransformed height.
    pub height: f64,
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Horizontal shear angle in radians.
    pub skew_x: f64,
    /// Rotation in radians.
    pub angle: f64,
}

impl Placement {
    /// Axis-aligned placement of a plain rectangle with unit scale.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            left: rect.x0,
            top: rect.y0,
            width: rect.width(),
            height: rect.height(),
            scale_x: 1.0,
            scale_y: 1.0,
            skew_x: 0.0,
            angle: 0.0,
        }
    }

    /// Placement for a decomposed absolute transform and local size.
    pub fn from_decomposed(d: &Decomposed, width: f64, height: f64) -> Self {
        Self {
            left: d.translate_x,
            top: d.translate_y,
            width,
            height,
            scale_x: d.scale_x,
            scale_y: d.scale_y,
            skew_x: d.skew_x,
            angle: d.angle,
        }
    }

    /// Effective axis-aligned footprint, ignoring rotation and skew.
    ///
    /// Background detection intentionally probes this simplified box; the
    /// layouts this engine emits are axis-aligned, and rotated decorative
    /// shapes are approximated by their unrotated bounds.
    pub fn bounds(&self) -> Rect {
        let w = self.width * self.scale_x.abs();
        let h = self.height * self.scale_y.abs();
        Rect::new(self.left, self.top, self.left + w, self.top + h)
    }

    /// Center of [`Placement::bounds`].
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Rebuild the absolute affine this placement was decomposed from.
    pub fn to_affine(&self) -> Affine {
        recompose(&Decomposed {
            translate_x: self.left,
            translate_y: self.top,
            scale_x: self.scale_x,
            scale_y: self.scale_y,
            skew_x: self.skew_x,
            skew_y: 0.0,
            angle: self.angle,
        })
    }
}

/// A paint after palette mapping: exactly one of the two palette colors, the
/// dedicated text color, or a passthrough value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedPaint {
    /// A concrete color.
    Color(Rgba8),
    /// No paint.
    None,
    /// Explicitly transparent paint.
    Transparent,
}

impl ResolvedPaint {
    /// The concrete color, when present.
    pub fn color(self) -> Option<Rgba8> {
        match self {
            Self::Color(c) => Some(c),
            Self::None | Self::Transparent => None,
        }
    }
}

/// The role an object plays in the hydrated scene.
///
/// Roles drive the contrast sweep (which elements are corrected, which are
/// candidates for background detection) and downstream interactivity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectRole {
    /// Template base shape or decorative element.
    Base,
    /// Opaque locked background group.
    LockedGroup,
    /// Hydrated text field.
    TextField,
    /// Layout-structural element (divider, bullet dot).
    Structural,
    /// Logo image or placeholder fill.
    Logo,
    /// Contrast container rect behind a logo.
    LogoContainer,
}

/// Font weight used by hydrated text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    /// Regular weight.
    Normal,
    /// Bold weight.
    Bold,
}

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Left-aligned (the only alignment the standardized layout emits).
    Left,
}

/// Typography attributes carried by a hydrated text object.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    /// Font size in canvas pixels (source scale already baked in).
    pub font_size: f64,
    /// Font weight.
    pub weight: FontWeight,
    /// Letter spacing in pixels.
    pub letter_spacing: f64,
    /// Horizontal alignment.
    pub align: TextAlign,
}

/// Kind-specific payload of a renderable object.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// A shape primitive.
    Shape {
        /// Geometric primitive classification.
        shape: ShapeKind,
        /// Corner radius for rects (zero for sharp corners).
        corner_radius: f64,
    },
    /// A text run.
    Text {
        /// Final resolved (and possibly truncated) content.
        content: String,
        /// Typography attributes.
        style: TextStyle,
    },
    /// An image.
    Image {
        /// Source reference (URL or path).
        source: String,
    },
    /// An opaque locked group carried over verbatim from the template.
    Group {
        /// The original subtree, untouched.
        children: Vec<SceneNode>,
    },
}

/// One unit of the final flat render list.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderableObject {
    /// Semantic id carried over from the source node, when present.
    pub id: Option<String>,
    /// Kind-specific payload.
    pub kind: ObjectKind,
    /// Absolute placement on the card canvas.
    pub placement: Placement,
    /// Resolved fill paint.
    pub fill: ResolvedPaint,
    /// Resolved stroke paint.
    pub stroke: ResolvedPaint,
    /// Role in the hydrated scene.
    pub role: ObjectRole,
    /// Non-interactive flag (background/locked/structural elements).
    pub locked: bool,
}
