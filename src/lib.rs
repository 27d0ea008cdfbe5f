//! Placard is a brand-card template hydration and layout engine.
//!
//! Placard takes a design template (an SVG-shaped scene graph with semantic
//! `#`-tagged nodes) plus a brand profile (name, tagline, contacts, logo URL,
//! three-color palette) and produces a flat, render-ready object list for a
//! fixed 1050x600 card canvas.
//!
//! # Pipeline overview
//!
//! 1. **Flatten**: `SceneNode -> FlattenOutput` (nested transforms composed
//!    into per-object placements, palette mapped onto the brand colors)
//! 2. **Layout**: `template id -> LayoutPositions` (the standardized
//!    vertical column: logo, name, title, divider, contact rows)
//! 3. **Hydrate text**: profile strings truncated and placed into slots
//! 4. **Resolve logos**: async fetch + tone sampling + contrast container
//! 5. **Sweep**: WCAG contrast auto-fix over text and structural fills
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure core**: everything except logo fetching is synchronous and
//!   deterministic for a given input.
//! - **Degrade, never fail**: logo problems fall back to palette fills; only
//!   malformed templates and superseded generations return errors.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod brand;
mod foundation;
mod hydrate;
mod layout;
mod palette;
mod scene;

/// Affine flattening and decomposition helpers.
pub mod transform;

pub use assets::decode::{decode_image, logo_tone};
pub use assets::fetch::{LocalLogoFetcher, LogoFetcher};
pub use brand::profile::{BrandColors, BrandProfile, ContactInfo};
pub use foundation::color::{contrast_ratio, relative_luminance};
pub use foundation::core::{Affine, CARD_HEIGHT, CARD_WIDTH, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{PlacardError, PlacardResult};
pub use hydrate::assembler::{HydratedScene, Hydrator};
pub use hydrate::background::detect_background;
pub use hydrate::contrast::{LARGE_TEXT_RATIO, NORMAL_TEXT_RATIO, sweep};
pub use hydrate::flatten::{FlattenOutput, LogoPlaceholder, TextFieldMetadata, flatten};
pub use hydrate::logo::{CONTAINER_CONTRAST_MIN, ResolvedLogo, resolve_logo};
pub use hydrate::text::{estimate_width, resolve_field, truncate};
pub use layout::solver::{
    ContentArea, ContactRow, DotAnchor, LayoutPositions, TextSlot, compute_layout,
    content_area_for,
};
pub use layout::tokens::LogoTier;
pub use palette::mapper::{MapContext, map_paint};
pub use scene::node::{NodeKind, Paint, SceneNode, Semantic, ShapeKind, TextRole};
pub use scene::object::{
    FontWeight, ObjectKind, ObjectRole, Placement, RenderableObject, ResolvedPaint, TextAlign,
    TextStyle,
};
pub use scene::svg::parse_template;
