//! Contrast-aware logo placement.
//!
//! The only asynchronous stage of the pipeline. Each placeholder resolves
//! independently: fetch and decode the brand logo, sample its tone, decide
//! whether a contrast container is needed, and fit the image inside the
//! (possibly padded) box. Every failure degrades to a palette fill of the
//! placeholder; resolution never fails the hydrate call.

use crate::assets::decode::{decode_image, logo_tone};
use crate::assets::fetch::LogoFetcher;
use crate::brand::profile::BrandProfile;
use crate::foundation::color::contrast_ratio;
use crate::foundation::core::{Rect, Rgba8};
use crate::hydrate::background::detect_background;
use crate::hydrate::flatten::LogoPlaceholder;
use crate::scene::node::ShapeKind;
use crate::scene::object::{ObjectKind, ObjectRole, Placement, RenderableObject, ResolvedPaint};
use crate::transform::affine::decompose;

/// Below this contrast between logo tone and backdrop, a container is added.
pub const CONTAINER_CONTRAST_MIN: f64 = 2.6;

/// Inner padding fraction when a container is present.
const PADDING_WITH_CONTAINER: f64 = 0.10;

/// Inner padding fraction without a container.
const PADDING_BARE: f64 = 0.03;

/// Container corner radius as a fraction of the box's short side.
const CONTAINER_RADIUS_RATIO: f64 = 0.12;

/// The outcome of resolving one placeholder.
#[derive(Clone, Debug, Default)]
pub struct ResolvedLogo {
    /// Objects to append: `[image]`, `[container, image]`, or `[fill]`.
    pub objects: Vec<RenderableObject>,
    /// Sampled logo tone, fed to the contrast sweep as a fallback color.
    pub tone: Option<Rgba8>,
}

/// Resolve one logo placeholder against the already-placed base objects.
///
/// When the standardized layout is active its logo box wins over the
/// template's native placeholder geometry, so callers pass it as
/// `layout_box`.
#[tracing::instrument(skip_all, fields(id = %placeholder.id))]
pub async fn resolve_logo(
    placeholder: &LogoPlaceholder,
    layout_box: Option<Rect>,
    profile: &BrandProfile,
    backdrop: &[RenderableObject],
    fetcher: &dyn LogoFetcher,
) -> ResolvedLogo {
    let bounds = layout_box.unwrap_or_else(|| placeholder_bounds(placeholder));
    let behind = detect_background(backdrop, bounds.center());

    let Some(url) = profile.logo_url.as_deref().filter(|u| !u.trim().is_empty()) else {
        return ResolvedLogo {
            objects: vec![placeholder_fill(placeholder, bounds, behind, profile)],
            tone: None,
        };
    };

    let loaded = match fetch_logo(url, fetcher).await {
        Ok(loaded) => loaded,
        Err(err) => {
            tracing::warn!(%err, "logo load failed, falling back to placeholder fill");
            return ResolvedLogo {
                objects: vec![placeholder_fill(placeholder, bounds, behind, profile)],
                tone: None,
            };
        }
    };
    let tone = loaded.tone;

    let needs_container = contrast_ratio(tone, behind) < CONTAINER_CONTRAST_MIN;
    let padding_ratio = if needs_container {
        PADDING_WITH_CONTAINER
    } else {
        PADDING_BARE
    };
    let padding = bounds.width().min(bounds.height()) * padding_ratio;
    let inner = bounds.inset(-padding);

    let mut objects = Vec::with_capacity(2);
    if needs_container {
        objects.push(container_object(placeholder, bounds, behind, tone, profile));
    }
    objects.push(RenderableObject {
        id: Some(placeholder.id.clone()),
        kind: ObjectKind::Image {
            source: url.to_string(),
        },
        placement: Placement::from_rect(contain_fit(inner, loaded.width, loaded.height)),
        fill: ResolvedPaint::None,
        stroke: ResolvedPaint::None,
        role: ObjectRole::Logo,
        locked: false,
    });
    ResolvedLogo {
        objects,
        tone: Some(tone),
    }
}

/// What survives of a fetched logo: its tone and intrinsic dimensions.
struct LoadedLogo {
    tone: Rgba8,
    width: f64,
    height: f64,
}

async fn fetch_logo(url: &str, fetcher: &dyn LogoFetcher) -> anyhow::Result<LoadedLogo> {
    let bytes = fetcher.fetch(url).await?;
    let img = decode_image(&bytes)?;
    let (width, height) = img.dimensions();
    let tone =
        logo_tone(&img).ok_or_else(|| anyhow::anyhow!("logo image has no visible pixels"))?;
    Ok(LoadedLogo {
        tone,
        width: f64::from(width),
        height: f64::from(height),
    })
}

fn placeholder_bounds(placeholder: &LogoPlaceholder) -> Rect {
    match decompose(placeholder.absolute) {
        Ok(d) => {
            let w = placeholder.width * d.scale_x.abs();
            let h = placeholder.height * d.scale_y.abs();
            Rect::new(d.translate_x, d.translate_y, d.translate_x + w, d.translate_y + h)
        }
        // The flatten pass already rejected malformed chains; this is
        // unreachable in practice but degrades harmlessly.
        Err(_) => Rect::new(0.0, 0.0, placeholder.width, placeholder.height),
    }
}

/// No-logo (or failed-logo) behavior: fill the box with whichever palette
/// color contrasts most against the detected backdrop.
fn placeholder_fill(
    placeholder: &LogoPlaceholder,
    bounds: Rect,
    behind: Rgba8,
    profile: &BrandProfile,
) -> RenderableObject {
    let primary = profile.colors.primary_text;
    let background = profile.colors.background;
    let fill = if contrast_ratio(primary, behind) >= contrast_ratio(background, behind) {
        primary
    } else {
        background
    };
    RenderableObject {
        id: Some(placeholder.id.clone()),
        kind: ObjectKind::Shape {
            shape: ShapeKind::Rect,
            corner_radius: bounds.width().min(bounds.height()) * CONTAINER_RADIUS_RATIO,
        },
        placement: Placement::from_rect(bounds),
        fill: ResolvedPaint::Color(fill),
        stroke: ResolvedPaint::None,
        role: ObjectRole::Logo,
        locked: false,
    }
}

/// Pick the container color: whichever palette color maximizes the weaker of
/// its contrast against the backdrop and against the logo tone.
fn container_color(behind: Rgba8, tone: Rgba8, profile: &BrandProfile) -> Rgba8 {
    let score = |candidate: Rgba8| {
        contrast_ratio(candidate, behind).min(contrast_ratio(candidate, tone))
    };
    let primary = profile.colors.primary_text;
    let background = profile.colors.background;
    if score(primary) >= score(background) {
        primary
    } else {
        background
    }
}

fn container_object(
    placeholder: &LogoPlaceholder,
    bounds: Rect,
    behind: Rgba8,
    tone: Rgba8,
    profile: &BrandProfile,
) -> RenderableObject {
    RenderableObject {
        id: Some(format!("{}_container", placeholder.id)),
        kind: ObjectKind::Shape {
            shape: ShapeKind::Rect,
            corner_radius: bounds.width().min(bounds.height()) * CONTAINER_RADIUS_RATIO,
        },
        placement: Placement::from_rect(bounds),
        fill: ResolvedPaint::Color(container_color(behind, tone, profile)),
        stroke: ResolvedPaint::None,
        role: ObjectRole::LogoContainer,
        locked: true,
    }
}

/// Fit an image's intrinsic aspect ratio inside `inner` by containment:
/// preserve aspect, no cropping, centered.
fn contain_fit(inner: Rect, width: f64, height: f64) -> Rect {
    let (iw, ih) = if width > 0.0 && height > 0.0 {
        (width, height)
    } else {
        (1.0, 1.0)
    };
    let scale = (inner.width() / iw).min(inner.height() / ih);
    let w = iw * scale;
    let h = ih * scale;
    let cx = inner.center().x;
    let cy = inner.center().y;
    Rect::new(cx - w / 2.0, cy - h / 2.0, cx + w / 2.0, cy + h / 2.0)
}

#[cfg(test)]
#[path = "../../tests/unit/hydrate/logo.rs"]
mod tests;
