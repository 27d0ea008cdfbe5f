//! Scene assembly orchestrator.
//!
//! Runs the whole pipeline for one template + brand profile pair: flatten
//! the scene graph, compute the standardized layout, hydrate text, resolve
//! logo placeholders concurrently, then merge and contrast-sweep the result.
//!
//! A [`Hydrator`] carries a monotonically increasing generation counter.
//! Each call takes the next generation; after the async logo stage it checks
//! that no newer call has started, and bails with
//! [`PlacardError::Superseded`] when one has. Callers that re-hydrate on
//! every profile edit can therefore drop stale results instead of racing
//! them against fresh ones.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::join_all;

use crate::assets::fetch::LogoFetcher;
use crate::brand::profile::BrandProfile;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{PlacardError, PlacardResult};
use crate::hydrate::contrast::sweep;
use crate::hydrate::flatten::flatten;
use crate::hydrate::logo::resolve_logo;
use crate::hydrate::text::materialize;
use crate::layout::solver::{compute_layout, content_area_for};
use crate::scene::node::SceneNode;
use crate::scene::object::RenderableObject;

/// The assembled scene for one hydrate call.
#[derive(Clone, Debug)]
pub struct HydratedScene {
    /// Final render list, in paint order: base, logos, structural, text.
    pub objects: Vec<RenderableObject>,
    /// Generation that produced this scene.
    pub generation: u64,
}

/// Stateful pipeline front door.
pub struct Hydrator {
    fetcher: Arc<dyn LogoFetcher>,
    generation: AtomicU64,
}

impl Hydrator {
    /// Create a hydrator backed by the given logo fetcher.
    pub fn new(fetcher: Arc<dyn LogoFetcher>) -> Self {
        Self {
            fetcher,
            generation: AtomicU64::new(0),
        }
    }

    /// Run the full pipeline on a parsed template.
    ///
    /// `template_id` selects the content area for the standardized column;
    /// unknown ids fall back to the default area.
    #[tracing::instrument(skip_all, fields(template_id = %template_id))]
    pub async fn hydrate(
        &self,
        root: &SceneNode,
        template_id: &str,
        profile: &BrandProfile,
    ) -> PlacardResult<HydratedScene> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let flat = flatten(root, &profile.colors)?;
        let area = content_area_for(template_id);
        let layout = compute_layout(&area);
        let hydrated_text = materialize(&layout, &flat.text_fields, profile);

        let resolutions = join_all(flat.logos.iter().enumerate().map(|(i, placeholder)| {
            // The standardized column has exactly one logo slot; extra
            // placeholders keep their native geometry.
            let slot = (i == 0).then_some(layout.logo);
            resolve_logo(placeholder, slot, profile, &flat.objects, self.fetcher.as_ref())
        }))
        .await;

        if self.generation.load(Ordering::SeqCst) != generation {
            return Err(PlacardError::superseded(format!(
                "hydrate generation {generation} superseded"
            )));
        }

        let mut tone: Option<Rgba8> = None;
        let mut objects = flat.objects;
        for resolved in resolutions {
            tone = tone.or(resolved.tone);
            objects.extend(resolved.objects);
        }
        objects.extend(hydrated_text.structural);
        objects.extend(hydrated_text.texts);

        let objects = sweep(objects, &profile.colors, tone);
        tracing::debug!(generation, objects = objects.len(), "scene assembled");
        Ok(HydratedScene {
            objects,
            generation,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/hydrate/assembler.rs"]
mod tests;
