//! Logo image decoding and tone analysis.

use anyhow::Context as _;
use image::RgbaImage;

use crate::foundation::core::Rgba8;
use crate::foundation::error::PlacardResult;

/// Pixel sampling is capped to a thumbnail of this side length.
const SAMPLE_MAX_SIDE: u32 = 128;

/// Alpha threshold below which a pixel is considered invisible (~6%).
const VISIBLE_ALPHA_MIN: u8 = 16;

/// Decode encoded image bytes into straight-alpha RGBA8.
pub fn decode_image(bytes: &[u8]) -> PlacardResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode logo image from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Compute the logo tone: the alpha-weighted average color over visible
/// pixels, sampled from a downscaled thumbnail.
///
/// Returns `None` when no pixel clears the visibility threshold (a fully
/// transparent image), which callers treat the same as a decode failure.
pub fn logo_tone(img: &RgbaImage) -> Option<Rgba8> {
    let (w, h) = img.dimensions();
    let thumb;
    let sampled = if w > SAMPLE_MAX_SIDE || h > SAMPLE_MAX_SIDE {
        thumb = image::imageops::thumbnail(img, SAMPLE_MAX_SIDE.min(w), SAMPLE_MAX_SIDE.min(h));
        &thumb
    } else {
        img
    };

    let mut sum_r = 0.0f64;
    let mut sum_g = 0.0f64;
    let mut sum_b = 0.0f64;
    let mut sum_a = 0.0f64;
    for px in sampled.pixels() {
        let [r, g, b, a] = px.0;
        if a < VISIBLE_ALPHA_MIN {
            continue;
        }
        let weight = f64::from(a) / 255.0;
        sum_r += f64::from(r) * weight;
        sum_g += f64::from(g) * weight;
        sum_b += f64::from(b) * weight;
        sum_a += weight;
    }
    if sum_a == 0.0 {
        return None;
    }
    Some(Rgba8::rgb(
        (sum_r / sum_a).round() as u8,
        (sum_g / sum_a).round() as u8,
        (sum_b / sum_a).round() as u8,
    ))
}
