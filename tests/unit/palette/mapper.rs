use super::*;
use crate::foundation::core::Rgba8;

fn palette() -> BrandColors {
    BrandColors {
        primary_text: Rgba8::rgb(0x1a, 0x2b, 0x3c),
        text: Rgba8::rgb(0x10, 0x10, 0x10),
        background: Rgba8::rgb(0xf5, 0xf0, 0xe8),
    }
}

#[test]
fn passthrough_none_and_transparent() {
    let colors = palette();
    assert_eq!(
        map_paint(Paint::None, MapContext::default(), &colors),
        ResolvedPaint::None
    );
    assert_eq!(
        map_paint(Paint::Transparent, MapContext::default(), &colors),
        ResolvedPaint::Transparent
    );
}

#[test]
fn current_color_becomes_primary() {
    let colors = palette();
    assert_eq!(
        map_paint(Paint::CurrentColor, MapContext::default(), &colors),
        ResolvedPaint::Color(colors.primary_text)
    );
}

#[test]
fn text_fields_always_get_the_text_color() {
    let colors = palette();
    let ctx = MapContext {
        is_text_field: true,
        is_background_role: false,
    };
    // Even a solid color sitting right on the background is overridden.
    assert_eq!(
        map_paint(Paint::Solid(colors.background), ctx, &colors),
        ResolvedPaint::Color(colors.text)
    );
    assert_eq!(
        map_paint(Paint::Complex, ctx, &colors),
        ResolvedPaint::Color(colors.text)
    );
}

#[test]
fn solid_colors_snap_to_nearest_palette_entry() {
    let colors = palette();
    let near_dark = Paint::Solid(Rgba8::rgb(0x20, 0x30, 0x40));
    let near_light = Paint::Solid(Rgba8::rgb(0xee, 0xee, 0xee));
    assert_eq!(
        map_paint(near_dark, MapContext::default(), &colors),
        ResolvedPaint::Color(colors.primary_text)
    );
    assert_eq!(
        map_paint(near_light, MapContext::default(), &colors),
        ResolvedPaint::Color(colors.background)
    );
}

#[test]
fn equidistant_ties_break_toward_primary() {
    let colors = BrandColors {
        primary_text: Rgba8::rgb(0, 0, 0),
        text: Rgba8::rgb(0, 0, 0),
        background: Rgba8::rgb(100, 0, 0),
    };
    let midpoint = Paint::Solid(Rgba8::rgb(50, 0, 0));
    assert_eq!(
        map_paint(midpoint, MapContext::default(), &colors),
        ResolvedPaint::Color(colors.primary_text)
    );
}

#[test]
fn complex_paint_falls_back_by_role() {
    let colors = palette();
    let bg_ctx = MapContext {
        is_text_field: false,
        is_background_role: true,
    };
    assert_eq!(
        map_paint(Paint::Complex, MapContext::default(), &colors),
        ResolvedPaint::Color(colors.background)
    );
    assert_eq!(
        map_paint(Paint::Complex, bg_ctx, &colors),
        ResolvedPaint::Color(colors.primary_text)
    );
}

#[test]
fn palette_closure_over_arbitrary_inputs() {
    // For every paint and classification, the output is one of the palette
    // colors, the text color, or a passthrough value.
    let colors = palette();
    let allowed = [
        ResolvedPaint::Color(colors.primary_text),
        ResolvedPaint::Color(colors.background),
        ResolvedPaint::Color(colors.text),
        ResolvedPaint::None,
        ResolvedPaint::Transparent,
    ];
    let mut seed = 0x9e3779b97f4a7c15u64;
    let mut next = || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((seed >> 32) & 0xff) as u8
    };
    for _ in 0..500 {
        let paint = match next() % 5 {
            0 => Paint::None,
            1 => Paint::Transparent,
            2 => Paint::CurrentColor,
            3 => Paint::Solid(Rgba8::rgb(next(), next(), next())),
            _ => Paint::Complex,
        };
        for is_text_field in [false, true] {
            for is_background_role in [false, true] {
                let ctx = MapContext {
                    is_text_field,
                    is_background_role,
                };
                let out = map_paint(paint, ctx, &colors);
                assert!(allowed.contains(&out), "leaked arbitrary color: {out:?}");
            }
        }
    }
}
