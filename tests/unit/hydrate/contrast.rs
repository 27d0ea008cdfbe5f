use super::*;
use crate::foundation::core::Rect;
use crate::scene::node::ShapeKind;
use crate::scene::object::{Placement, TextAlign, TextStyle};

fn colors() -> BrandColors {
    BrandColors {
        primary_text: Rgba8::rgb(0x10, 0x20, 0x30),
        text: Rgba8::rgb(0x22, 0x22, 0x22),
        background: Rgba8::WHITE,
    }
}

fn backdrop(color: Rgba8) -> RenderableObject {
    RenderableObject {
        id: Some("#bg_panel".into()),
        kind: ObjectKind::Shape {
            shape: ShapeKind::Rect,
            corner_radius: 0.0,
        },
        placement: Placement::from_rect(Rect::new(0.0, 0.0, 1050.0, 600.0)),
        fill: ResolvedPaint::Color(color),
        stroke: ResolvedPaint::None,
        role: ObjectRole::Base,
        locked: false,
    }
}

fn text(fill: Rgba8, font_size: f64, weight: FontWeight) -> RenderableObject {
    RenderableObject {
        id: Some("#name".into()),
        kind: ObjectKind::Text {
            content: "Acme".into(),
            style: TextStyle {
                font_size,
                weight,
                letter_spacing: 0.0,
                align: TextAlign::Left,
            },
        },
        placement: Placement::from_rect(Rect::new(60.0, 150.0, 360.0, 200.0)),
        fill: ResolvedPaint::Color(fill),
        stroke: ResolvedPaint::None,
        role: ObjectRole::TextField,
        locked: false,
    }
}

fn dot(fill: Rgba8) -> RenderableObject {
    RenderableObject {
        id: Some("#layout_dot_phone".into()),
        kind: ObjectKind::Shape {
            shape: ShapeKind::Circle,
            corner_radius: 0.0,
        },
        placement: Placement::from_rect(Rect::new(60.0, 300.0, 66.0, 306.0)),
        fill: ResolvedPaint::Color(fill),
        stroke: ResolvedPaint::None,
        role: ObjectRole::Structural,
        locked: true,
    }
}

fn fill_of(obj: &RenderableObject) -> Rgba8 {
    match obj.fill {
        ResolvedPaint::Color(c) => c,
        _ => panic!("expected a color fill"),
    }
}

#[test]
fn white_on_white_snaps_to_black() {
    let out = sweep(
        vec![backdrop(Rgba8::WHITE), text(Rgba8::WHITE, 14.0, FontWeight::Normal)],
        &colors(),
        None,
    );
    assert_eq!(fill_of(&out[1]), Rgba8::BLACK);
}

#[test]
fn dark_on_dark_snaps_to_white() {
    let navy = Rgba8::rgb(0x0a, 0x10, 0x2a);
    let out = sweep(
        vec![backdrop(navy), text(Rgba8::rgb(0x10, 0x18, 0x30), 14.0, FontWeight::Normal)],
        &colors(),
        None,
    );
    assert_eq!(fill_of(&out[1]), Rgba8::WHITE);
}

#[test]
fn passing_text_is_left_alone() {
    let out = sweep(
        vec![backdrop(Rgba8::WHITE), text(Rgba8::BLACK, 14.0, FontWeight::Normal)],
        &colors(),
        None,
    );
    assert_eq!(fill_of(&out[1]), Rgba8::BLACK);
}

#[test]
fn large_text_uses_the_relaxed_threshold() {
    // Mid gray on white: roughly 3.4:1, between the two thresholds.
    let gray = Rgba8::rgb(0x8a, 0x8a, 0x8a);
    assert!(contrast_ratio(gray, Rgba8::WHITE) > LARGE_TEXT_RATIO);
    assert!(contrast_ratio(gray, Rgba8::WHITE) < NORMAL_TEXT_RATIO);

    let large = sweep(
        vec![backdrop(Rgba8::WHITE), text(gray, 44.0, FontWeight::Bold)],
        &colors(),
        None,
    );
    assert_eq!(fill_of(&large[1]), gray);

    let normal = sweep(
        vec![backdrop(Rgba8::WHITE), text(gray, 14.0, FontWeight::Normal)],
        &colors(),
        None,
    );
    assert_ne!(fill_of(&normal[1]), gray);
}

#[test]
fn bold_lowers_the_large_text_cutoff() {
    let gray = Rgba8::rgb(0x8a, 0x8a, 0x8a);
    // 20px bold counts as large; 20px regular does not.
    let bold = sweep(
        vec![backdrop(Rgba8::WHITE), text(gray, 20.0, FontWeight::Bold)],
        &colors(),
        None,
    );
    assert_eq!(fill_of(&bold[1]), gray);
    let regular = sweep(
        vec![backdrop(Rgba8::WHITE), text(gray, 20.0, FontWeight::Normal)],
        &colors(),
        None,
    );
    assert_ne!(fill_of(&regular[1]), gray);
}

#[test]
fn structural_marks_use_the_relaxed_threshold() {
    let gray = Rgba8::rgb(0x8a, 0x8a, 0x8a);
    let out = sweep(vec![backdrop(Rgba8::WHITE), dot(gray)], &colors(), None);
    assert_eq!(fill_of(&out[1]), gray);

    let faint = Rgba8::rgb(0xdd, 0xdd, 0xdd);
    let out = sweep(vec![backdrop(Rgba8::WHITE), dot(faint)], &colors(), None);
    assert_ne!(fill_of(&out[1]), faint);
}

#[test]
fn base_and_logo_objects_are_never_recolored() {
    let faint = Rgba8::rgb(0xfe, 0xfe, 0xfe);
    let mut logo = dot(faint);
    logo.role = ObjectRole::Logo;
    let out = sweep(
        vec![backdrop(Rgba8::WHITE), backdrop(faint), logo],
        &colors(),
        None,
    );
    assert_eq!(fill_of(&out[1]), faint);
    assert_eq!(fill_of(&out[2]), faint);
}

#[test]
fn sweep_is_idempotent() {
    let scene = vec![
        backdrop(Rgba8::WHITE),
        text(Rgba8::WHITE, 14.0, FontWeight::Normal),
        text(Rgba8::rgb(0x8a, 0x8a, 0x8a), 44.0, FontWeight::Bold),
        dot(Rgba8::rgb(0xdd, 0xdd, 0xdd)),
    ];
    let once = sweep(scene, &colors(), None);
    let twice = sweep(once.clone(), &colors(), None);
    assert_eq!(once, twice);
}
