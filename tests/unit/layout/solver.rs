use super::*;
use crate::foundation::core::CARD_HEIGHT;

#[test]
fn lookup_falls_back_to_default() {
    assert_eq!(content_area_for("classic").width, 500.0);
    assert_eq!(content_area_for("no-such-template"), DEFAULT_CONTENT_AREA);
}

#[test]
fn medium_tier_worked_example() {
    // Medium tier (80x80 logo box), left 60, top 50; line boxes round up
    // to whole pixels:
    //   name.top    = 50 + 80 + 20               = 150
    //   title.top   = 150 + ceil(44 * 1.15) + 8  = 209
    //   divider.top = 209 + ceil(18 * 1.3) + 18  = 251
    let area = ContentArea {
        left: 60.0,
        top: 50.0,
        width: 480.0,
    };
    let layout = compute_layout(&area);
    assert_eq!(layout.logo_tier, LogoTier::Medium);
    assert_eq!(layout.logo.height(), 80.0);
    assert_eq!(layout.name.y, 150.0);
    assert_eq!(layout.name.style.font_size, 44.0);
    assert_eq!(layout.title.y, 209.0);
    assert_eq!(layout.divider.y0, 251.0);
}

#[test]
fn line_advances_at_width_550() {
    // Same column arithmetic at a wide area: the logo tier changes the
    // starting cursor, but the name and title advances stay 51+8 and 24+18.
    let area = ContentArea {
        left: 60.0,
        top: 50.0,
        width: 550.0,
    };
    let layout = compute_layout(&area);
    assert_eq!(layout.logo_tier, LogoTier::Large);
    assert_eq!(layout.name.y, 170.0);
    assert_eq!(layout.title.y - layout.name.y, 59.0);
    assert_eq!(layout.divider.y0 - layout.title.y, 42.0);
}

#[test]
fn heading_scale_shrinks_narrow_areas() {
    let narrow = ContentArea {
        left: 40.0,
        top: 40.0,
        width: 300.0,
    };
    let layout = compute_layout(&narrow);
    // 300/500 = 0.6 clamps to the 0.7 floor: round(44 * 0.7) = 31.
    assert_eq!(layout.name.style.font_size, 31.0);

    let wide = ContentArea {
        left: 40.0,
        top: 40.0,
        width: 600.0,
    };
    assert_eq!(compute_layout(&wide).name.style.font_size, 44.0);
}

#[test]
fn divider_width_caps_at_100() {
    let area = ContentArea {
        left: 60.0,
        top: 50.0,
        width: 300.0,
    };
    assert_eq!(compute_layout(&area).divider.width(), 75.0);

    let area = ContentArea {
        left: 60.0,
        top: 50.0,
        width: 800.0,
    };
    assert_eq!(compute_layout(&area).divider.width(), 100.0);
}

#[test]
fn contact_rows_increase_and_stay_on_card() {
    // Layout monotonicity across the whole supported width range.
    let mut width = 200.0;
    while width <= 1000.0 {
        let area = ContentArea {
            left: 60.0,
            top: 50.0,
            width,
        };
        let layout = compute_layout(&area);
        let mut prev = layout.divider.y0;
        for row in &layout.contacts {
            assert!(row.text.y > prev, "rows must strictly increase at width {width}");
            assert!(
                row.text.y < CARD_HEIGHT,
                "row exceeds card height at width {width}"
            );
            // Dot sits left of the text and centered on the row.
            assert!(row.dot.x < row.text.x);
            assert_eq!(row.dot.y, row.text.y + 7.0);
            prev = row.text.y;
        }
        width += 25.0;
    }
}

#[test]
fn stack_order_is_strictly_top_to_bottom() {
    let layout = compute_layout(&DEFAULT_CONTENT_AREA);
    assert!(layout.logo.y1 < layout.name.y + 1.0);
    assert!(layout.name.y < layout.title.y);
    assert!(layout.title.y < layout.divider.y0);
    assert!(layout.divider.y1 < layout.contacts[0].text.y);
}
