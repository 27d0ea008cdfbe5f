//! WCAG 2.1 color math shared by the palette mapper, logo resolver and
//! contrast sweep.
//!
//! All readability decisions happen in sRGB relative luminance space, which is
//! what the WCAG contrast-ratio definition is specified in.

use crate::foundation::core::Rgba8;

/// Linearize one sRGB channel given in `[0, 1]`.
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// `L = 0.2126 * R_lin + 0.7152 * G_lin + 0.0722 * B_lin`, in `[0, 1]`
/// where 0 is black and 1 is white. Alpha is ignored.
pub fn relative_luminance(color: Rgba8) -> f64 {
    let r_lin = srgb_to_linear(f64::from(color.r) / 255.0);
    let g_lin = srgb_to_linear(f64::from(color.g) / 255.0);
    let b_lin = srgb_to_linear(f64::from(color.b) / 255.0);
    0.2126 * r_lin + 0.7152 * g_lin + 0.0722 * b_lin
}

/// Compute the WCAG 2.1 contrast ratio between two colors.
///
/// `(L_lighter + 0.05) / (L_darker + 0.05)`, in `[1, 21]`, symmetric in its
/// arguments.
pub fn contrast_ratio(a: Rgba8, b: Rgba8) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Squared Euclidean distance between two colors in RGB space.
///
/// Used for nearest-palette-color mapping; alpha does not participate.
pub fn squared_distance(a: Rgba8, b: Rgba8) -> u32 {
    let dr = i32::from(a.r) - i32::from(b.r);
    let dg = i32::from(a.g) - i32::from(b.g);
    let db = i32::from(a.b) - i32::from(b.b);
    (dr * dr + dg * dg + db * db) as u32
}
