//! Affine transform composition and QR-style decomposition.
//!
//! Flattening a template replaces a chain of nested local transforms with a
//! single composed matrix per node. [`decompose`] splits that matrix back
//! into the translate/scale/skew/rotation fields a canvas-style renderer
//! places objects with, and [`recompose`] is its exact inverse.

use crate::foundation::core::Affine;
use crate::foundation::error::{PlacardError, PlacardResult};

/// Compose a parent absolute matrix with a node's local matrix.
///
/// Order matters: the local transform is applied first, then the parent,
/// which is `parent * local` in kurbo's convention.
#[inline]
pub fn compose(parent: Affine, local: Affine) -> Affine {
    parent * local
}

/// Components extracted from a 2D affine matrix.
///
/// Angles are in radians. `skew_y` is only non-zero in the degenerate branch
/// where the matrix's first column vanishes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Decomposed {
    /// Horizontal translation.
    pub translate_x: f64,
    /// Vertical translation.
    pub translate_y: f64,
    /// Horizontal scale factor (may be negative for flips).
    pub scale_x: f64,
    /// Vertical scale factor (may be negative for flips).
    pub scale_y: f64,
    /// Horizontal shear angle in radians.
    pub skew_x: f64,
    /// Vertical shear angle in radians.
    pub skew_y: f64,
    /// Rotation in radians.
    pub angle: f64,
}

impl Decomposed {
    /// Identity decomposition (unit scale, no rotation, no skew).
    pub fn identity() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            skew_x: 0.0,
            skew_y: 0.0,
            angle: 0.0,
        }
    }
}

/// Split a matrix into translation, rotation, non-uniform scale and skew.
///
/// Uses the QR-style decomposition: the matrix is factored as
/// `T * R(angle) * S(scale) * ShearX(skew_x) * ShearY(skew_y)`, which
/// [`recompose`] rebuilds exactly. Fails only when a coefficient is non-finite, which indicates a
/// malformed source transform.
pub fn decompose(m: Affine) -> PlacardResult<Decomposed> {
    let c = m.as_coeffs();
    if c.iter().any(|v| !v.is_finite()) {
        return Err(PlacardError::template(
            "non-finite transform matrix coefficient",
        ));
    }
    // kurbo maps (x, y) -> (a*x + c*y + e, b*x + d*y + f).
    let [a, b, cc, d, e, f] = c;
    let det = a * d - b * cc;

    let (angle, scale_x, scale_y, skew_x, skew_y) = if a != 0.0 || b != 0.0 {
        let r = a.hypot(b);
        (
            b.atan2(a),
            r,
            det / r,
            (a * cc + b * d).atan2(r * r),
            0.0,
        )
    } else if cc != 0.0 || d != 0.0 {
        let s = cc.hypot(d);
        (
            d.atan2(cc) - std::f64::consts::FRAC_PI_2,
            det / s,
            s,
            0.0,
            (a * cc + b * d).atan2(s * s),
        )
    } else {
        // Fully collapsed matrix; keep the translation, zero everything else.
        (0.0, 0.0, 0.0, 0.0, 0.0)
    };

    Ok(Decomposed {
        translate_x: e,
        translate_y: f,
        scale_x,
        scale_y,
        skew_x,
        skew_y,
        angle,
    })
}

/// Rebuild the matrix a [`Decomposed`] value was extracted from.
pub fn recompose(d: &Decomposed) -> Affine {
    let shear_x = Affine::new([1.0, 0.0, d.skew_x.tan(), 1.0, 0.0, 0.0]);
    let shear_y = Affine::new([1.0, d.skew_y.tan(), 0.0, 1.0, 0.0, 0.0]);
    Affine::translate((d.translate_x, d.translate_y))
        * Affine::rotate(d.angle)
        * Affine::scale_non_uniform(d.scale_x, d.scale_y)
        * shear_x
        * shear_y
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
