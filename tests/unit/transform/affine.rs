use super::*;
use crate::foundation::core::Point;

/// Small deterministic LCG so the randomized coverage is reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 11) as f64) / ((1u64 << 53) as f64)
    }

    fn in_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

fn random_affine(rng: &mut Lcg) -> Affine {
    let d = Decomposed {
        translate_x: rng.in_range(-500.0, 500.0),
        translate_y: rng.in_range(-500.0, 500.0),
        scale_x: rng.in_range(0.2, 3.0),
        scale_y: rng.in_range(0.2, 3.0),
        skew_x: rng.in_range(-1.0, 1.0),
        skew_y: 0.0,
        angle: rng.in_range(-3.0, 3.0),
    };
    recompose(&d)
}

fn assert_affine_close(a: Affine, b: Affine, eps: f64) {
    let ca = a.as_coeffs();
    let cb = b.as_coeffs();
    for i in 0..6 {
        assert!(
            (ca[i] - cb[i]).abs() < eps,
            "coefficient {i} differs: {} vs {}",
            ca[i],
            cb[i]
        );
    }
}

#[test]
fn compose_is_parent_then_local() {
    let parent = Affine::translate((100.0, 0.0));
    let local = Affine::scale(2.0);
    let m = compose(parent, local);
    // Local scale applies first, then the parent translation.
    assert_eq!(m * Point::new(3.0, 4.0), Point::new(106.0, 8.0));
}

#[test]
fn decompose_identity() {
    let d = decompose(Affine::IDENTITY).unwrap();
    assert_eq!(d, Decomposed::identity());
}

#[test]
fn decompose_plain_translation_and_scale() {
    let d = decompose(Affine::translate((30.0, -12.5))).unwrap();
    assert_eq!(d.translate_x, 30.0);
    assert_eq!(d.translate_y, -12.5);
    assert_eq!(d.scale_x, 1.0);
    assert_eq!(d.scale_y, 1.0);

    let d = decompose(Affine::scale_non_uniform(2.0, 0.5)).unwrap();
    assert_eq!(d.scale_x, 2.0);
    assert_eq!(d.scale_y, 0.5);
    assert_eq!(d.angle, 0.0);
}

#[test]
fn decompose_recompose_roundtrips_random_matrices() {
    let mut rng = Lcg(0xcbf2_9ce4_8422_2325);
    for _ in 0..200 {
        let m = random_affine(&mut rng);
        let d = decompose(m).unwrap();
        assert_affine_close(recompose(&d), m, 1e-9);
    }
}

#[test]
fn flatten_matches_nested_evaluation_three_deep() {
    // The flatten invariant: composing down a chain and applying once is
    // observationally equal to applying each nested transform in turn.
    let mut rng = Lcg(42);
    for _ in 0..100 {
        let a = random_affine(&mut rng);
        let b = random_affine(&mut rng);
        let c = random_affine(&mut rng);
        let flat = compose(compose(a, b), c);

        let p = Point::new(rng.in_range(-50.0, 50.0), rng.in_range(-50.0, 50.0));
        let nested = a * (b * (c * p));
        let direct = flat * p;
        assert!((nested - direct).hypot() < 1e-9);
    }
}

#[test]
fn decompose_flip_keeps_mapping() {
    // Negative determinant (mirror) must survive the roundtrip.
    let m = Affine::scale_non_uniform(-1.5, 2.0) * Affine::rotate(0.7);
    let d = decompose(m).unwrap();
    assert_affine_close(recompose(&d), m, 1e-9);
}

#[test]
fn decompose_degenerate_first_column() {
    // a == b == 0: the alternate branch must still rebuild the matrix.
    let m = Affine::new([0.0, 0.0, 1.5, 2.0, 7.0, -3.0]);
    let d = decompose(m).unwrap();
    assert_affine_close(recompose(&d), m, 1e-9);
}

#[test]
fn decompose_rejects_non_finite() {
    let m = Affine::new([f64::NAN, 0.0, 0.0, 1.0, 0.0, 0.0]);
    assert!(decompose(m).is_err());
}
