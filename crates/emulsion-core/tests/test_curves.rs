use approx::assert_abs_diff_eq;

use emulsion_core::preset::curves::{build_lut, evaluate, sample_lut};
use emulsion_core::preset::{CurvePoint, Curves};

fn pts(pairs: &[(f32, f32)]) -> Vec<CurvePoint> {
    pairs
        .iter()
        .map(|&(i, o)| CurvePoint::new(i, o))
        .collect()
}

#[test]
fn endpoints_only_curve_is_identity() {
    let curve = pts(&[(0.0, 0.0), (1.0, 1.0)]);
    for i in 0..=100 {
        let x = i as f32 / 100.0;
        assert_abs_diff_eq!(evaluate(&curve, x), x, epsilon = 1e-6);
    }
}

#[test]
fn empty_curve_is_identity() {
    assert_eq!(evaluate(&[], 0.42), 0.42);
}

#[test]
fn unsorted_points_are_tolerated() {
    let sorted = pts(&[(0.0, 0.1), (0.5, 0.6), (1.0, 0.9)]);
    let shuffled = pts(&[(1.0, 0.9), (0.0, 0.1), (0.5, 0.6)]);
    for i in 0..=20 {
        let x = i as f32 / 20.0;
        assert_abs_diff_eq!(evaluate(&sorted, x), evaluate(&shuffled, x), epsilon = 1e-6);
    }
}

#[test]
fn interpolation_is_piecewise_linear() {
    let curve = pts(&[(0.0, 0.0), (0.5, 0.8), (1.0, 1.0)]);
    assert_abs_diff_eq!(evaluate(&curve, 0.25), 0.4, epsilon = 1e-6);
    assert_abs_diff_eq!(evaluate(&curve, 0.75), 0.9, epsilon = 1e-6);
}

#[test]
fn inputs_outside_range_clamp_to_endpoints() {
    let curve = pts(&[(0.2, 0.3), (0.8, 0.7)]);
    assert_abs_diff_eq!(evaluate(&curve, 0.0), 0.3, epsilon = 1e-6);
    assert_abs_diff_eq!(evaluate(&curve, 1.0), 0.7, epsilon = 1e-6);
}

#[test]
fn lut_matches_direct_evaluation() {
    let curve = pts(&[(0.0, 0.05), (0.3, 0.25), (0.7, 0.8), (1.0, 0.95)]);
    let lut = build_lut(&curve);
    for i in 0..=50 {
        let x = i as f32 / 50.0;
        assert_abs_diff_eq!(sample_lut(&lut, x), evaluate(&curve, x), epsilon = 5e-3);
    }
}

#[test]
fn identity_detection() {
    assert!(Curves::default().is_identity());
    assert!(Curves {
        red: pts(&[(0.0, 0.0), (1.0, 1.0)]),
        green: Vec::new(),
        blue: Vec::new(),
    }
    .is_identity());
    assert!(!Curves {
        red: pts(&[(0.0, 0.1), (1.0, 1.0)]),
        green: Vec::new(),
        blue: Vec::new(),
    }
    .is_identity());
}

#[test]
fn scaling_to_zero_gives_identity_outputs() {
    let curves = Curves {
        red: pts(&[(0.0, 0.2), (0.5, 0.7), (1.0, 0.9)]),
        green: Vec::new(),
        blue: Vec::new(),
    };
    let flattened = curves.scaled(0.0);
    for point in &flattened.red {
        assert_abs_diff_eq!(point.output, point.input, epsilon = 1e-6);
    }
}
