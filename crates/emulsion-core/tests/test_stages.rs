#[allow(dead_code)]
mod common;

use emulsion_core::filters::gaussian_blur::gaussian_blur;
use emulsion_core::pipeline::{distortion, grain_stage, tone_map, vignette};
use emulsion_core::preset::{
    DensityPoint, Grain, LensDistortion, TemporalGrain, ToneMapping, Vignette,
};

use common::{assert_images_close, assert_images_equal, gradient_image, max_diff};

// ---------------------------------------------------------------------------
// Vignette
// ---------------------------------------------------------------------------

#[test]
fn vignette_darkens_corners_not_center() {
    let mut image = common::flat_image(64, 64, [0.8, 0.8, 0.8]);
    vignette::apply(
        &mut image,
        &Vignette {
            enabled: true,
            intensity: 0.5,
            ..Vignette::default()
        },
    );
    let center = image.red[[32, 32]];
    let corner = image.red[[0, 0]];
    assert!(corner < center, "corner {corner} should be darker than center {center}");
    assert!(center > 0.75, "center should stay near the original value");
}

#[test]
fn zero_intensity_vignette_is_identity() {
    let original = gradient_image(32, 48);
    let mut image = original.clone();
    vignette::apply(
        &mut image,
        &Vignette {
            enabled: true,
            intensity: 0.0,
            ..Vignette::default()
        },
    );
    assert_images_equal(&image, &original);
}

// ---------------------------------------------------------------------------
// Tone mapping
// ---------------------------------------------------------------------------

#[test]
fn tone_map_is_monotone_and_bounded() {
    let mapping = ToneMapping {
        enabled: true,
        ..ToneMapping::default()
    };
    let mut image = gradient_image(1, 256);
    let before = image.red.clone();
    tone_map::apply(&mut image, &mapping);

    let mut prev = -1.0f32;
    for (x, &y) in before.iter().zip(image.red.iter()) {
        assert!((0.0..=1.0).contains(&y), "output {y} for input {x} out of range");
        assert!(y >= prev - 1e-4, "curve not monotone at input {x}");
        prev = y;
    }
}

#[test]
fn tone_map_preserves_black() {
    let mut image = common::flat_image(4, 4, [0.0, 0.0, 0.0]);
    tone_map::apply(
        &mut image,
        &ToneMapping {
            enabled: true,
            ..ToneMapping::default()
        },
    );
    assert!(image.red[[0, 0]].abs() < 1e-3);
}

// ---------------------------------------------------------------------------
// Grain
// ---------------------------------------------------------------------------

fn test_grain() -> Grain {
    Grain {
        enabled: true,
        global_intensity: 0.5,
        ..Grain::default()
    }
}

#[test]
fn grain_is_deterministic_for_fixed_seed_and_frame() {
    let original = gradient_image(48, 48);
    let grain = test_grain();

    let mut a = original.clone();
    let mut b = original.clone();
    grain_stage::apply(&mut a, &grain, 0);
    grain_stage::apply(&mut b, &grain, 0);
    assert_images_equal(&a, &b);

    assert!(max_diff(&a, &original) > 0.0, "grain should perturb pixels");
}

#[test]
fn different_seeds_decorrelate_grain() {
    let original = gradient_image(48, 48);
    let mut a = original.clone();
    let mut b = original.clone();

    let mut grain_b = test_grain();
    grain_b.channels.red.seed = 99;
    grain_b.channels.green.seed = 100;
    grain_b.channels.blue.seed = 101;

    grain_stage::apply(&mut a, &test_grain(), 0);
    grain_stage::apply(&mut b, &grain_b, 0);
    assert!(max_diff(&a, &b) > 0.0, "seeds should change the pattern");
}

#[test]
fn temporal_grain_changes_between_refreshes() {
    let original = gradient_image(48, 48);
    let mut grain = test_grain();
    grain.temporal = TemporalGrain {
        enabled: true,
        refresh_every: 1,
    };

    let mut frame0 = original.clone();
    let mut frame1 = original.clone();
    grain_stage::apply(&mut frame0, &grain, 0);
    grain_stage::apply(&mut frame1, &grain, 1);
    assert!(max_diff(&frame0, &frame1) > 0.0, "pattern should refresh per frame");
}

#[test]
fn still_grain_ignores_frame_counter() {
    let original = gradient_image(48, 48);
    let grain = test_grain();

    let mut frame0 = original.clone();
    let mut frame7 = original.clone();
    grain_stage::apply(&mut frame0, &grain, 0);
    grain_stage::apply(&mut frame7, &grain, 7);
    assert_images_equal(&frame0, &frame7);
}

#[test]
fn zero_density_curve_silences_the_grain() {
    let original = gradient_image(48, 48);
    let mut image = original.clone();
    let mut grain = test_grain();
    grain.density_curve = vec![
        DensityPoint {
            luma: 0.0,
            multiplier: 0.0,
        },
        DensityPoint {
            luma: 1.0,
            multiplier: 0.0,
        },
    ];
    grain_stage::apply(&mut image, &grain, 0);
    assert_images_equal(&image, &original);
}

#[test]
fn density_curve_point_order_does_not_matter() {
    let original = gradient_image(48, 48);
    let points = [
        DensityPoint {
            luma: 0.0,
            multiplier: 0.4,
        },
        DensityPoint {
            luma: 0.5,
            multiplier: 1.0,
        },
        DensityPoint {
            luma: 1.0,
            multiplier: 0.3,
        },
    ];

    let mut sorted_grain = test_grain();
    sorted_grain.density_curve = points.to_vec();
    let mut reversed_grain = test_grain();
    reversed_grain.density_curve = points.iter().rev().copied().collect();

    let mut a = original.clone();
    let mut b = original.clone();
    grain_stage::apply(&mut a, &sorted_grain, 0);
    grain_stage::apply(&mut b, &reversed_grain, 0);
    assert_images_equal(&a, &b);
}

// ---------------------------------------------------------------------------
// Lens distortion
// ---------------------------------------------------------------------------

#[test]
fn zero_coefficients_distortion_is_near_identity() {
    let original = gradient_image(40, 60);
    let mut image = original.clone();
    distortion::apply(
        &mut image,
        &LensDistortion {
            enabled: true,
            k1: 0.0,
            k2: 0.0,
            ca_strength: 0.0,
            scale: 1.0,
        },
    );
    // Bilinear resampling at identical coordinates reproduces the input.
    assert_images_close(&image, &original, 1e-4);
}

#[test]
fn barrel_distortion_moves_edge_pixels() {
    let original = gradient_image(40, 60);
    let mut image = original.clone();
    distortion::apply(
        &mut image,
        &LensDistortion {
            enabled: true,
            k1: 0.2,
            k2: 0.0,
            ca_strength: 0.0,
            scale: 1.0,
        },
    );
    assert!(max_diff(&image, &original) > 0.0);
}

// ---------------------------------------------------------------------------
// Gaussian blur helper
// ---------------------------------------------------------------------------

#[test]
fn blur_preserves_flat_regions() {
    let image = common::flat_image(32, 32, [0.4, 0.4, 0.4]);
    let blurred = gaussian_blur(&image.red, 2.0);
    for &v in blurred.iter() {
        assert!((v - 0.4).abs() < 1e-4, "flat plane should stay flat, got {v}");
    }
}

#[test]
fn non_positive_sigma_is_identity() {
    let image = gradient_image(16, 16);
    let out = gaussian_blur(&image.red, 0.0);
    assert_eq!(out, image.red);
}
