use approx::assert_abs_diff_eq;

use emulsion_core::color::{hsl_to_rgb, hue_band_weight, hue_distance, rgb_to_hsl};

#[test]
fn primary_colors_round_trip_through_hsl() {
    for &(r, g, b) in &[
        (1.0, 0.0, 0.0),
        (0.0, 1.0, 0.0),
        (0.0, 0.0, 1.0),
        (1.0, 1.0, 0.0),
        (0.3, 0.3, 0.3),
        (0.8, 0.4, 0.2),
    ] {
        let (r2, g2, b2) = hsl_to_rgb(rgb_to_hsl(r, g, b));
        assert_abs_diff_eq!(r2, r, epsilon = 1e-4);
        assert_abs_diff_eq!(g2, g, epsilon = 1e-4);
        assert_abs_diff_eq!(b2, b, epsilon = 1e-4);
    }
}

#[test]
fn grays_have_zero_saturation() {
    let hsl = rgb_to_hsl(0.5, 0.5, 0.5);
    assert_abs_diff_eq!(hsl.s, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(hsl.l, 0.5, epsilon = 1e-6);
}

#[test]
fn pure_red_has_zero_hue() {
    let hsl = rgb_to_hsl(1.0, 0.0, 0.0);
    assert_abs_diff_eq!(hsl.h, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(hsl.s, 1.0, epsilon = 1e-6);
}

#[test]
fn hue_distance_takes_the_short_way_around() {
    // 0.95 and 0.05 are a tenth of a turn apart across the wrap point.
    assert_abs_diff_eq!(hue_distance(0.95, 0.05).abs(), 0.1, epsilon = 1e-6);
    assert_abs_diff_eq!(hue_distance(0.2, 0.2), 0.0, epsilon = 1e-6);
    assert!(hue_distance(0.0, 0.6).abs() <= 0.5);
}

#[test]
fn hue_band_weight_peaks_at_center_and_vanishes_outside() {
    assert_abs_diff_eq!(hue_band_weight(0.3, 0.3, 0.05), 1.0, epsilon = 1e-6);
    assert_eq!(hue_band_weight(0.5, 0.3, 0.05), 0.0);
    // Falloff is monotone away from the center.
    let near = hue_band_weight(0.31, 0.3, 0.05);
    let far = hue_band_weight(0.335, 0.3, 0.05);
    assert!(near > far);
    // Bands wrap across the red boundary.
    assert!(hue_band_weight(0.98, 0.02, 0.1) > 0.0);
}
