#[allow(dead_code)]
mod common;

use emulsion_core::pipeline::{framing, glow};
use emulsion_core::preset::{Bloom, FrameShadow, Halation, InstantFrame};

use common::{assert_images_equal, flat_image};

// ---------------------------------------------------------------------------
// Bloom
// ---------------------------------------------------------------------------

fn bright_spot_image() -> emulsion_core::frame::Image {
    let mut image = flat_image(48, 48, [0.2, 0.2, 0.2]);
    for y in 22..26 {
        for x in 22..26 {
            image.red[[y, x]] = 1.0;
            image.green[[y, x]] = 1.0;
            image.blue[[y, x]] = 1.0;
        }
    }
    image
}

#[test]
fn bloom_spreads_light_around_highlights() {
    let mut image = bright_spot_image();
    let before = image.red[[18, 24]];
    glow::apply_bloom(
        &mut image,
        &Bloom {
            enabled: true,
            intensity: 0.6,
            threshold: 0.7,
            radius: 4.0,
            ..Bloom::default()
        },
        1.0,
    );
    assert!(
        image.red[[18, 24]] > before,
        "pixels near the highlight should brighten"
    );
}

#[test]
fn bloom_leaves_sub_threshold_images_untouched() {
    let original = flat_image(32, 32, [0.3, 0.3, 0.3]);
    let mut image = original.clone();
    glow::apply_bloom(
        &mut image,
        &Bloom {
            enabled: true,
            intensity: 0.8,
            threshold: 0.7,
            ..Bloom::default()
        },
        1.0,
    );
    assert_images_equal(&image, &original);
}

// ---------------------------------------------------------------------------
// Halation
// ---------------------------------------------------------------------------

#[test]
fn halation_fringes_are_warm() {
    let mut image = bright_spot_image();
    let red_before = image.red[[19, 24]];
    let blue_before = image.blue[[19, 24]];
    glow::apply_halation(
        &mut image,
        &Halation {
            enabled: true,
            intensity: 0.6,
            threshold: 0.7,
            radius: 5.0,
            ..Halation::default()
        },
        1.0,
    );
    let red_gain = image.red[[19, 24]] - red_before;
    let blue_gain = image.blue[[19, 24]] - blue_before;
    assert!(red_gain > 0.0, "halation should glow past the highlight edge");
    assert!(red_gain > blue_gain, "the fringe should lean red");
}

// ---------------------------------------------------------------------------
// Instant frame
// ---------------------------------------------------------------------------

#[test]
fn frame_expands_the_canvas_by_the_border_widths() {
    let mut image = flat_image(100, 100, [0.5, 0.5, 0.5]);
    framing::apply(
        &mut image,
        &InstantFrame {
            enabled: true,
            border_widths: [0.05, 0.05, 0.05, 0.16],
            ..InstantFrame::default()
        },
    );
    // 100 px long edge: 5 px top/left/right, 16 px bottom.
    assert_eq!(image.width(), 110);
    assert_eq!(image.height(), 121);
}

#[test]
fn photo_content_survives_inside_the_border() {
    let mut image = flat_image(60, 60, [0.25, 0.5, 0.75]);
    framing::apply(
        &mut image,
        &InstantFrame {
            enabled: true,
            border_widths: [0.1, 0.1, 0.1, 0.1],
            border_color: [1.0, 1.0, 1.0],
            shadow: FrameShadow {
                opacity: 0.0,
                ..FrameShadow::default()
            },
            ..InstantFrame::default()
        },
    );
    // Inset starts at (6, 6).
    assert_eq!(image.red[[6, 6]], 0.25);
    assert_eq!(image.green[[30, 30]], 0.5);
    // With the shadow disabled the border keeps its exact color.
    assert_eq!(image.red[[0, 0]], 1.0);
    assert_eq!(image.blue[[0, 0]], 1.0);
}

#[test]
fn disabled_frame_is_identity() {
    let original = flat_image(40, 40, [0.4, 0.4, 0.4]);
    let mut image = original.clone();
    framing::apply(&mut image, &InstantFrame::default());
    assert_images_equal(&image, &original);
}

#[test]
fn shadow_darkens_the_border_under_the_photo_edge() {
    let mut image = flat_image(80, 80, [0.5, 0.5, 0.5]);
    framing::apply(
        &mut image,
        &InstantFrame {
            enabled: true,
            border_widths: [0.1, 0.1, 0.1, 0.2],
            border_color: [1.0, 1.0, 1.0],
            shadow: FrameShadow {
                blur: 3.0,
                opacity: 0.5,
                offset: [4.0, 0.0],
            },
            ..InstantFrame::default()
        },
    );
    // Just below the photo, inside the bottom border, the offset shadow
    // falls on the border color.
    let h = image.height();
    let below_photo = image.red[[h - 14, 40]];
    let far_corner = image.red[[h - 1, 1]];
    assert!(below_photo < far_corner, "shadow should darken the border");
}
