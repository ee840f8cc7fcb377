//! Stages 8 and 9: bloom and halation.
//!
//! Both are threshold-extract / blur / additive-composite effects. Bloom
//! adds a single tinted gaussian glow; halation layers a tight inner glow
//! and a wider outer glow with independent colors, which gives the
//! characteristic red-orange ring around burned-out highlights.

use ndarray::Zip;

use crate::filters::gaussian_blur::gaussian_blur;
use crate::frame::{Image, Plane};
use crate::preset::{Bloom, Halation};

/// Soft-knee highlight extraction from the luminance plane.
fn extract_highlights(lum: &Plane, threshold: f32, softness: f32) -> Plane {
    let knee = softness.max(1e-3);
    lum.mapv(|y| {
        let t = (y - threshold) / knee;
        y * t.clamp(0.0, 1.0)
    })
}

fn composite_add(image: &mut Image, glow: &Plane, tint: [f32; 3], strength: f32) {
    let channels = [
        (&mut image.red, tint[0]),
        (&mut image.green, tint[1]),
        (&mut image.blue, tint[2]),
    ];
    for (plane, t) in channels {
        Zip::from(plane).and(glow).for_each(|v, &g| {
            *v = (*v + g * t * strength).clamp(0.0, 1.0);
        });
    }
}

pub fn apply_bloom(image: &mut Image, bloom: &Bloom, scale: f32) {
    if !bloom.enabled || bloom.intensity <= 0.0 {
        return;
    }

    let lum = image.luminance();
    let bright = extract_highlights(&lum, bloom.threshold, bloom.softness);
    let glow = gaussian_blur(&bright, (bloom.radius * scale).max(0.5));
    composite_add(image, &glow, bloom.color_tint, bloom.intensity);
}

pub fn apply_halation(image: &mut Image, halation: &Halation, scale: f32) {
    if !halation.enabled || halation.intensity <= 0.0 {
        return;
    }

    let lum = image.luminance();
    let bright = extract_highlights(&lum, halation.threshold, halation.softness);

    // Inner ring is tight, outer bleed roughly triples the radius.
    let inner = gaussian_blur(&bright, (halation.radius * scale * 0.5).max(0.5));
    let outer = gaussian_blur(&bright, (halation.radius * scale * 1.5).max(0.5));

    composite_add(image, &inner, halation.inner_color, halation.intensity * 0.6);
    composite_add(image, &outer, halation.outer_color, halation.intensity * 0.4);
}
