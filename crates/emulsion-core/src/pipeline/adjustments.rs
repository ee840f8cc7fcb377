//! Stage 1: the twelve scalar color adjustments.
//!
//! All per-pixel work happens in a single pass; clarity adds one blurred
//! luminance plane on top when non-zero.

use crate::color::luma;
use crate::filters::gaussian_blur::gaussian_blur;
use crate::frame::Image;
use crate::preset::ColorAdjustments;

/// Blur sigma used for the clarity local-contrast mask, in pixels at a
/// 1000-px long edge; scaled with resolution by the caller via `scale`.
const CLARITY_SIGMA_BASE: f32 = 8.0;

pub fn apply(image: &mut Image, adj: &ColorAdjustments, scale: f32) {
    if adj.is_neutral() {
        return;
    }

    let gain = 2.0f32.powf(adj.exposure);
    let contrast_mul = 1.0 + adj.contrast;

    image.map_pixels(|r, g, b| {
        let mut r = r * gain;
        let mut g = g * gain;
        let mut b = b * gain;

        // White balance: warm/cool then green/magenta.
        r += adj.temperature * 0.10 + adj.tint * 0.05;
        g -= adj.tint * 0.08;
        b += -adj.temperature * 0.06 + adj.tint * 0.05;

        // Blacks lift / whites gain before the tonal masks.
        r += adj.blacks * 0.10;
        g += adj.blacks * 0.10;
        b += adj.blacks * 0.10;
        let white_mul = 1.0 + adj.whites * 0.10;
        r *= white_mul;
        g *= white_mul;
        b *= white_mul;

        // Luma-masked highlight compression and shadow lift.
        let y = luma(r, g, b).clamp(0.0, 1.0);
        let highlight_mask = ((y - 0.5) * 2.0).clamp(0.0, 1.0);
        let shadow_mask = (1.0 - y * 2.0).clamp(0.0, 1.0);
        let tonal = -adj.highlights * 0.3 * highlight_mask + adj.shadows * 0.3 * shadow_mask;
        r += tonal;
        g += tonal;
        b += tonal;

        // Contrast around mid-gray.
        r = (r - 0.5) * contrast_mul + 0.5;
        g = (g - 0.5) * contrast_mul + 0.5;
        b = (b - 0.5) * contrast_mul + 0.5;

        // Fade lifts the floor and flattens slightly.
        if adj.fade > 0.0 {
            let f = adj.fade * 0.2;
            r = r * (1.0 - f) + f * 0.6;
            g = g * (1.0 - f) + f * 0.6;
            b = b * (1.0 - f) + f * 0.6;
        }

        // Saturation, then vibrance weighted toward muted pixels.
        let y = luma(r, g, b);
        let sat_mul = 1.0 + adj.saturation;
        r = y + (r - y) * sat_mul;
        g = y + (g - y) * sat_mul;
        b = y + (b - y) * sat_mul;
        if adj.vibrance != 0.0 {
            let max = r.max(g).max(b);
            let min = r.min(g).min(b);
            let current_sat = (max - min).clamp(0.0, 1.0);
            let vib = 1.0 + adj.vibrance * (1.0 - current_sat);
            r = y + (r - y) * vib;
            g = y + (g - y) * vib;
            b = y + (b - y) * vib;
        }

        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    });

    if adj.clarity != 0.0 {
        apply_clarity(image, adj.clarity, scale);
    }
}

/// Midtone local contrast: add back the difference between luminance and
/// its large-radius blur, masked away from shadows and highlights.
fn apply_clarity(image: &mut Image, clarity: f32, scale: f32) {
    let lum = image.luminance();
    let blurred = gaussian_blur(&lum, CLARITY_SIGMA_BASE * scale.max(0.25));

    let detail = ndarray::Zip::from(&lum)
        .and(&blurred)
        .map_collect(|&l, &bl| {
            let midtone_mask = (4.0 * l * (1.0 - l)).clamp(0.0, 1.0);
            (l - bl) * clarity * midtone_mask
        });

    for plane in [&mut image.red, &mut image.green, &mut image.blue] {
        ndarray::Zip::from(plane).and(&detail).for_each(|v, &d| {
            *v = (*v + d).clamp(0.0, 1.0);
        });
    }
}
