//! Stage 10: multiplicative radial vignette.

use ndarray::Zip;

use crate::frame::Image;
use crate::preset::Vignette;

pub fn apply(image: &mut Image, vignette: &Vignette) {
    if !vignette.enabled || vignette.intensity == 0.0 {
        return;
    }

    let (h, w) = (image.height() as f32, image.width() as f32);
    let cx = w / 2.0;
    let cy = h / 2.0;
    let aspect = w / h;

    // roundness 1 = circular (aspect-corrected); 0 follows the frame shape.
    let x_scale = 1.0 + (aspect - 1.0) * vignette.roundness.clamp(0.0, 1.0);
    let midpoint = vignette.midpoint.clamp(0.0, 0.99);
    let feather = vignette.feather.clamp(0.01, 1.0);
    let strength = vignette.intensity;

    let falloff = |y: usize, x: usize| -> f32 {
        let dx = (x as f32 - cx) / cx / x_scale;
        let dy = (y as f32 - cy) / cy;
        let dist = (dx * dx + dy * dy).sqrt() / std::f32::consts::SQRT_2;
        if dist <= midpoint {
            1.0
        } else {
            let t = ((dist - midpoint) / feather).min(1.0);
            1.0 - strength * t * t
        }
    };

    for plane in [&mut image.red, &mut image.green, &mut image.blue] {
        Zip::indexed(plane).par_for_each(|(y, x), v| {
            *v = (*v * falloff(y, x)).clamp(0.0, 1.0);
        });
    }
}
