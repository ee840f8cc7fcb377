//! Stage 11: barrel/pincushion lens distortion with chromatic aberration.
//!
//! Inverse mapping: for every destination pixel we compute the warped
//! source position and sample bilinearly. The `scale` factor zooms in to
//! crop the edges the warp exposes; chromatic aberration offsets the
//! effective radial factor per channel.

use ndarray::{Array2, Zip};

use crate::frame::{sample_bilinear, Image, Plane};
use crate::preset::LensDistortion;

pub fn apply(image: &mut Image, lens: &LensDistortion) {
    if !lens.enabled {
        return;
    }

    let (h, w) = (image.height(), image.width());
    let cx = w as f32 / 2.0;
    let cy = h as f32 / 2.0;
    let max_radius = (cx * cx + cy * cy).sqrt();
    let inv_scale = 1.0 / lens.scale.max(1e-3);

    // CA: red is warped slightly more than blue, green is the reference.
    let ca = [lens.ca_strength, 0.0, -lens.ca_strength];

    let warp_plane = |src: &Plane, ca_offset: f32| -> Plane {
        Array2::from_shape_fn((h, w), |(y, x)| {
            let dx = (x as f32 - cx) * inv_scale;
            let dy = (y as f32 - cy) * inv_scale;
            let r2 = (dx * dx + dy * dy) / (max_radius * max_radius);
            let factor = 1.0 + (lens.k1 + ca_offset) * r2 + lens.k2 * r2 * r2;
            let sx = cx + dx * factor;
            let sy = cy + dy * factor;
            if sx < 0.0 || sy < 0.0 || sx > (w - 1) as f32 || sy > (h - 1) as f32 {
                0.0
            } else {
                sample_bilinear(src, sy, sx)
            }
        })
    };

    let mut red = warp_plane(&image.red, ca[0]);
    let mut green = warp_plane(&image.green, ca[1]);
    let mut blue = warp_plane(&image.blue, ca[2]);

    Zip::from(&mut red).for_each(|v| *v = v.clamp(0.0, 1.0));
    Zip::from(&mut green).for_each(|v| *v = v.clamp(0.0, 1.0));
    Zip::from(&mut blue).for_each(|v| *v = v.clamp(0.0, 1.0));

    image.red = red;
    image.green = green;
    image.blue = blue;
}
