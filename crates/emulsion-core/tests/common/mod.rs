use emulsion_core::frame::{Image, Plane};
use ndarray::Array2;

/// Deterministic test image: horizontal luminance ramp with a different
/// tint per channel so channel mixups show up in comparisons.
pub fn gradient_image(height: usize, width: usize) -> Image {
    let ramp = |scale: f32, offset: f32| {
        Array2::from_shape_fn((height, width), |(y, x)| {
            let h = (y as f32 / height.max(1) as f32) * 0.2;
            ((x as f32 / (width - 1).max(1) as f32) * scale + h + offset).clamp(0.0, 1.0)
        })
    };
    Image::from_planes(ramp(0.8, 0.1), ramp(0.7, 0.05), ramp(0.6, 0.15))
        .expect("planes share shape")
}

/// Uniform image with the given color.
pub fn flat_image(height: usize, width: usize, rgb: [f32; 3]) -> Image {
    Image::from_planes(
        Array2::from_elem((height, width), rgb[0]),
        Array2::from_elem((height, width), rgb[1]),
        Array2::from_elem((height, width), rgb[2]),
    )
    .expect("planes share shape")
}

/// Largest absolute per-pixel difference over all three channels.
pub fn max_diff(a: &Image, b: &Image) -> f32 {
    let plane_diff = |p: &Plane, q: &Plane| {
        p.iter()
            .zip(q.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0f32, f32::max)
    };
    plane_diff(&a.red, &b.red)
        .max(plane_diff(&a.green, &b.green))
        .max(plane_diff(&a.blue, &b.blue))
}

pub fn assert_images_equal(a: &Image, b: &Image) {
    assert_eq!(a.width(), b.width());
    assert_eq!(a.height(), b.height());
    let diff = max_diff(a, b);
    assert!(diff == 0.0, "images differ, max diff {diff}");
}

pub fn assert_images_close(a: &Image, b: &Image, tolerance: f32) {
    assert_eq!(a.width(), b.width());
    assert_eq!(a.height(), b.height());
    let diff = max_diff(a, b);
    assert!(diff <= tolerance, "max diff {diff} exceeds {tolerance}");
}
