use ndarray::Array2;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::error::{EmulsionError, Result};

/// A single color plane. Pixel values are f32 in [0.0, 1.0],
/// row-major, shape = (height, width).
pub type Plane = Array2<f32>;

/// Planar RGB image. All three planes share one shape.
#[derive(Clone, Debug)]
pub struct Image {
    pub red: Plane,
    pub green: Plane,
    pub blue: Plane,
}

impl Image {
    /// Build an image from three planes, validating that they agree in shape.
    pub fn from_planes(red: Plane, green: Plane, blue: Plane) -> Result<Self> {
        if red.dim() != green.dim() || red.dim() != blue.dim() {
            return Err(EmulsionError::MismatchedPlanes);
        }
        let (h, w) = red.dim();
        if h == 0 || w == 0 {
            return Err(EmulsionError::InvalidDimensions {
                width: w,
                height: h,
            });
        }
        Ok(Self { red, green, blue })
    }

    /// Uniform gray image, useful as a neutral canvas.
    pub fn filled(height: usize, width: usize, value: f32) -> Self {
        Self {
            red: Array2::from_elem((height, width), value),
            green: Array2::from_elem((height, width), value),
            blue: Array2::from_elem((height, width), value),
        }
    }

    pub fn width(&self) -> usize {
        self.red.ncols()
    }

    pub fn height(&self) -> usize {
        self.red.nrows()
    }

    /// BT.601 luminance plane.
    pub fn luminance(&self) -> Plane {
        ndarray::Zip::from(&self.red)
            .and(&self.green)
            .and(&self.blue)
            .map_collect(|&r, &g, &b| LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b)
    }

    /// Apply a per-pixel RGB transform in place.
    pub fn map_pixels<F>(&mut self, mut f: F)
    where
        F: FnMut(f32, f32, f32) -> (f32, f32, f32),
    {
        ndarray::Zip::from(&mut self.red)
            .and(&mut self.green)
            .and(&mut self.blue)
            .for_each(|r, g, b| {
                let (nr, ng, nb) = f(*r, *g, *b);
                *r = nr;
                *g = ng;
                *b = nb;
            });
    }

    /// Downscale so the long edge is at most `max_dimension`, preserving
    /// aspect ratio. Returns a clone when already small enough.
    pub fn resize_to_fit(&self, max_dimension: usize) -> Self {
        let (h, w) = (self.height(), self.width());
        let long_edge = h.max(w);
        if long_edge <= max_dimension || max_dimension == 0 {
            return self.clone();
        }
        let scale = max_dimension as f32 / long_edge as f32;
        let nh = ((h as f32 * scale).round() as usize).max(1);
        let nw = ((w as f32 * scale).round() as usize).max(1);
        Self {
            red: resize_plane(&self.red, nh, nw),
            green: resize_plane(&self.green, nh, nw),
            blue: resize_plane(&self.blue, nh, nw),
        }
    }
}

/// Bilinear plane resize.
pub fn resize_plane(src: &Plane, nh: usize, nw: usize) -> Plane {
    let (h, w) = src.dim();
    let y_ratio = h as f32 / nh as f32;
    let x_ratio = w as f32 / nw as f32;
    Array2::from_shape_fn((nh, nw), |(y, x)| {
        let sy = ((y as f32 + 0.5) * y_ratio - 0.5).max(0.0);
        let sx = ((x as f32 + 0.5) * x_ratio - 0.5).max(0.0);
        sample_bilinear(src, sy, sx)
    })
}

/// Bilinear sample with clamp-to-edge addressing.
pub fn sample_bilinear(plane: &Plane, y: f32, x: f32) -> f32 {
    let (h, w) = plane.dim();
    let y0 = (y.floor() as isize).clamp(0, h as isize - 1) as usize;
    let x0 = (x.floor() as isize).clamp(0, w as isize - 1) as usize;
    let y1 = (y0 + 1).min(h - 1);
    let x1 = (x0 + 1).min(w - 1);
    let fy = (y - y0 as f32).clamp(0.0, 1.0);
    let fx = (x - x0 as f32).clamp(0.0, 1.0);

    let p00 = plane[[y0, x0]];
    let p10 = plane[[y0, x1]];
    let p01 = plane[[y1, x0]];
    let p11 = plane[[y1, x1]];

    p00 * (1.0 - fx) * (1.0 - fy) + p10 * fx * (1.0 - fy) + p01 * (1.0 - fx) * fy + p11 * fx * fy
}
