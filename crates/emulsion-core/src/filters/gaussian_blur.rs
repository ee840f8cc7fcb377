use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::frame::Plane;

/// Separable Gaussian blur with clamp-to-edge borders.
///
/// `sigma <= 0` returns the input unchanged.
pub fn gaussian_blur(data: &Plane, sigma: f32) -> Plane {
    if sigma <= 0.0 {
        return data.clone();
    }
    let kernel = make_gaussian_kernel(sigma);
    let row_pass = convolve_axis(data, &kernel, Axis::Rows);
    convolve_axis(&row_pass, &kernel, Axis::Cols)
}

fn make_gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 3.0).ceil() as usize;
    let size = 2 * radius + 1;
    let mut kernel = vec![0.0f32; size];
    let s2 = 2.0 * sigma * sigma;
    let mut sum = 0.0f32;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f32 - radius as f32;
        *k = (-x * x / s2).exp();
        sum += *k;
    }
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

#[derive(Clone, Copy)]
enum Axis {
    Rows,
    Cols,
}

fn convolve_axis(data: &Plane, kernel: &[f32], axis: Axis) -> Plane {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;

    let tap = |row: usize, col: usize, ki: usize| -> f32 {
        let offset = ki as isize - radius as isize;
        match axis {
            Axis::Rows => {
                let src = (col as isize + offset).clamp(0, w as isize - 1) as usize;
                data[[row, src]]
            }
            Axis::Cols => {
                let src = (row as isize + offset).clamp(0, h as isize - 1) as usize;
                data[[src, col]]
            }
        }
    };

    let convolve_row = |row: usize| -> Vec<f32> {
        (0..w)
            .map(|col| {
                kernel
                    .iter()
                    .enumerate()
                    .map(|(ki, &kv)| tap(row, col, ki) * kv)
                    .sum()
            })
            .collect()
    };

    let rows: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(convolve_row).collect()
    } else {
        (0..h).map(convolve_row).collect()
    };

    let mut result = Array2::<f32>::zeros((h, w));
    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, val) in row_data.into_iter().enumerate() {
            result[[row, col]] = val;
        }
    }
    result
}
