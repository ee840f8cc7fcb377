//! Boundary adapter for image files: planar f32 in, PNG/TIFF/JPEG out.

use std::path::Path;

use image::{ImageFormat, Rgb};
use ndarray::Array2;

use crate::frame::{Image, Plane};
use crate::error::Result;

/// Load an RGB image file into the planar f32 model.
pub fn load_image(path: &Path) -> Result<Image> {
    let img = image::open(path)?;
    let rgb = img.to_rgb16();
    let (w, h) = rgb.dimensions();

    let mut red = Array2::<f32>::zeros((h as usize, w as usize));
    let mut green = red.clone();
    let mut blue = red.clone();

    for (x, y, pixel) in rgb.enumerate_pixels() {
        let (row, col) = (y as usize, x as usize);
        red[[row, col]] = pixel.0[0] as f32 / 65535.0;
        green[[row, col]] = pixel.0[1] as f32 / 65535.0;
        blue[[row, col]] = pixel.0[2] as f32 / 65535.0;
    }

    Image::from_planes(red, green, blue)
}

/// Save as 16-bit RGB TIFF/PNG.
fn save_rgb16(image: &Image, path: &Path) -> Result<()> {
    let (h, w) = (image.height(), image.width());

    let mut pixels: Vec<u16> = Vec::with_capacity(h * w * 3);
    for row in 0..h {
        for col in 0..w {
            for plane in [&image.red, &image.green, &image.blue] {
                pixels.push(quantize16(plane, row, col));
            }
        }
    }

    let img = image::ImageBuffer::<Rgb<u16>, Vec<u16>>::from_raw(w as u32, h as u32, pixels)
        .expect("buffer size matches dimensions");
    img.save(path)?;
    Ok(())
}

/// Save as 8-bit RGB, forcing the given format.
fn save_rgb8(image: &Image, path: &Path, format: ImageFormat) -> Result<()> {
    let (h, w) = (image.height(), image.width());

    let mut img = image::RgbImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let r = (image.red[[row, col]].clamp(0.0, 1.0) * 255.0).round() as u8;
            let g = (image.green[[row, col]].clamp(0.0, 1.0) * 255.0).round() as u8;
            let b = (image.blue[[row, col]].clamp(0.0, 1.0) * 255.0).round() as u8;
            img.put_pixel(col as u32, row as u32, Rgb([r, g, b]));
        }
    }
    img.save_with_format(path, format)?;
    Ok(())
}

fn quantize16(plane: &Plane, row: usize, col: usize) -> u16 {
    (plane[[row, col]].clamp(0.0, 1.0) * 65535.0).round() as u16
}

/// Save an image, choosing the format from the file extension.
/// PNG and TIFF keep 16 bits; JPEG falls back to 8.
pub fn save_image(image: &Image, path: &Path) -> Result<()> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => save_rgb8(image, path, ImageFormat::Jpeg),
        _ => save_rgb16(image, path),
    }
}
